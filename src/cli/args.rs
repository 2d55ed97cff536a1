use crate::domain::{HtimeCommand, TargetUrl};
use crate::error::Error;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -q / --quiet: 失敗 URL のエラー詳細を出さない（URL と区切りは出す）
    pub quiet: bool,
    /// -v / --verbose: 不具合調査用の JSONL ログを stderr に出力する
    pub verbose: bool,
    /// --no-color: 端末判定に関わらず配色を無効にする
    pub no_color: bool,
    /// --timeout <seconds>: リクエスト単位のタイムアウト（未指定時はクライアント既定の 30 秒）
    pub timeout_secs: Option<u64>,
    pub urls: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            quiet: false,
            verbose: false,
            no_color: false,
            timeout_secs: None,
            urls: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("htime")
        .about("Print the clock time reported by HTTP servers via the Date header")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not print the error message for a failed URL")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("timeout")
                .long("timeout")
                .value_name("seconds")
                .help("Per-request timeout in seconds (default: 30)")
                .value_parser(value_parser!(u64))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("urls")
                .index(1)
                .help("URLs to query")
                .num_args(0..),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let quiet = matches.get_flag("quiet");
    let verbose = matches.get_flag("verbose");
    let no_color = matches.get_flag("no-color");
    let timeout_secs = matches.get_one::<u64>("timeout").copied();
    let urls: Vec<String> = matches
        .get_many::<String>("urls")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Config {
        help,
        quiet,
        verbose,
        no_color,
        timeout_secs,
        urls,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "htime", &mut std::io::stdout());
}

/// Config を HtimeCommand に変換する
pub fn config_to_command(config: Config) -> HtimeCommand {
    if config.help {
        return HtimeCommand::Help;
    }

    let urls = config.urls.into_iter().map(TargetUrl::new).collect();
    HtimeCommand::Probe { urls }
}
