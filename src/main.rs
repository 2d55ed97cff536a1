mod adapter;
mod cli;
mod domain;
mod error;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::HtimeCommand;
use error::Error;
use ports::inbound::UseCaseRunner;
use ports::outbound::{now_iso8601, LogLevel, LogRecord};
use wiring::{wire_htime, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result = match cmd {
            HtimeCommand::Help => {
                print_help();
                Ok(0)
            }
            HtimeCommand::Probe { urls } => self.app.probe_use_case.run(&urls),
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &HtimeCommand) -> &'static str {
    match cmd {
        HtimeCommand::Help => "help",
        HtimeCommand::Probe { .. } => "probe",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("htime: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wire_htime(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: htime [options] <url>...");
}

fn print_help() {
    println!("Usage: htime [options] <url>...");
    println!("Options:");
    println!("  -h, --help             Show this help message");
    println!("  -q, --quiet            Do not print the error message for a failed URL");
    println!("  -v, --verbose          Emit verbose debug logs to stderr (for troubleshooting)");
    println!("  --no-color             Disable colored output");
    println!("  --timeout <seconds>    Per-request timeout in seconds (default: 30)");
    println!("  --generate <shell>     Generate shell completion script (bash, zsh, fish). Source the output to enable tab completion.");
    println!();
    println!("Environment:");
    println!("  HTIME_LOG    Append JSONL debug logs to this file.");
    println!("  NO_COLOR     Disable colored output (same as --no-color).");
    println!();
    println!("Description:");
    println!("  Send an HTTP GET to each URL, read the Date response header, and print");
    println!("  the server's clock converted to the local time zone, one line per URL.");
    println!("  A failing URL prints its own error line and affects neither the other");
    println!("  URLs nor the exit status.");
    println!();
    println!("Examples:");
    println!("  htime https://example.com");
    println!("  htime -q https://example.com https://www.ietf.org");
    println!("  htime --timeout 5 https://slow.example.com");
}
