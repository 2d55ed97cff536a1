//! HttpDateSource を 127.0.0.1 上の固定応答サーバで検証する

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::adapter::HttpDateSource;
use crate::domain::{FetchError, TargetUrl};
use crate::ports::outbound::DateHeaderSource;
use crate::usecase::TimeFetcher;

const RESP_ONE_DATE: &str = "HTTP/1.1 200 OK\r\nDate: Wed, 18 Feb 2015 23:16:09 GMT\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
const RESP_NO_DATE: &str =
    "HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
const RESP_TWO_DATES: &str = "HTTP/1.1 200 OK\r\nDate: Wed, 18 Feb 2015 23:16:09 GMT\r\nDate: Wed, 18 Feb 2015 23:16:10 GMT\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
const RESP_BAD_DATE: &str = "HTTP/1.1 200 OK\r\nDate: 2015-02-18T23:16:09Z\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

/// 固定レスポンスを 1 接続分返して閉じる HTTP サーバを起動し、URL を返す
fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{}", addr)
}

/// 接続は受けるが応答しないサーバを起動し、URL を返す
fn serve_black_hole() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(5));
        }
    });
    format!("http://{}", addr)
}

/// 即座に閉じられた（何も listen していない）ポートの URL を返す
fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[test]
fn test_http_source_single_date_header() {
    let url = serve_once(RESP_ONE_DATE);
    let source = HttpDateSource::new(None).unwrap();
    let headers = source.date_headers(&url).unwrap();
    assert_eq!(headers, vec!["Wed, 18 Feb 2015 23:16:09 GMT".to_string()]);
}

#[test]
fn test_http_source_no_date_header() {
    let url = serve_once(RESP_NO_DATE);
    let source = HttpDateSource::new(None).unwrap();
    let headers = source.date_headers(&url).unwrap();
    assert!(headers.is_empty());
}

#[test]
fn test_http_source_duplicate_date_headers_keep_order() {
    let url = serve_once(RESP_TWO_DATES);
    let source = HttpDateSource::new(None).unwrap();
    let headers = source.date_headers(&url).unwrap();
    assert_eq!(
        headers,
        vec![
            "Wed, 18 Feb 2015 23:16:09 GMT".to_string(),
            "Wed, 18 Feb 2015 23:16:10 GMT".to_string(),
        ]
    );
}

#[test]
fn test_http_source_connection_refused() {
    let url = refused_url();
    let source = HttpDateSource::new(None).unwrap();
    let err = source.date_headers(&url).unwrap_err();
    assert!(matches!(err, FetchError::Request { .. }));
    assert!(err.to_string().contains(&url), "error must name the failing URL");
}

#[test]
fn test_http_source_timeout_is_a_request_error() {
    let url = serve_black_hole();
    let source = HttpDateSource::new(Some(Duration::from_millis(200))).unwrap();
    let err = source.date_headers(&url).unwrap_err();
    assert!(matches!(err, FetchError::Request { .. }));
}

#[test]
fn test_fetch_time_over_real_http() {
    use chrono::{TimeZone, Utc};

    let url = serve_once(RESP_ONE_DATE);
    let fetcher = TimeFetcher::new(Arc::new(HttpDateSource::new(None).unwrap()));
    let t = fetcher.fetch_time(&TargetUrl::new(url)).unwrap();
    let expected = Utc.with_ymd_and_hms(2015, 2, 18, 23, 16, 9).unwrap();
    assert_eq!(t.with_timezone(&Utc), expected);
}

#[test]
fn test_fetch_time_over_real_http_bad_date() {
    let url = serve_once(RESP_BAD_DATE);
    let fetcher = TimeFetcher::new(Arc::new(HttpDateSource::new(None).unwrap()));
    let err = fetcher.fetch_time(&TargetUrl::new(url)).unwrap_err();
    match err {
        FetchError::DateParse(raw) => assert_eq!(raw, "2015-02-18T23:16:09Z"),
        other => panic!("unexpected error: {:?}", other),
    }
}
