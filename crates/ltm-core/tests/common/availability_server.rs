//! Minimal HTTP/1.1 server speaking the availability JSON contract for
//! integration tests.
//!
//! Routes on the percent-decoded `url` query parameter and serves a canned
//! status/body per target. Targets without a canned answer get an empty
//! `archived_snapshots` object, the endpoint's shape for "no capture".

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Canned answer for one target URL.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Body of a hit for `archived` captured at `timestamp`.
pub fn found_body(archived: &str, timestamp: &str) -> String {
    format!(
        r#"{{"url": "ignored", "archived_snapshots": {{"closest": {{"available": true, "url": "{archived}", "timestamp": "{timestamp}", "status": "200"}}}}}}"#
    )
}

/// Starts a server in a background thread. Returns the endpoint base URL
/// (e.g. "http://127.0.0.1:12345/wayback/available"). The server runs until
/// the process exits.
pub fn start(responses: HashMap<String, CannedResponse>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let responses = Arc::new(responses);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let responses = Arc::clone(&responses);
            thread::spawn(move || handle(stream, &responses));
        }
    });
    format!("http://127.0.0.1:{}/wayback/available", port)
}

fn handle(mut stream: std::net::TcpStream, responses: &HashMap<String, CannedResponse>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let canned = requested_url(request)
        .and_then(|target| responses.get(&target).cloned())
        .unwrap_or_else(|| CannedResponse::ok(r#"{"archived_snapshots": {}}"#));

    let reason = match canned.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        canned.status,
        reason,
        canned.body.len(),
        canned.body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Percent-decoded value of the `url` query parameter in the request line.
fn requested_url(request: &str) -> Option<String> {
    let line = request.lines().next()?;
    let path = line.split_whitespace().nth(1)?;
    let query = path.split_once('?')?.1;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "url")
        .map(|(_, value)| value.into_owned())
}
