//! Minimal HTTP/1.1 server that answers Range GETs for integration tests.
//!
//! Serves a single static body for every path. Responds to `Range: bytes=a-b`
//! with 206 Partial Content, counts requests, and records request paths.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeServerOptions {
    /// If set, every request is answered with this status and an empty body.
    pub fail_status: Option<u16>,
}

/// Handle to a running server. The server lives until the process exits.
pub struct RangeServer {
    /// Base URL, e.g. "http://127.0.0.1:12345/".
    pub url: String,
    requests: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl RangeServer {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

pub fn start(body: Vec<u8>) -> RangeServer {
    start_with_options(body, RangeServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: RangeServerOptions) -> RangeServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(AtomicUsize::new(0));
    let paths = Arc::new(Mutex::new(Vec::new()));
    {
        let requests = Arc::clone(&requests);
        let paths = Arc::clone(&paths);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let body = Arc::clone(&body);
                let requests = Arc::clone(&requests);
                let paths = Arc::clone(&paths);
                thread::spawn(move || handle(stream, &body, opts, &requests, &paths));
            }
        });
    }
    RangeServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
        paths,
    }
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    opts: RangeServerOptions,
    requests: &AtomicUsize,
    paths: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path, range) = parse_request(request);
    requests.fetch_add(1, Ordering::SeqCst);
    paths.lock().unwrap().push(path.to_string());

    if let Some(status) = opts.fail_status {
        let response = format!(
            "HTTP/1.1 {} Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let total = body.len() as u64;
    let (status, slice) = match range {
        Some((start, end_incl)) => {
            let end_incl = end_incl.min(total.saturating_sub(1));
            if start > end_incl || start >= total {
                ("416 Range Not Satisfiable", &body[0..0])
            } else {
                ("206 Partial Content", &body[start as usize..=end_incl as usize])
            }
        }
        None => ("200 OK", body),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nAccept-Ranges: bytes\r\nConnection: close\r\n\r\n",
        status,
        slice.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(slice);
}

/// Returns (method, path, optional (start, end_inclusive) for `Range: bytes=X-Y`).
fn parse_request(request: &str) -> (&str, &str, Option<(u64, u64)>) {
    let mut lines = request.lines();
    let mut first = lines.next().unwrap_or("").split_whitespace();
    let method = first.next().unwrap_or("");
    let path = first.next().unwrap_or("");
    let mut range = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("range") {
                if let Some(part) = value.trim().strip_prefix("bytes=") {
                    if let Some((a, b)) = part.split_once('-') {
                        let start = a.trim().parse::<u64>().unwrap_or(0);
                        let end = b.trim().parse::<u64>().unwrap_or(u64::MAX);
                        range = Some((start, end));
                    }
                }
            }
        }
    }
    (method, path, range)
}
