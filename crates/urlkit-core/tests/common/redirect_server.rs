//! Minimal HTTP/1.1 server with scripted per-path responses for
//! integration tests: redirects, terminal statuses, and plain bodies.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// What a path answers with. HEAD and GET share the script; HEAD omits the body.
#[derive(Debug, Clone)]
pub enum Route {
    /// 3xx with a Location header.
    Redirect { status: u32, location: String },
    /// 200 with this body.
    Body(Vec<u8>),
    /// Bare status, no Location, no body.
    Status(u32),
}

/// Starts a server in a background thread answering per the route table.
/// Returns the base URL (e.g. "http://127.0.0.1:12345"). Unknown paths get
/// 404. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
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
    let (method, path) = match parse_request_line(request) {
        Some(mp) => mp,
        None => return,
    };
    let is_head = method.eq_ignore_ascii_case("HEAD");

    match routes.get(path) {
        Some(Route::Redirect { status, location }) => {
            let response = format!(
                "HTTP/1.1 {} Redirect\r\nLocation: {}\r\nContent-Length: 0\r\n\r\n",
                status, location
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Some(Route::Body(body)) => {
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            if !is_head {
                let _ = stream.write_all(body);
            }
        }
        Some(Route::Status(status)) => {
            let response = format!("HTTP/1.1 {} Scripted\r\nContent-Length: 0\r\n\r\n", status);
            let _ = stream.write_all(response.as_bytes());
        }
        None => {
            let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
        }
    }
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> Option<(&str, &str)> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;
    Some((method, path))
}
