//! A canned HTTP/1.1 server for exercising the fetcher without a network.
//!
//! The server runs on a background thread bound to `127.0.0.1:0` and answers
//! every connection with the same status and body. It works from async unit
//! tests and from integration tests that spawn the binary alike.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Local server answering every request with one canned response.
pub struct CannedServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CannedServer {
    /// Serve `status` with `body` to every connection.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let response = Arc::new(render_response(status, &body.into()));
        Self::spawn(move |mut stream, requests| {
            let request = read_request(&mut stream);
            requests.lock().unwrap().push(request);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        })
    }

    /// Accept connections but never answer them.
    pub fn silent() -> Self {
        let held = Arc::new(Mutex::new(Vec::new()));
        Self::spawn(move |mut stream, requests| {
            let request = read_request(&mut stream);
            requests.lock().unwrap().push(request);
            held.lock().unwrap().push(stream);
        })
    }

    /// A URL on a local port nothing listens on.
    pub fn unused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/")
    }

    fn spawn<F>(handler: F) -> Self
    where
        F: Fn(TcpStream, &Mutex<Vec<String>>) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let shared = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handler(stream, &shared);
            }
        });

        Self {
            addr,
            requests,
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Raw head of the most recent request.
    pub fn last_request(&self) -> Option<String> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of requests received.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

fn render_response(status: u16, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Status",
    };
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Read up to the end of the request head. GET requests carry no body.
fn read_request(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
