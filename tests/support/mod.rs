//! Shared test fixtures: a delay-capable echo server and a recording logger.
//!
//! mockito covers endpoint mocking, but it cannot hold a response back for a
//! chosen duration; the batch timing properties need that, so a minimal
//! `TcpListener` echo server provides it.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fundlink::api::{Call, CallLogger};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `GET /delay/{ms}/echo/{payload}`: sleeps `ms`, then returns
/// `payload` as the body of a 200 response.
pub struct EchoServer {
    addr: SocketAddr,
}

impl EchoServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(handle(socket));
            }
        });
        Self { addr }
    }

    pub fn url(&self, delay: Duration, payload: &str) -> String {
        format!(
            "http://{}/delay/{}/echo/{}",
            self.addr,
            delay.as_millis(),
            payload
        )
    }
}

async fn handle(mut socket: tokio::net::TcpStream) {
    let mut buf = vec![0u8; 4096];
    let mut read = 0;
    loop {
        match socket.read(&mut buf[read..]).await {
            Ok(0) => break,
            Ok(n) => {
                read += n;
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") || read == buf.len() {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let head = String::from_utf8_lossy(&buf[..read]);
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let mut delay_ms = 0u64;
    let mut payload = "ok".to_string();
    let mut i = 0;
    while i + 1 < segments.len() {
        match segments[i] {
            "delay" => delay_ms = segments[i + 1].parse().unwrap_or(0),
            "echo" => payload = segments[i + 1].to_string(),
            _ => {}
        }
        i += 2;
    }

    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Logger that records every call it sees; safe to share across batch units.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl CallLogger for RecordingLogger {
    fn log(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}
