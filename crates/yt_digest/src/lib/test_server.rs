//! Minimal HTTP/1.1 server for exercising the http clients against canned
//! responses.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

pub struct CannedResponse {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into(),
        }
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
        }
    }
}

/// Answers each connection with the next queued response (404 once the queue
/// runs dry) and records the head (request line and headers) of every
/// request it receives.
pub struct TestServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<VecDeque<CannedResponse>>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(Mutex::new(VecDeque::new()));
        let seen = requests.clone();
        let queued = responses.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let head = read_request_head(&mut socket).await;
                seen.lock().unwrap().push(head);

                let response = queued
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| CannedResponse::json(404, "{}"));
                let reply = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.content_type,
                    response.body.len(),
                    response.body
                );
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            responses,
        }
    }

    pub fn respond(&self, response: CannedResponse) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Request lines (`GET /path?query HTTP/1.1`) received so far
    pub fn request_lines(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|head| head.lines().next().map(str::to_string))
            .collect()
    }
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return String::from_utf8_lossy(&buf).into_owned();
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).into_owned();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        // drain the body so the client never sees a reset mid-upload
        while buf.len() < end + 4 + content_length {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        return head;
    }
}
