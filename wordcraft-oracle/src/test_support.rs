//! One-shot HTTP responder for exercising the reqwest clients

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve one canned HTTP response and hand back the raw request text
pub(crate) async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut request = String::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.push_str(&String::from_utf8_lossy(&buf[..n]));
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        let reply = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        request
    });
    (url, handle)
}

fn request_complete(raw: &str) -> bool {
    let Some(split) = raw.find("\r\n\r\n") else {
        return false;
    };
    let length = raw[..split]
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    raw.len() >= split + 4 + length
}
