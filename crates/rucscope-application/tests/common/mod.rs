//! Scripted HTTP server for end-to-end tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use rucscope_core::config::ClientConfig;
use rucscope_infrastructure::HttpApiBackend;

/// A canned reply: status line (e.g. `"200 OK"`) and JSON body.
pub type Reply = (&'static str, String);

/// Serves `replies` in order, one connection each, and returns every
/// request it received (head and body).
pub async fn serve_script(replies: Vec<Reply>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in replies {
            let (mut socket, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut socket).await);

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
        requests
    });

    (base_url, handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut received = Vec::new();
    let mut buf = [0u8; 1024];
    let head_end = loop {
        if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break received.len();
        }
        received.extend_from_slice(&buf[..n]);
    };

    let head = String::from_utf8_lossy(&received[..head_end]).to_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    while received.len() < head_end + content_length {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        received.extend_from_slice(&buf[..n]);
    }

    String::from_utf8_lossy(&received).to_string()
}

pub fn http_backend(base_url: &str) -> HttpApiBackend {
    let config = ClientConfig {
        api_url: base_url.to_string(),
        request_timeout_secs: 5,
        ..ClientConfig::default()
    };
    HttpApiBackend::new(&config).unwrap()
}

pub fn login_ok() -> Reply {
    (
        "200 OK",
        r#"{"message":"ok","accessToken":"t1","user":{"id":"u1","name":"Ana","email":"a@x.com","role":"admin"}}"#
            .to_string(),
    )
}

/// A log page with `rows` entries under the given pagination.
pub fn logs_page(page: u32, limit: u32, total: u32, rows: u32) -> Reply {
    let total_pages = total.div_ceil(limit);
    let data: Vec<String> = (1..=rows)
        .map(|n| {
            format!(
                r#"{{"id":"l{n}","endpoint":"consulta_ruc","parameter":"20100070970","ip":"10.0.0.1","userAgent":null,"country":"PE","statusCode":200,"responseTime":15,"success":true,"createdAt":"2024-05-01T12:00:00Z"}}"#
            )
        })
        .collect();
    (
        "200 OK",
        format!(
            r#"{{"data":[{}],"pagination":{{"page":{page},"limit":{limit},"total":{total},"totalPages":{total_pages},"hasNext":{},"hasPrev":{}}}}}"#,
            data.join(","),
            page < total_pages,
            page > 1
        ),
    )
}

pub fn error_reply(status: &'static str, message: &str) -> Reply {
    (status, format!(r#"{{"error":"{message}"}}"#))
}
