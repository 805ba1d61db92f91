use askbox_http_service::{HttpAskService, HttpServiceConfigBuilder};
use askbox_model::{
    AskRequest, AskService, ErrorKind, Message, ServiceError,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one request with the given status line and body, and
/// hands back the raw request it received.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        String::from_utf8(raw).unwrap()
    });
    (base_url, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn http_service(base_url: String) -> HttpAskService {
    HttpAskService::new(HttpServiceConfigBuilder::with_base_url(base_url).build())
}

fn hello_request() -> AskRequest {
    AskRequest {
        question: "Hello".to_owned(),
        history: vec![Message::user("Hello")],
    }
}

#[tokio::test]
async fn test_answer() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"answer":"Hi"}"#).await;
    let service = http_service(base_url);

    let resp = service.ask(&hello_request()).await.unwrap();
    assert_eq!(resp.answer, "Hi");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /ask HTTP/1.1\r\n"));
    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let body: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "question": "Hello",
            "history": [{ "role": "user", "content": "Hello" }],
        })
    );
}

#[tokio::test]
async fn test_bad_status() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
    let service = http_service(base_url);

    let err = service.ask(&hello_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Status);
}

#[tokio::test]
async fn test_malformed_answer() {
    let (base_url, _server) =
        serve_once("200 OK", r#"{"text":"Hi"}"#).await;
    let service = http_service(base_url);

    let err = service.ask(&hello_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let service = http_service(base_url);

    let err = service.ask(&hello_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
