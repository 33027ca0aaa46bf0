use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use landscape_lab_client::api::{HttpUserApi, UserApi};
use landscape_lab_client::error::ApiError;
use landscape_lab_client::models::{Credentials, PasswordChangeRequest, RegistrationRequest};
use landscape_lab_client::terminal::{ConsoleHost, OutputStyle, run_session};
use landscape_lab_client::Dispatcher;

// Canned response for one connection
struct Reply {
    status: &'static str,
    headers: &'static str,
    body: &'static str,
}

fn reply(status: &'static str, body: &'static str) -> Reply {
    Reply {
        status,
        headers: "",
        body,
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

// Helper to read one full request (head and body)
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find_header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|value| value.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

// Serves the replies in order, one connection each, and returns what was asked
async fn serve(replies: Vec<Reply>) -> (Url, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut stream).await);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n{}",
                reply.status,
                reply.body.len(),
                reply.headers,
                reply.body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        }
        requests
    });

    (Url::parse(&format!("http://{}", addr)).unwrap(), handle)
}

fn api(base_url: Url) -> HttpUserApi {
    HttpUserApi::new(base_url, Duration::from_secs(5)).unwrap()
}

fn bob() -> Credentials {
    Credentials {
        username: "bob".into(),
        password: "longenough1".into(),
    }
}

#[tokio::test]
async fn test_login_posts_json() {
    let (base_url, server) = serve(vec![reply("200 OK", r#"{"ok":true}"#)]).await;
    api(base_url).login(&bob()).await.unwrap();

    let requests = server.await.unwrap();
    let request = &requests[0];
    assert!(request.starts_with("POST /api/users/login HTTP/1.1"));
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.contains(r#""username":"bob""#));
    assert!(request.contains(r#""password":"longenough1""#));
}

#[tokio::test]
async fn test_login_rejection_carries_message() {
    let (base_url, server) =
        serve(vec![reply("401 Unauthorized", r#"{"message":"bad creds"}"#)]).await;
    let err = api(base_url).login(&bob()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Application {
            status: 401,
            message: Some("bad creds".into())
        }
    );
    server.await.unwrap();
}

#[tokio::test]
async fn test_register_uses_camel_case_fields() {
    let (base_url, server) = serve(vec![reply("200 OK", "{}")]).await;
    let request = RegistrationRequest {
        username: "bob".into(),
        email: "bob@example.com".into(),
        password: "longenough1".into(),
        confirm_password: "longenough1".into(),
    };
    api(base_url).register(&request).await.unwrap();

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("POST /api/users/register "));
    assert!(requests[0].contains(r#""confirmPassword":"longenough1""#));
}

#[tokio::test]
async fn test_session_cookie_is_replayed() {
    let (base_url, server) = serve(vec![
        Reply {
            status: "200 OK",
            headers: "Set-Cookie: session=abc123; Path=/\r\n",
            body: "{}",
        },
        reply(
            "200 OK",
            r#"[{"id":1,"name":"Garden","created_at":"2024-01-01T00:00:00Z"}]"#,
        ),
    ])
    .await;
    let api = api(base_url);
    api.login(&bob()).await.unwrap();
    let projects = api.projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Garden");

    let requests = server.await.unwrap();
    assert!(requests[1].starts_with("GET /api/users/projects "));
    assert!(requests[1].to_lowercase().contains("cookie: session=abc123"));
}

#[tokio::test]
async fn test_logout_sends_no_body() {
    let (base_url, server) = serve(vec![reply("200 OK", "")]).await;
    api(base_url).logout().await.unwrap();

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("POST /api/users/logout "));
    assert!(requests[0].ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_undecodable_project_list_is_transport_error() {
    let (base_url, server) = serve(vec![reply("200 OK", "<html></html>")]).await;
    let err = api(base_url).projects().await.unwrap_err();
    assert!(err.is_transport());
    server.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = Url::parse(&format!("http://{}", addr)).unwrap();
    let request = PasswordChangeRequest {
        old_password: "old-secret".into(),
        new_password: "new-secret".into(),
        confirm_password: "new-secret".into(),
    };
    let err = api(base_url).change_password(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_terminal_login_flow_against_http() {
    let (base_url, server) = serve(vec![
        reply("200 OK", "{}"),
        reply(
            "200 OK",
            r#"[{"id":1,"name":"Garden","created_at":"2024-01-01T00:00:00Z"}]"#,
        ),
    ])
    .await;
    let mut dispatcher = Dispatcher::new(Arc::new(api(base_url)), "%Y/%-m/%-d");
    let mut host = ConsoleHost::new(Vec::new(), OutputStyle::Html);

    run_session(
        "LOGIN bob longenough1\nQUIT\n".as_bytes(),
        &mut dispatcher,
        &mut host,
    )
    .await
    .unwrap();

    let out = String::from_utf8(host.into_inner()).unwrap();
    assert!(out.contains("[navigate] /api/users/profile"));
    assert_eq!(out.matches("class=\"project-item\"").count(), 1);
    assert!(out.contains("<h4>Garden</h4>"));
    assert!(out.contains("href=\"/projects/1\""));
    assert_eq!(server.await.unwrap().len(), 2);
}
