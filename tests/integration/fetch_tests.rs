use crate::test_fetcher;
use reqwest::StatusCode;
use urlhash::pipeline::{fingerprint, process_target};
use urlhash::{Fetch, FetchError, Target};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_ok_returns_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher();
    let target = Target::new(format!("{}/answer", mock_server.uri()));

    let body = fetcher.fetch(&target).await.expect("fetch ok");
    assert_eq!(body, b"42");
}

#[tokio::test]
async fn test_ok_response_yields_fingerprint_of_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/answer"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher();
    let target = Target::new(format!("{}/answer", mock_server.uri()));

    let outcome = process_target(&fetcher, target).await;
    assert!(outcome.is_success());
    assert_eq!(outcome.fingerprint(), Some(fingerprint(b"42")));
    assert!(outcome
        .to_string()
        .ends_with(" a1d0c6e83f027327d8461063f4ac58a6"));
}

#[tokio::test]
async fn test_server_error_is_status_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher();
    let target = Target::new(format!("{}/broken", mock_server.uri()));

    let err = fetcher.fetch(&target).await.unwrap_err();
    assert_eq!(err, FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR));

    let outcome = process_target(&fetcher, target).await;
    assert!(!outcome.is_success());
    assert!(outcome.to_string().contains("500"));
}

#[tokio::test]
async fn test_non_200_success_status_is_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher();
    let target = Target::new(mock_server.uri());

    let err = fetcher.fetch(&target).await.unwrap_err();
    assert_eq!(err, FetchError::Status(StatusCode::NO_CONTENT));
}

#[tokio::test]
async fn test_target_without_scheme_gets_http() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let host = mock_server
        .uri()
        .strip_prefix("http://")
        .expect("mock server uses http")
        .to_string();
    let raw = format!("{}/ok", host);

    let fetcher = test_fetcher();
    let outcome = process_target(&fetcher, Target::new(raw.clone())).await;

    assert_eq!(outcome.fingerprint(), Some(fingerprint(b"hello")));
    // Output keeps the caller's spelling
    assert_eq!(outcome.target().original(), raw);
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "urlhash-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ua"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = test_fetcher();
    let body = fetcher.fetch(&Target::new(mock_server.uri())).await.unwrap();
    assert_eq!(body, b"ua");
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    // Grab a free port, then close the listener so nothing answers on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = test_fetcher();
    let result = fetcher.fetch(&Target::new(format!("http://{}/", addr))).await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_truncated_body_is_body_failure() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // Promises 100 bytes, sends 2, then hangs up
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n42")
                .await;
            let _ = socket.shutdown().await;
        }
    });

    let fetcher = test_fetcher();
    let target = Target::new(format!("http://{}/short", addr));

    let result = fetcher.fetch(&target).await;
    assert!(matches!(result, Err(FetchError::Body(_))), "{:?}", result);

    let outcome = process_target(&fetcher, target).await;
    assert!(!outcome.is_success());
    assert_eq!(outcome.fingerprint(), None);
}
