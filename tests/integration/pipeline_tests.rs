use crate::test_fetcher;
use std::collections::HashSet;
use urlhash::pipeline::{fingerprint, DispatchOptions, Dispatcher};
use urlhash::{run, LineWriter, Outcome};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_mixed_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/ok/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/fail/\d+$"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mixed_run_accounts_for_every_target() {
    let mock_server = mount_mixed_server().await;
    let base = mock_server.uri();

    let mut input = Vec::new();
    for i in 0..12 {
        let kind = if i % 3 == 0 { "fail" } else { "ok" };
        input.push(format!("{}/{}/{}", base, kind, i));
    }

    let outcomes = run(input.clone(), 4, test_fetcher()).await.unwrap();
    assert_eq!(outcomes.len(), input.len());

    let seen: HashSet<String> = outcomes
        .iter()
        .map(|o| o.target().original().to_string())
        .collect();
    assert_eq!(seen, input.iter().cloned().collect::<HashSet<_>>());

    for outcome in &outcomes {
        if outcome.target().original().contains("/fail/") {
            assert!(!outcome.is_success());
            assert!(outcome.to_string().contains("500"));
        } else {
            assert_eq!(outcome.fingerprint(), Some(fingerprint(b"42")));
        }
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), input.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_more_parallelism_than_targets() {
    let mock_server = mount_mixed_server().await;
    let base = mock_server.uri();
    let input = vec![
        format!("{}/ok/1", base),
        format!("{}/ok/2", base),
        format!("{}/fail/3", base),
    ];

    let dispatcher = Dispatcher::new(test_fetcher(), DispatchOptions::new(10));
    let collector = dispatcher.spawn(input);
    assert_eq!(collector.workers(), 3);

    let mut outcomes: Vec<Outcome> = Vec::new();
    let summary = collector.drain_into(&mut outcomes).await.unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.workers, 3);
}

#[tokio::test]
async fn test_empty_run_completes_immediately() {
    let outcomes = run(Vec::<String>::new(), 10, test_fetcher()).await.unwrap();
    assert!(outcomes.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unreachable_and_invalid_targets_still_reported() {
    let mock_server = mount_mixed_server().await;
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let input = vec![
        format!("{}/ok/1", mock_server.uri()),
        format!("http://{}/", dead),
        String::new(),
    ];

    let outcomes = run(input, 2, test_fetcher()).await.unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes.iter().filter(|o| o.is_success()).count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_line_output_format() {
    let mock_server = mount_mixed_server().await;
    let ok = format!("{}/ok/7", mock_server.uri());

    let dispatcher = Dispatcher::new(test_fetcher(), DispatchOptions::new(2));
    let collector = dispatcher.spawn(vec![ok.clone()]);

    let mut writer = LineWriter::new(Vec::new());
    collector.drain_into(&mut writer).await.unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(text, format!("{} a1d0c6e83f027327d8461063f4ac58a6\n", ok));
}
