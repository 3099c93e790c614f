//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: command line → typed request → JSON 1.1
//! calls → RECORD/PAGINATION output

use clap::Parser;
use futures::{pin_mut, StreamExt, TryStreamExt};
use gamelift_kit::cli::{Cli, Runner};
use gamelift_kit::http::{call, ClientConfig, GameLiftClient};
use gamelift_kit::operations::{
    DescribeFleetEvents, DescribeFleetEventsInput, DescribeGameSessions,
    DescribeGameSessionsInput,
};
use gamelift_kit::{paginate, paginate_pages, Error, PageOptions};
use serde_json::{json, Value};
use std::io::Write;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GameLiftClient {
    let config = ClientConfig::builder()
        .endpoint(server.uri())
        .no_rate_limit()
        .build()
        .unwrap();
    GameLiftClient::with_config(config).unwrap()
}

async fn run_cli(args: &[&str]) -> (gamelift_kit::Result<()>, Vec<Value>) {
    let cli = Cli::try_parse_from(std::iter::once("gamelift-kit").chain(args.iter().copied()))
        .unwrap();
    let mut out = Vec::new();
    let result = Runner::new(cli).run_with_output(&mut out).await;
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (result, lines)
}

async fn mount_sessions_page(server: &MockServer, request: Value, response: Value) {
    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "GameLift.DescribeGameSessions"))
        .and(body_json(request))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Library Flow
// ============================================================================

#[tokio::test]
async fn test_describe_game_sessions_all_pages() {
    let server = MockServer::start().await;

    mount_sessions_page(
        &server,
        json!({"FleetId": "fleet-1"}),
        json!({
            "GameSessions": [{"GameSessionId": "gs-1"}, {"GameSessionId": "gs-2"}],
            "NextToken": "t1"
        }),
    )
    .await;
    mount_sessions_page(
        &server,
        json!({"FleetId": "fleet-1", "NextToken": "t1"}),
        json!({"GameSessions": [{"GameSessionId": "gs-3"}], "NextToken": ""}),
    )
    .await;

    let client = client_for(&server);
    let request = DescribeGameSessionsInput {
        fleet_id: Some("fleet-1".to_string()),
        ..Default::default()
    };

    let sessions: Vec<_> = paginate(request, PageOptions::new(), |input| {
        let client = &client;
        async move { call::<DescribeGameSessions, _>(client, &input).await }
    })
    .try_collect()
    .await
    .unwrap();

    let ids: Vec<_> = sessions
        .iter()
        .filter_map(|s| s.game_session_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["gs-1", "gs-2", "gs-3"]);
}

#[tokio::test]
async fn test_fleet_events_pages_with_timestamps() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "GameLift.DescribeFleetEvents"))
        .and(body_json(json!({
            "FleetId": "fleet-1",
            "StartTime": 1_700_000_000.0,
            "Limit": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Events": [{
                "EventId": "e-1",
                "EventCode": "FLEET_CREATED",
                "EventTime": 1_700_000_100.5
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = DescribeFleetEventsInput {
        fleet_id: Some("fleet-1".to_string()),
        start_time: chrono::DateTime::from_timestamp(1_700_000_000, 0),
        ..Default::default()
    };

    let pages: Vec<_> = paginate_pages(request, PageOptions::new().page_size(1), |input| {
        let client = &client;
        async move { call::<DescribeFleetEvents, _>(client, &input).await }
    })
    .try_collect()
    .await
    .unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    let event = &pages[0].items[0];
    assert_eq!(event.event_id.as_deref(), Some("e-1"));
    assert_eq!(
        event.event_time.map(|t| t.timestamp_millis()),
        Some(1_700_000_100_500)
    );
}

#[tokio::test]
async fn test_cancel_between_pages() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "GameSessions": [{"GameSessionId": "gs-1"}],
            "NextToken": "more"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let options = PageOptions::new().cancel_on(cancel.clone());

    let stream = paginate_pages(DescribeGameSessionsInput::default(), options, |input| {
        let client = &client;
        async move { call::<DescribeGameSessions, _>(client, &input).await }
    });
    pin_mut!(stream);

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.next_token.as_deref(), Some("more"));

    cancel.cancel();
    assert!(matches!(stream.next().await, Some(Err(Error::Cancelled))));
    assert!(stream.next().await.is_none());
}

// ============================================================================
// Command-Line Flow
// ============================================================================

#[tokio::test]
async fn test_cli_invoke_with_limit() {
    let server = MockServer::start().await;

    mount_sessions_page(
        &server,
        json!({"FleetId": "fleet-1", "Limit": 2}),
        json!({
            "GameSessions": [{"GameSessionId": "gs-1"}, {"GameSessionId": "gs-2"}],
            "NextToken": "t1"
        }),
    )
    .await;

    let uri = server.uri();
    let (result, lines) = run_cli(&[
        "--endpoint",
        &uri,
        "invoke",
        "describe-game-sessions",
        "--input-json",
        r#"{"FleetId":"fleet-1"}"#,
        "--limit",
        "2",
        "--page-size",
        "2",
    ])
    .await;
    result.unwrap();

    let records: Vec<_> = lines
        .iter()
        .filter(|m| m["type"] == "RECORD")
        .map(|m| m["record"]["GameSessionId"].clone())
        .collect();
    assert_eq!(records, vec![json!("gs-1"), json!("gs-2")]);
    assert_eq!(
        lines.last().unwrap(),
        &json!({"type": "PAGINATION", "pagination": {"fetched": 2, "next_token": "t1"}})
    );
}

#[tokio::test]
async fn test_cli_config_file_and_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Amz-Target", "GameLift.DescribeMatchmaking"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "com.amazonaws.gamelift#InvalidRequestException",
            "message": "Ticket not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "endpoint: {}", server.uri()).unwrap();
    writeln!(file, "http:\n  rate_limit: null").unwrap();
    let config_path = file.path().to_str().unwrap().to_string();

    let (result, lines) = run_cli(&[
        "--config",
        &config_path,
        "invoke",
        "DescribeMatchmaking",
        "--input-json",
        r#"{"TicketIds":["ticket-404"]}"#,
    ])
    .await;

    let err = result.unwrap_err();
    let service = err.as_service().unwrap();
    assert_eq!(service.code, "InvalidRequestException");
    assert_eq!(err.to_string(), "Service error: InvalidRequestException: Ticket not found");
    assert!(lines.is_empty());
}
