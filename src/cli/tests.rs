//! Tests for the CLI runner

use super::*;
use crate::config::Backend;
use crate::error::{Error, Result, ServiceError};
use crate::http::Transport;
use crate::types::JsonValue;
use async_trait::async_trait;
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::io::Write as _;
use std::sync::{Arc, Mutex};

/// Replays canned responses and records every call
#[derive(Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<JsonValue>>>,
    calls: Mutex<Vec<(String, JsonValue)>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<JsonValue>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::default(),
        })
    }

    fn calls(&self) -> Vec<(String, JsonValue)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, operation: &str, body: JsonValue) -> Result<JsonValue> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), body));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("no scripted response".to_string())))
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("gamelift-kit").chain(args.iter().copied())).unwrap()
}

async fn run(args: &[&str], transport: &Arc<ScriptedTransport>) -> (Result<()>, Vec<JsonValue>) {
    let runner = Runner::with_transport(parse(args), transport.clone());
    let mut out = Vec::new();
    let result = runner.run_with_output(&mut out).await;
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (result, lines)
}

fn builds_page(ids: &[&str], next: Option<&str>) -> Result<JsonValue> {
    let builds: Vec<_> = ids.iter().map(|id| json!({"BuildId": id})).collect();
    let mut body = json!({ "Builds": builds });
    if let Some(token) = next {
        body["NextToken"] = json!(token);
    }
    Ok(body)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_invoke() {
    let cli = parse(&[
        "--endpoint",
        "http://localhost:9000",
        "invoke",
        "list-builds",
        "--input-json",
        r#"{"Status":"READY"}"#,
        "--limit",
        "10",
        "--page-size",
        "5",
    ]);

    assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:9000"));
    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Invoke(args) => {
            assert_eq!(args.operation, "list-builds");
            assert_eq!(args.limit, Some(10));
            assert_eq!(args.page_size, Some(5));
            assert_eq!(args.next_token, None);
        }
        Commands::Operations => panic!("expected invoke"),
    }
}

#[test]
fn test_parse_rejects_bad_values() {
    let parse_err = |args: &[&str]| {
        Cli::try_parse_from(std::iter::once("gamelift-kit").chain(args.iter().copied())).is_err()
    };

    assert!(parse_err(&["invoke", "list-builds", "--page-size", "0"]));
    assert!(parse_err(&["invoke", "list-builds", "--max-pages", "0"]));
    assert!(parse_err(&["invoke", "list-builds", "--limit", "-1"]));
    assert!(parse_err(&[
        "invoke",
        "list-builds",
        "--input-json",
        "{}",
        "--input-file",
        "req.json"
    ]));
}

#[test]
fn test_parse_backend_flags() {
    let cli = parse(&[
        "--backend",
        "sdk",
        "--region",
        "eu-central-1",
        "--profile",
        "games",
        "operations",
    ]);

    assert_eq!(cli.backend, Some(Backend::Sdk));
    assert_eq!(cli.region.as_deref(), Some("eu-central-1"));
    assert_eq!(cli.profile.as_deref(), Some("games"));
    assert!(Cli::try_parse_from(["gamelift-kit", "--backend", "grpc", "operations"]).is_err());
}

#[test]
fn test_endpoint_flag_follows_backend() {
    let runner = Runner::new(parse(&[
        "--backend",
        "sdk",
        "--endpoint",
        "http://localhost:4566",
        "operations",
    ]));
    let config = runner.load_config().unwrap();
    assert_eq!(config.backend, Backend::Sdk);
    assert_eq!(config.aws.endpoint_url.as_deref(), Some("http://localhost:4566"));
    assert_eq!(config.endpoint, crate::http::DEFAULT_ENDPOINT);

    let runner = Runner::new(parse(&["--endpoint", "http://localhost:9000", "operations"]));
    let config = runner.load_config().unwrap();
    assert_eq!(config.endpoint, "http://localhost:9000");
    assert_eq!(config.aws.endpoint_url, None);
}

// ============================================================================
// Automatic pagination
// ============================================================================

#[tokio::test]
async fn test_invoke_follows_every_page() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1", "b2"], Some("t1")),
        builds_page(&["b3"], None),
    ]);

    let (result, lines) = run(
        &["invoke", "ListBuilds", "--input-json", r#"{"Status":"READY"}"#],
        &transport,
    )
    .await;
    result.unwrap();

    let ids: Vec<_> = lines
        .iter()
        .map(|m| m["record"]["BuildId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["b1", "b2", "b3"]);
    assert!(lines.iter().all(|m| m["type"] == "RECORD"));
    assert!(lines.iter().all(|m| m["operation"] == "ListBuilds"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], ("ListBuilds".to_string(), json!({"Status": "READY"})));
    assert_eq!(
        calls[1].1,
        json!({"Status": "READY", "NextToken": "t1"})
    );
}

#[tokio::test]
async fn test_page_size_is_forwarded() {
    let transport = ScriptedTransport::new(vec![builds_page(&["b1"], None)]);

    let (result, _) = run(&["invoke", "list-builds", "--page-size", "25"], &transport).await;
    result.unwrap();

    assert_eq!(transport.calls()[0].1, json!({"Limit": 25}));
}

// ============================================================================
// Manual pagination
// ============================================================================

#[tokio::test]
async fn test_limit_reports_resume_token() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1", "b2"], Some("t1")),
        builds_page(&["b3", "b4"], Some("t2")),
        builds_page(&["b5"], None),
    ]);

    let (result, lines) = run(&["invoke", "list-builds", "--limit", "3"], &transport).await;
    result.unwrap();

    // limit is a floor on whole pages, not a truncation
    assert_eq!(transport.calls().len(), 2);
    let records = lines.iter().filter(|m| m["type"] == "RECORD").count();
    assert_eq!(records, 4);

    let last = lines.last().unwrap();
    assert_eq!(
        last,
        &json!({"type": "PAGINATION", "pagination": {"fetched": 4, "next_token": "t2"}})
    );
    assert!(lines.iter().any(|m| m["type"] == "LOG"));
}

#[tokio::test]
async fn test_next_token_from_flag_wins_over_body() {
    let transport = ScriptedTransport::new(vec![builds_page(&["b9"], None)]);

    let (result, lines) = run(
        &[
            "invoke",
            "list-builds",
            "--input-json",
            r#"{"NextToken":"from-body"}"#,
            "--next-token",
            "from-flag",
        ],
        &transport,
    )
    .await;
    result.unwrap();

    assert_eq!(transport.calls()[0].1, json!({"NextToken": "from-flag"}));
    assert_eq!(
        lines.last().unwrap(),
        &json!({"type": "PAGINATION", "pagination": {"fetched": 1, "next_token": null}})
    );
}

#[tokio::test]
async fn test_empty_next_token_is_ignored() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1"], None),
        builds_page(&["b2"], None),
    ]);

    let (result, lines) = run(&["invoke", "list-builds", "--next-token", ""], &transport).await;
    result.unwrap();

    assert_eq!(transport.calls()[0].1, json!({}));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["type"], "RECORD");

    let (result, lines) = run(
        &["invoke", "list-builds", "--input-json", r#"{"NextToken":""}"#],
        &transport,
    )
    .await;
    result.unwrap();

    assert_eq!(transport.calls()[1].1, json!({}));
    assert!(lines.iter().all(|m| m["type"] == "RECORD"));
}

#[tokio::test]
async fn test_limit_from_body_is_item_ceiling() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1", "b2"], Some("t1")),
        builds_page(&["b3"], None),
    ]);

    let (result, lines) = run(
        &["invoke", "list-builds", "--input-json", r#"{"Limit":2}"#],
        &transport,
    )
    .await;
    result.unwrap();

    assert_eq!(transport.calls().len(), 1);
    assert_eq!(transport.calls()[0].1, json!({}));
    assert_eq!(lines.last().unwrap()["pagination"]["next_token"], "t1");
}

#[tokio::test]
async fn test_limit_with_empty_first_page_stops() {
    let transport = ScriptedTransport::new(vec![builds_page(&[], Some("t1"))]);

    let (result, lines) = run(&["invoke", "list-builds", "--limit", "5"], &transport).await;
    result.unwrap();

    assert_eq!(transport.calls().len(), 1);
    assert_eq!(lines.last().unwrap()["pagination"]["fetched"], 0);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_service_error_after_first_page() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1"], Some("t1")),
        Err(ServiceError::new("InternalServiceException", "boom").into()),
    ]);

    let (result, lines) = run(&["invoke", "list-builds"], &transport).await;

    let err = result.unwrap_err();
    assert_eq!(err.as_service().unwrap().code, "InternalServiceException");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["record"]["BuildId"], "b1");
    assert_eq!(transport.calls().len(), 2);
}

#[tokio::test]
async fn test_error_with_limit_still_reports_resume_point() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1", "b2"], Some("t1")),
        Err(ServiceError::new("ThrottlingException", "slow down").into()),
    ]);

    let (result, lines) = run(&["invoke", "list-builds", "--limit", "10"], &transport).await;

    let err = result.unwrap_err();
    assert_eq!(err.as_service().unwrap().code, "ThrottlingException");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["record"]["BuildId"], "b1");
    assert_eq!(lines[1]["record"]["BuildId"], "b2");
    assert_eq!(
        lines[2],
        json!({"type": "PAGINATION", "pagination": {"fetched": 2, "next_token": "t1"}})
    );
}

#[tokio::test]
async fn test_error_on_first_page_reports_starting_token() {
    let transport = ScriptedTransport::new(vec![Err(ServiceError::new(
        "InternalServiceException",
        "boom",
    )
    .into())]);

    let (result, lines) = run(
        &["invoke", "list-builds", "--next-token", "resume-here"],
        &transport,
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        lines,
        vec![json!({"type": "PAGINATION", "pagination": {"fetched": 0, "next_token": "resume-here"}})]
    );
}

#[tokio::test]
async fn test_max_pages_flag() {
    let transport = ScriptedTransport::new(vec![
        builds_page(&["b1"], Some("same")),
        builds_page(&["b2"], Some("same")),
    ]);

    let (result, lines) = run(&["invoke", "list-builds", "--max-pages", "2"], &transport).await;

    match result.unwrap_err() {
        Error::PageCapReached { pages, next_token } => {
            assert_eq!(pages, 2);
            assert_eq!(next_token, "same");
        }
        other => panic!("expected PageCapReached, got {other:?}"),
    }
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
async fn test_unknown_operation() {
    let transport = ScriptedTransport::new(vec![]);
    let (result, lines) = run(&["invoke", "ListWidgets"], &transport).await;

    assert!(matches!(result, Err(Error::UnknownOperation { .. })));
    assert!(lines.is_empty());
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_input_must_be_object() {
    let transport = ScriptedTransport::new(vec![]);
    let (result, _) = run(
        &["invoke", "list-builds", "--input-json", "[1,2]"],
        &transport,
    )
    .await;

    assert!(matches!(result, Err(Error::InvalidConfigValue { .. })));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_bad_limit_in_body() {
    let transport = ScriptedTransport::new(vec![]);
    let (result, _) = run(
        &["invoke", "list-builds", "--input-json", r#"{"Limit":"ten"}"#],
        &transport,
    )
    .await;

    assert!(result.unwrap_err().to_string().contains("Limit"));
}

// ============================================================================
// One-shot operations and catalog
// ============================================================================

#[tokio::test]
async fn test_single_operation_writes_one_record() {
    let transport = ScriptedTransport::new(vec![Ok(json!({
        "MatchmakingTicket": {"TicketId": "ticket-1", "Status": "QUEUED"}
    }))]);

    let (result, lines) = run(
        &[
            "invoke",
            "start-matchmaking",
            "--input-json",
            r#"{"ConfigurationName":"duel","Players":[{"PlayerId":"p1"}]}"#,
        ],
        &transport,
    )
    .await;
    result.unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["operation"], "StartMatchmaking");
    assert_eq!(lines[0]["record"]["MatchmakingTicket"]["TicketId"], "ticket-1");
    assert_eq!(transport.calls()[0].0, "StartMatchmaking");
}

#[tokio::test]
async fn test_input_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"TicketId":"ticket-7"}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let transport = ScriptedTransport::new(vec![Ok(json!({}))]);
    let (result, _) = run(
        &["invoke", "stop-matchmaking", "--input-file", &path],
        &transport,
    )
    .await;
    result.unwrap();

    assert_eq!(transport.calls()[0].1, json!({"TicketId": "ticket-7"}));
}

#[tokio::test]
async fn test_operations_catalog() {
    let transport = ScriptedTransport::new(vec![]);
    let (result, lines) = run(&["operations"], &transport).await;
    result.unwrap();

    assert_eq!(lines.len(), 20);
    assert_eq!(
        lines[0],
        json!({
            "type": "OPERATION",
            "operation": {"name": "ListAliases", "command": "list-aliases", "paginated": true}
        })
    );
    let one_shot = lines
        .iter()
        .filter(|m| m["operation"]["paginated"] == false)
        .count();
    assert_eq!(one_shot, 5);
}

#[tokio::test]
async fn test_pretty_format() {
    let transport = ScriptedTransport::new(vec![]);
    let runner = Runner::with_transport(parse(&["--format", "pretty", "operations"]), transport);
    let mut out = Vec::new();
    runner.run_with_output(&mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("{\n  \"type\": \"OPERATION\""));
}
