//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InvokeArgs, OutputFormat};
use crate::cli::message::{Message, OperationInfo};
use crate::config::{Backend, KitConfig};
use crate::error::{Error, Result, ResultExt};
use crate::http::{call, GameLiftClient, SdkTransport, Transport};
use crate::operations::{self as ops, ApiOperation, OperationKind};
use crate::pagination::{paginate_pages, PageOptions, PageRequest, PageResponse};
use crate::types::{JsonObject, JsonValue, LogLevel};
use futures::{pin_mut, TryStreamExt};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
    transport: Option<Arc<dyn Transport>>,
}

/// Everything one `invoke` needs besides the operation type
struct Invocation<'a> {
    transport: &'a dyn Transport,
    input: JsonObject,
    args: &'a InvokeArgs,
    config: &'a KitConfig,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            transport: None,
        }
    }

    /// Create a runner that sends calls through `transport` instead of HTTP
    pub fn with_transport(cli: Cli, transport: Arc<dyn Transport>) -> Self {
        Self {
            cli,
            transport: Some(transport),
        }
    }

    /// Run the CLI command, writing messages to stdout
    pub async fn run(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        self.run_with_output(&mut stdout).await
    }

    /// Run the CLI command, writing messages to `out`
    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Invoke(args) => self.invoke(args, out).await,
            Commands::Operations => self.list_operations(out),
        }
    }

    // ========================================================================
    // Setup
    // ========================================================================

    /// Load configuration: file, then environment, then flags
    pub(crate) fn load_config(&self) -> Result<KitConfig> {
        let mut config = match &self.cli.config {
            Some(path) => KitConfig::from_file(path)?,
            None => KitConfig::default(),
        };
        config.apply_env()?;

        if let Some(backend) = self.cli.backend {
            config.backend = backend;
        }
        if let Some(region) = &self.cli.region {
            config.aws.region = Some(region.clone());
        }
        if let Some(profile) = &self.cli.profile {
            config.aws.profile = Some(profile.clone());
        }
        // --endpoint targets whichever backend is selected
        if let Some(endpoint) = &self.cli.endpoint {
            match config.backend {
                Backend::Local => config.endpoint.clone_from(endpoint),
                Backend::Sdk => config.aws.endpoint_url = Some(endpoint.clone()),
            }
        }
        config.validate()?;

        debug!(backend = ?config.backend, endpoint = %config.endpoint, "Resolved configuration");
        Ok(config)
    }

    async fn transport(&self, config: &KitConfig) -> Result<Arc<dyn Transport>> {
        if let Some(transport) = &self.transport {
            return Ok(Arc::clone(transport));
        }

        match config.backend {
            Backend::Local => {
                let client = GameLiftClient::with_config(config.client_config()?)?;
                info!(
                    endpoint = %client.endpoint(),
                    rate_limited = client.has_rate_limiter(),
                    "Using GameLift Local backend"
                );
                Ok(Arc::new(client))
            }
            Backend::Sdk => {
                let transport = SdkTransport::load(&config.sdk_settings()).await;
                info!(region = ?config.aws.region, "Using AWS SDK backend");
                Ok(Arc::new(transport))
            }
        }
    }

    /// Load the request body; inline JSON takes precedence over a file
    fn load_input(args: &InvokeArgs) -> Result<JsonObject> {
        let raw = if let Some(json) = &args.input_json {
            json.clone()
        } else if let Some(path) = &args.input_file {
            fs::read_to_string(path).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FileNotFound {
                        path: path.display().to_string(),
                    }
                } else {
                    Error::Io(e)
                }
            })?
        } else {
            return Ok(JsonObject::new());
        };

        match serde_json::from_str::<JsonValue>(&raw).context("Invalid request JSON")? {
            JsonValue::Object(map) => Ok(map),
            JsonValue::Null => Ok(JsonObject::new()),
            _ => Err(Error::invalid_value("input", "must be a JSON object")),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// List the operation catalog
    fn list_operations<W: Write>(&self, out: &mut W) -> Result<()> {
        for kind in OperationKind::ALL {
            let msg = Message::Operation {
                operation: OperationInfo {
                    name: kind.name(),
                    command: kind.cli_name(),
                    paginated: kind.is_paginated(),
                },
            };
            self.output_message(out, &msg)?;
        }
        Ok(())
    }

    /// Call one operation
    async fn invoke<W: Write>(&self, args: &InvokeArgs, out: &mut W) -> Result<()> {
        let kind = OperationKind::from_name(&args.operation)?;
        let config = self.load_config()?;
        let transport = self.transport(&config).await?;
        let input = Self::load_input(args)?;

        info!(operation = %kind, "Invoking operation");

        let inv = Invocation {
            transport: transport.as_ref(),
            input,
            args,
            config: &config,
        };

        match kind {
            OperationKind::ListAliases => self.run_paged::<ops::ListAliases, W>(inv, out).await,
            OperationKind::ListBuilds => self.run_paged::<ops::ListBuilds, W>(inv, out).await,
            OperationKind::ListScripts => self.run_paged::<ops::ListScripts, W>(inv, out).await,
            OperationKind::ListFleets => self.run_paged::<ops::ListFleets, W>(inv, out).await,
            OperationKind::DescribeFleetAttributes => {
                self.run_paged::<ops::DescribeFleetAttributes, W>(inv, out)
                    .await
            }
            OperationKind::DescribeFleetCapacity => {
                self.run_paged::<ops::DescribeFleetCapacity, W>(inv, out)
                    .await
            }
            OperationKind::DescribeFleetEvents => {
                self.run_paged::<ops::DescribeFleetEvents, W>(inv, out)
                    .await
            }
            OperationKind::DescribeGameSessions => {
                self.run_paged::<ops::DescribeGameSessions, W>(inv, out)
                    .await
            }
            OperationKind::SearchGameSessions => {
                self.run_paged::<ops::SearchGameSessions, W>(inv, out)
                    .await
            }
            OperationKind::DescribeGameSessionQueues => {
                self.run_paged::<ops::DescribeGameSessionQueues, W>(inv, out)
                    .await
            }
            OperationKind::DescribePlayerSessions => {
                self.run_paged::<ops::DescribePlayerSessions, W>(inv, out)
                    .await
            }
            OperationKind::DescribeMatchmakingConfigurations => {
                self.run_paged::<ops::DescribeMatchmakingConfigurations, W>(inv, out)
                    .await
            }
            OperationKind::DescribeMatchmakingRuleSets => {
                self.run_paged::<ops::DescribeMatchmakingRuleSets, W>(inv, out)
                    .await
            }
            OperationKind::DescribeInstances => {
                self.run_paged::<ops::DescribeInstances, W>(inv, out)
                    .await
            }
            OperationKind::ListGameServerGroups => {
                self.run_paged::<ops::ListGameServerGroups, W>(inv, out)
                    .await
            }
            OperationKind::CreateFleet => self.run_single::<ops::CreateFleet, W>(inv, out).await,
            OperationKind::CreateGameSession => {
                self.run_single::<ops::CreateGameSession, W>(inv, out)
                    .await
            }
            OperationKind::StartMatchmaking => {
                self.run_single::<ops::StartMatchmaking, W>(inv, out)
                    .await
            }
            OperationKind::DescribeMatchmaking => {
                self.run_single::<ops::DescribeMatchmaking, W>(inv, out)
                    .await
            }
            OperationKind::StopMatchmaking => {
                self.run_single::<ops::StopMatchmaking, W>(inv, out)
                    .await
            }
        }
    }

    /// Drive a paginated operation, writing one record per item
    async fn run_paged<Op, W>(&self, inv: Invocation<'_>, out: &mut W) -> Result<()>
    where
        Op: ApiOperation,
        Op::Input: PageRequest,
        Op::Output: PageResponse,
        <Op::Output as PageResponse>::Item: Serialize,
        W: Write,
    {
        let Invocation {
            transport,
            mut input,
            args,
            config,
        } = inv;

        // Flags win over the request body; an empty token means none
        let (body_token, body_limit) = take_pagination_fields(&mut input)?;
        let request: Op::Input = serde_json::from_value(JsonValue::Object(input))?;
        let start_token = args
            .next_token
            .clone()
            .filter(|t| !t.is_empty())
            .or(body_token.filter(|t| !t.is_empty()));

        let cancel = CancellationToken::new();
        let mut options = PageOptions::new().cancel_on(cancel.clone());
        if let Some(token) = start_token.clone() {
            options = options.starting_at(token);
        }
        if let Some(limit) = args.limit.or(body_limit) {
            options = options.limit(limit);
        }
        if let Some(size) = args.page_size.or(config.pagination.page_size) {
            options = options.page_size(size);
        }
        if let Some(max) = args.max_pages.or(config.pagination.max_pages) {
            options = options.max_pages(max);
        }
        let manual = options.user_controls_pagination();

        let interrupt = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, stopping after the current page");
                    cancel.cancel();
                }
            }
        });

        let pages = paginate_pages(request, options, move |req: Op::Input| async move {
            call::<Op, _>(transport, &req).await
        });

        // The resume point only moves once a page's items are all written
        let mut fetched = 0u64;
        let mut resume_token = start_token;
        let result = async {
            pin_mut!(pages);
            while let Some(page) = pages.try_next().await? {
                debug!(page = page.number, items = page.len(), "Writing page");
                for item in &page.items {
                    let msg = Message::record(Op::NAME, serde_json::to_value(item)?);
                    self.output_message(out, &msg)?;
                }
                fetched = page.total_fetched;
                resume_token = page.next_token.filter(|t| !t.is_empty());
            }
            Ok::<_, Error>(())
        }
        .await;
        interrupt.abort();

        if let Err(error) = result {
            if manual {
                if error.is_cancelled() {
                    warn!(fetched, "Interrupted before the results ran out");
                } else {
                    warn!(fetched, error = %error, "Stopped early");
                }
                self.output_message(out, &Message::pagination(fetched, resume_token))?;
            }
            return Err(error);
        }

        if manual {
            if let Some(token) = &resume_token {
                info!(fetched, next_token = %token, "More results available");
                let msg = Message::log(
                    LogLevel::Info,
                    format!("More results available; resume with --next-token {token}"),
                );
                self.output_message(out, &msg)?;
            }
            self.output_message(out, &Message::pagination(fetched, resume_token))?;
        }

        info!(operation = Op::NAME, fetched, "Invocation complete");
        Ok(())
    }

    /// Call a one-shot operation, writing its response as one record
    async fn run_single<Op, W>(&self, inv: Invocation<'_>, out: &mut W) -> Result<()>
    where
        Op: ApiOperation,
        W: Write,
    {
        let args = inv.args;
        if args.next_token.is_some()
            || args.limit.is_some()
            || args.page_size.is_some()
            || args.max_pages.is_some()
        {
            warn!(
                operation = Op::NAME,
                "Pagination flags ignored for a non-paginated operation"
            );
        }

        let request: Op::Input = serde_json::from_value(JsonValue::Object(inv.input))?;
        let response = call::<Op, _>(inv.transport, &request).await?;
        let msg = Message::record(Op::NAME, serde_json::to_value(&response)?);
        self.output_message(out, &msg)
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Write one message in the selected format
    fn output_message<W: Write>(&self, out: &mut W, msg: &Message) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(msg)?,
        };
        writeln!(out, "{line}")?;
        Ok(())
    }
}

/// Remove `NextToken` and `Limit` from a request body.
///
/// On the command line `Limit` is the item ceiling for the whole
/// invocation; the per-call hint is `--page-size`.
fn take_pagination_fields(input: &mut JsonObject) -> Result<(Option<String>, Option<u64>)> {
    let token = match input.remove("NextToken") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) => Some(s),
        Some(_) => return Err(Error::invalid_value("NextToken", "must be a string")),
    };

    let limit = match input.remove("Limit") {
        None | Some(JsonValue::Null) => None,
        Some(value) => Some(
            value
                .as_u64()
                .ok_or_else(|| Error::invalid_value("Limit", "must be a non-negative integer"))?,
        ),
    };

    Ok((token, limit))
}
