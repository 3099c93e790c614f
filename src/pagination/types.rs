//! Pagination types and traits
//!
//! Defines the request/response accessors the fetch loop drives, the
//! caller-facing options, and the loop-local iteration state.

use tokio_util::sync::CancellationToken;

/// A request that carries a continuation token and a page-size hint.
///
/// Every other field is an operation-specific filter. The loop clones the
/// caller's request for each call and only ever touches these two fields.
pub trait PageRequest: Clone {
    /// Set the token the next page should resume from
    fn set_next_token(&mut self, token: Option<String>);

    /// Set the page-size hint forwarded to the service
    fn set_page_size(&mut self, page_size: Option<i32>);
}

/// A response holding one page of items and an optional continuation token.
pub trait PageResponse {
    /// Entity type returned by the operation
    type Item;

    /// Split the response into its ordered items and its next token
    fn into_page(self) -> (Vec<Self::Item>, Option<String>);
}

/// One page as delivered to the consumer
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// 1-based page number within this iteration
    pub number: u32,
    /// Items in the order the service returned them
    pub items: Vec<T>,
    /// Token for the following page, as the service sent it
    pub next_token: Option<String>,
    /// Items fetched so far, including this page
    pub total_fetched: u64,
}

impl<T> Page<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carried no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Caller-supplied knobs for one invocation of the fetch loop
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Start from this token instead of the beginning of the result set
    pub initial_token: Option<String>,
    /// Stop once at least this many items have been fetched
    pub limit: Option<u64>,
    /// Page-size hint; the service may return more or fewer items
    pub page_size: Option<i32>,
    /// Safety cap on the number of calls made
    pub max_pages: Option<u32>,
    /// Checked before every call
    pub cancel: Option<CancellationToken>,
}

impl PageOptions {
    /// Fully automatic pagination: no token, no limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a token
    #[must_use]
    pub fn starting_at(mut self, token: impl Into<String>) -> Self {
        self.initial_token = Some(token.into());
        self
    }

    /// Set the item limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page-size hint
    #[must_use]
    pub fn page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the page cap
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Attach a cancellation token
    #[must_use]
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// True if the caller supplied a starting token or a limit
    pub fn user_controls_pagination(&self) -> bool {
        self.initial_token.is_some() || self.limit.is_some()
    }
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Cumulative items reached the limit
    LimitReached,
    /// A limit was set and nothing has been fetched
    EmptyPage,
    /// The service returned no continuation token
    EndOfResults,
}

/// Result of checking termination after a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Fetch another page
    Continue,
    /// Stop pagination
    Stop(StopReason),
}

impl StopResult {
    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop(_))
    }
}

/// Loop-local state for one invocation
#[derive(Debug, Clone, Default)]
pub struct IterationState {
    /// Token the next call will carry
    pub current_token: Option<String>,
    /// Item ceiling; `None` is unbounded
    pub limit: Option<u64>,
    /// Items fetched so far
    pub total_fetched: u64,
    /// Calls completed so far
    pub pages_fetched: u32,
    /// Caller supplied a starting token or a limit
    pub user_controls_pagination: bool,
    /// No further calls will be made
    pub done: bool,
}

impl IterationState {
    /// Create fresh state from the caller's options
    pub fn new(options: &PageOptions) -> Self {
        Self {
            current_token: options.initial_token.clone(),
            limit: options.limit,
            user_controls_pagination: options.user_controls_pagination(),
            ..Default::default()
        }
    }

    /// Record a completed page and decide whether to continue.
    ///
    /// The empty-total check only applies when a limit is set: an empty page
    /// that still carries a token ends a limited iteration, but not an
    /// unlimited one.
    pub fn record_page(&mut self, fetched: usize, next_token: Option<String>) -> StopResult {
        self.pages_fetched += 1;
        self.total_fetched += fetched as u64;
        self.current_token = next_token;

        let result = self.check_stop();
        if result.should_stop() {
            self.done = true;
        }
        result
    }

    /// Evaluate the termination rules against the current state
    pub fn check_stop(&self) -> StopResult {
        if let Some(limit) = self.limit {
            if self.total_fetched == 0 {
                return StopResult::Stop(StopReason::EmptyPage);
            }
            if self.total_fetched >= limit {
                return StopResult::Stop(StopReason::LimitReached);
            }
        }

        if self.current_token.as_deref().map_or(true, str::is_empty) {
            return StopResult::Stop(StopReason::EndOfResults);
        }

        StopResult::Continue
    }

    /// Mark iteration as finished
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}
