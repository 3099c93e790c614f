//! The fetch loop
//!
//! Walks a token-paginated operation until the limit is satisfied, the
//! service stops returning a token, or a call fails. Pages are handed to the
//! consumer as they arrive.
//!
//! Two renderings share the same loop core:
//! - [`paginate_pages`] / [`paginate`] for async operations (futures streams)
//! - [`PageIter`] / [`ItemIter`] for blocking operations

use super::types::{IterationState, Page, PageOptions, PageRequest, PageResponse, StopResult};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

// ============================================================================
// Loop Core
// ============================================================================

/// State shared by the async and blocking loops
#[derive(Debug)]
struct LoopCore<Req> {
    base: Req,
    page_size: Option<i32>,
    max_pages: Option<u32>,
    cancel: Option<CancellationToken>,
    state: IterationState,
}

impl<Req: PageRequest> LoopCore<Req> {
    fn new(base: Req, options: PageOptions) -> Self {
        let state = IterationState::new(&options);
        Self {
            base,
            page_size: options.page_size,
            max_pages: options.max_pages,
            cancel: options.cancel,
            state,
        }
    }

    /// Build the request for the next call, or `None` once iteration is over
    fn begin(&mut self) -> Result<Option<Req>> {
        if self.state.done {
            return Ok(None);
        }

        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            self.state.mark_done();
            return Err(Error::Cancelled);
        }

        if let Some(max) = self.max_pages {
            if self.state.pages_fetched >= max {
                self.state.mark_done();
                return Err(Error::PageCapReached {
                    pages: self.state.pages_fetched,
                    next_token: self.state.current_token.clone().unwrap_or_default(),
                });
            }
        }

        let mut request = self.base.clone();
        request.set_next_token(self.state.current_token.clone());
        request.set_page_size(self.page_size);

        trace!(
            page = self.state.pages_fetched + 1,
            token = ?self.state.current_token,
            "Requesting page"
        );
        Ok(Some(request))
    }

    /// Fold a response into the state and produce the page for the consumer
    fn finish<Resp>(&mut self, response: Resp) -> Page<Resp::Item>
    where
        Resp: PageResponse,
    {
        let (items, next_token) = response.into_page();
        let stop = self.state.record_page(items.len(), next_token.clone());

        debug!(
            page = self.state.pages_fetched,
            fetched = items.len(),
            total = self.state.total_fetched,
            next_token = ?next_token,
            user_controlled = self.state.user_controls_pagination,
            "Fetched page"
        );
        if let StopResult::Stop(reason) = stop {
            debug!(?reason, total = self.state.total_fetched, "Pagination complete");
        }

        Page {
            number: self.state.pages_fetched,
            items,
            next_token,
            total_fetched: self.state.total_fetched,
        }
    }

    fn fail(&mut self) {
        self.state.mark_done();
    }
}

// ============================================================================
// Async Streams
// ============================================================================

/// Stream the pages of an async paginated operation.
///
/// `operation` is called once per page with a clone of `request` carrying
/// the current token and the page-size hint. The first error ends the
/// stream; no call is made after it.
pub fn paginate_pages<Req, Resp, F, Fut>(
    request: Req,
    options: PageOptions,
    operation: F,
) -> impl Stream<Item = Result<Page<Resp::Item>>>
where
    Req: PageRequest,
    Resp: PageResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp>>,
{
    let core = LoopCore::new(request, options);

    stream::try_unfold((core, operation), |(mut core, mut operation)| async move {
        let Some(request) = core.begin()? else {
            return Ok::<_, Error>(None);
        };
        let response = operation(request).await?;
        let page = core.finish(response);
        Ok::<_, Error>(Some((page, (core, operation))))
    })
}

/// Stream the items of an async paginated operation, page by page.
pub fn paginate<Req, Resp, F, Fut>(
    request: Req,
    options: PageOptions,
    operation: F,
) -> impl Stream<Item = Result<Resp::Item>>
where
    Req: PageRequest,
    Resp: PageResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp>>,
{
    paginate_pages(request, options, operation)
        .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
}

// ============================================================================
// Blocking Iterators
// ============================================================================

/// Iterator over the pages of a blocking paginated operation
#[derive(Debug)]
pub struct PageIter<Req, F> {
    core: LoopCore<Req>,
    operation: F,
}

impl<Req, Resp, F> PageIter<Req, F>
where
    Req: PageRequest,
    Resp: PageResponse,
    F: FnMut(Req) -> Result<Resp>,
{
    /// Create a page iterator; nothing is fetched until the first `next()`
    pub fn new(request: Req, options: PageOptions, operation: F) -> Self {
        Self {
            core: LoopCore::new(request, options),
            operation,
        }
    }

    /// Flatten into an item iterator
    pub fn items(self) -> ItemIter<Req, F, Resp::Item> {
        ItemIter {
            pages: self,
            buffer: Vec::new().into_iter(),
        }
    }

    /// Iteration state so far
    pub fn state(&self) -> &IterationState {
        &self.core.state
    }
}

impl<Req, Resp, F> Iterator for PageIter<Req, F>
where
    Req: PageRequest,
    Resp: PageResponse,
    F: FnMut(Req) -> Result<Resp>,
{
    type Item = Result<Page<Resp::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        let request = match self.core.begin() {
            Ok(Some(request)) => request,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };

        match (self.operation)(request) {
            Ok(response) => Some(Ok(self.core.finish(response))),
            Err(e) => {
                self.core.fail();
                Some(Err(e))
            }
        }
    }
}

/// Iterator over the items of a blocking paginated operation
#[derive(Debug)]
pub struct ItemIter<Req, F, T> {
    pages: PageIter<Req, F>,
    buffer: std::vec::IntoIter<T>,
}

impl<Req, F, T> ItemIter<Req, F, T> {
    /// Iteration state so far
    pub fn state(&self) -> &IterationState {
        &self.pages.core.state
    }
}

impl<Req, Resp, F, T> Iterator for ItemIter<Req, F, T>
where
    Req: PageRequest,
    Resp: PageResponse<Item = T>,
    F: FnMut(Req) -> Result<Resp>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            match self.pages.next()? {
                Ok(page) => self.buffer = page.items.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
