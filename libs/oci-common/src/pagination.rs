//! Page and item streams over `opc-next-page` cursors
//!
//! List operations return one page at a time. The `opc-next-page` header of a
//! page is an opaque token: re-issuing the same request with `page` set to it
//! fetches the next page, and its absence means the listing is complete.
//! The pagers in this module hide that loop behind a [`Stream`].
//!
//! # Example
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//!
//! let request = ListJobsRequest {
//!     compartment_id: Some(compartment),
//!     ..Default::default()
//! };
//! let mut jobs = client.list_jobs_items(request);
//! while let Some(job) = jobs.next().await {
//!     println!("{}", job?.display_name.unwrap_or_default());
//! }
//! ```

use crate::error::OciError;
use crate::response::ListResponse;
use futures_core::Stream;
use pin_project_lite::pin_project;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// List request that accepts a page token.
pub trait PageableRequest: Clone {
    fn set_page(&mut self, page: Option<String>);
}

/// Response carrying one page of items and the next-page token.
pub trait PagedResponse {
    type Item;

    fn next_page(&self) -> Option<&str>;

    fn into_items(self) -> Vec<Self::Item>;
}

impl<T> PagedResponse for ListResponse<T> {
    type Item = T;

    fn next_page(&self) -> Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

pin_project! {
    /// Stream of whole pages.
    ///
    /// The first fetch sends the request unchanged (so a caller-supplied
    /// `page` is honoured); every following fetch carries the previous
    /// page's token verbatim. A fetch error is yielded once and ends the stream.
    pub struct PagesPager<Req, Resp, F, Fut>
    where
        Req: PageableRequest,
        F: FnMut(Req) -> Fut,
        Fut: Future<Output = Result<Resp, OciError>>,
    {
        request: Req,
        next_page: Option<String>,
        started: bool,
        done: bool,
        fetcher: F,
        #[pin]
        current_fetch: Option<Fut>,
    }
}

impl<Req, Resp, F, Fut> PagesPager<Req, Resp, F, Fut>
where
    Req: PageableRequest,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp, OciError>>,
{
    pub fn new(request: Req, fetcher: F) -> Self {
        Self {
            request,
            next_page: None,
            started: false,
            done: false,
            fetcher,
            current_fetch: None,
        }
    }
}

impl<Req, Resp, F, Fut> Stream for PagesPager<Req, Resp, F, Fut>
where
    Req: PageableRequest,
    Resp: PagedResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp, OciError>>,
{
    type Item = Result<Resp, OciError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if *this.done {
                return Poll::Ready(None);
            }

            if let Some(fut) = this.current_fetch.as_mut().as_pin_mut() {
                return match fut.poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.current_fetch.set(None);
                        *this.next_page = page
                            .next_page()
                            .filter(|token| !token.is_empty())
                            .map(ToOwned::to_owned);
                        if this.next_page.is_none() {
                            *this.done = true;
                        }
                        Poll::Ready(Some(Ok(page)))
                    }
                    Poll::Ready(Err(e)) => {
                        this.current_fetch.set(None);
                        *this.done = true;
                        Poll::Ready(Some(Err(e)))
                    }
                    Poll::Pending => Poll::Pending,
                };
            }

            let mut request = this.request.clone();
            if *this.started {
                request.set_page(this.next_page.take());
            }
            *this.started = true;

            let fut = (this.fetcher)(request);
            this.current_fetch.set(Some(fut));
        }
    }
}

pin_project! {
    /// Stream of individual items across all pages.
    pub struct ItemsPager<Req, Resp, F, Fut>
    where
        Req: PageableRequest,
        Resp: PagedResponse,
        F: FnMut(Req) -> Fut,
        Fut: Future<Output = Result<Resp, OciError>>,
    {
        #[pin]
        pages: PagesPager<Req, Resp, F, Fut>,
        buffer: VecDeque<Resp::Item>,
    }
}

impl<Req, Resp, F, Fut> ItemsPager<Req, Resp, F, Fut>
where
    Req: PageableRequest,
    Resp: PagedResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp, OciError>>,
{
    pub fn new(request: Req, fetcher: F) -> Self {
        Self {
            pages: PagesPager::new(request, fetcher),
            buffer: VecDeque::new(),
        }
    }
}

impl<Req, Resp, F, Fut> Stream for ItemsPager<Req, Resp, F, Fut>
where
    Req: PageableRequest,
    Resp: PagedResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp, OciError>>,
{
    type Item = Result<Resp::Item, OciError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(item) = this.buffer.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            match this.pages.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(page))) => this.buffer.extend(page.into_items()),
                Poll::Ready(Some(Err(e))) => return Poll::Ready(Some(Err(e))),
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
