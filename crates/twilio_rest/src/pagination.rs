// --- File: crates/twilio_rest/src/pagination.rs ---
//! Walking collections page by page.
//!
//! Every listable resource implements [`ListResource`] by naming its client, domain and
//! collection path; `stream`, `list`, `each`, `page` and `get_page` come for free.
//! Pages are fetched strictly one after the other, only when the consumer asks for more.

use futures::stream::{self, Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::VecDeque;
use std::future::Future;
use std::ops::ControlFlow;
use std::pin::Pin;
use tracing::debug;

use crate::client::{Domain, TwilioClient};
use crate::error::RestError;
use crate::page::Page;
use crate::serialize::to_form_pairs;

/// Largest `PageSize` Twilio accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Records yielded one at a time, fetching further pages on demand.
pub type RecordStream<T> = Pin<Box<dyn Stream<Item = Result<T, RestError>> + Send>>;

/// Future returned by the paging operations.
pub type PagingFuture<T> = Pin<Box<dyn Future<Output = Result<T, RestError>> + Send>>;

/// Bounds for `stream`, `list` and `each`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Stop after this many records. `None` reads the whole collection.
    pub limit: Option<usize>,
    /// Records per request. Defaults to `limit`, capped at [`MAX_PAGE_SIZE`].
    pub page_size: Option<u32>,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Effective `(limit, page_size)`.
    pub fn resolve(&self) -> Result<(Option<usize>, Option<u32>), RestError> {
        if self.limit == Some(0) {
            return Err(RestError::InvalidArgument(
                "limit must be greater than zero".to_string(),
            ));
        }
        if self.page_size == Some(0) {
            return Err(RestError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }

        let page_size = self
            .page_size
            .or_else(|| {
                self.limit
                    .map(|limit| u32::try_from(limit).unwrap_or(MAX_PAGE_SIZE))
            })
            .map(|size| size.min(MAX_PAGE_SIZE));

        Ok((self.limit, page_size))
    }
}

/// Query parameters for fetching one specific page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(rename = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "PageToken", skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl PageParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }
}

enum Cursor {
    First {
        path: String,
        query: Vec<(String, String)>,
    },
    Next(String),
}

struct Walk<T> {
    client: TwilioClient,
    domain: Domain,
    cursor: Option<Cursor>,
    buffer: VecDeque<T>,
    remaining: Option<usize>,
}

/// Streams every record of a collection, following `next_page_url` until it runs out or
/// `limit` records were produced. The first error ends the stream.
pub fn record_stream<T>(
    client: TwilioClient,
    domain: Domain,
    path: String,
    query: Vec<(String, String)>,
    limit: Option<usize>,
) -> RecordStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let walk = Walk {
        client,
        domain,
        cursor: Some(Cursor::First { path, query }),
        buffer: VecDeque::new(),
        remaining: limit,
    };

    Box::pin(stream::unfold(walk, |mut walk| async move {
        loop {
            if walk.remaining == Some(0) {
                return None;
            }

            if let Some(record) = walk.buffer.pop_front() {
                if let Some(remaining) = walk.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some((Ok(record), walk));
            }

            let fetched = match walk.cursor.take()? {
                Cursor::First { path, query } => {
                    walk.client.page::<T>(walk.domain, &path, &query).await
                }
                Cursor::Next(url) => {
                    debug!("fetching next page {}", url);
                    walk.client.get_page::<T>(&url).await
                }
            };

            match fetched {
                Ok(page) => {
                    walk.cursor = page.next_page_url().map(|url| Cursor::Next(url.to_string()));
                    walk.buffer.extend(page.records);
                }
                // cursor is already cleared, so the stream ends after this item
                Err(err) => return Some((Err(err), walk)),
            }
        }
    }))
}

/// Collection operations shared by every listable resource.
pub trait ListResource: Send + Sync {
    type Record: DeserializeOwned + Send + 'static;
    /// Query filters (`To`, `DateSent>`, `Status`, ...). `()` when the collection has none.
    type Filter: Serialize + Sync;

    fn client(&self) -> &TwilioClient;
    fn domain(&self) -> Domain;
    /// Collection path, e.g. `/v1/Sims`.
    fn list_path(&self) -> String;

    /// Lazily streams records matching `filter`.
    fn stream(&self, filter: &Self::Filter, options: ReadOptions) -> RecordStream<Self::Record> {
        let prepared = options.resolve().and_then(|(limit, page_size)| {
            let mut query = to_form_pairs(filter)?;
            if let Some(size) = page_size {
                query.push(("PageSize".to_string(), size.to_string()));
            }
            Ok((limit, query))
        });

        match prepared {
            Ok((limit, query)) => record_stream(
                self.client().clone(),
                self.domain(),
                self.list_path(),
                query,
                limit,
            ),
            Err(err) => Box::pin(stream::once(async move { Err(err) })),
        }
    }

    /// Collects the records matching `filter` into memory.
    fn list(&self, filter: &Self::Filter, options: ReadOptions) -> PagingFuture<Vec<Self::Record>> {
        let records = self.stream(filter, options);
        Box::pin(async move { records.try_collect::<Vec<_>>().await })
    }

    /// Calls `callback` for each record until it returns [`ControlFlow::Break`], the limit
    /// is reached or the collection ends. Breaking stops any further page fetches.
    fn each<F>(&self, filter: &Self::Filter, options: ReadOptions, mut callback: F) -> PagingFuture<()>
    where
        F: FnMut(Self::Record) -> ControlFlow<()> + Send + 'static,
    {
        let mut records = self.stream(filter, options);
        Box::pin(async move {
            while let Some(record) = records.try_next().await? {
                if callback(record).is_break() {
                    break;
                }
            }
            Ok(())
        })
    }

    /// Fetches a single page.
    fn page(&self, filter: &Self::Filter, params: &PageParams) -> PagingFuture<Page<Self::Record>> {
        let client = self.client().clone();
        let domain = self.domain();
        let path = self.list_path();
        let query = to_form_pairs(filter).and_then(|mut query| {
            query.extend(to_form_pairs(params)?);
            Ok(query)
        });

        Box::pin(async move { client.page(domain, &path, &query?).await })
    }

    /// Fetches a page by its absolute URL (a previous page's `next_page_url`).
    fn get_page(&self, url: &str) -> PagingFuture<Page<Self::Record>> {
        let client = self.client().clone();
        let url = url.to_string();
        Box::pin(async move { client.get_page(&url).await })
    }
}
