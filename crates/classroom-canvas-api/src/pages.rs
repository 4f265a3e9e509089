//! Link-driven pagination.
//!
//! Canvas listings are read by following each page's `next` link until a
//! page comes without one.

use std::future::Future;

use futures::{stream, Stream, TryStreamExt};
use reqwest::Url;

/// One fetched page and the location of the following one.
#[derive(Debug)]
pub struct LinkedPage<T> {
    pub items: Vec<T>,
    pub next_url: Option<Url>,
}

/// Lazily fetch pages from `fetch_page`, starting at `first_url`.
pub fn linked_pages<T, E, F, Fut>(
    first_url: Url,
    fetch_page: F,
) -> impl Stream<Item = Result<Vec<T>, E>>
where
    F: FnMut(Url) -> Fut,
    Fut: Future<Output = Result<LinkedPage<T>, E>>,
{
    stream::try_unfold(
        (fetch_page, Some(first_url)),
        |(mut fetch_page, url)| async move {
            let Some(url) = url else {
                return Ok(None);
            };

            match fetch_page(url).await {
                Ok(page) => Ok(Some((page.items, (fetch_page, page.next_url)))),
                Err(e) => Err(e),
            }
        },
    )
}

/// Follow every `next` link and concatenate the pages in order.
pub async fn fetch_linked_pages<T, E, F, Fut>(first_url: Url, fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(Url) -> Fut,
    Fut: Future<Output = Result<LinkedPage<T>, E>>,
{
    linked_pages(first_url, fetch_page).try_concat().await
}
