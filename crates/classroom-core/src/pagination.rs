//! Page-number pagination.
//!
//! Listing endpoints are read page after page, starting at page 1, until a
//! page comes back empty.

use std::future::Future;

use futures::{stream, Stream, TryStreamExt};

/// Items requested per page, the maximum accepted by the GitHub API.
pub const PAGE_SIZE: u64 = 100;

/// Lazily fetch pages from `fetch_page`, stopping on the first empty page.
///
/// Each call starts a fresh sequence from page 1. Errors end the stream.
pub fn paginate<T, E, F, Fut>(fetch_page: F) -> impl Stream<Item = Result<Vec<T>, E>>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    stream::try_unfold((fetch_page, 1), |(mut fetch_page, page)| async move {
        match fetch_page(page).await {
            Ok(items) if items.is_empty() => Ok(None),
            Ok(items) => Ok(Some((items, (fetch_page, page + 1)))),
            Err(e) => Err(e),
        }
    })
}

/// Fetch every page and concatenate them in order.
pub async fn fetch_all_pages<T, E, F, Fut>(fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    paginate(fetch_page).try_concat().await
}
