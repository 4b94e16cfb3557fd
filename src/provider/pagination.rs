//! # Pagination
//!
//! Shared loop for draining token-paginated provider listings.

use super::Page;
use crate::error::Result;
use std::future::Future;
use tracing::debug;

/// Fetch pages until the provider stops returning a continuation token and
/// concatenate their items in page order.
///
/// Pages are fetched strictly one after another. The token is forwarded as-is.
pub(crate) async fn drain_pages<T, F, Fut>(
    provider: &'static str,
    operation: &'static str,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut next_token = None;
    let mut pages = 0_usize;

    loop {
        let page = fetch_page(next_token.take()).await?;
        pages += 1;
        items.extend(page.items);

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    debug!(
        provider,
        operation,
        pages,
        items = items.len(),
        "Drained paginated listing"
    );
    Ok(items)
}
