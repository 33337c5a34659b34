use crate::error::Result;
use crate::slack::{Cursor, Page};
use std::future::Future;

/// Drain a cursor-paginated listing, calling `fetch` until no cursor comes back.
///
/// The first call gets `None`; every later call gets the previous page's cursor verbatim.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<Cursor>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut cursor = None;

    loop {
        let page = fetch(cursor.take()).await?;
        items.extend(page.items);

        match page.next_cursor {
            Some(next) => {
                tracing::trace!(cursor = %next.as_str(), "Fetching next page");
                cursor = Some(next);
            }
            None => break,
        }
    }

    Ok(items)
}
