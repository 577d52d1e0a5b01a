//! Offset pagination and chunked mutation.
//!
//! Every "list all X" operation runs through [`collect_all`] and every
//! bulk write through [`for_each_chunk`]; the endpoint modules only
//! supply the per-page fetch and per-chunk apply closures.

use std::future::Future;

/// Collects every item of a paginated list endpoint into one sequence.
///
/// Starts at offset 0 and calls `fetch_page` with the current offset;
/// the closure is expected to request `page_size` items and return the
/// extracted item list for that page (the nesting point of the items
/// differs per endpoint, so extraction lives at the call site). An empty
/// page is the sole termination signal; after every non-empty page the
/// offset advances by `page_size` and the items are appended in fetch
/// order. Duplicates are kept; dedup is a caller responsibility.
///
/// `page_size` must not exceed the endpoint's cap (50 for liked songs,
/// playlists and artist albums, 100 for playlist tracks).
///
/// For N available items this makes ceil(N/P)+1 calls, the last one
/// observing the empty page.
///
/// # Errors
///
/// The first page error aborts the collection and is returned as-is;
/// items gathered so far are dropped.
///
/// # Consistency
///
/// Termination relies on the server reporting a stable item ordering
/// across calls. If the underlying set is mutated mid-collection, items
/// can be skipped or duplicated; this is not detected here and shows up
/// as incorrect results rather than an error.
pub async fn collect_all<T, E, F, Fut>(page_size: u32, mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut collected: Vec<T> = Vec::new();
    let mut offset: u32 = 0;

    loop {
        let page = fetch_page(offset).await?;
        if page.is_empty() {
            return Ok(collected);
        }

        collected.extend(page);
        offset += page_size;
    }
}

/// Applies a mutating call to `items` in consecutive chunks of at most
/// `batch_size`.
///
/// Issues ceil(L/B) calls for L items, each carrying at most B of them,
/// covering the input exactly once and in order. There is no rollback:
/// when chunk k fails, chunks before it have already been committed
/// remotely and chunks after it are not attempted — failure is
/// chunk-granular, not all-or-nothing.
pub async fn for_each_chunk<T, E, F, Fut>(
    items: &[T],
    batch_size: usize,
    mut apply: F,
) -> Result<(), E>
where
    T: Clone,
    F: FnMut(Vec<T>) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    for chunk in items.chunks(batch_size) {
        apply(chunk.to_vec()).await?;
    }

    Ok(())
}
