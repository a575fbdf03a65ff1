use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{decode_page, Pacer, PageSource, Query, ScryfallError};

/// Requests pages of `query` until the API reports no more, handing each
/// page's records to `on_page`. Returns the number of requests made.
///
/// The pacer runs after every request, failed or not. A fixed endpoint is
/// requested once regardless of its `has_more`.
pub fn fetch_all<T, S, P, F>(
    source: &S,
    pacer: &mut P,
    query: &Query,
    mut on_page: F,
) -> Result<u32, ScryfallError>
where
    T: DeserializeOwned,
    S: PageSource + ?Sized,
    P: Pacer + ?Sized,
    F: FnMut(Vec<T>),
{
    let mut page = 0;
    loop {
        page += 1;
        let url = query.page_url(page);
        debug!(page, %url, "Fetching page");

        let body = source.get(&url);
        pacer.pause();
        let list = decode_page::<T>(&url, &body?)?;

        debug!(page, records = list.data.len(), has_more = list.has_more, "Fetched page");
        let has_more = list.has_more;
        on_page(list.data);

        if !has_more || !query.is_paginated() {
            break;
        }
    }
    Ok(page)
}
