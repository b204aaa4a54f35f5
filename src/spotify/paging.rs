use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::{TenantId, error::Result, spotify::SpotifyClient, types::Paging, warning};

/// Lazy, finite, non-restartable sequence of offset-paged results.
///
/// The sequence ends on the first of:
/// - a page without `next`
/// - a page without items, or a missing page
/// - `max_pages` pages fetched (at least one page is always fetched)
///
/// Once finished, [`Pages::next_page`] keeps returning `Ok(None)`.
pub struct Pages<'a, T> {
    api: &'a SpotifyClient,
    url: String,
    tenant: TenantId,
    page_size: usize,
    max_pages: usize,
    fetched: usize,
    finished: bool,
    _items: PhantomData<T>,
}

impl<'a, T: DeserializeOwned> Pages<'a, T> {
    pub fn new(
        api: &'a SpotifyClient,
        url: String,
        tenant: TenantId,
        page_size: usize,
        max_pages: usize,
    ) -> Self {
        Self {
            api,
            url,
            tenant,
            page_size,
            max_pages: max_pages.max(1),
            fetched: 0,
            finished: false,
            _items: PhantomData,
        }
    }

    pub async fn next_page(&mut self) -> Result<Option<Paging<T>>> {
        if self.finished {
            return Ok(None);
        }

        let offset = self.fetched * self.page_size;
        let page: Option<Paging<T>> = self
            .api
            .get_json_query(
                &self.url,
                &[("limit", self.page_size), ("offset", offset)],
                self.tenant,
            )
            .await?;
        self.fetched += 1;

        let page = match page {
            Some(page) if !page.items.is_empty() => page,
            _ => {
                self.finished = true;
                return Ok(None);
            }
        };

        if page.next.is_none() {
            self.finished = true;
        } else if self.fetched >= self.max_pages {
            self.finished = true;
            warning!(
                "Stopped paging {} after {} pages; more items are available.",
                self.url,
                self.fetched
            );
        }

        Ok(Some(page))
    }

    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
