//! Page-by-page access to the competitions listing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::{info, instrument};

use super::http_client::ApiClient;
use super::urls::build_competitions_page_url;
use crate::constants::PAGE_SIZE;
use crate::data_fetcher::models::PageResult;
use crate::error::AppError;

/// Which page indices a run visits given the reported `numPages`.
///
/// The live API has been observed to be consumed with `0..=numPages`, one
/// page past a zero-based count. `Inclusive` keeps that behaviour;
/// `Exclusive` treats `numPages` as a plain count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PageBound {
    #[default]
    Inclusive,
    Exclusive,
}

impl PageBound {
    /// Page indices to fetch for a listing that reports `num_pages`.
    pub fn pages(self, num_pages: u32) -> Range<u32> {
        match self {
            PageBound::Inclusive => 0..num_pages.saturating_add(1),
            PageBound::Exclusive => 0..num_pages,
        }
    }
}

impl fmt::Display for PageBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageBound::Inclusive => f.write_str("inclusive"),
            PageBound::Exclusive => f.write_str("exclusive"),
        }
    }
}

/// Walks the `/competitions` listing one page per request.
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a> {
    client: &'a ApiClient,
    page_size: u32,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            page_size: PAGE_SIZE,
        }
    }

    pub fn with_page_size(client: &'a ApiClient, page_size: u32) -> Self {
        Self { client, page_size }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Reads `pageInfo.numPages` from page 0.
    #[instrument(skip(self))]
    pub async fn page_count(&self) -> Result<u32, AppError> {
        let url = build_competitions_page_url(self.client.base_url(), 0, self.page_size);
        let first_page: PageResult = self.client.get_json(&url).await?;

        let num_pages = first_page
            .page_info
            .map(|info| info.num_pages)
            .ok_or_else(|| AppError::missing_field("pageInfo.numPages", url.as_str()))?;

        info!("Competitions listing reports {num_pages} pages");
        Ok(num_pages)
    }

    /// Fetches page `page` (zero-based).
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, page: u32) -> Result<PageResult, AppError> {
        let url = build_competitions_page_url(self.client.base_url(), page, self.page_size);
        let result: PageResult = self.client.get_json(&url).await?;
        info!(
            "Fetched page {page} with {} competitions",
            result.content.len()
        );
        Ok(result)
    }
}
