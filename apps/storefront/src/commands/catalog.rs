//! # Catalog Commands
//!
//! Commands for the catalog paginator.
//!
//! ## Paginator Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [‹ Prev]   1   …   9   [10]   11   …   20   [Next ›]                   │
//! │     │                   │                        │                      │
//! │  previous_page()   change_page(n)           next_page()                 │
//! │  (disabled on 1)                            (disabled on last)          │
//! │                                                                         │
//! │  Zero or one page: no paginator at all (window = None)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use atelier_core::{PageWindow, Paginator};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::{AppScope, CatalogPager, CatalogState, ConfigState};

/// Paginator state as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogResponse {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// `None` when the paginator should not be rendered.
    pub window: Option<PageWindow>,
}

impl From<&CatalogPager> for CatalogResponse {
    fn from(pager: &CatalogPager) -> Self {
        let paginator = pager.paginator();
        CatalogResponse {
            current_page: paginator.current_page(),
            total_pages: paginator.total_pages(),
            has_previous: paginator.has_previous(),
            has_next: paginator.has_next(),
            window: pager.window(),
        }
    }
}

/// Computes the window for an arbitrary `(current, total)` pair.
///
/// Stateless. Returns `None` when `total ≤ 1`.
pub fn get_page_window(current: u32, total: u32) -> Option<PageWindow> {
    debug!(current, total, "get_page_window command");
    let paginator = Paginator::new(current, total);
    paginator.should_render().then(|| paginator.window())
}

/// Gets the catalog paginator state.
pub fn get_catalog(scope: &AppScope) -> CatalogResponse {
    debug!("get_catalog command");
    scope
        .state::<CatalogState>()
        .with_pager(|p| CatalogResponse::from(p))
}

/// Updates the catalog size, paging it by the configured page size.
pub fn set_catalog_size(scope: &AppScope, item_count: u64) -> CatalogResponse {
    let page_size = scope.state::<ConfigState>().page_size;
    debug!(item_count, page_size, "set_catalog_size command");
    scope.state::<CatalogState>().with_pager_mut(|p| {
        p.set_item_count(item_count, page_size);
        CatalogResponse::from(&*p)
    })
}

/// Activates a page marker.
///
/// ## Errors
/// `NAVIGATION_ERROR` if `page` is outside `[1, total_pages]`.
pub fn change_page(scope: &AppScope, page: u32) -> Result<CatalogResponse, ApiError> {
    debug!(page, "change_page command");
    with_navigation(scope, |p| p.change_page(page))
}

/// Moves to the previous page.
///
/// ## Errors
/// `NAVIGATION_ERROR` on page 1.
pub fn previous_page(scope: &AppScope) -> Result<CatalogResponse, ApiError> {
    debug!("previous_page command");
    with_navigation(scope, CatalogPager::previous_page)
}

/// Moves to the next page.
///
/// ## Errors
/// `NAVIGATION_ERROR` on the last page.
pub fn next_page(scope: &AppScope) -> Result<CatalogResponse, ApiError> {
    debug!("next_page command");
    with_navigation(scope, CatalogPager::next_page)
}

fn with_navigation<F>(scope: &AppScope, navigate: F) -> Result<CatalogResponse, ApiError>
where
    F: FnOnce(&mut CatalogPager) -> atelier_core::CoreResult<u32>,
{
    scope.state::<CatalogState>().with_pager_mut(|p| -> Result<_, ApiError> {
        navigate(p)?;
        Ok(CatalogResponse::from(&*p))
    })
}
