//! # Catalog State
//!
//! The catalog browser's paginator: current page, page count, and the
//! `on_page_change` event surface.
//!
//! ## Page Change Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Presentation             CatalogPager               Listener           │
//! │  ────────────             ────────────               ────────           │
//! │                                                                         │
//! │  click "11" ────────────► change_page(11)                               │
//! │                              │ valid? ── no ──► Err (state unchanged)   │
//! │                              ▼ yes                                      │
//! │                           current = 11 ────────────► on_page_change(11) │
//! │                              │                                          │
//! │  re-render ◄──────────── window(): 1 … 10 11 12 … 20                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use atelier_core::validation::page_count;
use atelier_core::{CoreResult, PageWindow, Paginator};
use tracing::debug;

use super::filters::Listener;

/// Paginator plus its page-change listener.
#[derive(Default)]
pub struct CatalogPager {
    paginator: Paginator,
    on_page_change: Option<Listener<u32>>,
}

impl CatalogPager {
    pub fn new(total_pages: u32) -> Self {
        CatalogPager {
            paginator: Paginator::new(1, total_pages),
            on_page_change: None,
        }
    }

    /// Registers the listener invoked after every committed page change.
    pub fn on_page_change(&mut self, listener: impl FnMut(u32) + Send + 'static) {
        self.on_page_change = Some(Box::new(listener));
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Window to render, or `None` when the paginator is suppressed
    /// (zero or one page).
    pub fn window(&self) -> Option<PageWindow> {
        self.paginator
            .should_render()
            .then(|| self.paginator.window())
    }

    /// Recomputes the page count from a catalog size.
    pub fn set_item_count(&mut self, item_count: u64, page_size: u32) {
        let total = page_count(item_count, page_size);
        debug!(item_count, page_size, total_pages = total, "Catalog size changed");
        self.paginator.set_total(total);
    }

    /// Activates a concrete page marker.
    pub fn change_page(&mut self, page: u32) -> CoreResult<u32> {
        self.paginator.set_current(page)?;
        self.notify(page);
        Ok(page)
    }

    /// Moves back one page; rejected on page 1.
    pub fn previous_page(&mut self) -> CoreResult<u32> {
        let page = self.paginator.previous()?;
        self.change_page(page)
    }

    /// Moves forward one page; rejected on the last page.
    pub fn next_page(&mut self) -> CoreResult<u32> {
        let page = self.paginator.next()?;
        self.change_page(page)
    }

    fn notify(&mut self, page: u32) {
        if let Some(listener) = self.on_page_change.as_mut() {
            listener(page);
        }
    }
}

impl std::fmt::Debug for CatalogPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogPager")
            .field("paginator", &self.paginator)
            .field("on_page_change", &self.on_page_change.is_some())
            .finish()
    }
}

/// Scope-managed catalog state.
#[derive(Debug, Default)]
pub struct CatalogState {
    pager: Mutex<CatalogPager>,
}

impl CatalogState {
    pub fn new(pager: CatalogPager) -> Self {
        CatalogState {
            pager: Mutex::new(pager),
        }
    }

    pub fn with_pager<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CatalogPager) -> R,
    {
        let pager = self.pager.lock().unwrap_or_else(PoisonError::into_inner);
        f(&pager)
    }

    pub fn with_pager_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CatalogPager) -> R,
    {
        let mut pager = self.pager.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut pager)
    }
}
