//! # Filter State
//!
//! The catalog's two independent selections: sale-type filter and view mode.
//!
//! Every `set_*` call replaces the value and then invokes the registered
//! listener exactly once, even when the value did not change.

use std::sync::{Mutex, PoisonError};

use atelier_core::{SaleType, ViewMode};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Change listener for one selection.
pub type Listener<T> = Box<dyn FnMut(T) + Send>;

/// Current sale-type filter and view mode, plus their change listeners.
#[derive(Default)]
pub struct FilterSelection {
    sale_type: SaleType,
    view_mode: ViewMode,
    on_sale_type_change: Option<Listener<SaleType>>,
    on_view_change: Option<Listener<ViewMode>>,
}

impl FilterSelection {
    /// Starts at `ALL` / `grid` with no listeners.
    pub fn new() -> Self {
        FilterSelection::default()
    }

    #[inline]
    pub fn active_sale_type(&self) -> SaleType {
        self.sale_type
    }

    #[inline]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Registers the sale-type listener, replacing any previous one.
    pub fn on_sale_type_change(&mut self, listener: impl FnMut(SaleType) + Send + 'static) {
        self.on_sale_type_change = Some(Box::new(listener));
    }

    /// Registers the view-mode listener, replacing any previous one.
    pub fn on_view_change(&mut self, listener: impl FnMut(ViewMode) + Send + 'static) {
        self.on_view_change = Some(Box::new(listener));
    }

    pub fn set_sale_type(&mut self, value: SaleType) {
        self.sale_type = value;
        if let Some(listener) = self.on_sale_type_change.as_mut() {
            listener(value);
        }
    }

    pub fn set_view_mode(&mut self, value: ViewMode) {
        self.view_mode = value;
        if let Some(listener) = self.on_view_change.as_mut() {
            listener(value);
        }
    }

    /// Snapshot for the presentation layer.
    pub fn snapshot(&self) -> FiltersSnapshot {
        FiltersSnapshot {
            active_sale_type: self.sale_type,
            view_mode: self.view_mode,
        }
    }
}

impl std::fmt::Debug for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSelection")
            .field("sale_type", &self.sale_type)
            .field("view_mode", &self.view_mode)
            .field("on_sale_type_change", &self.on_sale_type_change.is_some())
            .field("on_view_change", &self.on_view_change.is_some())
            .finish()
    }
}

/// Current filter values as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FiltersSnapshot {
    pub active_sale_type: SaleType,
    pub view_mode: ViewMode,
}

/// Scope-managed filter state.
///
/// Listeners run while the lock is held; they must not call back into
/// `FilterState`.
#[derive(Debug, Default)]
pub struct FilterState {
    selection: Mutex<FilterSelection>,
}

impl FilterState {
    pub fn new(selection: FilterSelection) -> Self {
        FilterState {
            selection: Mutex::new(selection),
        }
    }

    pub fn with_filters<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FilterSelection) -> R,
    {
        let selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        f(&selection)
    }

    pub fn with_filters_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FilterSelection) -> R,
    {
        let mut selection = self.selection.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_defaults() {
        let filters = FilterSelection::new();
        assert_eq!(filters.active_sale_type(), SaleType::All);
        assert_eq!(filters.view_mode(), ViewMode::Grid);
    }

    #[test]
    fn test_same_value_notifies_every_time() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut filters = FilterSelection::new();
        filters.on_sale_type_change(move |t| sink.lock().unwrap().push(t));

        filters.set_sale_type(SaleType::Auction);
        filters.set_sale_type(SaleType::Auction);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![SaleType::Auction, SaleType::Auction]
        );
        assert_eq!(filters.active_sale_type(), SaleType::Auction);
    }

    #[test]
    fn test_selections_are_independent() {
        let views = Arc::new(Mutex::new(0));
        let sales = Arc::new(Mutex::new(0));
        let (v, s) = (Arc::clone(&views), Arc::clone(&sales));

        let mut filters = FilterSelection::new();
        filters.on_view_change(move |_| *v.lock().unwrap() += 1);
        filters.on_sale_type_change(move |_| *s.lock().unwrap() += 1);

        filters.set_view_mode(ViewMode::List);
        assert_eq!(*views.lock().unwrap(), 1);
        assert_eq!(*sales.lock().unwrap(), 0);
        assert_eq!(filters.active_sale_type(), SaleType::All);
        assert_eq!(filters.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_set_without_listener() {
        let mut filters = FilterSelection::new();
        filters.set_sale_type(SaleType::Redeemed);
        filters.set_view_mode(ViewMode::List);
        assert_eq!(
            filters.snapshot(),
            FiltersSnapshot {
                active_sale_type: SaleType::Redeemed,
                view_mode: ViewMode::List,
            }
        );
    }

    #[test]
    fn test_snapshot_wire_shape() {
        let json = serde_json::to_string(&FilterSelection::new().snapshot()).unwrap();
        assert_eq!(json, r#"{"activeSaleType":"ALL","viewMode":"grid"}"#);
    }
}
