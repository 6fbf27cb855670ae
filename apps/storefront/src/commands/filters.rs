//! # Filter Commands
//!
//! Commands for the catalog's sale-type filter and view mode.

use atelier_core::{SaleType, ViewMode};
use tracing::debug;

use crate::state::{AppScope, FilterState, FiltersSnapshot};

/// Gets the current sale-type filter and view mode.
pub fn get_filters(scope: &AppScope) -> FiltersSnapshot {
    debug!("get_filters command");
    scope.state::<FilterState>().with_filters(|f| f.snapshot())
}

/// Selects a sale-type filter.
///
/// The registered listener fires on every call, including re-selecting the
/// active value.
pub fn set_sale_type(scope: &AppScope, sale_type: SaleType) -> FiltersSnapshot {
    debug!(%sale_type, "set_sale_type command");
    scope.state::<FilterState>().with_filters_mut(|f| {
        f.set_sale_type(sale_type);
        f.snapshot()
    })
}

/// Switches between grid and list layout.
pub fn set_view_mode(scope: &AppScope, view_mode: ViewMode) -> FiltersSnapshot {
    debug!(%view_mode, "set_view_mode command");
    scope.state::<FilterState>().with_filters_mut(|f| {
        f.set_view_mode(view_mode);
        f.snapshot()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;
    use crate::state::ConfigState;
    use atelier_store::MemoryStorage;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_filter_commands() {
        let scope = bootstrap(ConfigState::default(), Box::new(MemoryStorage::new()));
        assert_eq!(get_filters(&scope).active_sale_type, SaleType::All);

        let snapshot = set_sale_type(&scope, SaleType::FixedPrice);
        assert_eq!(snapshot.active_sale_type, SaleType::FixedPrice);
        assert_eq!(snapshot.view_mode, ViewMode::Grid);

        let snapshot = set_view_mode(&scope, ViewMode::List);
        assert_eq!(snapshot.active_sale_type, SaleType::FixedPrice);
        assert_eq!(get_filters(&scope), snapshot);
    }

    #[test]
    fn test_listener_fires_through_command() {
        let scope = bootstrap(ConfigState::default(), Box::new(MemoryStorage::new()));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        scope
            .state::<FilterState>()
            .with_filters_mut(|f| f.on_view_change(move |v| sink.lock().unwrap().push(v)));

        set_view_mode(&scope, ViewMode::Grid);
        set_view_mode(&scope, ViewMode::Grid);
        assert_eq!(*seen.lock().unwrap(), vec![ViewMode::Grid, ViewMode::Grid]);
    }
}
