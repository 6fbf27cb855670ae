//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::{AppScope, ConfigState};

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (store name, page size)
/// - Wallet connection prompt (app name, chains, project id)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(scope: &AppScope) -> ConfigState {
    debug!("get_config command");
    scope.state::<ConfigState>().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;
    use atelier_store::MemoryStorage;

    #[test]
    fn test_get_config_returns_managed_value() {
        let config = ConfigState {
            store_name: "Maison".to_string(),
            ..ConfigState::default()
        };
        let scope = bootstrap(config.clone(), Box::new(MemoryStorage::new()));
        assert_eq!(get_config(&scope), config);
    }

    #[test]
    #[should_panic(expected = "ConfigState")]
    fn test_get_config_outside_scope_panics() {
        get_config(&AppScope::new());
    }
}
