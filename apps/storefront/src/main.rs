//! # Atelier Storefront Entry Point
//!
//! Boots the application layer and reports the restored session.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file + environment)
//! 3. Open the credential mirror (app data directory)
//! 4. Hydrate the session and register state
//! 5. Hand the scope to the presentation layer

use atelier_storefront::commands;
use tracing::{error, info};

fn main() {
    let scope = match atelier_storefront::run() {
        Ok(scope) => scope,
        Err(e) => {
            error!("Storefront startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let session = commands::session::get_session(&scope);
    let config = commands::config::get_config(&scope);
    info!(
        store_name = %config.store_name,
        signed_in = session.is_signed_in,
        email_id = session.user.as_ref().map(|u| u.email_id.as_str()),
        "Storefront ready"
    );
}
