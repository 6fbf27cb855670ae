//! # Domain Types
//!
//! Core domain types used throughout the Atelier storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │    SaleType     │   │    ViewMode     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  email_id       │   │  ALL            │   │  grid           │       │
//! │  │                 │   │  FIXEDPRICE     │   │  list           │       │
//! │  │  (no roles, no  │   │  AUCTION        │   │                 │       │
//! │  │   token, no     │   │  REDEEMED       │   │                 │       │
//! │  │   expiry)       │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The enumerations are closed: an out-of-set value cannot be constructed,
//! so filter selection never needs a runtime membership check.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// User
// =============================================================================

/// Identity record held by the session.
///
/// ## Wire Format
/// Persisted in the credential mirror under the `user` key as
/// `{"emailId":"a@b.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    /// Email address identifying the signed-in collector.
    pub email_id: String,
}

impl User {
    /// Creates a user from an email address.
    pub fn new(email_id: impl Into<String>) -> Self {
        User {
            email_id: email_id.into(),
        }
    }

    /// Parses a user from its persisted JSON form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serializes the user to its persisted JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Sale Type
// =============================================================================

/// Catalog filter on how a listing is sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum SaleType {
    /// Every listing regardless of sale mechanism.
    #[default]
    All,
    /// Listings sold at a fixed price.
    FixedPrice,
    /// Listings sold by auction.
    Auction,
    /// Tokens already redeemed for the physical asset.
    Redeemed,
}

impl SaleType {
    /// Returns the wire name (`ALL`, `FIXEDPRICE`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SaleType::All => "ALL",
            SaleType::FixedPrice => "FIXEDPRICE",
            SaleType::Auction => "AUCTION",
            SaleType::Redeemed => "REDEEMED",
        }
    }
}

impl std::fmt::Display for SaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// View Mode
// =============================================================================

/// Catalog layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Returns the wire name (`grid` or `list`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
