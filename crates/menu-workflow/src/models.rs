//! Models
//!
//! Wire types exchanged with the restaurant API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Login form payload for `POST /auth/login/json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login response. The token is optional; a cookie session may be enough.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Validated, not yet persisted menu item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category_id: i64,
    pub is_available: bool,
}

/// Menu item as the server returns it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub menu_item_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_true() -> bool {
    true
}
