//! Form Snapshots
//!
//! Raw field values read from the page, and the local checks that turn them
//! into request payloads.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{Credentials, MenuItemDraft};

/// Login form values as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields are required; values are sent as typed.
    pub fn into_credentials(self) -> Result<Credentials, ValidationError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Credentials {
            username: self.username,
            password: self.password,
        })
    }
}

/// Add/edit form values as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub is_available: bool,
}

impl MenuItemForm {
    pub fn into_draft(self) -> Result<MenuItemDraft, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price = parse_price(&self.price)?;

        let category_id = self
            .category_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::MissingCategory)?;

        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());

        Ok(MenuItemDraft {
            name,
            description,
            price,
            category_id,
            is_available: self.is_available,
        })
    }
}

/// Positive decimal, plain or scientific notation. A positive number that
/// `Decimal` cannot hold (beyond 96 bits, or rounded to zero past 28
/// places) is reported apart from malformed input.
fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    match Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        Ok(price) if price > Decimal::ZERO => Ok(price),
        _ => match raw.parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Err(ValidationError::PriceOutOfRange),
            _ => Err(ValidationError::InvalidPrice),
        },
    }
}
