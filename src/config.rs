//! Page Configuration
//!
//! Read from `data-*` attributes on `<body>`, which the server-rendered
//! template fills in.

use std::str::FromStr;

use menu_workflow::{DEFAULT_API_PREFIX, DEFAULT_DASHBOARD_PATH};

pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Which page the script is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Login,
    MenuManagement,
    Other,
}

impl FromStr for PageKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "login" => PageKind::Login,
            "menu-management" | "menu" => PageKind::MenuManagement,
            _ => PageKind::Other,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// `None` when the template did not say
    pub page: Option<PageKind>,
    pub api_prefix: String,
    pub dashboard_path: String,
    pub token_key: String,
    pub log_level: log::LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: None,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Build from an attribute lookup (`"page"` reads `data-page`).
    /// Missing or blank attributes keep their defaults.
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| attr(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            page: get("page").and_then(|v| v.parse().ok()),
            api_prefix: get("api-prefix").unwrap_or(defaults.api_prefix),
            dashboard_path: get("dashboard-path").unwrap_or(defaults.dashboard_path),
            token_key: get("token-key").unwrap_or(defaults.token_key),
            log_level: get("log-level")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Read from `<body>`
    pub fn from_body(body: &web_sys::HtmlElement) -> Self {
        Self::from_attrs(|name| body.get_attribute(&format!("data-{}", name)))
    }
}
