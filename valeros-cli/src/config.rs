//! Runtime configuration.
//!
//! Resolution order: explicit flags win over `VALEROS_*` environment
//! variables, which win over defaults. Credentials are environment-only.

use std::time::Duration;
use valeros_index_core::HttpBackendConfig;

const DEFAULT_URL: &str = "http://localhost:9200";
const DEFAULT_INDEX: &str = "valeros";

/// Resolved configuration for a `load` run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Search backend URL
    pub url: String,
    /// Optional basic-auth username (`VALEROS_USER`)
    pub username: Option<String>,
    /// Optional basic-auth password (`VALEROS_PASSWORD`)
    pub password: Option<String>,
    /// Target index name
    pub index: String,
    /// Replace `.` with a space in predicate field keys
    pub replace_dots_with_spaces: bool,
}

impl Config {
    /// Resolve configuration from flags and the process environment.
    pub fn resolve(url: Option<String>, index: Option<String>, replace_dots: bool) -> Self {
        Self::resolve_from(url, index, replace_dots, |key| {
            std::env::var(key).ok().filter(|v| !v.is_empty())
        })
    }

    fn resolve_from(
        url: Option<String>,
        index: Option<String>,
        replace_dots: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let url = url
            .or_else(|| env("VALEROS_URL"))
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let index = index
            .or_else(|| env("VALEROS_INDEX"))
            .unwrap_or_else(|| DEFAULT_INDEX.to_string());
        let replace_dots_with_spaces = replace_dots
            || env("VALEROS_REPLACE_DOTS")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);

        Self {
            url,
            username: env("VALEROS_USER"),
            password: env("VALEROS_PASSWORD"),
            index,
            replace_dots_with_spaces,
        }
    }

    /// Backend connection settings for this configuration.
    pub fn backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(30),
        }
    }
}
