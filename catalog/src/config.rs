use std::env;

pub const DEFAULT_LOG_FILTER: &str = "info,catalog=debug";
pub const DEFAULT_PER_PAGE: usize = 15;
pub const DEFAULT_MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Page size used when a listing does not ask for one
    pub default_per_page: usize,
    /// Largest page size a listing may request
    pub max_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable numbers keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let number = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(default)
        };

        let max_per_page = number("CATALOG_MAX_PER_PAGE", DEFAULT_MAX_PER_PAGE);
        Self {
            log_filter: lookup("CATALOG_LOG_FILTER")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            default_per_page: number("CATALOG_DEFAULT_PER_PAGE", DEFAULT_PER_PAGE)
                .min(max_per_page),
            max_per_page,
        }
    }
}
