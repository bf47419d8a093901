//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers so the fetch layer, the table
//! engine and the configuration all agree on the same defaults.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Rows shown per page in every table view
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Path of the player resource below the configured API domain
pub const PLAYER_API_PATH: &str = "/api/v1/player";

/// Application name used for config and log locations
pub const APP_NAME: &str = "cbb_insight";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "cbb_insight.log";

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// TTL for the full player listing (5 minutes). Season stats change at
    /// most once a day, the short TTL only guards against hammering the API.
    pub const PLAYER_LIST_SECONDS: u64 = 300;

    /// TTL for filtered listings (by school, conference, ...)
    pub const FILTERED_PLAYERS_SECONDS: u64 = 600;
}

/// HTTP response cache sizing
pub mod cache_size {
    /// Maximum number of cached HTTP responses per client
    pub const HTTP_RESPONSES: usize = 64;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "CBB_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "CBB_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "CBB_HTTP_TIMEOUT";

    /// Environment variable for table page size override
    pub const PAGE_SIZE: &str = "CBB_PAGE_SIZE";
}

/// External asset locations
pub mod assets {
    /// Base URL of the Sports-Reference school pages that host team logos
    pub const SPORTS_REFERENCE_SCHOOLS_URL: &str = "https://www.sports-reference.com/cbb/schools";

    /// Placeholder logo served when no logo can be matched (inline SVG)
    pub const DEFAULT_SCHOOL_LOGO: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTAwIiBoZWlnaHQ9IjEwMCIgdmlld0JveD0iMCAwIDEwMCAxMDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIxMDAiIGhlaWdodD0iMTAwIiBmaWxsPSIjZjhmOWZhIi8+Cjx0ZXh0IHg9IjUwIiB5PSI1NSIgZm9udC1mYW1pbHk9IkFyaWFsIiBmb250LXNpemU9IjEyIiBmaWxsPSIjNmM3NTdkIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIj5TY2hvb2w8L3RleHQ+Cjwvc3ZnPg==";
}
