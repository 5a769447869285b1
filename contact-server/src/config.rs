//! Server configuration, loaded from environment variables at startup.

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_DATABASE_URL: &str = "sqlite://contact.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration for contact-server.
///
/// Every field has a default so the server runs against a local SQLite file
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`).
    pub bind_address: String,

    /// sqlx connection URL. The scheme picks the SQL dialect:
    /// `sqlite:` for SQLite, `mysql://` for MySQL / MariaDB.
    pub database_url: String,

    /// Upper bound on pooled store connections.
    pub max_connections: u32,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated CORS allow-list. `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// Mount Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_owned(),
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            log_json: false,
            cors_allowed_origins: None,
            enable_swagger: true,
        }
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("CONTACT_BIND", DEFAULT_BIND),
            database_url: env_or("CONTACT_DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: parse_env("CONTACT_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            log_level: env_or("CONTACT_LOG", DEFAULT_LOG_LEVEL),
            log_json: env_flag("CONTACT_LOG_JSON", false),
            cors_allowed_origins: std::env::var("CONTACT_CORS_ORIGINS")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            enable_swagger: env_flag("CONTACT_ENABLE_SWAGGER", true),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| parse_flag(&v).unwrap_or(default))
        .unwrap_or(default)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" => Some(true),
        "0" => Some(false),
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_target_local_sqlite_on_port_5000() {
        let cfg = Config::default();
        assert_eq!(cfg.bind_address, "0.0.0.0:5000");
        assert!(cfg.database_url.starts_with("sqlite:"));
        assert!(cfg.cors_allowed_origins.is_none());
        assert!(cfg.enable_swagger);
    }

    #[test]
    fn flags_accept_numeric_and_word_forms() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("yes"), None);
    }
}
