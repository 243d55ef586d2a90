//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use thiserror::Error;

/// Checkout destination used when `CHECKOUT_URL` is not set.
pub const DEFAULT_CHECKOUT_URL: &str = "https://pay.kiwify.com.br/SykVrzJ?afid=1gMqmYXp";

/// Environment variable overriding the checkout destination.
pub const CHECKOUT_URL_ENV: &str = "CHECKOUT_URL";

/// Name of the `<meta>` tag carrying the checkout URL to the hydrated client.
pub const CHECKOUT_URL_META: &str = "checkout-url";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("checkout URL is empty")]
    Empty,

    #[error("checkout URL is not a valid URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("checkout URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),

    #[error("checkout URL has no host")]
    MissingHost,
}

/// Validated absolute checkout link.
///
/// Keeps the string exactly as configured so every link on the page carries
/// the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::AsRef)]
#[as_ref(str)]
pub struct CheckoutUrl(String);

impl CheckoutUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::Empty);
        }

        let parsed = url::Url::parse(raw)?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingHost);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CheckoutUrl {
    fn default() -> Self {
        Self(DEFAULT_CHECKOUT_URL.to_string())
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Destination of every call-to-action link
    pub checkout_url: CheckoutUrl,
}

impl Config {
    /// Build configuration from an arbitrary variable lookup.
    ///
    /// An unset variable yields the default; a set but invalid one is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let checkout_url = match lookup(CHECKOUT_URL_ENV) {
            Some(raw) => CheckoutUrl::parse(&raw)?,
            None => CheckoutUrl::default(),
        };
        Ok(Self { checkout_url })
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file. Invalid
    /// values are logged and replaced by their defaults.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
            tracing::warn!("{CHECKOUT_URL_ENV} rejected ({err}), using {DEFAULT_CHECKOUT_URL}");
            Self::default()
        })
    }

    /// Process-wide configuration, resolved on first use.
    #[cfg(feature = "ssr")]
    pub fn global() -> &'static Config {
        static CONFIG: std::sync::OnceLock<Config> = std::sync::OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    /// Check if the checkout URL was overridden
    pub fn has_custom_checkout(&self) -> bool {
        self.checkout_url.as_str() != DEFAULT_CHECKOUT_URL
    }
}
