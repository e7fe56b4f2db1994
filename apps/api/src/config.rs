//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`.
//! A `.env` file is honoured through `dotenvy` before this module is consulted.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `RUST_LOG`: Logging level (default: "info,picture_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `PUBLIC_BASE_URL`: Prefix of generated picture URIs (default: "http://localhost:3000")
//! - `MOCK_PICTURE_COUNT`: Number of pictures in the mock dataset (default: 54)
//! - `PICTURE_PARTITION`: Partition segment of picture URIs (default: "default")
//! - `PICTURE_VARIANTS`: Comma separated resolution variants (default: "xs,s,m,origin")
//! - `PICTURE_THUMBNAIL`: Variant shown in list views (default: first variant)

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Base URL prepended to every generated picture URI, without trailing slash
    pub public_base_url: String,

    /// Size of the synthesized picture dataset
    pub mock_picture_count: usize,

    /// Partition the mock pictures belong to
    pub picture_partition: String,

    /// Resolution variants every mock picture exposes
    pub picture_variants: Vec<String>,

    /// Variant used as list thumbnail
    pub picture_thumbnail: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_base_url: "http://localhost:3000".to_string(),
            mock_picture_count: 54,
            picture_partition: "default".to_string(),
            picture_variants: default_variants(),
            picture_thumbnail: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration is unusable (empty variant list, unknown
    /// thumbnail variant).
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let public_base_url: String = env_or("PUBLIC_BASE_URL", defaults.public_base_url)?;

        let config = Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            mock_picture_count: env_or("MOCK_PICTURE_COUNT", defaults.mock_picture_count)?,
            picture_partition: env_or("PICTURE_PARTITION", defaults.picture_partition)?,
            picture_variants: match std::env::var("PICTURE_VARIANTS") {
                Ok(raw) => parse_variants(&raw),
                Err(_) => defaults.picture_variants,
            },
            picture_thumbnail: std::env::var("PICTURE_THUMBNAIL").ok(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that cannot be expressed by parsing alone.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated invariant.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.picture_variants.is_empty() {
            anyhow::bail!("PICTURE_VARIANTS must name at least one variant");
        }
        if self.picture_partition.trim().is_empty() {
            anyhow::bail!("PICTURE_PARTITION must not be empty");
        }
        if let Some(thumbnail) = &self.picture_thumbnail {
            if !self.picture_variants.contains(thumbnail) {
                anyhow::bail!(
                    "PICTURE_THUMBNAIL '{}' is not one of the configured variants",
                    thumbnail
                );
            }
        }
        Ok(())
    }
}

fn default_variants() -> Vec<String> {
    ["xs", "s", "m", "origin"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Split a comma separated variant list, dropping blanks and duplicates.
fn parse_variants(raw: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    for variant in raw.split(',').map(str::trim).filter(|v| !v.is_empty()) {
        if !variants.iter().any(|v| v == variant) {
            variants.push(variant.to_string());
        }
    }
    variants
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
