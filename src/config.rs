//! Server configuration
//!
//! Read from environment variables with development defaults. Unparseable
//! values fall back to the default rather than aborting startup.

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;
pub const DEFAULT_UPLOAD_RETENTION: Duration = Duration::from_secs(3600);
pub const DEFAULT_WIKIPEDIA_REST_URL: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Where per-request randomness comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomSource {
    /// Fresh OS entropy per request
    Entropy,
    /// Every request seeded with the same value (reproducible responses)
    Fixed(u64),
}

impl RandomSource {
    pub fn rng(&self) -> StdRng {
        match self {
            RandomSource::Entropy => StdRng::from_entropy(),
            RandomSource::Fixed(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// What the running process is able to do. Read-only after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// A trained classifier is loaded. The heuristic engine never loads one.
    pub model_loaded: bool,
}

#[derive(Debug, Clone)]
pub struct WikipediaConfig {
    pub rest_url: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            rest_url: DEFAULT_WIKIPEDIA_REST_URL.to_string(),
            api_url: DEFAULT_WIKIPEDIA_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub upload_retention: Duration,
    /// `None` disables encyclopedia enrichment
    pub wikipedia: Option<WikipediaConfig>,
    pub random: RandomSource,
    pub capabilities: Capabilities,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from("uploads"),
            static_dir: PathBuf::from("static"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            upload_retention: DEFAULT_UPLOAD_RETENTION,
            wikipedia: Some(WikipediaConfig::default()),
            random: RandomSource::Entropy,
            capabilities: Capabilities::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment in production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let upload_dir = lookup("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir);
        let static_dir = lookup("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir);

        let max_upload_bytes = lookup("MAX_UPLOAD_BYTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_upload_bytes);

        let upload_retention = lookup("UPLOAD_RETENTION_SECS")
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.upload_retention);

        let wikipedia_enabled = lookup("WIKIPEDIA_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let wikipedia = wikipedia_enabled.then(|| {
            let base = WikipediaConfig::default();
            WikipediaConfig {
                rest_url: lookup("WIKIPEDIA_REST_URL").unwrap_or(base.rest_url),
                api_url: lookup("WIKIPEDIA_API_URL").unwrap_or(base.api_url),
                timeout: base.timeout,
            }
        });

        let random = lookup("FLORA_RNG_SEED")
            .and_then(|v| v.parse().ok())
            .map(RandomSource::Fixed)
            .unwrap_or(RandomSource::Entropy);

        Self {
            port,
            upload_dir,
            static_dir,
            max_upload_bytes,
            upload_retention,
            wikipedia,
            random,
            capabilities: defaults.capabilities,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off")
}
