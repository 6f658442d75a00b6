use serde::Deserialize;

/// Default number of concurrent workers
pub const DEFAULT_PARALLEL: usize = 10;

/// Main configuration structure for urlhash
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub pipeline: PipelineConfig,
}

/// HTTP fetching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FetcherConfig {
    /// Maximum number of targets fetched at the same time
    pub parallel: usize,

    /// Total time allowed for one request, body included (seconds)
    pub timeout_secs: u64,

    /// Time allowed to establish a connection (seconds)
    pub connect_timeout_secs: u64,

    /// Number of redirect hops followed before giving up
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            parallel: DEFAULT_PARALLEL,
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 10,
            user_agent: format!("urlhash/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Job distribution configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PipelineConfig {
    /// Capacity of the job queue; 0 means one slot per worker
    pub queue_capacity: usize,
}
