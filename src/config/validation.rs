use crate::config::types::{Config, FetcherConfig, PipelineConfig};
use crate::ConfigError;

/// Upper bound on worker count accepted from config or CLI
const MAX_PARALLEL: usize = 1000;

/// Upper bound on redirect hops
const MAX_REDIRECTS: usize = 50;

/// Upper bound on job queue slots
const MAX_QUEUE_CAPACITY: usize = 1_000_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_pipeline_config(&config.pipeline)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.parallel < 1 || config.parallel > MAX_PARALLEL {
        return Err(ConfigError::Validation(format!(
            "parallel must be between 1 and {}, got {}",
            MAX_PARALLEL, config.parallel
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= {}, got {}",
            MAX_REDIRECTS, config.max_redirects
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates pipeline configuration
fn validate_pipeline_config(config: &PipelineConfig) -> Result<(), ConfigError> {
    // 0 is the "match worker count" sentinel
    if config.queue_capacity > MAX_QUEUE_CAPACITY {
        return Err(ConfigError::Validation(format!(
            "queue-capacity must be <= {}, got {}",
            MAX_QUEUE_CAPACITY, config.queue_capacity
        )));
    }

    Ok(())
}
