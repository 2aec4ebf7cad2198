//! Configuration

use std::time::Duration;

use clap::Args;

use vitrine::pricing::TaxRate;

use crate::api::ApiConfig;

/// Backend and pricing configuration, from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Backend API base URL
    #[arg(long, env = "VITRINE_API_URL")]
    pub api_url: String,

    /// Bearer token for the backend, when required
    #[arg(long, env = "VITRINE_API_TOKEN")]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "VITRINE_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Tax rate in basis points (500 = 5%)
    #[arg(long, env = "VITRINE_TAX_RATE_BPS", default_value_t = 500)]
    pub tax_rate_bps: u32,
}

impl AppConfig {
    /// The API client configuration this config describes.
    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            token: self.api_token.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_basis_points(self.tax_rate_bps)
    }
}
