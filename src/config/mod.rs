use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the back-office console.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub estimating: EstimatingDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let default_tax_rate = env::var("APP_DEFAULT_TAX_RATE")
            .unwrap_or_else(|_| "0.10".to_string())
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidTaxRate)?;
        if !(0.0..=1.0).contains(&default_tax_rate) {
            return Err(ConfigError::InvalidTaxRate);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            estimating: EstimatingDefaults { default_tax_rate },
        })
    }
}

/// Tracing controls for the console binary.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Operator-facing defaults applied when a request leaves a field unset.
/// Rule tables (rates, option prices, surcharges) are owned by the engines
/// themselves and are not environment-driven.
#[derive(Debug, Clone)]
pub struct EstimatingDefaults {
    pub default_tax_rate: f64,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTaxRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTaxRate => {
                write!(f, "APP_DEFAULT_TAX_RATE must be a decimal between 0 and 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
