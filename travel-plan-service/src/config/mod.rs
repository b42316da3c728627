use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Temperature used for itinerary generation. Kept at zero so repeated
/// requests for the same route produce stable suggestions.
const DEFAULT_TEMPERATURE: f32 = 0.0;

#[derive(Debug, Clone)]
pub struct TravelPlanConfig {
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model for itinerary text generation (e.g., gemini-1.5-flash-001)
    pub text_model: String,
    /// Sampling temperature passed on every generation call
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl TravelPlanConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(TravelPlanConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("TRAVEL_TEXT_MODEL", Some("gemini-1.5-flash-001"), is_prod)?,
                temperature: get_env(
                    "TRAVEL_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
            },
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
