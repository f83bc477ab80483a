use crate::assessment::domain::Language;
use crate::assessment::scoring::{ScoringConfig, DEFAULT_PRIORITY_LIMIT};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assessment: AssessmentConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let language = match env::var("APP_LANG") {
            Ok(raw) => Language::parse(&raw).ok_or(ConfigError::InvalidLanguage(raw))?,
            Err(_) => Language::default(),
        };

        let priority_limit = match env::var("APP_PRIORITY_LIMIT") {
            Ok(raw) => parse_priority_limit(&raw)?,
            Err(_) => DEFAULT_PRIORITY_LIMIT,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            assessment: AssessmentConfig {
                language,
                priority_limit,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_priority_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidPriorityLimit(raw.to_string())),
    }
}

/// Report defaults; CLI flags override them per run.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    pub language: Language,
    pub priority_limit: usize,
}

impl AssessmentConfig {
    pub fn scoring(&self) -> ScoringConfig {
        ScoringConfig {
            priority_limit: self.priority_limit,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLanguage(String),
    InvalidPriorityLimit(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLanguage(value) => {
                write!(f, "APP_LANG must be GR or EN, got '{}'", value)
            }
            ConfigError::InvalidPriorityLimit(value) => {
                write!(f, "APP_PRIORITY_LIMIT must be a positive integer, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
