use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub database_url: Option<String>,
    pub min_target_questions: usize,
    pub request_timeout_secs: u64,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("APP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("APP_PORT must be a number"),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            min_target_questions: env::var("MIN_TARGET_QUESTIONS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .expect("MIN_TARGET_QUESTIONS must be a number"),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a number"),
            otel_service_name: env::var("OTEL_SERVICE_NAME")
                .unwrap_or_else(|_| "seo-audit-service".to_string()),
            otel_exporter_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:4317".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            database_url: None,
            min_target_questions: 1,
            request_timeout_secs: 30,
            otel_service_name: "seo-audit-service".to_string(),
            otel_exporter_endpoint: "http://localhost:4317".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_memory_store() {
        let config = Config::default();
        assert!(config.database_url.is_none());
        assert_eq!(config.min_target_questions, 1);
        assert!(!config.is_production());
    }

    #[test]
    fn test_is_production() {
        let config = Config {
            environment: "production".to_string(),
            ..Config::default()
        };
        assert!(config.is_production());
    }
}
