use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    // Deployment mode label, only reported at startup
    #[serde(default = "default_app_env")]
    pub app_env: String,

    // The single browser origin granted CORS access
    #[serde(default = "default_cors_allowed_origin")]
    pub cors_allowed_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_app_env() -> String {
    "dev".to_string()
}

fn default_cors_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            app_env: default_app_env(),
            cors_allowed_origin: default_cors_allowed_origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.app_env, "dev");
        assert_eq!(config.cors_allowed_origin, "http://localhost:3000");
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config: Config = envy::from_iter(vars(&[
            ("APP_ENV", "production"),
            ("PORT", "9100"),
            ("HOST", "127.0.0.1"),
            ("CORS_ALLOWED_ORIGIN", "https://app.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.app_env, "production");
        assert_eq!(config.bind_addr(), "127.0.0.1:9100");
        assert_eq!(config.cors_allowed_origin, "https://app.example.com");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result: Result<Config, _> = envy::from_iter(vars(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
