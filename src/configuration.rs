use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub database_url: String,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .set_default("app_host", "0.0.0.0")?
        .set_default("app_port", 8080)?
        // configuration.yaml is optional, the environment alone is enough
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(config::Environment::default().try_parsing(true))
        // PORT takes precedence over APP_PORT, hosting platforms set it
        .set_override_option("app_port", std::env::var("PORT").ok())?
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_joins_host_and_port() {
        let settings = Settings {
            app_host: "127.0.0.1".to_string(),
            app_port: 8080,
            database_url: "postgres://localhost/minichat".to_string(),
        };

        assert_eq!("127.0.0.1:8080", settings.address());
    }
}
