use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub title: String,
    pub empty_message: String,
    #[serde(default = "default_true")]
    pub highlight_matches: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_true() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[ui]
title = "Product Categories"
empty_message = "No products matching selected criteria"
highlight_matches = true

[logging]
level = "debug"
"#;

/// Load the embedded configuration
///
/// There is no file system in the browser, so the only source is
/// `DEFAULT_CONFIG`, compiled into the binary.
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

impl AppConfig {
    /// Log level for `console_log`; unknown values fall back to `Debug`
    pub fn log_level(&self) -> log::Level {
        self.logging
            .level
            .parse::<log::Level>()
            .unwrap_or(log::Level::Debug)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig {
                title: "Product Categories".to_string(),
                empty_message: "No products matching selected criteria".to_string(),
                highlight_matches: true,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}
