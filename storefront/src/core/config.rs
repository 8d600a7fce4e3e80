use shared::error::AppError;
use thiserror::Error;

/// Default messaging endpoint (WhatsApp click-to-chat)
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Restaurant phone in international format, digits only
pub const DEFAULT_MESSAGING_PHONE: &str = "5543984336883";

/// 站点配置 - 页面交互层的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WHATSAPP_BASE_URL | https://wa.me | Messaging endpoint base |
/// | WHATSAPP_PHONE | 5543984336883 | Recipient phone (digits only) |
/// | MENU_PATH | (built-in menu) | JSON menu file |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (stderr) | Daily rolling log directory |
/// | ENVIRONMENT | development | 运行环境 |
/// | DATE_PICKER_ENABLED | true | Attach date/time pickers |
///
/// # 示例
///
/// ```ignore
/// WHATSAPP_PHONE=5511999999999 MENU_PATH=menu.json cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Messaging endpoint base, without trailing slash
    pub messaging_base_url: String,
    /// Fixed recipient of every handoff link
    pub messaging_phone: String,
    /// Menu file; the built-in menu is used when unset
    pub menu_path: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// Whether the date/time pickers are available on this page
    pub date_picker_enabled: bool,
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("messaging phone must not be empty")]
    EmptyPhone,

    #[error("messaging phone must contain digits only, got '{0}'")]
    InvalidPhone(String),

    #[error("messaging base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            messaging_base_url: std::env::var("WHATSAPP_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_MESSAGING_BASE_URL.into()),
            messaging_phone: std::env::var("WHATSAPP_PHONE")
                .unwrap_or_else(|_| DEFAULT_MESSAGING_PHONE.into()),
            menu_path: std::env::var("MENU_PATH").ok().filter(|p| !p.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|p| !p.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            date_picker_enabled: std::env::var("DATE_PICKER_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Check the values every handoff link depends on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.messaging_phone.is_empty() {
            return Err(ConfigError::EmptyPhone);
        }
        if !self.messaging_phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidPhone(self.messaging_phone.clone()));
        }
        if !(self.messaging_base_url.starts_with("https://")
            || self.messaging_base_url.starts_with("http://"))
        {
            return Err(ConfigError::InvalidBaseUrl(self.messaging_base_url.clone()));
        }
        Ok(())
    }
}

impl Default for Config {
    /// Built-in defaults, independent of the process environment
    fn default() -> Self {
        Self {
            messaging_base_url: DEFAULT_MESSAGING_BASE_URL.into(),
            messaging_phone: DEFAULT_MESSAGING_PHONE.into(),
            menu_path: None,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            date_picker_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.environment, "development");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_validate_phone() {
        let mut config = Config::default();
        config.messaging_phone = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPhone));

        config.messaging_phone = "+55 43 98433".into();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPhone("+55 43 98433".into()))
        );
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = Config::default();
        config.messaging_base_url = "wa.me".into();
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("wa.me".into()));

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::ConfigError);
    }
}
