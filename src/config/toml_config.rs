use crate::domain::model::{FormKind, FormMessages};
use crate::utils::error::{InquiryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub form: FormSection,
    #[serde(default)]
    pub outbound: OutboundConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSection {
    #[serde(default)]
    pub kind: FormKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutboundMode {
    #[default]
    Simulated,
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutboundConfig {
    #[serde(default)]
    pub mode: OutboundMode,
    pub delay_ms: Option<u64>,
    pub fail: Option<bool>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl OutboundConfig {
    /// Simulated delay; each form kind has its own default.
    pub fn delay_for(&self, kind: FormKind) -> Duration {
        Duration::from_millis(self.delay_ms.unwrap_or_else(|| kind.default_delay_ms()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn should_fail(&self) -> bool {
        self.fail.unwrap_or(false)
    }
}

/// Overrides for the toast texts; unset entries fall back to the form kind's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesConfig {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessagesConfig {
    pub fn resolve(&self, kind: FormKind) -> FormMessages {
        let defaults = kind.default_messages();
        FormMessages {
            success: self.success.clone().unwrap_or(defaults.success),
            error: self.error.clone().unwrap_or(defaults.error),
        }
    }
}

impl FormConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InquiryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| InquiryError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INQUIRY_ENDPOINT})
    fn substitute_env_vars(content: &str) -> String {
        use regex::{Captures, Regex};
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env pattern compiles"));

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn kind(&self) -> FormKind {
        self.form.kind
    }

    pub fn delay(&self) -> Duration {
        self.outbound.delay_for(self.kind())
    }

    pub fn messages(&self) -> FormMessages {
        self.messages.resolve(self.kind())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.outbound.mode == OutboundMode::Http {
            let endpoint = self.outbound.endpoint.as_deref().ok_or_else(|| {
                InquiryError::ConfigError {
                    message: "outbound.endpoint is required when mode = \"http\"".to_string(),
                }
            })?;
            validation::validate_url("outbound.endpoint", endpoint)?;
        }

        if let Some(timeout) = self.outbound.timeout_seconds {
            validation::validate_positive_number("outbound.timeout_seconds", timeout, 1)?;
        }

        if let Some(success) = &self.messages.success {
            validation::validate_non_empty_string("messages.success", success)?;
        }
        if let Some(error) = &self.messages.error {
            validation::validate_non_empty_string("messages.error", error)?;
        }

        Ok(())
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FormConfig::from_toml_str("").unwrap();

        assert_eq!(config.kind(), FormKind::Contact);
        assert_eq!(config.outbound.mode, OutboundMode::Simulated);
        assert_eq!(config.delay(), Duration::from_millis(2000));
        assert!(!config.outbound.should_fail());
        assert_eq!(config.messages(), FormKind::Contact.default_messages());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quote_form_defaults() {
        let config = FormConfig::from_toml_str("[form]\nkind = \"quote\"\n").unwrap();

        assert_eq!(config.kind(), FormKind::Quote);
        assert_eq!(config.delay(), Duration::from_millis(1500));
        assert_eq!(
            config.messages().success,
            "Request sent! We will contact you soon."
        );
        assert_eq!(
            config.messages().error,
            "Failed to send request. Please try again."
        );
    }

    #[test]
    fn test_quote_form_overrides() {
        let toml_content = r#"
[form]
kind = "quote"

[outbound]
delay_ms = 10

[messages]
error = "Quote request failed."
"#;
        let config = FormConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.delay(), Duration::from_millis(10));
        assert_eq!(config.messages().error, "Quote request failed.");
        assert_eq!(
            config.messages().success,
            "Request sent! We will contact you soon."
        );
    }

    #[test]
    fn test_unknown_form_kind() {
        assert!(FormConfig::from_toml_str("[form]\nkind = \"newsletter\"\n").is_err());
    }

    #[test]
    fn test_parse_http_config() {
        let toml_content = r#"
[outbound]
mode = "http"
endpoint = "https://api.example.com/inquiries"
timeout_seconds = 5

[messages]
success = "Thanks!"
"#;

        let config = FormConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.outbound.mode, OutboundMode::Http);
        assert_eq!(config.outbound.timeout(), Duration::from_secs(5));
        assert_eq!(config.messages().success, "Thanks!");
        assert_eq!(
            config.messages().error,
            FormKind::Contact.default_messages().error
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_http_mode_requires_endpoint() {
        let config = FormConfig::from_toml_str("[outbound]\nmode = \"http\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(InquiryError::ConfigError { .. })
        ));

        let config = FormConfig::from_toml_str(
            "[outbound]\nmode = \"http\"\nendpoint = \"ftp://example.com\"\n",
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(InquiryError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_timeout_and_blank_messages() {
        let config = FormConfig::from_toml_str("[outbound]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = FormConfig::from_toml_str("[messages]\nerror = \"   \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            FormConfig::from_toml_str("[outbound\nmode = "),
            Err(InquiryError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SPARKLE_TEST_ENDPOINT", "https://test.api.com/inquiries");

        let toml_content = r#"
[outbound]
mode = "http"
endpoint = "${SPARKLE_TEST_ENDPOINT}"
"#;

        let config = FormConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.outbound.endpoint.as_deref(),
            Some("https://test.api.com/inquiries")
        );

        std::env::remove_var("SPARKLE_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[outbound]\ndelay_ms = 50\nfail = true\n")
            .unwrap();

        let config = FormConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.delay(), Duration::from_millis(50));
        assert!(config.outbound.should_fail());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FormConfig::from_file("/definitely/not/here.toml"),
            Err(InquiryError::Io(_))
        ));
    }
}
