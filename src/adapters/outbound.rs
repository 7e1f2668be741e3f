use crate::config::{FormConfig, OutboundMode};
use crate::domain::model::InquiryRequest;
use crate::domain::ports::OutboundAction;
use crate::utils::error::{InquiryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Stands in for a backend: waits a fixed delay, then logs the payload.
#[derive(Debug, Clone)]
pub struct SimulatedOutbound {
    delay: Duration,
    fail: bool,
}

impl SimulatedOutbound {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Every `send` fails after the delay.
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }
}

#[async_trait]
impl OutboundAction for SimulatedOutbound {
    async fn send(&self, request: &InquiryRequest) -> Result<()> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(InquiryError::Submission {
                message: "simulated outbound failure".to_string(),
            });
        }

        let payload = serde_json::to_string(request)?;
        tracing::info!("Form data: {}", payload);
        Ok(())
    }
}

/// Posts the inquiry as JSON to a real endpoint.
#[derive(Debug, Clone)]
pub struct HttpOutbound {
    client: Client,
    endpoint: String,
}

impl HttpOutbound {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OutboundAction for HttpOutbound {
    async fn send(&self, request: &InquiryRequest) -> Result<()> {
        tracing::debug!("Posting inquiry to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        tracing::debug!("Inquiry endpoint response status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(InquiryError::Submission {
                message: format!("endpoint responded with {}", status),
            })
        }
    }
}

/// Outbound action chosen from `[outbound]` configuration; the simulated
/// delay defaults to the configured form kind's.
#[derive(Debug, Clone)]
pub enum ConfiguredOutbound {
    Simulated(SimulatedOutbound),
    Http(HttpOutbound),
}

impl ConfiguredOutbound {
    pub fn from_config(form_config: &FormConfig) -> Result<Self> {
        let config = &form_config.outbound;
        match config.mode {
            OutboundMode::Simulated => {
                let outbound = if config.should_fail() {
                    SimulatedOutbound::failing(form_config.delay())
                } else {
                    SimulatedOutbound::new(form_config.delay())
                };
                Ok(ConfiguredOutbound::Simulated(outbound))
            }
            OutboundMode::Http => {
                let endpoint = config
                    .endpoint
                    .clone()
                    .ok_or_else(|| InquiryError::ConfigError {
                        message: "outbound.endpoint is required when mode = \"http\"".to_string(),
                    })?;
                Ok(ConfiguredOutbound::Http(HttpOutbound::new(
                    endpoint,
                    config.timeout(),
                )?))
            }
        }
    }
}

#[async_trait]
impl OutboundAction for ConfiguredOutbound {
    async fn send(&self, request: &InquiryRequest) -> Result<()> {
        match self {
            ConfiguredOutbound::Simulated(outbound) => outbound.send(request).await,
            ConfiguredOutbound::Http(outbound) => outbound.send(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceKind;
    use chrono::Utc;

    fn request() -> InquiryRequest {
        InquiryRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "5551234567".to_string(),
            service: ServiceKind::OfficeCleaning,
            other_service: None,
            message: "Weekly office clean please".to_string(),
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_simulated_outbound_succeeds_after_delay() {
        let outbound = SimulatedOutbound::new(Duration::from_millis(20));
        let started = std::time::Instant::now();

        assert!(outbound.send(&request()).await.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_simulated_outbound_can_fail() {
        let outbound = SimulatedOutbound::failing(Duration::from_millis(1));
        assert!(matches!(
            outbound.send(&request()).await,
            Err(InquiryError::Submission { .. })
        ));
    }

    #[test]
    fn test_configured_outbound_from_default_config() {
        let outbound = ConfiguredOutbound::from_config(&FormConfig::default()).unwrap();
        match outbound {
            ConfiguredOutbound::Simulated(sim) => {
                assert_eq!(sim.delay, Duration::from_millis(2000));
                assert!(!sim.fail);
            }
            other => panic!("expected simulated outbound, got {:?}", other),
        }
    }

    #[test]
    fn test_configured_outbound_uses_quote_delay() {
        let config = FormConfig::from_toml_str("[form]\nkind = \"quote\"\n").unwrap();
        match ConfiguredOutbound::from_config(&config).unwrap() {
            ConfiguredOutbound::Simulated(sim) => {
                assert_eq!(sim.delay, Duration::from_millis(1500))
            }
            other => panic!("expected simulated outbound, got {:?}", other),
        }
    }

    #[test]
    fn test_configured_http_outbound_requires_endpoint() {
        let mut config = FormConfig::default();
        config.outbound.mode = OutboundMode::Http;
        assert!(ConfiguredOutbound::from_config(&config).is_err());

        config.outbound.endpoint = Some("https://api.example.com/inquiries".to_string());
        match ConfiguredOutbound::from_config(&config).unwrap() {
            ConfiguredOutbound::Http(http) => {
                assert_eq!(http.endpoint(), "https://api.example.com/inquiries")
            }
            other => panic!("expected http outbound, got {:?}", other),
        }
    }
}
