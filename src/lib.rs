pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{
    ChannelNotifier, ConfiguredOutbound, HttpOutbound, SimulatedOutbound, TracingNotifier,
};
pub use crate::config::FormConfig;
pub use crate::core::{FormStatus, InquiryForm, SubmitOutcome};
pub use domain::model::{
    FieldErrors, FormKind, FormMessages, FormValues, InquiryField, InquiryRequest, ServiceKind,
};
pub use domain::ports::{Notification, NotificationLevel, Notifier, OutboundAction};
pub use utils::error::{InquiryError, Result};
