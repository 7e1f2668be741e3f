pub mod form;

pub use crate::domain::model::{
    FieldErrors, FormKind, FormMessages, FormValues, InquiryField, InquiryRequest, ServiceKind,
};
pub use crate::domain::ports::{Notification, NotificationLevel, Notifier, OutboundAction};
pub use crate::utils::error::Result;
pub use form::{FormStatus, InquiryForm, SubmitOutcome};
