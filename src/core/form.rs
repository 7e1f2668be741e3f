use crate::core::{FieldErrors, FormKind, FormMessages, FormValues, InquiryField, InquiryRequest};
use crate::core::{Notification, Notifier, OutboundAction};
use crate::utils::error::Result;
use crate::utils::validation::validate_form;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl FormStatus {
    /// Only `Submitting` blocks another submit.
    pub fn can_submit(&self) -> bool {
        !matches!(self, FormStatus::Submitting)
    }
}

/// What a call to [`InquiryForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The outbound action acknowledged the inquiry; fields were reset.
    Sent,
    /// Validation failed; the outbound action was not called.
    Invalid(FieldErrors),
    /// The outbound action failed; fields were kept for a retry.
    Failed { reason: String },
    /// A submission was already in flight.
    Ignored,
}

#[derive(Debug, Default)]
struct FormState {
    values: FormValues,
    errors: FieldErrors,
    status: FormStatus,
}

/// Controller behind one of the site's inquiry forms.
///
/// The [`FormKind`] fixes the service catalogue, whether the free-text
/// detail field exists, and the button labels. Holds field values, the errors from the last submit attempt and the
/// submission status. State is only locked for short synchronous sections,
/// never across the outbound await, so the form can be shared between the
/// task running `submit` and the one handling edits.
pub struct InquiryForm<O: OutboundAction, N: Notifier> {
    outbound: O,
    notifier: N,
    kind: FormKind,
    messages: FormMessages,
    state: Mutex<FormState>,
    status_tx: watch::Sender<FormStatus>,
}

impl<O: OutboundAction, N: Notifier> InquiryForm<O, N> {
    /// Contact page form with its default toasts.
    pub fn new(outbound: O, notifier: N) -> Self {
        Self::with_kind(FormKind::Contact, outbound, notifier)
    }

    pub fn with_kind(kind: FormKind, outbound: O, notifier: N) -> Self {
        Self::with_messages(kind, outbound, notifier, kind.default_messages())
    }

    pub fn with_messages(kind: FormKind, outbound: O, notifier: N, messages: FormMessages) -> Self {
        let (status_tx, _) = watch::channel(FormStatus::Idle);
        Self {
            outbound,
            notifier,
            kind,
            messages,
            state: Mutex::new(FormState::default()),
            status_tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn other_service_selected(&self, values: &FormValues) -> bool {
        self.kind.offers_other_service() && values.is_other_service_selected()
    }

    fn set_status(&self, state: &mut FormState, status: FormStatus) {
        if state.status != status {
            tracing::debug!("Form status: {:?} -> {:?}", state.status, status);
        }
        state.status = status;
        self.status_tx.send_replace(status);
    }

    pub fn update_field(&self, field: InquiryField, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.lock();

        match field {
            InquiryField::OtherService if !self.other_service_selected(&state.values) => {
                tracing::debug!("Ignoring edit to hidden field {}", field);
                return;
            }
            InquiryField::Service => {
                state.values.service = value;
                // 非 "Other Services" 時隱藏並清空補充欄位
                if !self.other_service_selected(&state.values) {
                    state.values.other_service.clear();
                }
            }
            _ => *state.values.slot_mut(field) = value,
        }
        tracing::debug!("Field updated: {}", field);

        // Errors are only shown after a submit attempt; keep them current.
        if !state.errors.is_empty() {
            state.errors = validate_form(self.kind, &state.values);
        }
    }

    /// Same as [`update_field`](Self::update_field), addressed by wire name.
    pub fn update_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: InquiryField = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Checks the current values without touching any state.
    pub fn validate(&self) -> FieldErrors {
        validate_form(self.kind, &self.lock().values)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut state = self.lock();

            if !state.status.can_submit() {
                tracing::debug!("Submit ignored: an inquiry is already being sent");
                return SubmitOutcome::Ignored;
            }

            match InquiryRequest::build(self.kind, &state.values) {
                Ok(request) => {
                    state.errors = FieldErrors::default();
                    self.set_status(&mut state, FormStatus::Submitting);
                    request
                }
                Err(errors) => {
                    tracing::debug!("Submit rejected by validation: {}", errors);
                    state.errors = errors.clone();
                    self.set_status(&mut state, FormStatus::Idle);
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };

        tracing::debug!("Sending inquiry for service: {}", request.service);
        let result = self.outbound.send(&request).await;

        let outcome = {
            let mut state = self.lock();
            match result {
                Ok(()) => {
                    state.values = FormValues::default();
                    state.errors = FieldErrors::default();
                    self.set_status(&mut state, FormStatus::Succeeded);
                    SubmitOutcome::Sent
                }
                Err(e) => {
                    tracing::warn!("Inquiry submission failed: {}", e);
                    self.set_status(&mut state, FormStatus::Failed);
                    SubmitOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            }
        };

        match &outcome {
            SubmitOutcome::Sent => {
                tracing::info!("Inquiry sent");
                self.notifier
                    .notify(Notification::success(self.messages.success.clone()));
            }
            _ => self
                .notifier
                .notify(Notification::error(self.messages.error.clone())),
        }

        outcome
    }

    /// Clears every field and any displayed errors.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.values = FormValues::default();
        state.errors = FieldErrors::default();
        if state.status.can_submit() {
            self.set_status(&mut state, FormStatus::Idle);
        }
    }

    pub fn values(&self) -> FormValues {
        self.lock().values.clone()
    }

    pub fn value(&self, field: InquiryField) -> String {
        self.lock().values.get(field).to_string()
    }

    /// Errors from the last submit attempt, re-checked on every edit.
    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    pub fn status(&self) -> FormStatus {
        self.lock().status
    }

    pub fn can_submit(&self) -> bool {
        self.status().can_submit()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.can_submit() {
            self.kind.submit_label()
        } else {
            self.kind.submitting_label()
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Derived from the selected service; never stored. Always false on a
    /// form without the detail field.
    pub fn is_other_service_visible(&self) -> bool {
        self.other_service_selected(&self.lock().values)
    }

    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.status_tx.subscribe()
    }
}
