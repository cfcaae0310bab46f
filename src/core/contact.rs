//! Contact form – field editing, submission lifecycle, and outcome display.
//!
//! The form itself never performs I/O. It produces a JSON payload, is told
//! when a submission starts and what the outcome was, and manages the status
//! region that outcome is shown in. Nothing de-duplicates overlapping
//! submissions; the latest outcome to arrive owns the status region.

use std::time::{Duration, Instant};

use serde_json::{Map, Value};

/// How long an outcome stays on screen before the status region hides.
pub const STATUS_LINGER: Duration = Duration::from_secs(5);

pub const WAITING_TEXT: &str = "Please wait...";
/// Shown whenever the request failed or its reply could not be read.
pub const FAILURE_TEXT: &str = "Something went wrong!";

pub const SUCCESS_ICON: &str = "✔";
pub const FAILURE_ICON: &str = "✘";

/// What the status region below the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Hidden,
    Waiting,
    Done(SubmitOutcome),
}

/// The result of one submission attempt, reduced to what the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

impl SubmitOutcome {
    /// Map a completed HTTP exchange to an outcome. Success means the status
    /// was literally 200; the shown message comes from the reply's `message`
    /// field. A reply that is not JSON is indistinguishable from the request
    /// failing outright.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(json) => {
                let message = json
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or(FAILURE_TEXT)
                    .to_string();
                Self {
                    success: status == 200,
                    message,
                }
            }
            Err(_) => Self::network_failure(),
        }
    }

    /// The request never completed; the page shows a fixed message.
    pub fn network_failure() -> Self {
        Self {
            success: false,
            message: FAILURE_TEXT.to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.success {
            SUCCESS_ICON
        } else {
            FAILURE_ICON
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormField {
    /// Key used in the submission payload.
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug)]
pub struct ContactForm {
    pub endpoint: String,
    access_key: Option<String>,
    pub fields: Vec<FormField>,
    pub focused: usize,
    status: FormStatus,
    hide_at: Option<Instant>,
}

impl ContactForm {
    pub fn new(endpoint: String, access_key: Option<String>) -> Self {
        Self {
            endpoint,
            access_key,
            fields: vec![
                FormField { name: "name", label: "Name", value: String::new() },
                FormField { name: "email", label: "Email", value: String::new() },
                FormField { name: "message", label: "Message", value: String::new() },
            ],
            focused: 0,
            status: FormStatus::Hidden,
            hide_at: None,
        }
    }

    // ── editing ──────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, c: char) {
        self.fields[self.focused].value.push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focused].value.pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused = index;
        }
    }

    // ── submission lifecycle ─────────────────────────────────────────────

    /// Serialize every field into one flat JSON object, with the relay
    /// access key appended when configured.
    pub fn payload(&self) -> Value {
        let mut map = Map::new();
        for field in &self.fields {
            map.insert(field.name.to_string(), Value::String(field.value.clone()));
        }
        if let Some(key) = &self.access_key {
            map.insert("access_key".to_string(), Value::String(key.clone()));
        }
        Value::Object(map)
    }

    /// A submission left for the network; show the waiting message.
    pub fn begin_submit(&mut self) {
        self.status = FormStatus::Waiting;
        self.hide_at = None;
    }

    /// An outcome arrived: the fields clear immediately, the status region
    /// shows the outcome and hides itself [`STATUS_LINGER`] later.
    pub fn complete(&mut self, outcome: SubmitOutcome, now: Instant) {
        self.status = FormStatus::Done(outcome);
        self.hide_at = Some(now + STATUS_LINGER);
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
    }

    /// Hide the status region once its linger deadline passes. Returns
    /// whether it hid.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if now >= at => {
                self.hide_at = None;
                self.status = FormStatus::Hidden;
                true
            }
            _ => false,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }
}
