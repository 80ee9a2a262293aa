//! Contact form state and submission.
//!
//! The form posts `{name, email, message}` as JSON to the site's contact
//! endpoint. There is a single attempt per submit: no retry, no backoff and
//! no cancellation.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown when the server gives no usable reason.
pub const FALLBACK_MESSAGE: &str = "Failed to send message. Please try again.";

/// Message shown when the server answers with JSON but no `error` field.
pub const REFUSED_MESSAGE: &str = "Failed to send";

/// The JSON document posted to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission failed.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Non-2xx answer carrying an `error` string.
    #[error("server rejected message ({status}): {message}")]
    Server { status: u16, message: String },
    /// Non-2xx answer with a JSON body but no `error` string.
    #[error("server rejected message ({status})")]
    Refused { status: u16 },
    /// Non-2xx answer whose body is not JSON.
    #[error("server rejected message ({status}) with an unreadable body")]
    UnreadableBody { status: u16 },
    /// The request never got a response.
    #[error("request failed: {0}")]
    Transport(String),
}

impl ContactError {
    /// Text shown in the form.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Server { message, .. } => message.clone(),
            ContactError::Refused { .. } => REFUSED_MESSAGE.to_string(),
            ContactError::UnreadableBody { .. } | ContactError::Transport(_) => {
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends the JSON document somewhere and reports what came back.
pub trait ContactTransport: Send + Sync {
    fn post_json(&self, url: &str, message: &ContactMessage) -> Result<RawResponse, ContactError>;
}

/// Error body returned by the contact endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Classify a response: any 2xx is success.
pub fn interpret_response(response: &RawResponse) -> Result<(), ContactError> {
    let status = response.status;
    if (200..300).contains(&status) {
        return Ok(());
    }

    match serde_json::from_str::<ErrorBody>(&response.body) {
        Ok(ErrorBody {
            error: Some(message),
        }) if !message.is_empty() => Err(ContactError::Server { status, message }),
        Ok(_) => Err(ContactError::Refused { status }),
        Err(_) => Err(ContactError::UnreadableBody { status }),
    }
}

/// HTTP transport backed by `ureq`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// A transport with an optional overall request timeout.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self::from_agent(agent)
    }

    /// Use a preconfigured agent. It must not turn 4xx/5xx into errors.
    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl ContactTransport for UreqTransport {
    fn post_json(&self, url: &str, message: &ContactMessage) -> Result<RawResponse, ContactError> {
        let mut response = self
            .agent
            .post(url)
            .send_json(message)
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        // A body that cannot be read is treated like one that cannot be parsed.
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

/// Submits messages to one endpoint.
#[derive(Clone)]
pub struct ContactClient {
    endpoint: String,
    transport: Arc<dyn ContactTransport>,
}

impl std::fmt::Debug for ContactClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>, transport: impl ContactTransport + 'static) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport: Arc::new(transport),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message and wait for the answer.
    pub fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let response = self.transport.post_json(&self.endpoint, message)?;
        interpret_response(&response)
    }

    /// Send one message on a worker thread. The receiver yields exactly one
    /// result.
    pub fn spawn(&self, message: ContactMessage) -> Receiver<Result<(), ContactError>> {
        let (tx, rx) = mpsc::channel();
        let client = self.clone();
        thread::spawn(move || {
            let result = client.send(&message);
            // The app may have quit in the meantime.
            let _ = tx.send(result);
        });
        rx
    }
}

/// Which field has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Accepting input.
    #[default]
    Editing,
    /// A request is in flight; input and resubmission are disabled.
    Sending,
    /// The last message was accepted.
    Sent,
}

/// The contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    focus: Field,
    state: FormState,
    error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Error from the last attempt or validation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field.
    pub fn input(&mut self, c: char) {
        if self.state == FormState::Editing {
            let focus = self.focus;
            self.value_mut(focus).push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.state == FormState::Editing {
            let focus = self.focus;
            self.value_mut(focus).pop();
        }
    }

    /// Validate and start sending.
    ///
    /// Returns the message to post and moves to [`FormState::Sending`], or
    /// `None` if the form is not editable or a field is invalid.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if self.state != FormState::Editing {
            return None;
        }

        let blank = [Field::Name, Field::Email, Field::Message]
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty());
        if let Some(field) = blank {
            self.focus = field;
            self.error = Some(format!("{} is required.", field.label()));
            return None;
        }
        if !looks_like_email(&self.email) {
            self.focus = Field::Email;
            self.error = Some("Please enter a valid email address.".to_string());
            return None;
        }

        self.error = None;
        self.state = FormState::Sending;
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Apply the outcome of the in-flight request.
    pub fn finish(&mut self, result: Result<(), ContactError>) {
        if self.state != FormState::Sending {
            return;
        }
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = Field::Name;
                self.error = None;
                self.state = FormState::Sent;
            }
            Err(e) => {
                self.error = Some(e.user_message());
                self.state = FormState::Editing;
            }
        }
    }

    /// Leave the success screen for a fresh form.
    pub fn send_another(&mut self) {
        if self.state == FormState::Sent {
            self.state = FormState::Editing;
        }
    }
}

/// Loose `local@domain` check, as a browser's email input does.
fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !s.contains(' ')
        }
        None => false,
    }
}
