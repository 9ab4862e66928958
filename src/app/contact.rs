//! AJAX contact form.
//!
//! Submission posts the fields to the current page address and reports the
//! result through the shared modal. The submit button is disabled for the
//! duration and restored whatever the outcome.

use dioxus::prelude::*;
use serde::Deserialize;

use crate::app::api::{self, ApiError};
use crate::app::components::modal::{use_modal, ModalContent};
use crate::app::csrf::{self, CsrfField, CSRF_FIELD, CSRF_HEADER};
use crate::app::dom;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
const FALLBACK_ERROR: &str = "Unable to send.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Form fields plus the anti-forgery token, in submission order.
    pub fn fields<'a>(&'a self, token: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
            (CSRF_FIELD, token),
        ]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// JSON reply from the contact endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactOutcome {
    Sent { message: String },
    /// Well-formed reply without a success status.
    Rejected { message: String },
    Failed,
}

impl ContactOutcome {
    pub fn from_result(result: Result<ContactReply, ApiError>) -> Self {
        match result {
            Ok(reply) if reply.status == "success" => ContactOutcome::Sent {
                message: reply.message.unwrap_or_default(),
            },
            Ok(reply) => ContactOutcome::Rejected {
                message: reply
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
            },
            Err(_) => ContactOutcome::Failed,
        }
    }

    pub fn modal(&self) -> ModalContent {
        match self {
            ContactOutcome::Sent { message } => ModalContent::success("Sent!", message.clone()),
            ContactOutcome::Rejected { message } => ModalContent::error("Error!", message.clone()),
            ContactOutcome::Failed => ModalContent::error("Error!", FALLBACK_ERROR),
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, ContactOutcome::Sent { .. })
    }
}

/// Submit button state, restored after every submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
    original_label: String,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            disabled: false,
            label: label.to_string(),
            original_label: label.to_string(),
        }
    }

    pub fn begin(&mut self) {
        self.disabled = true;
        self.label = SENDING_LABEL.to_string();
    }

    pub fn restore(&mut self) {
        self.disabled = false;
        self.label = self.original_label.clone();
    }
}

#[component]
pub fn ContactSection(email: &'static str, phone: &'static str) -> Element {
    let modal = use_modal();
    let mut form = use_signal(ContactForm::default);
    let mut control = use_signal(|| SubmitControl::new(SUBMIT_LABEL));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if control.read().disabled {
            return;
        }
        control.write().begin();
        modal.show(ModalContent::loading(SENDING_LABEL, "Please wait."));

        spawn(async move {
            let token = csrf::read_token();
            let url = dom::current_url().unwrap_or_else(|| "/".to_string());
            let snapshot = form.read().clone();
            let result = api::post_form_json::<ContactReply>(
                &url,
                &snapshot.fields(&token),
                &[("X-Requested-With", "XMLHttpRequest"), (CSRF_HEADER, token.as_str())],
            )
            .await;

            if let Err(e) = &result {
                tracing::warn!("Contact form submission failed: {}", e);
            }
            let outcome = ContactOutcome::from_result(result);
            if outcome.clears_form() {
                form.write().clear();
            }
            modal.show(outcome.modal());
            control.write().restore();
        });
    };

    let state = control.read().clone();
    let values = form.read().clone();

    rsx! {
        section { id: "contact", class: "py-20",
            div { class: "max-w-4xl mx-auto px-4 grid gap-10 md:grid-cols-2",
                div {
                    h2 { class: "text-3xl font-bold text-navy dark:text-white mb-4", "Get in Touch" }
                    p { class: "text-slate-600 dark:text-slate-400 mb-6",
                        "Have a question or an opportunity? Send a message and I will get back to you."
                    }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", "{email}" }
                    p { class: "text-sm text-slate-600 dark:text-slate-300", "{phone}" }
                }
                form { id: "contact-form", class: "space-y-4", onsubmit: onsubmit,
                    CsrfField {}
                    input {
                        class: "w-full p-3 rounded-lg bg-slate-100 dark:bg-slate-800 border-none",
                        name: "name",
                        placeholder: "Your Name",
                        required: true,
                        value: "{values.name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                    input {
                        class: "w-full p-3 rounded-lg bg-slate-100 dark:bg-slate-800 border-none",
                        r#type: "email",
                        name: "email",
                        placeholder: "Your Email",
                        required: true,
                        value: "{values.email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                    input {
                        class: "w-full p-3 rounded-lg bg-slate-100 dark:bg-slate-800 border-none",
                        name: "subject",
                        placeholder: "Subject",
                        value: "{values.subject}",
                        oninput: move |e| form.write().subject = e.value(),
                    }
                    textarea {
                        class: "w-full p-3 rounded-lg bg-slate-100 dark:bg-slate-800 border-none",
                        name: "message",
                        placeholder: "Your Message",
                        rows: "4",
                        required: true,
                        value: "{values.message}",
                        oninput: move |e| form.write().message = e.value(),
                    }
                    button {
                        r#type: "submit",
                        class: "w-full py-3 rounded-lg bg-navy text-white font-semibold disabled:opacity-60",
                        disabled: state.disabled,
                        "{state.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> Result<ContactReply, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[test]
    fn test_success_reply_shows_server_message_and_clears() {
        let outcome = ContactOutcome::from_result(reply(
            r#"{"status":"success","message":"Thanks, I'll reply soon."}"#,
        ));
        assert!(outcome.clears_form());
        assert_eq!(
            outcome.modal(),
            ModalContent::success("Sent!", "Thanks, I'll reply soon.")
        );
    }

    #[test]
    fn test_non_success_reply_shows_error_instead_of_hanging() {
        let outcome = ContactOutcome::from_result(reply(
            r#"{"status":"error","message":"Email is invalid."}"#,
        ));
        assert!(!outcome.clears_form());
        let modal = outcome.modal();
        assert!(modal.dismissable());
        assert_eq!(modal, ModalContent::error("Error!", "Email is invalid."));
    }

    #[test]
    fn test_non_success_without_message_uses_fallback() {
        let outcome = ContactOutcome::from_result(reply(r#"{"status":"error"}"#));
        assert_eq!(
            outcome,
            ContactOutcome::Rejected {
                message: "Unable to send.".into()
            }
        );
    }

    #[test]
    fn test_transport_failure_shows_generic_error() {
        let outcome = ContactOutcome::from_result(Err(ApiError::Js("TypeError".into())));
        assert_eq!(outcome, ContactOutcome::Failed);
        assert_eq!(outcome.modal(), ModalContent::error("Error!", "Unable to send."));
    }

    #[test]
    fn test_submit_control_restores_label() {
        let mut control = SubmitControl::new(SUBMIT_LABEL);
        control.begin();
        assert!(control.disabled);
        assert_eq!(control.label, SENDING_LABEL);
        control.restore();
        assert_eq!(control, SubmitControl::new(SUBMIT_LABEL));
    }

    #[test]
    fn test_fields_carry_token() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        let fields = form.fields("tok");
        assert_eq!(fields[4], (CSRF_FIELD, "tok"));
        assert!(api::encode_form(&fields).starts_with("name=Ada&email=ada%40example.com"));
    }
}
