//! Contact form: four text fields, a submit lifecycle with an in-flight
//! lockout, and delivery through an external email service. The send
//! happens on a worker thread; the UI thread polls the outcome once per
//! frame and never blocks.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use serde_json::json;

use crate::config::EmailConfig;

/// How long the success banner stays up before auto-hiding.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(5);

/// The four user-entered fields relayed to the delivery service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// All four fields carry non-whitespace content.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Delivery seam. The production implementation posts to the external
/// service; tests plug in whatever outcome they need.
pub trait Mailer: Send + Sync + 'static {
    fn send(&self, message: &ContactMessage) -> Result<()>;
}

/// EmailJS-style REST delivery: one POST carrying the service tokens and
/// the form fields as template params. Status 200 is the only success.
pub struct EmailJsMailer {
    config: EmailConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn payload(&self, m: &ContactMessage) -> serde_json::Value {
        json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "name": m.name,
                "email": m.email,
                "subject": m.subject,
                "message": m.message,
            },
        })
    }
}

impl Mailer for EmailJsMailer {
    fn send(&self, message: &ContactMessage) -> Result<()> {
        let response = ureq::post(&self.config.endpoint)
            .send_json(self.payload(message))
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    anyhow!("mail service answered with status {}", code)
                }
                other => anyhow!("mail service unreachable: {}", other),
            })?;
        if response.status() == 200 {
            Ok(())
        } else {
            Err(anyhow!(
                "mail service answered with status {}",
                response.status()
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    /// Delivery confirmed; the banner hides itself after [`SUCCESS_BANNER`].
    Sent { since: Instant },
    /// The reason stays visible until the next submit attempt.
    Failed { reason: String },
}

pub struct ContactForm {
    pub fields: ContactMessage,
    status: SubmitStatus,
    pending: Option<Receiver<std::result::Result<(), String>>>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactMessage::default(),
            status: SubmitStatus::Idle,
            pending: None,
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn in_flight(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight()
            && self.status != SubmitStatus::Sending
            && self.fields.is_complete()
    }

    /// Move into the sending state and hand back the message to deliver,
    /// clearing any prior failure. `None` when a submission is already
    /// in flight or a field is missing.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if !self.can_submit() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(self.fields.clone())
    }

    /// Apply a finished submission. Success wipes the fields; failure
    /// keeps them so the visitor can retry by hand.
    pub fn finish_submit(&mut self, outcome: std::result::Result<(), String>, now: Instant) {
        self.pending = None;
        match outcome {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = SubmitStatus::Sent { since: now };
            }
            Err(reason) => {
                log::warn!("contact submission failed: {}", reason);
                self.status = SubmitStatus::Failed { reason };
            }
        }
    }

    /// Kick off one delivery attempt on a worker thread. No retry: one
    /// attempt per user action, and re-entry is locked out until the
    /// outcome lands.
    pub fn submit(&mut self, mailer: Arc<dyn Mailer>) {
        let Some(message) = self.begin_submit() else {
            return;
        };
        log::info!(
            "contact submission started at {}",
            chrono::Local::now().format("%H:%M:%S")
        );
        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);
        thread::spawn(move || {
            let outcome = mailer.send(&message).map_err(|e| e.to_string());
            // The receiver may be gone if the app shut down mid-send.
            let _ = tx.send(outcome);
        });
    }

    /// Per-frame upkeep: collect a finished submission and expire the
    /// success banner.
    pub fn tick(&mut self, now: Instant) {
        if let Some(rx) = &self.pending {
            match rx.try_recv() {
                Ok(outcome) => self.finish_submit(outcome, now),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.finish_submit(Err("delivery worker vanished".to_string()), now)
                }
            }
        }
        if let SubmitStatus::Sent { since } = self.status {
            if now.duration_since(since) >= SUCCESS_BANNER {
                self.status = SubmitStatus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.fields = ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice gallery!".into(),
        };
        form
    }

    #[test]
    fn incomplete_fields_block_submission() {
        let mut form = ContactForm::new();
        form.fields.name = "Ada".into();
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
        assert_eq!(*form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let mut form = filled_form();
        form.fields.subject = "   ".into();
        assert!(!form.can_submit());
    }

    #[test]
    fn success_clears_fields_and_banner_expires() {
        let mut form = filled_form();
        let message = form.begin_submit().expect("submittable");
        assert_eq!(message.name, "Ada");
        assert_eq!(*form.status(), SubmitStatus::Sending);

        let now = Instant::now();
        form.finish_submit(Ok(()), now);
        assert_eq!(form.fields, ContactMessage::default());
        assert!(matches!(form.status(), SubmitStatus::Sent { .. }));

        // Just short of the banner window: still visible.
        form.tick(now + SUCCESS_BANNER - Duration::from_millis(1));
        assert!(matches!(form.status(), SubmitStatus::Sent { .. }));

        form.tick(now + SUCCESS_BANNER);
        assert_eq!(*form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_reenables_submit() {
        let mut form = filled_form();
        form.begin_submit().expect("submittable");
        form.finish_submit(Err("service answered with status 503".into()), Instant::now());

        assert!(form.fields.is_complete(), "failed submission keeps input");
        assert!(form.can_submit(), "no lockout after failure");
        assert!(matches!(form.status(), SubmitStatus::Failed { .. }));
    }

    #[test]
    fn failure_message_persists_until_next_attempt() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let now = Instant::now();
        form.finish_submit(Err("boom".into()), now);

        form.tick(now + Duration::from_secs(60));
        assert!(matches!(form.status(), SubmitStatus::Failed { .. }));

        form.begin_submit().unwrap();
        assert_eq!(*form.status(), SubmitStatus::Sending);
    }

    #[test]
    fn payload_carries_tokens_and_fields() {
        let mailer = EmailJsMailer::new(EmailConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "key".into(),
            endpoint: "https://example.invalid/send".into(),
        });
        let payload = mailer.payload(&ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        });
        assert_eq!(payload["service_id"], "svc");
        assert_eq!(payload["template_id"], "tpl");
        assert_eq!(payload["user_id"], "key");
        assert_eq!(payload["template_params"]["email"], "ada@example.com");
    }
}
