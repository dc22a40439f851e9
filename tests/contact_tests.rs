use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};

use portfolio::contact::{ContactForm, ContactMessage, Mailer, SubmitStatus, SUCCESS_BANNER};

struct MockMailer {
    fail_with: Option<&'static str>,
    delay: Duration,
}

impl Mailer for MockMailer {
    fn send(&self, _message: &ContactMessage) -> Result<()> {
        std::thread::sleep(self.delay);
        match self.fail_with {
            None => Ok(()),
            Some(reason) => Err(anyhow!(reason)),
        }
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.fields = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Commission".into(),
        message: "Loved the gallery walk.".into(),
    };
    form
}

/// Tick until the in-flight submission resolves, with a hard timeout.
fn settle(form: &mut ContactForm) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while form.in_flight() {
        assert!(Instant::now() < deadline, "submission never settled");
        form.tick(Instant::now());
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn successful_submission_clears_fields_and_shows_banner() {
    let mut form = filled_form();
    form.submit(Arc::new(MockMailer {
        fail_with: None,
        delay: Duration::from_millis(20),
    }));

    assert!(form.in_flight(), "submission locks out re-entry");
    assert!(!form.can_submit());

    settle(&mut form);
    assert!(matches!(form.status(), SubmitStatus::Sent { .. }));
    assert_eq!(form.fields, ContactMessage::default(), "fields cleared");
}

#[test]
fn success_banner_hides_after_five_seconds() {
    let mut form = filled_form();
    form.begin_submit().expect("submittable");
    let now = Instant::now();
    form.finish_submit(Ok(()), now);

    form.tick(now + Duration::from_millis(4_999));
    assert!(matches!(form.status(), SubmitStatus::Sent { .. }));

    form.tick(now + SUCCESS_BANNER);
    assert_eq!(*form.status(), SubmitStatus::Idle);
}

#[test]
fn failed_submission_surfaces_reason_without_lockout() {
    let mut form = filled_form();
    form.submit(Arc::new(MockMailer {
        fail_with: Some("mail service answered with status 503"),
        delay: Duration::from_millis(20),
    }));
    settle(&mut form);

    match form.status() {
        SubmitStatus::Failed { reason } => {
            assert!(reason.contains("503"), "reason surfaced: {}", reason)
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(form.can_submit(), "submit re-enabled immediately");
    assert!(form.fields.is_complete(), "input preserved for retry");
}

#[test]
fn error_persists_until_the_next_attempt() {
    let mut form = filled_form();
    form.submit(Arc::new(MockMailer {
        fail_with: Some("boom"),
        delay: Duration::ZERO,
    }));
    settle(&mut form);
    assert!(matches!(form.status(), SubmitStatus::Failed { .. }));

    // Time passing alone does not clear the error.
    form.tick(Instant::now() + Duration::from_secs(30));
    assert!(matches!(form.status(), SubmitStatus::Failed { .. }));

    // The next attempt does.
    form.submit(Arc::new(MockMailer {
        fail_with: None,
        delay: Duration::ZERO,
    }));
    settle(&mut form);
    assert!(matches!(form.status(), SubmitStatus::Sent { .. }));
}

#[test]
fn double_submit_while_in_flight_is_a_no_op() {
    let mut form = filled_form();
    let slow = Arc::new(MockMailer {
        fail_with: None,
        delay: Duration::from_millis(100),
    });
    form.submit(slow.clone());
    assert!(form.in_flight());

    // Second click while sending: ignored, exactly one outcome lands.
    form.submit(slow);
    settle(&mut form);
    assert!(matches!(form.status(), SubmitStatus::Sent { .. }));
    form.tick(Instant::now());
    assert!(!form.in_flight());
}
