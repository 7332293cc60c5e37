// twofa-core/tests/broker_tests.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use twofa_core::providers::email::{EmailProvider, MailMessage, Mailer};
use twofa_core::{
    Credentials, InMemoryCodeStore, ProviderRegistry, SendTarget, TwoFactorBroker,
    TwoFactorChannel, TwoFactorConfig, TwoFactorError, TwoFactorUser, UserLookup,
    VerificationCodeRepository,
};

#[derive(Clone)]
struct DemoUser {
    id: &'static str,
    email: &'static str,
    channels: Vec<TwoFactorChannel>,
}

impl TwoFactorUser for DemoUser {
    fn auth_identifier(&self) -> String {
        self.id.to_string()
    }
    fn email_for_verification(&self) -> String {
        self.email.to_string()
    }
    fn enrolled_channels(&self) -> Vec<TwoFactorChannel> {
        self.channels.clone()
    }
}

/// Resolves credentials by their "email" entry.
struct Directory {
    users: Vec<DemoUser>,
}

impl UserLookup for Directory {
    type User = DemoUser;

    fn retrieve_by_credentials(&self, credentials: &Credentials) -> Option<DemoUser> {
        let email = credentials.get("email")?;
        self.users.iter().find(|u| u.email == email).cloned()
    }
}

#[derive(Default)]
struct CaptureMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl Mailer for CaptureMailer {
    fn queue(&self, message: MailMessage) -> Result<(), TwoFactorError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

fn alice() -> DemoUser {
    DemoUser {
        id: "1",
        email: "alice@example.com",
        channels: vec![TwoFactorChannel::Email, TwoFactorChannel::Sms],
    }
}

fn credentials(email: &str) -> Credentials {
    HashMap::from([("email".to_string(), email.to_string())])
}

fn broker(
    config: &TwoFactorConfig,
) -> (TwoFactorBroker<Directory>, Arc<CaptureMailer>) {
    let codes = VerificationCodeRepository::new(
        Arc::new(InMemoryCodeStore::new()),
        Arc::new(twofa_core::Argon2Hasher),
        config,
    )
    .expect("valid config");

    let mailer = Arc::new(CaptureMailer::default());
    let mut providers = ProviderRegistry::new();
    providers.register(
        TwoFactorChannel::Email,
        Box::new(EmailProvider::new(mailer.clone())),
    );

    let directory = Directory {
        users: vec![alice()],
    };
    (
        TwoFactorBroker::new(codes, directory, providers, config.default_channel),
        mailer,
    )
}

/// Pulls the plaintext code back out of a captured verification mail.
fn code_from_mail(message: &MailMessage) -> String {
    message
        .body
        .strip_prefix("Your verification code: ")
        .expect("verification mail body")
        .to_string()
}

#[test]
fn send_then_validate_round_trip() {
    let config = TwoFactorConfig {
        throttle_seconds: 0,
        ..TwoFactorConfig::default()
    };
    let (broker, mailer) = broker(&config);

    broker
        .send_verification_code(SendTarget::Credentials(credentials("alice@example.com")), None)
        .unwrap();

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "alice@example.com");
    let code = code_from_mail(&sent[0]);

    let user = broker
        .validate_verification_request(&credentials("alice@example.com"), &code)
        .unwrap();
    assert_eq!(user.id, "1");
}

#[test]
fn wrong_code_is_rejected() {
    // Letter-only codes cannot collide with the digit submission below.
    let config = TwoFactorConfig {
        pattern: "[a-z]{6}".to_string(),
        throttle_seconds: 0,
        ..TwoFactorConfig::default()
    };
    let (broker, _mailer) = broker(&config);

    broker
        .send_verification_code(SendTarget::User(alice()), None)
        .unwrap();

    let result = broker.validate_verification_request(&credentials("alice@example.com"), "000000");
    assert!(matches!(
        result,
        Err(TwoFactorError::InvalidVerificationCode)
    ));
}

#[test]
fn unknown_credentials_are_rejected() {
    let (broker, _mailer) = broker(&TwoFactorConfig::default());

    let result = broker.send_verification_code(
        SendTarget::Credentials(credentials("nobody@example.com")),
        None,
    );
    assert!(matches!(result, Err(TwoFactorError::InvalidCredentials)));

    let result = broker.validate_verification_request(&credentials("nobody@example.com"), "123456");
    assert!(matches!(result, Err(TwoFactorError::InvalidCredentials)));
}

#[test]
fn unenrolled_channel_is_rejected() {
    let (broker, _mailer) = broker(&TwoFactorConfig::default());
    let email_only = DemoUser {
        id: "2",
        email: "bob@example.com",
        channels: vec![TwoFactorChannel::Email],
    };

    // Bob never enrolled SMS, so an explicit SMS request must fail before
    // any code is issued.
    let result = broker.send_verification_code(
        SendTarget::User(email_only),
        Some(TwoFactorChannel::Sms),
    );
    assert!(matches!(result, Err(TwoFactorError::ChannelNotEnrolled)));
}

#[test]
fn channel_without_a_provider_is_rejected() {
    let config = TwoFactorConfig {
        throttle_seconds: 0,
        ..TwoFactorConfig::default()
    };
    let (broker, mailer) = broker(&config);

    // Alice has SMS enrolled, but only the email provider is registered.
    let result =
        broker.send_verification_code(SendTarget::User(alice()), Some(TwoFactorChannel::Sms));
    assert!(matches!(result, Err(TwoFactorError::InvalidChannel(_))));
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[test]
fn second_request_inside_the_throttle_window_is_rejected() {
    let config = TwoFactorConfig {
        throttle_seconds: 60,
        ..TwoFactorConfig::default()
    };
    let (broker, mailer) = broker(&config);

    broker
        .send_verification_code(SendTarget::User(alice()), None)
        .unwrap();
    let result = broker.send_verification_code(SendTarget::User(alice()), None);
    assert!(matches!(result, Err(TwoFactorError::Throttled)));
    assert_eq!(mailer.sent.lock().unwrap().len(), 1);
}

#[test]
fn callback_variant_bypasses_the_providers() {
    let config = TwoFactorConfig {
        throttle_seconds: 0,
        ..TwoFactorConfig::default()
    };
    let (broker, mailer) = broker(&config);

    let seen = Mutex::new(None);
    broker
        .send_verification_code_with(SendTarget::User(alice()), |user, code| {
            *seen.lock().unwrap() = Some((user.auth_identifier(), code.to_string()));
        })
        .unwrap();

    let (user_id, code) = seen.into_inner().unwrap().expect("callback ran");
    assert_eq!(user_id, "1");
    assert!(mailer.sent.lock().unwrap().is_empty());
    assert!(broker.verification_code_exists(&alice(), &code));
}

#[test]
fn deleting_a_code_invalidates_it() {
    let config = TwoFactorConfig {
        throttle_seconds: 0,
        ..TwoFactorConfig::default()
    };
    let (broker, _mailer) = broker(&config);

    let code = broker.create_verification_code(&alice()).unwrap();
    assert!(broker.verification_code_exists(&alice(), &code));
    assert!(broker.delete_verification_code(&alice()));
    assert!(!broker.verification_code_exists(&alice(), &code));
}
