// twofa/src/commands/demo.rs
//! Handler for the `demo` command: a self-contained walk through the full
//! issue-and-verify flow against an in-memory store, with mail delivery
//! captured and printed instead of sent.
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use twofa_core::providers::email::{EmailProvider, MailMessage, Mailer};
use twofa_core::{
    Credentials, ProviderRegistry, SendTarget, TwoFactorBroker, TwoFactorChannel, TwoFactorConfig,
    TwoFactorError, TwoFactorUser, UserLookup, VerificationCodeRepository,
};

use crate::cli::DemoCommand;

const DEMO_EMAIL: &str = "demo@example.com";

#[derive(Clone)]
struct DemoUser;

impl TwoFactorUser for DemoUser {
    fn auth_identifier(&self) -> String {
        "demo".to_string()
    }
    fn email_for_verification(&self) -> String {
        DEMO_EMAIL.to_string()
    }
    fn enrolled_channels(&self) -> Vec<TwoFactorChannel> {
        vec![TwoFactorChannel::Email]
    }
}

struct DemoDirectory;

impl UserLookup for DemoDirectory {
    type User = DemoUser;

    fn retrieve_by_credentials(&self, credentials: &Credentials) -> Option<DemoUser> {
        (credentials.get("email").map(String::as_str) == Some(DEMO_EMAIL)).then_some(DemoUser)
    }
}

/// Holds delivered mail instead of sending it.
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

pub fn run(cmd: &DemoCommand) -> Result<()> {
    let config = match &cmd.config {
        Some(path) => TwoFactorConfig::load_from_file(path)?,
        None => TwoFactorConfig::load_defaults()?,
    };

    let codes = VerificationCodeRepository::in_memory(&config)?;
    let mailer = Arc::new(CaptureMailer::default());
    let mut providers = ProviderRegistry::new();
    providers.register(
        TwoFactorChannel::Email,
        Box::new(EmailProvider::new(mailer.clone())),
    );
    let broker = TwoFactorBroker::new(codes, DemoDirectory, providers, config.default_channel);

    let credentials: Credentials =
        HashMap::from([("email".to_string(), DEMO_EMAIL.to_string())]);

    println!("Issuing a verification code for {DEMO_EMAIL}...");
    broker
        .send_verification_code(SendTarget::Credentials(credentials.clone()), None)
        .context("Failed to issue the demo verification code")?;

    let mail = mailer
        .sent
        .lock()
        .unwrap()
        .pop()
        .ok_or_else(|| anyhow!("no mail was captured"))?;
    println!("Captured mail to {}: {:?}", mail.to, mail.subject);
    println!("  {}", mail.body);

    let code = mail
        .body
        .strip_prefix("Your verification code: ")
        .ok_or_else(|| anyhow!("unexpected mail body {:?}", mail.body))?;

    println!("Submitting the code back...");
    broker
        .validate_verification_request(&credentials, code)
        .context("Verification failed")?;
    println!("Verification code accepted.");

    if config.throttle_seconds > 0 {
        // A second immediate request demonstrates the throttle window.
        match broker.send_verification_code(SendTarget::User(DemoUser), None) {
            Err(TwoFactorError::Throttled) => {
                println!(
                    "A second request inside {}s is throttled, as configured.",
                    config.throttle_seconds
                );
            }
            Ok(()) => return Err(anyhow!("expected the second request to be throttled")),
            Err(other) => return Err(other).context("Unexpected error on the second request"),
        }
    }

    Ok(())
}
