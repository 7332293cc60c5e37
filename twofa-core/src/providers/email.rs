// twofa-core/src/providers/email.rs
//! The email delivery provider.
//!
//! Delivery itself happens behind the `Mailer` trait: the host wires in its
//! actual mail transport (SMTP client, queue, API), and this provider only
//! composes the verification message.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::sync::Arc;

use crate::errors::TwoFactorError;
use crate::providers::ChannelProvider;
use crate::users::TwoFactorUser;

/// An outbound verification mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// A trait for the mail transport that carries verification messages.
pub trait Mailer: Send + Sync {
    /// Queues `message` for delivery.
    fn queue(&self, message: MailMessage) -> Result<(), TwoFactorError>;
}

/// Sends verification codes to the user's verification email address.
pub struct EmailProvider {
    mailer: Arc<dyn Mailer>,
}

impl EmailProvider {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }
}

impl ChannelProvider for EmailProvider {
    fn deliver(&self, user: &dyn TwoFactorUser, code: &str) -> Result<(), TwoFactorError> {
        let to = user.email_for_verification();
        debug!("Queueing verification mail for user {}.", user.auth_identifier());
        self.mailer.queue(MailMessage {
            to,
            subject: "Verification code".to_string(),
            body: format!("Your verification code: {code}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::TwoFactorChannel;
    use std::sync::Mutex;

    struct CaptureMailer(Mutex<Vec<MailMessage>>);

    impl Mailer for CaptureMailer {
        fn queue(&self, message: MailMessage) -> Result<(), TwoFactorError> {
            self.0.lock().unwrap().push(message);
            Ok(())
        }
    }

    struct TestUser;

    impl TwoFactorUser for TestUser {
        fn auth_identifier(&self) -> String {
            "7".to_string()
        }
        fn email_for_verification(&self) -> String {
            "user@example.com".to_string()
        }
        fn enrolled_channels(&self) -> Vec<TwoFactorChannel> {
            vec![TwoFactorChannel::Email]
        }
    }

    #[test]
    fn composes_the_verification_mail() {
        let mailer = Arc::new(CaptureMailer(Mutex::new(Vec::new())));
        let provider = EmailProvider::new(mailer.clone());
        provider.deliver(&TestUser, "123456").unwrap();

        let sent = mailer.0.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "user@example.com");
        assert_eq!(sent[0].subject, "Verification code");
        assert_eq!(sent[0].body, "Your verification code: 123456");
    }
}
