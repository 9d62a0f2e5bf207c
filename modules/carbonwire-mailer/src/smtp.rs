//! SMTP submission: authenticated send over
//! a TLS-submission port, exponential backoff (2s, 4s, 8s) on failure.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::warn;

use crate::digest::DigestMessage;
use crate::error::{MailerError, Result};

#[async_trait]
pub trait DigestSender: Send + Sync {
    async fn send(&self, message: DigestMessage, to: &[String], from: &str) -> Result<()>;
}

/// Backoff schedule: 2s, 4s, 8s between the (up to) 3 retries.
const BACKOFF_SECONDS: [u64; 3] = [2, 4, 8];

pub struct SmtpSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpSender {
    pub fn new(relay: &str, username: &str, app_password: &str) -> Result<Self> {
        let creds = Credentials::new(username.to_string(), app_password.to_string());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)
            .map_err(|e| MailerError::Other(anyhow::anyhow!("building SMTP transport: {e}")))?
            .credentials(creds)
            .build();
        Ok(Self { transport })
    }
}

#[async_trait]
impl DigestSender for SmtpSender {
    async fn send(&self, message: DigestMessage, to: &[String], from: &str) -> Result<()> {
        let build_email = || -> Result<Message> {
            let mut builder = Message::builder()
                .from(from.parse().map_err(|e| MailerError::Other(anyhow::anyhow!("invalid from address: {e}")))?)
                .subject(message.subject.clone());
            for recipient in to {
                builder = builder.to(recipient
                    .parse()
                    .map_err(|e| MailerError::Other(anyhow::anyhow!("invalid recipient {recipient}: {e}")))?);
            }
            builder
                .header(ContentType::TEXT_PLAIN)
                .body(message.body.clone())
                .map_err(|e| MailerError::Other(anyhow::anyhow!("building message: {e}")))
        };

        let mut last_err = None;
        for (attempt, delay) in std::iter::once(0u64).chain(BACKOFF_SECONDS).enumerate() {
            if attempt > 0 {
                tokio::time::sleep(std::time::Duration::from_secs(delay)).await;
            }
            let email = build_email()?;
            match self.transport.send(email).await {
                Ok(_) => return Ok(()),
                Err(e) => {
                    warn!(attempt, error = %e, "SMTP send attempt failed");
                    last_err = Some(e.to_string());
                }
            }
        }

        Err(MailerError::SendFailed(last_err.unwrap_or_else(|| "unknown SMTP failure".into())))
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct FakeSender {
        pub sent: Mutex<Vec<(String, String)>>,
        pub fail_always: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl DigestSender for FakeSender {
        async fn send(&self, message: DigestMessage, _to: &[String], _from: &str) -> Result<()> {
            if self.fail_always.load(std::sync::atomic::Ordering::SeqCst) {
                return Err(MailerError::SendFailed("fake sender configured to fail".into()));
            }
            self.sent.lock().expect("lock poisoned").push((message.subject, message.body));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeSender;
    use super::*;

    #[tokio::test]
    async fn fake_sender_records_sent_messages() {
        let sender = FakeSender::default();
        let msg = DigestMessage { subject: "Subj".into(), body: "Body".into() };
        sender.send(msg, &["to@example.com".to_string()], "from@example.com").await.unwrap();
        assert_eq!(sender.sent.lock().unwrap().len(), 1);
    }
}
