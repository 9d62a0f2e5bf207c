pub mod digest;
pub mod error;
pub mod smtp;

pub use digest::{render_full, render_short, DigestMessage};
pub use error::MailerError;
pub use smtp::{DigestSender, SmtpSender};
