pub mod resend_client;

pub use resend_client::{EmailSender, ResendClient};
