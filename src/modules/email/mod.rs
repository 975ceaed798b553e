mod smtp;
mod templates;

pub use smtp::SmtpMailer;
pub use templates::{render_body, subject_for};
