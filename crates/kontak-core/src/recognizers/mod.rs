//! One recognizer per contact-info category. Each is a pure rule set:
//! text in, ordered non-overlapping detections out.

mod email;
mod phone;
mod social;

pub use email::EmailRecognizer;
pub use phone::PhoneRecognizer;
pub use social::SocialRecognizer;
