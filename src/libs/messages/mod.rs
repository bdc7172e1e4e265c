//! User-facing text.
//!
//! Every line the application prints is a [`Message`] variant; the text lives
//! in one `Display` implementation and output routing lives in the `msg_*`
//! macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
