//! Typed Rust client for the Vonage (Nexmo) SMS HTTP API.
//!
//! The design is layered: a domain layer of strong types, an encoding layer
//! that classifies message text into GSM 03.38 vs. Unicode (UCS-2), a
//! transport layer for wire-format quirks, and a small client layer
//! orchestrating requests. With the default [`EncodingMode::Auto`] the
//! classifier picks the outbound `type` field, so callers never have to guess
//! whether their text survives the GSM 7-bit alphabet.
//!
//! ```rust,no_run
//! use vonage_sms::{
//!     Credentials, MessageText, RawPhoneNumber, SendOptions, SendSms, SenderId, VonageSmsClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vonage_sms::VonageError> {
//!     let client = VonageSmsClient::new(Credentials::new("key", "secret")?);
//!     let request = SendSms::new(
//!         RawPhoneNumber::new("447700900000")?,
//!         SenderId::new("AcmeCo")?,
//!         MessageText::new("Heizölrückstoßabdämpfung fits in GSM-7")?,
//!         SendOptions::default(),
//!     );
//!     let _resp = client.send_sms(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod encoding;
mod transport;

pub use client::{Credentials, VonageError, VonageSmsClient, VonageSmsClientBuilder};
pub use domain::{
    ApiKey, ApiSecret, CallbackUrl, ClientRef, EncodingMode, KnownStatusCode, MessageId,
    MessagePart, MessageText, PhoneNumber, RawPhoneNumber, SendOptions, SendSms, SendSmsResponse,
    SenderId, StatusCode, TtlMillis, ValidationError,
};
pub use encoding::{MessageType, requires_unicode_encoding};
