//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{EncodingMode, SendOptions, SendSms};
pub use response::{MessagePart, SendSmsResponse};
pub use validation::ValidationError;
pub use value::{
    ApiKey, ApiSecret, CallbackUrl, ClientRef, KnownStatusCode, MessageId, MessageText,
    PhoneNumber, RawPhoneNumber, SenderId, StatusCode, TtlMillis,
};
