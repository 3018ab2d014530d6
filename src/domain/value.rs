use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vonage `api_key` credential.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Form field name used by Vonage (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vonage `api_secret` credential.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct ApiSecret(String);

impl ApiSecret {
    /// Form field name used by Vonage (`api_secret`).
    pub const FIELD: &'static str = "api_secret";

    /// Create a validated [`ApiSecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id or alphanumeric originator (`from`).
///
/// Invariant: non-empty after trimming. Alphanumeric senders must be enabled
/// for your account and destination country.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by Vonage (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Vonage (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id (`message-id`) returned by `sms/json` for each message part.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Response field name used by Vonage (`message-id`).
    pub const FIELD: &'static str = "message-id";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Caller-supplied reference echoed back in delivery receipts (`client-ref`).
///
/// Invariant: non-empty after trimming and at most 40 characters.
pub struct ClientRef(String);

impl ClientRef {
    /// Form field name used by Vonage (`client-ref`).
    pub const FIELD: &'static str = "client-ref";

    /// Maximum length accepted by the API.
    pub const MAX_LEN: usize = 40;

    /// Create a validated [`ClientRef`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::ClientRefTooLong {
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery receipt webhook override (`callback`).
///
/// Invariant: parses as an absolute URL.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// Form field name used by Vonage (`callback`).
    pub const FIELD: &'static str = "callback";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidCallbackUrl {
            input: trimmed.to_owned(),
        })?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated url.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to Vonage (`to`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Vonage (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Vonage.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        // Preserve E.164 normalization semantics for opt-in `PhoneNumber`.
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by Vonage (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// TTL (time-to-live) for delivery attempts in milliseconds (`ttl`).
///
/// Invariant: `20_000..=604_800_000` (20 seconds to 7 days).
pub struct TtlMillis(u32);

impl TtlMillis {
    /// Form field name used by Vonage (`ttl`).
    pub const FIELD: &'static str = "ttl";

    /// Minimum allowed TTL value (20 seconds).
    pub const MIN: u32 = 20_000;
    /// Maximum allowed TTL value (7 days).
    pub const MAX: u32 = 604_800_000;

    /// Create a validated TTL value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::TtlOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying TTL value.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-message status code returned by `sms/json`.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Vonage.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known_kind(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` for status `0` (message accepted for delivery).
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known `sms/json` status codes supported by this crate.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Success,
    Throttled,
    MissingParameters,
    InvalidParameters,
    InvalidCredentials,
    InternalError,
    InvalidMessage,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaViolation,
    AccountNotEnabledForRest,
    MessageTooLong,
    InvalidSignature,
    IllegalSenderAddress,
    InvalidNetworkCode,
    InvalidCallbackUrl,
    NonWhitelistedDestination,
    NumberDeactivated,
}

impl KnownStatusCode {
    /// Convert a raw Vonage integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::Throttled,
            2 => Self::MissingParameters,
            3 => Self::InvalidParameters,
            4 => Self::InvalidCredentials,
            5 => Self::InternalError,
            6 => Self::InvalidMessage,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaViolation,
            11 => Self::AccountNotEnabledForRest,
            12 => Self::MessageTooLong,
            14 => Self::InvalidSignature,
            15 => Self::IllegalSenderAddress,
            22 => Self::InvalidNetworkCode,
            23 => Self::InvalidCallbackUrl,
            29 => Self::NonWhitelistedDestination,
            33 => Self::NumberDeactivated,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Throttled | Self::InternalError)
    }

    /// Whether this status indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::InvalidSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let api_key = ApiKey::new("  key ").unwrap();
        assert_eq!(api_key.as_str(), "key");
        assert!(ApiKey::new("  ").is_err());

        let secret = ApiSecret::new(" secret ").unwrap();
        assert_eq!(secret.as_str(), " secret ");
        assert!(ApiSecret::new("").is_err());

        let sender = SenderId::new(" AcmeCo ").unwrap();
        assert_eq!(sender.as_str(), "AcmeCo");
        assert!(SenderId::new("").is_err());

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let message_id = MessageId::new(" 0A0000000123ABCD1 ").unwrap();
        assert_eq!(message_id.as_str(), "0A0000000123ABCD1");
        assert!(MessageId::new("  ").is_err());
    }

    #[test]
    fn client_ref_enforces_length_limit() {
        let short = ClientRef::new("order-42").unwrap();
        assert_eq!(short.as_str(), "order-42");

        let at_limit = "r".repeat(ClientRef::MAX_LEN);
        assert!(ClientRef::new(at_limit).is_ok());

        let too_long = "r".repeat(ClientRef::MAX_LEN + 1);
        assert!(matches!(
            ClientRef::new(too_long),
            Err(ValidationError::ClientRefTooLong { max: 40, actual: 41 })
        ));
        assert!(ClientRef::new("   ").is_err());
    }

    #[test]
    fn callback_url_requires_absolute_url() {
        let cb = CallbackUrl::new(" https://example.com/dlr ").unwrap();
        assert_eq!(cb.as_str(), "https://example.com/dlr");
        assert!(CallbackUrl::new("").is_err());
        assert!(matches!(
            CallbackUrl::new("not a url"),
            Err(ValidationError::InvalidCallbackUrl { .. })
        ));
    }

    #[test]
    fn raw_phone_number_trims_and_exposes_raw() {
        let raw = RawPhoneNumber::new(" 447700900000 ").unwrap();
        assert_eq!(raw.raw(), "447700900000");
        assert!(RawPhoneNumber::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+447700900000").unwrap();
        let p2 = PhoneNumber::parse(None, "+44 7700 900000").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+447700900000");
        assert_eq!(p1.raw(), "+447700900000");

        let raw: RawPhoneNumber = p1.clone().into();
        assert_eq!(raw.raw(), "+447700900000");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn ttl_millis_enforces_range() {
        assert!(TtlMillis::new(TtlMillis::MIN).is_ok());
        assert!(TtlMillis::new(TtlMillis::MAX).is_ok());
        assert!(TtlMillis::new(TtlMillis::MIN - 1).is_err());
        assert!(TtlMillis::new(TtlMillis::MAX + 1).is_err());
    }

    #[test]
    fn status_code_knows_success_retryable_and_auth_errors() {
        let success = StatusCode::new(0);
        assert!(success.is_success());
        assert_eq!(success.known_kind(), Some(KnownStatusCode::Success));

        let throttled = StatusCode::new(1);
        assert!(throttled.is_retryable());
        assert!(!throttled.is_auth_error());

        let auth = StatusCode::new(4);
        assert!(auth.is_auth_error());
        assert!(!auth.is_retryable());

        let unknown = StatusCode::new(9999);
        assert!(unknown.known_kind().is_none());
        assert!(!unknown.is_success());
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_auth_error());
    }
}
