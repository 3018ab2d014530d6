use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidCallbackUrl { input: String },
    TtlOutOfRange { min: u32, max: u32, actual: u32 },
    ClientRefTooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidCallbackUrl { input } => write!(f, "invalid callback url: {input}"),
            Self::TtlOutOfRange { min, max, actual } => {
                write!(
                    f,
                    "ttl milliseconds out of range: {actual} (expected {min}..={max})"
                )
            }
            Self::ClientRefTooLong { max, actual } => {
                write!(f, "client-ref too long: {actual} characters (max {max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "to" };
        assert_eq!(err.to_string(), "to must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        let err = ValidationError::TtlOutOfRange {
            min: 20_000,
            max: 604_800_000,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "ttl milliseconds out of range: 10 (expected 20000..=604800000)"
        );

        let err = ValidationError::ClientRefTooLong {
            max: 40,
            actual: 41,
        };
        assert_eq!(err.to_string(), "client-ref too long: 41 characters (max 40)");
    }
}
