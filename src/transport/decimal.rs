use serde::Deserialize;
use serde::de::Error as DeError;

/// Decimal value returned by Vonage as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`0.03330000` remains `"0.03330000"` instead of becoming `"0.0333"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportDecimal(String);

impl TransportDecimal {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected decimal field to be JSON string or number",
            )),
        }
    }
}
