use serde::Deserialize;

use super::decimal::TransportDecimal;
use crate::domain::{
    CallbackUrl, ClientRef, MessageId, MessagePart, MessageText, RawPhoneNumber, SendSms,
    SendSmsResponse, SenderId, StatusCode, TtlMillis,
};
use crate::encoding::MessageType;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response field {field} is not a valid integer: {value}")]
    NonNumericField { field: &'static str, value: String },
}

/// Integer field that Vonage serializes either as a JSON string or a number
/// (`"message-count": "1"`, per-part `"status": "0"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportInt {
    String(String),
    Number(i64),
}

impl TransportInt {
    /// Parse into the target integer width, rejecting out-of-range values
    /// rather than truncating them (a wrapped status could masquerade as `0`,
    /// i.e. success).
    fn parse<T: TryFrom<i64>>(&self, field: &'static str) -> Result<T, TransportError> {
        let wide = match self {
            Self::Number(value) => *value,
            Self::String(value) => value.trim().parse::<i64>().map_err(|_| {
                TransportError::NonNumericField {
                    field,
                    value: value.clone(),
                }
            })?,
        };
        T::try_from(wide).map_err(|_| TransportError::NonNumericField {
            field,
            value: self.raw(),
        })
    }

    fn raw(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::String(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(rename = "message-count")]
    message_count: TransportInt,
    #[serde(default)]
    messages: Vec<MessagePartJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessagePartJson {
    #[serde(default)]
    to: Option<String>,
    #[serde(default, rename = "message-id")]
    message_id: Option<String>,
    status: TransportInt,
    #[serde(default, rename = "error-text")]
    error_text: Option<String>,
    #[serde(default, rename = "remaining-balance")]
    remaining_balance: Option<TransportDecimal>,
    #[serde(default, rename = "message-price")]
    message_price: Option<TransportDecimal>,
    #[serde(default)]
    network: Option<String>,
    #[serde(default, rename = "client-ref")]
    client_ref: Option<String>,
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((SenderId::FIELD.to_owned(), request.from().as_str().to_owned()));
    params.push((RawPhoneNumber::FIELD.to_owned(), request.to().raw().to_owned()));
    params.push((
        MessageText::FIELD.to_owned(),
        request.text().as_str().to_owned(),
    ));
    // Auto mode runs the GSM 03.38 classifier here.
    params.push((
        MessageType::FIELD.to_owned(),
        request.message_type().as_wire_str().to_owned(),
    ));
    push_options(&mut params, request);

    params
}

fn push_options(params: &mut Vec<(String, String)>, request: &SendSms) {
    let options = request.options();
    if let Some(ttl) = options.ttl {
        params.push((TtlMillis::FIELD.to_owned(), ttl.value().to_string()));
    }
    if options.status_report {
        params.push(("status-report-req".to_owned(), "1".to_owned()));
    }
    if let Some(client_ref) = options.client_ref.as_ref() {
        params.push((ClientRef::FIELD.to_owned(), client_ref.as_str().to_owned()));
    }
    if let Some(callback) = options.callback.as_ref() {
        params.push((CallbackUrl::FIELD.to_owned(), callback.as_str().to_owned()));
    }
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;

    let message_count: u32 = parsed.message_count.parse("message-count")?;
    let messages = parsed
        .messages
        .into_iter()
        .map(|part| {
            let status: i32 = part.status.parse("status")?;
            Ok(MessagePart {
                to: part.to,
                // An empty message-id is treated as absent.
                message_id: part
                    .message_id
                    .and_then(|id| MessageId::new(id).ok()),
                status: StatusCode::new(status),
                error_text: part.error_text,
                remaining_balance: part.remaining_balance.map(TransportDecimal::into_string),
                message_price: part.message_price.map(TransportDecimal::into_string),
                network: part.network,
                client_ref: part.client_ref,
            })
        })
        .collect::<Result<Vec<MessagePart>, TransportError>>()?;

    Ok(SendSmsResponse {
        message_count,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{EncodingMode, SendOptions};

    use super::*;

    fn request(text: &str, options: SendOptions) -> SendSms {
        SendSms::new(
            RawPhoneNumber::new("447700900000").unwrap(),
            SenderId::new("AcmeCo").unwrap(),
            MessageText::new(text).unwrap(),
            options,
        )
    }

    #[test]
    fn encode_gsm_text_form_params() {
        let req = request("Hello World", SendOptions::default());
        let params = encode_send_sms_form(&req);

        assert_eq!(
            params,
            vec![
                ("from".to_owned(), "AcmeCo".to_owned()),
                ("to".to_owned(), "447700900000".to_owned()),
                ("text".to_owned(), "Hello World".to_owned()),
                ("type".to_owned(), "text".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_auto_detects_unicode_text() {
        let req = request("Testing 💪 👌", SendOptions::default());
        let params = encode_send_sms_form(&req);

        assert!(params.contains(&("type".to_owned(), "unicode".to_owned())));
    }

    #[test]
    fn encode_explicit_mode_overrides_detection() {
        let req = request(
            "Hello World",
            SendOptions {
                encoding: EncodingMode::Unicode,
                ..Default::default()
            },
        );
        let params = encode_send_sms_form(&req);

        assert!(params.contains(&("type".to_owned(), "unicode".to_owned())));
    }

    #[test]
    fn encode_appends_optional_params() {
        let options = SendOptions {
            ttl: Some(TtlMillis::new(90_000).unwrap()),
            status_report: true,
            client_ref: Some(ClientRef::new("order-42").unwrap()),
            callback: Some(CallbackUrl::new("https://example.com/dlr").unwrap()),
            ..Default::default()
        };
        let req = request("Hello World", options);
        let params = encode_send_sms_form(&req);

        assert_eq!(
            &params[4..],
            &[
                ("ttl".to_owned(), "90000".to_owned()),
                ("status-report-req".to_owned(), "1".to_owned()),
                ("client-ref".to_owned(), "order-42".to_owned()),
                ("callback".to_owned(), "https://example.com/dlr".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_json_response_maps_message_parts() {
        let json = r#"
        {
          "message-count": "2",
          "messages": [
            {
              "to": "447700900000",
              "message-id": "0A0000000123ABCD1",
              "status": "0",
              "remaining-balance": "3.14159265",
              "message-price": 0.03330000,
              "network": "23410",
              "client-ref": "order-42"
            },
            {
              "to": "447700900000",
              "message-id": "0A0000000123ABCD2",
              "status": 0
            }
          ]
        }
        "#;

        let resp = decode_send_sms_json_response(json).unwrap();
        assert_eq!(resp.message_count, 2);
        assert_eq!(resp.messages.len(), 2);

        let first = resp.first().unwrap();
        assert_eq!(first.to.as_deref(), Some("447700900000"));
        assert_eq!(
            first.message_id.as_ref().map(MessageId::as_str),
            Some("0A0000000123ABCD1")
        );
        assert!(first.status.is_success());
        assert_eq!(first.remaining_balance.as_deref(), Some("3.14159265"));
        assert_eq!(first.message_price.as_deref(), Some("0.03330000"));
        assert_eq!(first.network.as_deref(), Some("23410"));
        assert_eq!(first.client_ref.as_deref(), Some("order-42"));

        assert_eq!(resp.messages[1].error_text, None);
        assert_eq!(resp.messages[1].remaining_balance, None);
    }

    #[test]
    fn decode_json_response_keeps_error_parts() {
        let json = r#"
        {
          "message-count": 1,
          "messages": [
            {
              "status": "4",
              "error-text": "Bad Credentials"
            }
          ]
        }
        "#;

        let resp = decode_send_sms_json_response(json).unwrap();
        let first = resp.first().unwrap();
        assert_eq!(first.status, StatusCode::new(4));
        assert!(first.status.is_auth_error());
        assert_eq!(first.error_text.as_deref(), Some("Bad Credentials"));
        assert_eq!(first.message_id, None);
    }

    #[test]
    fn decode_rejects_non_numeric_status() {
        let json = r#"
        {
          "message-count": "1",
          "messages": [{ "status": "accepted" }]
        }
        "#;

        let err = decode_send_sms_json_response(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::NonNumericField { field: "status", .. }
        ));
    }

    #[test]
    fn decode_rejects_status_outside_i32_range() {
        // A truncating cast would wrap this to 0 and report the part as accepted.
        let json = r#"
        {
          "message-count": "1",
          "messages": [{ "status": "4294967296", "error-text": "boom" }]
        }
        "#;

        let err = decode_send_sms_json_response(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::NonNumericField { field: "status", .. }
        ));
    }

    #[test]
    fn decode_rejects_negative_message_count() {
        let json = r#"
        {
          "message-count": -1,
          "messages": []
        }
        "#;

        let err = decode_send_sms_json_response(json).unwrap_err();
        assert!(matches!(
            err,
            TransportError::NonNumericField {
                field: "message-count",
                ..
            }
        ));
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_send_sms_json_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
    }
}
