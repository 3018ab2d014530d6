use crate::domain::value::{MessageId, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed `sms/json` response.
///
/// A single send request can fan out into several message parts when the text
/// exceeds one SMS segment; Vonage reports each part separately.
pub struct SendSmsResponse {
    pub message_count: u32,
    pub messages: Vec<MessagePart>,
}

impl SendSmsResponse {
    /// The first message part, which carries the outcome of the request as a whole.
    pub fn first(&self) -> Option<&MessagePart> {
        self.messages.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-part result inside [`SendSmsResponse`].
///
/// Balance and price are kept as the raw decimal strings the API returns so
/// no formatting drift is introduced (`"3.14159265"` stays exactly that).
pub struct MessagePart {
    pub to: Option<String>,
    pub message_id: Option<MessageId>,
    pub status: StatusCode,
    pub error_text: Option<String>,
    pub remaining_balance: Option<String>,
    pub message_price: Option<String>,
    pub network: Option<String>,
    pub client_ref: Option<String>,
}
