use crate::domain::value::{
    CallbackUrl, ClientRef, MessageText, RawPhoneNumber, SenderId, TtlMillis,
};
use crate::encoding::MessageType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How the `type` field of an outbound SMS is chosen.
pub enum EncodingMode {
    /// Run the GSM 03.38 classifier over the text and pick `text` or `unicode`.
    #[default]
    Auto,
    /// Force `type=text` regardless of content.
    Text,
    /// Force `type=unicode` regardless of content.
    Unicode,
}

impl EncodingMode {
    /// Resolve this mode against the message text.
    ///
    /// [`EncodingMode::Auto`] consults the classifier; the explicit modes
    /// bypass it.
    pub fn resolve(self, text: &MessageText) -> MessageType {
        match self {
            Self::Auto => MessageType::detect(text.as_str()),
            Self::Text => MessageType::Text,
            Self::Unicode => MessageType::Unicode,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters for `sms/json`.
pub struct SendOptions {
    pub encoding: EncodingMode,
    pub ttl: Option<TtlMillis>,
    pub status_report: bool,
    pub client_ref: Option<ClientRef>,
    pub callback: Option<CallbackUrl>,
}

#[derive(Debug, Clone)]
/// A validated outbound SMS for the `sms/json` endpoint.
pub struct SendSms {
    to: RawPhoneNumber,
    from: SenderId,
    text: MessageText,
    options: SendOptions,
}

impl SendSms {
    /// Build a send request from already-validated domain values.
    pub fn new(
        to: RawPhoneNumber,
        from: SenderId,
        text: MessageText,
        options: SendOptions,
    ) -> Self {
        Self {
            to,
            from,
            text,
            options,
        }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }

    /// The `type` value this request will carry on the wire.
    pub fn message_type(&self) -> MessageType {
        self.options.encoding.resolve(&self.text)
    }
}
