use std::io;

use vonage_sms::{
    Credentials, MessageText, RawPhoneNumber, SendOptions, SendSms, SenderId, VonageSmsClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("VONAGE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VONAGE_API_KEY environment variable is required",
        )
    })?;
    let api_secret = std::env::var("VONAGE_API_SECRET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VONAGE_API_SECRET environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("VONAGE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VONAGE_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("VONAGE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the vonage-sms demo.".to_owned());

    let client = VonageSmsClient::new(Credentials::new(api_key, api_secret)?);
    let to = RawPhoneNumber::new(phone_raw)?;
    let from = SenderId::new("VonageDemo")?;
    let text = MessageText::new(message)?;
    let request = SendSms::new(to, from, text, SendOptions::default());
    println!("resolved type: {}", request.message_type().as_wire_str());

    let response = client.send_sms(request).await?;
    for part in &response.messages {
        println!(
            "message-id: {:?}, status: {:?}, price: {:?}",
            part.message_id, part.status, part.message_price
        );
    }

    Ok(())
}
