use std::io;

use postmark_client::{EmailMessage, PostmarkClient, ServerToken};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("POSTMARK_SERVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_SERVER_TOKEN environment variable is required",
        )
    })?;
    let from = std::env::var("POSTMARK_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_FROM environment variable is required",
        )
    })?;
    let to = std::env::var("POSTMARK_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_TO environment variable is required",
        )
    })?;

    let client = PostmarkClient::new(ServerToken::new(token)?);
    let message = EmailMessage {
        from,
        to,
        subject: Some("Hello from the postmark-client demo".to_owned()),
        text_body: Some("Hello from Rust.".to_owned()),
        ..Default::default()
    };

    let ack = client.send_email(&message).await?;
    println!(
        "submitted_at: {:?}, message_id: {:?}, message: {}",
        ack.submitted_at, ack.message_id, ack.message
    );

    Ok(())
}
