use std::io;

use postmark_client::{BounceFilter, PostmarkClient, ServerToken};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("POSTMARK_SERVER_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSTMARK_SERVER_TOKEN environment variable is required",
        )
    })?;

    let client = PostmarkClient::new(ServerToken::new(token)?);
    let filter = BounceFilter {
        count: Some(25),
        tag: std::env::var("POSTMARK_TAG").ok(),
        ..Default::default()
    };

    let bounces = client.get_bounces(&filter).await?;
    println!("total: {}", bounces.total_count);
    for bounce in bounces.bounces {
        println!(
            "{} {} {} ({})",
            bounce.id,
            bounce.bounce_type,
            bounce.email,
            bounce.bounced_at.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
