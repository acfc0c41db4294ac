//! Fetch one page of posts for a hashtag from the ED server.
//!
//! Usage: `cargo run --example hashtag_posts -- <TOKEN> [HASHTAG]`
//!
//! Set `RUST_LOG=tiktok_data_sdk=debug` to see individual attempts.

use tiktok_data_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let token = args
        .next()
        .ok_or("usage: hashtag_posts <TOKEN> [HASHTAG]")?;
    let hashtag = args.next().unwrap_or_else(|| "magic".to_string());

    let client = EnsembleDataClient::new(token)?;

    println!("sending the request..");
    match client.get_hashtag_posts(&hashtag, 0i64).await? {
        ApiResponse::Success(data) => {
            let count = data["data"].as_array().map(Vec::len).unwrap_or(0);
            println!("Success!");
            println!("Retrieved the last {} posts", count);
        }
        ApiResponse::Failure(failure) => {
            println!("Something went wrong, check the response for more information.");
            println!("(Did you insert a valid token?)");
            match failure {
                Failure::Response(raw) => println!("HTTP {}: {}", raw.status, raw.body),
                Failure::Transport(e) => println!("{}", e),
            }
        }
    }

    Ok(())
}
