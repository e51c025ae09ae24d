use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use warble_client::{Config, ToggleOutcome, WarbleClient, WarbleId};

#[derive(Parser, Debug)]
struct Args {
    /// Identifier of the warble to like or unlike. Whether this adds or
    /// removes the like depends on the server's current state for your user.
    #[arg(long)]
    warble_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load_env_config()?;
    let client = WarbleClient::from_config(&config);

    match client.toggle_like(&WarbleId(args.warble_id)).await {
        ToggleOutcome::LikeAdded => println!("Like added"),
        ToggleOutcome::LikeRemoved => println!("Like removed"),
        ToggleOutcome::RequestFailed => {
            println!("Request failed. Please try again");
            std::process::exit(1);
        }
    }

    Ok(())
}
