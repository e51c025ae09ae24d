use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use warble_client::{Config, CreateOutcome, WarbleClient};

#[derive(Parser, Debug)]
struct Args {
    /// Text of the new warble. Sent as-is; the server decides what's
    /// acceptable.
    #[arg(long)]
    text: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::load_env_config()?;
    let client = WarbleClient::from_config(&config);

    match client.create_warble(args.text).await {
        CreateOutcome::Created => println!("Warble posted"),
        CreateOutcome::Failed => {
            println!("Request failed. Please try again");
            std::process::exit(1);
        }
    }

    Ok(())
}
