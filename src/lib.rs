mod client;
mod config;
mod models;

pub use client::WarbleClient;
pub use config::Config;
pub use models::{CreateOutcome, NewWarble, ToggleOutcome, WarbleId};
