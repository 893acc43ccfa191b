mod constants;
mod display;
mod error;
mod images;
mod print_help;
mod provider;
mod secrets;
mod utils;

use crate::display::report_error;
use crate::error::GenerationError;
use crate::print_help::print_help;
use crate::secrets::EnvSecretStore;
use crate::utils::process_command;
use std::{env, process};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2
        || args
            .iter()
            .any(|arg| arg == "-help" || arg == "-h" || arg == "--help")
    {
        print_help();
        return;
    }

    let client = match reqwest::Client::builder().build() {
        Ok(client) => client,
        Err(e) => {
            report_error(&GenerationError::Unexpected(e.to_string()));
            process::exit(1);
        }
    };

    if process_command(&client, &args, &EnvSecretStore).await.is_err() {
        process::exit(1);
    }
}
