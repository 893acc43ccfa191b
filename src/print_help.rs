use crate::provider::Provider;
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " STORYSKETCH ".yellow());
    println!("Turns a scene description into a pencil-style storybook illustration.");
    println!("\nUsage:");
    println!(
        "  {} [options] <scene description>",
        "storysketch".bold().green()
    );
    println!("\nOptions:");
    println!(
        "  {}  Image provider (default: {}).",
        "-p, --provider <name>".bold().cyan(),
        Provider::default().as_str()
    );
    for provider in Provider::ALL {
        let config = provider.config();
        println!(
            "      {:<14} {} via {}",
            provider.as_str().magenta(),
            config.model,
            config.secret_name
        );
    }
    println!(
        "  {}    Where to save the image (default: illustration.<ext>).",
        "-o, --output <path>".bold().cyan()
    );
    println!(
        "  {}     Override the provider's generation URL.",
        "--endpoint <url>".bold().cyan()
    );
    println!(
        "  {}              Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nSecrets are read from the environment or a .env file.");
    println!("\nExamples:");
    println!(
        "  {} A fox reading a book under an oak tree",
        "storysketch".bold().green()
    );
    println!(
        "  {} Two children flying a kite on a windy hill",
        "storysketch -p together -o kite.png".bold().green()
    );
    println!("{:━^60}", "".yellow());
}
