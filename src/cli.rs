use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Windsite CLI.")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the site-data HTTP API.
    Http {
        #[arg(env = "WINDSITE_SERVER_ADDRESS", default_value = "127.0.0.1:5001")]
        address: std::net::SocketAddr,
    },
    /// Fetch a single site report and print it to stdout.
    Fetch {
        #[arg(long)]
        latitude: f64,
        #[arg(long)]
        longitude: f64,
    },
}
