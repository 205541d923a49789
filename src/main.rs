use clap::Parser;
use cli::{Cli, Command};

mod cli;
mod config;
mod meteo;
mod server;
mod site_data;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    match args.cmd {
        Command::Http { address } => server::run(address).await,
        Command::Fetch {
            latitude,
            longitude,
        } => {
            let meteo = meteo::Meteo::new(&config::config().meteo.base_url);
            let request = site_data::SiteDataRequest {
                latitude,
                longitude,
            };
            let report = site_data::collect(&meteo, &request).await.unwrap();
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
    }
}
