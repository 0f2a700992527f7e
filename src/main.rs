mod cli;
mod client;
mod config;
mod dto;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use config::{ClientConfig, RelayConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            backend_url,
        } => {
            let config = match backend_url {
                Some(url) => RelayConfig::with_backend_url(url),
                None => RelayConfig::from_env(),
            };
            server::run_server(host, port, config).await?;
        }
        Commands::TranscribeFile {
            media_file,
            server_url,
            language,
            vad,
        } => {
            client::run_client(ClientConfig {
                server_url,
                media_file,
                language,
                vad,
            })
            .await?;
        }
    }

    Ok(())
}
