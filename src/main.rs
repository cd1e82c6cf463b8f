mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use embedsrc::config::Config;
use embedsrc::resolver::{EmbedReference, SourceResolver};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Logs go to stderr so `resolve` output stays pipeable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Server(args) => {
            let address = args.address.unwrap_or(config.server.bind_addr);
            embedsrc::api::run(config, address).await?
        }
        Commands::Resolve(args) => {
            let resolver = SourceResolver::from_config(&config)?;
            let result = resolver
                .resolve(&EmbedReference::new(args.embed_url, args.referer))
                .await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
