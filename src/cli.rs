use clap::{Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "embedsrc")]
#[command(about = "Resolve playable sources from video embed pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Server(ServerArgs),
    /// Resolve one embed URL and print the result as JSON
    Resolve(ResolveArgs),
}

#[derive(clap::Args, Debug)]
pub struct ServerArgs {
    /// Address to bind to (defaults to server.bind_addr from config)
    #[arg(long)]
    pub address: Option<SocketAddr>,
}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// Embed page URL, e.g. https://host/embed-1/v2/e-1/<id>
    pub embed_url: String,

    /// Referer sent with the embed page request
    #[arg(long)]
    pub referer: String,
}
