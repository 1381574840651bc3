use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blobd",
    about = "Content-addressable blob store over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the blobd HTTP server (the default)
    Serve(ServeArgs),
}

#[derive(Args, Default)]
pub struct ServeArgs {
    /// Address to bind, overriding the environment configuration
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Port to listen on, overriding the PORT environment variable
    #[arg(long)]
    pub port: Option<u16>,
}
