use std::sync::Arc;

use blobd_server::{BlobServer, ServerConfig};
use blobd_store::InMemoryObjectStore;

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config.bind_addr.set_port(port);
    }

    // The store is constructed here and injected; swapping in a durable
    // backend is a different constructor behind the same trait.
    let server = BlobServer::new(config, Arc::new(InMemoryObjectStore::new()));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server.serve())?;
    Ok(())
}
