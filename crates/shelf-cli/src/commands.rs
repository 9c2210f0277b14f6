use shelf_server::{ServerConfig, ShelfServer};

use crate::cli::{Cli, Command, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)?,
        None => ServerConfig {
            bind_addr: args.bind.parse()?,
        },
    };
    ShelfServer::new(config).serve().await?;
    Ok(())
}
