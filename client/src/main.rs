use std::{
    env,
    io,
    sync::{Arc, RwLock},
};

use anyhow::Context;
use config::ClientConfig;
use log::info;
use session::Session;

mod cli;
mod config;
mod session;
mod ticker;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1).as_deref() {
        Some("--example") => {
            let example = serde_json::to_string_pretty(&ClientConfig::default())?;
            println!("{example}");
            return Ok(());
        }
        Some(config_path) => ClientConfig::load(config_path)?,
        None => ClientConfig::default(),
    };
    config.validate().context("Invalid config")?;

    let session = Session::new(&config);
    let (size, max) = (session.size(), session.max_size());
    info!(
        "Starting with a {}x{} board (max {}x{})",
        size.width, size.height, max.width, max.height
    );

    let session_arc = Arc::new(RwLock::new(session));
    let mut cli = cli::Cli::new(session_arc);

    if config.autostart {
        cli.handle_cmd(["run"].into_iter())?;
    }

    cli.run(io::stdin().lock(), io::stdout())
}
