use clap::Parser;
use color_eyre::Result;

use helpline::{
    cli::{Cli, Cmd},
    commands,
    config::Config,
    core::{app::HelplineApp, r#loop::AppLoop},
};

#[tokio::main]
async fn main() -> Result<()> {
    helpline::errors::init()?;
    let _log_guard = helpline::logging::init()?;

    let args = Cli::parse();
    let mut config = Config::new()?;
    config.apply_cli(&args);

    match args.cmd.unwrap_or(Cmd::Run) {
        Cmd::Run => {
            let mut app = HelplineApp::new(config)?;
            AppLoop::new(&mut app)?.run().await?;
        }
        Cmd::List { query, category } => commands::list(&query, category),
        Cmd::Call { query } => commands::call(&config, &query)?,
    }
    Ok(())
}
