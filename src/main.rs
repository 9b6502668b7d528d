mod api;
mod app;
mod config;
mod error;
mod events;
mod state;
mod ui;
mod utils;

use crate::app::App;
use crate::config::Config;
use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("issue-tui")
        .version(crate_version!())
        .about("A terminal user interface for issue tracking")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIRECTORY")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .short("u")
                .long("base-url")
                .value_name("URL")
                .help("Overrides the configured tracker base URL")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(base_url) = matches.value_of("base-url") {
        config.base_url = base_url.to_string();
    }

    App::start(config).await
}
