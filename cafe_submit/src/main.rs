mod api;
mod cli;
mod config;
mod form;
mod handler;
mod listing;
mod macros;
mod model;
mod notify;

use std::{error::Error, path::PathBuf, process::ExitCode};

use api::HttpTransport;
use clap::Parser;
use form::{FieldName, Presets, PresetForm};
use handler::{SubmitEvent, SubmitHandler};
use log::debug;
use notify::TerminalSink;

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(bin_name = env!("CARGO_BIN_NAME"))]
enum Cli {
    #[command(about = "Prints tool version")]
    #[command(long_about = None)]
    Version,

    #[command(about = "Fill in the add-cafe form and submit it")]
    #[command(long_about = None)]
    Submit(SubmitArgs),

    #[command(about = "List all cafes")]
    #[command(long_about = None)]
    List(ConnectionArgs),
}

#[derive(clap::Args)]
struct ConnectionArgs {
    #[arg(short='c', long, default_value=Some("./config.toml"))]
    config_path: PathBuf,

    /// Overrides base_url from the config.
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(clap::Args)]
struct SubmitArgs {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Pre-fills a form field, e.g. --set name=Monmouth --set has_wifi=yes.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = form::parse_preset)]
    presets: Vec<(FieldName, String)>,

    /// Do not prompt: fields not set are sent empty or unchecked.
    #[arg(long)]
    non_interactive: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    match Cli::parse() {
        Cli::Version => {
            println!(env!("CARGO_PKG_VERSION"));
        }
        Cli::Submit(args) => {
            let transport = connect(args.connection)?;
            let sink = TerminalSink;
            let handler = SubmitHandler::new(&transport, &sink);

            let presets: Presets = args.presets.into_iter().collect();
            let mut event = SubmitEvent::new();

            let outcome = if args.non_interactive {
                handler.handle(&mut event, &PresetForm::new(presets))?
            } else {
                handler.handle(&mut event, &cli::PromptForm::new(presets))?
            };

            if !outcome.is_created() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Cli::List(args) => {
            let transport = connect(args)?;

            let cafes = listing::fetch_cafes(&transport)?;

            print!("{}", listing::render(&cafes));
        }
    };

    Ok(ExitCode::SUCCESS)
}

fn connect(args: ConnectionArgs) -> anyhow::Result<HttpTransport> {
    debug!("Подгружаем конфиг из {:?}", args.config_path);
    let mut cfg = config::load(args.config_path)?;

    if let Some(url) = args.base_url {
        cfg.base_url = url;
        config::normalize(&mut cfg);
    }

    let base_url = cfg.base_url()?;

    debug!("Работаем с АПИ на {}", base_url);

    Ok(HttpTransport::new(base_url, cfg.session_cookie.as_deref())?)
}
