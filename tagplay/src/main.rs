// tagplay/src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use log::{error, info};

use tagplay::prelude::*;
use tagplay::transport::{RpiInputPin, RpiOutputPin, SerialTransport};

#[derive(Parser, Debug)]
#[command(name = "tagplay", version, about = "Play music by presenting NFC tags")]
struct Cli {
    /// JSON configuration file
    config: PathBuf,

    /// Minimum log level; RUST_LOG takes precedence
    #[arg(long, value_name = "LEVEL", default_value = "info", env = "TAGPLAY_LOG_LEVEL")]
    log_level: log::LevelFilter,
}

/// The configured way of delivering playback requests
enum Player {
    Log(LogDispatcher),
    Command(CommandDispatcher),
}

impl Dispatcher for Player {
    fn dispatch(&mut self, tag: &TagId, item: &CatalogItem) -> Result<()> {
        match self {
            Player::Log(d) => d.dispatch(tag, item),
            Player::Command(d) => d.dispatch(tag, item),
        }
    }
}

fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn open_reader(config: &AppConfig) -> Result<Pn532> {
    let r = &config.reader;
    let transport = SerialTransport::new(r.port.clone(), r.baudrate, r.open_attempts);
    let mut builder = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_reset_pin(Box::new(RpiOutputPin::new(r.reset_pin)?))
        .with_config(r.timing);
    if let Some(irq) = r.irq_pin {
        builder = builder.with_irq_pin(Box::new(RpiInputPin::new(irq)?));
    }
    builder.build()
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)?;
    info!(
        "loaded {} tag(s) from {}",
        config.tags.len(),
        cli.config.display()
    );

    let player = if config.dispatch.command.is_empty() {
        Player::Log(LogDispatcher)
    } else {
        Player::Command(CommandDispatcher::new(&config.dispatch.command)?)
    };

    let mut reader = open_reader(&config)?;
    let firmware = reader.reset_device()?;
    info!("initialized {}", firmware);

    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .map_err(|e| Error::Config(format!("signal handler setup failed: {}", e)))?;

    let poller_config = config.poller_config();
    let mut poller = Poller::new(reader, config.tags, player, poller_config);
    let result = poller.run_until(&stop);
    poller.reader_mut().shutdown();
    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
