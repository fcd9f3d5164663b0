use std::{io, process::ExitCode, sync::OnceLock};

use application::{Args, Config, Service};
use service::infra::Memory;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = match Args::parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // `--help` and `--version` are not failures.
            _ = e.print();
            return Ok(());
        }
        Err(e) => {
            log::error!("failed to parse command line arguments: {e}");
            return Err(());
        }
    };

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let rooms = config
        .catalog
        .rooms(config.pricing.currency)
        .map_err(|e| log::error!("invalid catalog: {e}"))?;
    log::debug!(rooms = rooms.len(), "catalog loaded");

    let service = Service::new(config.service(), Memory::new(rooms));

    let output = application::run(&service, command)
        .await
        .map_err(|e| log::error!("command failed: {e}"))?;
    println!("{output}");

    Ok(())
}
