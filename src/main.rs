// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::Arc;

use dialect_translator::app_config::Config;
use dialect_translator::app_controller::Controller;
use dialect_translator::database::{DatabaseConnection, Repository};
use dialect_translator::providers::GeminiClient;
use dialect_translator::server;

/// Configuration file read from the working directory when present
const CONFIG_PATH: &str = "conf.json";

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // set_max_level may lower the global filter later; honor whichever is stricter
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} [{}] {}\x1B[0m",
                color,
                now,
                tag,
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the configured level is applied once config is read
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    let config = Config::load(CONFIG_PATH)?;
    config
        .validate()
        .context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    let db = DatabaseConnection::open(&config.storage.database_path)?;
    match db.stats() {
        Ok(stats) => info!("History store ready ({})", stats),
        Err(e) => warn!("Could not read history statistics: {}", e),
    }

    let repository = Repository::new(db);
    let client = GeminiClient::from_config(&config);
    info!("Using model {}", client.model());

    let controller = Controller::new(
        Arc::new(client),
        Arc::new(repository.clone()),
        config.history_limit,
    );

    server::run_server(&config, controller)
        .await
        .context("Web server failed")?;

    if let Err(e) = repository.close() {
        warn!("History store not closed cleanly: {}", e);
    }

    Ok(())
}
