pub mod cli;
pub mod config;
pub mod errors;
pub mod fsutil;
pub mod lexicon;
pub mod logger;
pub mod manifest;
pub mod points;
pub mod rng;

mod test_support;

use crate::config::AppConfig;

/// Initializes logging from the resolved configuration.
///
/// A `log_config` file takes over completely; otherwise the console (and
/// optional rolling file) setup from [`logger::configure_logging`] is used.
pub fn init(cfg: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &cfg.log_config {
        return logger::init_path(path);
    }
    logger::configure_logging(cfg.log_dir.as_deref(), cfg.log_level.as_deref(), cfg.log_retention);
    Ok(())
}
