//! log4rs initialisation.

use crate::config::log_config_path;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Install the global logger.
///
/// Uses the YAML file from [`log_config_path`] when it exists, otherwise an
/// `info` level console appender on stderr so stdout stays free for the
/// operator messages.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = log_config_path();
    if path.exists() {
        log4rs::init_file(&path, Default::default())?;
        log::debug!("logging configured from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
