use vanille_config::LoggingConfig;

/// Installs a `simple_logger` configured from `config`.
///
/// A server usually installs its own logger before loading plugins; in that case the
/// existing one is kept and all plugin output goes there.
pub fn init_logger(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let mut logger = simple_logger::SimpleLogger::new();
    logger = logger.with_timestamp_format(time::macros::format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    if !config.timestamp {
        logger = logger.without_timestamps();
    }

    logger = logger.with_level(config.level.into());

    // must come after `with_level`, so RUST_LOG wins
    if config.env {
        logger = logger.env();
    }

    logger = logger.with_colors(config.color);
    logger = logger.with_threads(config.threads);

    if let Err(err) = logger.init() {
        log::debug!("Keeping the already installed logger: {err}");
    }
}
