use fern::Dispatch;

use crate::modules::helpers::config::Config;

pub fn setup_logging(config: &Config) -> Result<(), fern::InitError> {
    let mut base_config = fern::Dispatch::new();

    base_config = base_config.level(level_filter(&config.logging_level));

    let file_logger_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout())
        .chain(fern::log_file(&config.log_file)?);

    base_config
        .chain(file_logger_config)
        .apply()?;

    Ok(())
}

fn level_filter(verbosity: &str) -> log::LevelFilter {
    match verbosity {
        "OFF" => log::LevelFilter::Off,
        "ERROR" => log::LevelFilter::Error,
        "WARN" => log::LevelFilter::Warn,
        "DEBUG" => log::LevelFilter::Debug,
        "TRACE" => log::LevelFilter::Trace,
        // default to info
        _ => log::LevelFilter::Info,
    }
}
