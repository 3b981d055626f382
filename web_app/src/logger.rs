use log::LevelFilter;
use simplelog::{ConfigBuilder, SimpleLogger};

/// Console logger for local runs; prod relies on logfire
pub fn setup_simple_logger() -> anyhow::Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("puppy_health")
        .build();

    Ok(SimpleLogger::init(LevelFilter::Info, logger_config)?)
}
