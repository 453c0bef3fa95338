pub mod cards;
pub mod config;
pub mod enumeration;

pub use cards::highhand::HighHand;
pub use config::Config;
pub use enumeration::enumerator::Enumerator;
pub use enumeration::enumerator::strength;
pub use enumeration::oracle::Oracle;
pub use enumeration::policy::TiePolicy;

pub type Probability = f64;

/// Uniformly random instances, for tests and benches.
pub trait Arbitrary {
    fn random() -> Self;
}

/// initialize logging to the terminal and a timestamped file in the
/// configured log directory
#[cfg(feature = "logging")]
pub fn log(config: &Config) -> anyhow::Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        config.log_level,
        settings.clone(),
        std::fs::File::create(config.log_dir.join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        config.log_level.min(log::LevelFilter::Info),
        settings.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    log::info!(
        "logging at {} to {}",
        config.log_level,
        config.log_dir.display()
    );
    Ok(())
}
