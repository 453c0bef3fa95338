use crate::enumeration::policy::TiePolicy;
use anyhow::Context;
use log::LevelFilter;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

/// Runtime settings for a strength host.
///
/// Missing fields fall back to [`Config::default`], so a partial
/// document or environment only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// how ties with an opponent are credited
    pub policy: TiePolicy,
    /// spread candidate sweeps across threads
    pub parallel: bool,
    pub log_level: LevelFilter,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: TiePolicy::Loose,
            parallel: cfg!(feature = "parallel"),
            log_level: LevelFilter::Info,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Defaults overridden by STRENGTH_POLICY, STRENGTH_PARALLEL,
    /// STRENGTH_LOG and STRENGTH_LOG_DIR.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(policy) = lookup("STRENGTH_POLICY") {
            config.policy = policy.parse().context("STRENGTH_POLICY")?;
        }
        if let Some(parallel) = lookup("STRENGTH_PARALLEL") {
            config.parallel = Self::flag(&parallel).context("STRENGTH_PARALLEL")?;
        }
        if let Some(level) = lookup("STRENGTH_LOG") {
            config.log_level = level.trim().parse().context("STRENGTH_LOG")?;
        }
        if let Some(dir) = lookup("STRENGTH_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    fn flag(s: &str) -> anyhow::Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => anyhow::bail!("expected a boolean, got {:?}", s),
        }
    }
}
