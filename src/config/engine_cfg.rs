use super::engine_cfg_types::*;
use super::EnvVar;
use crate::err::FatalErr;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub env: Env,
    pub log_level: LogLevel,
    pub trim_ceiling: TrimCeiling,
    pub trim_target: TrimTarget,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            env: Env::default(),
            log_level: LogLevel::default(),
            trim_ceiling: TrimCeiling::default(),
            trim_target: TrimTarget::default(),
        }
    }
}

impl EngineConfig {
    pub(crate) fn from_env(env: EnvVar) -> Result<Self, FatalErr> {
        let cfg = Self {
            env: Env::default().maybe_update(env.get("RUST_ENV"))?,
            log_level: LogLevel::default().maybe_update(env.get("RUST_LOG"))?,
            trim_ceiling: TrimCeiling::default().maybe_update(env.get("TIMELINE_CAP"))?,
            trim_target: TrimTarget::default().maybe_update(env.get("TIMELINE_TRIM"))?,
        };
        log::warn!("Using engine configuration:\n {:#?}", &cfg);
        Ok(cfg)
    }
}
