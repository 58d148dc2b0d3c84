use crate::from_env_var;

use std::str::FromStr;
use strum::VariantNames as _;
use strum_macros::{EnumString, VariantNames};

from_env_var!(
    /// The current environment, which controls what file to read other ENV vars from
    let name = Env;
    let default: EnvInner = EnvInner::Development;
    let (env_var, allowed_values) = ("RUST_ENV", format!("one of: {:?}", EnvInner::VARIANTS));
    let from_str = |s| EnvInner::from_str(s).ok();
);
#[derive(Clone, EnumString, VariantNames, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum EnvInner {
    Production,
    Development,
}

from_env_var!(
    /// How verbosely the engine should log messages
    let name = LogLevel;
    let default: LogLevelInner = LogLevelInner::Warn;
    let (env_var, allowed_values) = ("RUST_LOG", format!("one of: {:?}", LogLevelInner::VARIANTS));
    let from_str = |s| LogLevelInner::from_str(s).ok();
);
#[derive(Clone, EnumString, VariantNames, Debug)]
#[strum(serialize_all = "snake_case")]
pub enum LogLevelInner {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

from_env_var!(
    /// How many visible slots a timeline may hold before a live insert at the
    /// top truncates it
    let name = TrimCeiling;
    let default: usize = 40;
    let (env_var, allowed_values) = ("TIMELINE_CAP", "a number".to_string());
    let from_str = |s| s.parse().ok();
);

from_env_var!(
    /// The working-set size a truncated timeline is cut back to
    let name = TrimTarget;
    let default: usize = 20;
    let (env_var, allowed_values) = ("TIMELINE_TRIM", "a number".to_string());
    let from_str = |s| s.parse().ok();
);
