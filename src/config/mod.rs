//! Configuration defaults.  All settings can be overridden by an
//! environmental variable of the same name (either by setting the variable at
//! runtime or in the `.env` file).

mod engine_cfg;
mod engine_cfg_types;
mod environmental_variables;

pub use engine_cfg::EngineConfig;
pub use environmental_variables::EnvVar;

use crate::err::FatalErr;
use hashbrown::HashMap;

pub fn merge_dotenv() -> Result<(), FatalErr> {
    // A missing .env is fine; a malformed one is not.
    match dotenv::dotenv() {
        Ok(_) | Err(dotenv::Error::Io(_)) => Ok(()),
        Err(e) => Err(FatalErr::DotEnv(e)),
    }
}

pub fn from_env(env_vars: HashMap<String, String>) -> Result<EngineConfig, FatalErr> {
    let env_vars = EnvVar::new(env_vars);
    log::info!("Environmental variables Weir received: {}", &env_vars);
    EngineConfig::from_env(env_vars)
}
