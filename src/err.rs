use std::fmt;

pub enum FatalErr {
    DotEnv(dotenv::Error),
    Logger(log::SetLoggerError),
    StdIo(std::io::Error),
    Serde(serde_json::Error),
    ConfigErr(String),
}

impl FatalErr {
    pub fn exit(msg: impl fmt::Display) {
        eprintln!("{}", msg);
        std::process::exit(1);
    }

    pub fn config(
        var: impl fmt::Display,
        value: impl fmt::Display,
        allowed_vals: impl fmt::Display,
    ) -> Self {
        Self::ConfigErr(format!(
            "{0} is set to `{1}`, which is invalid.\n{3:7}{0} must be {2}.",
            var, value, allowed_vals, ""
        ))
    }
}

impl std::error::Error for FatalErr {}
impl fmt::Debug for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl fmt::Display for FatalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FatalErr::*;
        write!(
            f,
            "{}",
            match self {
                DotEnv(e) => format!("could not parse the .env file.\n{:7}{}", "", e),
                Logger(e) => format!("{}", e),
                StdIo(e) => format!("{}", e),
                Serde(e) => format!("could not serialize the state snapshot.\n{:7}{}", "", e),
                ConfigErr(e) => e.to_string(),
            }
        )
    }
}

impl From<dotenv::Error> for FatalErr {
    fn from(e: dotenv::Error) -> Self {
        Self::DotEnv(e)
    }
}
impl From<std::io::Error> for FatalErr {
    fn from(e: std::io::Error) -> Self {
        Self::StdIo(e)
    }
}
impl From<serde_json::Error> for FatalErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}
impl From<log::SetLoggerError> for FatalErr {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
