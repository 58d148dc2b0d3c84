use std::fmt;

#[derive(Debug)]
pub enum CommandErr {
    BadJson(serde_json::Error),
}

impl std::error::Error for CommandErr {}

impl fmt::Display for CommandErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use CommandErr::*;
        match self {
            BadJson(inner) => write!(
                f,
                "The command text could not be parsed into a supported command.\n{:7}{}",
                "", inner
            ),
        }
    }
}

impl From<serde_json::Error> for CommandErr {
    fn from(error: serde_json::Error) -> Self {
        Self::BadJson(error)
    }
}
