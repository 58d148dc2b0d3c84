use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TimelineErr {
    InvalidInput,
    BadListId,
}

impl std::error::Error for TimelineErr {}

impl From<std::num::ParseIntError> for TimelineErr {
    fn from(_error: std::num::ParseIntError) -> Self {
        Self::BadListId
    }
}

impl fmt::Display for TimelineErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use TimelineErr::*;
        let msg = match self {
            InvalidInput => "The timeline key could not be parsed into a supported stream",
            BadListId => "The list id in the timeline key is not a number",
        };
        write!(f, "{}", msg)
    }
}
