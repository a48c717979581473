use std::error;
use std::fmt::{self, Display, Formatter};
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    StateLength { expected: usize, found: usize },
    CursorOutOfRange { cursor: usize, max: usize },
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::StateLength { expected, found } => write!(
                formatter,
                "state must hold {} words, got {}",
                expected, found
            ),
            Error::CursorOutOfRange { cursor, max } => {
                write!(formatter, "cursor {} is past the end of the state ({})", cursor, max)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;
