// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// A `ToastHandle` was used after its owning `Toasts` manager was dropped.
    Handle,
    /// A status string did not name one of the four known statuses.
    UnknownStatus(String),
    /// A position string did not name one of the six screen anchors.
    UnknownPosition(String),
    Config(String),
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Handle => {
                write!(f, "toast handle used after its manager was dropped")
            }
            Error::UnknownStatus(s) => write!(f, "unknown toast status: {}", s),
            Error::UnknownPosition(s) => write!(f, "unknown toast position: {}", s),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
