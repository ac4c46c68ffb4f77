//! Energy minimization of small-molecule PDB files with AmberTools

use std::{error, fmt::Display, path::PathBuf};

use ambertools::ToolError;

mod cleanup;
pub mod config;
pub mod input;
pub mod pipeline;

pub use config::{Config, Params};
pub use input::InputError;
pub use pipeline::run;

/// print a message to stderr and exit with status 1
#[macro_export]
macro_rules! die {
    ($($t:tt)*) => {{
        eprintln!($($t)*);
        std::process::exit(1);
    }};
}

#[derive(Debug)]
pub enum Error {
    /// the toolchain location or config file is missing or invalid
    Config(String),

    /// the input file failed validation
    Input(InputError),

    /// one of the AmberTools programs failed
    Tool(ToolError),

    /// creating, cleaning, or moving files in the work directory failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(s) => write!(f, "{s}"),
            Error::Input(e) => write!(f, "{e}"),
            Error::Tool(e) => write!(f, "{e}"),
            Error::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Config(_) => None,
            Error::Input(e) => error::Error::source(e),
            Error::Tool(e) => error::Error::source(e),
            Error::Io { source, .. } => Some(source),
        }
    }
}

impl From<ToolError> for Error {
    fn from(e: ToolError) -> Self {
        Self::Tool(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}
