//! Descriptions of the AmberTools programs used to minimize a small molecule
//! and a [runner::Runner] abstraction for actually invoking them.

pub mod program;
pub mod runner;

pub use program::{Program, Step, Template, ToolError};
pub use runner::{Invocation, Outcome, Runner, local::Local};

/// build a `Vec<OsString>` from a list of string-like and path-like
/// expressions, for use as program arguments
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => ({
        vec![$(::std::ffi::OsString::from($arg),)*] as Vec<::std::ffi::OsString>
    });
}
