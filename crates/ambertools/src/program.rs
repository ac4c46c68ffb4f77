use std::{
    error::Error,
    ffi::OsString,
    fmt::Display,
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

pub mod antechamber;
pub mod cpptraj;
pub mod parmchk2;
pub mod sander;
pub mod tleap;

pub use antechamber::Antechamber;
pub use cpptraj::Cpptraj;
pub use parmchk2::Parmchk2;
pub use sander::{Cntrl, Sander};
pub use tleap::Tleap;


/// The steps of the minimization pipeline, in the order they run
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum Step {
    Antechamber,
    Parmchk2,
    Tleap,
    Sander,
    Cpptraj,
}

impl Step {
    /// the name of the executable under `$AMBERHOME/bin`
    pub fn binary(&self) -> &'static str {
        match self {
            Step::Antechamber => "antechamber",
            Step::Parmchk2 => "parmchk2",
            Step::Tleap => "tleap",
            Step::Sander => "sander",
            Step::Cpptraj => "cpptraj",
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.binary())
    }
}

#[derive(Debug)]
pub enum ToolError {
    /// the program could not be started at all
    Spawn { step: Step, source: std::io::Error },

    /// the program ran but exited unsuccessfully. `code` is None if it was
    /// terminated by a signal
    Failed {
        step: Step,
        code: Option<i32>,
        stderr: String,
    },

    /// the program exited successfully but one of the files it is supposed to
    /// produce is missing
    MissingOutput { step: Step, path: PathBuf },

    /// writing the control file for the program failed
    Io { step: Step, source: std::io::Error },
}

impl ToolError {
    pub fn step(&self) -> Step {
        match self {
            ToolError::Spawn { step, .. }
            | ToolError::Failed { step, .. }
            | ToolError::MissingOutput { step, .. }
            | ToolError::Io { step, .. } => *step,
        }
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::Spawn { step, source } => {
                write!(f, "failed to run {step}: {source}")
            }
            ToolError::Failed { step, code, stderr } => {
                match code {
                    Some(code) => {
                        write!(f, "{step} exited with status {code}")?
                    }
                    None => write!(f, "{step} was terminated by a signal")?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ":\n{stderr}")?;
                }
                Ok(())
            }
            ToolError::MissingOutput { step, path } => write!(
                f,
                "{step} finished without producing {}",
                path.display()
            ),
            ToolError::Io { step, source } => {
                write!(f, "failed to write {step} input: {source}")
            }
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ToolError::Spawn { source, .. } | ToolError::Io { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// A control-file template. In line with [Go
/// templates](https://pkg.go.dev/text/template), directives like `{{.prmtop}}`
/// are replaced by [Template::render]. Unknown directives are left alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub body: String,
}

impl Template {
    pub fn from(s: &str) -> Self {
        Self {
            body: s.to_string(),
        }
    }

    pub fn render(&self, vars: &[(&str, String)]) -> String {
        let mut body = self.body.clone();
        for (key, value) in vars {
            body = body.replace(&format!("{{{{.{key}}}}}"), value);
        }
        body
    }
}

impl From<String> for Template {
    fn from(body: String) -> Self {
        Self { body }
    }
}

/// A trait for describing programs runnable by a [crate::runner::Runner]
pub trait Program {
    fn step(&self) -> Step;

    /// the executable name, relative to `$AMBERHOME/bin`
    fn binary(&self) -> &'static str {
        self.step().binary()
    }

    /// the command-line arguments passed to `binary`
    fn args(&self) -> Vec<OsString>;

    /// write any control file the program reads. most programs take all of
    /// their input on the command line, so the default does nothing
    fn write_input(&self) -> std::io::Result<()> {
        Ok(())
    }

    /// the files the program is expected to create
    fn outputs(&self) -> Vec<PathBuf>;
}
