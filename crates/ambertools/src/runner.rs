use std::{
    ffi::OsString,
    fmt::Display,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::program::{Program, ToolError};

pub mod local;


/// A fully-resolved command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// the working directory to run `program` in
    pub dir: PathBuf,
}

impl Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What a [Runner] reports back about a finished process
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// the exit code, or None if the process was killed by a signal
    pub code: Option<i32>,
    pub stderr: String,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait Runner {
    /// run `inv` to completion. only failing to start the process is an error
    /// here; a non-zero exit is reported through the returned [Outcome]
    fn run(&self, inv: &Invocation) -> std::io::Result<Outcome>;

    /// write the input for `program`, run it from `dir` using the binaries in
    /// `amberhome`, and make sure it both succeeded and produced its outputs
    fn execute<P: Program>(
        &self,
        program: &P,
        amberhome: &Path,
        dir: &Path,
    ) -> Result<(), ToolError> {
        let step = program.step();
        program
            .write_input()
            .map_err(|source| ToolError::Io { step, source })?;
        let inv = Invocation {
            program: amberhome.join("bin").join(program.binary()),
            args: program.args(),
            dir: dir.to_path_buf(),
        };
        info!("running {step}");
        debug!("{inv}");
        let outcome = self
            .run(&inv)
            .map_err(|source| ToolError::Spawn { step, source })?;
        if !outcome.success() {
            return Err(ToolError::Failed {
                step,
                code: outcome.code,
                stderr: outcome.stderr,
            });
        }
        for path in program.outputs() {
            if !path.exists() {
                return Err(ToolError::MissingOutput { step, path });
            }
        }
        Ok(())
    }
}
