use std::{ffi::OsString, path::PathBuf};

use crate::args;

use super::{Program, Step};

/// Generates the residue-parameter (prepi) description of the input structure
#[derive(Clone, Debug)]
pub struct Antechamber {
    /// the input PDB file, ideally as an absolute path since antechamber runs
    /// in the scratch directory
    pub input: PathBuf,
    pub prepin: PathBuf,
}

impl Antechamber {
    pub fn new(input: impl Into<PathBuf>, prepin: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            prepin: prepin.into(),
        }
    }
}

impl Program for Antechamber {
    fn step(&self) -> Step {
        Step::Antechamber
    }

    fn args(&self) -> Vec<OsString> {
        args![
            "-i",
            &self.input,
            "-fi",
            "pdb",
            "-fo",
            "prepi",
            "-o",
            &self.prepin
        ]
    }

    fn outputs(&self) -> Vec<PathBuf> {
        vec![self.prepin.clone()]
    }
}
