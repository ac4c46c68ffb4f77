use std::{ffi::OsString, path::PathBuf};

use crate::args;

use super::{Program, Step};

/// Fills in the force-field parameters missing for the molecule in `prepin`
#[derive(Clone, Debug)]
pub struct Parmchk2 {
    pub prepin: PathBuf,
    pub frcmod: PathBuf,
}

impl Parmchk2 {
    pub fn new(prepin: impl Into<PathBuf>, frcmod: impl Into<PathBuf>) -> Self {
        Self {
            prepin: prepin.into(),
            frcmod: frcmod.into(),
        }
    }
}

impl Program for Parmchk2 {
    fn step(&self) -> Step {
        Step::Parmchk2
    }

    fn args(&self) -> Vec<OsString> {
        args!["-i", &self.prepin, "-f", "prepi", "-o", &self.frcmod]
    }

    fn outputs(&self) -> Vec<PathBuf> {
        vec![self.frcmod.clone()]
    }
}
