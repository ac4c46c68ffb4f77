use std::{ffi::OsString, path::PathBuf};

use crate::args;

use super::{Program, Step, Template};

pub const TEMPLATE: &str = "parm {{.prmtop}}
trajin {{.restart}}
trajout {{.pdb}}
go
";

/// Converts the sander restart file back into a PDB file
#[derive(Clone, Debug)]
pub struct Cpptraj {
    pub script: PathBuf,
    pub template: Template,
    pub prmtop: PathBuf,
    pub restart: PathBuf,
    pub pdb: PathBuf,
}

impl Cpptraj {
    pub fn new(
        script: impl Into<PathBuf>,
        prmtop: impl Into<PathBuf>,
        restart: impl Into<PathBuf>,
        pdb: impl Into<PathBuf>,
    ) -> Self {
        Self {
            script: script.into(),
            template: Template::from(TEMPLATE),
            prmtop: prmtop.into(),
            restart: restart.into(),
            pdb: pdb.into(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn render(&self) -> String {
        self.template.render(&[
            ("prmtop", self.prmtop.display().to_string()),
            ("restart", self.restart.display().to_string()),
            ("pdb", self.pdb.display().to_string()),
        ])
    }
}

impl Program for Cpptraj {
    fn step(&self) -> Step {
        Step::Cpptraj
    }

    fn args(&self) -> Vec<OsString> {
        args!["-i", &self.script]
    }

    fn write_input(&self) -> std::io::Result<()> {
        std::fs::write(&self.script, self.render())
    }

    fn outputs(&self) -> Vec<PathBuf> {
        vec![self.pdb.clone()]
    }
}
