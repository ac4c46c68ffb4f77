use std::{ffi::OsString, path::PathBuf};

use crate::args;

use super::{Program, Step, Template};

/// The default tleap script. `NEWPDB.PDB` is the copy of the input structure
/// antechamber leaves in its working directory, so tleap has to run in the
/// same place.
pub const TEMPLATE: &str = "source {{.force_field}}
loadamberprep {{.prepin}}
loadamberparams {{.frcmod}}
model = loadpdb NEWPDB.PDB
saveamberparm model {{.prmtop}} {{.inpcrd}}
quit
";

pub const FORCE_FIELD: &str = "leaprc.gaff";

/// Builds the topology/coordinate pair from the antechamber and parmchk2
/// output
#[derive(Clone, Debug)]
pub struct Tleap {
    /// where to write the tleap script
    pub script: PathBuf,
    pub template: Template,
    pub force_field: String,
    pub prepin: PathBuf,
    pub frcmod: PathBuf,
    pub prmtop: PathBuf,
    pub inpcrd: PathBuf,
}

impl Tleap {
    pub fn new(
        script: impl Into<PathBuf>,
        prepin: impl Into<PathBuf>,
        frcmod: impl Into<PathBuf>,
        prmtop: impl Into<PathBuf>,
        inpcrd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            script: script.into(),
            template: Template::from(TEMPLATE),
            force_field: FORCE_FIELD.to_owned(),
            prepin: prepin.into(),
            frcmod: frcmod.into(),
            prmtop: prmtop.into(),
            inpcrd: inpcrd.into(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_force_field(mut self, force_field: impl Into<String>) -> Self {
        self.force_field = force_field.into();
        self
    }

    /// Supported directives are `{{.force_field}}`, `{{.prepin}}`,
    /// `{{.frcmod}}`, `{{.prmtop}}`, and `{{.inpcrd}}`
    pub fn render(&self) -> String {
        self.template.render(&[
            ("force_field", self.force_field.clone()),
            ("prepin", self.prepin.display().to_string()),
            ("frcmod", self.frcmod.display().to_string()),
            ("prmtop", self.prmtop.display().to_string()),
            ("inpcrd", self.inpcrd.display().to_string()),
        ])
    }
}

impl Program for Tleap {
    fn step(&self) -> Step {
        Step::Tleap
    }

    fn args(&self) -> Vec<OsString> {
        args!["-f", &self.script]
    }

    fn write_input(&self) -> std::io::Result<()> {
        std::fs::write(&self.script, self.render())
    }

    fn outputs(&self) -> Vec<PathBuf> {
        vec![self.prmtop.clone(), self.inpcrd.clone()]
    }
}
