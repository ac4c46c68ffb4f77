use std::{ffi::OsString, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::args;

use super::{Program, Step, Template};

pub const TEMPLATE: &str = "Minimization of molecule
&cntrl
 imin={{.imin}}, maxcyc={{.maxcyc}}, ncyc={{.ncyc}},
 ntpr={{.ntpr}},
 cut={{.cut}}, igb={{.igb}}, ntb={{.ntb}},
&end
~
";

/// The values written to the `&cntrl` namelist of the sander input file
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cntrl {
    /// 1 to run a minimization, 0 for molecular dynamics
    pub imin: i32,

    /// the maximum number of minimization cycles
    pub maxcyc: usize,

    /// the number of steepest descent cycles to run before switching to
    /// conjugate gradient
    pub ncyc: usize,

    /// print energies every `ntpr` steps
    pub ntpr: usize,

    /// non-bonded cutoff in Å
    pub cut: f64,

    /// generalized Born model. 0 is a constant dielectric
    pub igb: i32,

    /// periodic boundaries. 0 for none
    pub ntb: i32,
}

impl Default for Cntrl {
    fn default() -> Self {
        Self {
            imin: 1,
            maxcyc: 1000,
            ncyc: 500,
            ntpr: 50,
            cut: 999.0,
            igb: 0,
            ntb: 0,
        }
    }
}

/// format `x` as a Fortran real literal, so 999.0 becomes `999.` and 8.5 stays
/// `8.5`
pub(crate) fn fortran_real(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{x:.0}.")
    } else {
        format!("{x}")
    }
}

/// Runs the energy minimization on the tleap topology/coordinate pair
#[derive(Clone, Debug)]
pub struct Sander {
    /// where to write the `&cntrl` input file
    pub infile: PathBuf,
    pub template: Template,
    pub cntrl: Cntrl,
    pub prmtop: PathBuf,
    pub inpcrd: PathBuf,
    pub log: PathBuf,
    pub restart: PathBuf,
}

impl Sander {
    pub fn new(
        infile: impl Into<PathBuf>,
        cntrl: Cntrl,
        prmtop: impl Into<PathBuf>,
        inpcrd: impl Into<PathBuf>,
        log: impl Into<PathBuf>,
        restart: impl Into<PathBuf>,
    ) -> Self {
        Self {
            infile: infile.into(),
            template: Template::from(TEMPLATE),
            cntrl,
            prmtop: prmtop.into(),
            inpcrd: inpcrd.into(),
            log: log.into(),
            restart: restart.into(),
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Every field of [Cntrl] has a directive of the same name, like
    /// `{{.maxcyc}}`. `{{.cut}}` is written as a Fortran real
    pub fn render(&self) -> String {
        let Cntrl {
            imin,
            maxcyc,
            ncyc,
            ntpr,
            cut,
            igb,
            ntb,
        } = self.cntrl;
        self.template.render(&[
            ("imin", imin.to_string()),
            ("maxcyc", maxcyc.to_string()),
            ("ncyc", ncyc.to_string()),
            ("ntpr", ntpr.to_string()),
            ("cut", fortran_real(cut)),
            ("igb", igb.to_string()),
            ("ntb", ntb.to_string()),
        ])
    }
}

impl Program for Sander {
    fn step(&self) -> Step {
        Step::Sander
    }

    fn args(&self) -> Vec<OsString> {
        // the input coordinates double as the restraint reference
        args![
            "-O",
            "-i",
            &self.infile,
            "-o",
            &self.log,
            "-p",
            &self.prmtop,
            "-c",
            &self.inpcrd,
            "-ref",
            &self.inpcrd,
            "-r",
            &self.restart,
        ]
    }

    fn write_input(&self) -> std::io::Result<()> {
        std::fs::write(&self.infile, self.render())
    }

    fn outputs(&self) -> Vec<PathBuf> {
        vec![self.restart.clone()]
    }
}
