//! Configuration settings for running a minimization

use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use ambertools::{
    Template,
    program::{Cntrl, cpptraj, sander, tleap},
};
use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
mod tests;

/// The parameters of a single minimization run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// 1 to minimize, 0 to run dynamics instead
    pub imin: i32,

    /// the maximum number of minimization cycles
    pub maxcyc: usize,

    /// if `ncyc` < `maxcyc`, sander switches from steepest descent to
    /// conjugate gradient after `ncyc` cycles
    pub ncyc: usize,

    /// the interval in steps at which energies are printed
    pub ntpr: usize,

    /// the non-bonded cutoff in Å
    pub cut: f64,

    /// the dielectric model. 0 is a constant dielectric
    pub igb: i32,

    /// 1 for a periodic system, 0 otherwise
    pub ntb: i32,

    /// delete the intermediate files and the work directory after the run
    pub remove_run_files: bool,

    /// appended to the input's base name to form the output file name
    pub suffix: String,
}

impl Default for Params {
    fn default() -> Self {
        let Cntrl {
            imin,
            maxcyc,
            ncyc,
            ntpr,
            cut,
            igb,
            ntb,
        } = Cntrl::default();
        Self {
            imin,
            maxcyc,
            ncyc,
            ntpr,
            cut,
            igb,
            ntb,
            remove_run_files: true,
            suffix: String::from("_min"),
        }
    }
}

impl Params {
    /// the values to write to sander's `&cntrl` namelist
    pub fn cntrl(&self) -> Cntrl {
        Cntrl {
            imin: self.imin,
            maxcyc: self.maxcyc,
            ncyc: self.ncyc,
            ntpr: self.ntpr,
            cut: self.cut,
            igb: self.igb,
            ntb: self.ntb,
        }
    }
}

/// Where and how to run the AmberTools programs
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// the root of the AmberTools installation. programs are run from its
    /// `bin` directory
    pub amberhome: PathBuf,

    /// the directory the programs are run in. antechamber, tleap, and sander
    /// all leave stray files behind in their working directory
    pub scratch_dir: PathBuf,

    /// show the output of the AmberTools programs
    pub verbose: bool,

    /// the leaprc file sourced by tleap
    pub force_field: String,

    pub tleap_template: Template,
    pub sander_template: Template,
    pub cpptraj_template: Template,
}

impl Config {
    pub fn new(amberhome: impl Into<PathBuf>) -> Self {
        Self {
            amberhome: amberhome.into(),
            scratch_dir: PathBuf::from("."),
            verbose: false,
            force_field: tleap::FORCE_FIELD.to_owned(),
            tleap_template: Template::from(tleap::TEMPLATE),
            sander_template: Template::from(sander::TEMPLATE),
            cpptraj_template: Template::from(cpptraj::TEMPLATE),
        }
    }
}

/// Templates can either be literal strings in the config file, or the name of a
/// file to be loaded
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(untagged)]
pub enum TemplateSrc {
    Literal(String),
    File { file: PathBuf },
}

impl TemplateSrc {
    pub fn load(self) -> Result<Template, Error> {
        match self {
            TemplateSrc::Literal(s) => Ok(s.into()),
            TemplateSrc::File { file } => match read_to_string(&file) {
                Ok(s) => Ok(s.into()),
                Err(e) => Err(Error::Config(format!(
                    "failed to load template file {}: {e}",
                    file.display()
                ))),
            },
        }
    }
}

/// The contents of an optional TOML config file. Every field is optional;
/// anything left out falls back to the command line or the built-in defaults
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// The root of the AmberTools installation. Takes precedence over
    /// $AMBERHOME
    pub amberhome: Option<PathBuf>,

    /// The directory to run the programs in. Defaults to the current directory
    pub scratch_dir: Option<PathBuf>,

    /// The leaprc file for tleap to source. Defaults to leaprc.gaff
    pub force_field: Option<String>,

    pub verbose: Option<bool>,

    pub imin: Option<i32>,
    pub maxcyc: Option<usize>,
    pub ncyc: Option<usize>,
    pub ntpr: Option<usize>,
    pub cut: Option<f64>,
    pub igb: Option<i32>,
    pub ntb: Option<i32>,

    pub suffix: Option<String>,
    pub remove_run_files: Option<bool>,

    /// A replacement for the tleap script. Supports the directives
    /// {{.force_field}}, {{.prepin}}, {{.frcmod}}, {{.prmtop}}, and
    /// {{.inpcrd}}
    pub tleap_template: Option<TemplateSrc>,

    /// A replacement for the sander input file. Each &cntrl value has a
    /// directive of the same name, like {{.maxcyc}}
    pub sander_template: Option<TemplateSrc>,

    /// A replacement for the cpptraj script. Supports {{.prmtop}},
    /// {{.restart}}, and {{.pdb}}
    pub cpptraj_template: Option<TemplateSrc>,
}

impl RawConfig {
    pub fn load(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let filename = filename.as_ref();
        let display = filename.display();
        let contents = read_to_string(filename).map_err(|e| {
            Error::Config(format!("failed to read {display}: {e}"))
        })?;
        toml::from_str(&contents).map_err(|e| {
            Error::Config(format!("failed to parse {display}: {e}"))
        })
    }

    /// Build a [Config] rooted at `amberhome`, filling in everything else from
    /// `self`
    pub fn config(self, amberhome: PathBuf) -> Result<Config, Error> {
        let mut config = Config::new(amberhome);
        if let Some(dir) = self.scratch_dir {
            config.scratch_dir = dir;
        }
        if let Some(ff) = self.force_field {
            config.force_field = ff;
        }
        if let Some(v) = self.verbose {
            config.verbose = v;
        }
        if let Some(t) = self.tleap_template {
            config.tleap_template = t.load()?;
        }
        if let Some(t) = self.sander_template {
            config.sander_template = t.load()?;
        }
        if let Some(t) = self.cpptraj_template {
            config.cpptraj_template = t.load()?;
        }
        Ok(config)
    }
}
