use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use ambertools::{
    Runner,
    program::{Antechamber, Cpptraj, Parmchk2, Sander, Tleap},
};
use log::{debug, info};

use crate::{Config, Error, InputError, Params, cleanup};


/// The directory holding the intermediate files for a single input, named
/// after the input's base name and placed next to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkDir {
    /// absolute path to the input file
    pub input: PathBuf,

    /// the input file name with its directory and extension stripped
    pub base: String,

    /// the directory containing `input`
    pub parent: PathBuf,

    pub dir: PathBuf,
}

impl WorkDir {
    pub fn new(input: impl AsRef<Path>) -> Result<Self, Error> {
        let input = input.as_ref();
        let input =
            std::path::absolute(input).map_err(|e| Error::io(input, e))?;
        let (Some(stem), Some(parent)) = (input.file_stem(), input.parent())
        else {
            return Err(InputError::NoFileName(input.clone()).into());
        };
        let base = stem.to_string_lossy().into_owned();
        let parent = parent.to_path_buf();
        let dir = parent.join(&base);
        Ok(Self {
            input,
            base,
            parent,
            dir,
        })
    }

    /// `base` + `suffix` inside the work directory
    pub fn file(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(&self.base);
        name.push(suffix);
        self.dir.join(name)
    }

    /// the minimized structure inside the work directory
    pub fn result(&self, params: &Params) -> PathBuf {
        self.file(&format!("{}.pdb", params.suffix))
    }

    /// where the minimized structure ends up
    pub fn output(&self, params: &Params) -> PathBuf {
        self.parent.join(format!("{}{}.pdb", self.base, params.suffix))
    }
}

/// Minimize the structure in `input` using the AmberTools installation
/// described by `config`, returning the path to the minimized PDB file.
///
/// The steps are:
/// 1. antechamber writes the residue parameters (.prepin)
/// 2. parmchk2 writes the missing force field parameters (.frcmod)
/// 3. tleap builds the topology and coordinates (.prmtop, .inpcrd)
/// 4. sander minimizes the structure (_min.log, _min.rst)
/// 5. cpptraj converts the restart file back to a PDB file
///
/// Each program runs to completion before the next one starts, and the first
/// failure stops the pipeline. The input is not validated here; see
/// [crate::input::validate]
pub fn run<R: Runner>(
    input: impl AsRef<Path>,
    params: &Params,
    config: &Config,
    runner: &R,
) -> Result<PathBuf, Error> {
    let work = WorkDir::new(input)?;
    info!("creating work directory {}", work.dir.display());
    fs::create_dir_all(&work.dir).map_err(|e| Error::io(&work.dir, e))?;

    let amberhome = &config.amberhome;
    let scratch = &config.scratch_dir;

    let prepin = work.file(".prepin");
    let frcmod = work.file(".frcmod");
    let prmtop = work.file(".prmtop");
    let inpcrd = work.file(".inpcrd");
    let restart = work.file("_min.rst");
    let result = work.result(params);

    let antechamber = Antechamber::new(&work.input, &prepin);
    runner.execute(&antechamber, amberhome, scratch)?;

    runner.execute(&Parmchk2::new(&prepin, &frcmod), amberhome, scratch)?;

    let tleap = Tleap::new(
        work.dir.join("model_prep"),
        &prepin,
        &frcmod,
        &prmtop,
        &inpcrd,
    )
    .with_template(config.tleap_template.clone())
    .with_force_field(&config.force_field);
    debug!("tleap script:\n{}", tleap.render());
    runner.execute(&tleap, amberhome, scratch)?;

    let sander = Sander::new(
        work.dir.join("min.i"),
        params.cntrl(),
        &prmtop,
        &inpcrd,
        work.file("_min.log"),
        &restart,
    )
    .with_template(config.sander_template.clone());
    debug!("sander input:\n{}", sander.render());
    runner.execute(&sander, amberhome, scratch)?;

    let cpptraj =
        Cpptraj::new(work.dir.join("rst2pdb.ptraj"), &prmtop, &restart, &result)
            .with_template(config.cpptraj_template.clone());
    debug!("cpptraj script:\n{}", cpptraj.render());
    runner.execute(&cpptraj, amberhome, scratch)?;

    if params.remove_run_files {
        info!("removing run files");
        cleanup::work_dir(&work.dir)?;
        cleanup::scratch(scratch, &work.input)?;
    }

    let output = work.output(params);
    info!("moving {} to {}", result.display(), output.display());
    fs::rename(&result, &output).map_err(|e| Error::io(&result, e))?;
    if params.remove_run_files {
        fs::remove_dir(&work.dir).map_err(|e| Error::io(&work.dir, e))?;
    }

    Ok(output)
}
