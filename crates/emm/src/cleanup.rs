use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{trace, warn};

use crate::Error;

/// extensions of the files antechamber, tleap, and sander leave behind in
/// their working directory
const BYPRODUCT_EXTS: [&str; 3] = [".PDB", ".INF", ".log"];

/// Report whether `name` is one of the stray files left behind by the
/// AmberTools programs: antechamber's ANTECHAMBER_* and ATOMTYPE.INF files,
/// NEWPDB.PDB, leap.log, and sander's mdinfo
pub(crate) fn is_byproduct(name: &str) -> bool {
    name.starts_with("ANTE")
        || BYPRODUCT_EXTS.iter().any(|ext| name.ends_with(ext))
        || name == "mdinfo"
}

fn is_pdb(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdb")
}

fn files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut ret = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?
            .is_file();
        if is_file {
            ret.push(entry.path());
        }
    }
    Ok(ret)
}

/// Delete every file in the work directory `dir` that is not a PDB file
pub(crate) fn work_dir(dir: &Path) -> Result<(), Error> {
    for path in files(dir)? {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if is_pdb(&name) {
            trace!("keeping {}", path.display());
            continue;
        }
        trace!("removing {}", path.display());
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
    }
    Ok(())
}

/// Delete the byproducts in the scratch directory `dir`, skipping `keep`. A
/// file that cannot be removed is only logged since the minimization itself
/// already succeeded
pub(crate) fn scratch(dir: &Path, keep: &Path) -> Result<(), Error> {
    let keep = fs::canonicalize(keep).ok();
    for path in files(dir)? {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if !is_byproduct(&name) {
            continue;
        }
        if keep.is_some() && fs::canonicalize(&path).ok() == keep {
            trace!("keeping input file {}", path.display());
            continue;
        }
        trace!("removing {}", path.display());
        if let Err(e) = fs::remove_file(&path) {
            warn!("failed to remove {}: {e}", path.display());
        }
    }
    Ok(())
}
