//! Sanity checks on the input file before any AmberTools program is run

use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum InputError {
    /// the path has no file name to derive the output names from
    NoFileName(PathBuf),

    /// the file name does not end in .pdb or .PDB
    WrongExtension(PathBuf),

    /// the file has zero length
    Empty(PathBuf),

    /// no ATOM or HETATM records were found
    NotPdb(PathBuf),

    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NoFileName(p) => {
                write!(f, "input path {} does not name a file", p.display())
            }
            InputError::WrongExtension(p) => write!(
                f,
                "input file {} must be a PDB file with a '.pdb' extension",
                p.display()
            ),
            InputError::Empty(p) => {
                write!(f, "input file {} is empty", p.display())
            }
            InputError::NotPdb(p) => write!(
                f,
                "input file {} does not seem to be in PDB format",
                p.display()
            ),
            InputError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub fn has_pdb_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdb"))
}

/// report whether any line of `r` contains an ATOM or HETATM record marker.
/// lines are compared as bytes so stray non-UTF-8 content is not an error
fn has_atom_records(r: impl BufRead) -> std::io::Result<bool> {
    for line in r.split(b'\n') {
        let line = line?;
        if contains(&line, b"ATOM") || contains(&line, b"HETATM") {
            return Ok(true);
        }
    }
    Ok(false)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Check that `path` looks like a usable PDB file: it has a .pdb extension, it
/// is not empty, and it contains at least one ATOM or HETATM record. The
/// extension is checked first so that nothing is read from a file that would
/// be rejected anyway
pub fn validate(path: &Path) -> Result<(), InputError> {
    if !has_pdb_extension(path) {
        return Err(InputError::WrongExtension(path.to_path_buf()));
    }
    let io = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let f = File::open(path).map_err(io)?;
    if f.metadata().map_err(io)?.len() == 0 {
        return Err(InputError::Empty(path.to_path_buf()));
    }
    if !has_atom_records(BufReader::new(f)).map_err(io)? {
        return Err(InputError::NotPdb(path.to_path_buf()));
    }
    Ok(())
}
