use std::{
    io::{BufRead, BufReader},
    process::{Command, Stdio},
};

use super::{Invocation, Outcome, Runner};

/// Runs programs directly on this machine, one at a time
#[derive(Debug, Default)]
pub struct Local {
    /// forward the programs' stdout and stderr instead of discarding them.
    /// stderr is captured either way so it can be reported on failure, and is
    /// relayed line by line as it arrives
    pub verbose: bool,
}

impl Local {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Runner for Local {
    fn run(&self, inv: &Invocation) -> std::io::Result<Outcome> {
        let stdout = if self.verbose {
            Stdio::inherit()
        } else {
            Stdio::null()
        };
        let mut child = Command::new(&inv.program)
            .args(&inv.args)
            .current_dir(&inv.dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .spawn()?;

        // stdout is never piped, so draining stderr before waiting can't block
        let mut stderr = String::new();
        if let Some(pipe) = child.stderr.take() {
            let mut pipe = BufReader::new(pipe);
            let mut line = Vec::new();
            while pipe.read_until(b'\n', &mut line)? > 0 {
                let text = String::from_utf8_lossy(&line);
                if self.verbose {
                    eprint!("{text}");
                }
                stderr.push_str(&text);
                line.clear();
            }
        }
        let status = child.wait()?;
        Ok(Outcome {
            code: status.code(),
            stderr,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::path::PathBuf;

    use crate::args;

    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation {
            program: PathBuf::from("/bin/sh"),
            args: args!["-c", script],
            dir: std::env::temp_dir(),
        }
    }

    #[test]
    fn success() {
        let got = Local::default().run(&sh("echo hello")).unwrap();
        assert!(got.success());
        assert_eq!(got.stderr, "");
    }

    #[test]
    fn failure_captures_stderr() {
        let got = Local::default()
            .run(&sh("echo 'no such residue' >&2; exit 3"))
            .unwrap();
        assert_eq!(got.code, Some(3));
        assert_eq!(got.stderr, "no such residue\n");
    }

    #[test]
    fn verbose_still_captures_stderr() {
        let got = Local::new(true)
            .run(&sh("echo minimizing; echo 'bad atom type' >&2; exit 2"))
            .unwrap();
        assert_eq!(got.code, Some(2));
        assert_eq!(got.stderr, "bad atom type\n");
    }

    #[test]
    fn runs_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut inv = sh("touch mdinfo");
        inv.dir = dir.path().to_path_buf();
        assert!(Local::new(false).run(&inv).unwrap().success());
        assert!(dir.path().join("mdinfo").exists());
    }

    #[test]
    fn missing_binary() {
        let inv = Invocation {
            program: PathBuf::from("/nonexistent/amber/bin/sander"),
            args: Vec::new(),
            dir: std::env::temp_dir(),
        };
        assert!(Local::default().run(&inv).is_err());
    }
}
