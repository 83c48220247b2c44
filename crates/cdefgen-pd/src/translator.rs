//! `zig translate-c` invocation

use cdefgen_api::{GenError, GenResult, Translator};
use log::{debug, info};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Runs `zig translate-c -isystem <include dir> <header>` and returns its
/// standard output
///
/// The executable is found through the process search path. The call
/// blocks until the translator exits; there is no timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZigTranslateC {
    program: String,
}

impl Default for ZigTranslateC {
    fn default() -> Self {
        Self::new("zig")
    }
}

impl ZigTranslateC {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, header: &Path, include_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("translate-c")
            .arg("-isystem")
            .arg(include_dir)
            .arg(header);
        cmd
    }
}

impl Translator for ZigTranslateC {
    fn translate(&self, header: &Path, include_dir: &Path) -> GenResult<String> {
        info!(
            "Translating {} with `{} translate-c`",
            header.display(),
            self.program
        );

        let output = self
            .command(header, include_dir)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GenError::TranslatorMissing(self.program.clone()),
                _ => GenError::TranslatorSpawn(self.program.clone(), e),
            })?;

        if !output.status.success() {
            return Err(GenError::TranslatorFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| GenError::MalformedOutput(format!("translator output is not UTF-8: {e}")))?;
        debug!("Translator produced {} lines", text.lines().count());
        Ok(text)
    }
}
