use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the generator reads from and writes to
///
/// The defaults are the fixed locations of a regular build: the system
/// `m_pd.h`, a scratch copy in the working directory and `cdef.zig` as the
/// result. Tests and embedders redirect these into temporary directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// System include directory, also passed to the translator as `-isystem`
    pub include_dir: PathBuf,

    /// Header to translate, relative to `include_dir`
    pub header: PathBuf,

    /// Patched copy of the header handed to the translator
    pub scratch_path: PathBuf,

    /// Generated declarations file
    pub output_path: PathBuf,

    /// Translator executable, resolved through the search path
    pub translator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_dir: PathBuf::from("/usr/include/"),
            header: PathBuf::from("m_pd.h"),
            scratch_path: PathBuf::from("m_pd.h"),
            output_path: PathBuf::from("cdef.zig"),
            translator: "zig".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Full path of the input header
    pub fn header_path(&self) -> PathBuf {
        self.include_dir.join(&self.header)
    }

    pub fn with_include_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.include_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_scratch_path(mut self, path: impl AsRef<Path>) -> Self {
        self.scratch_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_translator(mut self, program: impl Into<String>) -> Self {
        self.translator = program.into();
        self
    }
}
