//! cdefgen API
//!
//! Shared types for turning raw `zig translate-c` output into cleaner,
//! binding-ready declarations.
//!
//! This crate is independent of any particular C library. It defines:
//!
//! - **Translator trait**: The boundary to the external C-to-Zig translator
//! - **Declaration IR**: The three declaration shapes the rewriter understands
//! - **Pointer annotations**: Target-specific pointer shapes and their rendering
//! - **Configuration**: Input, scratch and output locations
//! - **Statistics**: Per-run rewrite counters
//! - **Error handling**: The generator's error taxonomy
//!
//! # Example
//!
//! ```rust
//! use cdefgen_api::{GenResult, Translator};
//! use std::path::Path;
//!
//! struct Canned(&'static str);
//!
//! impl Translator for Canned {
//!     fn translate(&self, _header: &Path, _include_dir: &Path) -> GenResult<String> {
//!         Ok(self.0.to_string())
//!     }
//! }
//!
//! let translator = Canned("pub extern fn pd_version() c_int;");
//! let raw = translator.translate(Path::new("m_pd.h"), Path::new("/usr/include")).unwrap();
//! assert!(raw.starts_with("pub extern fn"));
//! ```

pub mod config;
pub mod errors;
pub mod ir;
pub mod metrics;
pub mod pointer;
pub mod traits;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use errors::{GenError, GenResult};
pub use ir::{DeclarationKind, FunctionForm, Parameter};
pub use metrics::{RewriteStats, ShapeCounts};
pub use pointer::{PointerAnnotation, PointerShape};
pub use traits::Translator;

#[cfg(test)]
mod tests;
