//! # cdefgen-pd
//!
//! Generates the Zig declarations of Pure Data's C API from `zig translate-c`
//! output.
//!
//! ## Features
//!
//! - Patch `m_pd.h` constructs the translator cannot handle
//! - Rename library types (`t_symbol`, `struct__glist`, ...) to the canonical
//!   names of the Zig modules
//! - Replace C pointers with Zig pointer shapes: strings become `[*:0]u8`,
//!   argument vectors `[*]T`, symbol out-parameters `**Symbol`
//! - Emit a single file with imports, re-exports and rewritten declarations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cdefgen_pd::{Generator, GeneratorConfig, ZigTranslateC};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = Generator::new(GeneratorConfig::default(), ZigTranslateC::default());
//! let stats = generator.run()?;
//! println!("Rewrote {} functions", stats.functions_rewritten);
//! # Ok(())
//! # }
//! ```
//!
//! ## Rewriting Without the Translator
//!
//! ```rust
//! use cdefgen_pd::{DeclarationRewriter, Namespaces, PointerRules};
//!
//! let namespaces = Namespaces::pd();
//! let rules = PointerRules::pd();
//! let rewriter = DeclarationRewriter::new(&namespaces, &rules);
//!
//! let (lines, _) = rewriter
//!     .rewrite("pub extern fn gensym(s: [*c]const u8) [*c]t_symbol;")
//!     .unwrap();
//! assert_eq!(lines[0], "pub extern fn gensym(s: [*:0]const u8) *Symbol;");
//! ```

pub mod assembler;
pub mod classifier;
pub mod generator;
pub mod normalizer;
pub mod preprocessor;
pub mod renamer;
pub mod rewriter;
pub mod rules;
pub mod scratch;
pub mod tables;
pub mod translator;

// Re-export api types for convenience
pub use cdefgen_api::{
    DeclarationKind, GenError, GenResult, GeneratorConfig, PointerAnnotation, PointerShape,
    RewriteStats, Translator,
};

pub use assembler::OutputAssembler;
pub use classifier::classify;
pub use generator::Generator;
pub use normalizer::{PointerNormalizer, Position};
pub use preprocessor::{patch_header, PatchedHeader};
pub use renamer::IdentifierRenamer;
pub use rewriter::DeclarationRewriter;
pub use rules::PointerRules;
pub use tables::{Namespaces, MODULES};
pub use translator::ZigTranslateC;
