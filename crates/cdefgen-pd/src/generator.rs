//! End-to-end generation
//!
//! ## Stages
//!
//! 1. **Patch** - Read the header and apply the fixed patches
//! 2. **Translate** - Hand the scratch copy to the external translator
//! 3. **Rewrite** - Classify, rename and pointer-normalize every line
//! 4. **Assemble** - Write imports, re-exports and declarations
//!
//! Stages run strictly in sequence. Any failure aborts the run; the scratch
//! header is removed on every path.

use crate::assembler::OutputAssembler;
use crate::preprocessor::patch_header;
use crate::rewriter::DeclarationRewriter;
use crate::rules::PointerRules;
use crate::scratch::ScratchHeader;
use crate::tables::{Namespaces, MODULES};
use cdefgen_api::{GenError, GeneratorConfig, GenResult, RewriteStats, Translator};
use log::info;
use std::fs;

/// Runs the whole pipeline with an injected translator
pub struct Generator<T: Translator> {
    config: GeneratorConfig,
    translator: T,
    namespaces: Namespaces,
    rules: PointerRules,
}

impl<T: Translator> Generator<T> {
    pub fn new(config: GeneratorConfig, translator: T) -> Self {
        Self {
            config,
            translator,
            namespaces: Namespaces::pd(),
            rules: PointerRules::pd(),
        }
    }

    pub fn with_rules(mut self, rules: PointerRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce raw declarations for the configured header
    ///
    /// The scratch header exists only for the duration of this call.
    pub fn translate(&self) -> GenResult<String> {
        let header_path = self.config.header_path();
        let source =
            fs::read_to_string(&header_path).map_err(|e| GenError::HeaderRead(header_path.clone(), e))?;

        let patched = patch_header(&source);
        info!(
            "Patched {} ({} bit-fields, {} deprecation markers)",
            header_path.display(),
            patched.bitfields_patched,
            patched.deprecations_blanked
        );

        let scratch = ScratchHeader::create(&self.config.scratch_path, &patched.text)?;
        self.translator
            .translate(scratch.path(), &self.config.include_dir)
    }

    /// Rewrite raw translator output into final declaration lines
    pub fn rewrite(&self, raw: &str) -> GenResult<(Vec<String>, RewriteStats)> {
        DeclarationRewriter::new(&self.namespaces, &self.rules).rewrite(raw)
    }

    /// Run every stage and write the output file
    pub fn run(&self) -> GenResult<RewriteStats> {
        let raw = self.translate()?;
        let (lines, stats) = self.rewrite(&raw)?;

        OutputAssembler::new(MODULES, &self.namespaces).write(&self.config.output_path, &lines)?;
        info!(
            "Generated {}: {} functions, {} function-pointer aliases, {} struct aliases, {} passed through",
            self.config.output_path.display(),
            stats.functions_rewritten,
            stats.fn_aliases_rewritten,
            stats.struct_aliases_rewritten,
            stats.passthrough_lines
        );
        Ok(stats)
    }
}
