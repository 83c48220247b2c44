//! Declaration rewriting
//!
//! Dispatches each classified line to its rewrite: functions and
//! function-pointer aliases get their parameter and return types renamed and
//! pointer-normalized, struct/union aliases get their inner name renamed, and
//! everything else is passed through untouched. Declared names (a function's
//! name, the alias name of a function-pointer or struct type) are never
//! modified; the assembler re-exports the canonical names separately.

use crate::classifier::{classify, split_return};
use crate::normalizer::{PointerNormalizer, Position};
use crate::renamer::IdentifierRenamer;
use crate::rules::PointerRules;
use crate::tables::Namespaces;
use cdefgen_api::{DeclarationKind, FunctionForm, GenResult, Parameter, RewriteStats};
use log::debug;

pub struct DeclarationRewriter<'a> {
    renamer: IdentifierRenamer<'a>,
    normalizer: PointerNormalizer<'a>,
}

impl<'a> DeclarationRewriter<'a> {
    pub fn new(namespaces: &'a Namespaces, rules: &'a PointerRules) -> Self {
        Self {
            renamer: IdentifierRenamer::new(namespaces),
            normalizer: PointerNormalizer::new(rules),
        }
    }

    /// Rewrite all lines of translator output, preserving their order
    pub fn rewrite(&self, raw: &str) -> GenResult<(Vec<String>, RewriteStats)> {
        let mut stats = RewriteStats::default();
        let mut lines = Vec::new();

        for line in raw.lines() {
            stats.lines_seen += 1;
            lines.push(self.rewrite_line(line, &mut stats)?);
        }

        debug!(
            "Rewrote {} of {} lines ({} markers, {} pointers)",
            stats.recognized(),
            stats.lines_seen,
            stats.markers_resolved,
            stats.shapes.total()
        );
        Ok((lines, stats))
    }

    /// Rewrite one line
    pub fn rewrite_line(&self, line: &str, stats: &mut RewriteStats) -> GenResult<String> {
        let rewritten = match classify(line) {
            DeclarationKind::FunctionOrFnPtrAlias {
                form,
                head,
                params,
                ret,
            } => {
                match form {
                    FunctionForm::ExternFunction => stats.functions_rewritten += 1,
                    FunctionForm::FunctionPointerAlias => stats.fn_aliases_rewritten += 1,
                }
                let params = params
                    .iter()
                    .map(|param| self.rewrite_param(param, stats))
                    .collect::<GenResult<Vec<_>>>()
                    .map_err(|e| e.in_line(line))?;
                let ret = self.rewrite_return(&ret, stats).map_err(|e| e.in_line(line))?;

                DeclarationKind::FunctionOrFnPtrAlias {
                    form,
                    head,
                    params,
                    ret,
                }
            }
            DeclarationKind::StructOrUnionAlias {
                alias_name,
                inner_name,
                trailer,
            } => {
                stats.struct_aliases_rewritten += 1;
                let inner = self.rename(&inner_name, stats).map_err(|e| e.in_line(line))?;

                DeclarationKind::StructOrUnionAlias {
                    alias_name,
                    inner_name: inner,
                    trailer,
                }
            }
            unrecognized @ DeclarationKind::Unrecognized(_) => {
                stats.passthrough_lines += 1;
                unrecognized
            }
        };

        Ok(rewritten.to_string())
    }

    fn rename(&self, span: &str, stats: &mut RewriteStats) -> GenResult<String> {
        let renamed = self.renamer.rename(span)?;
        stats.markers_resolved += renamed.resolved;
        Ok(renamed.text)
    }

    fn rewrite_param(&self, param: &Parameter, stats: &mut RewriteStats) -> GenResult<Parameter> {
        let ty = self.rename(&param.type_text, stats)?;
        let (ty, shape) = self
            .normalizer
            .normalize(&ty, Position::Parameter(param.name.as_deref()));
        if let Some(shape) = shape {
            stats.shapes.record(shape);
        }
        Ok(param.retyped(ty))
    }

    fn rewrite_return(&self, tail: &str, stats: &mut RewriteStats) -> GenResult<String> {
        let tail = self.rename(tail, stats)?;
        let (prefix, ty, suffix) = split_return(&tail);
        let (ty, shape) = self.normalizer.normalize(ty, Position::Return);
        if let Some(shape) = shape {
            stats.shapes.record(shape);
        }
        Ok(format!("{prefix}{ty}{suffix}"))
    }
}
