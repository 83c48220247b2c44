//! Pointer-shape normalization
//!
//! Turns the translator's generic pointers into target-specific ones. In
//! parameter position both `[*c]T` and `?*T` are generic; in return
//! position only `[*c]T` is, and an optional return stays optional.
//! Exactly two `[*c]` levels form a double pointer. Every other type
//! (no pointer, three or more levels, an already specific inner pointer)
//! is left as it is.

use crate::rules::PointerRules;
use cdefgen_api::{PointerAnnotation, PointerShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelKind {
    /// `[*c]`
    CPointer,
    /// `?*`
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Level {
    kind: LevelKind,
    is_const: bool,
}

/// A type split into its generic pointer levels and the element behind them
#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceType<'a> {
    levels: Vec<Level>,
    element: &'a str,
}

impl<'a> SourceType<'a> {
    fn parse(ty: &'a str) -> Self {
        let mut rest = ty.trim();
        let mut levels = Vec::new();

        loop {
            let (kind, after) = if let Some(after) = rest.strip_prefix("[*c]") {
                (LevelKind::CPointer, after)
            } else if let Some(after) = rest.strip_prefix("?*") {
                (LevelKind::Optional, after)
            } else {
                break;
            };
            let (is_const, after) = match after.strip_prefix("const ") {
                Some(after) => (true, after.trim_start()),
                None => (false, after),
            };
            levels.push(Level { kind, is_const });
            rest = after;
        }

        Self {
            levels,
            element: rest,
        }
    }

    /// Element is a type name rather than a further pointer level
    fn has_plain_element(&self) -> bool {
        !self.element.is_empty() && !self.element.starts_with(['*', '[', '?'])
    }
}

/// Where a type appears in a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<'a> {
    /// A parameter, with its name when the declaration has one
    Parameter(Option<&'a str>),
    Return,
}

/// Applies [`PointerRules`] to type text
#[derive(Debug, Clone, Copy)]
pub struct PointerNormalizer<'r> {
    rules: &'r PointerRules,
}

impl<'r> PointerNormalizer<'r> {
    pub fn new(rules: &'r PointerRules) -> Self {
        Self { rules }
    }

    /// Decide the annotation for `ty`, or `None` if the type is not a
    /// generic pointer this normalizer handles
    pub fn annotate(&self, ty: &str, position: Position<'_>) -> Option<PointerAnnotation> {
        let source = SourceType::parse(ty);
        if !source.has_plain_element() {
            return None;
        }
        let element = source.element;

        match source.levels.as_slice() {
            [single] => {
                let shape = match (position, single.kind) {
                    (Position::Return, LevelKind::Optional) => PointerShape::Nullable,
                    (Position::Return, LevelKind::CPointer) => self.rules.return_shape(element),
                    (Position::Parameter(name), _) => self.rules.param_shape(name, element),
                };
                Some(PointerAnnotation::new(shape, element).with_const(single.is_const))
            }
            [outer, inner]
                if outer.kind == LevelKind::CPointer && inner.kind == LevelKind::CPointer =>
            {
                Some(
                    PointerAnnotation::new(self.rules.double_shape(element), element)
                        .with_outer_const(outer.is_const)
                        .with_const(inner.is_const),
                )
            }
            _ => None,
        }
    }

    /// Rewrite `ty`, returning the new text and the shape that was chosen
    pub fn normalize(&self, ty: &str, position: Position<'_>) -> (String, Option<PointerShape>) {
        match self.annotate(ty, position) {
            Some(annotation) => (annotation.to_string(), Some(annotation.shape)),
            None => (ty.to_string(), None),
        }
    }
}
