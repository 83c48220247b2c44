//! Target-side pointer annotations
//!
//! C has a single pointer type; Zig distinguishes single-item, optional,
//! many-item and sentinel-terminated pointers. A [`PointerAnnotation`] is the
//! Zig-side decision for one C pointer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a rewritten pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerShape {
    /// `*T`
    Bare,
    /// `?*T`
    Nullable,
    /// `[*:0]T`, a null-terminated byte sequence
    SentinelTerminated,
    /// `[*]T`
    UnknownLengthArray,
    /// `**T`, an output parameter handing back a pointer
    PointerToPointer,
    /// `*[*]T`
    ArrayOfPointers,
}

impl PointerShape {
    /// Does the shape have two levels of indirection?
    pub fn is_double(&self) -> bool {
        matches!(
            self,
            PointerShape::PointerToPointer | PointerShape::ArrayOfPointers
        )
    }

    fn sigils(&self) -> (&'static str, &'static str) {
        match self {
            PointerShape::Bare => ("*", ""),
            PointerShape::Nullable => ("?*", ""),
            PointerShape::SentinelTerminated => ("[*:0]", ""),
            PointerShape::UnknownLengthArray => ("[*]", ""),
            PointerShape::PointerToPointer => ("*", "*"),
            PointerShape::ArrayOfPointers => ("*", "[*]"),
        }
    }
}

/// A pointer annotation over an element type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerAnnotation {
    pub shape: PointerShape,

    /// `const` on the pointee (the innermost level for double pointers)
    pub is_const: bool,

    /// `const` on the outer level of a double pointer
    pub outer_const: bool,

    /// Element type name, already renamed
    pub element: String,
}

impl PointerAnnotation {
    pub fn new(shape: PointerShape, element: impl Into<String>) -> Self {
        Self {
            shape,
            is_const: false,
            outer_const: false,
            element: element.into(),
        }
    }

    pub fn with_const(mut self, is_const: bool) -> Self {
        self.is_const = is_const;
        self
    }

    pub fn with_outer_const(mut self, outer_const: bool) -> Self {
        self.outer_const = outer_const;
        self
    }
}

impl fmt::Display for PointerAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (outer, inner) = self.shape.sigils();
        if self.shape.is_double() {
            f.write_str(outer)?;
            if self.outer_const {
                f.write_str("const ")?;
            }
            f.write_str(inner)?;
        } else {
            f.write_str(outer)?;
        }
        if self.is_const {
            f.write_str("const ")?;
        }
        f.write_str(&self.element)
    }
}
