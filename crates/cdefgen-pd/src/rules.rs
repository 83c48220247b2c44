//! Pointer-shape rule table
//!
//! C does not say whether `T *` is one object, an array or a string. These
//! rules encode Pure Data's calling conventions instead of guessing:
//!
//! | Input | Shape |
//! |-------|-------|
//! | parameter name ends in a vector suffix | unknown-length array |
//! | element is `u8` | sentinel-terminated |
//! | anything else | single-element pointer |
//! | double pointer to the symbol type | pointer-to-pointer |
//! | any other double pointer | array of pointers |
//!
//! The double-pointer rule is a closed two-way table. It matches the two
//! patterns found in the current headers (symbol out-parameters and vectors
//! of pointers); new patterns get new rows, not a looser rule.

use cdefgen_api::PointerShape;

/// Name- and type-based heuristics for pointer shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerRules {
    /// Parameter-name suffixes denoting argument vectors
    pub vector_suffixes: Vec<String>,
    /// Element type whose pointers are null-terminated strings
    pub byte_element: String,
    /// Canonical interned-string type
    pub symbol_element: String,
}

impl Default for PointerRules {
    fn default() -> Self {
        Self::pd()
    }
}

impl PointerRules {
    /// Pure Data's conventions
    pub fn pd() -> Self {
        Self {
            vector_suffixes: ["argv", "av", "vec"].iter().map(|s| s.to_string()).collect(),
            byte_element: "u8".to_string(),
            symbol_element: "Symbol".to_string(),
        }
    }

    /// Is `name` a vector-like parameter name?
    pub fn is_vector_name(&self, name: &str) -> bool {
        self.vector_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Shape of a single pointer in return position
    pub fn return_shape(&self, element: &str) -> PointerShape {
        if element == self.byte_element {
            PointerShape::SentinelTerminated
        } else {
            PointerShape::Bare
        }
    }

    /// Shape of a single pointer in parameter position
    ///
    /// A vector-like name wins over the string heuristic, so `argv` of
    /// `[*c]u8` is an array, not a string.
    pub fn param_shape(&self, name: Option<&str>, element: &str) -> PointerShape {
        match name {
            Some(name) if self.is_vector_name(name) => PointerShape::UnknownLengthArray,
            _ => self.return_shape(element),
        }
    }

    /// Shape of a double pointer, in either position
    pub fn double_shape(&self, element: &str) -> PointerShape {
        if element == self.symbol_element {
            PointerShape::PointerToPointer
        } else {
            PointerShape::ArrayOfPointers
        }
    }
}
