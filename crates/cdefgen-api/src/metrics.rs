use crate::pointer::PointerShape;
use serde::{Deserialize, Serialize};

/// Number of pointer annotations produced per shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeCounts {
    pub bare: usize,
    pub nullable: usize,
    pub sentinel_terminated: usize,
    pub unknown_length_array: usize,
    pub pointer_to_pointer: usize,
    pub array_of_pointers: usize,
}

impl ShapeCounts {
    pub fn record(&mut self, shape: PointerShape) {
        match shape {
            PointerShape::Bare => self.bare += 1,
            PointerShape::Nullable => self.nullable += 1,
            PointerShape::SentinelTerminated => self.sentinel_terminated += 1,
            PointerShape::UnknownLengthArray => self.unknown_length_array += 1,
            PointerShape::PointerToPointer => self.pointer_to_pointer += 1,
            PointerShape::ArrayOfPointers => self.array_of_pointers += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.bare
            + self.nullable
            + self.sentinel_terminated
            + self.unknown_length_array
            + self.pointer_to_pointer
            + self.array_of_pointers
    }
}

/// Counters collected during one rewrite pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteStats {
    /// Raw lines read from the translator output
    pub lines_seen: usize,

    /// `pub extern fn` declarations rewritten
    pub functions_rewritten: usize,

    /// Function-pointer type aliases rewritten
    pub fn_aliases_rewritten: usize,

    /// Struct/union aliases rewritten
    pub struct_aliases_rewritten: usize,

    /// Lines passed through untouched
    pub passthrough_lines: usize,

    /// Raw markers replaced with canonical names
    pub markers_resolved: usize,

    /// Pointer annotations produced
    pub shapes: ShapeCounts,
}

impl RewriteStats {
    /// Lines that matched one of the recognised declaration shapes
    pub fn recognized(&self) -> usize {
        self.functions_rewritten + self.fn_aliases_rewritten + self.struct_aliases_rewritten
    }
}
