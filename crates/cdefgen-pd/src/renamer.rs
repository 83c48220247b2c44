//! Raw marker renaming
//!
//! The translator spells library types with one of three prefixes:
//! `struct__` (tagged structs), `union_` (tagged unions) and `t_` (typedefs).
//! A marker is such a prefix at the start of an identifier followed by at
//! least one word character. Identifiers that merely contain a prefix
//! (`size_t_max`, `my_struct__x`) are not markers.

use crate::tables::Namespaces;
use cdefgen_api::{GenError, GenResult};
use regex::Regex;
use std::sync::LazyLock;

static RE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:struct__|t_|union_)(\w+)").unwrap());

/// Text after renaming, with the number of markers replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub text: String,
    pub resolved: usize,
}

/// Replaces raw markers with canonical names from the namespace tables
#[derive(Debug, Clone, Copy)]
pub struct IdentifierRenamer<'a> {
    namespaces: &'a Namespaces,
}

impl<'a> IdentifierRenamer<'a> {
    pub fn new(namespaces: &'a Namespaces) -> Self {
        Self { namespaces }
    }

    /// Rename every marker in `span`
    ///
    /// A marker with no table entry is an error; the raw spelling is never
    /// passed through.
    pub fn rename(&self, span: &str) -> GenResult<Renamed> {
        let mut text = String::with_capacity(span.len());
        let mut last = 0;
        let mut resolved = 0;

        for caps in RE_MARKER.captures_iter(span) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let short = &caps[1];
            let resolution =
                self.namespaces
                    .lookup(short)
                    .ok_or_else(|| GenError::UnresolvedIdentifier {
                        marker: whole.as_str().to_string(),
                        line: span.to_string(),
                    })?;

            text.push_str(&span[last..whole.start()]);
            text.push_str(&resolution.render());
            last = whole.end();
            resolved += 1;
        }
        text.push_str(&span[last..]);

        Ok(Renamed { text, resolved })
    }

    /// Does `span` still contain a raw marker?
    pub fn has_markers(span: &str) -> bool {
        RE_MARKER.is_match(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rename(span: &str) -> String {
        let ns = Namespaces::pd();
        IdentifierRenamer::new(&ns).rename(span).unwrap().text
    }

    #[test]
    fn test_rename_all_prefixes() {
        assert_eq!(rename("[*c]struct__pd"), "[*c]Pd");
        assert_eq!(rename("[*c]t_symbol"), "[*c]Symbol");
        assert_eq!(rename("[*c]union_gpointer"), "[*c]GPointer");
    }

    #[test]
    fn test_rename_at_span_start() {
        assert_eq!(rename("t_atomtype"), "c_int");
        assert_eq!(rename("struct__glist"), "GList");
    }

    #[test]
    fn test_function_pointer_marker() {
        assert_eq!(rename("t_newmethod"), "*const NewMethod");
        assert_eq!(rename("fn: t_glistmotionfn"), "fn: *const GListMotionFn");
    }

    #[test]
    fn test_marker_inside_identifier_ignored() {
        assert_eq!(rename("size_t"), "size_t");
        assert_eq!(rename("c_int"), "c_int");
        assert_eq!(rename("my_struct__x"), "my_struct__x");
        assert_eq!(rename("t_"), "t_");
    }

    #[test]
    fn test_dotted_marker() {
        assert_eq!(rename("c.t_float"), "c.Float");
    }

    #[test]
    fn test_multiple_markers_counted() {
        let ns = Namespaces::pd();
        let out = IdentifierRenamer::new(&ns)
            .rename("?*const fn ([*c]t_gobj, [*c]struct__glist, c_int) callconv(.c) void")
            .unwrap();
        assert_eq!(
            out.text,
            "?*const fn ([*c]GObj, [*c]GList, c_int) callconv(.c) void"
        );
        assert_eq!(out.resolved, 2);
    }

    #[test]
    fn test_unresolved_marker_is_error() {
        let ns = Namespaces::pd();
        let err = IdentifierRenamer::new(&ns)
            .rename("[*c]t_outlet")
            .unwrap_err();
        match err {
            GenError::UnresolvedIdentifier { marker, line } => {
                assert_eq!(marker, "t_outlet");
                assert_eq!(line, "[*c]t_outlet");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rename_is_idempotent() {
        let once = rename("[*c]t_binbuf, [*c][*c]struct__symbol, t_method");
        assert!(!IdentifierRenamer::has_markers(&once));
        assert_eq!(rename(&once), once);
    }
}
