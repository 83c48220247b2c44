//! Header patching before translation
//!
//! `zig translate-c` rejects a few constructs in `m_pd.h`. The patches are
//! fixed line substitutions, applied to lines by prefix:
//!
//! 1. The two-bit `te_type` bit-field becomes a plain `unsigned char`
//! 2. `PD_DEPRECATED` markers are blanked
//!
//! The internal headers that the bindings also cover are appended as
//! includes so one translation sees the whole surface.

/// Line prefix of the unsupported bit-field member
pub const BITFIELD_LINE: &str = "    unsigned int te_type:2;";

/// Replacement for the bit-field member
pub const BITFIELD_REPLACEMENT: &str = "    unsigned char te_type;";

/// Line prefix of deprecation markers
pub const DEPRECATION_MARKER: &str = "PD_DEPRECATED";

/// Includes appended to the patched header, in order
pub const EXTRA_INCLUDES: &[&str] = &[
    "#include <pd/m_imp.h>",
    "#include <pd/g_canvas.h>",
    "#include <pd/g_all_guis.h>",
    "#include <pd/s_stuff.h>",
];

/// Result of patching a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedHeader {
    /// Patched header text
    pub text: String,
    /// Bit-field members replaced
    pub bitfields_patched: usize,
    /// Deprecation markers blanked
    pub deprecations_blanked: usize,
}

/// Apply the fixed patches to header source
pub fn patch_header(source: &str) -> PatchedHeader {
    let mut bitfields_patched = 0;
    let mut deprecations_blanked = 0;

    let mut lines: Vec<&str> = source
        .lines()
        .map(|line| {
            if line.starts_with(BITFIELD_LINE) {
                bitfields_patched += 1;
                BITFIELD_REPLACEMENT
            } else if line.starts_with(DEPRECATION_MARKER) {
                deprecations_blanked += 1;
                ""
            } else {
                line
            }
        })
        .collect();
    lines.extend_from_slice(EXTRA_INCLUDES);

    PatchedHeader {
        text: lines.join("\n"),
        bitfields_patched,
        deprecations_blanked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_bitfield() {
        let source = "typedef struct _text\n{\n    unsigned int te_type:2;      /* from defines below */\n} t_text;";
        let patched = patch_header(source);

        assert!(patched.text.contains("    unsigned char te_type;\n"));
        assert!(!patched.text.contains("te_type:2"));
        assert!(!patched.text.contains("from defines below"));
        assert_eq!(patched.bitfields_patched, 1);
    }

    #[test]
    fn test_blank_deprecation() {
        let source = "PD_DEPRECATED EXTERN void sys_lock(void);\nEXTERN void sys_unlock(void);";
        let patched = patch_header(source);

        let lines: Vec<&str> = patched.text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "EXTERN void sys_unlock(void);");
        assert_eq!(patched.deprecations_blanked, 1);
    }

    #[test]
    fn test_prefix_only() {
        let source = "  PD_DEPRECATED void f(void);\nint x; unsigned int te_type:2;";
        let patched = patch_header(source);

        assert!(patched.text.starts_with(source));
        assert_eq!(patched.bitfields_patched, 0);
        assert_eq!(patched.deprecations_blanked, 0);
    }

    #[test]
    fn test_includes_appended() {
        let patched = patch_header("#define PD_MAJOR_VERSION 0\n");
        assert_eq!(
            patched.text,
            "#define PD_MAJOR_VERSION 0\n\
             #include <pd/m_imp.h>\n\
             #include <pd/g_canvas.h>\n\
             #include <pd/g_all_guis.h>\n\
             #include <pd/s_stuff.h>"
        );
    }

    #[test]
    fn test_crlf_lines() {
        let patched = patch_header("PD_DEPRECATED int a;\r\nint b;\r\n");
        assert!(patched.text.starts_with("\nint b;\n#include"));
    }
}
