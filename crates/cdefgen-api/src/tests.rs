//! Tests for API types and utilities

use crate::*;
use std::path::{Path, PathBuf};

#[test]
fn test_pointer_annotation_rendering() {
    let bare = PointerAnnotation::new(PointerShape::Bare, "Pd");
    assert_eq!(bare.to_string(), "*Pd");

    let nullable = PointerAnnotation::new(PointerShape::Nullable, "anyopaque");
    assert_eq!(nullable.to_string(), "?*anyopaque");

    let string = PointerAnnotation::new(PointerShape::SentinelTerminated, "u8").with_const(true);
    assert_eq!(string.to_string(), "[*:0]const u8");

    let array = PointerAnnotation::new(PointerShape::UnknownLengthArray, "Atom");
    assert_eq!(array.to_string(), "[*]Atom");
}

#[test]
fn test_double_pointer_rendering() {
    let out = PointerAnnotation::new(PointerShape::PointerToPointer, "Symbol");
    assert_eq!(out.to_string(), "**Symbol");

    let vec = PointerAnnotation::new(PointerShape::ArrayOfPointers, "Atom").with_const(true);
    assert_eq!(vec.to_string(), "*[*]const Atom");

    let both = PointerAnnotation::new(PointerShape::ArrayOfPointers, "u8")
        .with_outer_const(true)
        .with_const(true);
    assert_eq!(both.to_string(), "*const [*]const u8");
}

#[test]
fn test_outer_const_ignored_for_single_level() {
    let ann = PointerAnnotation::new(PointerShape::Bare, "Clock").with_outer_const(true);
    assert_eq!(ann.to_string(), "*Clock");
}

#[test]
fn test_parameter_display() {
    assert_eq!(Parameter::new("[*c]u8").to_string(), "[*c]u8");
    assert_eq!(
        Parameter::new("c_int").with_name("argc").to_string(),
        "argc: c_int"
    );
    assert_eq!(
        Parameter::new("?*anyopaque")
            .with_name("__dest")
            .noalias()
            .to_string(),
        "noalias __dest: ?*anyopaque"
    );
    assert!(Parameter::new("...").is_variadic());
    assert!(!Parameter::new("...").with_name("rest").is_variadic());
}

#[test]
fn test_parameter_retyped_keeps_name() {
    let param = Parameter::new("[*c]t_atom").with_name("argv");
    let retyped = param.retyped("[*]Atom");
    assert_eq!(retyped.name.as_deref(), Some("argv"));
    assert_eq!(retyped.to_string(), "argv: [*]Atom");
}

#[test]
fn test_declaration_display_function() {
    let decl = DeclarationKind::FunctionOrFnPtrAlias {
        form: FunctionForm::ExternFunction,
        head: "pub extern fn gensym".to_string(),
        params: vec![Parameter::new("[*:0]const u8").with_name("s")],
        ret: " *Symbol;".to_string(),
    };
    assert_eq!(
        decl.to_string(),
        "pub extern fn gensym(s: [*:0]const u8) *Symbol;"
    );
    assert!(decl.is_recognized());
}

#[test]
fn test_declaration_display_empty_params() {
    let decl = DeclarationKind::FunctionOrFnPtrAlias {
        form: FunctionForm::FunctionPointerAlias,
        head: "pub const t_method = ?*const fn ".to_string(),
        params: Vec::new(),
        ret: " callconv(.c) void;".to_string(),
    };
    assert_eq!(
        decl.to_string(),
        "pub const t_method = ?*const fn () callconv(.c) void;"
    );
}

#[test]
fn test_declaration_display_alias_and_unrecognized() {
    let alias = DeclarationKind::StructOrUnionAlias {
        alias_name: "t_pd".to_string(),
        inner_name: "Pd".to_string(),
        trailer: ";".to_string(),
    };
    assert_eq!(alias.to_string(), "pub const t_pd = Pd;");

    let other = DeclarationKind::Unrecognized("pub const PD_MAJOR_VERSION = 0;".to_string());
    assert_eq!(other.to_string(), "pub const PD_MAJOR_VERSION = 0;");
    assert!(!other.is_recognized());
}

#[test]
fn test_shape_counts() {
    let mut counts = ShapeCounts::default();
    counts.record(PointerShape::Bare);
    counts.record(PointerShape::Bare);
    counts.record(PointerShape::SentinelTerminated);
    counts.record(PointerShape::PointerToPointer);

    assert_eq!(counts.bare, 2);
    assert_eq!(counts.sentinel_terminated, 1);
    assert_eq!(counts.pointer_to_pointer, 1);
    assert_eq!(counts.total(), 4);
}

#[test]
fn test_rewrite_stats_recognized() {
    let mut stats = RewriteStats {
        lines_seen: 15,
        functions_rewritten: 3,
        fn_aliases_rewritten: 1,
        struct_aliases_rewritten: 2,
        passthrough_lines: 9,
        ..Default::default()
    };
    stats.shapes.record(PointerShape::Nullable);

    assert_eq!(stats.recognized(), 6);
    assert_eq!(stats.recognized() + stats.passthrough_lines, stats.lines_seen);
    assert_eq!(stats.shapes.total(), 1);
}

#[test]
fn test_config_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.header_path(), PathBuf::from("/usr/include/m_pd.h"));
    assert_eq!(config.scratch_path, PathBuf::from("m_pd.h"));
    assert_eq!(config.output_path, PathBuf::from("cdef.zig"));
    assert_eq!(config.translator, "zig");
}

#[test]
fn test_config_builder() {
    let config = GeneratorConfig::default()
        .with_include_dir("/opt/pd/include")
        .with_scratch_path("/tmp/work/m_pd.h")
        .with_output_path("/tmp/work/cdef.zig")
        .with_translator("/opt/zig/zig");

    assert_eq!(
        config.header_path(),
        PathBuf::from("/opt/pd/include/m_pd.h")
    );
    assert_eq!(config.translator, "/opt/zig/zig");
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let config: GeneratorConfig =
        serde_json::from_str(r#"{"output_path": "out/cdef.zig"}"#).unwrap();
    assert_eq!(config.output_path, PathBuf::from("out/cdef.zig"));
    assert_eq!(config.include_dir, PathBuf::from("/usr/include/"));
    assert_eq!(config.translator, "zig");
}

#[test]
fn test_error_messages() {
    let err = GenError::TranslatorMissing("zig".to_string());
    assert_eq!(err.to_string(), "Translator `zig` not found");

    let err = GenError::UnresolvedIdentifier {
        marker: "t_word".to_string(),
        line: "[*c]t_word".to_string(),
    };
    let err = err.in_line("pub extern fn f(w: [*c]t_word) void;");
    assert_eq!(
        err.to_string(),
        "Unresolved identifier `t_word` in: pub extern fn f(w: [*c]t_word) void;"
    );
}

#[test]
fn test_in_line_leaves_other_errors_alone() {
    let err = GenError::MalformedOutput("not utf-8".to_string()).in_line("whatever");
    assert!(matches!(err, GenError::MalformedOutput(ref m) if m == "not utf-8"));
}

#[test]
fn test_closure_translator() {
    let stub = |header: &Path, _include: &Path| -> GenResult<String> {
        Ok(format!("// {}", header.display()))
    };
    let out = stub
        .translate(Path::new("m_pd.h"), Path::new("/usr/include"))
        .unwrap();
    assert_eq!(out, "// m_pd.h");
}
