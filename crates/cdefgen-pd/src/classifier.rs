//! Declaration classifier
//!
//! Splits a raw line into one of the three declaration shapes the rewriter
//! understands. Recognition is purely structural: a line-prefix pattern
//! picks the shape, then a small scanner finds the parameter list and splits
//! it at top-level commas. Nothing is renamed or rewritten here.

use cdefgen_api::{DeclarationKind, FunctionForm, Parameter};
use regex::Regex;
use std::sync::LazyLock;

// Zig identifiers are either plain words or `@"..."` literals.
static RE_EXTERN_FN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^pub extern fn\s+(?:@"[^"]*"|\w+)\s*\("#).unwrap());
static RE_FN_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^pub const (?:@"[^"]*"|\w+) = \?\*const fn\s*\("#).unwrap()
});
static RE_STRUCT_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^pub const (\w+) = ((?:struct__|union_)\w+)(.*)$").unwrap()
});
static RE_NAMED_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(noalias\s+)?(@"[^"]*"|\w+)\s*:\s*(.+)$"#).unwrap());

/// Classify one line of translator output
pub fn classify(line: &str) -> DeclarationKind {
    if let Some(decl) = classify_function(line) {
        return decl;
    }

    if let Some(caps) = RE_STRUCT_ALIAS.captures(line) {
        return DeclarationKind::StructOrUnionAlias {
            alias_name: caps[1].to_string(),
            inner_name: caps[2].to_string(),
            trailer: caps[3].to_string(),
        };
    }

    DeclarationKind::Unrecognized(line.to_string())
}

fn classify_function(line: &str) -> Option<DeclarationKind> {
    let (form, m) = if let Some(m) = RE_EXTERN_FN.find(line) {
        (FunctionForm::ExternFunction, m)
    } else if let Some(m) = RE_FN_ALIAS.find(line) {
        (FunctionForm::FunctionPointerAlias, m)
    } else {
        return None;
    };

    let open = m.end() - 1;
    let close = find_matching_paren(line, open)?;

    Some(DeclarationKind::FunctionOrFnPtrAlias {
        form,
        head: line[..open].to_string(),
        params: split_params(&line[open + 1..close]),
        ret: line[close + 1..].to_string(),
    })
}

/// Byte offset of the `)` matching the `(` at `open`
pub(crate) fn find_matching_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'"' => {
                // Skip @"..." identifiers
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Split a parameter list at commas outside nested parentheses
fn split_params(list: &str) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes => depth = depth.saturating_sub(1),
            ',' if !in_quotes && depth == 0 => {
                push_param(&mut params, &list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_param(&mut params, &list[start..]);
    params
}

fn push_param(params: &mut Vec<Parameter>, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    let param = match RE_NAMED_PARAM.captures(text) {
        Some(caps) => {
            let param = Parameter::new(&caps[3]).with_name(&caps[2]);
            if caps.get(1).is_some() {
                param.noalias()
            } else {
                param
            }
        }
        None => Parameter::new(text),
    };
    params.push(param);
}

/// Split the text after a parameter list into prefix, return type and suffix
///
/// `" callconv(.c) [*c]u8;"` becomes `(" callconv(.c) ", "[*c]u8", ";")`.
pub(crate) fn split_return(tail: &str) -> (&str, &str, &str) {
    let trimmed = tail.trim_end();
    let without_semi = trimmed.strip_suffix(';').unwrap_or(trimmed);
    let end = without_semi.trim_end().len();

    let mut start = tail.len() - tail.trim_start().len();
    loop {
        let rest = &tail[start..end.max(start)];
        let attr = ["callconv(", "align("]
            .iter()
            .find(|attr| rest.starts_with(**attr));
        let Some(attr) = attr else {
            break;
        };
        let open = start + attr.len() - 1;
        let Some(close) = find_matching_paren(tail, open) else {
            break;
        };
        let after = close + 1;
        start = after + (tail[after..].len() - tail[after..].trim_start().len());
    }

    let start = start.min(end);
    (&tail[..start], &tail[start..end], &tail[end..])
}
