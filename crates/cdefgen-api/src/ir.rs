use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two function-shaped declarations a line is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionForm {
    /// `pub extern fn name(...) ret;`
    ExternFunction,
    /// `pub const name = ?*const fn (...) callconv(.c) ret;`
    FunctionPointerAlias,
}

/// One entry of a function parameter list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name; function-pointer types usually leave it out
    pub name: Option<String>,

    /// Zig `noalias` qualifier (emitted for C `restrict`)
    pub noalias: bool,

    /// Type text, including any pointer annotation
    pub type_text: String,
}

impl Parameter {
    pub fn new(type_text: impl Into<String>) -> Self {
        Self {
            name: None,
            noalias: false,
            type_text: type_text.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn noalias(mut self) -> Self {
        self.noalias = true;
        self
    }

    /// Same parameter with a different type
    pub fn retyped(&self, type_text: impl Into<String>) -> Self {
        Self {
            type_text: type_text.into(),
            ..self.clone()
        }
    }

    /// Is this the `...` of a variadic function?
    pub fn is_variadic(&self) -> bool {
        self.name.is_none() && self.type_text == "..."
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.noalias {
            f.write_str("noalias ")?;
        }
        if let Some(ref name) = self.name {
            write!(f, "{name}: ")?;
        }
        f.write_str(&self.type_text)
    }
}

/// Structural classification of one raw declaration line
///
/// Classification only looks at the shape of the line. Rendering a value
/// with `Display` reproduces the line, so a declaration that is classified
/// and rendered without changes comes back as the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    /// Extern function or function-pointer type alias
    FunctionOrFnPtrAlias {
        form: FunctionForm,
        /// Everything before the parameter list's opening parenthesis
        head: String,
        params: Vec<Parameter>,
        /// Everything after the closing parenthesis (calling convention,
        /// return type, terminator)
        ret: String,
    },

    /// `pub const ALIAS = struct__INNER;` (or `union_INNER`)
    StructOrUnionAlias {
        alias_name: String,
        inner_name: String,
        /// Text after the inner name, usually `;`
        trailer: String,
    },

    /// Anything else, kept verbatim
    Unrecognized(String),
}

impl DeclarationKind {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DeclarationKind::Unrecognized(_))
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::FunctionOrFnPtrAlias {
                head, params, ret, ..
            } => {
                write!(f, "{head}(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, "){ret}")
            }
            DeclarationKind::StructOrUnionAlias {
                alias_name,
                inner_name,
                trailer,
            } => write!(f, "pub const {alias_name} = {inner_name}{trailer}"),
            DeclarationKind::Unrecognized(text) => f.write_str(text),
        }
    }
}
