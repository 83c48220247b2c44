//! Output assembly
//!
//! The generated file is, in order: one `@import` per Zig module, one
//! re-export per canonical name (tables in export order), then the rewritten
//! declarations in input order.

use crate::tables::{ModuleImport, Namespaces};
use cdefgen_api::{GenError, GenResult};
use log::info;
use std::fs;
use std::path::Path;

pub struct OutputAssembler<'a> {
    modules: &'a [ModuleImport],
    namespaces: &'a Namespaces,
}

impl<'a> OutputAssembler<'a> {
    pub fn new(modules: &'a [ModuleImport], namespaces: &'a Namespaces) -> Self {
        Self {
            modules,
            namespaces,
        }
    }

    /// `const <alias> = @import("<file>");` lines
    pub fn prologue(&self) -> Vec<String> {
        self.modules
            .iter()
            .map(|m| format!("const {} = @import(\"{}\");", m.alias, m.file))
            .collect()
    }

    /// `const <Name> = <module>.<Name>;` lines
    ///
    /// A canonical name that several short names map to is exported once
    /// per table.
    pub fn reexports(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for table in self.namespaces.exported() {
            let Some(module) = table.module else {
                continue;
            };
            for name in table.canonical_names() {
                lines.push(format!("const {name} = {module}.{name};"));
            }
        }
        lines
    }

    /// Full file contents
    pub fn assemble(&self, declarations: &[String]) -> String {
        let mut out = String::new();
        for line in self
            .prologue()
            .iter()
            .chain(self.reexports().iter())
            .chain(declarations.iter())
        {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Assemble and write to `path`, replacing any previous contents
    pub fn write(&self, path: &Path, declarations: &[String]) -> GenResult<()> {
        let contents = self.assemble(declarations);
        fs::write(path, &contents).map_err(|e| GenError::OutputWrite(path.to_path_buf(), e))?;
        info!(
            "Wrote {} ({} declarations)",
            path.display(),
            declarations.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::MODULES;

    #[test]
    fn test_prologue() {
        let ns = Namespaces::pd();
        let prologue = OutputAssembler::new(MODULES, &ns).prologue();
        assert_eq!(
            prologue,
            [
                "const pd = @import(\"pd.zig\");",
                "const imp = @import(\"imp.zig\");",
                "const cnv = @import(\"canvas.zig\");",
                "const iem = @import(\"all_guis.zig\");",
                "const stf = @import(\"stuff.zig\");",
            ]
        );
    }

    #[test]
    fn test_reexport_order() {
        let ns = Namespaces::pd();
        let reexports = OutputAssembler::new(MODULES, &ns).reexports();

        assert_eq!(reexports.first().unwrap(), "const Array = cnv.Array;");
        assert_eq!(reexports[6], "const GListKeyFn = cnv.GListKeyFn;");
        assert_eq!(reexports[8], "const FontStyleFlags = iem.FontStyleFlags;");
        assert_eq!(reexports[12], "const Class = imp.Class;");
        assert_eq!(reexports[13], "const Atom = pd.Atom;");
        assert_eq!(reexports.last().unwrap(), "const SaveFn = pd.SaveFn;");
    }

    #[test]
    fn test_reexports_skip_generic_and_duplicates() {
        let ns = Namespaces::pd();
        let reexports = OutputAssembler::new(MODULES, &ns).reexports();

        assert!(!reexports.iter().any(|l| l.contains("c_int") || l.contains("usize")));
        assert_eq!(
            reexports.iter().filter(|l| *l == "const Float = pd.Float;").count(),
            1
        );
        // 6 + 2 + 4 + 1 + 12 + 7
        assert_eq!(reexports.len(), 32);
    }

    #[test]
    fn test_assemble_layout() {
        let ns = Namespaces::pd();
        let assembler = OutputAssembler::new(MODULES, &ns);
        let decls = vec!["pub const a = 1;".to_string(), "pub const b = 2;".to_string()];
        let out = assembler.assemble(&decls);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5 + 32 + 2);
        assert_eq!(lines[0], "const pd = @import(\"pd.zig\");");
        assert_eq!(lines[5], "const Array = cnv.Array;");
        assert_eq!(lines[37], "pub const a = 1;");
        assert_eq!(lines[38], "pub const b = 2;");
        assert!(out.ends_with("pub const b = 2;\n"));
    }
}
