//! Namespace tables for Pure Data's C identifiers
//!
//! `zig translate-c` keeps the C spelling of every library type
//! (`t_symbol`, `struct__glist`, ...). The tables below map the bare short
//! name to the canonical name exported by the hand-written Zig modules.
//! They are plain static data, built at compile time and never mutated.

/// A Zig module imported by the generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleImport {
    /// Identifier the module is bound to
    pub alias: &'static str,
    /// File passed to `@import`
    pub file: &'static str,
}

/// Modules imported at the top of the generated file, in emission order
pub const MODULES: &[ModuleImport] = &[
    ModuleImport { alias: "pd", file: "pd.zig" },
    ModuleImport { alias: "imp", file: "imp.zig" },
    ModuleImport { alias: "cnv", file: "canvas.zig" },
    ModuleImport { alias: "iem", file: "all_guis.zig" },
    ModuleImport { alias: "stf", file: "stuff.zig" },
];

/// One group of short-name to canonical-name pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceTable {
    /// Table name, for logs and diagnostics
    pub name: &'static str,
    /// Module the canonical names are re-exported from; `None` for
    /// aliases of built-in types
    pub module: Option<&'static str>,
    /// Entries name function-pointer types
    pub function_pointers: bool,
    pub entries: &'static [(&'static str, &'static str)],
}

impl NamespaceTable {
    pub fn get(&self, short: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == short)
            .map(|(_, canonical)| *canonical)
    }

    /// Distinct canonical names in declaration order
    pub fn canonical_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::with_capacity(self.entries.len());
        for (_, canonical) in self.entries {
            if !names.contains(canonical) {
                names.push(*canonical);
            }
        }
        names
    }
}

pub const GENERIC: NamespaceTable = NamespaceTable {
    name: "generic",
    module: None,
    function_pointers: false,
    entries: &[("atomtype", "c_int"), ("int", "usize")],
};

pub const CANVAS: NamespaceTable = NamespaceTable {
    name: "canvas",
    module: Some("cnv"),
    function_pointers: false,
    entries: &[
        ("array", "Array"),
        ("dataslot", "DataSlot"),
        ("glist", "GList"),
        ("parentwidgetbehavior", "ParentWidgetBehavior"),
        ("template", "Template"),
        ("widgetbehavior", "WidgetBehavior"),
    ],
};

pub const CANVAS_FN: NamespaceTable = NamespaceTable {
    name: "canvas-fn",
    module: Some("cnv"),
    function_pointers: true,
    entries: &[
        ("glistkeyfn", "GListKeyFn"),
        ("glistmotionfn", "GListMotionFn"),
    ],
};

pub const ALL_GUIS: NamespaceTable = NamespaceTable {
    name: "all_guis",
    module: Some("iem"),
    function_pointers: false,
    entries: &[
        ("iem_fstyle_flags", "FontStyleFlags"),
        ("iem_init_symargs", "InitSymArgs"),
        ("iemgui", "Gui"),
        ("iemgui_drawfunctions", "DrawFunctions"),
    ],
};

pub const IMP: NamespaceTable = NamespaceTable {
    name: "imp",
    module: Some("imp"),
    function_pointers: false,
    entries: &[("class", "Class")],
};

pub const PD: NamespaceTable = NamespaceTable {
    name: "pd",
    module: Some("pd"),
    function_pointers: false,
    entries: &[
        ("atom", "Atom"),
        ("binbuf", "BinBuf"),
        ("clock", "Clock"),
        ("float", "Float"),
        ("floatarg", "Float"),
        ("garray", "GArray"),
        ("gobj", "GObj"),
        ("gpointer", "GPointer"),
        ("gstub", "GStub"),
        ("pd", "Pd"),
        ("sample", "Sample"),
        ("symbol", "Symbol"),
        ("text", "Object"),
    ],
};

pub const PD_FN: NamespaceTable = NamespaceTable {
    name: "pd-fn",
    module: Some("pd"),
    function_pointers: true,
    entries: &[
        ("classfreefn", "ClassFreeFn"),
        ("guicallbackfn", "GuiCallbackFn"),
        ("method", "Method"),
        ("newmethod", "NewMethod"),
        ("perfroutine", "PerfRoutine"),
        ("propertiesfn", "PropertiesFn"),
        ("savefn", "SaveFn"),
    ],
};

/// Lookup order; a short name present in several tables resolves to the first
const LOOKUP_ORDER: &[NamespaceTable] = &[GENERIC, CANVAS, ALL_GUIS, IMP, PD, CANVAS_FN, PD_FN];

/// Re-export order of the generated file
const EXPORT_ORDER: &[NamespaceTable] = &[CANVAS, CANVAS_FN, ALL_GUIS, IMP, PD, PD_FN];

/// Result of a successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub canonical: &'static str,
    pub function_pointer: bool,
}

impl Resolution {
    /// Text that replaces the raw marker
    pub fn render(&self) -> String {
        if self.function_pointer {
            format!("*const {}", self.canonical)
        } else {
            self.canonical.to_string()
        }
    }
}

/// The full, ordered set of tables
#[derive(Debug, Clone, Copy)]
pub struct Namespaces {
    lookup_order: &'static [NamespaceTable],
    export_order: &'static [NamespaceTable],
}

impl Namespaces {
    /// Tables for Pure Data's public and internal headers
    pub fn pd() -> Self {
        Self {
            lookup_order: LOOKUP_ORDER,
            export_order: EXPORT_ORDER,
        }
    }

    /// Resolve a short name, consulting the tables in lookup order
    pub fn lookup(&self, short: &str) -> Option<Resolution> {
        self.lookup_order.iter().find_map(|table| {
            table.get(short).map(|canonical| Resolution {
                canonical,
                function_pointer: table.function_pointers,
            })
        })
    }

    /// Tables in lookup order
    pub fn tables(&self) -> &'static [NamespaceTable] {
        self.lookup_order
    }

    /// Tables whose names are re-exported, in emission order
    pub fn exported(&self) -> &'static [NamespaceTable] {
        self.export_order
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self::pd()
    }
}
