//! JSON interchange in the Shift AST format.

use crate::node::{Module, Program, Script};

impl Program {
    /// Parse a program root (`"type": "Script"` or `"type": "Module"`).
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub const fn is_module(&self) -> bool {
        matches!(self, Self::Module(_))
    }

    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Script(_) => "Script",
            Self::Module(_) => "Module",
        }
    }
}

impl From<Script> for Program {
    fn from(script: Script) -> Self {
        Self::Script(script)
    }
}

impl From<Module> for Program {
    fn from(module: Module) -> Self {
        Self::Module(module)
    }
}
