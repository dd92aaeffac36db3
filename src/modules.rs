//! Calculator feature modules.
//!
//! The identifiers are stable: they are the prompt choice values and the
//! tokens written into the launch URL fragment.

use std::fmt;
use std::str::FromStr;

use crate::error::{LauncherError, Result};

/// A feature module of the calculator service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Import,
    Ai,
    Layout,
    Baffle,
    VHull,
    Materials,
}

impl Module {
    /// All modules in prompt order.
    pub const ALL: [Module; 6] = [
        Module::Import,
        Module::Ai,
        Module::Layout,
        Module::Baffle,
        Module::VHull,
        Module::Materials,
    ];

    /// URL-safe identifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Ai => "ai",
            Self::Layout => "layout",
            Self::Baffle => "baffle",
            Self::VHull => "vhull",
            Self::Materials => "materials",
        }
    }

    /// Label shown next to the checklist progress bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Import => "Drawing Import Module",
            Self::Ai => "AI Price Core",
            Self::Layout => "Sheet Opt. Engine",
            Self::Baffle => "Fluid Dynamics/Baffles",
            Self::VHull => "V-Hull Geometry Unit",
            Self::Materials => "Global Material Feed",
        }
    }

    /// Label shown in the selection prompt.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Self::Import => "activate Import Drawing",
            Self::Ai => "activate AI Predicted Price",
            Self::Layout => "activate Sheet Layout Optimizer",
            Self::Baffle => "activate Baffle Calculator",
            Self::VHull => "activate V-Hull Helper",
            Self::Materials => "activate Material Costs Page",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Module {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self> {
        Module::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| LauncherError::Selection(format!("unknown module: {}", s)))
    }
}

/// Non-empty, ordered set of selected modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSelection(Vec<Module>);

impl ModuleSelection {
    /// Build a selection, rejecting an empty list and repeated modules.
    pub fn new(modules: Vec<Module>) -> Result<Self> {
        if modules.is_empty() {
            return Err(LauncherError::Selection(
                "You must select at least one module.".to_string(),
            ));
        }
        for (i, m) in modules.iter().enumerate() {
            if modules[..i].contains(m) {
                return Err(LauncherError::Selection(format!("module selected twice: {}", m)));
            }
        }
        Ok(Self(modules))
    }

    /// Parse identifiers such as `["ai", "vhull"]`.
    pub fn parse<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
        let modules = ids
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<Module>>>()?;
        Self::new(modules)
    }

    pub fn modules(&self) -> &[Module] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Module> + '_ {
        self.0.iter().copied()
    }

    /// Identifiers joined with `&`, in selection order.
    pub fn fragment(&self) -> String {
        self.0.iter().map(|m| m.id()).collect::<Vec<_>>().join("&")
    }
}
