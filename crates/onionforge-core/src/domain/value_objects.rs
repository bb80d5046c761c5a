//! Codegen selector value objects: UiFramework, DiFramework, UiLibrary.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! The engine carries them through to the downstream code generator without
//! interpreting them; the only rule it enforces is closed-set membership
//! (a blueprint file naming a value outside these sets is structurally
//! invalid). This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── UiFramework ──────────────────────────────────────────────────────────────

/// Target UI framework for the generated presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiFramework {
    React,
    Angular,
    Vue,
}

impl UiFramework {
    pub const ALL: &'static [Self] = &[Self::React, Self::Angular, Self::Vue];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Angular => "angular",
            Self::Vue => "vue",
        }
    }
}

impl Default for UiFramework {
    fn default() -> Self {
        Self::React
    }
}

impl fmt::Display for UiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react" => Ok(Self::React),
            "angular" => Ok(Self::Angular),
            "vue" | "vuejs" => Ok(Self::Vue),
            other => Err(DomainError::UnknownSelector {
                field: "uiFramework",
                value: other.to_string(),
            }),
        }
    }
}

// ── DiFramework ──────────────────────────────────────────────────────────────

/// Dependency-injection container the generated wiring targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiFramework {
    Awilix,
    Inversify,
    Tsyringe,
}

impl DiFramework {
    pub const ALL: &'static [Self] = &[Self::Awilix, Self::Inversify, Self::Tsyringe];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Awilix => "awilix",
            Self::Inversify => "inversify",
            Self::Tsyringe => "tsyringe",
        }
    }
}

impl Default for DiFramework {
    fn default() -> Self {
        Self::Awilix
    }
}

impl fmt::Display for DiFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "awilix" => Ok(Self::Awilix),
            "inversify" => Ok(Self::Inversify),
            "tsyringe" => Ok(Self::Tsyringe),
            other => Err(DomainError::UnknownSelector {
                field: "diFramework",
                value: other.to_string(),
            }),
        }
    }
}

// ── UiLibrary ────────────────────────────────────────────────────────────────

/// Component library used by the generated UI scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiLibrary {
    MaterialUi,
    Bootstrap,
    Tailwind,
}

impl UiLibrary {
    pub const ALL: &'static [Self] = &[Self::MaterialUi, Self::Bootstrap, Self::Tailwind];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MaterialUi => "material-ui",
            Self::Bootstrap => "bootstrap",
            Self::Tailwind => "tailwind",
        }
    }
}

impl Default for UiLibrary {
    fn default() -> Self {
        Self::MaterialUi
    }
}

impl fmt::Display for UiLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiLibrary {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material-ui" | "materialui" | "mui" => Ok(Self::MaterialUi),
            "bootstrap" => Ok(Self::Bootstrap),
            "tailwind" | "tailwindcss" => Ok(Self::Tailwind),
            other => Err(DomainError::UnknownSelector {
                field: "uiLibrary",
                value: other.to_string(),
            }),
        }
    }
}
