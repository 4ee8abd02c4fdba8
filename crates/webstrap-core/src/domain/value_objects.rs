//! Domain value objects: package manager, language, generator and project
//! kinds, and the optional-feature selections.
//!
//! # Design
//!
//! These are pure value types, `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Anything behavioral
//! (command lines, file layouts) lives in the application services.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Handle the variant where the compiler tells you to, every match on
//!    these types is exhaustive, on purpose

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── PackageManager ────────────────────────────────────────────────────────────

/// A supported Node package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// The subcommand that adds packages: `npm install`, `yarn add`,
    /// `pnpm add`.
    pub const fn install_subcommand(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Yarn | Self::Pnpm => "add",
        }
    }

    /// The prefix a user types to run a manifest script.
    pub const fn run_prefix(&self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(DomainError::UnknownChoice(format!(
                "package manager: {other}"
            ))),
        }
    }
}

// ── Language ─────────────────────────────────────────────────────────────────

/// The source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    /// Whether this is the statically typed variant.
    pub const fn is_typed(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Self::JavaScript),
            "ts" | "typescript" => Ok(Self::TypeScript),
            other => Err(DomainError::UnknownChoice(format!("language: {other}"))),
        }
    }
}

// ── GeneratorKind ─────────────────────────────────────────────────────────────

/// Which third-party scaffolding generator produces the base project.
///
/// Two single-page-app flavors (Vite, Create React App) and one
/// meta-framework flavor (Next.js).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    ReactVite,
    ReactCra,
    Next,
}

impl GeneratorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReactVite => "react-vite",
            Self::ReactCra => "react-cra",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react-vite" | "vite" => Ok(Self::ReactVite),
            "react-cra" | "cra" => Ok(Self::ReactCra),
            "next" | "nextjs" => Ok(Self::Next),
            other => Err(DomainError::UnknownChoice(format!("generator: {other}"))),
        }
    }
}

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// The coarse project category, detected post-generation from the
/// manifest's declared packages rather than derived from the generator
/// choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    React,
    Next,
}

impl ProjectKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── UiLibrary ─────────────────────────────────────────────────────────────────

/// Optional UI component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLibrary {
    Mui,
    AntDesign,
    None,
}

impl UiLibrary {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mui => "mui",
            Self::AntDesign => "antd",
            Self::None => "",
        }
    }

    pub const fn is_selected(&self) -> bool {
        !matches!(self, Self::None)
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
            "mui" | "material" | "material-ui" => Ok(Self::Mui),
            "antd" | "ant-design" => Ok(Self::AntDesign),
            "" | "none" => Ok(Self::None),
            other => Err(DomainError::UnknownChoice(format!("ui library: {other}"))),
        }
    }
}

// ── StateSolution ─────────────────────────────────────────────────────────────

/// Optional state-management / data-caching solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateSolution {
    RtkQueryRedux,
    ReactQuery,
    Graphql,
    ReduxThunkAxios,
    None,
}

impl StateSolution {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RtkQueryRedux => "rtk-query-redux",
            Self::ReactQuery => "react-query",
            Self::Graphql => "graphql",
            Self::ReduxThunkAxios => "redux-thunk-axios",
            Self::None => "",
        }
    }

    pub const fn is_selected(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for StateSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateSolution {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rtk-query-redux" | "rtk-query" | "rtk" => Ok(Self::RtkQueryRedux),
            "react-query" => Ok(Self::ReactQuery),
            "graphql" | "apollo" => Ok(Self::Graphql),
            "redux-thunk-axios" | "redux-thunk" => Ok(Self::ReduxThunkAxios),
            "" | "none" => Ok(Self::None),
            other => Err(DomainError::UnknownChoice(format!(
                "state solution: {other}"
            ))),
        }
    }
}

// ── StylingEngine ─────────────────────────────────────────────────────────────

/// Styling engine follow-up choice for Material UI on the SPA generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylingEngine {
    Emotion,
    StyledComponents,
}

impl StylingEngine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Emotion => "emotion",
            Self::StyledComponents => "styled-components",
        }
    }
}

impl fmt::Display for StylingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StylingEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emotion" => Ok(Self::Emotion),
            "styled-components" | "styled" => Ok(Self::StyledComponents),
            other => Err(DomainError::UnknownChoice(format!(
                "styling engine: {other}"
            ))),
        }
    }
}
