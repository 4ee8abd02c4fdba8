//! CLI argument definitions using the clap derive API.
//!
//! Webstrap is interview-driven: there are no subcommands, and the
//! configuration surface is the prompt flow plus the handful of global
//! flags declared here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "webstrap",
    bin_name = "webstrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Interactive React/Next.js project scaffolding",
    long_about = "Webstrap interviews you, runs the ecosystem generator for your \
                  chosen flavor (Vite, Create React App, Next.js), then wires up \
                  the optional features you selected: state management, a UI kit, \
                  i18n, testing, linting, and formatting.",
    after_help = "EXAMPLES:\n\
        \x20 webstrap                 # full interview\n\
        \x20 webstrap my-app          # interview, name prefilled\n\
        \x20 webstrap my-app --yes    # defaults, no prompts",
)]
pub struct Cli {
    /// Project name or path. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Accept the default answer for every prompt (non-interactive).
    #[arg(short = 'y', long = "yes", help = "Accept defaults and skip all prompts")]
    pub yes: bool,

    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── tests ─────────────────────────────────────────────────────────────────────
