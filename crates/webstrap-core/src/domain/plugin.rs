//! Plugin bundles: declarative descriptions of one optional feature.
//!
//! A bundle is data, not logic: the files it writes, the dependencies and
//! manifest scripts it contributes, and the entry patch it wants spliced
//! into the generated entry file. Bundles are created, rendered by the
//! [`PluginInstaller`](crate::application::services::PluginInstaller), and
//! discarded, they never outlive the single installation that consumes
//! them.

use crate::domain::splice::EntryPatch;
use crate::domain::value_objects::GeneratorKind;

/// Ambient rendering context handed to content functions.
///
/// `typed` is derived from the *generated* project (presence of a
/// `tsconfig.json`), not from the remembered language choice, the
/// generator's output is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateContext {
    pub typed: bool,
    pub generator: GeneratorKind,
}

/// How a file's on-disk name is derived from its base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    /// Renders as a component: `.tsx` under TypeScript, `.jsx` otherwise.
    Component,
    /// Renders as a plain module: `.ts` under TypeScript, `.js` otherwise.
    Module,
    /// Opaque text: the base name is used verbatim (`.json`, `.css`,
    /// `.gitignore`-style names pass through unmodified).
    Verbatim,
}

impl FileCategory {
    /// Extension for this category, or `None` for verbatim names.
    ///
    /// The mapping is total and deterministic across (typed, category).
    pub const fn extension(&self, typed: bool) -> Option<&'static str> {
        match self {
            Self::Component => Some(if typed { "tsx" } else { "jsx" }),
            Self::Module => Some(if typed { "ts" } else { "js" }),
            Self::Verbatim => None,
        }
    }
}

/// File content: a literal string or a function of the ambient context.
#[derive(Debug, Clone, Copy)]
pub enum FileContent {
    Literal(&'static str),
    Render(fn(&TemplateContext) -> String),
}

impl FileContent {
    pub fn resolve(&self, ctx: &TemplateContext) -> String {
        match self {
            Self::Literal(text) => (*text).to_string(),
            Self::Render(f) => f(ctx),
        }
    }
}

/// One file a bundle writes: relative directory segments under the project
/// root, a base name, a category, and content.
#[derive(Debug, Clone)]
pub struct FileSpec {
    pub dir: &'static [&'static str],
    pub name: &'static str,
    pub category: FileCategory,
    pub content: FileContent,
}

impl FileSpec {
    /// Resolve the on-disk file name for the given language mode.
    pub fn file_name(&self, typed: bool) -> String {
        match self.category.extension(typed) {
            Some(ext) => format!("{}.{}", self.name, ext),
            None => self.name.to_string(),
        }
    }
}

/// Dependency list: a literal space-separated string or a function of the
/// ambient context.
#[derive(Debug, Clone, Copy)]
pub enum DependencySpec {
    Literal(&'static str),
    Render(fn(&TemplateContext) -> String),
}

impl DependencySpec {
    pub fn resolve(&self, ctx: &TemplateContext) -> String {
        match self {
            Self::Literal(text) => (*text).to_string(),
            Self::Render(f) => f(ctx),
        }
    }
}

/// Manifest scripts contributed by a bundle.
#[derive(Debug, Clone, Copy)]
pub enum ScriptSpec {
    Literal(&'static [(&'static str, &'static str)]),
    Render(fn(&TemplateContext) -> Vec<(String, String)>),
}

impl ScriptSpec {
    pub fn resolve(&self, ctx: &TemplateContext) -> Vec<(String, String)> {
        match self {
            Self::Literal(pairs) => pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            Self::Render(f) => f(ctx),
        }
    }
}

/// A declarative description of one optional feature.
#[derive(Debug, Clone)]
pub struct PluginBundle {
    pub name: &'static str,
    pub initializing_message: Option<&'static str>,
    pub success_message: Option<&'static str>,
    pub files: Vec<FileSpec>,
    pub dependencies: Option<DependencySpec>,
    pub dev_dependencies: Option<DependencySpec>,
    pub scripts: Option<ScriptSpec>,
    pub entry_patch: Option<EntryPatch>,
}

impl PluginBundle {
    /// An empty bundle with the given name; builders in the catalog fill
    /// in the rest with struct update syntax.
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            initializing_message: None,
            success_message: None,
            files: Vec::new(),
            dependencies: None,
            dev_dependencies: None,
            scripts: None,
            entry_patch: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_mapping_is_total_and_deterministic() {
        assert_eq!(FileCategory::Component.extension(true), Some("tsx"));
        assert_eq!(FileCategory::Component.extension(false), Some("jsx"));
        assert_eq!(FileCategory::Module.extension(true), Some("ts"));
        assert_eq!(FileCategory::Module.extension(false), Some("js"));
        assert_eq!(FileCategory::Verbatim.extension(true), None);
        assert_eq!(FileCategory::Verbatim.extension(false), None);
    }

    #[test]
    fn file_name_appends_extension_for_components_and_modules() {
        let spec = FileSpec {
            dir: &["src", "client"],
            name: "queryClient",
            category: FileCategory::Module,
            content: FileContent::Literal(""),
        };
        assert_eq!(spec.file_name(true), "queryClient.ts");
        assert_eq!(spec.file_name(false), "queryClient.js");
    }

    #[test]
    fn verbatim_names_pass_through_unmodified() {
        for name in [".env", ".gitignore", "Home.module.css", "config.json"] {
            let spec = FileSpec {
                dir: &[],
                name,
                category: FileCategory::Verbatim,
                content: FileContent::Literal(""),
            };
            assert_eq!(spec.file_name(true), name);
            assert_eq!(spec.file_name(false), name);
        }
    }

    #[test]
    fn render_content_receives_context() {
        let content = FileContent::Render(|ctx| {
            format!("typed={} generator={}", ctx.typed, ctx.generator)
        });
        let ctx = TemplateContext {
            typed: true,
            generator: GeneratorKind::ReactVite,
        };
        assert_eq!(content.resolve(&ctx), "typed=true generator=react-vite");
    }

    #[test]
    fn script_spec_literal_resolves_to_owned_pairs() {
        let spec = ScriptSpec::Literal(&[("test", "vitest run"), ("test:watch", "vitest")]);
        let ctx = TemplateContext {
            typed: false,
            generator: GeneratorKind::ReactCra,
        };
        let resolved = spec.resolve(&ctx);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0], ("test".to_string(), "vitest run".to_string()));
    }
}
