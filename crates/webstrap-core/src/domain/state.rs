//! Project state: the resolved choices plus the pending work accumulated
//! while optional features install.
//!
//! The original tool kept this in a process-wide singleton behind an
//! initialize-before-use runtime contract. Here it is an explicit context
//! object: the wizard constructs it exactly once and passes it by mutable
//! reference to every service that needs it, so "initialized" is enforced
//! by the type system instead of a thrown error.
//!
//! Accumulators are append-only until process exit, there is no deletion
//! path. Dependency strings always gain a trailing separator on append;
//! consumers must split on whitespace and filter empties.

use tracing::debug;

use crate::domain::splice::{EntryPatch, NextPluginEntry, ReactPluginEntry};
use crate::domain::value_objects::{GeneratorKind, Language, PackageManager, ProjectKind};

/// The resolved configuration and accumulated pending work for one run.
#[derive(Debug, Clone)]
pub struct ProjectState {
    package_manager: PackageManager,
    project_name: String,
    language: Language,
    generator: GeneratorKind,
    project_kind: ProjectKind,

    dependencies: String,
    dev_dependencies: String,

    react_patches: Vec<ReactPluginEntry>,
    next_patches: Vec<NextPluginEntry>,
}

impl ProjectState {
    pub fn new(
        package_manager: PackageManager,
        project_name: impl Into<String>,
        language: Language,
        generator: GeneratorKind,
    ) -> Self {
        Self {
            package_manager,
            project_name: project_name.into(),
            language,
            generator,
            // Provisional until the generated manifest is inspected.
            project_kind: ProjectKind::React,
            dependencies: String::new(),
            dev_dependencies: String::new(),
            react_patches: Vec::new(),
            next_patches: Vec::new(),
        }
    }

    // ── Resolved choices ──────────────────────────────────────────────────

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn generator(&self) -> GeneratorKind {
        self.generator
    }

    pub fn project_kind(&self) -> ProjectKind {
        self.project_kind
    }

    /// Record the kind detected from the generated manifest.
    pub fn set_project_kind(&mut self, kind: ProjectKind) {
        self.project_kind = kind;
    }

    // ── Dependency accumulators ───────────────────────────────────────────

    /// Append to the dependency accumulator, always adding a trailing
    /// separator. Redundant whitespace in the result is expected.
    pub fn add_dependencies(&mut self, dependencies: &str) {
        self.dependencies.push_str(dependencies);
        self.dependencies.push(' ');
    }

    pub fn add_dev_dependencies(&mut self, dev_dependencies: &str) {
        self.dev_dependencies.push_str(dev_dependencies);
        self.dev_dependencies.push(' ');
    }

    pub fn dependencies(&self) -> &str {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &str {
        &self.dev_dependencies
    }

    /// Split-and-filter view of the accumulated dependency string.
    pub fn dependency_list(&self) -> Vec<&str> {
        self.dependencies.split_whitespace().collect()
    }

    pub fn dev_dependency_list(&self) -> Vec<&str> {
        self.dev_dependencies.split_whitespace().collect()
    }

    // ── Entry patches ─────────────────────────────────────────────────────

    /// Route an entry patch by its populated parts: `app` + `index` go to
    /// the single-page-app list, `layout` + `page` to the meta-framework
    /// list. A patch matching neither shape is dropped, not rejected -
    /// logged so the permissiveness stays observable.
    pub fn add_entry_patch(&mut self, patch: EntryPatch) {
        let mut routed = false;

        if let (Some(app), Some(index)) = (&patch.app, &patch.index) {
            self.react_patches.push(ReactPluginEntry {
                app: app.clone(),
                index: index.clone(),
            });
            routed = true;
        }

        if let (Some(layout), Some(page)) = (&patch.layout, &patch.page) {
            self.next_patches.push(NextPluginEntry {
                layout: layout.clone(),
                page: page.clone(),
            });
            routed = true;
        }

        if !routed {
            debug!("entry patch matched neither the app/index nor the layout/page shape; dropped");
        }
    }

    pub fn react_patches(&self) -> &[ReactPluginEntry] {
        &self.react_patches
    }

    pub fn next_patches(&self) -> &[NextPluginEntry] {
        &self.next_patches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::splice::{AppShowcase, IndexSplice, LayoutSplice, PageInfo};

    fn state() -> ProjectState {
        ProjectState::new(
            PackageManager::Npm,
            "my-app",
            Language::TypeScript,
            GeneratorKind::ReactVite,
        )
    }

    fn showcase() -> AppShowcase {
        AppShowcase {
            import: "import Example from \"src/components/Example\";",
            name: "Example",
            element: "<Example />",
        }
    }

    fn index_splice() -> IndexSplice {
        IndexSplice {
            imports: "import { Provider } from \"pkg\";",
            before: "<Provider>",
            after: "</Provider>",
        }
    }

    fn layout_splice() -> LayoutSplice {
        LayoutSplice {
            anchor: "body",
            imports: "import Registry from \"@/theme/Registry\";",
            before: "<Registry>",
            after: "</Registry>",
        }
    }

    // ── Dependency accumulation ───────────────────────────────────────────

    #[test]
    fn dependency_accumulation_preserves_order_after_split_and_filter() {
        let mut s = state();
        s.add_dependencies("axios");
        s.add_dependencies("js-cookie");
        assert_eq!(s.dependency_list(), vec!["axios", "js-cookie"]);
    }

    #[test]
    fn accumulated_string_carries_trailing_separators() {
        let mut s = state();
        s.add_dependencies("axios");
        assert_eq!(s.dependencies(), "axios ");
        s.add_dependencies("redux react-redux");
        assert_eq!(s.dependencies(), "axios redux react-redux ");
    }

    #[test]
    fn dev_dependencies_accumulate_independently() {
        let mut s = state();
        s.add_dependencies("axios");
        s.add_dev_dependencies("vitest");
        assert_eq!(s.dependency_list(), vec!["axios"]);
        assert_eq!(s.dev_dependency_list(), vec!["vitest"]);
    }

    #[test]
    fn empty_accumulator_splits_to_nothing() {
        assert!(state().dependency_list().is_empty());
    }

    // ── Patch routing ─────────────────────────────────────────────────────

    #[test]
    fn app_and_index_routes_to_react_list_only() {
        let mut s = state();
        s.add_entry_patch(EntryPatch {
            app: Some(showcase()),
            index: Some(index_splice()),
            ..Default::default()
        });
        assert_eq!(s.react_patches().len(), 1);
        assert!(s.next_patches().is_empty());
    }

    #[test]
    fn layout_and_page_routes_to_next_list_only() {
        let mut s = state();
        s.add_entry_patch(EntryPatch {
            layout: Some(layout_splice()),
            page: Some(PageInfo {
                route: "/",
                label: "Material UI",
            }),
            ..Default::default()
        });
        assert!(s.react_patches().is_empty());
        assert_eq!(s.next_patches().len(), 1);
    }

    #[test]
    fn incomplete_shapes_are_dropped_without_error() {
        let mut s = state();
        // app without index
        s.add_entry_patch(EntryPatch {
            app: Some(showcase()),
            ..Default::default()
        });
        // layout without page
        s.add_entry_patch(EntryPatch {
            layout: Some(layout_splice()),
            ..Default::default()
        });
        // nothing at all
        s.add_entry_patch(EntryPatch::default());
        assert!(s.react_patches().is_empty());
        assert!(s.next_patches().is_empty());
    }

    #[test]
    fn patch_order_is_preserved() {
        let mut s = state();
        for _ in 0..3 {
            s.add_entry_patch(EntryPatch {
                app: Some(showcase()),
                index: Some(index_splice()),
                ..Default::default()
            });
        }
        assert_eq!(s.react_patches().len(), 3);
    }

    #[test]
    fn project_kind_defaults_to_react_until_detected() {
        let mut s = state();
        assert_eq!(s.project_kind(), ProjectKind::React);
        s.set_project_kind(ProjectKind::Next);
        assert_eq!(s.project_kind(), ProjectKind::Next);
    }
}
