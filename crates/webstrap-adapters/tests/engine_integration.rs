//! End-to-end tests of the mutation engine: installer + splicer running
//! against the in-memory filesystem and the production anchor matcher.

use std::path::Path;

use webstrap_adapters::{MemoryFilesystem, RegexAnchorMatcher};
use webstrap_core::{
    application::{
        ports::Filesystem,
        services::{EntrySplicer, PluginInstaller},
    },
    domain::{
        AppShowcase, EntryPatch, FileCategory, FileContent, FileSpec, GeneratorKind, IndexSplice,
        Language, LayoutSplice, PackageManager, PageInfo, PluginBundle, ProjectKind, ProjectState,
    },
};

const VITE_MAIN: &str = r#"import React from "react";
import ReactDOM from "react-dom/client";
import App from "./App";

ReactDOM.createRoot(document.getElementById("root")).render(<App />);
"#;

fn seed_vite_project(fs: &MemoryFilesystem) {
    fs.create_dir_all(Path::new("proj/src")).unwrap();
    fs.write_file(Path::new("proj/vite.config.js"), "export default defineConfig({\n  plugins: [react()],\n})\n")
        .unwrap();
    fs.write_file(
        Path::new("proj/package.json"),
        "{\n  \"dependencies\": { \"react\": \"^18.0.0\" },\n  \"scripts\": {}\n}\n",
    )
    .unwrap();
    fs.write_file(Path::new("proj/src/App.jsx"), "const App = () => <div className=\"App\"></div>;\nexport default App;\n")
        .unwrap();
    fs.write_file(Path::new("proj/src/main.jsx"), VITE_MAIN).unwrap();
}

fn react_state(fs: &MemoryFilesystem) -> ProjectState {
    seed_vite_project(fs);
    ProjectState::new(
        PackageManager::Npm,
        "proj",
        Language::JavaScript,
        GeneratorKind::ReactVite,
    )
}

fn provider_patch(tagged: &'static str) -> EntryPatch {
    let (import, before, after, name, element) = match tagged {
        "query" => (
            "import { QueryClientProvider } from \"@tanstack/react-query\";",
            "<QueryClientProvider client={queryClient}>",
            "</QueryClientProvider>",
            "React Query",
            "<ReactQueryExample />",
        ),
        _ => (
            "import { Provider } from \"react-redux\";",
            "<Provider store={store}>",
            "</Provider>",
            "Redux",
            "<ReduxExample />",
        ),
    };
    EntryPatch {
        app: Some(AppShowcase {
            import: "import Example from \"src/components/Example\";",
            name,
            element,
        }),
        index: Some(IndexSplice {
            imports: import,
            before,
            after,
        }),
        ..Default::default()
    }
}

// ── SPA splicing ──────────────────────────────────────────────────────────────

#[test]
fn splices_provider_around_entry_anchor_with_imports_prepended() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    state.add_entry_patch(provider_patch("query"));

    let matcher = RegexAnchorMatcher::new();
    let splicer = EntrySplicer::new(&fs, &matcher, "proj");
    let summary = splicer.apply(&state).unwrap();

    assert_eq!(summary.applied, 1);
    assert!(summary.skipped.is_empty());

    let entry = fs.read_file(Path::new("proj/src/main.jsx")).unwrap();
    assert!(entry.contains(
        "<QueryClientProvider client={queryClient}><App /></QueryClientProvider>"
    ));
    // Imports land at the very top, before the original imports.
    assert!(entry.starts_with("import { QueryClientProvider }"));
    // The root component's own className="App" div was not treated as an
    // anchor: App.jsx is untouched.
    let component = fs.read_file(Path::new("proj/src/App.jsx")).unwrap();
    assert!(component.contains("<div className=\"App\"></div>"));
}

#[test]
fn two_spa_patches_merge_into_one_nested_pass() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    state.add_entry_patch(provider_patch("query"));
    state.add_entry_patch(provider_patch("redux"));

    let matcher = RegexAnchorMatcher::new();
    let splicer = EntrySplicer::new(&fs, &matcher, "proj");
    let summary = splicer.apply(&state).unwrap();
    assert_eq!(summary.applied, 1);

    let entry = fs.read_file(Path::new("proj/src/main.jsx")).unwrap();
    // First-installed wraps outermost; one pass, balanced nesting.
    assert!(entry.contains(
        "<QueryClientProvider client={queryClient}><Provider store={store}>\
         <App /></Provider></QueryClientProvider>"
    ));
    assert_eq!(entry.matches("<QueryClientProvider").count(), 1);
    // Both import blocks are present, newline-joined, in order.
    let query_pos = entry.find("@tanstack/react-query").unwrap();
    let redux_pos = entry.find("react-redux").unwrap();
    assert!(query_pos < redux_pos);
}

#[test]
fn splicer_is_not_idempotent_by_design() {
    // Regression guard: a second pass duplicates wrappers and imports.
    // The single-invocation invariant lives in the wizard, not here, and
    // refactors must not silently change that without moving the
    // invariant.
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    state.add_entry_patch(provider_patch("query"));

    let matcher = RegexAnchorMatcher::new();
    let splicer = EntrySplicer::new(&fs, &matcher, "proj");
    splicer.apply(&state).unwrap();
    splicer.apply(&state).unwrap();

    let entry = fs.read_file(Path::new("proj/src/main.jsx")).unwrap();
    assert_eq!(entry.matches("import { QueryClientProvider }").count(), 2);
    assert_eq!(entry.matches("<QueryClientProvider").count(), 2);
}

#[test]
fn missing_anchor_is_skipped_not_fatal() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    // Entry file whose anchor usage was edited away.
    fs.write_file(Path::new("proj/src/main.jsx"), "console.log(\"no anchor here\");\n")
        .unwrap();
    state.add_entry_patch(provider_patch("query"));

    let matcher = RegexAnchorMatcher::new();
    let splicer = EntrySplicer::new(&fs, &matcher, "proj");
    let summary = splicer.apply(&state).unwrap();

    assert_eq!(summary.applied, 0);
    assert_eq!(summary.skipped.len(), 1);
    // The file is left untouched.
    let entry = fs.read_file(Path::new("proj/src/main.jsx")).unwrap();
    assert_eq!(entry, "console.log(\"no anchor here\");\n");
}

#[test]
fn spa_splice_writes_the_showcase_home_page() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    state.add_entry_patch(provider_patch("query"));

    let matcher = RegexAnchorMatcher::new();
    EntrySplicer::new(&fs, &matcher, "proj")
        .apply(&state)
        .unwrap();

    let home = fs
        .read_file(Path::new("proj/src/components/home/Home.jsx"))
        .unwrap();
    assert!(home.contains("<ReactQueryExample />"));
    assert!(fs
        .read_file(Path::new("proj/src/components/home/Home.module.css"))
        .is_some());
}

// ── Meta-framework splicing ───────────────────────────────────────────────────

const NEXT_LAYOUT: &str = r#"import "./globals.css";

export default function RootLayout({ children }) {
  return (
    <html lang="en">
      <body className={inter.className}>{children}</body>
    </html>
  );
}
"#;

fn next_state(fs: &MemoryFilesystem) -> ProjectState {
    fs.create_dir_all(Path::new("proj/src/app")).unwrap();
    fs.write_file(Path::new("proj/src/app/layout.js"), NEXT_LAYOUT)
        .unwrap();
    let mut state = ProjectState::new(
        PackageManager::Pnpm,
        "proj",
        Language::JavaScript,
        GeneratorKind::Next,
    );
    state.set_project_kind(ProjectKind::Next);
    state
}

fn layout_patch(tag: &'static str, import: &'static str, label: &'static str) -> EntryPatch {
    EntryPatch {
        layout: Some(LayoutSplice {
            anchor: "body",
            imports: import,
            before: match tag {
                "Theme" => "<ThemeRegistry>",
                _ => "<StoreProvider>",
            },
            after: match tag {
                "Theme" => "</ThemeRegistry>",
                _ => "</StoreProvider>",
            },
        }),
        page: Some(PageInfo { route: "/", label }),
        ..Default::default()
    }
}

#[test]
fn two_layout_patches_against_one_anchor_apply_in_exactly_one_pass() {
    let fs = MemoryFilesystem::new();
    let mut state = next_state(&fs);
    state.add_entry_patch(layout_patch(
        "Theme",
        "import ThemeRegistry from \"@/theme/ThemeRegistry\";",
        "Material UI",
    ));
    state.add_entry_patch(layout_patch(
        "Store",
        "import StoreProvider from \"@/providers/StoreProvider\";",
        "RTK Query",
    ));

    let matcher = RegexAnchorMatcher::new();
    let summary = EntrySplicer::new(&fs, &matcher, "proj")
        .apply(&state)
        .unwrap();
    assert_eq!(summary.applied, 1);

    let layout = fs.read_file(Path::new("proj/src/app/layout.js")).unwrap();
    // One pass produced balanced nesting around the whole body span.
    assert!(layout.contains("<ThemeRegistry><StoreProvider><body"));
    assert!(layout.contains("</body></StoreProvider></ThemeRegistry>"));
    assert_eq!(layout.matches("<ThemeRegistry>").count(), 1);
    assert!(layout.starts_with("import ThemeRegistry"));
}

#[test]
fn layout_patches_with_distinct_anchors_each_get_their_own_pass() {
    let fs = MemoryFilesystem::new();
    let mut state = next_state(&fs);
    state.add_entry_patch(layout_patch(
        "Theme",
        "import ThemeRegistry from \"@/theme/ThemeRegistry\";",
        "Material UI",
    ));
    // Imports-only patch on a different framework tag.
    state.add_entry_patch(EntryPatch {
        layout: Some(LayoutSplice {
            anchor: "html",
            imports: "import { i18n } from \"@/i18n-config\";",
            before: "",
            after: "",
        }),
        page: Some(PageInfo {
            route: "/[lang]",
            label: "Internationalization",
        }),
        ..Default::default()
    });

    let matcher = RegexAnchorMatcher::new();
    let summary = EntrySplicer::new(&fs, &matcher, "proj")
        .apply(&state)
        .unwrap();
    assert_eq!(summary.applied, 2);

    let layout = fs.read_file(Path::new("proj/src/app/layout.js")).unwrap();
    assert!(layout.contains("<ThemeRegistry><body"));
    assert!(layout.contains("import { i18n }"));
}

// ── Installer ─────────────────────────────────────────────────────────────────

fn sample_bundle() -> PluginBundle {
    PluginBundle {
        files: vec![
            FileSpec {
                dir: &["src", "client"],
                name: "queryClient",
                category: FileCategory::Module,
                content: FileContent::Literal("export default {};\n"),
            },
            FileSpec {
                dir: &[],
                name: ".env",
                category: FileCategory::Verbatim,
                content: FileContent::Render(|ctx| {
                    format!("TYPED={}\n", ctx.typed)
                }),
            },
        ],
        dependencies: Some(webstrap_core::domain::DependencySpec::Literal("axios")),
        scripts: Some(webstrap_core::domain::ScriptSpec::Literal(&[(
            "test",
            "vitest run",
        )])),
        entry_patch: Some(provider_patch("query")),
        ..PluginBundle::named("sample")
    }
}

#[test]
fn installer_writes_files_with_language_appropriate_extensions() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);

    let installer = PluginInstaller::new(&fs, "proj");
    installer.install(&sample_bundle(), &mut state).unwrap();

    // JS project (no tsconfig.json): module lands as .js.
    assert!(fs.read_file(Path::new("proj/src/client/queryClient.js")).is_some());
    assert_eq!(
        fs.read_file(Path::new("proj/.env")).unwrap(),
        "TYPED=false\n"
    );
}

#[test]
fn installer_detects_typed_mode_from_the_generated_tsconfig() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    fs.write_file(Path::new("proj/tsconfig.json"), "{}").unwrap();

    let installer = PluginInstaller::new(&fs, "proj");
    installer.install(&sample_bundle(), &mut state).unwrap();

    assert!(fs.read_file(Path::new("proj/src/client/queryClient.ts")).is_some());
    assert_eq!(fs.read_file(Path::new("proj/.env")).unwrap(), "TYPED=true\n");
}

#[test]
fn installer_forwards_dependencies_and_patch_to_state() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);

    let installer = PluginInstaller::new(&fs, "proj");
    installer.install(&sample_bundle(), &mut state).unwrap();

    assert_eq!(state.dependency_list(), vec!["axios"]);
    assert_eq!(state.react_patches().len(), 1);
}

#[test]
fn installer_merges_scripts_last_writer_wins() {
    let fs = MemoryFilesystem::new();
    let mut state = react_state(&fs);
    fs.write_file(
        Path::new("proj/package.json"),
        "{\n  \"scripts\": { \"test\": \"jest\", \"build\": \"vite build\" }\n}\n",
    )
    .unwrap();

    let installer = PluginInstaller::new(&fs, "proj");
    installer.install(&sample_bundle(), &mut state).unwrap();

    let manifest: serde_json::Value =
        serde_json::from_str(&fs.read_file(Path::new("proj/package.json")).unwrap()).unwrap();
    assert_eq!(manifest["scripts"]["test"], "vitest run");
    assert_eq!(manifest["scripts"]["build"], "vite build");
}
