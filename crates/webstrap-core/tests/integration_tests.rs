//! Domain-level integration tests: the accumulate-route-merge flow the
//! wizard drives, without any adapters.

use webstrap_core::{
    application::report::{ScaffoldReport, StepOutcome},
    domain::{
        AppShowcase, EntryPatch, GeneratorKind, IndexSplice, Language, LayoutSplice, MergedSplice,
        PackageManager, PageInfo, ProjectKind, ProjectState,
    },
};

fn showcase(name: &'static str) -> AppShowcase {
    AppShowcase {
        import: "import X from \"src/components/X\";",
        name,
        element: "<X />",
    }
}

#[test]
fn full_accumulation_flow_for_a_spa_project() {
    let mut state = ProjectState::new(
        PackageManager::Yarn,
        "shop-front",
        Language::TypeScript,
        GeneratorKind::ReactVite,
    );

    // Three features install in order, each contributing dependencies and
    // a patch.
    state.add_dependencies("@tanstack/react-query axios");
    state.add_entry_patch(EntryPatch {
        app: Some(showcase("React Query")),
        index: Some(IndexSplice {
            imports: "import { QueryClientProvider } from \"@tanstack/react-query\";",
            before: "<QueryClientProvider client={queryClient}>",
            after: "</QueryClientProvider>",
        }),
        ..Default::default()
    });

    state.add_dependencies("antd");
    state.add_entry_patch(EntryPatch {
        app: Some(showcase("Ant Design")),
        index: Some(IndexSplice {
            imports: "import { ConfigProvider } from \"antd\";",
            before: "<ConfigProvider>",
            after: "</ConfigProvider>",
        }),
        ..Default::default()
    });

    state.add_dev_dependencies("vitest");

    // Dependency accumulators split-and-filter in insertion order.
    assert_eq!(
        state.dependency_list(),
        vec!["@tanstack/react-query", "axios", "antd"]
    );
    assert_eq!(state.dev_dependency_list(), vec!["vitest"]);

    // Both patches routed to the SPA list; nothing leaked to the other.
    assert_eq!(state.react_patches().len(), 2);
    assert!(state.next_patches().is_empty());

    // The merged splice nests the first-installed feature outermost.
    let merged = MergedSplice::fold(
        state
            .react_patches()
            .iter()
            .map(|e| (e.index.imports, e.index.before, e.index.after)),
    );
    assert_eq!(
        merged.before,
        "<QueryClientProvider client={queryClient}><ConfigProvider>"
    );
    assert_eq!(merged.after, "</ConfigProvider></QueryClientProvider>");
    assert!(merged.imports.ends_with("import { ConfigProvider } from \"antd\";\n"));
}

#[test]
fn meta_framework_patches_keep_their_page_metadata() {
    let mut state = ProjectState::new(
        PackageManager::Npm,
        "dashboard",
        Language::TypeScript,
        GeneratorKind::Next,
    );
    state.set_project_kind(ProjectKind::Next);

    state.add_entry_patch(EntryPatch {
        layout: Some(LayoutSplice {
            anchor: "body",
            imports: "import ThemeRegistry from \"@/theme/ThemeRegistry\";",
            before: "<ThemeRegistry>",
            after: "</ThemeRegistry>",
        }),
        page: Some(PageInfo {
            route: "/",
            label: "Material UI",
        }),
        ..Default::default()
    });

    let patches = state.next_patches();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].page.route, "/");
    assert_eq!(patches[0].page.label, "Material UI");
}

#[test]
fn mixed_shape_patch_lands_in_both_lists() {
    // A patch carrying both complete pairs registers on both sides; the
    // routing checks are independent.
    let mut state = ProjectState::new(
        PackageManager::Npm,
        "hybrid",
        Language::JavaScript,
        GeneratorKind::ReactVite,
    );

    state.add_entry_patch(EntryPatch {
        app: Some(showcase("Feature")),
        index: Some(IndexSplice {
            imports: "",
            before: "<F>",
            after: "</F>",
        }),
        layout: Some(LayoutSplice {
            anchor: "body",
            imports: "",
            before: "<F>",
            after: "</F>",
        }),
        page: Some(PageInfo {
            route: "/",
            label: "Feature",
        }),
    });

    assert_eq!(state.react_patches().len(), 1);
    assert_eq!(state.next_patches().len(), 1);
}

#[test]
fn report_drives_the_final_verdict() {
    let mut report = ScaffoldReport::new();
    report.succeeded("project generator");
    report.skipped("storybook", "not selected");
    assert!(!report.has_failures());

    report.failed("dependency install", "registry unreachable");
    assert!(report.has_failures());

    let failed: Vec<&str> = report
        .steps()
        .iter()
        .filter(|(_, o)| matches!(o, StepOutcome::Failed(_)))
        .map(|(n, _)| n.as_str())
        .collect();
    assert_eq!(failed, vec!["dependency install"]);
}
