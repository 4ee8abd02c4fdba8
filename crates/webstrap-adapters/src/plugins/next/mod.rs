//! Bundles for the meta-framework flavor (Next.js, app router).
//!
//! Layout splices name the framework-owned tag they wrap (`body`, `html`);
//! the splicer groups same-anchor splices and applies each group in one
//! pass against `src/app/layout.*`.

pub mod state;
pub mod ui;

use webstrap_core::domain::{
    EntryPatch, FileCategory, FileContent, FileSpec, LayoutSplice, PageInfo, PluginBundle,
    TemplateContext,
};

// ── i18n ──────────────────────────────────────────────────────────────────────

fn i18n_config(ctx: &TemplateContext) -> String {
    let locale_type = if ctx.typed {
        "\n\nexport type Locale = (typeof i18n)[\"locales\"][number];"
    } else {
        ""
    };
    format!(
        r#"export const i18n = {{
  defaultLocale: "en",
  locales: ["en", "de"],
}}{const_suffix};{locale_type}
"#,
        const_suffix = if ctx.typed { " as const" } else { "" },
    )
}

fn get_dictionary(ctx: &TemplateContext) -> String {
    let param_type = if ctx.typed {
        "locale: Locale"
    } else {
        "locale"
    };
    let import_type = if ctx.typed {
        "import type { Locale } from \"@/i18n-config\";\n\n"
    } else {
        ""
    };
    format!(
        r#"{import_type}const dictionaries = {{
  en: () => import("@/dictionaries/en.json").then(module => module.default),
  de: () => import("@/dictionaries/de.json").then(module => module.default),
}};

export const getDictionary = async ({param_type}) =>
  dictionaries[locale]?.() ?? dictionaries.en();
"#
    )
}

const DICTIONARY_EN: &str = r#"{
  "welcome": "Welcome",
  "description": "This page is translated per locale segment."
}
"#;

const DICTIONARY_DE: &str = r#"{
  "welcome": "Willkommen",
  "description": "Diese Seite wird pro Locale-Segment übersetzt."
}
"#;

/// i18n for the app router: locale config, dictionaries, and an
/// imports-only layout splice. The wizard follows up by rewriting the
/// layout params and moving the app tree under a `[lang]` segment.
pub fn i18n() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding i18n, Please wait !"),
        success_message: Some("Successfully added locale dictionaries and config !"),
        files: vec![
            FileSpec {
                dir: &["src"],
                name: "i18n-config",
                category: FileCategory::Module,
                content: FileContent::Render(i18n_config),
            },
            FileSpec {
                dir: &["src"],
                name: "get-dictionary",
                category: FileCategory::Module,
                content: FileContent::Render(get_dictionary),
            },
            FileSpec {
                dir: &["src", "dictionaries"],
                name: "en.json",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(DICTIONARY_EN),
            },
            FileSpec {
                dir: &["src", "dictionaries"],
                name: "de.json",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(DICTIONARY_DE),
            },
        ],
        entry_patch: Some(EntryPatch {
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
        }),
        ..PluginBundle::named("i18n")
    }
}
