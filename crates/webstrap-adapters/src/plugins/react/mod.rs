//! Bundles for the single-page-app flavors (Vite, Create React App).

pub mod state;
pub mod ui;

use webstrap_core::domain::{
    DependencySpec, FileCategory, FileContent, FileSpec, PluginBundle, ScriptSpec,
    TemplateContext,
};

// ── react-router ──────────────────────────────────────────────────────────────

fn router_app(ctx: &TemplateContext) -> String {
    let lazy_type = if ctx.typed { ": React.FC" } else { "" };
    format!(
        r#"import React, {{ Suspense, lazy }} from "react";
import {{ BrowserRouter, Routes, Route }} from "react-router-dom";

const Home = lazy(() => import("src/components/home/Home"));

const App{lazy_type} = () => {{
  return (
    <BrowserRouter>
      <Suspense fallback={{<div>Loading...</div>}}>
        <Routes>
          <Route path="/" element={{<Home />}} />
        </Routes>
      </Suspense>
    </BrowserRouter>
  );
}};

export default App;
"#
    )
}

/// Replaces the generated root component with a router-aware one. The
/// wizard deletes the stale `App.js` boilerplate first so the replacement
/// is the only root component left.
pub fn router() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding React Router, Please wait !"),
        success_message: Some("Successfully added React Router with a lazy home route !"),
        files: vec![FileSpec {
            dir: &["src"],
            name: "App",
            category: FileCategory::Component,
            content: FileContent::Render(router_app),
        }],
        dependencies: Some(DependencySpec::Literal("react-router-dom")),
        ..PluginBundle::named("react-router")
    }
}

// ── i18n ──────────────────────────────────────────────────────────────────────

const I18N_CONFIG: &str = r#"import i18n from "i18next";
import { initReactI18next } from "react-i18next";

import en from "src/i18n/locales/en.json";
import de from "src/i18n/locales/de.json";

i18n.use(initReactI18next).init({
  resources: {
    en: { translation: en },
    de: { translation: de },
  },
  lng: "en",
  fallbackLng: "en",
  interpolation: {
    escapeValue: false,
  },
});

export default i18n;
"#;

const LOCALE_EN: &str = r#"{
  "welcome": "Welcome",
  "description": "This page is translated with i18next."
}
"#;

const LOCALE_DE: &str = r#"{
  "welcome": "Willkommen",
  "description": "Diese Seite wird mit i18next übersetzt."
}
"#;

const I18N_EXAMPLE: &str = r#"import { useTranslation } from "react-i18next";

const I18nExample = () => {
  const { t, i18n } = useTranslation();

  return (
    <div>
      <h3>{t("welcome")}</h3>
      <p>{t("description")}</p>
      <button onClick={() => i18n.changeLanguage("en")}>en</button>
      <button onClick={() => i18n.changeLanguage("de")}>de</button>
    </div>
  );
};

export default I18nExample;
"#;

pub fn i18n() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding i18next, Please wait !"),
        success_message: Some("Successfully added i18next with example locales !"),
        files: vec![
            FileSpec {
                dir: &["src", "i18n"],
                name: "i18n",
                category: FileCategory::Module,
                content: FileContent::Literal(I18N_CONFIG),
            },
            FileSpec {
                dir: &["src", "i18n", "locales"],
                name: "en.json",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(LOCALE_EN),
            },
            FileSpec {
                dir: &["src", "i18n", "locales"],
                name: "de.json",
                category: FileCategory::Verbatim,
                content: FileContent::Literal(LOCALE_DE),
            },
            FileSpec {
                dir: &["src", "components", "i18nExample"],
                name: "I18nExample",
                category: FileCategory::Component,
                content: FileContent::Literal(I18N_EXAMPLE),
            },
        ],
        dependencies: Some(DependencySpec::Literal("i18next react-i18next")),
        entry_patch: Some(webstrap_core::domain::EntryPatch {
            app: Some(webstrap_core::domain::AppShowcase {
                import: "import I18nExample from \"src/components/i18nExample/I18nExample\";",
                name: "Internationalization",
                element: "<I18nExample />",
            }),
            index: Some(webstrap_core::domain::IndexSplice {
                imports: "import \"src/i18n/i18n\";",
                before: "",
                after: "",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("i18n")
    }
}

// ── vitest ────────────────────────────────────────────────────────────────────

const SETUP_TESTS: &str = r#"import "@testing-library/jest-dom";
"#;

const APP_TEST: &str = r#"import { render, screen } from "@testing-library/react";
import App from "src/App";

describe("App", () => {
  it("renders without crashing", () => {
    render(<App />);
    expect(screen.getByText(/loading/i)).toBeInTheDocument();
  });
});
"#;

/// Vitest wiring for the Vite flavor; the wizard also patches the Vite
/// config with the matching `test` block.
pub fn vitest() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Vitest, Please wait !"),
        success_message: Some("Successfully added Vitest with Testing Library !"),
        files: vec![
            FileSpec {
                dir: &[],
                name: "setupTests",
                category: FileCategory::Module,
                content: FileContent::Literal(SETUP_TESTS),
            },
            FileSpec {
                dir: &["src", "__tests__"],
                name: "App.test",
                category: FileCategory::Component,
                content: FileContent::Literal(APP_TEST),
            },
        ],
        dev_dependencies: Some(DependencySpec::Literal(
            "vitest jsdom @testing-library/react @testing-library/jest-dom",
        )),
        scripts: Some(ScriptSpec::Literal(&[
            ("test", "vitest run"),
            ("test:watch", "vitest"),
        ])),
        ..PluginBundle::named("vitest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webstrap_core::domain::GeneratorKind;

    #[test]
    fn router_app_annotates_component_type_only_when_typed() {
        let ts = TemplateContext {
            typed: true,
            generator: GeneratorKind::ReactVite,
        };
        let js = TemplateContext {
            typed: false,
            generator: GeneratorKind::ReactCra,
        };
        assert!(router_app(&ts).contains("const App: React.FC"));
        assert!(router_app(&js).contains("const App = ()"));
    }

    #[test]
    fn i18n_locales_are_valid_json() {
        for locale in [LOCALE_EN, LOCALE_DE] {
            assert!(serde_json::from_str::<serde_json::Value>(locale).is_ok());
        }
    }

    #[test]
    fn i18n_patch_is_imports_only() {
        let patch = i18n().entry_patch.unwrap();
        let index = patch.index.unwrap();
        assert!(index.before.is_empty() && index.after.is_empty());
        assert!(index.imports.contains("src/i18n/i18n"));
    }

    #[test]
    fn vitest_contributes_test_scripts() {
        let ctx = TemplateContext {
            typed: true,
            generator: GeneratorKind::ReactVite,
        };
        let scripts = vitest().scripts.unwrap().resolve(&ctx);
        assert!(scripts.iter().any(|(k, _)| k == "test"));
    }
}
