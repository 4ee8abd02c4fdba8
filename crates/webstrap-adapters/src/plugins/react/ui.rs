//! UI-library bundles for the single-page-app flavors.
//!
//! The MUI styling-engine follow-up dependencies (emotion vs
//! styled-components, optional icons) are appended by the interview
//! directly; the bundle carries only the unconditional packages.

use webstrap_core::domain::{
    AppShowcase, DependencySpec, EntryPatch, FileCategory, FileContent, FileSpec, IndexSplice,
    PluginBundle, TemplateContext,
};

// ── Material UI ───────────────────────────────────────────────────────────────

fn mui_theme(ctx: &TemplateContext) -> String {
    let options_type = if ctx.typed {
        "import { createTheme, ThemeOptions } from \"@mui/material\";\n\nconst themeOptions: ThemeOptions = {"
    } else {
        "import { createTheme } from \"@mui/material\";\n\nconst themeOptions = {"
    };

    format!(
        r##"{options_type}
  palette: {{
    background: {{
      default: "#9dc9fd",
    }},
  }},
}};

const theme = createTheme(themeOptions);

export default theme;
"##
    )
}

const MUI_EXAMPLE: &str = r#"import Button from "@mui/material/Button";
import Stack from "@mui/material/Stack";

const MuiExample = () => {
  return (
    <Stack direction="row" spacing={2}>
      <Button variant="contained">Contained</Button>
      <Button variant="outlined">Outlined</Button>
    </Stack>
  );
};

export default MuiExample;
"#;

pub fn mui() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Material UI ! Please Wait !"),
        success_message: Some("Successfully added Material UI with theme config !"),
        files: vec![
            FileSpec {
                dir: &["src", "theme"],
                name: "theme",
                category: FileCategory::Module,
                content: FileContent::Render(mui_theme),
            },
            FileSpec {
                dir: &["src", "components", "muiExample"],
                name: "MuiExample",
                category: FileCategory::Component,
                content: FileContent::Literal(MUI_EXAMPLE),
            },
        ],
        dependencies: Some(DependencySpec::Literal("@mui/material")),
        entry_patch: Some(EntryPatch {
            app: Some(AppShowcase {
                import: "import MuiExample from \"src/components/muiExample/MuiExample\";",
                name: "Material UI",
                element: "<MuiExample />",
            }),
            index: Some(IndexSplice {
                imports: "import { ThemeProvider } from \"@mui/material\";\nimport CssBaseline from \"@mui/material/CssBaseline\";\nimport theme from \"src/theme/theme\";",
                before: "<ThemeProvider theme={theme}>\n    <CssBaseline />",
                after: "</ThemeProvider>",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("mui")
    }
}

// ── Ant Design ────────────────────────────────────────────────────────────────

const ANTD_EXAMPLE: &str = r#"import { Button, Space } from "antd";

const AntdExample = () => {
  return (
    <Space>
      <Button type="primary">Primary</Button>
      <Button>Default</Button>
    </Space>
  );
};

export default AntdExample;
"#;

pub fn ant_design() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Ant Design ! Please Wait !"),
        success_message: Some("Successfully added Ant Design with a config provider !"),
        files: vec![FileSpec {
            dir: &["src", "components", "antdExample"],
            name: "AntdExample",
            category: FileCategory::Component,
            content: FileContent::Literal(ANTD_EXAMPLE),
        }],
        dependencies: Some(DependencySpec::Literal("antd")),
        entry_patch: Some(EntryPatch {
            app: Some(AppShowcase {
                import: "import AntdExample from \"src/components/antdExample/AntdExample\";",
                name: "Ant Design",
                element: "<AntdExample />",
            }),
            index: Some(IndexSplice {
                imports: "import { ConfigProvider } from \"antd\";",
                before: "<ConfigProvider>",
                after: "</ConfigProvider>",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("antd")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use webstrap_core::domain::GeneratorKind;

    #[test]
    fn mui_theme_annotates_options_only_when_typed() {
        let ts = TemplateContext {
            typed: true,
            generator: GeneratorKind::ReactVite,
        };
        let js = TemplateContext {
            typed: false,
            generator: GeneratorKind::ReactVite,
        };
        assert!(mui_theme(&ts).contains("ThemeOptions"));
        assert!(!mui_theme(&js).contains("ThemeOptions"));
    }

    #[test]
    fn both_bundles_carry_spa_shaped_patches() {
        for bundle in [mui(), ant_design()] {
            let patch = bundle.entry_patch.unwrap();
            assert!(patch.app.is_some() && patch.index.is_some());
        }
    }
}
