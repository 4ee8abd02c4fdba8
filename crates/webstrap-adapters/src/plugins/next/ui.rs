//! UI-library bundles for the meta-framework flavor.

use webstrap_core::domain::{
    DependencySpec, EntryPatch, FileCategory, FileContent, FileSpec, LayoutSplice, PageInfo,
    PluginBundle, TemplateContext,
};

// ── Material UI ───────────────────────────────────────────────────────────────

fn theme_registry(ctx: &TemplateContext) -> String {
    let (theme_import, options_decl, children_type) = if ctx.typed {
        (
            "import { createTheme, ThemeOptions, ThemeProvider } from \"@mui/material\";",
            "const themeOptions: ThemeOptions = {",
            "{ children }: { children: React.ReactNode }",
        )
    } else {
        (
            "import { createTheme, ThemeProvider } from \"@mui/material\";",
            "const themeOptions = {",
            "{ children }",
        )
    };

    format!(
        r##""use client";

{theme_import}
import CssBaseline from "@mui/material/CssBaseline";
import {{ AppRouterCacheProvider }} from "@mui/material-nextjs/v14-appRouter";
import React from "react";

{options_decl}
  palette: {{
    background: {{
      default: "#9dc9fd",
    }},
  }},
}};

const theme = createTheme(themeOptions);

export default function ThemeRegistry({children_type}) {{
  return (
    <AppRouterCacheProvider options={{{{ key: "mui" }}}}>
      <ThemeProvider theme={{theme}}>
        <CssBaseline />
        {{children}}
      </ThemeProvider>
    </AppRouterCacheProvider>
  );
}}
"##
    )
}

pub fn mui() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Material UI ! Please Wait !"),
        success_message: Some("Successfully added Material UI with theme config !"),
        files: vec![FileSpec {
            dir: &["src", "theme"],
            name: "ThemeRegistry",
            category: FileCategory::Component,
            content: FileContent::Render(theme_registry),
        }],
        dependencies: Some(DependencySpec::Literal(
            "@mui/material @mui/material-nextjs @emotion/react @emotion/styled @emotion/cache @mui/icons-material",
        )),
        entry_patch: Some(EntryPatch {
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
        }),
        ..PluginBundle::named("mui")
    }
}

// ── Ant Design ────────────────────────────────────────────────────────────────

pub fn ant_design() -> PluginBundle {
    PluginBundle {
        initializing_message: Some("Adding Ant Design ! Please Wait !"),
        success_message: Some("Successfully added Ant Design with the app registry !"),
        files: vec![],
        dependencies: Some(DependencySpec::Literal("antd @ant-design/nextjs-registry")),
        entry_patch: Some(EntryPatch {
            layout: Some(LayoutSplice {
                anchor: "body",
                imports: "import { AntdRegistry } from \"@ant-design/nextjs-registry\";",
                before: "<AntdRegistry>",
                after: "</AntdRegistry>",
            }),
            page: Some(PageInfo {
                route: "/",
                label: "Ant Design",
            }),
            ..Default::default()
        }),
        ..PluginBundle::named("antd")
    }
}
