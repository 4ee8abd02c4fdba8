//! README generation for the scaffolded project.
//!
//! The content reflects what was actually installed: tech-stack links for
//! the selections, the package manager's own script prefix, and (for the
//! meta-framework flavor) the feature routes collected from the applied
//! entry patches.

use std::path::Path;

use webstrap_core::{
    application::ports::Filesystem,
    domain::{
        GeneratorKind, Language, ProjectKind, ProjectState, StateSolution, UiLibrary,
    },
    error::WebstrapResult,
};

use crate::wizard::Interview;

/// Assemble and write `README.md` into the project root.
pub fn write_readme(
    fs: &dyn Filesystem,
    interview: &Interview,
    state: &ProjectState,
) -> WebstrapResult<()> {
    let content = render(interview, state);
    fs.write_file(Path::new("README.md"), &content)
}

fn render(interview: &Interview, state: &ProjectState) -> String {
    let mut sections: Vec<String> = Vec::new();

    // ── Heading ───────────────────────────────────────────────────────────
    let framework = match state.project_kind() {
        ProjectKind::Next => "Next Js",
        ProjectKind::React => "React Js",
    };
    sections.push(format!("# {} Boilerplate", framework));
    sections.push(
        "This project was generated with all batteries included; start building \
         without spending time on setup."
            .into(),
    );

    // ── Tech stack ────────────────────────────────────────────────────────
    sections.push("## Tech Stack".into());

    let mut client = vec!["[React](https://react.dev)".to_string()];
    if interview.language == Language::TypeScript {
        client.push("[Typescript](https://www.typescriptlang.org)".into());
    }
    client.push(
        match interview.generator {
            GeneratorKind::Next => "[Next Js](https://nextjs.org/)",
            GeneratorKind::ReactCra => "[Create-React-App](https://create-react-app.dev/)",
            GeneratorKind::ReactVite => "[Vite](https://vitejs.dev/)",
        }
        .into(),
    );
    match interview.state_solution {
        StateSolution::Graphql => {
            client.push("[Apollo Client](https://www.apollographql.com/docs/react/)".into())
        }
        StateSolution::ReactQuery => {
            client.push("[React-Query](https://tanstack.com/query/latest)".into())
        }
        StateSolution::RtkQueryRedux => {
            client.push("[Redux (RTK-Query)](https://redux.js.org/)".into())
        }
        StateSolution::ReduxThunkAxios => client.push("[Redux](https://redux.js.org/)".into()),
        StateSolution::None => {}
    }
    if state.project_kind() == ProjectKind::React {
        client.push("[React Router](https://reactrouter.com/en/main)".into());
    }
    sections.push(format!("**Client:** {}\n", client.join(", ")));

    match interview.ui_library {
        UiLibrary::Mui => {
            sections.push("**Styling:** [Material UI](https://mui.com/material-ui/)\n".into())
        }
        UiLibrary::AntDesign => sections.push("**Styling:** [Antd](https://ant.design/)\n".into()),
        UiLibrary::None => {}
    }

    if matches!(
        interview.state_solution,
        StateSolution::ReactQuery | StateSolution::ReduxThunkAxios
    ) {
        sections.push("**HTTP Client:** [axios](https://axios-http.com/)\n".into());
    }

    if interview.add_i18n {
        sections.push("**Internationalization:** [i18next](https://react.i18next.com/)\n".into());
    }

    let mut formatting = Vec::new();
    if interview.add_prettier {
        formatting.push("[Prettier](https://prettier.io/)");
    }
    if interview.add_husky {
        formatting.push("[Husky](https://typicode.github.io/husky)");
    }
    formatting.push("[Eslint](https://eslint.org/)");
    sections.push(format!("**Code Formatter:** {}\n", formatting.join(", ")));

    // ── Feature routes (meta-framework only) ──────────────────────────────
    if state.project_kind() == ProjectKind::Next && !state.next_patches().is_empty() {
        sections.push("## Included Features".into());
        let mut routes = String::new();
        for entry in state.next_patches() {
            routes.push_str(&format!(
                "- `{}`: {}\n",
                entry.page.route, entry.page.label
            ));
        }
        sections.push(routes.trim_end().to_string());
    }

    // ── Scripts ───────────────────────────────────────────────────────────
    let prefix = interview.package_manager.run_prefix();
    let dev_script = match interview.generator {
        GeneratorKind::ReactCra => "start",
        GeneratorKind::ReactVite | GeneratorKind::Next => "dev",
    };

    sections.push("## Useful Scripts".into());
    let mut scripts = vec![
        format!("- `{prefix} {dev_script}` to run the dev server"),
        format!("- `{prefix} build` to build the project"),
        format!("- `{prefix} lint` / `{prefix} lint:fix` to lint the project"),
    ];
    if interview.add_prettier {
        scripts.push(format!("- `{prefix} format` to format the project"));
    }
    if interview.add_storybook {
        scripts.push(format!(
            "- `{prefix} storybook` to start the storybook dev server"
        ));
    }
    if interview.add_testing && interview.generator == GeneratorKind::ReactVite {
        scripts.push(format!("- `{prefix} test` to run the test suite"));
    }
    sections.push(scripts.join("\n"));

    sections.join("\n\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use webstrap_core::domain::{
        EntryPatch, LayoutSplice, PackageManager, PageInfo, ProjectState, StylingEngine,
    };

    fn interview() -> Interview {
        Interview {
            package_manager: PackageManager::Pnpm,
            language: Language::TypeScript,
            project_name: "my-app".into(),
            generator: GeneratorKind::ReactVite,
            add_prettier: true,
            add_storybook: false,
            add_husky: true,
            state_solution: StateSolution::ReactQuery,
            ui_library: UiLibrary::Mui,
            styling_engine: Some(StylingEngine::Emotion),
            mui_icons: true,
            add_i18n: false,
            add_testing: true,
        }
    }

    fn state() -> ProjectState {
        ProjectState::new(
            PackageManager::Pnpm,
            "my-app",
            Language::TypeScript,
            GeneratorKind::ReactVite,
        )
    }

    #[test]
    fn readme_reflects_the_selections() {
        let content = render(&interview(), &state());
        assert!(content.starts_with("# React Js Boilerplate"));
        assert!(content.contains("React-Query"));
        assert!(content.contains("Material UI"));
        assert!(content.contains("axios"));
        assert!(content.contains("`pnpm dev`"));
        assert!(content.contains("`pnpm test`"));
        assert!(!content.contains("i18next"));
    }

    #[test]
    fn cra_projects_use_the_start_script() {
        let mut i = interview();
        i.generator = GeneratorKind::ReactCra;
        i.package_manager = PackageManager::Npm;
        let content = render(&i, &state());
        assert!(content.contains("`npm run start`"));
    }

    #[test]
    fn next_readme_lists_feature_routes() {
        let mut i = interview();
        i.generator = GeneratorKind::Next;
        let mut s = ProjectState::new(
            PackageManager::Pnpm,
            "my-app",
            Language::TypeScript,
            GeneratorKind::Next,
        );
        s.set_project_kind(ProjectKind::Next);
        s.add_entry_patch(EntryPatch {
            layout: Some(LayoutSplice {
                anchor: "body",
                imports: "",
                before: "<ThemeRegistry>",
                after: "</ThemeRegistry>",
            }),
            page: Some(PageInfo {
                route: "/",
                label: "Material UI",
            }),
            ..Default::default()
        });

        let content = render(&i, &s);
        assert!(content.starts_with("# Next Js Boilerplate"));
        assert!(content.contains("## Included Features"));
        assert!(content.contains("- `/`: Material UI"));
        assert!(!content.contains("React Router"));
    }
}
