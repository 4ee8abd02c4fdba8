//! The dialoguer-based interview.
//!
//! Gathers every choice the pipeline needs up front, so the wizard runs
//! without further interaction once generation starts.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use webstrap_core::domain::{
    GeneratorKind, Language, PackageManager, StateSolution, StylingEngine, UiLibrary,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    wizard::{Interview, validate_project_name},
};

fn prompt_err(e: dialoguer::Error) -> CliError {
    CliError::PromptError {
        message: e.to_string(),
    }
}

/// Run the full interview. `cli.name`, when present, pre-fills the
/// project-name question; config defaults pre-select list items.
pub fn run_interview(cli: &Cli, config: &AppConfig) -> CliResult<Interview> {
    let theme = ColorfulTheme::default();

    let package_manager = select_package_manager(&theme, config)?;
    let language = select_language(&theme, config)?;
    let project_name = input_project_name(&theme, cli.name.as_deref())?;
    let generator = select_generator(&theme, config)?;

    let add_prettier = confirm(&theme, "Do you want to add Prettier to the project?", true)?;
    let add_storybook = confirm(&theme, "Do you want to add Storybook to the project?", false)?;
    let add_husky = confirm(&theme, "Do you want to add Husky to the project?", true)?;

    let state_solution = select_state_solution(&theme)?;
    let ui_library = select_ui_library(&theme)?;

    // MUI on the SPA generators gets the styling-engine follow-ups.
    let (styling_engine, mui_icons) =
        if ui_library == UiLibrary::Mui && generator != GeneratorKind::Next {
            let engine = select_styling_engine(&theme)?;
            let icons = confirm(&theme, "Do you want to install Material Icons?", true)?;
            (Some(engine), icons)
        } else {
            (None, false)
        };

    let add_i18n = confirm(&theme, "Do you want to add i18n to the project?", false)?;
    let add_testing = confirm(&theme, "Do you want to add testing to the project?", true)?;

    Ok(Interview {
        package_manager,
        language,
        project_name,
        generator,
        add_prettier,
        add_storybook,
        add_husky,
        state_solution,
        ui_library,
        styling_engine,
        mui_icons,
        add_i18n,
        add_testing,
    })
}

// ── Individual prompts ────────────────────────────────────────────────────────

fn select_package_manager(
    theme: &ColorfulTheme,
    config: &AppConfig,
) -> CliResult<PackageManager> {
    let choices = [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];
    let default = config
        .defaults
        .package_manager
        .as_deref()
        .and_then(|s| s.parse::<PackageManager>().ok())
        .and_then(|m| choices.iter().position(|c| *c == m))
        .unwrap_or(0);

    let idx = Select::with_theme(theme)
        .with_prompt("Which package manager are you using?")
        .items(&["npm", "yarn", "pnpm"])
        .default(default)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices[idx])
}

fn select_language(theme: &ColorfulTheme, config: &AppConfig) -> CliResult<Language> {
    let choices = [Language::TypeScript, Language::JavaScript];
    let default = config
        .defaults
        .language
        .as_deref()
        .and_then(|s| s.parse::<Language>().ok())
        .and_then(|l| choices.iter().position(|c| *c == l))
        .unwrap_or(0);

    let idx = Select::with_theme(theme)
        .with_prompt("Select project language")
        .items(&["Typescript (Recommended)", "Javascript"])
        .default(default)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices[idx])
}

fn input_project_name(theme: &ColorfulTheme, prefill: Option<&str>) -> CliResult<String> {
    // A valid name passed on the command line skips the question.
    if let Some(name) = prefill {
        return match validate_project_name(name) {
            Ok(()) => Ok(name.to_string()),
            Err(reason) => Err(CliError::InvalidProjectName {
                name: name.to_string(),
                reason,
            }),
        };
    }

    Input::with_theme(theme)
        .with_prompt("Enter the project name")
        .validate_with(|input: &String| validate_project_name(input))
        .interact_text()
        .map_err(prompt_err)
}

fn select_generator(theme: &ColorfulTheme, config: &AppConfig) -> CliResult<GeneratorKind> {
    let choices = [
        GeneratorKind::ReactVite,
        GeneratorKind::Next,
        GeneratorKind::ReactCra,
    ];
    let default = config
        .defaults
        .generator
        .as_deref()
        .and_then(|s| s.parse::<GeneratorKind>().ok())
        .and_then(|g| choices.iter().position(|c| *c == g))
        .unwrap_or(0);

    let idx = Select::with_theme(theme)
        .with_prompt("Select the Generator")
        .items(&[
            "React + Vite (Recommended)",
            "Next Js",
            "React + Webpack (CRA)",
        ])
        .default(default)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices[idx])
}

fn select_state_solution(theme: &ColorfulTheme) -> CliResult<StateSolution> {
    let choices = [
        StateSolution::RtkQueryRedux,
        StateSolution::ReactQuery,
        StateSolution::Graphql,
        StateSolution::ReduxThunkAxios,
        StateSolution::None,
    ];
    let idx = Select::with_theme(theme)
        .with_prompt("Select the state management and caching solution")
        .items(&[
            "Add Rtk-Query with Redux to the project",
            "Add React-Query with Axios to the project",
            "Add Apollo Graphql Client to the project",
            "Add Redux thunk with axios",
            "None",
        ])
        .default(choices.len() - 1)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices[idx])
}

fn select_ui_library(theme: &ColorfulTheme) -> CliResult<UiLibrary> {
    let choices = [UiLibrary::Mui, UiLibrary::AntDesign, UiLibrary::None];
    let idx = Select::with_theme(theme)
        .with_prompt("Select the UI Library")
        .items(&[
            "Add Material UI to the project",
            "Add Ant Design to the project",
            "None",
        ])
        .default(choices.len() - 1)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices[idx])
}

fn select_styling_engine(theme: &ColorfulTheme) -> CliResult<StylingEngine> {
    let choices = [StylingEngine::Emotion, StylingEngine::StyledComponents];
    let idx = Select::with_theme(theme)
        .with_prompt("Which styling engine you want to use for Material UI ?")
        .items(&["Emotion (Strongly Recommended)", "Styled-components"])
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(choices[idx])
}

fn confirm(theme: &ColorfulTheme, prompt: &str, default: bool) -> CliResult<bool> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_err)
}
