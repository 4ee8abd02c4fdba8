//! The scaffolding pipeline.
//!
//! Order matters and is fixed: interview → package-manager probe →
//! generator (fatal on failure) → enter the generated directory (fatal) →
//! git → kind detection → per-kind setup → feature bundles → one splice
//! pass → batched installs → README → summary.
//!
//! Required steps abort with a categorized error; optional steps record
//! their outcome in the [`ScaffoldReport`] and never stop the run.

use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;
use tracing::{info, instrument};

use webstrap_adapters::{LocalFilesystem, RegexAnchorMatcher, SystemRunner, plugins};
use webstrap_core::{
    application::{
        ports::ProcessRunner,
        report::{ScaffoldReport, StepOutcome},
        services::{
            EntrySplicer, PluginInstaller,
            project::{ProjectOps, generator_command},
        },
    },
    domain::{
        GeneratorKind, Language, PackageManager, PluginBundle, ProjectKind, ProjectState,
        StateSolution, StylingEngine, UiLibrary,
    },
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    readme,
};

/// Every answer the pipeline needs, gathered before any work starts.
#[derive(Debug, Clone)]
pub struct Interview {
    pub package_manager: PackageManager,
    pub language: Language,
    pub project_name: String,
    pub generator: GeneratorKind,
    pub add_prettier: bool,
    pub add_storybook: bool,
    pub add_husky: bool,
    pub state_solution: StateSolution,
    pub ui_library: UiLibrary,
    pub styling_engine: Option<StylingEngine>,
    pub mui_icons: bool,
    pub add_i18n: bool,
    pub add_testing: bool,
}

impl Interview {
    /// The `--yes` answer set: config-file defaults for the base choices,
    /// conservative defaults for the optional features.
    pub fn with_defaults(project_name: String, config: &AppConfig) -> Self {
        let package_manager = config
            .defaults
            .package_manager
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(PackageManager::Npm);
        let language = config
            .defaults
            .language
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Language::TypeScript);
        let generator = config
            .defaults
            .generator
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(GeneratorKind::ReactVite);

        Self {
            package_manager,
            language,
            project_name,
            generator,
            add_prettier: true,
            add_storybook: false,
            add_husky: false,
            state_solution: StateSolution::None,
            ui_library: UiLibrary::None,
            styling_engine: None,
            mui_icons: false,
            add_i18n: false,
            add_testing: true,
        }
    }
}

/// Validate a project name: well-formed, and not an existing non-empty
/// directory.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }
    if name.starts_with('.') {
        return Err("name cannot start with '.'".into());
    }
    if name.contains('/') || name.contains('\\') {
        return Err("name cannot contain path separators".into());
    }
    let path = Path::new(name);
    if path.exists() {
        let occupied = std::fs::read_dir(path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(true);
        if occupied {
            return Err("a non-empty directory with this name already exists".into());
        }
    }
    Ok(())
}

fn gather_interview(cli: &Cli, config: &AppConfig) -> CliResult<Interview> {
    if cli.yes {
        let name = cli.name.clone().ok_or_else(|| CliError::InvalidInput {
            message: "--yes requires a project name argument".into(),
        })?;
        validate_project_name(&name).map_err(|reason| CliError::InvalidProjectName {
            name: name.clone(),
            reason,
        })?;
        return Ok(Interview::with_defaults(name, config));
    }

    #[cfg(feature = "interactive")]
    {
        crate::prompts::run_interview(cli, config)
    }
    #[cfg(not(feature = "interactive"))]
    {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Run the whole pipeline.
#[instrument(skip_all)]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let interview = gather_interview(&cli, &config)?;

    let fs = LocalFilesystem::new();
    let runner = SystemRunner::new();
    let matcher = RegexAnchorMatcher::new();

    // ── Package-manager probe (fatal) ─────────────────────────────────────
    let probe_ops = ProjectOps::new(&fs, &runner, ".");
    probe_ops
        .verify_package_manager(interview.package_manager)
        .map_err(|_| CliError::PackageManagerMissing {
            manager: interview.package_manager.to_string(),
        })?;

    let mut state = ProjectState::new(
        interview.package_manager,
        interview.project_name.clone(),
        interview.language,
        interview.generator,
    );
    let mut report = ScaffoldReport::new();

    // ── Generator (fatal) ─────────────────────────────────────────────────
    output.header("Generating boilerplate, please wait !")?;
    let (program, args) = generator_command(&state, interview.ui_library);
    runner
        .run(&program, &args)
        .map_err(|e| CliError::GeneratorFailed { source: e })?;
    report.succeeded("project generator");

    // ── Enter the generated directory (fatal) ─────────────────────────────
    std::env::set_current_dir(state.project_name()).map_err(|e| CliError::ProjectDirInvalid {
        reason: format!("cannot enter '{}': {e}", state.project_name()),
    })?;

    let ops = ProjectOps::new(&fs, &runner, ".");
    if !ops.manifest_present() {
        return Err(CliError::ProjectDirInvalid {
            reason: "no package.json was generated".into(),
        });
    }

    let installer = PluginInstaller::new(&fs, ".");

    // ── Git ───────────────────────────────────────────────────────────────
    match ops.init_git() {
        Ok(()) => {
            install_bundle(&installer, &plugins::common::git(), &mut state, &mut report, &output);
        }
        Err(e) => report.failed("git init", e.to_string()),
    }

    // ── Kind detection + per-kind base setup ──────────────────────────────
    state.set_project_kind(ops.detect_project_kind());
    let kind = state.project_kind();
    info!(%kind, "project kind detected");

    if kind == ProjectKind::React {
        match ops.add_path_aliases(&matcher, &state) {
            Ok(()) => report.succeeded("absolute import aliases"),
            Err(e) => report.failed("absolute import aliases", e.to_string()),
        }

        // The router bundle replaces the root component; drop the stale
        // generated one first so it cannot shadow the replacement.
        if interview.language == Language::JavaScript {
            if let Err(e) = ops.delete_stale_boilerplate(&["src"], "App.js") {
                report.failed("boilerplate cleanup", e.to_string());
            }
        }
        install_bundle(&installer, &plugins::react::router(), &mut state, &mut report, &output);
    }

    // ── Tooling ───────────────────────────────────────────────────────────
    if interview.add_prettier {
        install_bundle(&installer, &plugins::common::prettier(), &mut state, &mut report, &output);
    } else {
        report.skipped("prettier", "not selected");
    }

    if interview.add_storybook {
        // Delegated to the storybook initializer; a failure here never
        // blocks the rest of the scaffold.
        output.header("Adding Storybook, Please wait !")?;
        match runner.run("npx", &storybook_args()) {
            Ok(()) => report.succeeded("storybook"),
            Err(e) => report.failed("storybook", e.to_string()),
        }
    } else {
        report.skipped("storybook", "not selected");
    }

    if interview.add_husky {
        install_bundle(&installer, &plugins::common::husky(), &mut state, &mut report, &output);
    } else {
        report.skipped("husky", "not selected");
    }

    install_bundle(&installer, &plugins::common::eslint(), &mut state, &mut report, &output);

    // ── Optional feature bundles ──────────────────────────────────────────
    match plugins::state_solution_bundle(kind, interview.state_solution) {
        Some(bundle) => install_bundle(&installer, &bundle, &mut state, &mut report, &output),
        None => report.skipped("state management", "not selected"),
    }

    match plugins::ui_library_bundle(kind, interview.ui_library) {
        Some(bundle) => {
            install_bundle(&installer, &bundle, &mut state, &mut report, &output);
            if interview.ui_library == UiLibrary::Mui && kind == ProjectKind::React {
                state.add_dependencies(&mui_engine_dependencies(
                    interview.styling_engine.unwrap_or(StylingEngine::Emotion),
                    interview.mui_icons,
                ));
            }
        }
        None => report.skipped("ui library", "not selected"),
    }

    if interview.add_i18n {
        install_bundle(&installer, &plugins::i18n_bundle(kind), &mut state, &mut report, &output);

        if kind == ProjectKind::Next {
            let typed = installer.context(&state).typed;
            if let Err(e) = ops
                .patch_next_layout_params(typed)
                .and_then(|()| ops.move_all_to_subdir(Path::new("./src/app"), "[lang]"))
            {
                report.failed("i18n locale segment", e.to_string());
            }
        }
    } else {
        report.skipped("i18n", "not selected");
    }

    if interview.add_testing {
        if interview.generator == GeneratorKind::ReactVite {
            match ops.add_vitest_config(&matcher, &state) {
                Ok(()) => {
                    install_bundle(&installer, &plugins::react::vitest(), &mut state, &mut report, &output);
                }
                Err(e) => report.failed("vitest config", e.to_string()),
            }
        } else {
            report.skipped("testing", "only wired for the Vite flavor");
        }
    } else {
        report.skipped("testing", "not selected");
    }

    // ── The one splice pass ───────────────────────────────────────────────
    let spinner = progress_spinner(&output, "Applying entry patches...");
    let splicer = EntrySplicer::new(&fs, &matcher, ".");
    match splicer.apply(&state) {
        Ok(summary) => {
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            for reason in &summary.skipped {
                report.skipped("entry splice", reason.clone());
            }
            if summary.applied > 0 {
                report.succeeded("entry splice");
            } else if summary.skipped.is_empty() {
                report.skipped("entry splice", "nothing to apply");
            }
        }
        Err(e) => {
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            report.failed("entry splice", e.to_string());
        }
    }

    // ── Batched installs ──────────────────────────────────────────────────
    run_install_step(&ops, &state, &mut report, &output, false);
    run_install_step(&ops, &state, &mut report, &output, true);

    // ── README ────────────────────────────────────────────────────────────
    match readme::write_readme(&fs, &interview, &state) {
        Ok(()) => report.succeeded("README"),
        Err(e) => report.failed("README", e.to_string()),
    }

    // ── Summary ───────────────────────────────────────────────────────────
    print_summary(&report, &output)?;
    print_next_steps(&interview, &output)?;

    let failures = report
        .steps()
        .iter()
        .filter(|(_, o)| matches!(o, StepOutcome::Failed(_)))
        .count();
    if failures > 0 {
        return Err(CliError::StepsFailed { count: failures });
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn storybook_args() -> Vec<String> {
    ["sb", "init", "-y", "-s"].map(String::from).to_vec()
}

fn mui_engine_dependencies(engine: StylingEngine, icons: bool) -> String {
    let mut deps = match engine {
        StylingEngine::Emotion => "@emotion/styled @emotion/react".to_string(),
        StylingEngine::StyledComponents => {
            "@mui/styled-engine-sc styled-components @emotion/react".to_string()
        }
    };
    if icons {
        deps.push_str(" @mui/icons-material");
    }
    deps
}

fn install_bundle(
    installer: &PluginInstaller<'_>,
    bundle: &PluginBundle,
    state: &mut ProjectState,
    report: &mut ScaffoldReport,
    output: &OutputManager,
) {
    if let Some(message) = bundle.initializing_message {
        let _ = output.header(message);
    }

    match installer.install(bundle, state) {
        Ok(()) => {
            if let Some(message) = bundle.success_message {
                let _ = output.success(message);
            }
            report.succeeded(bundle.name);
        }
        Err(e) => {
            let _ = output.error(&format!("{} failed: {e}", bundle.name));
            report.failed(bundle.name, e.to_string());
        }
    }
}

fn run_install_step(
    ops: &ProjectOps<'_>,
    state: &ProjectState,
    report: &mut ScaffoldReport,
    output: &OutputManager,
    dev: bool,
) {
    let step = if dev {
        "dev dependency install"
    } else {
        "dependency install"
    };

    let result = if dev {
        ops.install_dev_dependencies(state)
    } else {
        ops.install_dependencies(state)
    };

    match result {
        Ok(true) => report.succeeded(step),
        Ok(false) => report.skipped(step, "nothing to install"),
        Err(e) => {
            let _ = output.error(&format!("{step} failed: {e}"));
            report.failed(step, e.to_string());
        }
    }
}

fn progress_spinner(output: &OutputManager, message: &'static str) -> Option<ProgressBar> {
    if output.is_quiet() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    Some(spinner)
}

fn print_summary(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Summary")?;
    for (step, outcome) in report.steps() {
        match outcome {
            StepOutcome::Succeeded => output.success(step)?,
            StepOutcome::Skipped(reason) => output.info(&format!("{step}: skipped ({reason})"))?,
            StepOutcome::Failed(reason) => output.error(&format!("{step}: failed ({reason})"))?,
        }
    }
    Ok(())
}

fn print_next_steps(interview: &Interview, output: &OutputManager) -> CliResult<()> {
    let prefix = interview.package_manager.run_prefix();
    let dev_script = match interview.generator {
        GeneratorKind::ReactCra => "start",
        GeneratorKind::ReactVite | GeneratorKind::Next => "dev",
    };

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", interview.project_name))?;
    output.print(&format!("  {} {}", prefix, dev_script))?;
    output.print("")?;
    output.success("\u{263a} Happy Coding !")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
