//! Project-level operations: generator invocation, manifest inspection,
//! batched dependency installation, and config-file patching.
//!
//! Everything here either shells out through the [`ProcessRunner`] port or
//! rewrites a known generated file shape through the [`Filesystem`] port.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AnchorMatcher, Filesystem, ProcessRunner},
    },
    domain::{GeneratorKind, Language, PackageManager, ProjectKind, ProjectState, UiLibrary},
    error::WebstrapResult,
};

// ── Generator command lines ───────────────────────────────────────────────────

/// The exact third-party generator invocation for the selected flavor.
///
/// Pure so the flag sets stay testable without spawning anything.
pub fn generator_command(state: &ProjectState, ui_library: UiLibrary) -> (String, Vec<String>) {
    let name = state.project_name().to_string();

    match state.generator() {
        GeneratorKind::ReactVite => {
            let pm = state.package_manager();
            // npm needs the pinned package name and the `--` separator
            // before template flags; yarn/pnpm resolve both themselves.
            let vite = if pm == PackageManager::Npm {
                "vite@latest"
            } else {
                "vite"
            };
            let mut args = vec!["create".to_string(), vite.to_string(), name];
            if pm == PackageManager::Npm {
                args.push("--".to_string());
            }
            args.push("--template".to_string());
            args.push(
                if state.language().is_typed() {
                    "react-ts"
                } else {
                    "react"
                }
                .to_string(),
            );
            (pm.as_str().to_string(), args)
        }
        GeneratorKind::ReactCra => {
            let mut args = vec!["create-react-app".to_string(), name];
            if state.language().is_typed() {
                args.push("--template".to_string());
                args.push("typescript".to_string());
            }
            ("npx".to_string(), args)
        }
        GeneratorKind::Next => {
            let mut args = vec![
                "create-next-app@latest".to_string(),
                name,
                format!("--use-{}", state.package_manager()),
                "--import-alias".to_string(),
                "@/*".to_string(),
                "--src-dir".to_string(),
            ];
            args.push(
                if state.language().is_typed() {
                    "--ts"
                } else {
                    "--js"
                }
                .to_string(),
            );
            if ui_library.is_selected() {
                args.push("--no-tailwind".to_string());
            }
            args.push("--app".to_string());
            ("npx".to_string(), args)
        }
    }
}

// ── ProjectOps service ────────────────────────────────────────────────────────

/// Operations on the generated project directory.
pub struct ProjectOps<'a> {
    fs: &'a dyn Filesystem,
    runner: &'a dyn ProcessRunner,
    root: PathBuf,
}

impl<'a> ProjectOps<'a> {
    pub fn new(
        fs: &'a dyn Filesystem,
        runner: &'a dyn ProcessRunner,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            runner,
            root: root.into(),
        }
    }

    /// Probe that the chosen package manager binary exists.
    pub fn verify_package_manager(&self, manager: PackageManager) -> WebstrapResult<()> {
        self.runner
            .run(manager.as_str(), &["--version".to_string()])
    }

    /// `git init` in the project directory.
    pub fn init_git(&self) -> WebstrapResult<()> {
        self.runner.run("git", &["init".to_string()])
    }

    /// Detect the coarse project kind from the generated manifest's
    /// declared packages. `next` wins over `react` (a Next project also
    /// depends on react); an unreadable manifest defaults to React.
    #[instrument(skip_all)]
    pub fn detect_project_kind(&self) -> ProjectKind {
        let manifest_path = self.root.join("package.json");
        let Ok(text) = self.fs.read_to_string(&manifest_path) else {
            return ProjectKind::React;
        };
        let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&text) else {
            warn!("generated package.json is not valid JSON; assuming react");
            return ProjectKind::React;
        };

        let mut kind = ProjectKind::React;
        if let Some(deps) = manifest.get("dependencies").and_then(|d| d.as_object()) {
            if deps.contains_key("react") {
                kind = ProjectKind::React;
            }
            if deps.contains_key("next") {
                kind = ProjectKind::Next;
            }
        }
        debug!(kind = %kind, "project kind detected");
        kind
    }

    /// Whether the project root contains a `package.json`, used to verify
    /// that the generator actually produced a project before continuing.
    pub fn manifest_present(&self) -> bool {
        self.fs.file_exists_matching(&self.root, "package.json")
    }

    // ── Batched dependency installation ───────────────────────────────────

    /// Install the accumulated dependency string. Returns `Ok(false)` when
    /// there was nothing to install.
    pub fn install_dependencies(&self, state: &ProjectState) -> WebstrapResult<bool> {
        self.run_install(state, state.dependency_list(), false)
    }

    /// Install the accumulated dev-dependency string with the `-D` flag.
    pub fn install_dev_dependencies(&self, state: &ProjectState) -> WebstrapResult<bool> {
        self.run_install(state, state.dev_dependency_list(), true)
    }

    fn run_install(
        &self,
        state: &ProjectState,
        packages: Vec<&str>,
        dev: bool,
    ) -> WebstrapResult<bool> {
        if packages.is_empty() {
            return Ok(false);
        }

        let manager = state.package_manager();
        let mut args = vec![manager.install_subcommand().to_string()];
        if dev {
            args.push("-D".to_string());
        }
        args.extend(packages.iter().map(|p| (*p).to_string()));

        info!(manager = %manager, count = packages.len(), dev, "installing packages");
        self.runner.run(manager.as_str(), &args)?;
        Ok(true)
    }

    // ── Config-file patching ──────────────────────────────────────────────

    /// Insert `fragment` before the closing `})` of `vite.config.*`,
    /// optionally prefixing the whole file with a reference line.
    pub fn patch_vite_config(
        &self,
        matcher: &dyn AnchorMatcher,
        language: Language,
        fragment: &str,
        prefix_line: Option<&str>,
    ) -> WebstrapResult<()> {
        let file_name = format!("vite.config.{}", language.as_str());
        let path = self.root.join(&file_name);
        let source = self.fs.read_to_string(&path)?;

        let Some(mut patched) = matcher.insert_before_config_tail(&source, fragment) else {
            warn!(file = %path.display(), "vite config has no closing tail; left untouched");
            return Ok(());
        };

        if let Some(prefix) = prefix_line {
            patched = format!("{prefix}\n{patched}");
        }

        self.fs.write_file(&path, &patched)
    }

    /// Wire absolute `src/*` imports: a Vite alias block, `tsconfig.json`
    /// paths for typed projects, and a `jsconfig.json` for CRA+JS.
    #[instrument(skip_all)]
    pub fn add_path_aliases(
        &self,
        matcher: &dyn AnchorMatcher,
        state: &ProjectState,
    ) -> WebstrapResult<()> {
        if state.generator() == GeneratorKind::ReactVite {
            self.patch_vite_config(matcher, state.language(), VITE_ALIAS_FRAGMENT, None)?;
        }

        if state.language().is_typed() {
            self.add_tsconfig_paths()?;
        }

        if state.generator() == GeneratorKind::ReactCra && !state.language().is_typed() {
            self.fs
                .write_file(&self.root.join("jsconfig.json"), JSCONFIG_CONTENT)?;
        }

        Ok(())
    }

    fn add_tsconfig_paths(&self) -> WebstrapResult<()> {
        let path = self.root.join("tsconfig.json");
        let text = self.fs.read_to_string(&path)?;

        // Generators ship tsconfig files with comments; strip them before
        // parsing as JSON.
        let mut config: serde_json::Value = serde_json::from_str(&strip_json_comments(&text))
            .map_err(|e| ApplicationError::ManifestParse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let options = config
            .as_object_mut()
            .ok_or_else(|| ApplicationError::ManifestParse {
                path: path.clone(),
                reason: "top level is not an object".into(),
            })?
            .entry("compilerOptions")
            .or_insert_with(|| serde_json::Value::Object(Default::default()));

        if let Some(options) = options.as_object_mut() {
            options.insert("baseUrl".into(), serde_json::json!("./"));
            options.insert("paths".into(), serde_json::json!({ "src/*": ["./src/*"] }));
        }

        let rendered =
            serde_json::to_string_pretty(&config).map_err(|e| ApplicationError::ManifestParse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        self.fs.write_file(&path, &(rendered + "\n"))
    }

    /// Vitest wiring for the Vite flavor: a `test` block in the config, a
    /// vitest types reference, and the jest-dom reference in the ambient
    /// declaration file.
    #[instrument(skip_all)]
    pub fn add_vitest_config(
        &self,
        matcher: &dyn AnchorMatcher,
        state: &ProjectState,
    ) -> WebstrapResult<()> {
        let language = state.language();
        let fragment = format!(
            "  test: {{\n    globals: true,\n    environment: \"jsdom\",\n    setupFiles: \"./setupTests.{}\",\n  }},\n",
            language.as_str()
        );
        let prefix = language
            .is_typed()
            .then_some("/// <reference types=\"vitest\" />");

        self.patch_vite_config(matcher, language, &fragment, prefix)?;

        if language.is_typed() {
            let declaration = self.root.join("src").join("vite-env.d.ts");
            let existing = self.fs.read_to_string(&declaration).unwrap_or_default();
            self.fs.write_file(
                &declaration,
                &format!(
                    "{existing}\n/// <reference types=\"@testing-library/jest-dom\" />\n"
                ),
            )?;
        }

        Ok(())
    }

    // ── Structure rewrites ────────────────────────────────────────────────

    /// Pre-emptive deletion of a generated boilerplate file before a
    /// bundle writes its replacement (e.g. `App.js` before the router
    /// feature lands its own root component).
    pub fn delete_stale_boilerplate(&self, dir: &[&str], substring: &str) -> WebstrapResult<()> {
        let dir = dir
            .iter()
            .fold(self.root.clone(), |path, segment| path.join(segment));
        self.fs.delete_matching(&dir, substring)
    }

    /// Move everything directly under `dir` into `dir/subdir`, creating
    /// the subdirectory if needed. Used by the Next i18n feature to move
    /// the app tree under a `[lang]` segment.
    pub fn move_all_to_subdir(&self, dir: &Path, subdir: &str) -> WebstrapResult<()> {
        let target = dir.join(subdir);
        if !self.fs.exists(&target) {
            self.fs.create_dir_all(&target)?;
        }

        for entry in self.fs.list_dir(dir)? {
            if entry.file_name == subdir {
                continue;
            }
            self.fs.rename(&entry.path, &target.join(&entry.file_name))?;
        }
        Ok(())
    }

    /// Rewrite the Next root layout's parameter list to accept the locale
    /// segment param alongside `children`.
    pub fn patch_next_layout_params(&self, typed: bool) -> WebstrapResult<()> {
        let layout_name = format!("layout.{}", if typed { "tsx" } else { "js" });
        let path = self.root.join("src").join("app").join(&layout_name);
        let source = self.fs.read_to_string(&path)?;

        let replacement = if typed {
            "RootLayout({\n  children,\n  params,\n}: {\n  children: React.ReactNode;\n  params: { lang: string };\n})"
        } else {
            "RootLayout({\n  children,\n  params,\n})"
        };

        let re = Regex::new(r"RootLayout\([^)]*\)").expect("layout params pattern is valid");
        let patched = re.replace(&source, replacement);
        self.fs.write_file(&path, patched.as_ref())
    }
}

// ── Fragments ─────────────────────────────────────────────────────────────────

const VITE_ALIAS_FRAGMENT: &str = "  resolve: {\n    alias: {\n      src: \"/src\",\n    },\n  },\n";

const JSCONFIG_CONTENT: &str = r#"{
  "compilerOptions": {
    "baseUrl": "./",
    "paths": {
      "src/*": ["./src/*"]
    }
  }
}
"#;

/// Strip `// …` and `/* … */` comments so generator-shipped JSON-with-
/// comments files can be parsed as plain JSON.
pub fn strip_json_comments(text: &str) -> String {
    let re = Regex::new(r"//[^\n]*|/\*(?s:.*?)\*/").expect("comment pattern is valid");
    re.replace_all(text, "").into_owned()
}
