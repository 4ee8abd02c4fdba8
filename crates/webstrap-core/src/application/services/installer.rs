//! Plugin installer - renders a bundle against the ambient context.
//!
//! For each file descriptor: resolve the content (literal or function of
//! context), resolve the name through the extension mapping, create the
//! directory chain, write. Entry patches are forwarded to the project
//! state rather than applied immediately, splicing is deferred and
//! batched so multiple features targeting the same entry file compose.
//!
//! Failure semantics: an individual file write that fails is logged and
//! does not abort the remaining files of the same bundle (best-effort,
//! partial success). Dependency/script forwarding still runs.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{PluginBundle, ProjectState, TemplateContext},
    error::WebstrapResult,
};

/// Renders plugin bundles into the generated project.
pub struct PluginInstaller<'a> {
    fs: &'a dyn Filesystem,
    root: PathBuf,
}

impl<'a> PluginInstaller<'a> {
    /// `root` is the generated project's directory (normally the process
    /// working directory after the wizard has entered it).
    pub fn new(fs: &'a dyn Filesystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Ambient rendering context, derived from the generated project: a
    /// `tsconfig.json` in the root signals typed-language mode.
    pub fn context(&self, state: &ProjectState) -> TemplateContext {
        TemplateContext {
            typed: self.fs.file_exists_matching(&self.root, "tsconfig.json"),
            generator: state.generator(),
        }
    }

    /// Install one bundle: write its files, forward its entry patch and
    /// dependency strings to the state, merge its manifest scripts.
    #[instrument(skip_all, fields(bundle = bundle.name))]
    pub fn install(&self, bundle: &PluginBundle, state: &mut ProjectState) -> WebstrapResult<()> {
        let ctx = self.context(state);
        info!(typed = ctx.typed, generator = %ctx.generator, "installing bundle");

        for spec in &bundle.files {
            let content = spec.content.resolve(&ctx);
            let file_name = spec.file_name(ctx.typed);
            let dir = spec
                .dir
                .iter()
                .fold(self.root.clone(), |path, segment| path.join(segment));

            if let Err(e) = self.write_one(&dir, &file_name, &content) {
                // Best-effort: keep writing the rest of the bundle.
                warn!(file = %dir.join(&file_name).display(), error = %e, "file write failed");
            } else {
                debug!(file = %dir.join(&file_name).display(), "file written");
            }
        }

        if let Some(patch) = &bundle.entry_patch {
            state.add_entry_patch(patch.clone());
        }

        if let Some(deps) = &bundle.dependencies {
            state.add_dependencies(&deps.resolve(&ctx));
        }

        if let Some(dev_deps) = &bundle.dev_dependencies {
            state.add_dev_dependencies(&dev_deps.resolve(&ctx));
        }

        if let Some(scripts) = &bundle.scripts {
            self.merge_scripts(&scripts.resolve(&ctx))?;
        }

        Ok(())
    }

    fn write_one(&self, dir: &Path, file_name: &str, content: &str) -> WebstrapResult<()> {
        self.fs.create_dir_all(dir)?;
        self.fs.write_file(&dir.join(file_name), content)
    }

    /// Merge script entries into the generated `package.json`. Existing
    /// keys of the same name are overwritten: last writer wins, no
    /// conflict detection.
    fn merge_scripts(&self, entries: &[(String, String)]) -> WebstrapResult<()> {
        let manifest_path = self.root.join("package.json");
        let text = self.fs.read_to_string(&manifest_path)?;

        let mut manifest: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| ApplicationError::ManifestParse {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        let scripts = manifest
            .as_object_mut()
            .ok_or_else(|| ApplicationError::ManifestParse {
                path: manifest_path.clone(),
                reason: "top level is not an object".into(),
            })?
            .entry("scripts")
            .or_insert_with(|| serde_json::Value::Object(Default::default()));

        let scripts = scripts
            .as_object_mut()
            .ok_or_else(|| ApplicationError::ManifestParse {
                path: manifest_path.clone(),
                reason: "'scripts' is not an object".into(),
            })?;

        for (key, value) in entries {
            scripts.insert(key.clone(), serde_json::Value::String(value.clone()));
        }

        let rendered = serde_json::to_string_pretty(&manifest).map_err(|e| {
            ApplicationError::ManifestParse {
                path: manifest_path.clone(),
                reason: e.to_string(),
            }
        })?;

        self.fs.write_file(&manifest_path, &(rendered + "\n"))
    }
}
