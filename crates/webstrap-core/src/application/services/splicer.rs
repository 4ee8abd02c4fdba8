//! Entry splicer - the batched wrap pass over generated entry files.
//!
//! Runs exactly once per scaffolding run, after every selected feature has
//! been installed and its patches accumulated. Patches targeting the same
//! file are pre-merged into one before/after/import tuple and applied in a
//! single read-mutate-write pass, never two interleaved passes with stale
//! match offsets.
//!
//! This is a textual transform, not an AST one: it assumes the anchor tag
//! is unambiguous within the searched scope, and it is deliberately not
//! idempotent (running it twice duplicates wrappers and imports, the
//! pipeline's single-invocation invariant is owned by the wizard).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{AnchorMatcher, Filesystem},
    domain::{
        AppShowcase, MergedSplice, NextPluginEntry, ProjectKind, ProjectState, ReactPluginEntry,
    },
    error::WebstrapResult,
};

/// What a splice pass actually did, for the run report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpliceSummary {
    pub applied: usize,
    pub skipped: Vec<String>,
}

impl SpliceSummary {
    fn skip(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "splice skipped");
        self.skipped.push(reason);
    }
}

/// Applies the accumulated entry patches to the generated project.
pub struct EntrySplicer<'a> {
    fs: &'a dyn Filesystem,
    matcher: &'a dyn AnchorMatcher,
    root: PathBuf,
}

impl<'a> EntrySplicer<'a> {
    pub fn new(
        fs: &'a dyn Filesystem,
        matcher: &'a dyn AnchorMatcher,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            matcher,
            root: root.into(),
        }
    }

    /// Apply all accumulated patches for the detected project kind.
    #[instrument(skip_all, fields(kind = %state.project_kind()))]
    pub fn apply(&self, state: &ProjectState) -> WebstrapResult<SpliceSummary> {
        match state.project_kind() {
            ProjectKind::React => self.apply_react(state.react_patches()),
            ProjectKind::Next => self.apply_next(state.next_patches()),
        }
    }

    // ── Single-page-app flavor ────────────────────────────────────────────

    fn apply_react(&self, entries: &[ReactPluginEntry]) -> WebstrapResult<SpliceSummary> {
        let mut summary = SpliceSummary::default();
        if entries.is_empty() {
            return Ok(summary);
        }

        let src = self.root.join("src");
        let is_vite = self.fs.file_exists_matching(&self.root, "vite.config");
        let typed = self.fs.file_exists_matching(&self.root, "tsconfig.json");

        // The generated root component gives the anchor tag name; the
        // entry file is where the anchor is used and wrapped.
        let Some(root_component) = self.fs.find_file(&src, "App") else {
            summary.skip("root component file not found under src");
            return Ok(summary);
        };

        let entry_name = if is_vite {
            "main".to_string()
        } else {
            format!("index.{}", if typed { "tsx" } else { "js" })
        };
        let Some(entry_file) = self.fs.find_file(&src, &entry_name) else {
            summary.skip(format!("entry file matching '{entry_name}' not found"));
            return Ok(summary);
        };

        // "App.tsx" → "App"
        let tag = root_component
            .file_name
            .split('.')
            .next()
            .unwrap_or(root_component.file_name.as_str())
            .to_string();

        let merged = MergedSplice::fold(
            entries
                .iter()
                .map(|e| (e.index.imports, e.index.before, e.index.after)),
        );

        if self.splice_file(&entry_file.path, &tag, &merged)? {
            summary.applied += 1;
        } else {
            summary.skip(format!(
                "no '{tag}' anchor in {}",
                entry_file.path.display()
            ));
        }

        self.write_home_page(entries, typed)?;

        Ok(summary)
    }

    /// Assemble the showcase home page from the accumulated examples.
    fn write_home_page(&self, entries: &[ReactPluginEntry], typed: bool) -> WebstrapResult<()> {
        let showcases: Vec<&AppShowcase> = entries.iter().map(|e| &e.app).collect();

        let home_dir = self.root.join("src").join("components").join("home");
        self.fs.create_dir_all(&home_dir)?;

        let home_name = format!("Home.{}", if typed { "tsx" } else { "jsx" });
        self.fs
            .write_file(&home_dir.join(home_name), &home_page_content(&showcases))?;
        self.fs
            .write_file(&home_dir.join("Home.module.css"), HOME_PAGE_CSS)?;
        Ok(())
    }

    // ── Meta-framework flavor ─────────────────────────────────────────────

    fn apply_next(&self, entries: &[NextPluginEntry]) -> WebstrapResult<SpliceSummary> {
        let mut summary = SpliceSummary::default();
        if entries.is_empty() {
            return Ok(summary);
        }

        let app_dir = self.root.join("src").join("app");
        let Some(layout) = self.fs.find_file(&app_dir, "layout") else {
            summary.skip("root layout file not found under src/app");
            return Ok(summary);
        };

        // Layout patches may target different framework tags (body, html).
        // Group by anchor, merge within each group, one pass per anchor.
        // Every pass re-reads the file, so offsets are never stale.
        let mut groups: Vec<(&str, Vec<&NextPluginEntry>)> = Vec::new();
        for entry in entries {
            match groups.iter_mut().find(|(a, _)| *a == entry.layout.anchor) {
                Some((_, members)) => members.push(entry),
                None => groups.push((entry.layout.anchor, vec![entry])),
            }
        }

        for (anchor, members) in groups {
            let merged = MergedSplice::fold(
                members
                    .iter()
                    .map(|e| (e.layout.imports, e.layout.before, e.layout.after)),
            );

            if self.splice_file(&layout.path, anchor, &merged)? {
                summary.applied += 1;
            } else {
                summary.skip(format!("no '{anchor}' anchor in {}", layout.path.display()));
            }
        }

        Ok(summary)
    }

    // ── Shared wrap pass ──────────────────────────────────────────────────

    /// One read-mutate-write pass: wrap the anchor, prepend imports, write
    /// the whole file back. Returns `Ok(false)` when the pattern did not
    /// match (non-fatal; the pipeline continues).
    fn splice_file(&self, path: &Path, tag: &str, merged: &MergedSplice) -> WebstrapResult<bool> {
        let source = self.fs.read_to_string(path)?;

        let Some(wrapped) = self
            .matcher
            .wrap_all(&source, tag, &merged.before, &merged.after)
        else {
            return Ok(false);
        };

        // Imports go to the very top, unmerged and undeduplicated: a
        // second run would duplicate them (single-run invariant).
        let result = format!("{}\n{}", merged.imports, wrapped);
        self.fs.write_file(path, &result)?;

        info!(file = %path.display(), anchor = tag, "entry file spliced");
        Ok(true)
    }
}

// ── Home page assembly ────────────────────────────────────────────────────────

fn home_page_content(showcases: &[&AppShowcase]) -> String {
    let mut imports = String::new();
    let mut sections = String::new();

    for showcase in showcases {
        imports.push('\n');
        imports.push_str(showcase.import);
        sections.push_str(&format!(
            r#"      <section className={{styles.card}}>
        <h2>{}</h2>
        {}
      </section>
"#,
            showcase.name, showcase.element
        ));
    }

    format!(
        r#"{imports}
import styles from "./Home.module.css";

const Home = () => {{
  return (
    <div className={{styles.home}}>
      <h1>Included features</h1>
{sections}    </div>
  );
}};

export default Home;
"#
    )
}

const HOME_PAGE_CSS: &str = r#".home {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem;
}

.card {
  border: 1px solid #e2e2e2;
  border-radius: 8px;
  padding: 1rem;
  margin-bottom: 1rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppShowcase;

    #[test]
    fn home_page_lists_each_showcase() {
        let a = AppShowcase {
            import: "import A from \"src/components/a/A\";",
            name: "Feature A",
            element: "<A />",
        };
        let b = AppShowcase {
            import: "import B from \"src/components/b/B\";",
            name: "Feature B",
            element: "<B />",
        };

        let content = home_page_content(&[&a, &b]);
        assert!(content.contains("import A from"));
        assert!(content.contains("import B from"));
        assert!(content.contains("<A />"));
        assert!(content.contains("Feature B"));
        // imports come before the component body
        let a_pos = content.find("import A").unwrap();
        let body_pos = content.find("const Home").unwrap();
        assert!(a_pos < body_pos);
    }

    #[test]
    fn home_page_without_showcases_is_still_valid_markup() {
        let content = home_page_content(&[]);
        assert!(content.contains("const Home"));
        assert!(content.contains("export default Home;"));
    }
}
