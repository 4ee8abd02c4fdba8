//! Entry-patch descriptors and the merge rules applied before splicing.
//!
//! A patch carries up to four optional parts. Which pairs are populated
//! decides where it is routed (see
//! [`ProjectState::add_entry_patch`](crate::domain::state::ProjectState::add_entry_patch)):
//! `app` + `index` → the single-page-app list, `layout` + `page` → the
//! meta-framework list.
//!
//! All patches targeting the same entry file are folded into a single
//! [`MergedSplice`] before the splicer touches the file, the engine never
//! runs two separate wrap passes against one anchor.

/// A byte range identifying an anchor occurrence within a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A showcase component contributed to the generated SPA home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppShowcase {
    /// Import statement for the example component.
    pub import: &'static str,
    /// Human-readable feature name shown on the home page.
    pub name: &'static str,
    /// JSX element to embed, e.g. `<ReactQueryExample />`.
    pub element: &'static str,
}

/// Wrapping instructions applied around the SPA entry file's
/// root-component anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSplice {
    /// Import statements prepended to the top of the entry file.
    pub imports: &'static str,
    /// Text inserted immediately before the anchor's opening occurrence.
    pub before: &'static str,
    /// Text inserted immediately after the anchor's closing occurrence.
    pub after: &'static str,
}

/// Wrapping instructions applied inside the meta-framework root layout.
///
/// Unlike [`IndexSplice`] the anchor tag is named explicitly: layout
/// patches wrap framework-owned tags (`body`, `html`), not a detected
/// root component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSplice {
    pub anchor: &'static str,
    pub imports: &'static str,
    pub before: &'static str,
    pub after: &'static str,
}

/// Display fields letting downstream output (README, navigation) enumerate
/// the features installed into a meta-framework project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub route: &'static str,
    pub label: &'static str,
}

/// One optional feature's entry-point mutation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub app: Option<AppShowcase>,
    pub index: Option<IndexSplice>,
    pub layout: Option<LayoutSplice>,
    pub page: Option<PageInfo>,
}

/// A routed patch for a single-page-app project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactPluginEntry {
    pub app: AppShowcase,
    pub index: IndexSplice,
}

/// A routed patch for a meta-framework project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPluginEntry {
    pub layout: LayoutSplice,
    pub page: PageInfo,
}

/// The combined import/before/after triple applied in one wrap pass.
///
/// Merge rules (order-sensitive): imports are newline-joined in
/// installation order; `before` fragments concatenate first-installed
/// leftmost and `after` fragments first-installed rightmost, so the first
/// feature becomes the outermost wrapper and nesting stays balanced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSplice {
    pub imports: String,
    pub before: String,
    pub after: String,
}

impl MergedSplice {
    /// Fold (imports, before, after) parts in order.
    pub fn fold<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut merged = Self::default();
        for (imports, before, after) in parts {
            merged.imports.push_str(imports);
            merged.imports.push('\n');
            merged.before.push_str(before);
            merged.after = format!("{}{}", after, merged.after);
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.before.is_empty() && self.after.is_empty()
    }
}
