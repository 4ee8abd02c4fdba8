//! Regex-based anchor matching.
//!
//! Builds a structural pattern for a tag name that matches either a
//! self-closing `<Tag/>` (optional internal whitespace) or the shortest
//! non-greedy multi-line span from the first `<Tag ...>` to the nearest
//! subsequent `</Tag>`. This is a textual match, not an AST one: it
//! assumes the anchor is not nested inside another tag of the identical
//! name within the search scope.

use regex::Regex;

use webstrap_core::{application::ports::AnchorMatcher, domain::Span};

/// Production anchor matcher backed by the `regex` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexAnchorMatcher;

impl RegexAnchorMatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Build the structural pattern for `tag`.
///
/// Metacharacters in the tag name are escaped, so the pattern is valid for
/// any input and the `expect` cannot fire.
fn anchor_pattern(tag: &str) -> Regex {
    let escaped = regex::escape(tag);
    Regex::new(&format!(
        r"<\s*{escaped}\s*(?:[^>]+)?\s*>(?:.*?\n)*?.*?<\s*/\s*{escaped}\s*>|<\s*{escaped}\s*/>"
    ))
    .expect("escaped anchor pattern is always valid")
}

/// Pattern matching the closing `}` `)` tail of a `defineConfig({ ... })`
/// style call.
fn config_tail_pattern() -> Regex {
    Regex::new(r"\}\s*\)").expect("config tail pattern is valid")
}

impl AnchorMatcher for RegexAnchorMatcher {
    fn find_anchor(&self, source: &str, tag: &str) -> Option<Span> {
        let m = anchor_pattern(tag).find(source)?;
        if m.as_str().is_empty() {
            return None;
        }
        Some(Span {
            start: m.start(),
            end: m.end(),
        })
    }

    fn wrap_all(&self, source: &str, tag: &str, before: &str, after: &str) -> Option<String> {
        let re = anchor_pattern(tag);
        let first = re.find(source)?;
        if first.as_str().is_empty() {
            return None;
        }

        // Every occurrence receives the same fragments. The closure keeps
        // before/after literal, they are never interpreted as
        // `$`-replacement syntax.
        let wrapped = re.replace_all(source, |caps: &regex::Captures<'_>| {
            format!("{before}{}{after}", &caps[0])
        });
        Some(wrapped.into_owned())
    }

    fn insert_before_config_tail(&self, source: &str, fragment: &str) -> Option<String> {
        let re = config_tail_pattern();
        let m = re.find(source)?;
        let mut result = String::with_capacity(source.len() + fragment.len());
        result.push_str(&source[..m.start()]);
        result.push_str(fragment);
        result.push_str(&source[m.start()..]);
        Some(result)
    }
}
