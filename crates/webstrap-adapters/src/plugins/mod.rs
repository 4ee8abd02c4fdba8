//! Built-in plugin catalog.
//!
//! Each function returns the declarative [`PluginBundle`] for one optional
//! feature. Bundles are data: files to write, dependency strings, manifest
//! scripts, and the entry patch the splicer applies at the end of the run.
//!
//! Template content lives here, in the adapters crate, next to the other
//! infrastructure the bundles depend on.

pub mod common;
pub mod next;
pub mod react;

use webstrap_core::domain::{PluginBundle, ProjectKind, StateSolution, UiLibrary};

/// Bundle for the selected state-management solution, or `None` when the
/// user opted out.
pub fn state_solution_bundle(kind: ProjectKind, solution: StateSolution) -> Option<PluginBundle> {
    match (kind, solution) {
        (_, StateSolution::None) => None,
        (ProjectKind::React, StateSolution::ReactQuery) => Some(react::state::react_query()),
        (ProjectKind::React, StateSolution::RtkQueryRedux) => Some(react::state::rtk_query()),
        (ProjectKind::React, StateSolution::Graphql) => Some(react::state::graphql()),
        (ProjectKind::React, StateSolution::ReduxThunkAxios) => Some(react::state::redux_thunk()),
        (ProjectKind::Next, StateSolution::ReactQuery) => Some(next::state::react_query()),
        (ProjectKind::Next, StateSolution::RtkQueryRedux) => Some(next::state::rtk_query()),
        (ProjectKind::Next, StateSolution::Graphql) => Some(next::state::graphql()),
        (ProjectKind::Next, StateSolution::ReduxThunkAxios) => Some(next::state::redux_thunk()),
    }
}

/// Bundle for the selected UI library, or `None` when the user opted out.
pub fn ui_library_bundle(kind: ProjectKind, library: UiLibrary) -> Option<PluginBundle> {
    match (kind, library) {
        (_, UiLibrary::None) => None,
        (ProjectKind::React, UiLibrary::Mui) => Some(react::ui::mui()),
        (ProjectKind::React, UiLibrary::AntDesign) => Some(react::ui::ant_design()),
        (ProjectKind::Next, UiLibrary::Mui) => Some(next::ui::mui()),
        (ProjectKind::Next, UiLibrary::AntDesign) => Some(next::ui::ant_design()),
    }
}

/// Bundle wiring i18next for the detected project kind.
pub fn i18n_bundle(kind: ProjectKind) -> PluginBundle {
    match kind {
        ProjectKind::React => react::i18n(),
        ProjectKind::Next => next::i18n(),
    }
}
