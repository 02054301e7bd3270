//! Home page controller.
//!
//! Two show/hide toggles: the daily-special banner and the team panel.

use askama::Template;

use crate::catalog::Catalog;
use crate::views::{SpecialBannerTemplate, SpecialView, TeamPanelTemplate};

/// The home page: special banner and team panel visibility.
#[derive(Debug)]
pub struct HomePage {
    catalog: Catalog,
    special_visible: bool,
    team_visible: bool,
}

impl HomePage {
    /// Create the page with both panels hidden.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            special_visible: false,
            team_visible: false,
        }
    }

    /// Flip the special banner and return its re-rendered fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn toggle_special(&mut self) -> askama::Result<String> {
        self.special_visible = !self.special_visible;
        self.render_special_banner()
    }

    /// The special banner in its current state.
    ///
    /// When visible, the banner names the catalog's daily special and its
    /// price; an empty catalog renders the hidden state.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn render_special_banner(&self) -> askama::Result<String> {
        let special = if self.special_visible {
            self.catalog.daily_special().map(SpecialView::from)
        } else {
            None
        };
        SpecialBannerTemplate { special }.render()
    }

    /// Flip the team panel and return its re-rendered fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn toggle_team(&mut self) -> askama::Result<String> {
        self.team_visible = !self.team_visible;
        self.render_team_panel()
    }

    /// The team panel (and its toggle button label) in its current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn render_team_panel(&self) -> askama::Result<String> {
        TeamPanelTemplate {
            visible: self.team_visible,
        }
        .render()
    }

    /// Whether the special banner is currently shown.
    #[must_use]
    pub const fn special_visible(&self) -> bool {
        self.special_visible
    }

    /// Whether the team panel is currently shown.
    #[must_use]
    pub const fn team_visible(&self) -> bool {
        self.team_visible
    }
}
