//! App Core for the colors browser.
//!
//! Central struct holding the catalog, both browsers and the ambient
//! engines, plus the navigation state between the two screens.

use std::sync::Arc;

use crate::browsers::grid_browser::{GridBrowserTrait, GridSearchBrowser};
use crate::browsers::tab_browser::{TabBrowserTrait, TabFilterBrowser};
use crate::catalog::ColorCatalog;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::browse::Screen;
use crate::types::view::ViewTree;

/// Central application struct.
///
/// The catalog is shared read-only between the browsers; each browser owns
/// its own query state exclusively.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub catalog: Arc<ColorCatalog>,
    pub grid_browser: GridSearchBrowser,
    pub tab_browser: TabFilterBrowser,
    pub active_screen: Screen,
}

impl App {
    /// Creates a new App: loads settings, builds the catalog (fatal on a
    /// malformed palette) and wires both browsers to it.
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(None);
        let _ = settings_engine.load();

        let catalog = Arc::new(ColorCatalog::load()?);
        let grid_browser = GridSearchBrowser::new(catalog.clone());
        let tab_browser = TabFilterBrowser::new(catalog.clone());

        let settings = settings_engine.get_settings();
        let theme_engine = ThemeEngine::new(settings.appearance.theme.clone());
        let active_screen = settings.appearance.start_screen;

        Ok(Self {
            settings_engine,
            theme_engine,
            catalog,
            grid_browser,
            tab_browser,
            active_screen,
        })
    }

    /// Startup sequence: re-apply loaded settings to the theme engine.
    pub fn startup(&mut self) {
        let settings = self.settings_engine.get_settings().clone();
        self.theme_engine.set_theme(settings.appearance.theme);
        self.active_screen = settings.appearance.start_screen;
    }

    /// Navigation-bar selection of the active browser.
    pub fn switch_screen(&mut self, screen: Screen) {
        self.active_screen = screen;
    }

    /// View tree of whichever browser is currently shown.
    pub fn render_active(&self) -> ViewTree {
        match self.active_screen {
            Screen::GridSearch => self.grid_browser.render(),
            Screen::TabFilter => self.tab_browser.render(),
        }
    }
}
