//! Theme Engine — light/dark chrome for the colors browser shell.
//!
//! The browsers themselves are theme-agnostic (tiles carry their own
//! colors); the theme drives the surrounding chrome: app bar, canvas,
//! navigation bar, input fields.

use std::collections::HashMap;

use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> &ThemeMode;
    /// Flips between light and dark (the app-bar toggle button).
    fn toggle_theme(&mut self);
    fn detect_system_theme(&self) -> ThemeMode;
    fn get_css_variables(&self) -> HashMap<String, String>;
}

/// Dark chrome colors.
struct DarkPalette;
impl DarkPalette {
    const CANVAS: &'static str = "#1a1c1e";
    const SURFACE: &'static str = "#2b2d30";
    const TEXT: &'static str = "#e3e3e6";
    const TEXT_MUTED: &'static str = "#9a9da1";
    const BORDER: &'static str = "#3c3f43";
    const INPUT_BG: &'static str = "#232528";
}

/// Light chrome colors.
struct LightPalette;
impl LightPalette {
    const CANVAS: &'static str = "#ffffff";
    const SURFACE: &'static str = "#f2f4f7";
    const TEXT: &'static str = "#1b1c1e";
    const TEXT_MUTED: &'static str = "#5c5f63";
    const BORDER: &'static str = "#d4d7db";
    const INPUT_BG: &'static str = "#ffffff";
}

/// App-bar color, shared by both themes (the shell's signature blue).
const APP_BAR: &str = "#2196f3";
const APP_BAR_TEXT: &str = "#ffffff";

/// The theme engine implementation.
pub struct ThemeEngine {
    current_theme: ThemeMode,
}

impl ThemeEngine {
    /// Creates a new ThemeEngine with the given initial mode.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
        }
    }

    /// Returns the effective theme, resolving `System` to a concrete mode.
    fn effective_theme(&self) -> ThemeMode {
        match &self.current_theme {
            ThemeMode::System => self.detect_system_theme(),
            other => other.clone(),
        }
    }

    fn build_variables(
        canvas: &str,
        surface: &str,
        text: &str,
        text_muted: &str,
        border: &str,
        input_bg: &str,
    ) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("--canvas".into(), canvas.into());
        vars.insert("--surface".into(), surface.into());
        vars.insert("--text".into(), text.into());
        vars.insert("--text-muted".into(), text_muted.into());
        vars.insert("--border".into(), border.into());
        vars.insert("--input-bg".into(), input_bg.into());
        vars.insert("--app-bar".into(), APP_BAR.into());
        vars.insert("--app-bar-text".into(), APP_BAR_TEXT.into());
        vars
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> &ThemeMode {
        &self.current_theme
    }

    fn toggle_theme(&mut self) {
        self.current_theme = match self.effective_theme() {
            ThemeMode::Dark => ThemeMode::Light,
            _ => ThemeMode::Dark,
        };
    }

    fn detect_system_theme(&self) -> ThemeMode {
        // Without a toolkit runtime, fall back to the GTK_THEME environment
        // variable on the desktop.
        if let Ok(gtk_theme) = std::env::var("GTK_THEME") {
            if gtk_theme.to_lowercase().contains("dark") {
                return ThemeMode::Dark;
            }
            return ThemeMode::Light;
        }
        // The original shell started in light mode.
        ThemeMode::Light
    }

    fn get_css_variables(&self) -> HashMap<String, String> {
        match self.effective_theme() {
            ThemeMode::Dark => Self::build_variables(
                DarkPalette::CANVAS,
                DarkPalette::SURFACE,
                DarkPalette::TEXT,
                DarkPalette::TEXT_MUTED,
                DarkPalette::BORDER,
                DarkPalette::INPUT_BG,
            ),
            ThemeMode::Light => Self::build_variables(
                LightPalette::CANVAS,
                LightPalette::SURFACE,
                LightPalette::TEXT,
                LightPalette::TEXT_MUTED,
                LightPalette::BORDER,
                LightPalette::INPUT_BG,
            ),
            // System is already resolved by effective_theme()
            ThemeMode::System => unreachable!(),
        }
    }
}
