use serde::{Deserialize, Serialize};

use super::browse::Screen;

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub window: WindowMetrics,
    #[serde(default)]
    pub appearance: AppearanceSettings,
}

/// Window geometry for the desktop shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowMetrics {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            width: 562,
            height: 720,
            min_width: 245,
            min_height: 406,
        }
    }
}

/// Appearance and startup-screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub start_screen: Screen,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            start_screen: Screen::TabFilter,
        }
    }
}

/// Theme mode selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
    System,
}
