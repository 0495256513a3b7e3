//! Colorbrowser — a desktop colors browser with two interfaces over one
//! fixed palette.
//!
//! Entry point: with the `gui` feature, opens the webview window.
//! When built without it, runs an interactive console demo.

#[cfg(feature = "gui")]
fn main() {
    colorbrowser::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Colorbrowser v{} — Demo Mode                 ║", env!("CARGO_PKG_VERSION"));
    println!("║     Browse a fixed palette: grid search and filtered tabs    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_catalog();
    demo_grid_search();
    demo_tab_filter();
    demo_theme();
    demo_settings();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_catalog() {
    use colorbrowser::catalog::ColorCatalog;
    section("Color Catalog");

    let catalog = ColorCatalog::load().expect("Failed to load palette");
    println!("  Loaded {} named colors", catalog.len());
    let first = &catalog.entries()[0];
    println!("  First entry: {} = {}", first.id, first.value);
    println!("  RED_400 = {}", catalog.get("RED_400").unwrap().value);
    println!("  ✓ ColorCatalog OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_grid_search() {
    use std::sync::Arc;
    use colorbrowser::browsers::grid_browser::{GridBrowserTrait, GridSearchBrowser};
    use colorbrowser::catalog::ColorCatalog;
    use colorbrowser::shell::ConsoleShell;
    section("Grid Search Browser (version 1)");

    let catalog = Arc::new(ColorCatalog::load().unwrap());
    let mut browser = GridSearchBrowser::new(catalog);
    let mut shell = ConsoleShell::new();

    browser.submit_query("red", &mut shell);
    println!("  Search \"red\": {} result(s)", browser.state().results.len());

    browser.submit_query("deep", &mut shell);
    println!("  Search \"deep\": {} result(s)", browser.state().results.len());

    let guarded = browser.submit_query("", &mut shell);
    println!("  Search \"\": ran = {} (guarded no-op)", guarded);

    browser.submit_query("no-such-color", &mut shell);
    println!("  Search \"no-such-color\": {} result(s)", browser.state().results.len());
    println!("  ✓ GridSearchBrowser OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_tab_filter() {
    use std::sync::Arc;
    use colorbrowser::browsers::tab_browser::{TabBrowserTrait, TabFilterBrowser};
    use colorbrowser::catalog::ColorCatalog;
    use colorbrowser::shell::{deliver_copy, ConsoleShell};
    section("Tab Filter Browser (version 2)");

    let catalog = Arc::new(ColorCatalog::load().unwrap());
    let mut browser = TabFilterBrowser::new(catalog);
    let mut shell = ConsoleShell::new();

    println!("  Initial tabs: {}", browser.groups().len());

    browser.filter("blue", &mut shell);
    let names: Vec<&str> = browser
        .state()
        .active_groups
        .iter()
        .map(|s| s.as_str())
        .collect();
    println!("  Filter \"blue\" -> {:?}", names);

    let unchanged = !browser.filter("zzz", &mut shell);
    println!("  Filter \"zzz\": tabs unchanged = {}", unchanged);

    browser.filter("ALL", &mut shell);
    println!("  Filter \"ALL\" -> {} tabs restored", browser.state().active_groups.len());

    let first_tile = &browser.groups()[0].entries[0];
    deliver_copy(&mut shell, &first_tile.namespaced());
    println!("  ✓ TabFilterBrowser OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_theme() {
    use colorbrowser::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
    use colorbrowser::types::settings::ThemeMode;
    section("Theme Engine");

    let mut engine = ThemeEngine::new(ThemeMode::Light);
    println!("  Current theme: {:?}", engine.get_theme());

    let vars = engine.get_css_variables();
    println!("  CSS variables ({} total):", vars.len());
    for (k, v) in vars.iter().take(4) {
        println!("    {} = {}", k, v);
    }

    engine.toggle_theme();
    println!("  Toggled to: {:?}", engine.get_theme());
    println!("  ✓ ThemeEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use colorbrowser::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(None);
    let settings = engine.load().unwrap_or_default();
    println!("  Window: {}x{} (min {}x{})",
        settings.window.width, settings.window.height,
        settings.window.min_width, settings.window.min_height);
    println!("  Theme: {:?}", settings.appearance.theme);
    println!("  Start screen: {:?}", settings.appearance.start_screen);
    println!("  Config path: {}", engine.get_config_path());
    println!("  ✓ SettingsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use colorbrowser::app::App;
    use colorbrowser::types::browse::Screen;
    use colorbrowser::types::view::ViewTree;
    section("App Core (full lifecycle)");

    let mut app = App::new().expect("Failed to initialize Colorbrowser");
    app.startup();
    println!("  Startup: settings → theme → screen {:?}", app.active_screen);

    app.switch_screen(Screen::GridSearch);
    if let ViewTree::Grid { items, status, .. } = app.render_active() {
        println!("  Grid screen: {} tile(s), status \"{}\"", items.len(), status);
    }

    app.switch_screen(Screen::TabFilter);
    if let ViewTree::Tabs { tabs } = app.render_active() {
        println!("  Tabs screen: {} tab(s)", tabs.len());
    }
    println!("  ✓ App Core OK");
}
