// Colorbrowser presentation strategies
// Each browser owns its query state and rebuild logic; both read the shared
// catalog and never mutate it.

pub mod grid_browser;
pub mod tab_browser;
