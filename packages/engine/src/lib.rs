//! Dice Tray Engine - physics dice tray with settle detection and a gated render loop
//!
//! Architecture:
//! - core/          - Math, timers, clock, errors
//! - domain/        - Die kinds, styles, configuration
//! - systems/       - Physics, environment, settlement, render gate, view state
//! - simulation/    - Orchestration only (TrayCore)
//! - api/           - Host seams and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub mod tray {
    pub use crate::simulation::*;
}

// Short paths for the physics collaborators
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    api::console_log::install(level);

    web_sys::console::log_1(&"🎲 Dice Tray WASM Engine initialized!".into());
}

/// Change the console log level ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = api::console_log::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level: {level}")))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::DiceTray;
pub use core::TrayError;
pub use domain::config::TrayConfig;
pub use domain::dice::DieKind;
pub use simulation::TrayCore;

// Export die kind ids for JS
#[wasm_bindgen]
pub fn die_d4() -> u8 { domain::dice::DIE_D4 }
#[wasm_bindgen]
pub fn die_d6() -> u8 { domain::dice::DIE_D6 }
#[wasm_bindgen]
pub fn die_d8() -> u8 { domain::dice::DIE_D8 }
#[wasm_bindgen]
pub fn die_d10() -> u8 { domain::dice::DIE_D10 }
#[wasm_bindgen]
pub fn die_d12() -> u8 { domain::dice::DIE_D12 }
#[wasm_bindgen]
pub fn die_d20() -> u8 { domain::dice::DIE_D20 }
#[wasm_bindgen]
pub fn die_d100() -> u8 { domain::dice::DIE_D100 }

/// Kind name for a die id ("d4" .. "d100"), empty for unknown ids
#[wasm_bindgen]
pub fn die_name(id: u8) -> String {
    DieKind::from_id(id).map(|k| k.as_str().to_string()).unwrap_or_default()
}
