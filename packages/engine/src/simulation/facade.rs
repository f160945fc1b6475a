use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::api::buffer_scene::{BufferScene, JsInteractionHost, SceneLink};
use crate::core::TrayError;
use crate::domain::config::TrayConfig;
use crate::domain::dice::DieKind;
use crate::domain::style::StyleSheet;

use super::perf_stats::TrayStats;
use super::render_extract::{write_pose_buffer, POSE_STRIDE};
use super::TrayCore;

/// Style used when the host has not registered any
pub const DEFAULT_STYLE: &str = "standard";

fn js_err(e: TrayError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct DiceTray {
    core: TrayCore,
    styles: HashMap<String, StyleSheet>,
    link: Option<SceneLink>,
    pose_buffer: Vec<f32>,
}

impl DiceTray {
    fn from_config(config: TrayConfig) -> Result<DiceTray, JsValue> {
        let core = TrayCore::new(config).map_err(js_err)?;
        let mut styles = HashMap::new();
        styles.insert(DEFAULT_STYLE.to_string(), StyleSheet::standard(DEFAULT_STYLE));
        Ok(Self {
            core,
            styles,
            link: None,
            pose_buffer: Vec::new(),
        })
    }
}

#[wasm_bindgen]
impl DiceTray {
    /// Create a tray with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DiceTray, JsValue> {
        Self::from_config(TrayConfig::default())
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<DiceTray, JsValue> {
        let config = TrayConfig::from_json(&json).map_err(js_err)?;
        Self::from_config(config)
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    // === SCENE ===

    /// Mount a fresh scene. Spawns and disposals show up in `take_scene_events_json`.
    pub fn mount(&mut self) {
        let link = SceneLink::new();
        self.core.mount(Box::new(BufferScene::new(link.clone())));
        self.link = Some(link);
    }

    pub fn unmount(&mut self) {
        self.core.unmount();
        self.link = None;
    }

    /// Mark the renderer as lost (false) or restored (true)
    pub fn set_scene_live(&mut self, live: bool) {
        if let Some(link) = &self.link {
            link.set_live(live);
        }
    }

    /// Drain queued spawn/dispose events as a JSON array
    pub fn take_scene_events_json(&mut self) -> String {
        let events = self.link.as_ref().map(|l| l.take_events()).unwrap_or_default();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    // === STYLES ===

    /// Register (or replace) a style sheet from JSON. Returns its name.
    pub fn register_style(&mut self, json: String) -> Result<String, JsValue> {
        let sheet = StyleSheet::from_json(&json).map_err(js_err)?;
        let name = crate::domain::style::DieStyle::name(&sheet).to_string();
        self.styles.insert(name.clone(), sheet);
        Ok(name)
    }

    // === COMMANDS ===

    /// Roll a die. Returns its id, or 0 when no scene is mounted.
    pub fn add_die(&mut self, style: &str, kind: &str) -> Result<u32, JsValue> {
        let kind: DieKind = kind.parse().map_err(js_err)?;
        let sheet = self
            .styles
            .get(style)
            .ok_or_else(|| js_err(TrayError::UnknownStyle(style.to_string())))?;
        let id = self.core.add_die(sheet, kind).map_err(js_err)?;
        Ok(id.map_or(0, |id| id.0))
    }

    pub fn clear_all(&mut self) {
        self.core.clear_all();
    }

    pub fn reroll_all(&mut self) {
        self.core.reroll_all();
    }

    pub fn set_open(&mut self, open: bool) {
        self.core.set_open(open);
    }

    pub fn on_pointer_down(&mut self) {
        self.core.on_pointer_down();
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    /// Called with `true` while the tray owns the pointer, `false` after
    pub fn set_interaction_callback(&mut self, callback: js_sys::Function) {
        self.core
            .set_interaction_host(Box::new(JsInteractionHost::new(callback)));
    }

    // === FRAME ===

    /// Run one animation frame. Returns true if the tray stepped and rendered;
    /// the pose buffer is only refreshed then.
    pub fn frame(&mut self) -> bool {
        let stepped = self.core.frame().should_step();
        if stepped {
            write_pose_buffer(self.core.poses(), &mut self.pose_buffer);
        }
        stepped
    }

    /// Pointer to the pose buffer (f32 x pose_stride per body)
    pub fn pose_ptr(&self) -> *const f32 {
        self.pose_buffer.as_ptr()
    }

    pub fn pose_len(&self) -> usize {
        self.pose_buffer.len()
    }

    pub fn pose_stride(&self) -> usize {
        POSE_STRIDE
    }

    // === STATE ===

    pub fn get_stats(&self) -> TrayStats {
        self.core.stats()
    }

    #[wasm_bindgen(getter)]
    pub fn die_count(&self) -> u32 {
        self.core.die_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn awake_count(&self) -> u32 {
        self.core.awake_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn visible(&self) -> bool {
        self.core.visible()
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.core.is_mounted()
    }
}
