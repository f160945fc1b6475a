//! Scene host for the JS side.
//!
//! The wasm facade cannot hand out Rust trait objects, so it mounts a
//! [`BufferScene`]: meshes are plain ids and every spawn or dispose is queued
//! as a [`SceneEvent`] that JS drains once per frame and mirrors in its own
//! renderer. Poses travel separately through the facade's float buffer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use crate::api::host::{BodyPose, InteractionHost, MeshId, TrayScene};
use crate::core::TrayError;
use crate::domain::dice::DieKind;
use crate::domain::style::BodyDesc;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneEvent {
    Spawn { mesh: u32, kind: DieKind, radius: f32 },
    Dispose { mesh: u32 },
}

/// Handle the facade keeps after giving the scene to the core
#[derive(Clone, Default)]
pub struct SceneLink {
    events: Rc<RefCell<Vec<SceneEvent>>>,
    live: Rc<Cell<bool>>,
}

impl SceneLink {
    pub fn new() -> Self {
        let link = Self::default();
        link.live.set(true);
        link
    }

    pub fn take_events(&self) -> Vec<SceneEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Host lost its rendering context; commands turn into no-ops.
    pub fn set_live(&self, live: bool) {
        self.live.set(live);
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}

pub struct BufferScene {
    link: SceneLink,
    next_mesh: u32,
    rendered_frames: u64,
}

impl BufferScene {
    pub fn new(link: SceneLink) -> Self {
        Self {
            link,
            next_mesh: 1,
            rendered_frames: 0,
        }
    }

    pub fn rendered_frames(&self) -> u64 {
        self.rendered_frames
    }
}

impl TrayScene for BufferScene {
    fn is_live(&self) -> bool {
        self.link.is_live()
    }

    fn spawn_mesh(&mut self, kind: DieKind, desc: &BodyDesc) -> Result<MeshId, TrayError> {
        if !self.link.is_live() {
            return Err(TrayError::SceneUnavailable);
        }
        let mesh = self.next_mesh;
        self.next_mesh += 1;
        self.link.events.borrow_mut().push(SceneEvent::Spawn {
            mesh,
            kind,
            radius: desc.radius,
        });
        Ok(MeshId(mesh))
    }

    fn dispose_mesh(&mut self, mesh: MeshId) {
        self.link
            .events
            .borrow_mut()
            .push(SceneEvent::Dispose { mesh: mesh.0 });
    }

    fn render(&mut self, _poses: &[BodyPose]) {
        self.rendered_frames += 1;
    }
}

/// Forwards interaction suppression to a JS callback taking one boolean
pub struct JsInteractionHost {
    callback: js_sys::Function,
}

impl JsInteractionHost {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl InteractionHost for JsInteractionHost {
    fn set_interaction_suppressed(&mut self, suppressed: bool) {
        let arg = wasm_bindgen::JsValue::from_bool(suppressed);
        if self.callback.call1(&wasm_bindgen::JsValue::NULL, &arg).is_err() {
            log::warn!("interaction callback threw");
        }
    }
}
