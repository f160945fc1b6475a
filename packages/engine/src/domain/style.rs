//! Die styles: how a kind turns into a body.
//!
//! A style resolves a [`DieKind`] to physical parameters and asks the scene
//! for a matching mesh. Style sheets are plain JSON so the host can ship its
//! own catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::host::{MeshId, TrayScene};
use crate::core::TrayError;
use crate::domain::dice::DieKind;

/// Physical description of a single die body
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    /// Collision radius (dice are treated as spheres against each other)
    pub radius: f32,
    pub mass: f32,
    /// Bounciness (0.0 = dead, 1.0 = elastic)
    pub restitution: f32,
}

impl BodyDesc {
    pub const fn new(radius: f32, mass: f32, restitution: f32) -> Self {
        Self { radius, mass, restitution }
    }
}

/// A freshly created die instance: scene mesh plus its physical description
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DieInstance {
    pub mesh: MeshId,
    pub desc: BodyDesc,
}

pub trait DieStyle {
    fn name(&self) -> &str;

    /// Fails when the style cannot produce `kind`, or the scene refuses the mesh.
    fn create_instance(
        &self,
        kind: DieKind,
        scene: &mut dyn TrayScene,
    ) -> Result<DieInstance, TrayError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    name: String,
    bodies: HashMap<DieKind, BodyDesc>,
}

#[derive(Deserialize)]
struct StyleSheetJson {
    name: String,
    dice: HashMap<String, BodyDesc>,
}

impl StyleSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bodies: HashMap::new(),
        }
    }

    /// Every kind with the stock proportions
    pub fn standard(name: impl Into<String>) -> Self {
        let mut sheet = Self::new(name);
        sheet.insert(DieKind::D4, BodyDesc::new(0.45, 1.0, 0.3));
        sheet.insert(DieKind::D6, BodyDesc::new(0.5, 1.0, 0.3));
        sheet.insert(DieKind::D8, BodyDesc::new(0.5, 1.0, 0.3));
        sheet.insert(DieKind::D10, BodyDesc::new(0.5, 1.0, 0.3));
        sheet.insert(DieKind::D12, BodyDesc::new(0.55, 1.2, 0.3));
        sheet.insert(DieKind::D20, BodyDesc::new(0.6, 1.2, 0.3));
        sheet.insert(DieKind::D100, BodyDesc::new(0.5, 1.0, 0.3));
        sheet
    }

    pub fn from_json(json: &str) -> Result<Self, TrayError> {
        let raw: StyleSheetJson = serde_json::from_str(json)?;
        let mut sheet = Self::new(raw.name);
        for (key, desc) in raw.dice {
            let kind: DieKind = key.parse()?;
            if !(desc.radius > 0.0 && desc.mass > 0.0) {
                return Err(TrayError::InvalidConfig(format!(
                    "style {} {}: radius and mass must be positive",
                    sheet.name, kind
                )));
            }
            sheet.insert(kind, desc);
        }
        Ok(sheet)
    }

    pub fn insert(&mut self, kind: DieKind, desc: BodyDesc) {
        let desc = BodyDesc {
            restitution: desc.restitution.clamp(0.0, 1.0),
            ..desc
        };
        self.bodies.insert(kind, desc);
    }

    pub fn body(&self, kind: DieKind) -> Option<&BodyDesc> {
        self.bodies.get(&kind)
    }
}

impl DieStyle for StyleSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn create_instance(
        &self,
        kind: DieKind,
        scene: &mut dyn TrayScene,
    ) -> Result<DieInstance, TrayError> {
        let desc = *self.body(kind).ok_or_else(|| TrayError::StyleMissingKind {
            style: self.name.clone(),
            kind,
        })?;
        let mesh = scene.spawn_mesh(kind, &desc)?;
        Ok(DieInstance { mesh, desc })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_sheet_covers_every_kind() {
        let sheet = StyleSheet::standard("galaxy");
        for kind in DieKind::ALL {
            assert!(sheet.body(kind).is_some(), "missing {kind}");
        }
    }

    #[test]
    fn json_sheet_parses_kind_keys() {
        let sheet = StyleSheet::from_json(
            r#"{"name":"iron","dice":{"d6":{"radius":0.5,"mass":2.0,"restitution":1.5}}}"#,
        )
        .expect("style should parse");
        assert_eq!(sheet.name(), "iron");
        let d6 = sheet.body(DieKind::D6).expect("d6 body");
        assert_eq!(d6.mass, 2.0);
        assert_eq!(d6.restitution, 1.0);
        assert!(sheet.body(DieKind::D20).is_none());
    }

    #[test]
    fn json_sheet_rejects_unknown_kind() {
        let err = StyleSheet::from_json(
            r#"{"name":"iron","dice":{"d7":{"radius":0.5,"mass":1.0,"restitution":0.3}}}"#,
        )
        .unwrap_err();
        assert_eq!(err, TrayError::UnknownKind("d7".to_string()));
    }

    #[test]
    fn json_sheet_rejects_massless_body() {
        let err = StyleSheet::from_json(
            r#"{"name":"iron","dice":{"d6":{"radius":0.5,"mass":0.0,"restitution":0.3}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TrayError::InvalidConfig(_)));
    }
}
