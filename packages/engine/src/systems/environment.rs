//! Tray environment - static bounded geometry plus the shadow caster set.
//!
//! Built once per scene. Ground, four walls and roof are planes the physics
//! world clamps bodies against; the shadow registry tells the scene which
//! meshes cast shadows.

use std::collections::HashSet;

use crate::api::host::MeshId;
use crate::core::Vec3;
use crate::domain::config::TrayDimensions;

/// Inner faces of the tray box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrayBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl TrayBounds {
    pub fn from_dimensions(dims: &TrayDimensions) -> Self {
        let half_w = dims.width / 2.0 - dims.wall_inset;
        let half_d = dims.depth / 2.0 - dims.wall_inset;
        Self {
            min: Vec3::new(-half_w, dims.floor_y, -half_d),
            max: Vec3::new(half_w, dims.roof_y, half_d),
        }
    }

    /// True if a sphere at `pos` lies fully inside
    pub fn contains_sphere(&self, pos: Vec3, radius: f32) -> bool {
        pos.x - radius >= self.min.x - 1e-4
            && pos.x + radius <= self.max.x + 1e-4
            && pos.y - radius >= self.min.y - 1e-4
            && pos.y + radius <= self.max.y + 1e-4
            && pos.z - radius >= self.min.z - 1e-4
            && pos.z + radius <= self.max.z + 1e-4
    }
}

#[derive(Default)]
pub struct ShadowCasters {
    meshes: HashSet<MeshId>,
}

impl ShadowCasters {
    pub fn add(&mut self, mesh: MeshId) {
        self.meshes.insert(mesh);
    }

    pub fn remove(&mut self, mesh: MeshId) -> bool {
        self.meshes.remove(&mesh)
    }

    pub fn contains(&self, mesh: MeshId) -> bool {
        self.meshes.contains(&mesh)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[derive(Default)]
pub struct TrayEnvironment {
    bounds: Option<TrayBounds>,
    shadows: ShadowCasters,
}

impl TrayEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tray geometry. Later calls return the first result unchanged.
    pub fn build(&mut self, dims: &TrayDimensions) -> TrayBounds {
        match self.bounds {
            Some(bounds) => bounds,
            None => {
                let bounds = TrayBounds::from_dimensions(dims);
                log::debug!("tray built: {:?} .. {:?}", bounds.min, bounds.max);
                self.bounds = Some(bounds);
                bounds
            }
        }
    }

    pub fn bounds(&self) -> Option<TrayBounds> {
        self.bounds
    }

    pub fn is_built(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn shadows(&self) -> &ShadowCasters {
        &self.shadows
    }

    pub fn shadows_mut(&mut self) -> &mut ShadowCasters {
        &mut self.shadows
    }
}
