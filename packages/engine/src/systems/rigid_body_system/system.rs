use std::f32::consts::TAU;

use crate::core::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::domain::style::BodyDesc;
use crate::rigid_body::{BodyId, RigidBody};
use crate::systems::environment::TrayBounds;

use super::collision::{clamp_inside, resolve_bounds, resolve_pair};

/// Bounds + pair passes per step
const CONTACT_PASSES: usize = 8;

/// Manages all die bodies in the tray
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    next_id: u32,
    bounds: Option<TrayBounds>,
    config: PhysicsConfig,
}

impl RigidBodySystem {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            bounds: None,
            config,
        }
    }

    pub fn set_bounds(&mut self, bounds: TrayBounds) {
        self.bounds = Some(bounds);
    }

    pub fn bounds(&self) -> Option<TrayBounds> {
        self.bounds
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Add a new body at rest.
    pub fn add_body(&mut self, desc: &BodyDesc, pos: Vec3) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let mut body = RigidBody::new(id, desc, pos);
        if let Some(bounds) = &self.bounds {
            clamp_inside(&mut body, bounds);
        }
        self.bodies.push(body);
        id
    }

    /// Remove a body by ID. Returns false if it was already gone.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    /// Remove all bodies.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Linear speed of a body (0 for unknown ids)
    pub fn linear_speed(&self, id: BodyId) -> f32 {
        self.body(id).map(RigidBody::linear_speed).unwrap_or(0.0)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance one fixed step.
    pub fn step(&mut self) {
        let cfg = &self.config;
        let dt = cfg.timestep_s;
        let spin_keep = 1.0 / (1.0 + cfg.angular_damping.max(0.0) * dt);

        for body in self.bodies.iter_mut() {
            if !body.active {
                continue;
            }

            body.velocity += cfg.gravity * dt;
            // Clamp to keep contacts stable.
            body.velocity = body.velocity.clamp_length(cfg.max_speed);
            body.pos += body.velocity * dt;

            body.rotation += body.angular_vel * dt;
            body.rotation = Vec3::new(
                body.rotation.x.rem_euclid(TAU),
                body.rotation.y.rem_euclid(TAU),
                body.rotation.z.rem_euclid(TAU),
            );
            body.angular_vel = body.angular_vel * spin_keep;
        }

        // Contacts are relaxed over a few passes so a die resting on another
        // hands its weight down to the floor instead of sinking forever.
        for pass in 0..CONTACT_PASSES {
            if let Some(bounds) = &self.bounds {
                for body in self.bodies.iter_mut().filter(|b| b.active) {
                    resolve_bounds(body, bounds, cfg, pass == 0);
                }
            }

            // Dice are few; all pairs is fine.
            let n = self.bodies.len();
            for i in 0..n {
                let (head, tail) = self.bodies.split_at_mut(i + 1);
                let a = &mut head[i];
                if !a.active {
                    continue;
                }
                for b in tail.iter_mut().filter(|b| b.active) {
                    resolve_pair(a, b, cfg);
                }
            }
        }

        if let Some(bounds) = &self.bounds {
            for body in self.bodies.iter_mut() {
                resolve_bounds(body, bounds, cfg, false);
                clamp_inside(body, bounds);
            }
        }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::TrayDimensions;

    fn tray() -> RigidBodySystem {
        let mut system = RigidBodySystem::default();
        system.set_bounds(TrayBounds::from_dimensions(&TrayDimensions::default()));
        system
    }

    fn d6() -> BodyDesc {
        BodyDesc::new(0.5, 1.0, 0.3)
    }

    #[test]
    fn dropped_body_comes_to_rest_on_floor() {
        let mut system = tray();
        let id = system.add_body(&d6(), Vec3::new(0.0, 5.0, 0.0));
        system.body_mut(id).unwrap().apply_impulse(Vec3::new(3.0, 0.0, -2.0));

        for _ in 0..600 {
            system.step();
        }

        let body = system.body(id).unwrap();
        assert!(body.linear_speed() < 0.01, "speed {}", body.linear_speed());
        assert!((body.pos.y - (0.2 + 0.5)).abs() < 1e-3, "y {}", body.pos.y);
    }

    #[test]
    fn fast_body_never_leaves_tray() {
        let mut system = tray();
        let id = system.add_body(&d6(), Vec3::new(0.0, 2.0, 0.0));
        system.body_mut(id).unwrap().apply_impulse(Vec3::new(500.0, 300.0, -400.0));
        let bounds = system.bounds().unwrap();
        for _ in 0..240 {
            system.step();
            let body = system.body(id).unwrap();
            assert!(bounds.contains_sphere(body.pos, body.radius));
        }
    }

    #[test]
    fn overlapping_bodies_are_pushed_apart() {
        let mut system = tray();
        let a = system.add_body(&d6(), Vec3::new(0.0, 0.7, 0.0));
        let b = system.add_body(&d6(), Vec3::new(0.2, 0.7, 0.0));
        system.step();
        let pa = system.body(a).unwrap().pos;
        let pb = system.body(b).unwrap().pos;
        assert!((pb - pa).length() >= 1.0 - 1e-3);
    }

    #[test]
    fn upright_stack_comes_to_rest() {
        let mut system = tray();
        let below = system.add_body(&d6(), Vec3::new(0.0, 0.7, 0.0));
        let above = system.add_body(&d6(), Vec3::new(0.0, 1.7, 0.0));

        for _ in 0..120 {
            system.step();
        }

        for id in [below, above] {
            let speed = system.linear_speed(id);
            assert!(speed < 0.01, "body {id:?} speed {speed}");
        }
        let gap = system.body(above).unwrap().pos.y - system.body(below).unwrap().pos.y;
        assert!((gap - 1.0).abs() < 0.05, "gap {gap}");
    }

    #[test]
    fn remove_and_clear() {
        let mut system = tray();
        let a = system.add_body(&d6(), Vec3::new(0.0, 1.0, 0.0));
        let b = system.add_body(&d6(), Vec3::new(2.0, 1.0, 0.0));
        assert_ne!(a, b);
        assert!(system.remove_body(a));
        assert!(!system.remove_body(a));
        assert_eq!(system.linear_speed(a), 0.0);
        assert_eq!(system.body_count(), 1);
        system.clear();
        assert_eq!(system.body_count(), 0);
    }
}
