use crate::core::Vec3;
use crate::domain::style::BodyDesc;

/// Physics-world handle of a body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec3,
    /// Velocity (units per second)
    pub velocity: Vec3,
    /// Euler rotation (radians)
    pub rotation: Vec3,
    /// Angular velocity (radians per second, per axis)
    pub angular_vel: Vec3,
    pub mass: f32,
    /// Solid-sphere inertia (I = 2/5 m r²)
    pub moment_of_inertia: f32,
    /// Is body active (simulated)?
    pub active: bool,
    pub id: BodyId,

    // === Shape ===
    pub radius: f32,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl RigidBody {
    pub fn new(id: BodyId, desc: &BodyDesc, pos: Vec3) -> Self {
        let mass = desc.mass.max(0.001);
        let radius = desc.radius.max(0.01);
        // Ensure minimum moment to avoid division issues
        let moment_of_inertia = (0.4 * mass * radius * radius).max(0.001);

        Self {
            pos,
            velocity: Vec3::zero(),
            rotation: Vec3::zero(),
            angular_vel: Vec3::zero(),
            mass,
            moment_of_inertia,
            active: true,
            id,
            radius,
            restitution: desc.restitution.clamp(0.0, 1.0),
        }
    }

    /// Linear speed, the settlement input
    #[inline]
    pub fn linear_speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Apply impulse at center of mass
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity = self.velocity + impulse * (1.0 / self.mass);
    }

    /// Apply angular impulse (rotational kick)
    pub fn apply_torque(&mut self, torque: Vec3) {
        self.angular_vel = self.angular_vel + torque * (1.0 / self.moment_of_inertia);
    }

    /// Teleport and stop all motion
    pub fn reset_motion(&mut self, pos: Vec3, rotation: Vec3) {
        self.pos = pos;
        self.rotation = rotation;
        self.velocity = Vec3::zero();
        self.angular_vel = Vec3::zero();
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die() -> RigidBody {
        RigidBody::new(BodyId(1), &BodyDesc::new(0.5, 2.0, 0.3), Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn impulse_scales_by_mass() {
        let mut body = die();
        body.apply_impulse(Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(body.velocity, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(body.linear_speed(), 2.0);
    }

    #[test]
    fn reset_motion_stops_the_body() {
        let mut body = die();
        body.apply_impulse(Vec3::new(1.0, 1.0, 1.0));
        body.apply_torque(Vec3::new(0.0, 1.0, 0.0));
        body.reset_motion(Vec3::new(2.0, 3.0, 4.0), Vec3::zero());
        assert_eq!(body.linear_speed(), 0.0);
        assert_eq!(body.angular_vel, Vec3::zero());
        assert_eq!(body.pos, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn restitution_is_clamped() {
        let mut body = die();
        body.set_restitution(3.0);
        assert_eq!(body.restitution, 1.0);
    }
}
