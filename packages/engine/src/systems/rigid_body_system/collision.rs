use crate::core::Vec3;
use crate::domain::config::PhysicsConfig;
use crate::rigid_body::RigidBody;
use crate::systems::environment::TrayBounds;

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

#[inline]
fn get(v: &Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

#[inline]
fn set(v: &mut Vec3, axis: Axis, value: f32) {
    match axis {
        Axis::X => v.x = value,
        Axis::Y => v.y = value,
        Axis::Z => v.z = value,
    }
}

/// Reflected normal speed, zeroed below the bounce cutoff so resting contact stays put
#[inline]
fn bounce(v: f32, restitution: f32, cutoff: f32) -> f32 {
    let out = -v * restitution;
    if out.abs() < cutoff {
        0.0
    } else {
        out
    }
}

/// Damp every component except `normal` by surface friction
fn apply_friction(body: &mut RigidBody, normal: Axis, mu: f32, dt: f32) {
    let keep = 1.0 / (1.0 + mu.max(0.0) * dt);
    let n = get(&body.velocity, normal);
    body.velocity = body.velocity * keep;
    set(&mut body.velocity, normal, n);
    body.angular_vel = body.angular_vel * keep;
}

/// Keep a body inside the tray. Returns true when it touched the floor.
///
/// Surface friction is only applied when `friction` is set, once per step.
pub(super) fn resolve_bounds(
    body: &mut RigidBody,
    bounds: &TrayBounds,
    cfg: &PhysicsConfig,
    friction: bool,
) -> bool {
    let dt = cfg.timestep_s;
    let mut on_floor = false;

    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let lo = get(&bounds.min, axis) + body.radius;
        let hi = get(&bounds.max, axis) - body.radius;
        let p = get(&body.pos, axis);
        let v = get(&body.velocity, axis);

        // Floor/roof are the y faces, everything else is a wall.
        let (lo_mu, hi_mu) = match axis {
            Axis::Y => (cfg.floor_friction, cfg.roof_friction),
            _ => (cfg.wall_friction, cfg.wall_friction),
        };

        if p < lo {
            set(&mut body.pos, axis, lo);
            if v < 0.0 {
                set(&mut body.velocity, axis, bounce(v, body.restitution, cfg.bounce_cutoff));
            }
            if friction {
                apply_friction(body, axis, lo_mu, dt);
            }
            if matches!(axis, Axis::Y) {
                on_floor = true;
            }
        } else if p > hi {
            set(&mut body.pos, axis, hi);
            if v > 0.0 {
                set(&mut body.velocity, axis, bounce(v, body.restitution, cfg.bounce_cutoff));
            }
            if friction {
                apply_friction(body, axis, hi_mu, dt);
            }
        }
    }

    on_floor
}

/// Position-only clamp, used after pair separation
pub(super) fn clamp_inside(body: &mut RigidBody, bounds: &TrayBounds) {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        let lo = get(&bounds.min, axis) + body.radius;
        let hi = get(&bounds.max, axis) - body.radius;
        let p = get(&body.pos, axis);
        // A body wider than the tray sits in the middle.
        let clamped = if lo > hi { (lo + hi) * 0.5 } else { p.clamp(lo, hi) };
        set(&mut body.pos, axis, clamped);
    }
}

/// Separate two overlapping spheres and exchange normal velocity when approaching.
pub(super) fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody, cfg: &PhysicsConfig) {
    let delta = b.pos - a.pos;
    let min_dist = a.radius + b.radius;
    let dist2 = delta.length_squared();
    if dist2 >= min_dist * min_dist {
        return;
    }

    let dist = dist2.sqrt();
    let normal = if dist > 1e-6 { delta * (1.0 / dist) } else { Vec3::new(1.0, 0.0, 0.0) };
    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_sum = inv_a + inv_b;

    let overlap = min_dist - dist;
    a.pos = a.pos - normal * (overlap * inv_a / inv_sum);
    b.pos = b.pos + normal * (overlap * inv_b / inv_sum);

    let closing = (b.velocity - a.velocity).dot(normal);
    if closing >= 0.0 {
        return;
    }
    let e = if -closing < cfg.bounce_cutoff { 0.0 } else { a.restitution.min(b.restitution) };
    let j = -(1.0 + e) * closing / inv_sum;
    a.velocity = a.velocity - normal * (j * inv_a);
    b.velocity = b.velocity + normal * (j * inv_b);
}
