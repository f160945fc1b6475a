use crate::api::host::BodyPose;

use super::TrayCore;

/// Rebuild the pose list from the bodies of every die, in roll order.
pub(super) fn collect_poses(world: &mut TrayCore) {
    world.poses.clear();
    for entity in world.registry.iter() {
        for part in entity.bodies() {
            let Some(body) = world.physics.body(part.body) else {
                continue;
            };
            world.poses.push(BodyPose {
                mesh: part.mesh,
                casts_shadow: world.environment.shadows().contains(part.mesh),
                position: body.pos,
                rotation: body.rotation,
            });
        }
    }
}

/// Flatten poses for a typed-array upload: 8 floats per body.
///
/// Layout: mesh id, shadow flag, position xyz, rotation xyz.
pub(crate) const POSE_STRIDE: usize = 8;

pub(crate) fn write_pose_buffer(poses: &[BodyPose], out: &mut Vec<f32>) {
    out.clear();
    out.reserve(poses.len() * POSE_STRIDE);
    for pose in poses {
        out.push(pose.mesh.0 as f32);
        out.push(if pose.casts_shadow { 1.0 } else { 0.0 });
        out.push(pose.position.x);
        out.push(pose.position.y);
        out.push(pose.position.z);
        out.push(pose.rotation.x);
        out.push(pose.rotation.y);
        out.push(pose.rotation.z);
    }
}
