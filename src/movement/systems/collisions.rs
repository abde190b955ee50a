//! Movement domain: ground detection against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSensor};

/// How far below the feet the probe reaches
const GROUND_PROBE_DISTANCE: f32 = 0.1;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &Collider, &mut GroundSensor)>,
) {
    // Only Ground layer entities count (not hazards, checkpoints, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, collider, mut sensor) in &mut query {
        let was_grounded = sensor.grounded;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 0.5,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            GROUND_PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        sensor.grounded = hit.is_some();

        if sensor.grounded != was_grounded {
            debug!("{:?} grounded={}", entity, sensor.grounded);
        }
    }
}
