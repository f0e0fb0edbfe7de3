//! Movement domain: ground and wall detection via avian2d raycasts.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSensor, GameLayer, MovementTuning};

/// Casts short rays from a body centre against level geometry.
pub(crate) struct RaycastSensor<'q, 'w, 's> {
    spatial_query: &'q SpatialQuery<'w, 's>,
    origin: Vec2,
    ground_check_distance: f32,
    wall_check_distance: f32,
}

impl<'q, 'w, 's> RaycastSensor<'q, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'q SpatialQuery<'w, 's>,
        origin: Vec2,
        tuning: &MovementTuning,
    ) -> Self {
        Self {
            spatial_query,
            origin,
            ground_check_distance: tuning.ground_check_distance,
            wall_check_distance: tuning.wall_check_distance,
        }
    }
}

impl ContactSensor for RaycastSensor<'_, '_, '_> {
    fn probe_ground(&self) -> bool {
        // Walls count as ground too so pillar tops can be stood on
        let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
        self.spatial_query
            .cast_ray(
                self.origin,
                Dir2::NEG_Y,
                self.ground_check_distance,
                true,
                &filter,
            )
            .is_some()
    }

    fn probe_wall(&self, direction: f32) -> bool {
        let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
        let ray_direction = if direction < 0.0 { Dir2::NEG_X } else { Dir2::X };
        self.spatial_query
            .cast_ray(
                self.origin,
                ray_direction,
                self.wall_check_distance,
                true,
                &filter,
            )
            .is_some()
    }
}
