//! Layout domain: seeded platform-span sampling bounded by the actor's jump reach.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

/// Fraction of the theoretical jump distance a gap may use
const GAP_REACH_FACTOR: f32 = 0.9;
/// Fraction of the theoretical jump height an upward step may use
const STEP_REACH_FACTOR: f32 = 0.8;
/// Upper bound on any reach figure, whatever the tuning says
pub const MAX_REACH: f32 = 1000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub seed: u64,
    pub segments: u32,
    pub ground_y: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub max_step_down: f32,
    pub min_gap: f32,
    /// Gravity the physics collaborator applies; bounds jump reach
    pub gravity: f32,
    /// Place a checkpoint on every Nth span (0 = none)
    pub checkpoint_every: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            seed: 0,
            segments: 12,
            ground_y: 0.0,
            min_width: 3.0,
            max_width: 10.0,
            max_step_down: 4.0,
            min_gap: 1.0,
            gravity: 30.0,
            checkpoint_every: 4,
        }
    }
}

/// Solid ground from `x_start` to `x_start + width`, top surface at `top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpan {
    pub x_start: f32,
    pub width: f32,
    pub top: f32,
}

impl PlatformSpan {
    pub fn x_end(&self) -> f32 {
        self.x_start + self.width
    }

    pub fn center_top(&self) -> Vec2 {
        Vec2::new(self.x_start + self.width * 0.5, self.top)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub spans: Vec<PlatformSpan>,
    pub spawn_point: Vec2,
    pub checkpoints: Vec<Vec2>,
}

/// Sample a left-to-right run of platforms. Same params and tuning, same layout.
pub fn sample_layout(params: &LayoutParams, tuning: &MovementTuning) -> Layout {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    let max_gap = bounded_reach(tuning.max_jump_distance(params.gravity) * GAP_REACH_FACTOR);
    let max_step_up =
        bounded_reach(tuning.single_jump_height(params.gravity) * STEP_REACH_FACTOR);
    let max_step_down = bounded_reach(params.max_step_down);
    let min_gap = params.min_gap.max(0.0).min(max_gap);
    let min_width = params.min_width.max(0.1);
    let max_width = params.max_width.max(min_width);

    let mut spans: Vec<PlatformSpan> = Vec::with_capacity(params.segments as usize);
    let mut x = 0.0;
    let mut top = params.ground_y;

    for index in 0..params.segments {
        if index > 0 {
            x += sample_range(&mut rng, min_gap, max_gap);
            top += sample_range(&mut rng, -max_step_down, max_step_up);
        }
        let width = sample_range(&mut rng, min_width, max_width);
        spans.push(PlatformSpan {
            x_start: x,
            width,
            top,
        });
        x += width;
    }

    let spawn_point = spans
        .first()
        .map(|span| Vec2::new(span.x_start + min_width * 0.5, span.top))
        .unwrap_or(Vec2::new(0.0, params.ground_y));

    let checkpoints = if params.checkpoint_every == 0 {
        Vec::new()
    } else {
        spans
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(index, _)| *index as u32 % params.checkpoint_every == 0)
            .map(|(_, span)| span.center_top())
            .collect()
    };

    debug!(
        "Sampled layout seed={} spans={} max_gap={:.2} max_step_up={:.2}",
        params.seed,
        spans.len(),
        max_gap,
        max_step_up
    );

    Layout {
        spans,
        spawn_point,
        checkpoints,
    }
}

/// Reach figures overflow for extreme tunings; NaN reads as 0, infinity as `MAX_REACH`.
fn bounded_reach(value: f32) -> f32 {
    value.max(0.0).min(MAX_REACH)
}

/// Uniform sample in `[min, max)`; `min` whenever the range is empty or not finite.
fn sample_range(rng: &mut ChaCha8Rng, min: f32, max: f32) -> f32 {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return min;
    }
    rng.random_range(min..max)
}
