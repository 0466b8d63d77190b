//! Swept slice detection
//!
//! The heart of the game: each new trail segment is tested against every live
//! item as a thick band (the segment widened and extended by `cut_range`)
//! versus the item's circular hit region. A cheap broad phase rejects distant
//! items before the projection test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::item::{ItemId, ItemKind, Projectile};
use super::trail::TrailSegment;
use crate::consts::COMBO_BONUS_DIVISOR;
use crate::tuning::Tuning;

/// Slice geometry parameters
#[derive(Debug, Clone, Copy)]
pub struct CutParams {
    /// Slice half-thickness, also extends the segment past both endpoints
    pub cut_range: f32,
    /// Segments shorter than this never cut
    pub min_segment_length: f32,
    /// Above this many live items the broad phase drops its slack
    pub crowded_item_count: usize,
    /// Extra broad-phase tolerance for motion between samples
    pub broad_phase_slack: f32,
}

impl CutParams {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            cut_range: tuning.cut_range,
            min_segment_length: tuning.min_segment_length,
            crowded_item_count: tuning.crowded_item_count,
            broad_phase_slack: tuning.broad_phase_slack,
        }
    }
}

impl Default for CutParams {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

/// One sliced item, captured at the moment of the cut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceHit {
    pub id: ItemId,
    pub kind: ItemKind,
    pub x: f32,
    pub y: f32,
}

/// Outcome of testing one segment against the live set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// Every item cut by the segment, in live-set order
    pub hits: Vec<SliceHit>,
    /// Points earned by non-hazard hits
    pub score_delta: u64,
    /// Number of non-hazard hits
    pub combo_delta: u32,
    /// A hazard was among the hits
    pub hazard_hit: bool,
    /// A bonus kind was among the hits
    pub bonus_hit: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn is_hit(&self) -> bool {
        !self.hits.is_empty()
    }

    pub fn hit_ids(&self) -> Vec<ItemId> {
        self.hits.iter().map(|h| h.id).collect()
    }
}

/// Points for slicing `kind` with `combo` hits already on the counter
#[inline]
pub fn points_for(kind: ItemKind, combo: u32) -> u64 {
    u64::from(kind.base_points()) + u64::from(combo / COMBO_BONUS_DIVISOR)
}

/// Cheap rejection: expanded bounding box, then the endpoint-distance ellipse
pub fn broad_phase(
    segment: &TrailSegment,
    center: Vec2,
    radius: f32,
    cut_range: f32,
    ellipse_limit: f32,
) -> bool {
    let pad = Vec2::splat(cut_range + radius);
    let min = segment.start.min(segment.end) - pad;
    let max = segment.start.max(segment.end) + pad;
    if center.x < min.x || center.x > max.x || center.y < min.y || center.y > max.y {
        return false;
    }

    center.distance(segment.start) + center.distance(segment.end) < ellipse_limit
}

/// Exact test: circle against the segment capped-extended by `cut_range`.
///
/// `dir` must be the unit direction of the segment and `length` its length.
pub fn slice_hits_circle(
    start: Vec2,
    dir: Vec2,
    length: f32,
    center: Vec2,
    radius: f32,
    cut_range: f32,
) -> bool {
    let proj = (center - start).dot(dir);
    let closest = start + dir * proj;
    let dist = center.distance(closest);

    dist < cut_range + radius && proj >= -cut_range && proj <= length + cut_range
}

/// Test one trail segment against every live item.
///
/// All hits are collected as one batch; `combo` is the counter before this
/// batch and feeds the per-hit bonus. Hazard hits score nothing.
pub fn check_collision(
    segment: &TrailSegment,
    items: &[Projectile],
    combo: u32,
    params: &CutParams,
) -> CollisionResult {
    let trail = segment.vector();
    let length = trail.length();
    if length < params.min_segment_length || length <= f32::EPSILON {
        return CollisionResult::miss();
    }
    let dir = trail / length;

    let cut = params.cut_range;
    let ellipse_limit = if items.len() > params.crowded_item_count {
        length + cut * 2.0
    } else {
        length + cut * 2.0 + params.broad_phase_slack
    };

    let mut result = CollisionResult::miss();
    for item in items {
        let radius = item.radius();
        if !broad_phase(segment, item.pos, radius, cut, ellipse_limit) {
            continue;
        }
        if !slice_hits_circle(segment.start, dir, length, item.pos, radius, cut) {
            continue;
        }

        result.hits.push(SliceHit {
            id: item.id,
            kind: item.kind,
            x: item.pos.x,
            y: item.pos.y,
        });

        if item.kind.is_hazard() {
            result.hazard_hit = true;
        } else {
            result.score_delta += points_for(item.kind, combo);
            result.combo_delta += 1;
            result.bonus_hit |= item.kind.is_bonus();
        }
    }

    result
}
