//! Pointer trail tracking
//!
//! Motion samples become line segments once they travel far enough from the
//! trail anchor. Only the most recent segments are kept, for rendering.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One qualifying pointer motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl TrailSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.vector().length()
    }
}

/// Bounded pointer trail history
#[derive(Debug, Clone)]
pub struct TrailTracker {
    segments: VecDeque<TrailSegment>,
    /// Last point that produced (or started) a segment
    anchor: Option<Vec2>,
    capacity: usize,
    min_length: f32,
}

impl TrailTracker {
    pub fn new(capacity: usize, min_length: f32) -> Self {
        Self {
            segments: VecDeque::with_capacity(capacity + 1),
            anchor: None,
            capacity,
            min_length,
        }
    }

    /// Record `prev -> curr` if it is long enough.
    ///
    /// Short moves return `None` and record nothing.
    pub fn add_sample(&mut self, prev: Vec2, curr: Vec2) -> Option<TrailSegment> {
        let segment = TrailSegment::new(prev, curr);
        if segment.length() < self.min_length {
            return None;
        }

        self.segments.push_back(segment);
        while self.segments.len() > self.capacity {
            self.segments.pop_front();
        }
        Some(segment)
    }

    /// Feed a pointer position, connecting it to the current anchor.
    ///
    /// The first point after a release only sets the anchor. The anchor
    /// moves only when a segment is produced, so slow drags still add up.
    pub fn feed(&mut self, point: Vec2) -> Option<TrailSegment> {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(point);
            return None;
        };

        let segment = self.add_sample(anchor, point)?;
        self.anchor = Some(point);
        Some(segment)
    }

    /// Break trail continuity (pointer released)
    pub fn release(&mut self) {
        self.anchor = None;
    }

    /// Drop history and anchor
    pub fn clear(&mut self) {
        self.segments.clear();
        self.anchor = None;
    }

    /// Retained segments, oldest first
    pub fn segments(&self) -> impl Iterator<Item = &TrailSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
