//! Run configuration.
//!
//! # Design
//!
//! A run is described by how many nearest neighbours each city is wired to
//! and by the limits placed on the random walk.  [`WalkConfig`] carries both
//! and is typically loaded from JSON by the application (feature `serde`).
//! The path finder itself only sees [`WalkLimits`].

use crate::{CoreError, CoreResult, WalkRng};

// ── WalkLimits ────────────────────────────────────────────────────────────────

/// Early-termination bounds for one random walk.
///
/// Exceeding either bound is not an error: the walk reports "no path found
/// within budget".
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkLimits {
    /// Abort once the cumulative distance exceeds this value.  `0.0` or a
    /// negative value means unlimited.
    pub distance_cap: f64,

    /// Abort after this many steps without full coverage.  `None` walks until
    /// every city has been visited.
    pub max_steps: Option<u64>,
}

impl WalkLimits {
    pub const UNLIMITED: WalkLimits = WalkLimits { distance_cap: 0.0, max_steps: None };

    /// Limits with only a distance cap.
    #[inline]
    pub fn capped(distance_cap: f64) -> Self {
        Self { distance_cap, max_steps: None }
    }

    /// `true` once `distance` is over a positive cap.
    #[inline]
    pub fn distance_exceeded(&self, distance: f64) -> bool {
        self.distance_cap > 0.0 && distance > self.distance_cap
    }

    /// `true` once `steps` reached the step limit, if any.
    #[inline]
    pub fn steps_exhausted(&self, steps: u64) -> bool {
        self.max_steps.is_some_and(|max| steps >= max)
    }
}

impl Default for WalkLimits {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

// ── WalkConfig ────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// How many nearest cities each city builds a road to (`k`).
    pub neighbours: usize,

    /// Cumulative distance after which a walk gives up.  `0.0` = unlimited.
    pub distance_cap: f64,

    /// Step budget for a walk.  `None` = unbounded.
    pub max_steps: Option<u64>,

    /// Master RNG seed.  `None` draws a fresh seed from the OS every run.
    pub seed: Option<u64>,
}

impl WalkConfig {
    /// Reject values no run can make sense of.
    pub fn validate(&self) -> CoreResult<()> {
        if self.neighbours == 0 {
            return Err(CoreError::Config(
                "neighbours must be at least 1 or no roads are built".into(),
            ));
        }
        if self.distance_cap.is_nan() {
            return Err(CoreError::Config("distance_cap must be a number".into()));
        }
        if self.max_steps == Some(0) {
            return Err(CoreError::Config(
                "max_steps must be at least 1 (omit it for an unbounded walk)".into(),
            ));
        }
        Ok(())
    }

    /// The walk limits described by this configuration.
    pub fn limits(&self) -> WalkLimits {
        WalkLimits {
            distance_cap: self.distance_cap,
            max_steps:    self.max_steps,
        }
    }

    /// Construct the `WalkRng` for this run.
    pub fn make_rng(&self) -> WalkRng {
        match self.seed {
            Some(seed) => WalkRng::new(seed),
            None => WalkRng::from_entropy(),
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            neighbours:   2,
            distance_cap: 0.0,
            max_steps:    None,
            seed:         None,
        }
    }
}
