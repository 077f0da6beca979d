// ABOUTME: Splits the plan horizon into base, build, peak and taper phases
// ABOUTME: Also provides the phase cursor that walks weeks through the allocation in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_plan_core::models::Phase;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plan_constants::phases::{
    BUILD_SHARE, MIN_BASE_WEEKS, MIN_BUILD_WEEKS, MIN_PEAK_WEEKS, MIN_TAPER_WEEKS, PEAK_SHARE,
    TAPER_SHARE,
};

/// A phase and the number of consecutive weeks it occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBlock {
    /// Phase
    pub phase: Phase,
    /// Consecutive weeks
    pub weeks: u32,
}

/// Ordered phase blocks covering a whole plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAllocation {
    blocks: [PhaseBlock; 4],
}

impl PhaseAllocation {
    /// Blocks in training order (base, build, peak, taper)
    #[must_use]
    pub const fn blocks(&self) -> &[PhaseBlock; 4] {
        &self.blocks
    }

    /// Weeks allotted to one phase
    #[must_use]
    pub fn weeks_for(&self, phase: Phase) -> u32 {
        self.blocks
            .iter()
            .find(|block| block.phase == phase)
            .map_or(0, |block| block.weeks)
    }

    /// Sum of all blocks
    #[must_use]
    pub fn total_weeks(&self) -> u32 {
        self.blocks.iter().map(|block| block.weeks).sum()
    }
}

fn share_of(total_weeks: u32, share: f64) -> u32 {
    (f64::from(total_weeks) * share).round() as u32
}

/// Allocate `total_weeks` across the four phases
///
/// Taper, peak and build take their shares (with minimums) and base takes the
/// rest, with its own minimum. On very short plans the minimums add up to more
/// than the horizon; the excess is then taken out of build so the blocks
/// always cover exactly `total_weeks`.
#[must_use]
pub fn allocate_phases(total_weeks: u32) -> PhaseAllocation {
    let taper = share_of(total_weeks, TAPER_SHARE).max(MIN_TAPER_WEEKS);
    let peak = share_of(total_weeks, PEAK_SHARE).max(MIN_PEAK_WEEKS);
    let mut build = share_of(total_weeks, BUILD_SHARE).max(MIN_BUILD_WEEKS);
    let base = total_weeks
        .saturating_sub(taper + peak + build)
        .max(MIN_BASE_WEEKS);

    let allotted = base + build + peak + taper;
    if allotted > total_weeks {
        let excess = (allotted - total_weeks).min(build - 1);
        build -= excess;
        debug!(
            total_weeks,
            allotted, excess, "Phase minimums exceed the horizon, shortening build"
        );
    }

    PhaseAllocation {
        blocks: [
            PhaseBlock {
                phase: Phase::Base,
                weeks: base,
            },
            PhaseBlock {
                phase: Phase::Build,
                weeks: build,
            },
            PhaseBlock {
                phase: Phase::Peak,
                weeks: peak,
            },
            PhaseBlock {
                phase: Phase::Taper,
                weeks: taper,
            },
        ],
    }
}

/// Walks plan weeks through an allocation
///
/// Starts in base and moves to the next phase once the current block is used
/// up. Taper is terminal: any weeks past the allocation stay in taper.
#[derive(Debug, Clone)]
pub struct PhaseCursor<'a> {
    allocation: &'a PhaseAllocation,
    index: usize,
    weeks_in_phase: u32,
}

impl<'a> PhaseCursor<'a> {
    /// Cursor at the first week of base
    #[must_use]
    pub const fn new(allocation: &'a PhaseAllocation) -> Self {
        Self {
            allocation,
            index: 0,
            weeks_in_phase: 0,
        }
    }

    /// Phase of the current week
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.allocation.blocks[self.index].phase
    }

    /// 1-based week number inside the current phase
    #[must_use]
    pub const fn phase_week(&self) -> u32 {
        self.weeks_in_phase + 1
    }

    /// Move to the next week
    pub fn advance(&mut self) {
        self.weeks_in_phase += 1;
        let block = self.allocation.blocks[self.index];
        let is_last = self.index + 1 == self.allocation.blocks.len();
        if self.weeks_in_phase >= block.weeks && !is_last {
            self.index += 1;
            self.weeks_in_phase = 0;
        }
    }
}
