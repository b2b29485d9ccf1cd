// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsing header: hide the tab strip while page content scrolls down, reveal it on the way up.
//!
//! ## Model
//!
//! The tab strip's vertical offset `y` lives in `[-range, 0]`, where
//! `range = menuHeight - minMenuHeightOnScroll`. Each embedded vertical
//! scroll region reports its offset; the change since that region's previous
//! report moves `y` the opposite way. Reaching either edge of the region's
//! content snaps `y` to the matching extreme.
//!
//! The previous offsets are kept per [`RegionId`] in a map owned by the
//! header, so several pages can each host a scrolling list.
//!
//! When scrolling stops, [`CollapsingHeader::settle`] snaps to the nearer
//! extreme.

use alloc::collections::BTreeMap;

use crate::types::RegionId;

/// Vertical scroll metrics of an embedded region.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VerticalScroll {
    /// Current content offset.
    pub offset: f64,
    /// Visible height of the region.
    pub viewport_height: f64,
    /// Height of the region's content.
    pub content_height: f64,
    /// Content inset above the first row.
    pub inset_top: f64,
    /// Content inset below the last row.
    pub inset_bottom: f64,
}

impl VerticalScroll {
    fn fits(&self) -> bool {
        self.viewport_height >= self.content_height + self.inset_bottom
    }

    fn at_top(&self) -> bool {
        self.offset <= -self.inset_top
    }

    fn at_bottom(&self) -> bool {
        self.offset + self.viewport_height >= self.content_height + self.inset_bottom
    }
}

/// State of the collapsing header.
#[derive(Clone, Debug, PartialEq)]
pub struct CollapsingHeader {
    range: Option<f64>,
    y: f64,
    previous: BTreeMap<RegionId, f64>,
}

impl CollapsingHeader {
    /// Create a fully shown header that can give up `range` units of height.
    ///
    /// `None` (or a non-positive range) disables collapsing.
    pub fn new(range: Option<f64>) -> Self {
        Self {
            range: range.filter(|r| *r > 0.0),
            y: 0.0,
            previous: BTreeMap::new(),
        }
    }

    /// True if the header reacts to vertical scrolling.
    pub fn is_enabled(&self) -> bool {
        self.range.is_some()
    }

    /// Current vertical offset of the tab strip, in `[-range, 0]`.
    pub fn offset(&self) -> f64 {
        self.y
    }

    /// Opacity for the tab items and indicator at the current offset.
    ///
    /// 1.0 when fully shown, falling to 0.0 at half collapse and staying there.
    pub fn alpha(&self) -> f64 {
        match self.range {
            Some(range) => ((range + 2.0 * self.y).max(0.0) / range).min(1.0),
            None => 1.0,
        }
    }

    /// True if the tab strip is fully shown.
    pub fn is_shown(&self) -> bool {
        self.y >= 0.0
    }

    /// Previous offset recorded for `region`, if any.
    pub fn previous_offset(&self, region: RegionId) -> Option<f64> {
        self.previous.get(&region).copied()
    }

    /// Feed a vertical scroll report from `region`.
    ///
    /// Returns the new header offset, or `None` if the report was ignored
    /// (collapsing disabled, or the region's content fits its viewport).
    pub fn scrolled(&mut self, region: RegionId, scroll: VerticalScroll) -> Option<f64> {
        let range = self.range?;
        if scroll.fits() {
            return None;
        }
        let previous = self.previous.get(&region).copied().unwrap_or(0.0);
        let delta = scroll.offset - previous;
        self.y = if scroll.at_top() {
            0.0
        } else if scroll.at_bottom() {
            -range
        } else {
            (self.y - delta).clamp(-range, 0.0)
        };
        self.previous.insert(region, scroll.offset);
        Some(self.y)
    }

    /// Snap to the nearer extreme once scrolling stops.
    ///
    /// Returns the settled offset, or `None` when collapsing is disabled.
    pub fn settle(&mut self) -> Option<f64> {
        let range = self.range?;
        self.y = if self.y < -range / 2.0 { -range } else { 0.0 };
        Some(self.y)
    }

    /// Show the header fully. Returns true if it was collapsed at all.
    pub fn reveal(&mut self) -> bool {
        let changed = self.y != 0.0;
        self.y = 0.0;
        changed
    }

    /// Drop the memo for a region that went away.
    pub fn forget(&mut self, region: RegionId) {
        self.previous.remove(&region);
    }
}
