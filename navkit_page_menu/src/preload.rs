// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preload window: which pages are mounted around the current one.
//!
//! ## Usage
//!
//! Call [`PreloadWindow::update`] with the new current page. It returns the
//! minimal set of [`MountChange`]s needed to go from the previously mounted
//! pages to exactly `[current - offset, current + offset]` clipped to the
//! valid page range.
//!
//! ```
//! use navkit_page_menu::preload::{MountChange, PreloadWindow};
//!
//! let mut w = PreloadWindow::new(1, 5);
//! assert_eq!(
//!     w.update(2),
//!     vec![MountChange::Mount(1), MountChange::Mount(2), MountChange::Mount(3)]
//! );
//! assert_eq!(
//!     w.update(0),
//!     vec![MountChange::Unmount(2), MountChange::Unmount(3), MountChange::Mount(0)]
//! );
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

/// A transition of one page between mounted and unmounted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MountChange {
    /// Attach the page content to the content region.
    Mount(usize),
    /// Detach the page content.
    Unmount(usize),
}

/// Tracks the mounted pages for a fixed page count.
///
/// Updates are idempotent: updating with the same current page twice yields
/// no changes the second time.
///
/// Ordering semantics:
/// - Unmounts are emitted before mounts.
/// - Within each group, pages are visited in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadWindow {
    offset: usize,
    mounted: Vec<bool>,
}

impl PreloadWindow {
    /// Create a window with nothing mounted.
    pub fn new(offset: usize, page_count: usize) -> Self {
        Self {
            offset,
            mounted: vec![false; page_count],
        }
    }

    /// Pages kept mounted on each side of the current page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The index range that should be mounted around `current`.
    pub fn range_for(&self, current: usize) -> RangeInclusive<usize> {
        let last = self.mounted.len().saturating_sub(1);
        current.saturating_sub(self.offset)..=current.saturating_add(self.offset).min(last)
    }

    /// True if page `index` is mounted.
    pub fn is_mounted(&self, index: usize) -> bool {
        self.mounted.get(index).copied().unwrap_or(false)
    }

    /// Iterate the mounted page indices in ascending order.
    pub fn mounted(&self) -> impl Iterator<Item = usize> + '_ {
        self.mounted
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
    }

    /// Move the window to `current` and return the changes to apply.
    pub fn update(&mut self, current: usize) -> Vec<MountChange> {
        if self.mounted.is_empty() {
            return Vec::new();
        }
        let range = self.range_for(current);
        let mut out = Vec::new();
        for (i, m) in self.mounted.iter_mut().enumerate() {
            if *m && !range.contains(&i) {
                *m = false;
                out.push(MountChange::Unmount(i));
            }
        }
        for i in range {
            if !self.mounted[i] {
                self.mounted[i] = true;
                out.push(MountChange::Mount(i));
            }
        }
        out
    }
}
