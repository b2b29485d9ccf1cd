// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab strip layout: per-tab frames, indicator geometry, and tap hit testing.
//!
//! ## Strategies
//!
//! Given the view width `W` and `N` pages:
//!
//! - [`LayoutMode::SegmentedControl`]: tabs are `W / N` wide, placed contiguously from `x = 0`, margin forced to 0.
//! - [`LayoutMode::FixedWidth`]: tab `i` sits at `itemWidth * i + margin * (i + 1)`.
//!   When centered, every tab is shifted by
//!   `max(0, (W - (N * itemWidth + (N - 1) * margin)) / 2 - margin)`.
//! - [`LayoutMode::TitleWidthBased`]: tabs are as wide as their measured titles and follow each other with a margin before each.
//!
//! Frames are rounded to whole units after placement. Rounding is applied to
//! edges rather than to origin and size, so adjacent tabs never overlap.
//!
//! A [`MenuLayout`] is derived from configuration and the view width only, so
//! relayouts never accumulate drift.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::options::{FontSpec, LayoutMode, PageMenuOptions};

/// Measures the rendered width of a tab title.
///
/// Any `Fn(&str, &FontSpec) -> f64` closure implements this trait.
pub trait TextMeasure {
    /// Width of `text` rendered with `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &FontSpec) -> f64,
{
    #[inline]
    fn measure(&self, text: &str, font: &FontSpec) -> f64 {
        self(text, font)
    }
}

/// Floor of a non-negative finite value as an index.
#[inline]
pub(crate) fn floor_index(v: f64) -> Option<usize> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Non-negative finite input; truncation is the floor."
    )]
    let i = v as usize;
    Some(i)
}

/// Computed tab strip geometry for one view width.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuLayout {
    mode: LayoutMode,
    view_width: f64,
    menu_height: f64,
    margin: f64,
    item_width: f64,
    starting_margin: f64,
    frames: Vec<Rect>,
    indicator_bases: Vec<f64>,
    content_width: f64,
}

impl MenuLayout {
    /// Lay out one tab per entry of `title_widths`.
    ///
    /// `title_widths` holds the measured title width of every page; it is
    /// consulted in title-width-based mode, and for the indicator width in
    /// segmented mode when title-based widths are also requested.
    pub fn compute(options: &PageMenuOptions, view_width: f64, title_widths: &[f64]) -> Self {
        let n = title_widths.len();
        let nf = n as f64;
        let mode = options.layout_mode();
        let menu_height = options.menu_height;
        let mut frames = Vec::with_capacity(n);
        let mut indicator_bases = Vec::with_capacity(n);

        let (margin, item_width, starting_margin, content_width) = match mode {
            LayoutMode::SegmentedControl => {
                let w = if n == 0 { 0.0 } else { view_width / nf };
                for (i, &tw) in title_widths.iter().enumerate() {
                    let x0 = w * i as f64;
                    frames.push(Rect::new(x0, 0.0, x0 + w, menu_height).round());
                    indicator_bases.push(if options.menu_item_width_based_on_title_width {
                        tw
                    } else {
                        w
                    });
                }
                (0.0, w, 0.0, view_width)
            }
            LayoutMode::FixedWidth { centered } => {
                let m = options.menu_margin;
                let iw = options.menu_item_width;
                let starting = if centered && n > 0 {
                    let row = nf * iw + (nf - 1.0) * m;
                    ((view_width - row) / 2.0 - m).max(0.0)
                } else {
                    0.0
                };
                for i in 0..n {
                    let x0 = iw * i as f64 + m * (i + 1) as f64 + starting;
                    frames.push(Rect::new(x0, 0.0, x0 + iw, menu_height).round());
                    indicator_bases.push(iw);
                }
                (m, iw, starting, (iw + m) * nf + m)
            }
            LayoutMode::TitleWidthBased => {
                let m = options.menu_margin;
                let mut total = 0.0;
                for (i, &tw) in title_widths.iter().enumerate() {
                    let x0 = total + m * (i + 1) as f64;
                    frames.push(Rect::new(x0, 0.0, x0 + tw, menu_height).round());
                    indicator_bases.push(tw);
                    total += tw;
                }
                (m, 0.0, 0.0, total + m * (nf + 1.0))
            }
        };

        Self {
            mode,
            view_width,
            menu_height,
            margin,
            item_width,
            starting_margin,
            frames,
            indicator_bases,
            content_width,
        }
    }

    /// Active strategy.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// View width this layout was computed for.
    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    /// Effective margin between tabs (0 in segmented mode).
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Leading shift applied to centered fixed-width rows.
    pub fn starting_margin(&self) -> f64 {
        self.starting_margin
    }

    /// Rounded tab frames, in page order.
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Rounded frame of tab `index`.
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.frames.get(index).copied()
    }

    /// Width of the scrollable tab strip content.
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Selection indicator frame for tab `index`.
    ///
    /// The indicator is `percent` of the tab's indicator base width, centered on
    /// the tab, and sits `bottom_offset` above the strip's bottom edge.
    pub fn indicator_frame(
        &self,
        index: usize,
        percent: f64,
        height: f64,
        bottom_offset: f64,
    ) -> Option<Rect> {
        let tab = self.frames.get(index)?;
        let base = self.indicator_bases[index];
        let width = base * percent.clamp(0.0, 100.0) / 100.0;
        let cx = tab.center().x;
        let y = self.menu_height - height - bottom_offset;
        Some(Rect::new(
            cx - width / 2.0,
            y,
            cx + width / 2.0,
            y + height,
        ))
    }

    /// Resolve a tap at tab-strip content coordinate `x` to a tab index.
    ///
    /// - Segmented: the strip is divided into `N` equal slots.
    /// - Title-width-based: each tab owns its frame plus half a margin on each
    ///   side; the first slot starts at 0 and the last one runs to the end of
    ///   the strip content.
    /// - Fixed width: `floor((x - startingMargin - margin / 2) / (margin + itemWidth))`.
    ///
    /// Points left of the first slot or past the last one select nothing.
    pub fn hit_test(&self, x: f64) -> Option<usize> {
        let n = self.frames.len();
        if n == 0 || x.is_nan() || x < 0.0 {
            return None;
        }
        let index = match self.mode {
            LayoutMode::SegmentedControl => {
                if self.item_width <= 0.0 {
                    return None;
                }
                floor_index(x / self.item_width)?
            }
            LayoutMode::TitleWidthBased => {
                let half = self.margin / 2.0;
                let last = n - 1;
                return self.frames.iter().enumerate().find_map(|(i, f)| {
                    let right = if i == last {
                        self.content_width.max(f.x1 + half)
                    } else {
                        f.x1 + half
                    };
                    (x <= right).then_some(i)
                });
            }
            LayoutMode::FixedWidth { .. } => {
                let stride = self.margin + self.item_width;
                if stride <= 0.0 {
                    return None;
                }
                floor_index((x - self.starting_margin - self.margin / 2.0) / stride)?
            }
        };
        (index < n).then_some(index)
    }
}
