// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Badges: small marks or counters attached to menu items and the menu button.
//!
//! A [`Badge`] only decides *what* is shown. Where it sits is decided by the
//! item it is attached to (see [`BadgeSlot`] and the anchor helpers), so any
//! item kind can carry one.

use alloc::string::{String, ToString};
use core::f64::consts::FRAC_1_SQRT_2;

use kurbo::{Point, Rect, Size, Vec2};
use navkit_page_menu::Color;

/// Height of every badge.
pub const BADGE_HEIGHT: f64 = 14.0;
/// Width of a one-character badge, and of the mark dot.
pub const BADGE_NARROW_WIDTH: f64 = 14.0;
/// Width of a two-character badge.
pub const BADGE_WIDE_WIDTH: f64 = 20.0;
/// Largest number a badge displays; larger values are clamped.
pub const BADGE_MAX_NUMBER: i64 = 99;

/// Default badge background.
pub const BADGE_BACKGROUND: Color = Color::rgb(233, 90, 67);

/// What a badge shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Badge {
    /// Nothing.
    #[default]
    None,
    /// A dot.
    Mark,
    /// A counter, clamped to `0..=99`. Zero hides the badge.
    Number(i64),
    /// Up to two characters of text; the rest is dropped.
    Text(String),
}

/// Resolved look of a badge.
#[derive(Clone, Debug, PartialEq)]
pub enum BadgeAppearance {
    /// Nothing is drawn.
    Hidden,
    /// A round dot.
    Mark {
        /// Dot size.
        size: Size,
    },
    /// A rounded label.
    Label {
        /// Text to draw.
        text: String,
        /// Label size.
        size: Size,
    },
}

impl BadgeAppearance {
    /// Size of the drawn badge, or `None` when hidden.
    pub fn size(&self) -> Option<Size> {
        match self {
            Self::Hidden => None,
            Self::Mark { size } | Self::Label { size, .. } => Some(*size),
        }
    }
}

fn label_width(chars: usize) -> f64 {
    if chars >= 2 {
        BADGE_WIDE_WIDTH
    } else {
        BADGE_NARROW_WIDTH
    }
}

impl Badge {
    /// Resolve what to draw.
    pub fn appearance(&self) -> BadgeAppearance {
        match self {
            Self::None => BadgeAppearance::Hidden,
            Self::Mark => BadgeAppearance::Mark {
                size: Size::new(BADGE_NARROW_WIDTH, BADGE_HEIGHT),
            },
            Self::Number(n) => {
                let n = (*n).clamp(0, BADGE_MAX_NUMBER);
                if n == 0 {
                    return BadgeAppearance::Hidden;
                }
                let width = if n >= 10 {
                    BADGE_WIDE_WIDTH
                } else {
                    BADGE_NARROW_WIDTH
                };
                BadgeAppearance::Label {
                    text: n.to_string(),
                    size: Size::new(width, BADGE_HEIGHT),
                }
            }
            Self::Text(text) => {
                let text: String = text.chars().take(2).collect();
                let width = label_width(text.chars().count());
                BadgeAppearance::Label {
                    text,
                    size: Size::new(width, BADGE_HEIGHT),
                }
            }
        }
    }

    /// True if anything is drawn.
    pub fn is_visible(&self) -> bool {
        self.appearance() != BadgeAppearance::Hidden
    }
}

/// Badge colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BadgeColors {
    /// Label text.
    pub text: Color,
    /// Label background.
    pub background: Color,
    /// Mark dot background.
    pub mark: Color,
}

impl Default for BadgeColors {
    fn default() -> Self {
        Self {
            text: Color::WHITE,
            background: BADGE_BACKGROUND,
            mark: BADGE_BACKGROUND,
        }
    }
}

/// A badge attached to an item, with a user offset from the item's anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadgeSlot {
    /// What to show.
    pub badge: Badge,
    /// Shift from the anchor point.
    pub offset: Vec2,
    /// Colors.
    pub colors: BadgeColors,
}

impl BadgeSlot {
    /// Attach `badge` with the given offset and default colors.
    pub fn new(badge: Badge, offset: Vec2) -> Self {
        Self {
            badge,
            offset,
            colors: BadgeColors::default(),
        }
    }

    /// Frame of the badge centered at `anchor + offset`, or `None` when hidden.
    pub fn frame(&self, anchor: Point) -> Option<Rect> {
        let size = self.badge.appearance().size()?;
        Some(Rect::from_center_size(anchor + self.offset, size))
    }
}

/// Offset applied by default to badges on round items and the menu button.
pub const ROUND_BADGE_OFFSET: Vec2 = Vec2::new(2.0, -2.0);

/// Anchor on the 45° point of a circle of `radius` inscribed at the origin,
/// pushed 2 units further out.
pub fn round_anchor(radius: f64) -> Point {
    Point::new(
        radius * (1.0 + FRAC_1_SQRT_2) + 2.0,
        radius * (1.0 - FRAC_1_SQRT_2) - 2.0,
    )
}

/// Anchor on the 45° point of a round image of `image_radius` centered in `item`.
pub fn image_anchor(item: Size, image_radius: f64) -> Point {
    Point::new(
        item.width / 2.0 + image_radius * FRAC_1_SQRT_2,
        item.height / 2.0 - image_radius * FRAC_1_SQRT_2,
    )
}

/// Anchor 5 units right of and above the top-right corner of an icon.
pub fn icon_anchor(icon: Rect) -> Point {
    Point::new(icon.x1 + 5.0, icon.y0 - 5.0)
}
