// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popup menu items.
//!
//! One [`MenuItem`] type covers every variant: the [`ItemKind`] decides the
//! sub-layout and the optional [`BadgeSlot`] can be attached to any kind.
//! [`MenuItem::render`] resolves everything the host needs to draw the item in
//! item-local coordinates.

use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};
use navkit_page_menu::{Color, Icon, ItemFlags};

use crate::badge::{
    Badge, BadgeAppearance, BadgeColors, BadgeSlot, ROUND_BADGE_OFFSET, icon_anchor, image_anchor,
    round_anchor,
};

/// Height of an item's title label.
pub const TITLE_LABEL_HEIGHT: f64 = 14.0;
/// Height of a label item's info label.
pub const INFO_LABEL_HEIGHT: f64 = 20.0;
/// Gap between an icon and its title.
pub const ICON_LABEL_GAP: f64 = 2.0;

/// Accent used for selected items.
pub const ACCENT: Color = Color::rgb(233, 90, 67);

/// What an item shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemKind {
    /// A centered title.
    Titled {
        /// Title text.
        title: String,
    },
    /// A tinted icon above a title.
    Icon {
        /// Icon drawn as a mask.
        icon: Icon,
        /// Title below the icon.
        title: String,
    },
    /// A large info label above a small title.
    LabelInfo {
        /// Prominent text, such as a count.
        info: String,
        /// Caption below it.
        title: String,
    },
    /// A round-clipped image.
    RoundImage {
        /// Image; its height is the circle's diameter.
        image: Icon,
    },
}

/// Colors for an item's two states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemPalette {
    /// Main text and icon tint while selected.
    pub selected: Color,
    /// Main text and icon tint otherwise.
    pub unselected: Color,
    /// Secondary title of label items while selected.
    pub caption_selected: Color,
    /// Secondary title of label items otherwise.
    pub caption_unselected: Color,
}

impl Default for ItemPalette {
    fn default() -> Self {
        Self {
            selected: ACCENT,
            unselected: Color::WHITE,
            caption_selected: Color::rgba(233, 90, 67, 128),
            caption_unselected: Color::rgba(255, 255, 255, 128),
        }
    }
}

/// A text label resolved for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPart {
    /// Text, centered horizontally in `frame`.
    pub text: String,
    /// Frame in item coordinates.
    pub frame: Rect,
    /// Text color.
    pub color: Color,
}

/// An image resolved for drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImagePart {
    /// Image handle.
    pub image: Icon,
    /// Frame in item coordinates.
    pub frame: Rect,
    /// Tint for mask icons; `None` draws the image as is.
    pub tint: Option<Color>,
    /// Corner radius of the clip.
    pub corner_radius: f64,
}

/// A badge resolved for drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct BadgePart {
    /// What to draw.
    pub appearance: BadgeAppearance,
    /// Frame in item coordinates.
    pub frame: Rect,
    /// Colors.
    pub colors: BadgeColors,
}

/// Everything needed to draw an item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemAppearance {
    /// Icon or round image.
    pub image: Option<ImagePart>,
    /// Main label.
    pub title: Option<LabelPart>,
    /// Info label of label items.
    pub info: Option<LabelPart>,
    /// Badge, if attached and visible.
    pub badge: Option<BadgePart>,
    /// Opacity; 0 while the item is inactive.
    pub alpha: f64,
}

/// One item of a popup menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    /// Content and sub-layout.
    pub kind: ItemKind,
    /// Optional badge.
    pub badge: Option<BadgeSlot>,
    /// Frame in overlay coordinates.
    pub frame: Rect,
    /// State bits.
    pub flags: ItemFlags,
    /// Colors.
    pub palette: ItemPalette,
}

impl MenuItem {
    /// Create an item of `size` centered at `center`.
    pub fn new(kind: ItemKind, center: Point, size: Size) -> Self {
        Self {
            kind,
            badge: None,
            frame: Rect::from_center_size(center, size),
            flags: ItemFlags::default(),
            palette: ItemPalette::default(),
        }
    }

    /// Attach `badge` with the kind's default offset.
    pub fn with_badge(mut self, badge: Badge) -> Self {
        let offset = match self.kind {
            ItemKind::RoundImage { .. } => ROUND_BADGE_OFFSET,
            _ => Vec2::ZERO,
        };
        self.badge = Some(BadgeSlot::new(badge, offset));
        self
    }

    /// Center of the item.
    pub fn center(&self) -> Point {
        self.frame.center()
    }

    /// Move the item, keeping its size.
    pub fn set_center(&mut self, center: Point) {
        self.frame = Rect::from_center_size(center, self.frame.size());
    }

    /// True if the item is selected.
    pub fn is_selected(&self) -> bool {
        self.flags.contains(ItemFlags::SELECTED)
    }

    /// True if the item is shown and accepts taps.
    pub fn is_active(&self) -> bool {
        self.flags.contains(ItemFlags::ENABLED | ItemFlags::VISIBLE)
    }

    /// Show the item and accept taps.
    pub fn activate(&mut self) {
        self.flags.insert(ItemFlags::ENABLED | ItemFlags::VISIBLE);
    }

    /// Hide the item and stop accepting taps.
    pub fn deactivate(&mut self) {
        self.flags.remove(ItemFlags::ENABLED | ItemFlags::VISIBLE);
    }

    /// Area that accepts taps, if the item is active.
    pub fn tap_target(&self) -> Option<Rect> {
        self.is_active().then_some(self.frame)
    }

    /// Frame of the icon or image in item coordinates.
    fn image_frame(&self) -> Option<Rect> {
        let Size { width, height } = self.frame.size();
        match &self.kind {
            ItemKind::Icon { icon, .. } => {
                let cy = height / 2.0 - (TITLE_LABEL_HEIGHT + ICON_LABEL_GAP) / 2.0;
                Some(Rect::from_center_size(Point::new(width / 2.0, cy), icon.size))
            }
            ItemKind::RoundImage { image } => {
                let d = image.size.height;
                let x = (width - d) / 2.0;
                let y = (height - d) / 2.0;
                Some(Rect::new(x, y, x + d, y + d))
            }
            ItemKind::Titled { .. } | ItemKind::LabelInfo { .. } => None,
        }
    }

    /// Point the badge is positioned from, before its offset.
    pub fn badge_anchor(&self) -> Point {
        let size = self.frame.size();
        match (&self.kind, self.image_frame()) {
            (ItemKind::Icon { .. }, Some(icon)) => icon_anchor(icon),
            (ItemKind::RoundImage { image }, _) if image.size.height > 0.0 => {
                image_anchor(size, image.size.height / 2.0)
            }
            _ => round_anchor(size.height / 2.0),
        }
    }

    /// Resolve the item's look for the given selection state.
    pub fn render(&self, selected: bool) -> ItemAppearance {
        let Size { width, height } = self.frame.size();
        let p = &self.palette;
        let (main, caption) = if selected {
            (p.selected, p.caption_selected)
        } else {
            (p.unselected, p.caption_unselected)
        };
        let label = |text: &str, y: f64, h: f64, color: Color| LabelPart {
            text: text.into(),
            frame: Rect::new(0.0, y, width, y + h),
            color,
        };

        let mut out = ItemAppearance {
            alpha: if self.flags.contains(ItemFlags::VISIBLE) {
                1.0
            } else {
                0.0
            },
            ..ItemAppearance::default()
        };
        match &self.kind {
            ItemKind::Titled { title } => {
                let y = (height - TITLE_LABEL_HEIGHT) / 2.0;
                out.title = Some(label(title, y, TITLE_LABEL_HEIGHT, main));
            }
            ItemKind::Icon { icon, title } => {
                let frame = self.image_frame().unwrap_or(Rect::ZERO);
                out.image = Some(ImagePart {
                    image: *icon,
                    frame,
                    tint: Some(main),
                    corner_radius: 0.0,
                });
                let y = frame.y1 + ICON_LABEL_GAP;
                out.title = Some(label(title, y, TITLE_LABEL_HEIGHT, main));
            }
            ItemKind::LabelInfo { info, title } => {
                let y = (height - (TITLE_LABEL_HEIGHT + INFO_LABEL_HEIGHT)) / 2.0;
                out.info = Some(label(info, y, INFO_LABEL_HEIGHT, main));
                out.title = Some(label(
                    title,
                    y + INFO_LABEL_HEIGHT,
                    TITLE_LABEL_HEIGHT,
                    caption,
                ));
            }
            ItemKind::RoundImage { image } => {
                let frame = self.image_frame().unwrap_or(Rect::ZERO);
                out.image = Some(ImagePart {
                    image: *image,
                    frame,
                    tint: None,
                    corner_radius: frame.height() / 2.0,
                });
            }
        }
        if let Some(slot) = &self.badge {
            if let Some(frame) = slot.frame(self.badge_anchor()) {
                out.badge = Some(BadgePart {
                    appearance: slot.badge.appearance(),
                    frame,
                    colors: slot.colors,
                });
            }
        }
        out
    }
}
