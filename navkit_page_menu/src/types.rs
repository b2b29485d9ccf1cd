// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the page menu: page descriptors, item geometry, flags, and transitions.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use core::time::Duration;

use kurbo::{Point, Rect, Size};

/// Identifier for a vertically scrolling region embedded in a page.
///
/// The host picks the values; the controller only uses them as keys for the
/// previous-offset memo of the collapsing header.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RegionId(pub u64);

/// Opaque icon handle plus its natural size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Icon {
    /// Host-defined image identifier.
    pub id: u32,
    /// Natural size of the image.
    pub size: Size,
}

/// Icons shown for a tab in its selected and unselected states.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IconPair {
    /// Icon shown while the tab is selected.
    pub selected: Icon,
    /// Icon shown otherwise.
    pub unselected: Icon,
}

impl IconPair {
    /// Icon for the given selection state.
    pub fn for_state(&self, selected: bool) -> Icon {
        if selected {
            self.selected
        } else {
            self.unselected
        }
    }

    /// Frame of the icon inside a tab of size `item`, in tab-local coordinates.
    ///
    /// The icon keeps its natural size and is centered horizontally at a
    /// vertical center of `top_offset`.
    pub fn frame_in(&self, item: Size, top_offset: f64, selected: bool) -> Rect {
        let icon = self.for_state(selected);
        Rect::from_center_size(Point::new(item.width / 2.0, top_offset), icon.size)
    }
}

/// One page of the menu.
///
/// Descriptors are handed to the controller at construction and never change
/// afterwards. The content handle is owned by the host; the controller only
/// clones it into mount events.
#[derive(Clone, Debug)]
pub struct PageDescriptor<C> {
    /// Host handle for the page content.
    pub content: C,
    /// Title shown in the tab strip. Pages without one are labeled `Menu <n>`.
    pub title: Option<String>,
    /// Icons used when the menu is configured to show icons.
    pub icons: Option<IconPair>,
}

impl<C> PageDescriptor<C> {
    /// Create an untitled page without icons.
    pub fn new(content: C) -> Self {
        Self {
            content,
            title: None,
            icons: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the icon pair.
    pub fn with_icons(mut self, icons: IconPair) -> Self {
        self.icons = Some(icons);
        self
    }

    /// Title to display for the page at `index`.
    pub fn display_title(&self, index: usize) -> Cow<'_, str> {
        match &self.title {
            Some(t) => Cow::Borrowed(t.as_str()),
            None => Cow::Owned(format!("Menu {}", index + 1)),
        }
    }
}

bitflags::bitflags! {
    /// State bits carried by menu items.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is the active one.
        const SELECTED = 0b0000_0001;
        /// Item accepts taps.
        const ENABLED  = 0b0000_0010;
        /// Item is shown.
        const VISIBLE  = 0b0000_0100;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::ENABLED | Self::VISIBLE
    }
}

/// Geometry of one tab in the tab strip.
///
/// Only the layout pass writes frames and only page changes flip
/// [`ItemFlags::SELECTED`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MenuItemGeometry {
    /// Tab rectangle in tab-strip content coordinates, rounded to integers.
    pub frame: Rect,
    /// State bits.
    pub flags: ItemFlags,
}

impl MenuItemGeometry {
    /// True if this tab belongs to the current page.
    pub fn is_selected(&self) -> bool {
        self.flags.contains(ItemFlags::SELECTED)
    }
}

/// How a visual change should be applied by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Apply at once.
    Immediate,
    /// Animate over the given duration.
    Animated(Duration),
}

impl Transition {
    /// Selection indicator slide after a page change.
    pub const INDICATOR: Self = Self::Animated(Duration::from_millis(150));
    /// Collapsing header snapping to shown or hidden.
    pub const HEADER_SNAP: Self = Self::Animated(Duration::from_millis(200));

    /// True for [`Transition::Animated`].
    pub fn is_animated(self) -> bool {
        matches!(self, Self::Animated(_))
    }
}

/// Token identifying an animated content-region transition.
///
/// Returned inside [`PageMenuEvent::ContentOffset`](crate::PageMenuEvent::ContentOffset)
/// and passed back to
/// [`PagedMenuController::content_transition_finished`](crate::PagedMenuController::content_transition_finished)
/// when the animation completes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TransitionId(pub(crate) u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_pages_get_numbered_titles() {
        let p = PageDescriptor::new(());
        assert_eq!(p.display_title(0), "Menu 1");
        assert_eq!(p.display_title(4), "Menu 5");
        let p = p.with_title("Inbox");
        assert_eq!(p.display_title(4), "Inbox");
    }

    #[test]
    fn icon_frame_is_centered_at_top_offset() {
        let pair = IconPair {
            selected: Icon {
                id: 1,
                size: Size::new(20.0, 10.0),
            },
            unselected: Icon {
                id: 2,
                size: Size::new(10.0, 10.0),
            },
        };
        let r = pair.frame_in(Size::new(100.0, 34.0), 17.0, true);
        assert_eq!(r, Rect::new(40.0, 12.0, 60.0, 22.0));
        let r = pair.frame_in(Size::new(100.0, 34.0), 17.0, false);
        assert_eq!(r, Rect::new(45.0, 12.0, 55.0, 22.0));
    }

    #[test]
    fn default_flags_are_enabled_and_visible() {
        let f = ItemFlags::default();
        assert!(f.contains(ItemFlags::ENABLED | ItemFlags::VISIBLE));
        assert!(!f.contains(ItemFlags::SELECTED));
    }
}
