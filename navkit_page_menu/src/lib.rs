// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navkit Page Menu: a headless, `no_std` controller for paged content with a synchronized tab strip.
//!
//! ## Overview
//!
//! A page menu shows one page of content at a time in a horizontally paging
//! content region, with a row of tabs above it. This crate keeps the two in
//! sync without drawing anything:
//!
//! - Swiping the content selects the tab of the page nearest to the offset and
//!   scrolls the tab strip proportionally.
//! - Tapping a tab moves the content to its page.
//! - A selection indicator follows the current tab.
//! - Pages are mounted only within a preload window around the current page.
//! - Vertical scrolling inside a page can collapse the tab strip.
//!
//! The host forwards scroll, tap and size input to a [`PagedMenuController`]
//! and applies the [`PageMenuEvent`]s it emits.
//!
//! ## Layout modes
//!
//! [`PageMenuOptions`] selects one [`LayoutMode`]: fixed-width tabs
//! (optionally centered), tabs sized by their measured titles, or a segmented
//! strip that splits the view width evenly. Titles are measured by a
//! [`TextMeasure`] collaborator, which any `Fn(&str, &FontSpec) -> f64` closure
//! satisfies.
//!
//! ## Not a renderer
//!
//! Animations are described, not run. Events carry a [`Transition`]; animated
//! content moves also carry a [`TransitionId`] that the host hands back to
//! [`PagedMenuController::content_transition_finished`] when the animation ends.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Size};
//! use navkit_page_menu::{
//!     FontSpec, PageDescriptor, PageMenuEvent, PageMenuOptions, PagedMenuController,
//! };
//!
//! let pages = vec![
//!     PageDescriptor::new("inbox").with_title("Inbox"),
//!     PageDescriptor::new("sent").with_title("Sent"),
//!     PageDescriptor::new("drafts").with_title("Drafts"),
//! ];
//! let measure = |text: &str, font: &FontSpec| text.len() as f64 * font.size * 0.6;
//!
//! let mut events = Vec::new();
//! let mut menu = PagedMenuController::new(
//!     pages,
//!     Size::new(320.0, 480.0),
//!     0,
//!     PageMenuOptions::default(),
//!     &measure,
//!     &mut events,
//! )
//! .unwrap();
//! assert_eq!(menu.current_page_index(), 0);
//!
//! // Swipe most of the way to the second page.
//! events.clear();
//! menu.content_did_scroll(200.0, &mut events);
//! assert_eq!(menu.current_page_index(), 1);
//! assert!(events.contains(&PageMenuEvent::PageChanged { previous: Some(0), current: 1 }));
//!
//! // Jump to the last page without animation.
//! events.clear();
//! assert!(menu.move_to_page(2, false, &mut events));
//! assert_eq!(events.last(), Some(&PageMenuEvent::DidMoveToPage(2)));
//!
//! // A tap on the first tab (fixed width: 15..126).
//! events.clear();
//! assert_eq!(menu.tap_menu(Point::new(60.0, 10.0), &mut events), Some(0));
//! ```

#![no_std]

extern crate alloc;

pub mod collapse;
pub mod controller;
pub mod error;
pub mod events;
pub mod layout;
pub mod options;
pub mod preload;
pub mod types;

pub use collapse::{CollapsingHeader, VerticalScroll};
pub use controller::PagedMenuController;
pub use error::ConfigurationError;
pub use events::{EventSink, PageMenuEvent};
pub use layout::{MenuLayout, TextMeasure};
pub use options::{Color, FontSpec, Hairline, LayoutMode, PageMenuOption, PageMenuOptions};
pub use preload::{MountChange, PreloadWindow};
pub use types::{
    Icon, IconPair, ItemFlags, MenuItemGeometry, PageDescriptor, RegionId, Transition,
    TransitionId,
};
