// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navkit Popup: headless popup navigation menus.
//!
//! This crate provides the state machines and sub-layouts behind two overlay
//! menus, without drawing anything:
//!
//! - [`HamburgerMenu`]: a round button that opens a full-screen overlay of
//!   items and can also show a back arrow or hide itself.
//! - [`ActionMenu`]: a floating button that fans out action items on the first
//!   tap and triggers its own action on the second.
//!
//! Both are built from [`MenuItem`]s, which lay out a title, an icon with a
//! title, an info label with a caption, or a round image. Any item can carry a
//! [`Badge`] (a dot, a counter or two characters of text).
//!
//! Like `navkit_page_menu`, the menus report through an
//! [`EventSink`](navkit_page_menu::EventSink) and leave drawing and animation
//! to the host.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Point, Size};
//! use navkit_page_menu::Icon;
//! use navkit_popup::{
//!     HamburgerButton, HamburgerEvent, HamburgerHit, HamburgerMenu, ItemKind, MenuItem, MenuState,
//! };
//!
//! let icon = Icon { id: 1, size: Size::new(20.0, 20.0) };
//! let button = HamburgerButton::new(Point::new(30.0, 30.0), Size::new(40.0, 40.0), icon, icon);
//! let items = vec![MenuItem::new(
//!     ItemKind::Titled { title: "Settings".into() },
//!     Point::new(160.0, 240.0),
//!     Size::new(80.0, 80.0),
//! )];
//! let mut menu = HamburgerMenu::new(button, items);
//!
//! // The menu reports the tap; the host decides to open it.
//! let mut events = Vec::new();
//! assert_eq!(menu.tap(Point::new(30.0, 30.0), &mut events), Some(HamburgerHit::Button));
//! assert_eq!(events, [HamburgerEvent::ButtonTapped(MenuState::Close)]);
//! menu.set_state(MenuState::Open, &mut events);
//!
//! // Items take taps while open.
//! assert_eq!(menu.tap(Point::new(160.0, 240.0), &mut events), Some(HamburgerHit::Item(0)));
//! ```

#![no_std]

extern crate alloc;

pub mod action;
pub mod badge;
pub mod hamburger;
pub mod item;

pub use action::{ActionFlags, ActionHit, ActionItem, ActionMenu, ActionMenuEvent};
pub use badge::{Badge, BadgeAppearance, BadgeColors, BadgeSlot};
pub use hamburger::{
    ButtonAppearance, HamburgerButton, HamburgerEvent, HamburgerHit, HamburgerMenu, MenuState,
};
pub use item::{ItemAppearance, ItemKind, ItemPalette, MenuItem};
