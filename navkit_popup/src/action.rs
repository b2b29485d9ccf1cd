// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating action menu.
//!
//! A single button that, on first tap, arms itself and fans its items out from
//! under it. A second tap on the armed button triggers its action; a tap on an
//! item triggers that item. Either way the menu closes and the items fly back
//! to the button's home position.

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::Point;
use navkit_page_menu::{EventSink, Icon, Transition};
use tracing::debug;

use crate::hamburger::{BACKGROUND_FADE, ITEM_APPEAR};
use crate::item::{ItemKind, MenuItem};

bitflags! {
    /// Action menu state bits.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ActionFlags: u8 {
        /// The next button tap triggers the action.
        const ARMED  = 1 << 0;
        /// Items are fanned out and the overlay takes taps.
        const OPEN   = 1 << 1;
        /// Button and overlay are hidden.
        const HIDDEN = 1 << 2;
    }
}

/// A pop item and where it sits while the menu is open.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionItem {
    /// The item.
    pub item: MenuItem,
    /// Center while open.
    pub target: Point,
}

/// Where a tap landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionHit {
    /// The main button.
    Button,
    /// A pop item.
    Item(usize),
    /// The overlay background of an open menu.
    Background,
}

/// Something the host should apply or react to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ActionMenuEvent {
    /// The button switched icons. Armed buttons show the active icon and title.
    Armed(bool),
    /// Raise the overlay and then the button above sibling content.
    BringToFront,
    /// Overlay background opacity.
    BackgroundAlpha {
        /// New opacity.
        alpha: f64,
        /// How to apply it.
        transition: Transition,
    },
    /// Whether the overlay takes taps.
    OverlayInteractive(bool),
    /// A pop item moved and was shown or hidden.
    ItemMoved {
        /// Item index.
        index: usize,
        /// New center.
        center: Point,
        /// Whether the item is shown afterwards.
        visible: bool,
        /// How to apply it.
        transition: Transition,
    },
    /// The menu finished opening.
    DidOpen,
    /// The menu finished closing.
    DidClose,
    /// The armed button was tapped.
    ActionTriggered,
    /// A pop item was tapped.
    ItemTriggered(usize),
    /// Button and overlay visibility changed.
    Hidden(bool),
}

/// Floating action menu state machine.
#[derive(Clone, Debug)]
pub struct ActionMenu {
    button: MenuItem,
    active_icon: Icon,
    home: Point,
    items: Vec<ActionItem>,
    flags: ActionFlags,
    background_alpha: f64,
}

impl ActionMenu {
    /// Create a closed menu. Items are parked, hidden, at the button's center.
    pub fn new(button: MenuItem, active_icon: Icon, mut items: Vec<ActionItem>) -> Self {
        let home = button.center();
        for entry in &mut items {
            entry.item.set_center(home);
            entry.item.deactivate();
        }
        Self {
            button,
            active_icon,
            home,
            items,
            flags: ActionFlags::default(),
            background_alpha: 0.0,
        }
    }

    /// State bits.
    pub fn flags(&self) -> ActionFlags {
        self.flags
    }

    /// True while the menu is open.
    pub fn is_open(&self) -> bool {
        self.flags.contains(ActionFlags::OPEN)
    }

    /// True while the next button tap triggers the action.
    pub fn is_armed(&self) -> bool {
        self.flags.contains(ActionFlags::ARMED)
    }

    /// True while button and overlay are hidden.
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(ActionFlags::HIDDEN)
    }

    /// The main button.
    pub fn button(&self) -> &MenuItem {
        &self.button
    }

    /// Icon the button shows right now.
    pub fn button_icon(&self) -> Option<Icon> {
        if self.is_armed() {
            return Some(self.active_icon);
        }
        match &self.button.kind {
            ItemKind::Icon { icon, .. } => Some(*icon),
            ItemKind::RoundImage { image } => Some(*image),
            _ => None,
        }
    }

    /// Whether the button's title is shown. Only armed buttons show it.
    pub fn is_button_title_visible(&self) -> bool {
        self.is_armed()
    }

    /// Where parked items sit.
    pub fn home(&self) -> Point {
        self.home
    }

    /// Pop items.
    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Overlay background opacity.
    pub fn background_alpha(&self) -> f64 {
        self.background_alpha
    }

    /// Which target is under `point`, without side effects.
    pub fn hit_test(&self, point: Point) -> Option<ActionHit> {
        if self.is_hidden() {
            return None;
        }
        if self.button.frame.contains(point) {
            return Some(ActionHit::Button);
        }
        if !self.is_open() {
            return None;
        }
        self.items
            .iter()
            .rposition(|e| e.item.tap_target().is_some_and(|r| r.contains(point)))
            .map(ActionHit::Item)
            .or(Some(ActionHit::Background))
    }

    /// Route a tap.
    pub fn tap(
        &mut self,
        point: Point,
        sink: &mut impl EventSink<ActionMenuEvent>,
    ) -> Option<ActionHit> {
        let hit = self.hit_test(point)?;
        match hit {
            ActionHit::Button => self.tap_button(sink),
            ActionHit::Item(index) => {
                self.tap_item(index, sink);
            }
            ActionHit::Background => self.tap_background(sink),
        }
        Some(hit)
    }

    /// First tap arms and opens; a tap on the armed button triggers and closes.
    pub fn tap_button(&mut self, sink: &mut impl EventSink<ActionMenuEvent>) {
        if self.is_armed() {
            sink.emit(ActionMenuEvent::ActionTriggered);
            self.close(sink);
        } else {
            self.flags.insert(ActionFlags::ARMED);
            sink.emit(ActionMenuEvent::Armed(true));
            self.open(sink);
        }
    }

    /// Trigger item `index` and close. Ignored unless open.
    pub fn tap_item(&mut self, index: usize, sink: &mut impl EventSink<ActionMenuEvent>) -> bool {
        if !self.is_open() || index >= self.items.len() {
            return false;
        }
        sink.emit(ActionMenuEvent::ItemTriggered(index));
        self.close(sink);
        true
    }

    /// Close without triggering anything.
    pub fn tap_background(&mut self, sink: &mut impl EventSink<ActionMenuEvent>) {
        if self.is_open() {
            self.close(sink);
        }
    }

    /// Hide or show the button and overlay. An open menu closes before hiding.
    pub fn set_hidden(&mut self, hidden: bool, sink: &mut impl EventSink<ActionMenuEvent>) {
        if self.is_hidden() == hidden {
            return;
        }
        if hidden && self.is_open() {
            self.close(sink);
        }
        self.flags.set(ActionFlags::HIDDEN, hidden);
        sink.emit(ActionMenuEvent::Hidden(hidden));
    }

    fn open(&mut self, sink: &mut impl EventSink<ActionMenuEvent>) {
        self.flags.insert(ActionFlags::OPEN);
        self.background_alpha = 1.0;
        debug!(items = self.items.len(), "action menu open");
        sink.emit(ActionMenuEvent::BringToFront);
        sink.emit(ActionMenuEvent::BackgroundAlpha {
            alpha: 1.0,
            transition: BACKGROUND_FADE,
        });
        sink.emit(ActionMenuEvent::OverlayInteractive(true));
        for (index, entry) in self.items.iter_mut().enumerate() {
            entry.item.set_center(entry.target);
            entry.item.activate();
            sink.emit(ActionMenuEvent::ItemMoved {
                index,
                center: entry.target,
                visible: true,
                transition: ITEM_APPEAR,
            });
        }
        sink.emit(ActionMenuEvent::DidOpen);
    }

    fn close(&mut self, sink: &mut impl EventSink<ActionMenuEvent>) {
        self.flags.remove(ActionFlags::OPEN);
        self.background_alpha = 0.0;
        debug!("action menu close");
        sink.emit(ActionMenuEvent::BackgroundAlpha {
            alpha: 0.0,
            transition: BACKGROUND_FADE,
        });
        sink.emit(ActionMenuEvent::OverlayInteractive(false));
        for (index, entry) in self.items.iter_mut().enumerate() {
            entry.item.set_center(self.home);
            entry.item.deactivate();
            sink.emit(ActionMenuEvent::ItemMoved {
                index,
                center: self.home,
                visible: false,
                transition: ITEM_APPEAR,
            });
        }
        if self.is_armed() {
            self.flags.remove(ActionFlags::ARMED);
            sink.emit(ActionMenuEvent::Armed(false));
        }
        sink.emit(ActionMenuEvent::DidClose);
    }
}
