// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hamburger menu: a round button that opens a full-screen overlay of items.
//!
//! ## States
//!
//! | State | Button | Items | Overlay |
//! | --- | --- | --- | --- |
//! | [`MenuState::Close`] | blurred, menu icon | hidden | transparent, ignores taps |
//! | [`MenuState::Open`] | ring, menu icon rotated a quarter turn | shown | opaque, takes taps |
//! | [`MenuState::Back`] | blurred, back icon | hidden | transparent, ignores taps |
//! | [`MenuState::Disable`] | hidden and disabled | hidden | transparent, ignores taps |
//!
//! The menu never changes state on its own. Taps are routed and reported
//! (for example [`HamburgerEvent::ButtonTapped`] with the current state), and
//! the host decides what to do with [`HamburgerMenu::set_state`].

use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;
use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use navkit_page_menu::{Color, EventSink, Icon, ItemFlags, Transition};
use tracing::debug;

use crate::badge::{Badge, BadgeSlot, ROUND_BADGE_OFFSET, round_anchor};
use crate::item::MenuItem;

/// Fade of the overlay background.
pub const BACKGROUND_FADE: Transition = Transition::Animated(Duration::from_millis(400));
/// Items popping in when the menu opens, and the button icon turning.
pub const ITEM_APPEAR: Transition = Transition::Animated(Duration::from_millis(200));

/// Hamburger menu state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Button shown, menu closed.
    #[default]
    Close,
    /// Menu open.
    Open,
    /// Button shows a back arrow.
    Back,
    /// Button hidden.
    Disable,
}

/// What the button shows in a state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonAppearance {
    /// Blurred background disc.
    pub blurred: bool,
    /// Thin ring around the button.
    pub ring: bool,
    /// Menu icon shown.
    pub menu_icon: bool,
    /// Back icon shown.
    pub back_icon: bool,
    /// Button shown at all.
    pub visible: bool,
    /// Button accepts taps.
    pub enabled: bool,
    /// Rotation of the menu icon in radians.
    pub icon_rotation: f64,
}

impl ButtonAppearance {
    /// Appearance for `state`. Back and Disable keep `rotation` as is.
    pub fn for_state(state: MenuState, rotation: f64) -> Self {
        let shown = Self {
            blurred: true,
            ring: false,
            menu_icon: true,
            back_icon: false,
            visible: true,
            enabled: true,
            icon_rotation: rotation,
        };
        match state {
            MenuState::Close => Self {
                icon_rotation: 0.0,
                ..shown
            },
            MenuState::Open => Self {
                blurred: false,
                ring: true,
                icon_rotation: -FRAC_PI_2,
                ..shown
            },
            MenuState::Back => Self {
                menu_icon: false,
                back_icon: true,
                ..shown
            },
            MenuState::Disable => Self {
                visible: false,
                enabled: false,
                ..shown
            },
        }
    }
}

/// The round menu button.
#[derive(Clone, Debug, PartialEq)]
pub struct HamburgerButton {
    /// Frame in overlay coordinates.
    pub frame: Rect,
    /// Icon shown while closed or open.
    pub menu_icon: Icon,
    /// Icon shown in the back state.
    pub back_icon: Icon,
    /// Shift of the back icon from the button center.
    pub back_icon_offset: Vec2,
    /// Badge on the button's rim.
    pub badge: BadgeSlot,
    /// Ring thickness.
    pub border_width: f64,
    /// Ring color.
    pub border_color: Color,
}

impl HamburgerButton {
    /// Create a button of `size` centered at `center`.
    pub fn new(center: Point, size: Size, menu_icon: Icon, back_icon: Icon) -> Self {
        Self {
            frame: Rect::from_center_size(center, size),
            menu_icon,
            back_icon,
            back_icon_offset: Vec2::ZERO,
            badge: BadgeSlot::new(Badge::None, ROUND_BADGE_OFFSET),
            border_width: 0.5,
            border_color: Color::rgb(84, 84, 84),
        }
    }

    /// Menu icon frame in button coordinates.
    pub fn menu_icon_frame(&self) -> Rect {
        let center = (self.frame.size().to_vec2() / 2.0).to_point();
        Rect::from_center_size(center, self.menu_icon.size)
    }

    /// Back icon frame in button coordinates.
    pub fn back_icon_frame(&self) -> Rect {
        let center = (self.frame.size().to_vec2() / 2.0).to_point() + self.back_icon_offset;
        Rect::from_center_size(center, self.back_icon.size)
    }

    /// Badge frame in button coordinates, if the badge is visible.
    pub fn badge_frame(&self) -> Option<Rect> {
        self.badge.frame(round_anchor(self.frame.height() / 2.0))
    }
}

/// Where a tap landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HamburgerHit {
    /// The menu button.
    Button,
    /// An active item.
    Item(usize),
    /// The overlay background of an open menu.
    Background,
}

/// Something the host should apply or react to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HamburgerEvent {
    /// New button appearance. The icon rotation animates; the rest applies at once.
    ButtonAppearance {
        /// Resolved appearance.
        appearance: ButtonAppearance,
        /// How to apply the icon rotation.
        transition: Transition,
    },
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
    /// Item shown and enabled.
    ItemActivated {
        /// Item index.
        index: usize,
        /// How to apply it.
        transition: Transition,
    },
    /// Item hidden and disabled.
    ItemDeactivated {
        /// Item index.
        index: usize,
        /// How to apply it.
        transition: Transition,
    },
    /// An item's selection flipped.
    ItemSelected {
        /// Item index.
        index: usize,
        /// New state.
        selected: bool,
    },
    /// The state changed. Emitted after everything the change implies.
    StateChanged {
        /// State before.
        previous: MenuState,
        /// State after.
        next: MenuState,
    },
    /// The button was tapped in the given state.
    ButtonTapped(MenuState),
    /// The button was long-pressed in the given state.
    ButtonLongPressed(MenuState),
    /// An item was tapped in the given menu state.
    ItemTapped {
        /// Item index.
        index: usize,
        /// Menu state at the time.
        state: MenuState,
    },
    /// The background of the open menu was tapped.
    BackgroundTapped,
}

/// Hamburger menu state machine.
#[derive(Clone, Debug)]
pub struct HamburgerMenu {
    state: MenuState,
    button: HamburgerButton,
    items: Vec<MenuItem>,
    rotation: f64,
    background_alpha: f64,
    overlay_interactive: bool,
}

impl HamburgerMenu {
    /// Create a closed menu. Items start hidden.
    pub fn new(button: HamburgerButton, mut items: Vec<MenuItem>) -> Self {
        for item in &mut items {
            item.deactivate();
        }
        Self {
            state: MenuState::Close,
            button,
            items,
            rotation: 0.0,
            background_alpha: 0.0,
            overlay_interactive: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The button.
    pub fn button(&self) -> &HamburgerButton {
        &self.button
    }

    /// Mutable access to the button, for badge and style changes.
    pub fn button_mut(&mut self) -> &mut HamburgerButton {
        &mut self.button
    }

    /// Items in insertion order (later items draw on top).
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Mutable item access, for badge and content changes.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut MenuItem> {
        self.items.get_mut(index)
    }

    /// Current button appearance.
    pub fn button_appearance(&self) -> ButtonAppearance {
        ButtonAppearance::for_state(self.state, self.rotation)
    }

    /// Overlay background opacity.
    pub fn background_alpha(&self) -> f64 {
        self.background_alpha
    }

    /// True while the overlay takes taps.
    pub fn is_overlay_interactive(&self) -> bool {
        self.overlay_interactive
    }

    /// Index of the selected item.
    pub fn selected_item(&self) -> Option<usize> {
        self.items.iter().position(MenuItem::is_selected)
    }

    /// Switch to `next`. Applying the current state again does nothing.
    pub fn set_state(&mut self, next: MenuState, sink: &mut impl EventSink<HamburgerEvent>) {
        let previous = self.state;
        if previous == next {
            return;
        }
        self.state = next;
        let appearance = ButtonAppearance::for_state(next, self.rotation);
        self.rotation = appearance.icon_rotation;
        debug!(?previous, ?next, "hamburger state");

        sink.emit(HamburgerEvent::ButtonAppearance {
            appearance,
            transition: ITEM_APPEAR,
        });
        let open = next == MenuState::Open;
        if open {
            sink.emit(HamburgerEvent::BringToFront);
        }
        self.background_alpha = if open { 1.0 } else { 0.0 };
        sink.emit(HamburgerEvent::BackgroundAlpha {
            alpha: self.background_alpha,
            transition: BACKGROUND_FADE,
        });
        self.overlay_interactive = open;
        sink.emit(HamburgerEvent::OverlayInteractive(open));
        for (index, item) in self.items.iter_mut().enumerate() {
            if open {
                item.activate();
                sink.emit(HamburgerEvent::ItemActivated {
                    index,
                    transition: ITEM_APPEAR,
                });
            } else {
                item.deactivate();
                sink.emit(HamburgerEvent::ItemDeactivated {
                    index,
                    transition: Transition::Immediate,
                });
            }
        }
        sink.emit(HamburgerEvent::StateChanged { previous, next });
    }

    /// Mark exactly `index` as selected, or nothing for `None`.
    ///
    /// Out-of-range indices clear the selection.
    pub fn select_item(&mut self, index: Option<usize>, sink: &mut impl EventSink<HamburgerEvent>) {
        for (i, item) in self.items.iter_mut().enumerate() {
            let selected = Some(i) == index;
            if item.is_selected() != selected {
                item.flags.set(ItemFlags::SELECTED, selected);
                sink.emit(HamburgerEvent::ItemSelected { index: i, selected });
            }
        }
    }

    /// Which target is under `point`, without side effects.
    pub fn hit_test(&self, point: Point) -> Option<HamburgerHit> {
        if self.button_appearance().enabled && self.button.frame.contains(point) {
            return Some(HamburgerHit::Button);
        }
        if !self.overlay_interactive {
            return None;
        }
        self.items
            .iter()
            .rposition(|item| item.tap_target().is_some_and(|r| r.contains(point)))
            .map(HamburgerHit::Item)
            .or(Some(HamburgerHit::Background))
    }

    /// Route a tap.
    ///
    /// A tapped item is disabled and faded out right away, then reported.
    pub fn tap(
        &mut self,
        point: Point,
        sink: &mut impl EventSink<HamburgerEvent>,
    ) -> Option<HamburgerHit> {
        let hit = self.hit_test(point)?;
        match hit {
            HamburgerHit::Button => sink.emit(HamburgerEvent::ButtonTapped(self.state)),
            HamburgerHit::Item(index) => {
                self.items[index].deactivate();
                sink.emit(HamburgerEvent::ItemDeactivated {
                    index,
                    transition: ITEM_APPEAR,
                });
                sink.emit(HamburgerEvent::ItemTapped {
                    index,
                    state: self.state,
                });
            }
            HamburgerHit::Background => sink.emit(HamburgerEvent::BackgroundTapped),
        }
        Some(hit)
    }

    /// Route a long press. Only the button reacts.
    pub fn long_press(&mut self, point: Point, sink: &mut impl EventSink<HamburgerEvent>) -> bool {
        let on_button = self.hit_test(point) == Some(HamburgerHit::Button);
        if on_button {
            sink.emit(HamburgerEvent::ButtonLongPressed(self.state));
        }
        on_button
    }
}
