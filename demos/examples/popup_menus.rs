// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hamburger and action menus.
//!
//! The hamburger menu only reports taps; this host opens and closes it in
//! response. The action menu arms on the first tap and triggers on the second.
//!
//! Run:
//! - `cargo run -p navkit_demos --example popup_menus`

use kurbo::{Point, Size};
use navkit_page_menu::Icon;
use navkit_popup::{
    ActionItem, ActionMenu, Badge, HamburgerButton, HamburgerEvent, HamburgerMenu, ItemKind,
    MenuItem, MenuState,
};

fn icon(id: u32) -> Icon {
    Icon {
        id,
        size: Size::new(24.0, 24.0),
    }
}

fn hamburger() {
    let button = HamburgerButton::new(
        Point::new(36.0, 36.0),
        Size::new(44.0, 44.0),
        icon(1),
        icon(2),
    );
    let titles = ["Home", "Inbox", "Profile"];
    let items = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let item = MenuItem::new(
                ItemKind::Icon {
                    icon: icon(10 + i as u32),
                    title: (*title).into(),
                },
                Point::new(90.0 + 100.0 * i as f64, 300.0),
                Size::new(80.0, 80.0),
            );
            if *title == "Inbox" {
                item.with_badge(Badge::Number(3))
            } else {
                item
            }
        })
        .collect();
    let mut menu = HamburgerMenu::new(button, items);
    menu.button_mut().badge.badge = Badge::Mark;

    let taps = [
        Point::new(36.0, 36.0),
        Point::new(190.0, 300.0),
        Point::new(36.0, 36.0),
        Point::new(300.0, 600.0),
    ];
    let mut events = Vec::new();
    for p in taps {
        let hit = menu.tap(p, &mut events);
        println!("tap {p:?} -> {hit:?}");
        let replies: Vec<_> = events.drain(..).collect();
        for e in &replies {
            println!("    {e:?}");
            // Host policy: the button toggles the menu, anything else closes it.
            let next = match e {
                HamburgerEvent::ButtonTapped(MenuState::Close) => Some(MenuState::Open),
                HamburgerEvent::ButtonTapped(MenuState::Open)
                | HamburgerEvent::BackgroundTapped => Some(MenuState::Close),
                HamburgerEvent::ItemTapped { index, .. } => {
                    menu.select_item(Some(*index), &mut events);
                    Some(MenuState::Close)
                }
                _ => None,
            };
            if let Some(next) = next {
                menu.set_state(next, &mut events);
            }
        }
        println!("  state = {:?}, selected = {:?}", menu.state(), menu.selected_item());
        events.clear();
    }

    let inbox = menu.items()[1].render(true);
    println!("inbox badge: {:?}", inbox.badge.map(|b| b.frame));
}

fn action() {
    let mut button = MenuItem::new(
        ItemKind::Icon {
            icon: icon(20),
            title: "Post".into(),
        },
        Point::ORIGIN,
        Size::new(56.0, 56.0),
    );
    button.set_center(Point::new(320.0, 600.0));
    let items = vec![
        ActionItem {
            item: MenuItem::new(
                ItemKind::RoundImage { image: icon(21) },
                Point::ORIGIN,
                Size::new(48.0, 48.0),
            ),
            target: Point::new(320.0, 520.0),
        },
        ActionItem {
            item: MenuItem::new(
                ItemKind::RoundImage { image: icon(22) },
                Point::ORIGIN,
                Size::new(48.0, 48.0),
            ),
            target: Point::new(240.0, 600.0),
        },
    ];
    let mut menu = ActionMenu::new(button, icon(29), items);

    let mut events = Vec::new();
    menu.tap_button(&mut events);
    println!("first tap: armed = {}, open = {}", menu.is_armed(), menu.is_open());
    menu.tap(Point::new(240.0, 600.0), &mut events);
    for e in events.drain(..) {
        println!("    {e:?}");
    }
    println!("after item tap: open = {}", menu.is_open());
}

fn main() {
    hamburger();
    action();
}
