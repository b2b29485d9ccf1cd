// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page menu basics: swipe, tap and jump between pages.
//!
//! This example builds a controller over five pages, then drives it with a
//! content swipe, a tab tap and an animated jump, printing the events a host
//! would apply.
//!
//! Run:
//! - `cargo run -p navkit_demos --example page_menu_basics`

use kurbo::{Point, Size};
use navkit_page_menu::{
    FontSpec, PageDescriptor, PageMenuEvent, PageMenuOption, PageMenuOptions, PagedMenuController,
};

fn print_events(label: &str, events: &mut Vec<PageMenuEvent<&'static str>>) {
    println!("== {label}");
    for e in events.drain(..) {
        if e.is_notification() {
            println!("  * {e:?}");
        } else {
            println!("    {e:?}");
        }
    }
}

fn main() {
    let pages = ["Favorites", "Recent", "Contacts", "Keypad", "Voicemail"]
        .into_iter()
        .map(|title| PageDescriptor::new(title).with_title(title))
        .collect();
    let options: PageMenuOptions = [
        PageMenuOption::MenuItemWidthBasedOnTitleWidth(true),
        PageMenuOption::PagesPreloadingOffset(1),
    ]
    .into_iter()
    .collect();
    // Rough text metrics: 0.6 em per character.
    let measure = |text: &str, font: &FontSpec| text.chars().count() as f64 * font.size * 0.6;

    let mut events = Vec::new();
    let mut menu = PagedMenuController::new(
        pages,
        Size::new(375.0, 667.0),
        0,
        options,
        &measure,
        &mut events,
    )
    .expect("five pages and a real frame");
    print_events("construct", &mut events);

    // Drag the content past the midpoint of the second page.
    for x in [80.0, 160.0, 240.0] {
        menu.content_did_scroll(x, &mut events);
    }
    let page = menu.snap_to_nearest_page(240.0, &mut events);
    print_events(&format!("swipe (snapped to {page})"), &mut events);

    // Tap the third tab (strip content coordinates).
    let third = menu.layout().frame(2).expect("three tabs");
    let tap = Point::new(third.center().x, 10.0);
    let hit = menu.tap_menu(tap, &mut events);
    print_events(&format!("tap at {:.0} -> {hit:?}", tap.x), &mut events);

    // Animated jump: the host reports when the animation ends.
    menu.move_to_page(4, true, &mut events);
    let id = events.iter().find_map(|e| match e {
        PageMenuEvent::ContentOffset { id, .. } => *id,
        _ => None,
    });
    print_events("move_to_page(4, animated)", &mut events);
    if let Some(id) = id {
        menu.content_transition_finished(id, &mut events);
        print_events("animation finished", &mut events);
    }

    println!(
        "current = {}, mounted = {:?}",
        menu.current_page_index(),
        menu.mounted_pages().collect::<Vec<_>>()
    );
}
