// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsing tab strip driven by a vertical list inside a page.
//!
//! Scrolling a long list down slides the strip up and fades it; releasing the
//! drag settles it fully shown or fully collapsed.
//!
//! Run:
//! - `cargo run -p navkit_demos --example page_menu_collapsing`

use kurbo::Size;
use navkit_page_menu::{
    FontSpec, PageDescriptor, PageMenuEvent, PageMenuOptions, PagedMenuController, RegionId,
    VerticalScroll,
};

fn list_at(offset: f64) -> VerticalScroll {
    VerticalScroll {
        offset,
        viewport_height: 600.0,
        content_height: 2400.0,
        inset_top: 0.0,
        inset_bottom: 0.0,
    }
}

fn main() {
    let pages = vec![
        PageDescriptor::new("feed").with_title("Feed"),
        PageDescriptor::new("people").with_title("People"),
    ];
    let options = PageMenuOptions {
        min_menu_height_on_scroll: 0.0,
        ..PageMenuOptions::default()
    };
    let measure = |text: &str, font: &FontSpec| text.len() as f64 * font.size * 0.6;

    let mut events: Vec<PageMenuEvent<&str>> = Vec::new();
    let mut menu = PagedMenuController::new(
        pages,
        Size::new(375.0, 667.0),
        0,
        options,
        &measure,
        &mut events,
    )
    .expect("two pages and a real frame");
    events.clear();

    let list = RegionId(7);
    for y in [0.0, 8.0, 16.0, 24.0] {
        menu.container_did_scroll(list, list_at(y), &mut events);
        println!(
            "list y = {y:>4}: strip offset {:>6.1}, alpha {:.2}",
            menu.menu_vertical_offset(),
            menu.menu_alpha()
        );
    }

    // Let go mid-collapse without momentum: the strip picks a side.
    events.clear();
    menu.container_did_end_dragging(list, false, &mut events);
    println!(
        "settled: strip offset {:.1}, alpha {:.2}",
        menu.menu_vertical_offset(),
        menu.menu_alpha()
    );
    for e in &events {
        println!("    {e:?}");
    }

    // Scrolling back up reveals it again.
    events.clear();
    menu.container_did_scroll(list, list_at(10.0), &mut events);
    menu.container_did_end_decelerating(list, &mut events);
    println!(
        "after scrolling up: strip offset {:.1}, alpha {:.2}",
        menu.menu_vertical_offset(),
        menu.menu_alpha()
    );
    menu.container_removed(list);
}
