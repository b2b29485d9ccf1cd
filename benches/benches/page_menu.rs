// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use navkit_page_menu::{
    FontSpec, MenuLayout, PageDescriptor, PageMenuEvent, PageMenuOptions, PagedMenuController,
    RegionId, VerticalScroll,
};

fn measure(text: &str, font: &FontSpec) -> f64 {
    text.chars().count() as f64 * font.size * 0.55
}

fn gen_pages(n: usize) -> Vec<PageDescriptor<usize>> {
    (0..n)
        .map(|i| PageDescriptor::new(i).with_title(format!("Page {i}")))
        .collect()
}

fn gen_title_widths(n: usize) -> Vec<f64> {
    // Varied but deterministic widths.
    (0..n).map(|i| 40.0 + ((i * 37) % 60) as f64).collect()
}

fn options_for(mode: &str) -> PageMenuOptions {
    let mut opts = PageMenuOptions::default();
    match mode {
        "title_width" => opts.menu_item_width_based_on_title_width = true,
        "segmented" => opts.use_segmented_control_layout = true,
        "centered" => opts.center_menu_items = true,
        _ => {}
    }
    opts
}

fn controller(n: usize) -> PagedMenuController<usize> {
    let mut sink = Vec::new();
    PagedMenuController::new(
        gen_pages(n),
        Size::new(375.0, 667.0),
        0,
        PageMenuOptions::default(),
        &measure,
        &mut sink,
    )
    .expect("valid menu")
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[8_usize, 64, 512] {
        let widths = gen_title_widths(n);
        group.throughput(Throughput::Elements(n as u64));
        for mode in ["fixed", "centered", "title_width", "segmented"] {
            let opts = options_for(mode);
            group.bench_function(format!("compute_{mode}_n{n}"), |b| {
                b.iter(|| black_box(MenuLayout::compute(&opts, 375.0, black_box(&widths))));
            });
        }
        let opts = options_for("title_width");
        let layout = MenuLayout::compute(&opts, 375.0, &widths);
        let right = layout.content_width();
        group.bench_function(format!("hit_test_title_width_n{n}"), |b| {
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 13.7) % right;
                black_box(layout.hit_test(black_box(x)))
            });
        });
    }
    group.finish();
}

fn bench_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll");
    for &n in &[8_usize, 64] {
        let width = 375.0;
        let steps = 200;
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_function(format!("content_sweep_n{n}"), |b| {
            b.iter_batched(
                || (controller(n), Vec::<PageMenuEvent<usize>>::with_capacity(64)),
                |(mut menu, mut sink)| {
                    let end = width * (n - 1) as f64;
                    for step in 0..=steps {
                        let x = end * step as f64 / steps as f64;
                        menu.content_did_scroll(x, &mut sink);
                        sink.clear();
                    }
                    black_box(menu.current_page_index())
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("tap_cycle_n{n}"), |b| {
            b.iter_batched(
                || (controller(n), Vec::<PageMenuEvent<usize>>::with_capacity(64)),
                |(mut menu, mut sink)| {
                    for i in 0..n {
                        if let Some(frame) = menu.layout().frame(i) {
                            let p = Point::new(frame.center().x, 10.0);
                            menu.tap_menu(p, &mut sink);
                        }
                        sink.clear();
                    }
                    black_box(menu.current_page_index())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.bench_function("header_collapse_sweep", |b| {
        b.iter_batched(
            || (controller(8), Vec::<PageMenuEvent<usize>>::with_capacity(16)),
            |(mut menu, mut sink)| {
                for step in 0..400 {
                    let scroll = VerticalScroll {
                        offset: (step % 200) as f64 * 4.0,
                        viewport_height: 600.0,
                        content_height: 2000.0,
                        inset_top: 0.0,
                        inset_bottom: 0.0,
                    };
                    menu.container_did_scroll(RegionId(1), scroll, &mut sink);
                    sink.clear();
                }
                black_box(menu.menu_vertical_offset())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_layout, bench_scroll);
criterion_main!(benches);
