// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paged menu controller: keeps the tab strip, the selection indicator and the content region in sync.
//!
//! ## Inputs
//!
//! The host forwards what its scroll regions and gesture recognizers observe:
//! - [`content_did_scroll`](PagedMenuController::content_did_scroll) for every
//!   horizontal offset change of the content region,
//! - [`tap_menu`](PagedMenuController::tap_menu) for taps on the tab strip,
//! - [`container_did_scroll`](PagedMenuController::container_did_scroll) for
//!   vertical scrolling inside a page,
//! - drag and deceleration lifecycle calls, and
//! - [`resize`](PagedMenuController::resize) when the view size changes.
//!
//! ## Outputs
//!
//! Every input takes an [`EventSink`] and emits [`PageMenuEvent`]s describing
//! what changed. State is committed before the first event of a change is
//! emitted.
//!
//! Emission order for a page change:
//! 1. `PageChanged`, then `PageDisappeared(old)` and `PageAppeared(new)`.
//! 2. `WillMoveToPage(new)`.
//! 3. Mount changes (`UnmountPage` before `MountPage`).
//! 4. `ItemSelected` for the old tab, then the new one.
//! 5. Header reveal (`MenuFrame`, `MenuAlpha`, `ContentFrame`) if it was
//!    collapsed. Tab taps skip this step.
//! 6. `IndicatorFrame`.
//! 7. `ContentOffset`, for taps and programmatic moves.
//! 8. `DidMoveToPage`, for immediate moves only. Animated moves report it from
//!    [`content_transition_finished`](PagedMenuController::content_transition_finished).

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace, warn};

use crate::collapse::{CollapsingHeader, VerticalScroll};
use crate::error::{ConfigurationError, Result};
use crate::events::{EventSink, PageMenuEvent};
use crate::layout::{MenuLayout, TextMeasure, floor_index};
use crate::options::{LayoutMode, PageMenuOptions};
use crate::preload::{MountChange, PreloadWindow};
use crate::types::{
    ItemFlags, MenuItemGeometry, PageDescriptor, RegionId, Transition, TransitionId,
};

/// Headless controller for a paged content view with a tab strip.
///
/// `C` is the host's page content handle; it is cloned into
/// [`PageMenuEvent::MountPage`].
#[derive(Clone, Debug)]
pub struct PagedMenuController<C> {
    pages: Vec<PageDescriptor<C>>,
    options: PageMenuOptions,
    view_size: Size,
    title_widths: Vec<f64>,
    layout: MenuLayout,
    items: Vec<MenuItemGeometry>,
    current: usize,
    menu_offset: f64,
    menu_dragging: bool,
    relayout_pending: bool,
    header: CollapsingHeader,
    preload: PreloadWindow,
    next_transition: u32,
    pending: Option<(TransitionId, usize)>,
}

fn check_frame(size: Size) -> Result<()> {
    let ok = |v: f64| v.is_finite() && v > 0.0;
    if ok(size.width) && ok(size.height) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidFrame {
            width: size.width,
            height: size.height,
        })
    }
}

impl<C: Clone> PagedMenuController<C> {
    /// Build the controller and emit its start-up events.
    ///
    /// - `start_index` is clamped into the page range.
    /// - Titles are measured once with `measure` under the configured font.
    /// - `options` are [sanitized](PageMenuOptions::sanitized) first.
    ///
    /// Start-up emits the full geometry followed by the same events as an
    /// immediate move to `start_index`, with `PageChanged { previous: None, .. }`.
    pub fn new<M, S>(
        pages: Vec<PageDescriptor<C>>,
        frame: Size,
        start_index: usize,
        options: PageMenuOptions,
        measure: &M,
        sink: &mut S,
    ) -> Result<Self>
    where
        M: TextMeasure + ?Sized,
        S: EventSink<PageMenuEvent<C>>,
    {
        if pages.is_empty() {
            return Err(ConfigurationError::NoPages);
        }
        check_frame(frame)?;
        let options = options.sanitized();
        if options.use_icons && pages.iter().any(|p| p.icons.is_none()) {
            warn!("icon mode requested but some pages have no icons");
        }

        let title_widths: Vec<f64> = pages
            .iter()
            .enumerate()
            .map(|(i, p)| measure.measure(&p.display_title(i), &options.font))
            .collect();
        let layout = MenuLayout::compute(&options, frame.width, &title_widths);
        let current = start_index.min(pages.len() - 1);
        if current != start_index {
            debug!(start_index, clamped = current, "start index clamped");
        }
        let items = layout
            .frames()
            .iter()
            .enumerate()
            .map(|(i, &frame)| {
                let mut flags = ItemFlags::default();
                flags.set(ItemFlags::SELECTED, i == current);
                MenuItemGeometry { frame, flags }
            })
            .collect();
        let header = CollapsingHeader::new(options.collapsible_height());
        let preload = PreloadWindow::new(options.pages_preloading_offset, pages.len());

        let mut this = Self {
            pages,
            options,
            view_size: frame,
            title_widths,
            layout,
            items,
            current,
            menu_offset: 0.0,
            menu_dragging: false,
            relayout_pending: false,
            header,
            preload,
            next_transition: 0,
            pending: None,
        };
        debug!(
            pages = this.pages.len(),
            start = current,
            mode = ?this.layout.mode(),
            "page menu created"
        );
        this.emit_layout(sink);
        this.menu_offset = this
            .synced_menu_offset(this.content_offset_for(current))
            .unwrap_or(0.0);
        sink.emit(PageMenuEvent::MenuOffset(this.menu_offset));

        sink.emit(PageMenuEvent::PageChanged {
            previous: None,
            current,
        });
        sink.emit(PageMenuEvent::PageAppeared(current));
        sink.emit(PageMenuEvent::WillMoveToPage(current));
        this.apply_mounts(sink);
        sink.emit(PageMenuEvent::ItemSelected {
            index: current,
            selected: true,
        });
        this.emit_indicator(Transition::Immediate, sink);
        this.emit_content_offset(current, Transition::Immediate, sink);
        sink.emit(PageMenuEvent::DidMoveToPage(current));
        Ok(this)
    }

    // --- queries ---

    /// Index of the current page.
    pub fn current_page_index(&self) -> usize {
        self.current
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Descriptor of page `index`.
    pub fn page(&self, index: usize) -> Option<&PageDescriptor<C>> {
        self.pages.get(index)
    }

    /// Tab geometry of page `index`.
    pub fn page_geometry(&self, index: usize) -> Option<MenuItemGeometry> {
        self.items.get(index).copied()
    }

    /// Current tab layout.
    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    /// Active layout strategy.
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// Effective (sanitized) options.
    pub fn options(&self) -> &PageMenuOptions {
        &self.options
    }

    /// Current view size.
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Selection indicator frame in tab-strip content coordinates.
    pub fn selection_indicator_frame(&self) -> Rect {
        self.layout
            .indicator_frame(
                self.current,
                self.options.selection_indicator_width_percent,
                self.options.selection_indicator_height,
                self.options.selection_indicator_bottom_offset,
            )
            .unwrap_or(Rect::ZERO)
    }

    /// Tab strip frame in view coordinates. Its origin moves up while the
    /// header collapses.
    pub fn menu_frame(&self) -> Rect {
        let y = self.header.offset();
        Rect::new(0.0, y, self.view_size.width, y + self.options.menu_height)
    }

    /// Content region frame in view coordinates.
    ///
    /// A translucent menu overlays the content, which then fills the view.
    pub fn content_frame(&self) -> Rect {
        let Size { width, height } = self.view_size;
        if self.options.translucent_menu {
            Rect::new(0.0, 0.0, width, height)
        } else {
            let top = (self.header.offset() + self.options.menu_height).min(height);
            Rect::new(0.0, top, width, height)
        }
    }

    /// Frame of page `index` inside the content region.
    pub fn page_frame(&self, index: usize) -> Rect {
        let w = self.view_size.width;
        let x = w * index as f64;
        Rect::new(x, 0.0, x + w, self.content_frame().height())
    }

    /// Opacity of the tab items and indicator.
    pub fn menu_alpha(&self) -> f64 {
        self.header.alpha()
    }

    /// Vertical offset of the tab strip, in `[-(menuHeight - minMenuHeightOnScroll), 0]`.
    pub fn menu_vertical_offset(&self) -> f64 {
        self.header.offset()
    }

    /// Width of the tab strip content.
    pub fn menu_content_width(&self) -> f64 {
        self.layout.content_width()
    }

    /// Horizontal offset of the tab strip content as last synced.
    pub fn menu_offset(&self) -> f64 {
        self.menu_offset
    }

    /// Mounted page indices, ascending.
    pub fn mounted_pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.preload.mounted()
    }

    /// True if page `index` is mounted.
    pub fn is_mounted(&self, index: usize) -> bool {
        self.preload.is_mounted(index)
    }

    /// Resolve a point in tab-strip content coordinates to a tab.
    ///
    /// Points outside the strip's height select nothing.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        if !(0.0..self.options.menu_height).contains(&point.y) {
            return None;
        }
        self.layout.hit_test(point.x)
    }

    // --- navigation ---

    /// The content region scrolled horizontally to `offset_x`.
    ///
    /// Syncs the tab strip offset and switches pages once the offset rounds to
    /// a different page. The first call after a [`resize`](Self::resize) only
    /// re-places the indicator.
    pub fn content_did_scroll<S>(&mut self, offset_x: f64, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        if self.relayout_pending {
            self.relayout_pending = false;
            self.emit_indicator(Transition::Immediate, sink);
            return;
        }
        if !self.menu_dragging {
            if let Some(offset) = self.synced_menu_offset(offset_x) {
                self.menu_offset = offset;
                sink.emit(PageMenuEvent::MenuOffset(offset));
            }
        }
        let last = self.content_offset_for(self.pages.len() - 1);
        if !(0.0..=last).contains(&offset_x) {
            return;
        }
        let Some(page) = self.nearest_page(offset_x) else {
            return;
        };
        trace!(offset_x, page, "content scrolled");
        if page != self.current {
            self.commit_page(page, Transition::INDICATOR, true, sink);
        }
    }

    /// Snap to the page nearest to `offset_x`, animating the content region.
    ///
    /// Returns the page snapped to.
    pub fn snap_to_nearest_page<S>(&mut self, offset_x: f64, sink: &mut S) -> usize
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        let page = self.nearest_page(offset_x.max(0.0)).unwrap_or(self.current);
        if page != self.current {
            self.commit_page(page, Transition::INDICATOR, true, sink);
        }
        if offset_x != self.content_offset_for(page) {
            let t = Transition::Animated(self.options.tap_animation_duration);
            self.emit_content_offset(page, t, sink);
        }
        page
    }

    /// A tap landed on the tab strip at `point` (tab-strip content coordinates).
    ///
    /// Returns the tab that was hit, if any. Hitting a different tab moves to
    /// its page, animating the content region over the tap animation duration.
    pub fn tap_menu<S>(&mut self, point: Point, sink: &mut S) -> Option<usize>
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        let Some(index) = self.hit_test(point) else {
            trace!(x = point.x, y = point.y, "tap missed the tabs");
            return None;
        };
        debug!(index, "tab tapped");
        if index != self.current {
            // Taps leave a collapsed header where it is.
            self.commit_page(index, Transition::INDICATOR, false, sink);
            let t = Transition::Animated(self.options.tap_animation_duration);
            self.emit_content_offset(index, t, sink);
        }
        Some(index)
    }

    /// Move to page `index`.
    ///
    /// Returns `false` (and does nothing) when `index` is out of range. Moving
    /// to the current page returns `true` without emitting anything.
    ///
    /// Animated moves report `DidMoveToPage` from
    /// [`content_transition_finished`](Self::content_transition_finished);
    /// immediate moves report it before returning.
    pub fn move_to_page<S>(&mut self, index: usize, animated: bool, sink: &mut S) -> bool
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        if index >= self.pages.len() {
            debug!(index, pages = self.pages.len(), "move to page out of range");
            return false;
        }
        if index == self.current {
            return true;
        }
        if animated {
            self.commit_page(index, Transition::INDICATOR, true, sink);
            let t = Transition::Animated(self.options.tap_animation_duration);
            self.emit_content_offset(index, t, sink);
        } else {
            self.commit_page(index, Transition::Immediate, true, sink);
            self.emit_content_offset(index, Transition::Immediate, sink);
            sink.emit(PageMenuEvent::DidMoveToPage(index));
        }
        true
    }

    /// An animated content offset finished.
    ///
    /// Emits `DidMoveToPage` if `id` is the most recent animated move;
    /// superseded animations are ignored.
    pub fn content_transition_finished<S>(&mut self, id: TransitionId, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        match self.pending {
            Some((pending, index)) if pending == id => {
                self.pending = None;
                sink.emit(PageMenuEvent::DidMoveToPage(index));
            }
            _ => trace!(?id, "superseded content transition finished"),
        }
    }

    /// The user started dragging the tab strip; its offset stops tracking the content.
    pub fn menu_will_begin_dragging(&mut self) {
        self.menu_dragging = true;
    }

    /// The tab strip stopped scrolling.
    pub fn menu_did_end_scrolling(&mut self) {
        self.menu_dragging = false;
    }

    /// The content region came to rest after a swipe.
    pub fn content_did_end_decelerating<S>(&mut self, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        sink.emit(PageMenuEvent::DidMoveToPage(self.current));
    }

    // --- collapsing header ---

    /// A vertically scrolling region inside a page moved.
    pub fn container_did_scroll<S>(
        &mut self,
        region: RegionId,
        scroll: VerticalScroll,
        sink: &mut S,
    )
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        if let Some(y) = self.header.scrolled(region, scroll) {
            trace!(region = region.0, y, "header moved");
            self.emit_header(Transition::Immediate, sink);
        }
    }

    /// A vertical region's drag ended. Without deceleration the header settles now.
    pub fn container_did_end_dragging<S>(
        &mut self,
        region: RegionId,
        will_decelerate: bool,
        sink: &mut S,
    )
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        if !will_decelerate {
            self.settle_header(region, sink);
        }
    }

    /// A vertical region stopped decelerating; the header settles.
    pub fn container_did_end_decelerating<S>(&mut self, region: RegionId, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        self.settle_header(region, sink);
    }

    /// A vertical region went away; forget its previous offset.
    pub fn container_removed(&mut self, region: RegionId) {
        self.header.forget(region);
    }

    // --- layout ---

    /// The view size changed.
    ///
    /// Recomputes all geometry for the new size from the configuration and
    /// the cached title widths, then resets the content offset to the current
    /// page. When the width changed, the next
    /// [`content_did_scroll`](Self::content_did_scroll) is treated as the echo
    /// of that reset.
    pub fn resize<S>(&mut self, size: Size, sink: &mut S) -> Result<()>
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        check_frame(size)?;
        if size == self.view_size {
            return Ok(());
        }
        debug!(
            width = size.width,
            height = size.height,
            "page menu relayout"
        );
        let width_changed = size.width != self.view_size.width;
        self.view_size = size;
        self.layout = MenuLayout::compute(&self.options, size.width, &self.title_widths);
        for (item, &frame) in self.items.iter_mut().zip(self.layout.frames()) {
            item.frame = frame;
        }
        // Same width: the reset offset equals the current one, so no echo comes back.
        self.relayout_pending = width_changed;

        self.emit_layout(sink);
        self.emit_indicator(Transition::Immediate, sink);
        for index in self.preload.mounted() {
            sink.emit(PageMenuEvent::ResizePage {
                index,
                frame: self.page_frame(index),
            });
        }
        self.emit_content_offset(self.current, Transition::Immediate, sink);
        if let Some(offset) = self.synced_menu_offset(self.content_offset_for(self.current)) {
            self.menu_offset = offset;
            sink.emit(PageMenuEvent::MenuOffset(offset));
        }
        Ok(())
    }

    // --- internals ---

    fn content_offset_for(&self, index: usize) -> f64 {
        self.view_size.width * index as f64
    }

    /// `floor(offset / W + 0.5)`, capped at the last page.
    fn nearest_page(&self, offset_x: f64) -> Option<usize> {
        let page = floor_index(offset_x / self.view_size.width + 0.5)?;
        Some(page.min(self.pages.len() - 1))
    }

    /// Tab strip offset tracking content offset `offset_x`, or `None` when
    /// either region has nothing to scroll.
    fn synced_menu_offset(&self, offset_x: f64) -> Option<f64> {
        let w = self.view_size.width;
        let menu_overflow = self.layout.content_width() - w;
        let content_overflow = w * self.pages.len() as f64 - w;
        (menu_overflow > 0.0 && content_overflow > 0.0)
            .then(|| offset_x * menu_overflow / content_overflow)
    }

    fn commit_page<S>(
        &mut self,
        index: usize,
        indicator: Transition,
        reveal_header: bool,
        sink: &mut S,
    ) where
        S: EventSink<PageMenuEvent<C>>,
    {
        let previous = self.current;
        self.current = index;
        self.items[previous].flags.remove(ItemFlags::SELECTED);
        self.items[index].flags.insert(ItemFlags::SELECTED);
        debug!(previous, current = index, "page changed");

        sink.emit(PageMenuEvent::PageChanged {
            previous: Some(previous),
            current: index,
        });
        sink.emit(PageMenuEvent::PageDisappeared(previous));
        sink.emit(PageMenuEvent::PageAppeared(index));
        sink.emit(PageMenuEvent::WillMoveToPage(index));
        self.apply_mounts(sink);
        sink.emit(PageMenuEvent::ItemSelected {
            index: previous,
            selected: false,
        });
        sink.emit(PageMenuEvent::ItemSelected {
            index,
            selected: true,
        });
        if reveal_header && self.header.reveal() {
            self.emit_header(Transition::HEADER_SNAP, sink);
        }
        self.emit_indicator(indicator, sink);
    }

    fn apply_mounts<S>(&mut self, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        for change in self.preload.update(self.current) {
            match change {
                MountChange::Mount(index) => sink.emit(PageMenuEvent::MountPage {
                    index,
                    content: self.pages[index].content.clone(),
                    frame: self.page_frame(index),
                }),
                MountChange::Unmount(index) => sink.emit(PageMenuEvent::UnmountPage(index)),
            }
        }
    }

    fn settle_header<S>(&mut self, region: RegionId, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        if let Some(y) = self.header.settle() {
            trace!(region = region.0, y, "header settled");
            self.emit_header(Transition::HEADER_SNAP, sink);
        }
    }

    fn emit_header<S>(&self, transition: Transition, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        sink.emit(PageMenuEvent::MenuFrame {
            frame: self.menu_frame(),
            transition,
        });
        sink.emit(PageMenuEvent::MenuAlpha {
            alpha: self.menu_alpha(),
            transition,
        });
        if !self.options.translucent_menu {
            sink.emit(PageMenuEvent::ContentFrame {
                frame: self.content_frame(),
                transition,
            });
            for index in self.preload.mounted() {
                sink.emit(PageMenuEvent::ResizePage {
                    index,
                    frame: self.page_frame(index),
                });
            }
        }
    }

    fn emit_layout<S>(&self, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        for (index, item) in self.items.iter().enumerate() {
            sink.emit(PageMenuEvent::ItemFrame {
                index,
                frame: item.frame,
            });
        }
        sink.emit(PageMenuEvent::MenuContentWidth(self.layout.content_width()));
        sink.emit(PageMenuEvent::MenuFrame {
            frame: self.menu_frame(),
            transition: Transition::Immediate,
        });
        sink.emit(PageMenuEvent::ContentFrame {
            frame: self.content_frame(),
            transition: Transition::Immediate,
        });
    }

    fn emit_indicator<S>(&self, transition: Transition, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        sink.emit(PageMenuEvent::IndicatorFrame {
            frame: self.selection_indicator_frame(),
            transition,
        });
    }

    fn emit_content_offset<S>(&mut self, index: usize, transition: Transition, sink: &mut S)
    where
        S: EventSink<PageMenuEvent<C>>,
    {
        let id = match transition {
            Transition::Immediate => {
                self.pending = None;
                None
            }
            Transition::Animated(_) => {
                let id = TransitionId(self.next_transition);
                self.next_transition = self.next_transition.wrapping_add(1);
                self.pending = Some((id, index));
                Some(id)
            }
        };
        sink.emit(PageMenuEvent::ContentOffset {
            x: self.content_offset_for(index),
            transition,
            id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FontSpec;
    use alloc::format;
    use alloc::vec;
    use core::time::Duration;

    type Events = Vec<PageMenuEvent<usize>>;

    fn ten_per_char(s: &str, _: &FontSpec) -> f64 {
        s.len() as f64 * 10.0
    }

    fn pages(n: usize) -> Vec<PageDescriptor<usize>> {
        (0..n)
            .map(|i| PageDescriptor::new(i).with_title(format!("P{i}")))
            .collect()
    }

    fn build(
        n: usize,
        start: usize,
        options: PageMenuOptions,
    ) -> (PagedMenuController<usize>, Events) {
        let mut events = Events::new();
        let c = PagedMenuController::new(
            pages(n),
            Size::new(320.0, 480.0),
            start,
            options,
            &ten_per_char,
            &mut events,
        )
        .unwrap();
        (c, events)
    }

    fn selected(c: &PagedMenuController<usize>) -> Vec<usize> {
        (0..c.page_count())
            .filter(|&i| c.page_geometry(i).unwrap().is_selected())
            .collect()
    }

    fn notifications(events: &Events) -> Events {
        events.iter().filter(|e| e.is_notification()).cloned().collect()
    }

    #[test]
    fn construction_rejects_bad_input() {
        let mut events = Events::new();
        let err = PagedMenuController::new(
            Vec::new(),
            Size::new(320.0, 480.0),
            0,
            PageMenuOptions::default(),
            &ten_per_char,
            &mut events,
        )
        .unwrap_err();
        assert_eq!(err, ConfigurationError::NoPages);

        let err = PagedMenuController::new(
            pages(2),
            Size::new(0.0, 480.0),
            0,
            PageMenuOptions::default(),
            &ten_per_char,
            &mut events,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidFrame { .. }));
        assert!(events.is_empty());
    }

    // Exactly one tab is selected after construction, and it is the start page.
    #[test]
    fn start_index_is_the_only_selected_tab() {
        for start in 0..5 {
            let (c, _) = build(5, start, PageMenuOptions::default());
            assert_eq!(c.current_page_index(), start);
            assert_eq!(selected(&c), vec![start]);
        }
    }

    #[test]
    fn start_index_is_clamped() {
        let (c, events) = build(3, 10, PageMenuOptions::default());
        assert_eq!(c.current_page_index(), 2);
        assert_eq!(selected(&c), vec![2]);
        assert!(events.contains(&PageMenuEvent::DidMoveToPage(2)));
    }

    #[test]
    fn start_up_events_are_ordered() {
        let (c, events) = build(5, 2, PageMenuOptions::default());
        assert_eq!(
            notifications(&events),
            vec![
                PageMenuEvent::PageChanged {
                    previous: None,
                    current: 2
                },
                PageMenuEvent::PageAppeared(2),
                PageMenuEvent::WillMoveToPage(2),
                PageMenuEvent::DidMoveToPage(2),
            ]
        );
        let mounted: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                PageMenuEvent::MountPage { index, content, .. } => Some((*index, *content)),
                _ => None,
            })
            .collect();
        assert_eq!(mounted, vec![(1, 1), (2, 2), (3, 3)]);
        assert!(events.contains(&PageMenuEvent::ContentOffset {
            x: 640.0,
            transition: Transition::Immediate,
            id: None,
        }));
        assert_eq!(c.mounted_pages().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    // moveToPage(k, false) lands on k; repeating it is silent.
    #[test]
    fn immediate_move_round_trip() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        for k in [3, 1, 2, 0] {
            let mut events = Events::new();
            assert!(c.move_to_page(k, false, &mut events));
            assert_eq!(c.current_page_index(), k);
            assert_eq!(selected(&c), vec![k]);
            assert_eq!(events.last(), Some(&PageMenuEvent::DidMoveToPage(k)));

            let mut again = Events::new();
            assert!(c.move_to_page(k, false, &mut again));
            assert!(again.is_empty());
        }
    }

    #[test]
    fn move_out_of_range_is_rejected() {
        let (mut c, _) = build(4, 1, PageMenuOptions::default());
        let mut events = Events::new();
        assert!(!c.move_to_page(4, true, &mut events));
        assert!(events.is_empty());
        assert_eq!(c.current_page_index(), 1);
    }

    #[test]
    fn page_change_emits_in_order() {
        let (mut c, _) = build(5, 2, PageMenuOptions::default());
        let mut events = Events::new();
        assert!(c.move_to_page(0, false, &mut events));
        let indicator = c.selection_indicator_frame();
        assert_eq!(
            events,
            vec![
                PageMenuEvent::PageChanged {
                    previous: Some(2),
                    current: 0
                },
                PageMenuEvent::PageDisappeared(2),
                PageMenuEvent::PageAppeared(0),
                PageMenuEvent::WillMoveToPage(0),
                PageMenuEvent::UnmountPage(2),
                PageMenuEvent::UnmountPage(3),
                PageMenuEvent::MountPage {
                    index: 0,
                    content: 0,
                    frame: Rect::new(0.0, 0.0, 320.0, 446.0)
                },
                PageMenuEvent::ItemSelected {
                    index: 2,
                    selected: false
                },
                PageMenuEvent::ItemSelected {
                    index: 0,
                    selected: true
                },
                PageMenuEvent::IndicatorFrame {
                    frame: indicator,
                    transition: Transition::Immediate
                },
                PageMenuEvent::ContentOffset {
                    x: 0.0,
                    transition: Transition::Immediate,
                    id: None
                },
                PageMenuEvent::DidMoveToPage(0),
            ]
        );
    }

    #[test]
    fn animated_move_reports_completion_once() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        assert!(c.move_to_page(2, true, &mut events));
        assert!(!events.contains(&PageMenuEvent::DidMoveToPage(2)));
        assert!(events.contains(&PageMenuEvent::IndicatorFrame {
            frame: c.selection_indicator_frame(),
            transition: Transition::INDICATOR,
        }));
        let id = events
            .iter()
            .find_map(|e| match e {
                PageMenuEvent::ContentOffset {
                    x,
                    transition,
                    id: Some(id),
                } => {
                    assert_eq!(*x, 640.0);
                    assert_eq!(*transition, Transition::Animated(Duration::from_millis(500)));
                    Some(*id)
                }
                _ => None,
            })
            .unwrap();

        let mut done = Events::new();
        c.content_transition_finished(id, &mut done);
        assert_eq!(done, vec![PageMenuEvent::DidMoveToPage(2)]);
        done.clear();
        c.content_transition_finished(id, &mut done);
        assert!(done.is_empty());
    }

    #[test]
    fn superseded_animation_does_not_report() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut first = Events::new();
        c.move_to_page(1, true, &mut first);
        let mut second = Events::new();
        c.move_to_page(3, true, &mut second);
        let id_of = |events: &Events| {
            events.iter().find_map(|e| match e {
                PageMenuEvent::ContentOffset { id, .. } => *id,
                _ => None,
            })
        };
        let mut done = Events::new();
        c.content_transition_finished(id_of(&first).unwrap(), &mut done);
        assert!(done.is_empty());
        c.content_transition_finished(id_of(&second).unwrap(), &mut done);
        assert_eq!(done, vec![PageMenuEvent::DidMoveToPage(3)]);
    }

    // W = 320, 4 pages: round to the nearest page.
    #[test]
    fn scroll_rounds_to_nearest_page() {
        let w = 320.0;
        for (offset, page) in [(1.5 * w, 2), (0.49 * w, 0), (0.51 * w, 1)] {
            let (mut c, _) = build(4, 0, PageMenuOptions::default());
            let mut events = Events::new();
            c.content_did_scroll(offset, &mut events);
            assert_eq!(c.current_page_index(), page, "offset {offset}");
            assert_eq!(selected(&c), vec![page]);
        }
    }

    #[test]
    fn scroll_outside_content_does_not_change_page() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        c.content_did_scroll(-40.0, &mut events);
        c.content_did_scroll(3.0 * 320.0 + 40.0, &mut events);
        assert_eq!(c.current_page_index(), 0);
        assert!(notifications(&events).is_empty());
    }

    #[test]
    fn scroll_change_uses_indicator_transition() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        c.content_did_scroll(330.0, &mut events);
        assert!(events.contains(&PageMenuEvent::IndicatorFrame {
            frame: c.selection_indicator_frame(),
            transition: Transition::INDICATOR,
        }));
        // The user is scrolling; no content offset is pushed back.
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, PageMenuEvent::ContentOffset { .. }))
        );
    }

    #[test]
    fn menu_offset_tracks_content_by_ratio() {
        // Fixed width: menu content (111 + 15) * 4 + 15 = 519, overflow 199.
        // Content overflow 3 * 320 = 960.
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        c.content_did_scroll(480.0, &mut events);
        assert_eq!(c.menu_offset(), 480.0 * 199.0 / 960.0);
        assert_eq!(events[0], PageMenuEvent::MenuOffset(480.0 * 199.0 / 960.0));

        // While the strip is dragged it keeps its own offset.
        c.menu_will_begin_dragging();
        events.clear();
        c.content_did_scroll(960.0, &mut events);
        assert_eq!(c.menu_offset(), 480.0 * 199.0 / 960.0);
        c.menu_did_end_scrolling();
        c.content_did_scroll(960.0, &mut events);
        assert_eq!(c.menu_offset(), 199.0);
    }

    #[test]
    fn narrow_menu_is_not_synced() {
        let o = PageMenuOptions {
            use_segmented_control_layout: true,
            ..Default::default()
        };
        let (mut c, _) = build(4, 0, o);
        let mut events = Events::new();
        c.content_did_scroll(480.0, &mut events);
        assert_eq!(c.menu_offset(), 0.0);
        assert!(!events.iter().any(|e| matches!(e, PageMenuEvent::MenuOffset(_))));
    }

    #[test]
    fn snap_reuses_page_rounding() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        assert_eq!(c.snap_to_nearest_page(500.0, &mut events), 2);
        assert_eq!(c.current_page_index(), 2);
        assert!(events.iter().any(|e| matches!(
            e,
            PageMenuEvent::ContentOffset {
                x,
                transition: Transition::Animated(_),
                ..
            } if *x == 640.0
        )));
        // Past the end snaps to the last page.
        assert_eq!(c.snap_to_nearest_page(5000.0, &mut events), 3);
        assert_eq!(c.snap_to_nearest_page(-80.0, &mut events), 0);
    }

    #[test]
    fn tap_moves_to_hit_tab() {
        // Fixed width, 111 wide, margin 15: tab 1 spans 141..252.
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        assert_eq!(c.tap_menu(Point::new(200.0, 10.0), &mut events), Some(1));
        assert_eq!(c.current_page_index(), 1);
        assert!(events.iter().any(|e| matches!(
            e,
            PageMenuEvent::ContentOffset { x, id: Some(_), .. } if *x == 320.0
        )));
    }

    #[test]
    fn tap_below_strip_or_on_current_tab_does_nothing() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        assert_eq!(c.tap_menu(Point::new(200.0, 34.0), &mut events), None);
        assert_eq!(c.tap_menu(Point::new(50.0, 10.0), &mut events), Some(0));
        assert!(events.is_empty());
    }

    #[test]
    fn tap_title_width_tabs() {
        let o = PageMenuOptions {
            menu_item_width_based_on_title_width: true,
            menu_margin: 10.0,
            ..Default::default()
        };
        let titled = vec![
            PageDescriptor::new(0).with_title("abcd"),
            PageDescriptor::new(1).with_title("abcdef"),
            PageDescriptor::new(2).with_title("abcde"),
        ];
        let mut events = Events::new();
        let mut c = PagedMenuController::new(
            titled,
            Size::new(320.0, 480.0),
            2,
            o,
            &ten_per_char,
            &mut events,
        )
        .unwrap();
        // Widths 40, 60, 50: x = 5 and x = 45 are both inside tab 0's slot.
        assert_eq!(c.tap_menu(Point::new(5.0, 1.0), &mut events), Some(0));
        assert_eq!(c.tap_menu(Point::new(45.0, 1.0), &mut events), Some(0));
        assert_eq!(c.tap_menu(Point::new(90.0, 1.0), &mut events), Some(1));
        assert_eq!(c.current_page_index(), 1);
    }

    // Five pages, preload offset one.
    #[test]
    fn preload_window_follows_current_page() {
        let (mut c, _) = build(5, 2, PageMenuOptions::default());
        assert_eq!(c.mounted_pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        let mut events = Events::new();
        c.move_to_page(0, false, &mut events);
        assert_eq!(c.mounted_pages().collect::<Vec<_>>(), vec![0, 1]);
    }

    fn collapsing() -> PageMenuOptions {
        PageMenuOptions {
            menu_height: 50.0,
            min_menu_height_on_scroll: 20.0,
            ..Default::default()
        }
    }

    fn tall(offset: f64) -> VerticalScroll {
        VerticalScroll {
            offset,
            viewport_height: 400.0,
            content_height: 4000.0,
            ..Default::default()
        }
    }

    // menuHeight 50, min 20: y stops at -30 with opacity 0.
    #[test]
    fn header_collapses_to_range() {
        let (mut c, _) = build(3, 0, collapsing());
        let list = RegionId(1);
        let mut events = Events::new();
        for step in 1..=20 {
            c.container_did_scroll(list, tall(step as f64 * 4.0), &mut events);
            assert!(c.menu_vertical_offset() >= -30.0);
        }
        assert_eq!(c.menu_vertical_offset(), -30.0);
        assert_eq!(c.menu_alpha(), 0.0);
        assert_eq!(c.menu_frame(), Rect::new(0.0, -30.0, 320.0, 20.0));
        // Non-translucent content follows the strip's bottom edge.
        assert_eq!(c.content_frame(), Rect::new(0.0, 20.0, 320.0, 480.0));
        assert_eq!(c.page_frame(0).height(), 460.0);
        assert!(events.contains(&PageMenuEvent::MenuAlpha {
            alpha: 0.0,
            transition: Transition::Immediate
        }));
    }

    #[test]
    fn translucent_content_stays_put() {
        let o = PageMenuOptions {
            translucent_menu: true,
            ..collapsing()
        };
        let (mut c, _) = build(3, 0, o);
        let mut events = Events::new();
        c.container_did_scroll(RegionId(1), tall(100.0), &mut events);
        assert_eq!(c.content_frame(), Rect::new(0.0, 0.0, 320.0, 480.0));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, PageMenuEvent::ContentFrame { .. }))
        );
    }

    #[test]
    fn header_settles_on_drag_end() {
        let (mut c, _) = build(3, 0, collapsing());
        let list = RegionId(1);
        let mut events = Events::new();
        c.container_did_scroll(list, tall(20.0), &mut events);
        assert_eq!(c.menu_vertical_offset(), -20.0);

        // Still decelerating: nothing yet.
        events.clear();
        c.container_did_end_dragging(list, true, &mut events);
        assert!(events.is_empty());

        c.container_did_end_decelerating(list, &mut events);
        assert_eq!(c.menu_vertical_offset(), -30.0);
        assert!(events.contains(&PageMenuEvent::MenuAlpha {
            alpha: 0.0,
            transition: Transition::HEADER_SNAP
        }));
    }

    #[test]
    fn page_change_reveals_header() {
        let (mut c, _) = build(3, 0, collapsing());
        let mut events = Events::new();
        c.container_did_scroll(RegionId(1), tall(3600.0), &mut events);
        assert_eq!(c.menu_vertical_offset(), -30.0);
        events.clear();
        c.move_to_page(1, false, &mut events);
        assert_eq!(c.menu_vertical_offset(), 0.0);
        assert_eq!(c.menu_alpha(), 1.0);
        assert!(events.contains(&PageMenuEvent::MenuAlpha {
            alpha: 1.0,
            transition: Transition::HEADER_SNAP
        }));
    }

    #[test]
    fn tab_tap_keeps_header_collapsed() {
        let (mut c, _) = build(3, 0, collapsing());
        let mut events = Events::new();
        c.container_did_scroll(RegionId(1), tall(3600.0), &mut events);
        assert_eq!(c.menu_vertical_offset(), -30.0);
        events.clear();
        // Tab 1 spans 141..252.
        assert_eq!(c.tap_menu(Point::new(200.0, 10.0), &mut events), Some(1));
        assert_eq!(c.current_page_index(), 1);
        assert_eq!(c.menu_vertical_offset(), -30.0);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, PageMenuEvent::MenuAlpha { .. }))
        );
    }

    #[test]
    fn disabled_collapsing_ignores_vertical_scroll() {
        let o = PageMenuOptions {
            menu_height: 40.0,
            min_menu_height_on_scroll: 40.0,
            ..Default::default()
        };
        let (mut c, _) = build(3, 0, o);
        let mut events = Events::new();
        c.container_did_scroll(RegionId(1), tall(100.0), &mut events);
        assert!(events.is_empty());
        assert_eq!(c.menu_vertical_offset(), 0.0);
    }

    // After a size change, a centered fixed-width row fits the new width.
    #[test]
    fn resize_recomputes_centered_row() {
        let o = PageMenuOptions {
            center_menu_items: true,
            menu_item_width: 90.0,
            menu_margin: 10.0,
            ..Default::default()
        };
        let (mut c, _) = build(3, 1, o);
        for size in [Size::new(568.0, 320.0), Size::new(320.0, 568.0)] {
            let mut events = Events::new();
            c.resize(size, &mut events).unwrap();
            let used: f64 = (0..3)
                .map(|i| c.page_geometry(i).unwrap().frame.width())
                .sum::<f64>()
                + 10.0 * 4.0;
            assert!(used <= size.width, "{used} > {}", size.width);
            assert!(events.contains(&PageMenuEvent::ContentOffset {
                x: size.width,
                transition: Transition::Immediate,
                id: None
            }));
            assert!(events.contains(&PageMenuEvent::IndicatorFrame {
                frame: c.selection_indicator_frame(),
                transition: Transition::Immediate
            }));
        }
        assert_eq!(selected(&c), vec![1]);
    }

    #[test]
    fn resize_swallows_one_scroll() {
        let (mut c, _) = build(4, 2, PageMenuOptions::default());
        let mut events = Events::new();
        c.resize(Size::new(480.0, 320.0), &mut events).unwrap();
        events.clear();
        // Echo of the reset at the old width would round to page 1.
        c.content_did_scroll(640.0, &mut events);
        assert_eq!(c.current_page_index(), 2);
        assert!(notifications(&events).is_empty());
        c.content_did_scroll(480.0, &mut events);
        assert_eq!(c.current_page_index(), 1);
    }

    #[test]
    fn height_only_resize_keeps_next_scroll() {
        let (mut c, _) = build(4, 0, PageMenuOptions::default());
        let mut events = Events::new();
        c.resize(Size::new(320.0, 460.0), &mut events).unwrap();
        events.clear();
        c.content_did_scroll(330.0, &mut events);
        assert_eq!(c.current_page_index(), 1);
        assert!(c.menu_offset() > 0.0);
        assert!(events.contains(&PageMenuEvent::PageChanged {
            previous: Some(0),
            current: 1
        }));
    }

    #[test]
    fn resize_moves_mounted_pages_and_resyncs_strip() {
        let (mut c, _) = build(4, 2, PageMenuOptions::default());
        let mut events = Events::new();
        c.resize(Size::new(480.0, 320.0), &mut events).unwrap();

        let resized: Vec<(usize, Rect)> = events
            .iter()
            .filter_map(|e| match e {
                PageMenuEvent::ResizePage { index, frame } => Some((*index, *frame)),
                _ => None,
            })
            .collect();
        let mounted: Vec<usize> = c.mounted_pages().collect();
        assert_eq!(mounted, vec![1, 2, 3]);
        assert_eq!(
            resized.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            mounted
        );
        for (index, frame) in resized {
            let x = 480.0 * index as f64;
            // 320 high minus the 34 high strip.
            assert_eq!(frame, Rect::new(x, 0.0, x + 480.0, 286.0));
        }

        let expected = 960.0 * (c.menu_content_width() - 480.0) / (480.0 * 4.0 - 480.0);
        assert!(expected > 0.0);
        assert_eq!(c.menu_offset(), expected);
        assert!(events.contains(&PageMenuEvent::MenuOffset(expected)));
    }

    #[test]
    fn resize_to_same_size_is_silent() {
        let (mut c, _) = build(2, 0, PageMenuOptions::default());
        let mut events = Events::new();
        c.resize(Size::new(320.0, 480.0), &mut events).unwrap();
        assert!(events.is_empty());
        assert!(c.resize(Size::new(-1.0, 480.0), &mut events).is_err());
    }

    #[test]
    fn deceleration_end_reports_current_page() {
        let (mut c, _) = build(3, 0, PageMenuOptions::default());
        let mut events = Events::new();
        c.content_did_scroll(320.0, &mut events);
        events.clear();
        c.content_did_end_decelerating(&mut events);
        assert_eq!(events, vec![PageMenuEvent::DidMoveToPage(1)]);
    }

    #[test]
    fn single_page_has_normal_geometry() {
        let (c, _) = build(1, 0, PageMenuOptions::default());
        assert_eq!(c.page_geometry(0).unwrap().frame, Rect::new(15.0, 0.0, 126.0, 34.0));
        assert_eq!(c.selection_indicator_frame(), Rect::new(15.0, 31.0, 126.0, 34.0));
    }
}
