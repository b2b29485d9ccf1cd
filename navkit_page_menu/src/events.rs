// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events emitted by the page menu controller, and the sink they go to.
//!
//! The controller never draws. Every visible change is described by an event
//! carrying the new value plus a [`Transition`] telling the host whether to
//! animate it. Events are emitted synchronously, after the state they describe
//! has been committed, so querying the controller from inside a sink always
//! sees the new state.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::types::{Transition, TransitionId};

/// Receiver for controller events.
///
/// `Vec<E>` implements this by pushing, which is what tests and most hosts use.
pub trait EventSink<E> {
    /// Handle one event.
    fn emit(&mut self, event: E);
}

impl<E> EventSink<E> for Vec<E> {
    #[inline]
    fn emit(&mut self, event: E) {
        self.push(event);
    }
}

/// Something the host should know about or apply.
///
/// `C` is the host's page content handle.
#[derive(Clone, Debug, PartialEq)]
pub enum PageMenuEvent<C> {
    /// The current page index changed. `previous` is `None` at start-up.
    PageChanged {
        /// Index before the change.
        previous: Option<usize>,
        /// Index after the change.
        current: usize,
    },
    /// The page stopped being the current one.
    PageDisappeared(usize),
    /// The page became the current one.
    PageAppeared(usize),
    /// Navigation toward a page started.
    WillMoveToPage(usize),
    /// Navigation finished and the content region rests on the page.
    DidMoveToPage(usize),

    /// Attach a page's content at `frame` inside the content region.
    MountPage {
        /// Page index.
        index: usize,
        /// Clone of the page's content handle.
        content: C,
        /// Frame in content-region coordinates.
        frame: Rect,
    },
    /// Detach a page's content.
    UnmountPage(usize),
    /// A mounted page moved or changed size after a relayout.
    ResizePage {
        /// Page index.
        index: usize,
        /// New frame in content-region coordinates.
        frame: Rect,
    },

    /// New frame for a tab, in tab-strip content coordinates.
    ItemFrame {
        /// Tab index.
        index: usize,
        /// Rounded frame.
        frame: Rect,
    },
    /// A tab's selected state flipped.
    ItemSelected {
        /// Tab index.
        index: usize,
        /// New state.
        selected: bool,
    },
    /// Selection indicator frame, in tab-strip content coordinates.
    IndicatorFrame {
        /// New frame.
        frame: Rect,
        /// How to apply it.
        transition: Transition,
    },
    /// Frame of the tab strip in view coordinates.
    MenuFrame {
        /// New frame.
        frame: Rect,
        /// How to apply it.
        transition: Transition,
    },
    /// Width of the scrollable tab strip content.
    MenuContentWidth(f64),
    /// Horizontal offset of the tab strip content.
    MenuOffset(f64),
    /// Opacity of the tab items and indicator.
    MenuAlpha {
        /// New opacity, `0.0..=1.0`.
        alpha: f64,
        /// How to apply it.
        transition: Transition,
    },
    /// Frame of the content region in view coordinates.
    ContentFrame {
        /// New frame.
        frame: Rect,
        /// How to apply it.
        transition: Transition,
    },
    /// Horizontal offset of the content region.
    ///
    /// Animated offsets carry an id; pass it to
    /// [`PagedMenuController::content_transition_finished`](crate::PagedMenuController::content_transition_finished)
    /// once the animation ends.
    ContentOffset {
        /// New offset.
        x: f64,
        /// How to apply it.
        transition: Transition,
        /// Completion token for animated moves.
        id: Option<TransitionId>,
    },
}

impl<C> PageMenuEvent<C> {
    /// True for the page lifecycle notifications.
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            Self::PageChanged { .. }
                | Self::PageDisappeared(_)
                | Self::PageAppeared(_)
                | Self::WillMoveToPage(_)
                | Self::DidMoveToPage(_)
        )
    }
}
