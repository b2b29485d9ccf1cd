// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration for the page menu.
//!
//! ## Two ways to configure
//!
//! [`PageMenuOptions`] is a plain struct with public fields and defaults, so
//! struct-update syntax works:
//!
//! ```
//! use navkit_page_menu::PageMenuOptions;
//!
//! let opts = PageMenuOptions { menu_height: 50.0, menu_margin: 10.0, ..Default::default() };
//! assert_eq!(opts.menu_item_width, 111.0);
//! ```
//!
//! It can also be collected from a list of [`PageMenuOption`] values; later
//! entries override earlier ones:
//!
//! ```
//! use navkit_page_menu::{LayoutMode, PageMenuOption, PageMenuOptions};
//!
//! let opts: PageMenuOptions = [
//!     PageMenuOption::MenuHeight(40.0),
//!     PageMenuOption::CenterMenuItems(true),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(opts.layout_mode(), LayoutMode::FixedWidth { centered: true });
//! ```

use alloc::string::String;
use core::time::Duration;

use tracing::warn;

/// An RGBA color with 8-bit channels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque light gray.
    pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);

    /// Opaque color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from channels including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font used for tab titles. Only passed through to [`TextMeasure`](crate::TextMeasure).
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Family name; `None` selects the system font.
    pub family: Option<String>,
    /// Point size.
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: None,
            size: 15.0,
        }
    }
}

/// Optional hairline drawn under the tab strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hairline {
    /// Line color.
    pub color: Color,
    /// Line thickness.
    pub height: f64,
    /// Extra offset below the menu bottom.
    pub bottom_offset: f64,
}

impl Default for Hairline {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            height: 0.0,
            bottom_offset: 0.0,
        }
    }
}

/// Strategy used to size and place tabs.
///
/// Exactly one strategy is active; centering is a property of the fixed-width
/// strategy only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Every tab has the configured item width, separated by the margin.
    FixedWidth {
        /// Center the whole row when it is narrower than the view.
        centered: bool,
    },
    /// Every tab is as wide as its measured title.
    TitleWidthBased,
    /// Tabs split the view width evenly, without margins.
    SegmentedControl,
}

/// Page menu configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMenuOptions {
    /// Vertical offset of the title (or icon center) inside a tab.
    pub menu_item_title_top_offset: f64,
    /// Indicator width as a percentage of the tab width, `0..=100`.
    pub selection_indicator_width_percent: f64,
    /// Indicator thickness.
    pub selection_indicator_height: f64,
    /// Distance between the indicator and the bottom of the tab strip.
    pub selection_indicator_bottom_offset: f64,
    /// Indicator color.
    pub selection_indicator_color: Color,
    /// Gap between tabs (ignored in segmented mode).
    pub menu_margin: f64,
    /// Tab strip height.
    pub menu_height: f64,
    /// Tab width in fixed-width mode.
    pub menu_item_width: f64,
    /// Title color of the selected tab.
    pub selected_color: Color,
    /// Title color of other tabs.
    pub unselected_color: Color,
    /// Tab strip background.
    pub menu_background_color: Color,
    /// Background behind both regions.
    pub view_background_color: Color,
    /// Title font.
    pub font: FontSpec,
    /// Split the strip evenly like a segmented control.
    pub use_segmented_control_layout: bool,
    /// Size each tab by its measured title.
    pub menu_item_width_based_on_title_width: bool,
    /// Center fixed-width tabs.
    pub center_menu_items: bool,
    /// Content animation duration after a tab tap or an animated jump.
    pub tap_animation_duration: Duration,
    /// Whether the user may swipe the content region.
    pub content_scroll_enabled: bool,
    /// Whether the content region bounces at its ends.
    pub horizontal_bounce: bool,
    /// Show page icons instead of titles.
    pub use_icons: bool,
    /// Smallest visible tab strip height while collapsed.
    pub min_menu_height_on_scroll: f64,
    /// Pages mounted on each side of the current one.
    pub pages_preloading_offset: usize,
    /// Content extends under a translucent tab strip.
    pub translucent_menu: bool,
    /// Hairline under the strip, if any.
    pub bottom_hairline: Option<Hairline>,
}

impl Default for PageMenuOptions {
    fn default() -> Self {
        Self {
            menu_item_title_top_offset: 0.0,
            selection_indicator_width_percent: 100.0,
            selection_indicator_height: 3.0,
            selection_indicator_bottom_offset: 0.0,
            selection_indicator_color: Color::WHITE,
            menu_margin: 15.0,
            menu_height: 34.0,
            menu_item_width: 111.0,
            selected_color: Color::WHITE,
            unselected_color: Color::LIGHT_GRAY,
            menu_background_color: Color::BLACK,
            view_background_color: Color::WHITE,
            font: FontSpec::default(),
            use_segmented_control_layout: false,
            menu_item_width_based_on_title_width: false,
            center_menu_items: false,
            tap_animation_duration: Duration::from_millis(500),
            content_scroll_enabled: true,
            horizontal_bounce: true,
            use_icons: false,
            min_menu_height_on_scroll: 0.0,
            pages_preloading_offset: 1,
            translucent_menu: false,
            bottom_hairline: None,
        }
    }
}

impl PageMenuOptions {
    /// The single active layout strategy.
    ///
    /// Segmented wins over title-width-based, which wins over fixed width.
    pub fn layout_mode(&self) -> LayoutMode {
        if self.use_segmented_control_layout {
            LayoutMode::SegmentedControl
        } else if self.menu_item_width_based_on_title_width {
            LayoutMode::TitleWidthBased
        } else {
            LayoutMode::FixedWidth {
                centered: self.center_menu_items,
            }
        }
    }

    /// Height the tab strip can give up while collapsing, or `None` when the
    /// collapsing header is disabled.
    pub fn collapsible_height(&self) -> Option<f64> {
        let range = self.menu_height - self.min_menu_height_on_scroll;
        (self.min_menu_height_on_scroll >= 0.0 && range > 0.0).then_some(range)
    }

    /// Apply the degradation policy for out-of-range values.
    ///
    /// - The indicator percentage is clamped to `0..=100`.
    /// - Negative lengths are raised to zero.
    /// - `min_menu_height_on_scroll >= menu_height` disables collapsing.
    pub fn sanitized(mut self) -> Self {
        let pct = self.selection_indicator_width_percent;
        if !(0.0..=100.0).contains(&pct) {
            warn!(
                percent = pct,
                "selection indicator width percent out of range; clamping"
            );
            self.selection_indicator_width_percent = pct.clamp(0.0, 100.0);
        }
        for (name, v) in [
            ("menu_height", &mut self.menu_height),
            ("menu_margin", &mut self.menu_margin),
            ("menu_item_width", &mut self.menu_item_width),
            (
                "selection_indicator_height",
                &mut self.selection_indicator_height,
            ),
        ] {
            if v.is_nan() || *v < 0.0 {
                warn!(option = name, value = *v, "negative length; using 0");
                *v = 0.0;
            }
        }
        if self.min_menu_height_on_scroll >= self.menu_height
            || self.min_menu_height_on_scroll < 0.0
        {
            warn!(
                min = self.min_menu_height_on_scroll,
                menu_height = self.menu_height,
                "min menu height on scroll must be below the menu height; collapsing disabled"
            );
            self.min_menu_height_on_scroll = self.menu_height;
        }
        self
    }
}

/// A single configuration entry, for building [`PageMenuOptions`] from a list.
#[derive(Clone, Debug, PartialEq)]
pub enum PageMenuOption {
    /// See [`PageMenuOptions::menu_item_title_top_offset`].
    MenuItemTitleTopOffset(f64),
    /// See [`PageMenuOptions::selection_indicator_width_percent`].
    SelectionIndicatorWidthPercent(f64),
    /// See [`PageMenuOptions::selection_indicator_height`].
    SelectionIndicatorHeight(f64),
    /// See [`PageMenuOptions::selection_indicator_bottom_offset`].
    SelectionIndicatorBottomOffset(f64),
    /// See [`PageMenuOptions::selection_indicator_color`].
    SelectionIndicatorColor(Color),
    /// See [`PageMenuOptions::menu_margin`].
    MenuMargin(f64),
    /// See [`PageMenuOptions::menu_height`].
    MenuHeight(f64),
    /// See [`PageMenuOptions::menu_item_width`].
    MenuItemWidth(f64),
    /// See [`PageMenuOptions::selected_color`].
    SelectedColor(Color),
    /// See [`PageMenuOptions::unselected_color`].
    UnselectedColor(Color),
    /// See [`PageMenuOptions::menu_background_color`].
    MenuBackgroundColor(Color),
    /// See [`PageMenuOptions::view_background_color`].
    ViewBackgroundColor(Color),
    /// See [`PageMenuOptions::font`].
    Font(FontSpec),
    /// See [`PageMenuOptions::use_segmented_control_layout`].
    UseSegmentedControlLayout(bool),
    /// See [`PageMenuOptions::menu_item_width_based_on_title_width`].
    MenuItemWidthBasedOnTitleWidth(bool),
    /// See [`PageMenuOptions::center_menu_items`].
    CenterMenuItems(bool),
    /// See [`PageMenuOptions::tap_animation_duration`].
    TapAnimationDuration(Duration),
    /// See [`PageMenuOptions::content_scroll_enabled`].
    ContentScrollEnabled(bool),
    /// See [`PageMenuOptions::horizontal_bounce`].
    HorizontalBounce(bool),
    /// See [`PageMenuOptions::use_icons`].
    UseIcons(bool),
    /// See [`PageMenuOptions::min_menu_height_on_scroll`].
    MinMenuHeightOnScroll(f64),
    /// See [`PageMenuOptions::pages_preloading_offset`].
    PagesPreloadingOffset(usize),
    /// See [`PageMenuOptions::translucent_menu`].
    TranslucentMenu(bool),
    /// See [`PageMenuOptions::bottom_hairline`].
    BottomHairline(Option<Hairline>),
}

impl Extend<PageMenuOption> for PageMenuOptions {
    fn extend<I: IntoIterator<Item = PageMenuOption>>(&mut self, iter: I) {
        use PageMenuOption as O;
        for option in iter {
            match option {
                O::MenuItemTitleTopOffset(v) => self.menu_item_title_top_offset = v,
                O::SelectionIndicatorWidthPercent(v) => {
                    self.selection_indicator_width_percent = v;
                }
                O::SelectionIndicatorHeight(v) => self.selection_indicator_height = v,
                O::SelectionIndicatorBottomOffset(v) => {
                    self.selection_indicator_bottom_offset = v;
                }
                O::SelectionIndicatorColor(v) => self.selection_indicator_color = v,
                O::MenuMargin(v) => self.menu_margin = v,
                O::MenuHeight(v) => self.menu_height = v,
                O::MenuItemWidth(v) => self.menu_item_width = v,
                O::SelectedColor(v) => self.selected_color = v,
                O::UnselectedColor(v) => self.unselected_color = v,
                O::MenuBackgroundColor(v) => self.menu_background_color = v,
                O::ViewBackgroundColor(v) => self.view_background_color = v,
                O::Font(v) => self.font = v,
                O::UseSegmentedControlLayout(v) => self.use_segmented_control_layout = v,
                O::MenuItemWidthBasedOnTitleWidth(v) => {
                    self.menu_item_width_based_on_title_width = v;
                }
                O::CenterMenuItems(v) => self.center_menu_items = v,
                O::TapAnimationDuration(v) => self.tap_animation_duration = v,
                O::ContentScrollEnabled(v) => self.content_scroll_enabled = v,
                O::HorizontalBounce(v) => self.horizontal_bounce = v,
                O::UseIcons(v) => self.use_icons = v,
                O::MinMenuHeightOnScroll(v) => self.min_menu_height_on_scroll = v,
                O::PagesPreloadingOffset(v) => self.pages_preloading_offset = v,
                O::TranslucentMenu(v) => self.translucent_menu = v,
                O::BottomHairline(v) => self.bottom_hairline = v,
            }
        }
    }
}

impl FromIterator<PageMenuOption> for PageMenuOptions {
    fn from_iter<I: IntoIterator<Item = PageMenuOption>>(iter: I) -> Self {
        let mut opts = Self::default();
        opts.extend(iter);
        opts
    }
}
