// Copyright 2025 the Navkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for navkit_page_menu.

use thiserror::Error;

/// Reasons a [`PagedMenuController`](crate::PagedMenuController) cannot be built.
///
/// Only these are fatal. Out-of-range indices and questionable numeric options
/// degrade the affected feature instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// The page sequence was empty.
    #[error("page menu needs at least one page")]
    NoPages,

    /// The view frame had a non-positive or non-finite dimension.
    #[error("invalid page menu frame {width}x{height}")]
    InvalidFrame {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

/// Result type for page menu construction.
pub type Result<T> = core::result::Result<T, ConfigurationError>;
