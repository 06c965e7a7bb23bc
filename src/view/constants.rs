//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Width of the navigation rail in columns, including its right border.
pub const RAIL_WIDTH: u16 = 4;

/// Preferred width of the expanded directory panel, including its border.
pub const DIRECTORY_WIDTH: u16 = 34;

/// The thread keeps at least this many columns when the directory is shown.
pub const MIN_THREAD_WIDTH: u16 = 24;

/// Height of the directory title line ("Чаты").
pub const DIRECTORY_TITLE_HEIGHT: u16 = 1;

/// Height of the filter box (border + content).
pub const FILTER_BOX_HEIGHT: u16 = 3;

/// Rows taken by one directory entry: name line, preview line, gap.
pub const ENTRY_HEIGHT: u16 = 3;

/// Height of the thread header: name, subtitle, bottom border.
pub const THREAD_HEADER_HEIGHT: u16 = 3;

/// Visible draft lines before the composer stops growing.
pub const COMPOSER_MAX_LINES: u16 = 4;

/// Width of the send button (border + glyph).
pub const SEND_BUTTON_WIDTH: u16 = 5;

/// Width of the attachment glyph column left of the input.
pub const ATTACH_WIDTH: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for focus indicator and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Message bubbles use at most this share of the thread width (percent).
pub const BUBBLE_WIDTH_PERCENT: u16 = 70;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Page size for thread scrolling before the first frame is drawn.
pub const DEFAULT_SCROLL_PAGE: u16 = 10;
