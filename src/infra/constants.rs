// =============================================================================
// DATA
// =============================================================================

/// Default catalog root, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Directory for diagnostics (load failures, panics).
pub const STORE_DIR: &str = ".promptdeck";

// =============================================================================
// UI LAYOUT
// =============================================================================

/// Width of the category sidebar in characters
pub const SIDEBAR_WIDTH: u16 = 26;

/// Height of the tab bar
pub const TAB_BAR_HEIGHT: u16 = 1;

/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of one summary card in the grid
pub const CARD_WIDTH: u16 = 32;

/// Height of one summary card in the grid
pub const CARD_HEIGHT: u16 = 4;

// =============================================================================
// SCROLLING
// =============================================================================

/// Scroll amount for arrow keys / mouse wheel
pub const SCROLL_ARROW_AMOUNT: usize = 1;

/// Scroll amount for PageUp/PageDown
pub const SCROLL_PAGE_AMOUNT: usize = 10;

// =============================================================================
// EVENT LOOP
// =============================================================================

/// Poll timeout for terminal events (milliseconds)
pub const EVENT_POLL_MS: u64 = 50;
