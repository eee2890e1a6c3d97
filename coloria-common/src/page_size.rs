/// Viewport width assumed before the first resize measurement arrives.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

/// Items per library page for a viewport width.
///
/// Three rows of the grid at every breakpoint; the column count follows the
/// responsive grid classes (1, 2, 3, 4, 4, 5 columns).
pub fn items_per_page(width: u32) -> usize {
    match width {
        w if w >= 1536 => 15,
        w if w >= 1280 => 12,
        w if w >= 1024 => 12,
        w if w >= 768 => 9,
        w if w >= 640 => 6,
        _ => 3,
    }
}
