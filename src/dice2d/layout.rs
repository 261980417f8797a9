//! Dice grid layout
//!
//! Dice are laid out on a small grid under the banner. The grid and the die
//! size are recomputed whenever the dice count or the window size changes.

/// Gap between dice and around the grid, in logical pixels
pub const GRID_PADDING: f32 = 20.0;

/// Vertical space kept free for the banner, the roll button and the hint line
pub const RESERVED_HEIGHT: f32 = 230.0;

/// Dice never shrink below this, even in tiny windows
pub const MIN_DIE_SIZE: f32 = 32.0;

/// Columns and rows used for `count` dice.
///
/// One die sits alone, two side by side, three and four share a 2x2 grid
/// (three leaves the last cell empty).
pub fn best_grid(count: usize) -> (usize, usize) {
    match count {
        0 | 1 => (1, 1),
        2 => (2, 1),
        _ => (2, 2),
    }
}

/// Square die size that fits `count` dice in a `width` x `height` window
pub fn die_size(width: f32, height: f32, count: usize) -> f32 {
    let (cols, rows) = best_grid(count);
    let grid_w = width - GRID_PADDING * (cols as f32 + 1.0);
    let grid_h = height - RESERVED_HEIGHT;

    let cell_w = grid_w / cols as f32;
    let cell_h = grid_h / rows as f32;

    cell_w.min(cell_h).floor().max(MIN_DIE_SIZE)
}
