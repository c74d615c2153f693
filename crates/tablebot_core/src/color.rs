//! TABLE NFT row-count color scale.
//!
//! Port of the color generator used by the TABLE NFT SVG renderer: embeds
//! for larger tables shade from deep purple toward red.

const PALETTE: [u32; 10] = [
    0x452858, 0x5A2F5A, 0x6E365B, 0x833D5D, 0x98445E, 0xAC4B60, 0xC15261, 0xD65963, 0xEA6064,
    0xFF6766,
];

/// Row-count upper bounds (exclusive) for each palette step but the last.
const THRESHOLDS: [u64; 9] = [
    9 * 3,
    20 * 3,
    50 * 3,
    100 * 3,
    200 * 3,
    500 * 3,
    1000 * 3,
    5000 * 3,
    20000 * 3,
];

/// Pick the embed color for a table with `rows` rows.
///
/// # Examples
///
/// ```
/// use tablebot_core::row_count_color;
///
/// assert_eq!(row_count_color(0), 0x452858);
/// assert_eq!(row_count_color(100_000), 0xFF6766);
/// ```
pub fn row_count_color(rows: u64) -> u32 {
    let step = THRESHOLDS
        .iter()
        .position(|threshold| rows < *threshold)
        .unwrap_or(PALETTE.len() - 1);
    PALETTE[step]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(row_count_color(26), 0x452858);
        assert_eq!(row_count_color(27), 0x5A2F5A);
        assert_eq!(row_count_color(59), 0x5A2F5A);
        assert_eq!(row_count_color(60), 0x6E365B);
        assert_eq!(row_count_color(59_999), 0xEA6064);
        assert_eq!(row_count_color(60_000), 0xFF6766);
    }

    #[test]
    fn scale_is_monotonic_in_steps() {
        let mut last = row_count_color(0);
        for rows in [27, 60, 150, 300, 600, 1500, 3000, 15000, 60000] {
            let color = row_count_color(rows);
            assert_ne!(color, last);
            last = color;
        }
    }
}
