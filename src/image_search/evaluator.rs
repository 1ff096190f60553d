//! Match decision from a window tally

use super::types::Tally;

/// Decide whether a window is an occurrence.
///
/// The net match (`match_count - mismatch_count`) must strictly exceed
/// `total_pixels * match_percent / 100`, the product truncated by integer division
/// before the comparison. At 100 percent nothing can pass, since the net match
/// never exceeds the pixel count.
pub fn is_match(match_count: u32, mismatch_count: u32, total_pixels: u32, match_percent: u32) -> bool {
    let net_match = (i64::from(match_count) - i64::from(mismatch_count)) as f32;
    let required = ((u64::from(total_pixels) * u64::from(match_percent)) / 100) as f32;
    net_match > required
}

/// Convenience wrapper over [`is_match`] for a tally.
pub fn is_tally_match(tally: &Tally, total_pixels: u32, match_percent: u32) -> bool {
    is_match(tally.match_count, tally.mismatch_count, total_pixels, match_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_passes_default_threshold() {
        assert!(is_match(100, 0, 100, 75));
    }

    #[test]
    fn test_even_split_fails_low_threshold() {
        assert!(!is_match(50, 50, 100, 1));
    }

    #[test]
    fn test_boundary_is_strict() {
        // required = 75, net = 75
        assert!(!is_match(87, 12, 100, 75));
        assert!(is_match(88, 12, 100, 75));
    }

    #[test]
    fn test_required_is_truncated() {
        // 3 * 50 / 100 = 1, net 2 > 1
        assert!(is_match(2, 0, 3, 50));
        // 4 * 50 / 100 = 2, net 2 is not > 2
        assert!(!is_match(3, 1, 4, 50));
    }

    #[test]
    fn test_hundred_percent_never_matches() {
        for total in [1u32, 4, 9, 100] {
            for matched in 0..=total {
                assert!(!is_match(matched, total - matched, total, 100));
            }
        }
    }

    #[test]
    fn test_negative_net_match() {
        assert!(!is_match(0, 10, 10, 0));
        assert!(is_match(6, 4, 10, 0));
    }

    #[test]
    fn test_tally_wrapper() {
        let tally = Tally {
            match_count: 4,
            mismatch_count: 0,
        };
        assert!(is_tally_match(&tally, 4, 50));
    }
}
