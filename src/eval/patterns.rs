//! Pattern scores for Gomoku evaluation
//!
//! Base values per run length, the open-end multipliers, and the sentinel
//! scores used by the search.

/// Signed evaluation score; larger favors the evaluating player.
pub type Score = i32;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Two in a row
    pub const TWO: Score = 100;
    /// Three in a row
    pub const THREE: Score = 1_000;
    /// Four in a row
    pub const FOUR: Score = 10_000;
    /// Five in a row
    pub const FIVE: Score = 100_000;

    /// Subtracted once more for every opponent four with an open end
    pub const OPEN_FOUR_PENALTY: Score = 50_000;

    /// Score returned by the search when a move completes five
    pub const WIN: Score = 100_000;
    /// Score of a line with no continuation left
    pub const DRAW: Score = 0;

    /// Base value for a run of `length` stones, `None` outside 2..=5
    #[inline]
    pub fn base_value(length: u32) -> Option<Score> {
        match length {
            2 => Some(Self::TWO),
            3 => Some(Self::THREE),
            4 => Some(Self::FOUR),
            5 => Some(Self::FIVE),
            _ => None,
        }
    }

    /// Apply the open-end multiplier: x1.5 with both ends open, x1 with one,
    /// nothing when blocked on both sides.
    ///
    /// Every base value is a multiple of 100, so the x1.5 case stays integral.
    #[inline]
    pub fn with_open_ends(base: Score, open_ends: u32) -> Score {
        match open_ends {
            0 => 0,
            1 => base,
            _ => base * 3 / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_values() {
        assert_eq!(PatternScore::base_value(1), None);
        assert_eq!(PatternScore::base_value(2), Some(100));
        assert_eq!(PatternScore::base_value(3), Some(1_000));
        assert_eq!(PatternScore::base_value(4), Some(10_000));
        assert_eq!(PatternScore::base_value(5), Some(100_000));
        assert_eq!(PatternScore::base_value(6), None);
    }

    #[test]
    fn test_open_end_multiplier() {
        assert_eq!(PatternScore::with_open_ends(PatternScore::THREE, 0), 0);
        assert_eq!(PatternScore::with_open_ends(PatternScore::THREE, 1), 1_000);
        assert_eq!(PatternScore::with_open_ends(PatternScore::THREE, 2), 1_500);
        assert_eq!(PatternScore::with_open_ends(PatternScore::FIVE, 2), 150_000);
    }
}
