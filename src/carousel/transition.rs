//! Index transitions for the carousel.
//!
//! Every wrap-around computation the widget performs goes through these
//! functions. They are pure: `(current, len) -> new`.

/// Step one slide back, wrapping from the first slide to the last.
///
/// Sequences of length 0 or 1 leave the index untouched.
pub fn previous(current: usize, len: usize) -> usize {
    if len <= 1 {
        return current;
    }
    (current % len + len - 1) % len
}

/// Step one slide forward, wrapping from the last slide to the first.
///
/// Sequences of length 0 or 1 leave the index untouched.
pub fn next(current: usize, len: usize) -> usize {
    if len <= 1 {
        return current;
    }
    (current % len + 1) % len
}

/// Jump straight to `target` when it addresses a slide, otherwise stay put.
pub fn jump_to(current: usize, target: usize, len: usize) -> usize {
    if target < len { target } else { current }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next(0, 3), 1);
        assert_eq!(next(1, 3), 2);
        assert_eq!(next(2, 3), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        assert_eq!(previous(0, 3), 2);
        assert_eq!(previous(2, 3), 1);
        assert_eq!(previous(1, 3), 0);
    }

    #[test]
    fn test_short_sequences_are_noops() {
        assert_eq!(next(0, 1), 0);
        assert_eq!(previous(0, 1), 0);
        assert_eq!(next(0, 0), 0);
        assert_eq!(previous(0, 0), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut forward = start;
                let mut backward = start;
                for _ in 0..len {
                    forward = next(forward, len);
                    backward = previous(backward, len);
                }
                assert_eq!(forward, start, "next cycle len={len} start={start}");
                assert_eq!(backward, start, "previous cycle len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        assert_eq!(jump_to(0, 2, 3), 2);
        assert_eq!(jump_to(1, 3, 3), 1);
        assert_eq!(jump_to(0, 0, 0), 0);
    }
}
