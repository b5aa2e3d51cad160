use crate::sequence::normalize_shifts;

/// Cyclically shift a slice in place by `shifts` positions.
///
/// A positive shift moves elements toward the back, wrapping the last ones
/// around to the front. The permutation is applied one cycle at a time:
/// starting from index 0, each element is swapped into its target position
/// until the cycle closes, then the next cycle starts one index further,
/// until every element was moved. No allocation takes place.
pub fn shift<T>(slice: &mut [T], shifts: isize) {
    let len = slice.len();
    if len == 0 {
        return;
    }
    let shifts = normalize_shifts(shifts, len);
    if shifts == 0 {
        return;
    }
    let mut moved = 0;
    let mut start = 0;
    while moved < len {
        // slice[start] holds the element in flight for the whole cycle
        let mut target = (start + shifts) % len;
        while target != start {
            slice.swap(start, target);
            moved += 1;
            target = (target + shifts) % len;
        }
        // the element in flight lands back at the start of its cycle
        moved += 1;
        start += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted(s: &str, shifts: isize) -> String {
        let mut chars = s.chars().collect::<Vec<_>>();
        shift(&mut chars, shifts);
        chars.into_iter().collect()
    }

    #[test]
    fn test_shift() {
        assert_eq!(shifted("", 3), "");
        assert_eq!(shifted("A", 5), "A");
        assert_eq!(shifted("ABCDEF", 2), "EFABCD");
        assert_eq!(shifted("ABCDEF", -2), "CDEFAB");
        assert_eq!(shifted("ABCDEF", 6), "ABCDEF");
        assert_eq!(shifted("ABCDEF", 3), "DEFABC");
        assert_eq!(shifted("ABCDEF", 4), "CDEFAB");
        assert_eq!(shifted("ABCDE", 2), "DEABC");
        assert_eq!(shifted("ABC", -1), "BCA");
    }

    #[test]
    fn test_matches_rotate_right() {
        for len in 0..12 {
            for shifts in -15isize..15 {
                let mut expected = (0..len).collect::<Vec<_>>();
                if len > 0 {
                    expected.rotate_right(shifts.rem_euclid(len as isize) as usize);
                }
                let mut actual = (0..len).collect::<Vec<_>>();
                shift(&mut actual, shifts);
                assert_eq!(actual, expected, "len {len} shifts {shifts}");
            }
        }
    }
}
