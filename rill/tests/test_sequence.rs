use std::collections::HashSet;

use rill::sequence::is_rotation_of;
use rill::{
    merge_all, Cursor, EmptyRuns, Error, NullSafe, Result, SequenceExt, Xor, INTEGER_ADDITION,
};

fn letters(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn test_shift_round_trip() {
    let input = letters("ABCDEFG");
    for shifts in -20..20 {
        let shifted = input.iter().copied().shift(shifts).collect::<Vec<_>>();
        let back = shifted.iter().copied().shift(-shifts).collect::<Vec<_>>();
        assert_eq!(back, input, "shifts {shifts}");
    }
}

#[test]
fn test_shift_examples() {
    let shift = |shifts| SequenceExt::shift("ABC".chars(), shifts).collect::<String>();
    assert_eq!(shift(1), "CAB");
    assert_eq!(shift(-1), "BCA");
    assert_eq!(shift(0), "ABC");
}

#[test]
fn test_chunks_reassemble() {
    let input = (0..23).collect::<Vec<_>>();
    for size in 1..30 {
        let chunks = input.iter().copied().chunk_by(size).unwrap().collect::<Vec<_>>();
        let (last, init) = chunks.split_last().unwrap();
        assert!(init.iter().all(|chunk| chunk.len() == size));
        assert!(!last.is_empty() && last.len() <= size);
        assert_eq!(chunks.concat(), input);
    }
}

#[test]
fn test_chunk_size_zero() {
    assert!(matches!(
        (0..3).chunk_by(0),
        Err(Error::InvalidArgument { name: "size", .. })
    ));
}

#[test]
fn test_merge_sorted_is_sorted_union() {
    let left = [1, 1, 4, 6, 9, 9, 12];
    let right = [0, 1, 5, 6, 6, 13];
    let merged = left.iter().merge_sorted(right.iter()).copied().collect::<Vec<_>>();
    assert!(merged.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(merged
        .iter()
        .is_permutation_of(left.iter().chain(right.iter())));
}

#[test]
fn test_merge_sorted_by_reverse() {
    let merged = [9, 5, 1]
        .into_iter()
        .merge_sorted_by([8, 5, 2], |a: &i32, b: &i32| b.cmp(a))
        .collect::<Vec<_>>();
    assert_eq!(merged, vec![9, 8, 5, 5, 2, 1]);
}

#[test]
fn test_merge_all() {
    let merged = merge_all(vec![vec![3, 7], vec![1, 8, 9], vec![], vec![2, 7]]).collect::<Vec<_>>();
    assert_eq!(merged, vec![1, 2, 3, 7, 7, 8, 9]);
}

#[test]
fn test_majority_element() {
    assert_eq!(letters("ABACA").into_iter().majority_element(), Some('A'));
    assert_eq!(letters("ABAC").into_iter().majority_element(), None);
    assert_eq!(std::iter::empty::<char>().majority_element(), None);
}

#[test]
fn test_majority_element_null_safe() {
    let values = [None, Some(1), None, None, Some(2)];
    assert_eq!(
        values
            .iter()
            .copied()
            .majority_element_by(NullSafe(|a: &i32, b: &i32| a == b)),
        Some(None)
    );
}

#[test]
fn test_rotation() {
    let abcd = letters("ABCD");
    assert!(is_rotation_of(&abcd, &abcd));
    assert!(is_rotation_of(&abcd, &letters("CDAB")));
    assert!(!is_rotation_of(&abcd, &letters("BEDA")));
}

#[test]
fn test_two_sum() {
    let input = [5, 3, -1, 2, 0];
    let pairs = input
        .into_iter()
        .target_pairs(2, INTEGER_ADDITION)
        .collect::<Result<HashSet<_>>>()
        .unwrap();
    assert_eq!(pairs, HashSet::from([(3, -1), (2, 0)]));
    let pairs = input
        .into_iter()
        .target_pairs(6, INTEGER_ADDITION)
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert!(pairs.is_empty());
}

#[test]
fn test_xor_pairs() {
    let pairs = [0b0011u8, 0b0101, 0b0110, 0b1111]
        .into_iter()
        .target_pairs(0b0110, Xor::<u8>::new())
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(pairs, vec![(0b0011, 0b0101)]);
}

#[test]
fn test_selected_target_pairs() {
    let words = ["a", "bb", "ccc", "dddd"];
    let pairs = words
        .iter()
        .map(|word| word.len() as i32)
        .select_target_pairs(5, INTEGER_ADDITION, |_, i| words[i])
        .collect::<Result<Vec<_>>>()
        .unwrap();
    assert_eq!(pairs, vec![("a", "dddd"), ("bb", "ccc")]);
}

#[test]
fn test_split() {
    let input = letters("ABXAXXCAX");
    let split = |empties| {
        input
            .iter()
            .copied()
            .split_on('X', empties)
            .map(String::from_iter)
            .collect::<Vec<_>>()
    };
    assert_eq!(split(EmptyRuns::Exclude), vec!["AB", "A", "CA"]);
    assert_eq!(split(EmptyRuns::Include), vec!["AB", "A", "", "CA"]);
}

#[test]
fn test_permutations() {
    let permutations = "ABC"
        .chars()
        .permutations()
        .map(String::from_iter)
        .collect::<Vec<_>>();
    assert_eq!(permutations, vec!["ABC", "ACB", "BAC", "BCA", "CAB", "CBA"]);
    assert_eq!("ABA".chars().permutations().count(), 6);
    assert_eq!(std::iter::empty::<char>().permutations().count(), 0);
}

#[test]
fn test_increasing_runs() {
    let runs = [1, 2, 3, 2, 1, 2, 1]
        .into_iter()
        .increasing_runs()
        .collect::<Vec<_>>();
    assert_eq!(runs, vec![vec![1, 2, 3], vec![1, 2]]);
}

#[test]
fn test_unique_pairs() {
    let pairs = "ABC".chars().unique_pairs().collect::<Vec<_>>();
    assert_eq!(pairs, vec![('A', 'B'), ('A', 'C'), ('B', 'C')]);
    assert_eq!((0..10).unique_pairs().count(), 45);
}

#[test]
fn test_skip_at_unknown_length() {
    let items = (0..3)
        .filter(|_| true)
        .skip_at(5)
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(
        items.last(),
        Some(&Err(Error::OutOfRange {
            index: 5,
            len: None
        }))
    );
}

#[test]
fn test_replace_at() {
    let replaced = letters("ABC")
        .into_iter()
        .replace_at(1, 'Z')
        .unwrap()
        .collect::<Result<String>>()
        .unwrap();
    assert_eq!(replaced, "AZC");
}

#[test]
fn test_partitioned_by() {
    let partitioned = (1..=6)
        .partitioned_by(|n| n % 2 == 0)
        .collect::<Vec<_>>();
    assert_eq!(partitioned, vec![1, 3, 5, 2, 4, 6]);
}

#[test]
fn test_cursor_contract() {
    let mut cursor = Cursor::new([1].into_iter());
    assert_eq!(cursor.current(), Err(Error::NotPositioned));
    assert!(cursor.advance());
    assert_eq!(cursor.current(), Ok(&1));
    assert!(!cursor.advance());
    assert_eq!(cursor.current(), Err(Error::NotPositioned));
    assert!(!cursor.advance());
}
