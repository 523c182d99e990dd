//! Edit distance for typo-tolerant matching.
//!
//! Unit-cost Levenshtein distance over chars. The bounded variant bails out as soon as the
//! distance is known to exceed the limit, which is the common case when a query token is
//! compared against every word of every record.

/// Computes the Levenshtein distance between two strings.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Returns the edit distance between `a` and `b` if it is at most `max`.
///
/// Two early exits keep this cheap:
/// 1. The length difference is a lower bound on the distance
/// 2. Once every cell of a row exceeds `max`, later rows cannot come back under it
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    if a_len.abs_diff(b_chars.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return None;
        }
    }

    let distance = row[b_chars.len()];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_known_distances() {
        assert_eq!(levenshtein("abc", "abd"), 1);
        assert_eq!(levenshtein("abc", "abcd"), 1);
        assert_eq!(levenshtein("colles", "colees"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_within_one_edit() {
        assert_eq!(levenshtein_within("colees", "colles", 1), Some(1));
        assert_eq!(levenshtein_within("anemia", "anaemia", 1), Some(1));
        assert_eq!(levenshtein_within("wrist", "wrist", 1), Some(0));
    }

    #[test]
    fn test_within_length_early_exit() {
        assert_eq!(levenshtein_within("a", "abcdef", 1), None);
    }

    #[test]
    fn test_within_rejects_two_edits() {
        assert_eq!(levenshtein_within("fracture", "frakturr", 1), None);
        assert_eq!(levenshtein_within("fracture", "frakturr", 2), Some(2));
    }

    proptest! {
        #[test]
        fn bounded_agrees_with_full(a in "[a-e]{0,8}", b in "[a-e]{0,8}", max in 0usize..4) {
            let full = levenshtein(&a, &b);
            let bounded = levenshtein_within(&a, &b, max);
            if full <= max {
                prop_assert_eq!(bounded, Some(full));
            } else {
                prop_assert_eq!(bounded, None);
            }
        }

        #[test]
        fn distance_is_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }
    }
}
