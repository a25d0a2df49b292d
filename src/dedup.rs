use std::collections::HashSet;

/// Drops duplicate values, keeping the first occurrence of each.
/// Equality is exact string equality.
pub fn distinct(values: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(values.len());
    let mut distinct = Vec::with_capacity(values.len());
    for value in values {
        if seen.insert(value.clone()) {
            distinct.push(value);
        }
    }
    distinct
}

#[cfg(test)]
mod dedup_tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn removes_duplicates() {
        let input = owned(&["a", "b", "a", "c", "b", "a"]);
        assert_eq!(distinct(input), owned(&["a", "b", "c"]));
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let input = owned(&["c", "a", "c", "b"]);
        assert_eq!(distinct(input), owned(&["c", "a", "b"]));
    }

    #[test]
    fn is_idempotent() {
        let input = owned(&["x", "y", "x", "z", "z"]);
        let once = distinct(input);
        let twice = distinct(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input() {
        assert!(distinct(Vec::new()).is_empty());
    }
}
