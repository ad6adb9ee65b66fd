//! Shannon entropy and information gain over categorical labels

use crate::data::{value_counts, Category, Dataset};

/// Shannon entropy, in bits, of a label sequence.
///
/// Only observed values are counted, so every probability is non-zero and
/// no `0 * log2(0)` term can appear. An empty sequence has entropy `0.0`.
pub fn entropy<'a, I>(labels: I) -> f64
where
    I: IntoIterator<Item = &'a Category>,
{
    let counts = value_counts(labels);
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return 0.0;
    }

    let n = total as f64;
    -counts
        .iter()
        .map(|&(_, c)| {
            let p = c as f64 / n;
            p * p.log2()
        })
        .sum::<f64>()
}

/// Split `subset` by the value of `attribute`.
///
/// Groups appear in order of first appearance and are never empty.
pub fn partition(data: &Dataset, subset: &[usize], attribute: usize) -> Vec<(Category, Vec<usize>)> {
    let mut groups: Vec<(Category, Vec<usize>)> = Vec::new();
    for &row in subset {
        let value = data.value(row, attribute);
        match groups.iter_mut().find(|(v, _)| v == value) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((value.clone(), vec![row])),
        }
    }
    groups
}

/// Reduction in target entropy obtained by splitting `subset` on `attribute`.
///
/// The result lies in `[0, entropy(subset labels)]`; rounding noise below
/// zero is clamped away.
pub fn information_gain(data: &Dataset, subset: &[usize], attribute: usize, target: usize) -> f64 {
    if subset.is_empty() {
        return 0.0;
    }

    let n = subset.len() as f64;
    let initial = entropy(data.column_values(target, subset));

    let weighted: f64 = partition(data, subset, attribute)
        .iter()
        .map(|(_, rows)| rows.len() as f64 / n * entropy(data.column_values(target, rows)))
        .sum();

    (initial - weighted).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<Category> {
        values.iter().map(|v| Category::new(v)).collect()
    }

    #[test]
    fn test_entropy_pure_is_zero() {
        assert_eq!(entropy(&labels(&["yes"])), 0.0);
        assert_eq!(entropy(&labels(&["no"; 9])), 0.0);
    }

    #[test]
    fn test_entropy_balanced() {
        let balanced = labels(&["yes", "yes", "yes", "yes", "no", "no", "no", "no"]);
        assert!((entropy(&balanced) - 1.0).abs() < 1e-12);

        let four_way = labels(&["a", "b", "c", "d"]);
        assert!((entropy(&four_way) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_empty_guard() {
        assert_eq!(entropy(&labels(&[])), 0.0);
    }

    #[test]
    fn test_entropy_nine_five() {
        let mut values = vec!["yes"; 9];
        values.extend(vec!["no"; 5]);
        assert!((entropy(&labels(&values)) - 0.940_285_958_670_631).abs() < 1e-9);
    }

    #[test]
    fn test_partition_order() {
        let data = Dataset::from_records(
            &["a", "y"],
            &[vec!["q", "1"], vec!["p", "0"], vec!["q", "0"], vec!["r", "1"]],
        )
        .unwrap();
        let groups = partition(&data, &[0, 1, 2, 3], 0);
        let keys: Vec<&str> = groups.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(keys, vec!["q", "p", "r"]);
        assert_eq!(groups[0].1, vec![0, 2]);

        let partial = partition(&data, &[1, 3], 0);
        assert_eq!(partial.len(), 2);
    }

    #[test]
    fn test_gain_bounds() {
        let data = Dataset::from_records(
            &["perfect", "noise", "label"],
            &[
                vec!["a", "x", "yes"],
                vec!["a", "y", "yes"],
                vec!["b", "x", "no"],
                vec!["b", "y", "no"],
            ],
        )
        .unwrap();
        let all = [0, 1, 2, 3];

        let perfect = information_gain(&data, &all, 0, 2);
        let noise = information_gain(&data, &all, 1, 2);
        assert!((perfect - 1.0).abs() < 1e-12);
        assert_eq!(noise, 0.0);

        let initial = entropy(data.column_values(2, &all));
        for attr in 0..2 {
            let gain = information_gain(&data, &all, attr, 2);
            assert!(gain >= 0.0 && gain <= initial + 1e-12);
        }
    }

    #[test]
    fn test_gain_empty_subset() {
        let data = Dataset::from_records(&["a", "y"], &[vec!["p", "1"]]).unwrap();
        assert_eq!(information_gain(&data, &[], 0, 1), 0.0);
    }
}
