use std::cmp::Ordering;

use crate::timetable::TripProjection;

/// compares two sequences of optional values position by position. positions
/// where either side is absent, or both are equal, are skipped; the first
/// position holding two different present values decides. sequences that
/// never differ this way compare equal.
///
/// this is not a total order (absent slots break transitivity), so it must
/// only be used with [`stable_insertion_sort_by`].
pub fn compare_first_difference<T, A, B>(a: A, b: B) -> Ordering
where
    T: Ord,
    A: IntoIterator<Item = Option<T>>,
    B: IntoIterator<Item = Option<T>>,
{
    a.into_iter()
        .zip(b)
        .find_map(|pair| match pair {
            (Some(x), Some(y)) if x != y => Some(x.cmp(&y)),
            _ => None,
        })
        .unwrap_or(Ordering::Equal)
}

/// timetable row order: weekday class first, then the first stop where both
/// trips have differing times.
pub fn compare_projections(a: &TripProjection, b: &TripProjection) -> Ordering {
    a.weekday_class
        .cmp(&b.weekday_class)
        .then_with(|| compare_first_difference(a.times(), b.times()))
}

/// sorts in place, keeping equal elements in their original order. unlike
/// the standard library sorts it tolerates comparators that are not total
/// orders.
pub fn stable_insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_difference_skips_absent_and_equal() {
        let a = vec![Some(1), None, Some(5), Some(9)];
        let b = vec![Some(1), Some(0), Some(6), Some(2)];
        assert_eq!(compare_first_difference(a, b), Ordering::Less);
    }

    #[test]
    fn test_first_difference_all_absent_is_equal() {
        let a: Vec<Option<u32>> = vec![None, Some(3)];
        let b = vec![Some(4), None];
        assert_eq!(compare_first_difference(a, b), Ordering::Equal);
        assert_eq!(
            compare_first_difference(Vec::<Option<u32>>::new(), vec![]),
            Ordering::Equal
        );
    }

    #[test]
    fn test_first_difference_later_value_is_greater() {
        let a = vec![None, Some(10)];
        let b = vec![Some(1), Some(7)];
        assert_eq!(compare_first_difference(a, b), Ordering::Greater);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        stable_insertion_sort_by(&mut items, |x, y| x.0.cmp(&y.0));
        assert_eq!(items, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_insertion_sort_with_partial_values() {
        let mut rows = vec![
            vec![Some(8), Some(20), Some(35)],
            vec![Some(5), None, Some(40)],
            vec![Some(7), Some(15), Some(30)],
        ];
        stable_insertion_sort_by(&mut rows, |a, b| {
            compare_first_difference(a.iter().copied(), b.iter().copied())
        });
        assert_eq!(rows[0][0], Some(5));
        assert_eq!(rows[1][0], Some(7));
        assert_eq!(rows[2][0], Some(8));
    }
}
