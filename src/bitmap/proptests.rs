#[cfg(test)]
#[allow(clippy::eq_op)] // Allow equal expressions as operands
mod test {
    use crate::{MultiOps, RleBitmap};
    use proptest::prelude::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    //
    // Tests algebraic set properties in terms of run-length bitmaps.
    // Follows wikipedia article regarding ordering and heading
    //
    // https://en.wikipedia.org/wiki/Algebra_of_sets
    //

    // Decodes a bitmap into plain bits over its encoded extent. Kept to
    // test-sized bitmaps, the universe itself would not fit in memory.
    fn to_bits(bitmap: &RleBitmap) -> Vec<bool> {
        let mut bits = Vec::new();
        for (idx, &run) in bitmap.runs().iter().enumerate() {
            for _ in 0..run {
                bits.push(idx % 2 == 1);
            }
        }
        bits
    }

    fn from_bits(bits: &[bool]) -> RleBitmap {
        let mut runs = Vec::new();
        let mut ones = false;
        let mut count = 0u64;
        for &bit in bits {
            if bit == ones {
                count += 1;
            } else {
                runs.push(count);
                ones = bit;
                count = 1;
            }
        }
        runs.push(count);
        RleBitmap::try_from_runs(runs).unwrap()
    }

    fn canonical(bitmap: &RleBitmap) -> bool {
        let runs = bitmap.runs();
        runs.is_empty() || (runs.len() % 2 == 0 && runs.iter().skip(1).all(|&run| run > 0))
    }

    //
    // The fundamental properties of set algebra
    // =========================================
    //
    // Commutative property:
    // --------------------

    proptest! {
        #[test]
        fn unions_are_commutative(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(&a | &b, &b | &a);
        }

        #[test]
        fn intersections_are_commutative(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(&a & &b, &b & &a);
        }

        #[test]
        fn symmetric_differences_are_commutative(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(&a ^ &b, &b ^ &a);
        }
    }

    //
    // Associative property:
    // ---------------------

    proptest! {
        #[test]
        fn unions_are_associative(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary(),
            c in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(
                &a | ( &b | &c ),
                ( &a | &b ) | &c
            );
        }

        #[test]
        fn intersections_are_associative(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary(),
            c in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(
                &a & ( &b & &c ),
                ( &a & &b ) & &c
            );
        }

        #[test]
        fn symmetric_differences_are_associative(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary(),
            c in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(
                &a ^ ( &b ^ &c ),
                ( &a ^ &b ) ^ &c
            );
        }
    }

    //
    // Idempotent property:
    // --------------------

    proptest! {
        #[test]
        fn unions_are_idempotent(a in RleBitmap::arbitrary()) {
            prop_assert_eq!(&a | &a, a);
        }

        #[test]
        fn intersections_are_idempotent(a in RleBitmap::arbitrary()) {
            prop_assert_eq!(&a & &a, a);
        }

        #[test]
        fn self_symmetric_difference_is_empty(a in RleBitmap::arbitrary()) {
            prop_assert!((&a ^ &a).is_empty());
        }
    }

    //
    // Identity elements:
    // ------------------

    proptest! {
        #[test]
        fn the_empty_bitmap_is_the_union_identity(a in RleBitmap::arbitrary()) {
            prop_assert_eq!(&a | &RleBitmap::new(), a);
        }

        #[test]
        fn intersecting_with_the_empty_bitmap_clears(a in RleBitmap::arbitrary()) {
            prop_assert!((&a & &RleBitmap::new()).is_empty());
        }

        #[test]
        fn the_empty_bitmap_is_the_symmetric_difference_identity(a in RleBitmap::arbitrary()) {
            prop_assert_eq!(&a ^ &RleBitmap::new(), a);
        }
    }

    //
    // Complement laws:
    // ----------------

    proptest! {
        #[test]
        fn complements_are_involutive(a in RleBitmap::arbitrary()) {
            prop_assert_eq!(!!&a, a);
        }

        #[test]
        fn complements_partition_the_universe(a in RleBitmap::arbitrary()) {
            prop_assert!((&a & &!&a).is_empty());
            prop_assert_eq!(&a | &!&a, RleBitmap::full());
        }

        #[test]
        fn de_morgans_laws_hold(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(!(&a | &b), &!&a & &!&b);
            prop_assert_eq!(!(&a & &b), &!&a | &!&b);
        }

        #[test]
        fn symmetric_difference_matches_its_composition(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!(
                &a ^ &b,
                &(&a | &b) & &(&!&a | &!&b)
            );
        }
    }

    //
    // Variadic forms agree with the binary operators:
    // -----------------------------------------------

    proptest! {
        #[test]
        fn multi_union_matches_folded_unions(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary(),
            c in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!([&a, &b, &c].union(), &(&a | &b) | &c);
            prop_assert_eq!(vec![a.clone(), b.clone(), c.clone()].union(), &(&a | &b) | &c);
        }

        #[test]
        fn multi_intersection_matches_folded_intersections(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary(),
            c in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!([&a, &b, &c].intersection(), &(&a & &b) & &c);
            prop_assert_eq!(vec![a.clone(), b.clone(), c.clone()].intersection(), &(&a & &b) & &c);
        }

        #[test]
        fn multi_symmetric_difference_matches_folded_operators(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary(),
            c in RleBitmap::arbitrary()
        ) {
            prop_assert_eq!([&a, &b, &c].symmetric_difference(), &(&a ^ &b) ^ &c);
        }
    }

    //
    // Representation invariants:
    // --------------------------

    proptest! {
        #[test]
        fn operation_outputs_are_canonical(
            a in RleBitmap::arbitrary(),
            b in RleBitmap::arbitrary()
        ) {
            prop_assert!(canonical(&(&a | &b)));
            prop_assert!(canonical(&(&a & &b)));
            prop_assert!(canonical(&(&a ^ &b)));
            prop_assert!(canonical(&!&a));
        }

        #[test]
        fn bitmaps_round_trip_through_plain_bits(a in RleBitmap::arbitrary()) {
            prop_assert_eq!(from_bits(&to_bits(&a)), a);
        }

        #[test]
        fn cardinality_matches_the_ranges(a in RleBitmap::arbitrary()) {
            let by_ranges: u64 = a.ranges().map(|range| range.end - range.start).sum();
            prop_assert_eq!(a.len(), by_ranges);

            let rebuilt = RleBitmap::from_sorted_ranges(a.ranges()).unwrap();
            prop_assert_eq!(rebuilt, a);
        }
    }
}
