use rle_bitmap::{MultiOps, RleBitmap};

fn bitmap(runs: &[u64]) -> RleBitmap {
    RleBitmap::try_from_runs(runs.to_vec()).unwrap()
}

#[test]
fn union_of_three_sparse_bitmaps() {
    let a = bitmap(&[10, 2]);
    let b = bitmap(&[15, 1]);
    let c = bitmap(&[0, 4, 12, 2]);

    assert_eq!([&a, &b, &c].union().runs(), &[0, 4, 6, 2, 3, 3]);
}

#[test]
fn intersection_of_three_disjoint_bitmaps_is_empty() {
    let a = bitmap(&[10, 2]);
    let b = bitmap(&[15, 1]);
    let c = bitmap(&[0, 4, 12, 2]);

    assert!([&a, &b, &c].intersection().is_empty());
}

#[test]
fn symmetric_difference_of_disjoint_bitmaps_matches_their_union() {
    let a = bitmap(&[10, 2]);
    let b = bitmap(&[15, 1]);
    let c = bitmap(&[0, 4, 12, 2]);

    assert_eq!([&a, &b, &c].symmetric_difference().runs(), &[0, 4, 6, 2, 3, 3]);
}

#[test]
fn union_of_overlapping_runs_coalesces() {
    let a = bitmap(&[0, 4]);
    let b = bitmap(&[2, 4]);

    assert_eq!((&a | &b).runs(), &[0, 6]);
}

#[test]
fn intersection_keeps_the_overlap() {
    let a = bitmap(&[0, 4]);
    let b = bitmap(&[2, 4]);

    assert_eq!((&a & &b).runs(), &[2, 2]);
}

#[test]
fn symmetric_difference_drops_the_overlap() {
    let a = bitmap(&[0, 4]);
    let b = bitmap(&[2, 4]);

    assert_eq!((&a ^ &b).runs(), &[0, 2, 2, 2]);
}

#[test]
fn complement_flips_runs_and_extends_to_the_universe() {
    let a = bitmap(&[10, 2]);

    assert_eq!((!&a).runs(), &[0, 10, 2, 9_007_199_254_740_979]);
}

#[test]
fn complement_of_the_empty_bitmap_is_the_universe() {
    assert_eq!((!RleBitmap::new()).runs(), &[0, 9_007_199_254_740_991]);
    assert_eq!(!RleBitmap::new(), RleBitmap::full());
}

#[test]
fn intersection_ends_at_the_shorter_input() {
    let a = bitmap(&[1, 2, 3]);
    let b = bitmap(&[1, 2, 4, 1]);

    assert_eq!((&a & &b).runs(), &[1, 2]);
}

#[test]
fn union_skips_inputs_without_set_bits() {
    let a = bitmap(&[1001, 12, 30]);
    let b = bitmap(&[60, 950]);
    let c = bitmap(&[10]);
    let d = bitmap(&[7_838_291_893, 9, 120]);
    let e = bitmap(&[5]);

    let expected = [60, 953, 7_838_291_893 - 60 - 953, 9];
    assert_eq!([&a, &b, &c, &d, &e].union().runs(), &expected);
}

#[test]
fn operators_accept_owned_and_borrowed_bitmaps() {
    let a = bitmap(&[0, 4]);
    let b = bitmap(&[2, 4]);

    let union = bitmap(&[0, 6]);
    assert_eq!(union, &a | &b);
    assert_eq!(union, &a | b.clone());
    assert_eq!(union, a.clone() | &b);
    assert_eq!(union, a.clone() | b.clone());

    let intersection = bitmap(&[2, 2]);
    assert_eq!(intersection, &a & &b);
    assert_eq!(intersection, &a & b.clone());
    assert_eq!(intersection, a.clone() & &b);
    assert_eq!(intersection, a.clone() & b.clone());

    let symmetric_difference = bitmap(&[0, 2, 2, 2]);
    assert_eq!(symmetric_difference, &a ^ &b);
    assert_eq!(symmetric_difference, &a ^ b.clone());
    assert_eq!(symmetric_difference, a.clone() ^ &b);
    assert_eq!(symmetric_difference, a ^ b);
}

#[test]
fn variadic_operations_without_inputs_are_empty() {
    let none: Vec<RleBitmap> = Vec::new();
    assert!(none.union().is_empty());

    let none: Vec<RleBitmap> = Vec::new();
    assert!(none.intersection().is_empty());

    let none: Vec<RleBitmap> = Vec::new();
    assert!(none.symmetric_difference().is_empty());
}

#[test]
fn variadic_operations_with_one_input_pass_it_through() {
    let a = bitmap(&[3, 4, 1, 2]);

    assert_eq!([&a].union(), a);
    assert_eq!([&a].intersection(), a);
    assert_eq!([&a].symmetric_difference(), a);
}

#[test]
fn intersection_short_circuits_on_an_all_zeros_input() {
    let a = bitmap(&[0, 1000]);
    let b = bitmap(&[500]);

    assert!((&a & &b).is_empty());
}
