use courier_core::ByteRangeSet;

#[test]
fn default_spans_whole_resource() {
    let ranges = ByteRangeSet::default();
    assert!(ranges.is_full());
    assert_eq!(ranges.ranges(), &[0..i32::MAX as i64]);
    assert!(ranges.contains(0));
    assert!(ranges.contains(i32::MAX as i64 - 1));
    assert!(!ranges.contains(i32::MAX as i64));
}

#[test]
fn disjoint_ranges_stay_sorted() {
    let ranges: ByteRangeSet = vec![500..600, 0..100, 200..300].into_iter().collect();
    assert_eq!(ranges.ranges(), &[0..100, 200..300, 500..600]);
    assert_eq!(ranges.total_len(), 300);
    assert!(!ranges.is_full());
}

#[test]
fn adjacent_ranges_coalesce() {
    let mut ranges = ByteRangeSet::from_range(0..100);
    ranges.insert(100..150);
    assert_eq!(ranges.ranges(), &[0..150]);
}

#[test]
fn bridging_range_merges_neighbours() {
    let mut ranges: ByteRangeSet = vec![0..10, 20..30, 40..50, 90..100].into_iter().collect();
    ranges.insert(5..45);
    assert_eq!(ranges.ranges(), &[0..50, 90..100]);
}

#[test]
fn contained_range_is_absorbed() {
    let mut ranges = ByteRangeSet::from_range(0..1000);
    ranges.insert(10..20);
    assert_eq!(ranges.ranges(), &[0..1000]);
}

#[test]
fn empty_and_negative_ranges_are_ignored_or_clamped() {
    let mut ranges = ByteRangeSet::empty();
    ranges.insert(10..10);
    ranges.insert(20..5);
    assert!(ranges.is_empty());

    ranges.insert(-50..25);
    assert_eq!(ranges.ranges(), &[0..25]);
}

#[test]
fn contains_range_requires_single_cover() {
    let ranges: ByteRangeSet = vec![0..100, 200..300].into_iter().collect();
    assert!(ranges.contains_range(&(10..90)));
    assert!(ranges.contains_range(&(200..300)));
    assert!(!ranges.contains_range(&(50..250)));
    assert!(!ranges.contains_range(&(300..301)));
    assert!(ranges.contains_range(&(7..7)));
}

#[test]
fn display_lists_ranges() {
    let ranges: ByteRangeSet = vec![0..10, 20..30].into_iter().collect();
    assert_eq!(ranges.to_string(), "[0..10, 20..30]");
}
