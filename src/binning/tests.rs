use super::*;
use crate::spectrum::{quantize_mass, ItemProjection};

const BIN: i64 = 1_000;

fn scenario_items() -> Vec<ItemProjection> {
    vec![
        ItemProjection::new("a", quantize_mass(300.123)),
        ItemProjection::new("b", quantize_mass(300.9)),
        ItemProjection::new("c", quantize_mass(301.1)),
    ]
}

fn ids(buckets: &[Vec<String>]) -> Vec<Vec<&str>> {
    buckets
        .iter()
        .map(|bucket| bucket.iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn test_unshifted_scenario() {
    let buckets = bin(&scenario_items(), false, BIN, 1, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["a", "b"], vec!["c"]]);
}

#[test]
fn test_shifted_scenario() {
    let buckets = bin(&scenario_items(), true, BIN, 1, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["a"], vec!["b", "c"]]);
}

#[test]
fn test_charge_splitting_scenario() {
    let mut items = scenario_items();
    for item in items.iter_mut() {
        item.charge = Some(1);
    }
    items[1].charge = Some(2);

    let buckets = bin(&items, false, BIN, 1, true).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["a"], vec!["c"], vec!["b"]]);
}

#[test]
fn test_merge_scenario() {
    let mut items = scenario_items();
    items.push(ItemProjection::new("d", quantize_mass(1000.0)));

    let buckets = bin(&items, false, BIN, 2, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_merge_scenario_with_charges() {
    let items = vec![
        ItemProjection::with_charge("a", quantize_mass(300.123), 1),
        ItemProjection::with_charge("b", quantize_mass(300.9), 2),
        ItemProjection::with_charge("c", quantize_mass(301.1), 1),
        ItemProjection::with_charge("d", quantize_mass(1000.0), 2),
    ];

    let buckets = bin(&items, false, BIN, 2, true).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["a", "c"], vec!["b", "d"]]);
}

#[test]
fn test_undersized_bucket_ends_its_stratum() {
    let items = vec![
        ItemProjection::with_charge("a", quantize_mass(300.123), 1),
        ItemProjection::with_charge("b", quantize_mass(300.9), 2),
        ItemProjection::with_charge("c", quantize_mass(301.1), 1),
        ItemProjection::with_charge("d", quantize_mass(1000.0), 1),
    ];

    // "d" is the last charge 1 bucket and is not folded into the charge 2 bucket
    let buckets = bin(&items, false, BIN, 2, true).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["a", "c"], vec!["d"], vec!["b"]]);
}

#[test]
fn test_merge_stops_at_charge_boundary() {
    let items = vec![
        ItemProjection::with_charge("z1", 100_000, 1),
        ItemProjection::with_charge("z2", 100_000, 2),
    ];

    let (buckets, stats) = Bucketer::new(BinningConfig::new(BIN, 2, true))
        .bin_with_stats(&items, false)
        .unwrap();
    assert_eq!(ids(&buckets), vec![vec!["z1"], vec!["z2"]]);
    assert_eq!(stats.merged_buckets, 0);

    // Without charge splitting the same items share one bucket
    let buckets = bin(&items, false, BIN, 2, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["z1", "z2"]]);
}

#[test]
fn test_small_input_skips_bucketing() {
    let items = vec![
        ItemProjection::new("heavy", 900_000),
        ItemProjection::new("light", 100_000),
        ItemProjection::with_charge("bad-charge", 500_000, 42),
    ];

    // The skip happens before any key is computed, so the charge is never checked
    let buckets = bin(&items, false, BIN, 10, true).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["light", "bad-charge", "heavy"]]);
}

#[test]
fn test_empty_input() {
    assert_eq!(bin(&[], false, BIN, 1, false).unwrap(), vec![Vec::<String>::new()]);
    assert!(bin(&[], false, BIN, 0, false).unwrap().is_empty());
}

#[test]
fn test_invalid_charge_aborts() {
    let items = vec![
        ItemProjection::with_charge("ok", 100_000, 2),
        ItemProjection::with_charge("bad", 200_000, 10),
    ];

    let err = bin(&items, false, BIN, 1, true).unwrap_err();
    assert_eq!(
        err,
        BinningError::InvalidCharge {
            id: "bad".to_string(),
            charge: 10
        }
    );

    let negative = vec![ItemProjection::with_charge("neg", 100_000, -1)];
    assert!(matches!(
        bin(&negative, false, BIN, 1, true),
        Err(BinningError::InvalidCharge { charge: -1, .. })
    ));
}

#[test]
fn test_charge_ignored_without_splitting() {
    let items = vec![
        ItemProjection::with_charge("x", 100_100, 12),
        ItemProjection::with_charge("y", 100_200, 3),
    ];
    let buckets = bin(&items, false, BIN, 1, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["x", "y"]]);
}

#[test]
fn test_missing_charge_shares_stratum_with_zero() {
    let items = vec![
        ItemProjection::new("none", 100_100),
        ItemProjection::with_charge("zero", 100_200, 0),
        ItemProjection::with_charge("two", 100_300, 2),
    ];
    let buckets = bin(&items, false, BIN, 1, true).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["none", "zero"], vec!["two"]]);
}

#[test]
fn test_charge_key_overflow_is_an_error() {
    let items = vec![ItemProjection::with_charge("huge", i64::MAX - 1, 9)];

    assert_eq!(
        bin(&items, false, 1, 1, true).unwrap_err(),
        BinningError::KeyOverflow {
            id: "huge".to_string()
        }
    );
    // No charge offset, no overflow
    assert_eq!(bin(&items, false, 1, 1, false).unwrap().len(), 1);
}

#[test]
fn test_invalid_bin_size() {
    let items = scenario_items();
    assert_eq!(
        bin(&items, false, 0, 1, false).unwrap_err(),
        BinningError::InvalidBinSize(0)
    );
    assert!(bin(&items, false, -5, 1, false).is_err());
}

#[test]
fn test_last_bucket_may_stay_undersized() {
    let items = vec![
        ItemProjection::new("p0", 0),
        ItemProjection::new("p1", 1),
        ItemProjection::new("p2", 2),
        ItemProjection::new("far", 5_000),
    ];
    let buckets = bin(&items, false, BIN, 3, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["p0", "p1", "p2"], vec!["far"]]);
}

#[test]
fn test_merge_carries_across_several_buckets() {
    let items: Vec<_> = (0..4)
        .map(|i| ItemProjection::new(format!("s{}", i), i * BIN))
        .collect();
    let (buckets, stats) = Bucketer::new(BinningConfig::new(BIN, 3, false))
        .bin_with_stats(&items, false)
        .unwrap();

    assert_eq!(ids(&buckets), vec![vec!["s0", "s1", "s2"], vec!["s3"]]);
    assert_eq!(stats.raw_buckets, 4);
    assert_eq!(stats.merged_buckets, 2);
    assert_eq!(stats.emitted_buckets, 2);
    assert_eq!(stats.largest_bucket, 3);
    assert!(!stats.skipped);
}

#[test]
fn test_negative_masses_floor() {
    let items = vec![
        ItemProjection::new("neg", -1),
        ItemProjection::new("zero", 0),
    ];
    let buckets = bin(&items, false, BIN, 1, false).unwrap();
    assert_eq!(ids(&buckets), vec![vec!["neg"], vec!["zero"]]);
}

#[test]
fn test_equal_masses_keep_input_order() {
    let items = vec![
        ItemProjection::new("second-heavy", 100_500),
        ItemProjection::new("first", 100_200),
        ItemProjection::new("tie-1", 100_300),
        ItemProjection::new("tie-2", 100_300),
    ];
    let buckets = bin(&items, false, BIN, 1, false).unwrap();
    assert_eq!(
        ids(&buckets),
        vec![vec!["first", "tie-1", "tie-2", "second-heavy"]]
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let items: Vec<_> = (0..200)
        .map(|i| ItemProjection::with_charge(format!("s{}", i), (i * 7_919) % 50_000, (i % 4) as i32))
        .collect();
    let bucketer = Bucketer::new(BinningConfig::new(BIN, 5, true));

    let first = bucketer.bin(&items, true).unwrap();
    let second = bucketer.bin(&items, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bin_both() {
    let bucketer = Bucketer::new(BinningConfig::new(BIN, 1, false));
    let (unshifted, shifted) = bucketer.bin_both(&scenario_items()).unwrap();
    assert_eq!(ids(&unshifted), vec![vec!["a", "b"], vec!["c"]]);
    assert_eq!(ids(&shifted), vec![vec!["a"], vec!["b", "c"]]);
}

#[test]
fn test_shift_offset_rounds_half_up() {
    assert_eq!(BinningConfig::new(1_000, 1, false).shift_offset(), 500);
    assert_eq!(BinningConfig::new(5, 1, false).shift_offset(), 3);
    assert_eq!(BinningConfig::new(1, 1, false).shift_offset(), 1);
}
