//! Tests for dropdown/grouping

use super::*;
use crate::dropdown::option::{make_options, option_labels};
use insta::assert_debug_snapshot;
use proptest::prelude::*;

fn sample_grouping() -> Vec<Group<i32>> {
    vec![
        Group::new("G1", make_options([("a", 1), ("b", 2)])),
        Group::new("G2", make_options([("c", 3)])),
    ]
}

#[test]
fn test_flatten_inserts_headers_before_members() {
    let flat = flatten_grouping(&sample_grouping());
    assert_eq!(option_labels(&flat), vec!["G1", "a", "b", "G2", "c"]);
    assert!(flat[0].value.is_none());
    assert!(flat[3].value.is_none());
    assert_eq!(flat[1].value, Some(1));
}

#[test]
fn test_flatten_ungrouped_members_have_no_header() {
    let grouping = vec![
        Group::ungrouped(make_options([("x", 0)])),
        Group::new("G", make_options([("y", 1)])),
        Group::ungrouped(make_options([("z", 2)])),
    ];
    let flat = flatten_grouping(&grouping);
    assert_eq!(option_labels(&flat), vec!["x", "G", "y", "z"]);
}

#[test]
fn test_flatten_empty_grouping() {
    let flat = flatten_grouping::<i32>(&[]);
    assert!(flat.is_empty());
}

#[test]
fn test_validate_rejects_duplicate_headers() {
    let grouping = vec![
        Group::new("A", make_options([("x", 1)])),
        Group::new("A", make_options([("y", 2)])),
    ];
    assert_eq!(
        validate_grouping(&grouping),
        Err(ValidationError::DuplicateHeaders(vec!["A".to_string()]))
    );
}

#[test]
fn test_validate_allows_repeated_empty_headers() {
    let grouping = vec![
        Group::new("A", make_options([("x", 1)])),
        Group::ungrouped(make_options([("y", 2)])),
        Group::ungrouped(make_options([("z", 3)])),
    ];
    assert!(validate_grouping(&grouping).is_ok());
}

#[test]
fn test_validate_reports_each_duplicate_once() {
    let grouping = vec![
        Group::new("A", vec![]),
        Group::new("A", vec![]),
        Group::new("A", vec![]),
        Group::new("B", vec![]),
        Group::new("B", vec![]),
    ];
    assert_eq!(
        validate_grouping::<i32>(&grouping),
        Err(ValidationError::DuplicateHeaders(vec![
            "A".to_string(),
            "B".to_string()
        ]))
    );
}

#[test]
fn test_header_positions() {
    let grouping = vec![
        Group::ungrouped(make_options([("x", 0)])),
        Group::new("G1", make_options([("a", 1), ("b", 2)])),
        Group::new("G2", make_options([("c", 3)])),
    ];
    assert_eq!(header_positions(&grouping), vec![1, 4]);
}

#[test]
fn test_grouping_labels_mirror() {
    let labels = grouping_labels(&sample_grouping());
    assert_debug_snapshot!(labels, @r###"
    [
        (
            "G1",
            [
                "a",
                "b",
            ],
        ),
        (
            "G2",
            [
                "c",
            ],
        ),
    ]
    "###);
}

fn arb_grouping() -> impl Strategy<Value = Vec<Group<u8>>> {
    prop::collection::vec(
        ("[A-Z]{0,2}", prop::collection::vec("[a-z]{1,3}", 0..4)),
        0..6,
    )
    .prop_map(|groups| {
        groups
            .into_iter()
            .map(|(header, members)| {
                Group::new(
                    header,
                    members
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| SelectOption::new(label, i as u8))
                        .collect(),
                )
            })
            .collect::<Vec<_>>()
    })
    .prop_filter("non-empty headers must be unique", |g| {
        validate_grouping(g).is_ok()
    })
}

// Flattening keeps header order and, per header, member order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_flatten_preserves_order(grouping in arb_grouping()) {
        let flat = flatten_grouping(&grouping);

        let expected_headers: Vec<&str> = grouping
            .iter()
            .filter(|g| g.has_header())
            .map(|g| g.header.as_str())
            .collect();
        let headers: Vec<&str> = header_positions(&grouping)
            .into_iter()
            .map(|i| flat[i].label.as_str())
            .collect();
        prop_assert_eq!(headers, expected_headers);

        let mut offset = 0;
        for group in &grouping {
            if group.has_header() {
                prop_assert!(flat[offset].value.is_none());
                offset += 1;
            }
            for member in &group.options {
                prop_assert_eq!(&flat[offset], member);
                offset += 1;
            }
        }
        prop_assert_eq!(offset, flat.len());
    }

    #[test]
    fn prop_duplicate_header_rejected(header in "[A-Z]{1,3}", a in "[a-z]{1,3}", b in "[a-z]{1,3}") {
        let grouping = vec![
            Group::new(header.clone(), vec![SelectOption::new(a, 1u8)]),
            Group::new(header.clone(), vec![SelectOption::new(b, 2u8)]),
        ];
        prop_assert_eq!(
            validate_grouping(&grouping),
            Err(ValidationError::DuplicateHeaders(vec![header]))
        );
    }
}
