use std::collections::HashSet;

use cloud_naming::*;

#[test]
fn test_region_table_size() {
    assert_eq!(SHORT_REGIONS.len(), 33);
    assert_eq!(regions().count(), 33);
    assert_eq!(REGION_CODES.len(), 33);
}

#[test]
fn test_short_codes_pairwise_distinct() {
    let codes: Vec<&str> = SHORT_REGIONS.values().copied().collect();
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b, "two regions abbreviate to '{}'", a);
        }
    }

    assert!(check_unique_codes(REGION_CODES).is_ok());
}

#[test]
fn test_collision_names_both_regions() {
    let pairs = [("eu-west-1", "euw1"), ("eu-west-one", "euw1")];

    let collision: CodeCollision = check_unique_codes(pairs).unwrap_err();
    assert_eq!(collision.code, "euw1");
    assert_eq!(collision.first, "eu-west-1");
    assert_eq!(collision.second, "eu-west-one");
    assert_eq!(
        collision.to_string(),
        "Short code collision: 'eu-west-1' and 'eu-west-one' both abbreviate to 'euw1'"
    );
}

#[test]
fn test_partition_regions_present() {
    // GovCloud and China partitions
    for region in ["us-gov-east-1", "us-gov-west-1", "cn-north-1", "cn-northwest-1"] {
        assert!(is_supported_region(region), "{} should be supported", region);
    }
}

#[test]
fn test_table_is_readable_as_a_map() {
    assert_eq!(SHORT_REGIONS.get("eu-central-1"), Some(&"euc1"));
    assert_eq!(SHORT_REGIONS.get("il-central-1"), Some(&"ilc1"));

    let regions_from_map: HashSet<&str> = SHORT_REGIONS.keys().copied().collect();
    let regions_from_iter: HashSet<&str> = regions().map(|(region, _)| region).collect();
    assert_eq!(regions_from_map, regions_from_iter);
}

#[test]
fn test_codes_are_shorter_than_regions() {
    for (region, code) in regions() {
        assert!(code.len() < region.len(), "{} -> {}", region, code);
        assert!(!code.contains('-'), "{} has a delimiter", code);
    }
}
