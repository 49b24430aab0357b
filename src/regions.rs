//! Region table — full AWS region identifiers and their short codes.
//!
//! Short codes are built from the initials of the region parts and its
//! number (`ap-southeast-1` → `apse1`). The table is a bijection: no two
//! regions share a code, otherwise two regions would produce identical names.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use thiserror::Error;

/// Every supported `(region, short code)` pair, ordered by region.
pub const REGION_CODES: [(&str, &str); 33] = [
    ("af-south-1", "afs1"),
    ("ap-east-1", "ape1"),
    ("ap-northeast-1", "apne1"),
    ("ap-northeast-2", "apne2"),
    ("ap-northeast-3", "apne3"),
    ("ap-south-1", "aps1"),
    ("ap-south-2", "aps2"),
    ("ap-southeast-1", "apse1"),
    ("ap-southeast-2", "apse2"),
    ("ap-southeast-3", "apse3"),
    ("ap-southeast-4", "apse4"),
    ("ca-central-1", "cac1"),
    ("ca-west-1", "caw1"),
    ("cn-north-1", "cnn1"),
    ("cn-northwest-1", "cnnw1"),
    ("eu-central-1", "euc1"),
    ("eu-central-2", "euc2"),
    ("eu-north-1", "eun1"),
    ("eu-south-1", "eus1"),
    ("eu-south-2", "eus2"),
    ("eu-west-1", "euw1"),
    ("eu-west-2", "euw2"),
    ("eu-west-3", "euw3"),
    ("il-central-1", "ilc1"),
    ("me-central-1", "mec1"),
    ("me-south-1", "mes1"),
    ("sa-east-1", "sae1"),
    ("us-east-1", "use1"),
    ("us-east-2", "use2"),
    ("us-gov-east-1", "usge1"),
    ("us-gov-west-1", "usgw1"),
    ("us-west-1", "usw1"),
    ("us-west-2", "usw2"),
];

/// Region → short code. Built once on first access, read-only afterwards.
pub static SHORT_REGIONS: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_CODES.iter().copied().collect());

static REGIONS_BY_CODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_CODES.iter().map(|&(region, code)| (code, region)).collect());

/// Region → short code.
#[inline]
pub fn short_region(region: &str) -> Option<&'static str> {
    SHORT_REGIONS.get(region).copied()
}

/// Short code → region.
#[inline]
pub fn region_for_short_code(code: &str) -> Option<&'static str> {
    REGIONS_BY_CODE.get(code).copied()
}

#[inline]
pub fn is_supported_region(region: &str) -> bool {
    SHORT_REGIONS.contains_key(region)
}

/// Iterate all `(region, short code)` pairs in region order.
pub fn regions() -> impl Iterator<Item = (&'static str, &'static str)> {
    SHORT_REGIONS.iter().map(|(&region, &code)| (region, code))
}

/// Two regions sharing one short code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Short code collision: '{first}' and '{second}' both abbreviate to '{code}'")]
pub struct CodeCollision {
    pub code: String,
    pub first: String,
    pub second: String,
}

/// Verify that no two regions in `pairs` abbreviate to the same code.
///
/// # Errors
///
/// Returns a [`CodeCollision`] naming the first pair of regions found
/// sharing a code.
pub fn check_unique_codes<'a, I>(pairs: I) -> Result<(), CodeCollision>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (region, code) in pairs {
        if let Some(&existing) = seen.get(code) {
            return Err(CodeCollision {
                code: code.to_string(),
                first: existing.to_string(),
                second: region.to_string(),
            });
        }
        seen.insert(code, region);
    }

    Ok(())
}
