use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::VennError;

/// Upper bound on the number of groups a partition will enumerate. The
/// region count is 2^N - 1, so past this point the enumeration is useless
/// anyway, and the bitmask stays well inside its u32.
pub const MAX_GROUPS: usize = 16;

/// Identifies one cell of the overlap partition. Bit i (most significant
/// first) is set when the region lies inside group i.
///
/// The all-zeros pattern is not a region; valid masks run from 1 to
/// 2^groups - 1. The `Display` form is the fixed-width bitstring used as
/// the external key, e.g. `"10110"` for groups 0, 2 and 3 out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode {
    mask: u32,
    groups: u8,
}

impl RegionCode {
    pub fn new(mask: u32, groups: usize) -> Self {
        debug_assert!(groups >= 1 && groups <= MAX_GROUPS);
        debug_assert!(mask >= 1 && mask < 1u32 << groups);
        Self {
            mask,
            groups: groups as u8,
        }
    }

    /// All 2^groups - 1 codes for a group count, in ascending mask order.
    pub fn all(groups: usize) -> impl Iterator<Item = RegionCode> {
        (1u32..1u32 << groups).map(move |mask| RegionCode::new(mask, groups))
    }

    /// Number of groups this code spans (its bitstring width).
    pub fn groups(&self) -> usize {
        self.groups as usize
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Whether group `index` is on the included side of this region.
    pub fn contains(&self, index: usize) -> bool {
        debug_assert!(index < self.groups as usize);
        self.mask >> (self.groups as usize - 1 - index) & 1 == 1
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.mask, width = self.groups as usize)
    }
}

impl FromStr for RegionCode {
    type Err = VennError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = s.len();
        if groups == 0 || groups > MAX_GROUPS {
            return Err(VennError::InvalidInput(format!(
                "region code {s:?} must be 1..={MAX_GROUPS} bits wide"
            )));
        }
        let mut mask = 0u32;
        for ch in s.chars() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(VennError::InvalidInput(format!(
                        "region code {s:?} contains {ch:?}; only '0' and '1' are allowed"
                    )));
                }
            };
            mask = mask << 1 | bit;
        }
        if mask == 0 {
            return Err(VennError::InvalidInput(format!(
                "region code {s:?} excludes every group"
            )));
        }
        Ok(Self {
            mask,
            groups: groups as u8,
        })
    }
}

/// Splits the universe (union of all groups) into 2^N - 1 disjoint regions,
/// one per [`RegionCode`].
///
/// Each region starts from the whole universe, keeps the members of every
/// included group and drops the members of every excluded one. Seeding from
/// the universe means single-group codes already read as "only in that
/// group" without special-casing, since every code includes at least one
/// group.
pub fn partition<T>(groups: &[HashSet<T>]) -> Result<BTreeMap<RegionCode, HashSet<&T>>, VennError>
where
    T: Eq + Hash,
{
    if groups.is_empty() {
        return Err(VennError::InvalidInput(
            "at least one group is required".to_string(),
        ));
    }
    if groups.len() > MAX_GROUPS {
        return Err(VennError::InvalidInput(format!(
            "{} groups exceed the supported maximum of {MAX_GROUPS}",
            groups.len()
        )));
    }

    let universe: HashSet<&T> = groups.iter().flatten().collect();

    let mut regions = BTreeMap::new();
    for code in RegionCode::all(groups.len()) {
        let mut value = universe.clone();
        for (index, group) in groups.iter().enumerate() {
            if code.contains(index) {
                value.retain(|item| group.contains(*item));
            } else {
                value.retain(|item| !group.contains(*item));
            }
        }
        regions.insert(code, value);
    }
    Ok(regions)
}
