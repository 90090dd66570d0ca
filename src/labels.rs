use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use crate::error::VennError;
use crate::region::{RegionCode, partition};

/// Per-region label text, keyed by region code in ascending mask order.
pub type Labels = BTreeMap<RegionCode, String>;

/// Which statistics go into each region label.
///
/// The pieces always land in the same order, logic prefix first, then the
/// count, then the percentage, no matter how the style was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    /// The region's cardinality as a decimal integer.
    pub number: bool,
    /// The region's share of the universe as `(12.3%)`, one decimal place.
    pub percent: bool,
    /// The region code prefix, e.g. `101: `.
    pub logic: bool,
}

impl LabelStyle {
    /// Count only, the default.
    pub const NUMBER: Self = Self {
        number: true,
        percent: false,
        logic: false,
    };
    /// Percentage only.
    pub const PERCENT: Self = Self {
        number: false,
        percent: true,
        logic: false,
    };
    /// Region code only.
    pub const LOGIC: Self = Self {
        number: false,
        percent: false,
        logic: true,
    };

    pub const fn with_number(mut self) -> Self {
        self.number = true;
        self
    }

    pub const fn with_percent(mut self) -> Self {
        self.percent = true;
        self
    }

    pub const fn with_logic(mut self) -> Self {
        self.logic = true;
        self
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self::NUMBER
    }
}

/// Computes the label text for every overlap region of an ordered group
/// slice.
///
/// Group order is significant: group i owns bit i (most significant first)
/// of every region code, so reordering the input reorders the codes. The
/// result always carries all 2^N - 1 codes, including regions that came
/// out empty.
pub fn compute_labels<T>(groups: &[HashSet<T>], style: LabelStyle) -> Result<Labels, VennError>
where
    T: Eq + Hash,
{
    let regions = partition(groups)?;

    // Regions partition the universe, so their sizes sum to its size.
    let universe_size: usize = regions.values().map(HashSet::len).sum();
    if style.percent && universe_size == 0 {
        return Err(VennError::DivisionByZero(
            "percent labels need a non-empty universe, but every group is empty".to_string(),
        ));
    }

    let mut labels = Labels::new();
    for (code, value) in &regions {
        let mut text = String::new();
        if style.logic {
            text.push_str(&format!("{code}: "));
        }
        if style.number {
            text.push_str(&value.len().to_string());
        }
        if style.percent {
            let share = 100.0 * value.len() as f64 / universe_size as f64;
            text.push_str(&format!("({share:.1}%)"));
        }
        labels.insert(*code, text);
    }
    Ok(labels)
}
