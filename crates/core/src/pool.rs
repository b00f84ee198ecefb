//! Item pools and their range tables.
//!
//! A pool maps integer intervals inside `[0, 100]` to catalog items. Ranges
//! are kept in insertion order; that order is significant for rolling (see
//! [`crate::roll`]).

use serde::{Deserialize, Serialize};

use crate::error::GachaError;
use crate::types::{DbId, ItemId};

/// Smallest accepted range bound.
pub const MIN_ROLL_VALUE: i32 = 0;

/// Largest accepted range bound.
pub const MAX_ROLL_VALUE: i32 = 100;

/// One weighted slot of a pool.
///
/// Serialized as `{minValue, maxValue, itemId, amount}`; this is also the
/// JSONB shape stored in `item_pools.pool`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub min_value: i32,
    pub max_value: i32,
    pub item_id: ItemId,
    #[serde(default = "default_amount")]
    pub amount: i32,
}

fn default_amount() -> i32 {
    1
}

impl Range {
    pub fn new(min_value: i32, max_value: i32, item_id: impl Into<ItemId>, amount: i32) -> Self {
        Self {
            min_value,
            max_value,
            item_id: item_id.into(),
            amount,
        }
    }

    /// Check the candidate's own fields, in order: ordering, lower bound,
    /// upper bound, granted amount.
    pub fn validate_bounds(&self) -> Result<(), GachaError> {
        if self.max_value < self.min_value {
            return Err(GachaError::InvalidRange("max < min"));
        }
        if self.min_value < MIN_ROLL_VALUE {
            return Err(GachaError::InvalidRange("min < 0"));
        }
        if self.max_value > MAX_ROLL_VALUE {
            return Err(GachaError::InvalidRange("max > 100"));
        }
        if self.amount < 1 {
            return Err(GachaError::InvalidRange("amount < 1"));
        }
        Ok(())
    }

    /// `self` lies inside `other` (inclusive on both ends).
    fn is_within(&self, other: &Range) -> bool {
        self.max_value <= other.max_value && self.min_value >= other.min_value
    }
}

/// A named collection of ranges, identified by its unique `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPool {
    pub id: DbId,
    #[serde(rename = "type")]
    pub pool_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub pool: Vec<Range>,
}

impl ItemPool {
    /// Validate `candidate` against this pool and append it.
    ///
    /// Rejected when an existing range lies within the candidate's bounds, or
    /// the candidate lies within an existing range. Partially overlapping
    /// ranges are accepted.
    pub fn add_range(&mut self, candidate: Range) -> Result<&mut Self, GachaError> {
        candidate.validate_bounds()?;

        if let Some(existing) = self
            .pool
            .iter()
            .find(|existing| existing.is_within(&candidate) || candidate.is_within(existing))
        {
            return Err(GachaError::Overlap {
                min: existing.min_value,
                max: existing.max_value,
            });
        }

        self.pool.push(candidate);
        Ok(self)
    }
}

/// Build a range table from scratch, applying [`ItemPool::add_range`] rules to
/// every entry in order. Used when a whole pool is replaced.
pub fn build_range_table(
    ranges: impl IntoIterator<Item = Range>,
) -> Result<Vec<Range>, GachaError> {
    let mut scratch = ItemPool {
        id: 0,
        pool_type: String::new(),
        title: String::new(),
        description: String::new(),
        image: None,
        pool: Vec::new(),
    };
    for range in ranges {
        scratch.add_range(range)?;
    }
    Ok(scratch.pool)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn pool_with(ranges: Vec<Range>) -> ItemPool {
        ItemPool {
            id: 1,
            pool_type: "standard".into(),
            title: "Standard".into(),
            description: String::new(),
            image: None,
            pool: ranges,
        }
    }

    #[test]
    fn rejects_inverted_bounds_first() {
        // Also below zero, but ordering is checked first.
        let err = Range::new(-1, -5, "0", 1).validate_bounds().unwrap_err();
        assert_matches!(err, GachaError::InvalidRange("max < min"));
    }

    #[test]
    fn rejects_negative_min() {
        let err = Range::new(-1, 10, "0", 1).validate_bounds().unwrap_err();
        assert_matches!(err, GachaError::InvalidRange("min < 0"));
    }

    #[test]
    fn rejects_max_above_hundred() {
        let err = Range::new(50, 101, "0", 1).validate_bounds().unwrap_err();
        assert_matches!(err, GachaError::InvalidRange("max > 100"));
    }

    #[test]
    fn rejects_non_positive_amount() {
        for amount in [0, -1, i32::MIN] {
            let err = Range::new(0, 10, "0", amount).validate_bounds().unwrap_err();
            assert_matches!(err, GachaError::InvalidRange("amount < 1"));
        }
    }

    #[test]
    fn bounds_are_checked_before_amount() {
        let err = Range::new(0, 101, "0", 0).validate_bounds().unwrap_err();
        assert_matches!(err, GachaError::InvalidRange("max > 100"));
    }

    #[test]
    fn build_range_table_rejects_zero_amount() {
        let err = build_range_table(vec![
            Range::new(0, 10, "0", 1),
            Range::new(20, 30, "1", 0),
        ])
        .unwrap_err();
        assert_matches!(err, GachaError::InvalidRange("amount < 1"));
    }

    #[test]
    fn accepts_full_and_single_point_ranges() {
        assert!(Range::new(0, 100, "0", 1).validate_bounds().is_ok());
        assert!(Range::new(0, 0, "0", 1).validate_bounds().is_ok());
        assert!(Range::new(100, 100, "0", 1).validate_bounds().is_ok());
    }

    #[test]
    fn bounds_outside_domain_always_rejected() {
        for min in -3..=103 {
            for max in -3..=103 {
                let valid = (0..=100).contains(&min) && (0..=100).contains(&max) && min <= max;
                assert_eq!(
                    Range::new(min, max, "0", 1).validate_bounds().is_ok(),
                    valid,
                    "min={min} max={max}"
                );
            }
        }
    }

    #[test]
    fn rejects_range_inside_existing() {
        let mut pool = pool_with(vec![Range::new(0, 10, "0", 1)]);
        let err = pool.add_range(Range::new(2, 8, "1", 1)).unwrap_err();
        assert_matches!(err, GachaError::Overlap { min: 0, max: 10 });
        assert_eq!(pool.pool.len(), 1);
    }

    #[test]
    fn rejects_range_containing_existing() {
        let mut pool = pool_with(vec![Range::new(20, 30, "0", 1)]);
        let err = pool.add_range(Range::new(10, 40, "1", 1)).unwrap_err();
        assert_matches!(err, GachaError::Overlap { min: 20, max: 30 });
    }

    #[test]
    fn rejects_identical_range() {
        let mut pool = pool_with(vec![Range::new(5, 5, "0", 1)]);
        assert_matches!(
            pool.add_range(Range::new(5, 5, "1", 1)),
            Err(GachaError::Overlap { .. })
        );
    }

    #[test]
    fn accepts_disjoint_range_and_keeps_order() {
        let mut pool = pool_with(vec![Range::new(0, 10, "0", 1)]);
        pool.add_range(Range::new(20, 30, "1", 2)).unwrap();
        assert_eq!(
            pool.pool,
            vec![Range::new(0, 10, "0", 1), Range::new(20, 30, "1", 2)]
        );
    }

    #[test]
    fn accepts_partial_overlap() {
        let mut pool = pool_with(vec![Range::new(0, 10, "0", 1)]);
        assert!(pool.add_range(Range::new(5, 15, "1", 1)).is_ok());
    }

    #[test]
    fn build_range_table_stops_at_first_conflict() {
        let err = build_range_table(vec![
            Range::new(0, 10, "0", 1),
            Range::new(11, 20, "1", 1),
            Range::new(12, 13, "2", 1),
        ])
        .unwrap_err();
        assert_matches!(err, GachaError::Overlap { min: 11, max: 20 });
    }

    #[test]
    fn range_table_json_shape() {
        let pool = pool_with(vec![Range::new(0, 10, "4", 3)]);
        let json = serde_json::to_value(&pool).unwrap();
        assert_eq!(json["type"], "standard");
        assert_eq!(
            json["pool"],
            serde_json::json!([{ "minValue": 0, "maxValue": 10, "itemId": "4", "amount": 3 }])
        );

        let back: ItemPool = serde_json::from_value(json).unwrap();
        assert_eq!(back, pool);
    }

    #[test]
    fn missing_amount_defaults_to_one() {
        let range: Range =
            serde_json::from_str(r#"{"minValue":1,"maxValue":2,"itemId":"0"}"#).unwrap();
        assert_eq!(range.amount, 1);
    }
}
