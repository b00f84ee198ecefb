//! Catalog items.
//!
//! Items are static catalog entries referenced by their stable `itemId` from
//! pool ranges and inventory slots. The roll mechanism only reads them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, ItemId};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub item_id: ItemId,
    pub name: String,
    pub rarity: String,
    pub description: String,
    pub details: String,
    pub image: Option<String>,
}

/// Compute the catalog key for a newly created item.
///
/// Keys are sequential decimal strings: the first item gets `"0"`, every
/// following item gets the previous highest key plus one.
pub fn next_item_id(last: Option<&str>) -> Result<ItemId, CoreError> {
    let Some(last) = last else {
        return Ok("0".to_string());
    };
    let last: i64 = last.trim().parse().map_err(|_| {
        CoreError::Internal(format!("Catalog key '{last}' is not a decimal number"))
    })?;
    Ok((last + 1).to_string())
}
