use std::collections::HashMap;

use thiserror::Error;

use crate::models::{EnrichedMenuItem, MenuItem, NutritionFacts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum LookupError {
    #[error("Invalid menu item id")]
    InvalidId,
    #[error("Menu item not found")]
    NotFound,
}

/// Read-only menu catalog plus the name-keyed reference tables.
/// Everything is handed over at construction and never mutated afterwards,
/// so lookups are safe to run from any number of workers without locking.
pub(crate) struct CatalogService {
    items: Vec<MenuItem>,
    ingredients: HashMap<String, Vec<String>>,
    nutrition: HashMap<String, NutritionFacts>,
}

impl CatalogService {
    pub(crate) fn new(
        items: Vec<MenuItem>,
        ingredients: HashMap<String, Vec<String>>,
        nutrition: HashMap<String, NutritionFacts>,
    ) -> Self {
        Self {
            items,
            ingredients,
            nutrition,
        }
    }

    pub(crate) fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Resolve a raw id string to the matching catalog record with its
    /// ingredient list and nutrition facts attached.
    ///
    /// The table joins are exact-name matches on purpose: an item whose name
    /// has no table entry gets an empty ingredient list and no nutrition
    /// field, which is the normal outcome for uncatalogued dishes.
    pub(crate) fn find_enriched_item(
        &self,
        raw_id: &str,
    ) -> Result<EnrichedMenuItem, LookupError> {
        let id = parse_item_id(raw_id).ok_or(LookupError::InvalidId)?;

        //linear scan; the catalog is a dozen records, first match wins
        let item = self
            .items
            .iter()
            .find(|item| i64::from(item.id) == id)
            .ok_or(LookupError::NotFound)?;

        let ingredients = self
            .ingredients
            .get(&item.name)
            .cloned()
            .unwrap_or_default();
        let nutritional_info = self.nutrition.get(&item.name).cloned();

        Ok(EnrichedMenuItem {
            item: item.clone(),
            ingredients,
            nutritional_info,
        })
    }
}

//parseInt-style leniency: skip leading whitespace, take an optional sign and
//the leading digit run, ignore whatever trails it. No digits means no id.
fn parse_item_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen = 0usize;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        //absurdly long digit runs saturate, which still matches no catalog id
        value = value.saturating_mul(10).saturating_add(i64::from(byte - b'0'));
        seen += 1;
    }

    if seen == 0 {
        return None;
    }
    Some(if negative { -value } else { value })
}
