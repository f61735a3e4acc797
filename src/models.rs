use serde::{Deserialize, Serialize};

//field names stay camelCase on the wire so existing menu clients keep working

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItem {
    pub id: i32,
    pub name: String, //join key into the ingredient/nutrition tables, exact match
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub is_vegetarian: bool,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NutritionFacts {
    pub calories: u32,
    pub protein: String, //formatted amounts like "39g"
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnrichedMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutritional_info: Option<NutritionFacts>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_item() -> MenuItem {
        MenuItem {
            id: 4,
            name: "Beef Burger".to_string(),
            category: "Main Course".to_string(),
            price: 13.99,
            description: "Juicy beef patty".to_string(),
            image: "/images/beef-burger.jpg".to_string(),
            is_vegetarian: false,
            rating: 4.5,
        }
    }

    #[test]
    fn menu_item_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample_item()).unwrap();
        assert_eq!(value["isVegetarian"], json!(false));
        assert!(value.get("is_vegetarian").is_none());
    }

    #[test]
    fn enriched_item_flattens_catalog_fields() {
        let enriched = EnrichedMenuItem {
            item: sample_item(),
            ingredients: vec!["Beef Patty".to_string(), "Burger Bun".to_string()],
            nutritional_info: Some(NutritionFacts {
                calories: 540,
                protein: "34g".to_string(),
                carbs: "41g".to_string(),
                fat: "25g".to_string(),
            }),
        };
        let value = serde_json::to_value(enriched).unwrap();
        assert_eq!(value["id"], json!(4));
        assert_eq!(value["name"], json!("Beef Burger"));
        assert_eq!(value["ingredients"], json!(["Beef Patty", "Burger Bun"]));
        assert_eq!(value["nutritionalInfo"]["calories"], json!(540));
    }

    #[test]
    fn missing_nutrition_is_omitted_not_null() {
        let enriched = EnrichedMenuItem {
            item: sample_item(),
            ingredients: vec![],
            nutritional_info: None,
        };
        let value = serde_json::to_value(enriched).unwrap();
        assert_eq!(value["ingredients"], json!([]));
        assert!(value.get("nutritionalInfo").is_none());
    }
}
