use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{MenuItem, NutritionFacts};

//the catalog ships inside the binary; there is no database behind this service
const MENU_JSON: &str = include_str!("data/menu.json");

#[derive(Deserialize)]
struct MenuFile {
    menu: Vec<MenuItem>,
}

pub(crate) fn load_menu() -> Result<Vec<MenuItem>, serde_json::Error> {
    let file: MenuFile = serde_json::from_str(MENU_JSON)?;
    Ok(file.menu)
}

/// Ingredient lists keyed by item name. Keys must match catalog names exactly.
pub(crate) fn ingredient_table() -> HashMap<String, Vec<String>> {
    let entries: [(&str, &[&str]); 12] = [
        (
            "Grilled Salmon",
            &["Atlantic Salmon", "Lemon", "Butter", "Herbs", "Olive Oil"],
        ),
        (
            "Margherita Pizza",
            &["Pizza Dough", "Tomato Sauce", "Mozzarella", "Fresh Basil", "Olive Oil"],
        ),
        (
            "Caesar Salad",
            &["Romaine Lettuce", "Parmesan Cheese", "Croutons", "Caesar Dressing", "Black Pepper"],
        ),
        (
            "Beef Burger",
            &["Beef Patty", "Lettuce", "Tomato", "Cheese", "Special Sauce", "Burger Bun"],
        ),
        (
            "Chicken Tikka Masala",
            &["Chicken Breast", "Tomato Sauce", "Cream", "Spices", "Onions", "Garlic"],
        ),
        (
            "Vegetable Pasta",
            &["Pasta", "Bell Peppers", "Zucchini", "Tomatoes", "Garlic", "Olive Oil"],
        ),
        (
            "Chocolate Lava Cake",
            &["Dark Chocolate", "Butter", "Eggs", "Sugar", "Flour", "Vanilla Ice Cream"],
        ),
        (
            "Shrimp Tacos",
            &["Shrimp", "Tortillas", "Avocado", "Salsa", "Lime", "Cilantro"],
        ),
        (
            "Greek Salad",
            &["Tomatoes", "Cucumber", "Feta Cheese", "Olives", "Red Onion", "Olive Oil"],
        ),
        (
            "BBQ Ribs",
            &["Pork Ribs", "BBQ Sauce", "Coleslaw", "Spices", "Brown Sugar"],
        ),
        (
            "Sushi Platter",
            &["Sushi Rice", "Nori", "Fresh Fish", "Avocado", "Cucumber", "Wasabi", "Ginger"],
        ),
        (
            "Tiramisu",
            &["Ladyfingers", "Mascarpone", "Coffee", "Cocoa Powder", "Eggs", "Sugar"],
        ),
    ];

    entries
        .iter()
        .map(|(name, list)| {
            (
                name.to_string(),
                list.iter().map(|item| item.to_string()).collect(),
            )
        })
        .collect()
}

/// Nutrition facts keyed by item name.
pub(crate) fn nutrition_table() -> HashMap<String, NutritionFacts> {
    let entries = [
        ("Grilled Salmon", facts(367, "39g", "0g", "22g")),
        ("Margherita Pizza", facts(250, "11g", "33g", "8g")),
        ("Caesar Salad", facts(184, "7g", "12g", "13g")),
        ("Beef Burger", facts(540, "34g", "41g", "25g")),
        ("Chicken Tikka Masala", facts(435, "32g", "18g", "26g")),
        ("Vegetable Pasta", facts(310, "11g", "52g", "7g")),
        ("Chocolate Lava Cake", facts(450, "6g", "58g", "23g")),
        ("Shrimp Tacos", facts(320, "25g", "35g", "10g")),
        ("Greek Salad", facts(215, "8g", "11g", "16g")),
        ("BBQ Ribs", facts(610, "42g", "24g", "38g")),
        ("Sushi Platter", facts(380, "18g", "58g", "8g")),
        ("Tiramisu", facts(400, "8g", "42g", "21g")),
    ];

    entries
        .into_iter()
        .map(|(name, facts)| (name.to_string(), facts))
        .collect()
}

fn facts(calories: u32, protein: &str, carbs: &str, fat: &str) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein: protein.to_string(),
        carbs: carbs.to_string(),
        fat: fat.to_string(),
    }
}
