//! Batch validation for create/update payloads.
//!
//! All field rules are checked in a single pass and every violation is
//! reported together, so a payload breaking N rules yields exactly N
//! messages. On success the loosely-typed payload is converted into a
//! strongly-typed [`MenuItemDraft`] for the store.

use serde_json::Value;

use bistro_core::{Category, MenuItemDraft};

use crate::schema::menu::MenuItemUpsert;

pub const NAME_MESSAGE: &str = "Name must be a string at least 3 characters long";
pub const DESCRIPTION_MESSAGE: &str = "Description must be a string at least 10 characters long";
pub const PRICE_MESSAGE: &str = "Price must be greater than zero";
pub const CATEGORY_MESSAGE: &str =
    "Category must be one of: appetizer, entree, dessert, beverage";
pub const INGREDIENTS_MESSAGE: &str =
    "Ingredients must be an array with at least one ingredient";
pub const AVAILABLE_MESSAGE: &str = "Available must be true or false";

/// Validates a create/update payload against all field rules.
///
/// Returns the materialized draft, or every violated-rule message.
pub fn validate(body: &MenuItemUpsert) -> Result<MenuItemDraft, Vec<String>> {
    let mut messages = Vec::new();

    let name = match &body.name {
        Some(Value::String(s)) if s.chars().count() >= 3 => Some(s.clone()),
        _ => {
            messages.push(NAME_MESSAGE.to_string());
            None
        }
    };

    let description = match &body.description {
        Some(Value::String(s)) if s.chars().count() >= 10 => Some(s.clone()),
        _ => {
            messages.push(DESCRIPTION_MESSAGE.to_string());
            None
        }
    };

    let price = match body.price.as_ref().and_then(Value::as_f64) {
        Some(p) if p > 0.0 => Some(p),
        _ => {
            messages.push(PRICE_MESSAGE.to_string());
            None
        }
    };

    let category = match &body.category {
        Some(Value::String(s)) => s.parse::<Category>().ok(),
        _ => None,
    };
    if category.is_none() {
        messages.push(CATEGORY_MESSAGE.to_string());
    }

    let ingredients = match &body.ingredients {
        Some(Value::Array(values)) if !values.is_empty() => values
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect::<Option<Vec<String>>>(),
        _ => None,
    };
    if ingredients.is_none() {
        messages.push(INGREDIENTS_MESSAGE.to_string());
    }

    // Optional: absent is fine and stays absent, but a present non-boolean
    // is a rule violation.
    let available = match &body.available {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            messages.push(AVAILABLE_MESSAGE.to_string());
            None
        }
    };

    match (name, description, price, category, ingredients) {
        (Some(name), Some(description), Some(price), Some(category), Some(ingredients))
            if messages.is_empty() =>
        {
            Ok(MenuItemDraft {
                name,
                description,
                price,
                category,
                ingredients,
                available,
            })
        }
        _ => Err(messages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> MenuItemUpsert {
        serde_json::from_value(json!({
            "name": "Taco",
            "description": "Crispy corn taco with beef",
            "price": 4.5,
            "category": "entree",
            "ingredients": ["beef", "corn tortilla"],
        }))
        .unwrap()
    }

    #[test]
    fn valid_payload_produces_a_draft() {
        let draft = validate(&valid_body()).unwrap();
        assert_eq!(draft.name, "Taco");
        assert_eq!(draft.category, Category::Entree);
        assert_eq!(draft.ingredients.len(), 2);
        assert_eq!(draft.available, None);
    }

    #[test]
    fn short_name_is_rejected() {
        let mut body = valid_body();
        body.name = Some(json!("ab"));
        assert_eq!(validate(&body).unwrap_err(), vec![NAME_MESSAGE.to_string()]);
    }

    #[test]
    fn missing_name_is_rejected_with_the_same_message() {
        let mut body = valid_body();
        body.name = None;
        assert_eq!(validate(&body).unwrap_err(), vec![NAME_MESSAGE.to_string()]);
    }

    #[test]
    fn short_description_is_rejected() {
        let mut body = valid_body();
        body.description = Some(json!("too short"));
        assert_eq!(
            validate(&body).unwrap_err(),
            vec![DESCRIPTION_MESSAGE.to_string()]
        );
    }

    #[test]
    fn zero_and_negative_prices_are_rejected() {
        for price in [json!(0), json!(-3.5), json!("4.5")] {
            let mut body = valid_body();
            body.price = Some(price);
            assert_eq!(
                validate(&body).unwrap_err(),
                vec![PRICE_MESSAGE.to_string()]
            );
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut body = valid_body();
        body.category = Some(json!("brunch"));
        assert_eq!(
            validate(&body).unwrap_err(),
            vec![CATEGORY_MESSAGE.to_string()]
        );
    }

    #[test]
    fn empty_ingredients_are_rejected() {
        let mut body = valid_body();
        body.ingredients = Some(json!([]));
        assert_eq!(
            validate(&body).unwrap_err(),
            vec![INGREDIENTS_MESSAGE.to_string()]
        );
    }

    #[test]
    fn non_string_ingredient_is_rejected() {
        let mut body = valid_body();
        body.ingredients = Some(json!(["beef", 42]));
        assert_eq!(
            validate(&body).unwrap_err(),
            vec![INGREDIENTS_MESSAGE.to_string()]
        );
    }

    #[test]
    fn non_boolean_available_is_rejected() {
        let mut body = valid_body();
        body.available = Some(json!("yes"));
        assert_eq!(
            validate(&body).unwrap_err(),
            vec![AVAILABLE_MESSAGE.to_string()]
        );
    }

    #[test]
    fn explicit_available_is_carried_through() {
        let mut body = valid_body();
        body.available = Some(json!(false));
        assert_eq!(validate(&body).unwrap().available, Some(false));
    }

    #[test]
    fn every_violated_rule_is_reported_in_one_batch() {
        let body: MenuItemUpsert = serde_json::from_value(json!({
            "name": "ab",
            "description": "short",
            "price": 0,
            "category": "brunch",
            "ingredients": [],
            "available": "maybe",
        }))
        .unwrap();
        let messages = validate(&body).unwrap_err();
        assert_eq!(messages.len(), 6);
        assert_eq!(
            messages,
            vec![
                NAME_MESSAGE.to_string(),
                DESCRIPTION_MESSAGE.to_string(),
                PRICE_MESSAGE.to_string(),
                CATEGORY_MESSAGE.to_string(),
                INGREDIENTS_MESSAGE.to_string(),
                AVAILABLE_MESSAGE.to_string(),
            ]
        );
    }

    #[test]
    fn empty_payload_reports_all_required_rules() {
        let messages = validate(&MenuItemUpsert::default()).unwrap_err();
        // available is optional, so only the five required rules fire.
        assert_eq!(messages.len(), 5);
    }
}
