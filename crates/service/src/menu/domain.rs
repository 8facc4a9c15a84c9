use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One requested line: a product and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemInput {
    pub product_id: i64,
    pub quantity: i64,
}

/// Menu create request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuInput {
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub menu_group_id: i64,
    #[serde(default)]
    pub items: Vec<MenuItemInput>,
}

/// Validated menu header, written before its items.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenu {
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
}

/// Item row bound to an already-saved menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
    pub items: Vec<MenuItem>,
}

impl From<models::menu_item::Model> for MenuItem {
    fn from(m: models::menu_item::Model) -> Self {
        Self { seq: m.seq, menu_id: m.menu_id, product_id: m.product_id, quantity: m.quantity }
    }
}

impl From<models::menu::Model> for Menu {
    /// Header only; items are attached by the caller.
    fn from(m: models::menu::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price, menu_group_id: m.menu_group_id, items: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_price_as_number_or_string() {
        let from_number: CreateMenuInput = serde_json::from_str(
            r#"{"name":"m","price":17000,"menu_group_id":1,"items":[{"product_id":1,"quantity":2}]}"#,
        )
        .unwrap();
        let from_string: CreateMenuInput =
            serde_json::from_str(r#"{"name":"m","price":"17000.00","menu_group_id":1,"items":[]}"#).unwrap();
        assert_eq!(from_number.price, Some(Decimal::from(17000)));
        assert_eq!(from_string.price, from_number.price);
        assert_eq!(from_number.items[0].quantity, 2);
    }

    #[test]
    fn request_without_price_or_items_decodes() {
        let input: CreateMenuInput = serde_json::from_str(r#"{"name":"m","menu_group_id":1}"#).unwrap();
        assert!(input.price.is_none());
        assert!(input.items.is_empty());
    }
}
