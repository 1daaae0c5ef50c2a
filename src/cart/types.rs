use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::catalog::{CatalogItem, ItemId};

/// A catalog item in the cart with how many times it was booked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: CatalogItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    pub fn subtotal(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

// Stored lines without a quantity count as one booking, matching how older
// saved carts were displayed.
impl<'de> Deserialize<'de> for CartLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let quantity = match value.get("quantity").or_else(|| value.get("cantidad")) {
            None | Some(serde_json::Value::Null) => 1,
            Some(q) => u32::deserialize(q).map_err(D::Error::custom)?,
        };
        let item = CatalogItem::deserialize(value).map_err(D::Error::custom)?;
        Ok(CartLine { item, quantity })
    }
}

/// Ordered cart lines, at most one per item id, every quantity at least 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored lines, restoring the invariants: zero
    /// quantities are dropped and repeated ids merge into the first line.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.position(line.id()) {
                Some(pos) => {
                    let existing = &mut cart.lines[pos];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Number of bookings across all lines (the header badge).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        total(self)
    }

    /// Add one booking of `item`, appending a new line if needed.
    pub fn add(&mut self, item: &CatalogItem) {
        match self.position(&item.id) {
            Some(pos) => {
                let line = &mut self.lines[pos];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => self.lines.push(CartLine::new(item.clone())),
        }
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id() != id);
        self.lines.len() != before
    }

    /// Set the quantity for `id`; zero removes the line.
    /// Returns whether a line matched.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }
        match self.position(id) {
            Some(pos) => {
                self.lines[pos].quantity = quantity;
                true
            }
            None => false,
        }
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|l| l.id() == id)
    }
}

// A stored line that no longer decodes is dropped on its own; the rest of
// the cart survives.
impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let lines = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match CartLine::deserialize(value) {
                Ok(line) => Some(line),
                Err(e) => {
                    warn!("Skipping unreadable cart line {}: {}", index, e);
                    None
                }
            })
            .collect();
        Ok(Cart::from_lines(lines))
    }
}

/// Sum of price × quantity over every line; 0 for an empty cart.
pub fn total(cart: &Cart) -> f64 {
    cart.lines.iter().map(CartLine::subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u64, price: f64, quantity: u32) -> CartLine {
        CartLine {
            item: CatalogItem {
                id: ItemId::Number(id),
                name: format!("Session {}", id),
                description: String::new(),
                price,
                duration: String::new(),
                instructor: None,
                image: None,
            },
            quantity,
        }
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let cart = Cart::from_lines(vec![line(1, 10.0, 2), line(2, 2.5, 4)]);
        assert_eq!(total(&cart), 30.0);
        assert_eq!(total(&Cart::new()), 0.0);
    }

    #[test]
    fn test_item_count() {
        let cart = Cart::from_lines(vec![line(1, 10.0, 2), line(2, 2.5, 3)]);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_from_lines_restores_invariants() {
        let cart = Cart::from_lines(vec![
            line(1, 10.0, 1),
            line(2, 5.0, 0),
            line(1, 10.0, 2),
            line(3, 1.0, 1),
        ]);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[1].id(), &ItemId::Number(3));
        assert!(cart.line(&ItemId::Number(2)).is_none());
    }

    #[test]
    fn test_add_then_remove_restores_cart() {
        let mut cart = Cart::from_lines(vec![line(1, 10.0, 2)]);
        let before = cart.clone();
        let extra = line(9, 1.0, 1).item;

        cart.add(&extra);
        assert!(cart.remove(&extra.id));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_serialized_line_is_flat() {
        let cart = Cart::from_lines(vec![line(1, 10.0, 2)]);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["name"], "Session 1");
        assert_eq!(json[0]["quantity"], 2);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_bad_line_does_not_empty_cart() {
        let json = r#"[
            {"id": 1, "name": "Yoga", "price": 20, "quantity": 3},
            {"id": 2, "name": "Reiki", "price": 40, "quantity": -1},
            {"name": "No id", "price": 5}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total(), 60.0);

        // Not a list at all is still an error
        assert!(serde_json::from_str::<Cart>(r#"{"id": 1}"#).is_err());
    }
}
