//! Line-item editing for a document being drafted or edited.
//!
//! The form layer keeps a working `Vec<LineItem>` while the user fills a
//! document in; these helpers mutate that working list and keep each row's
//! derived total correct. The list only enters the aggregate through
//! [`crate::commands::documents`], which recomputes everything once more.

use crate::model::LineItem;
use uuid::Uuid;

/// One editable field of a line item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
}

/// Append a fresh empty row and return its id.
pub fn add_item(items: &mut Vec<LineItem>) -> Uuid {
    let item = LineItem::new();
    let id = item.id;
    items.push(item);
    id
}

/// Remove the row with `id`. Removing an unknown id is a no-op.
pub fn remove_item(items: &mut Vec<LineItem>, id: Uuid) {
    items.retain(|i| i.id != id);
}

/// Set one field of the row with `id`, recomputing the row total when the
/// quantity or unit price changed. Returns `false` when no row carries `id`.
pub fn update_item(items: &mut [LineItem], id: Uuid, field: ItemField) -> bool {
    let Some(item) = items.iter_mut().find(|i| i.id == id) else {
        return false;
    };
    match field {
        ItemField::Description(description) => item.description = description,
        ItemField::Quantity(quantity) => {
            item.quantity = quantity;
            item.recompute_total();
        }
        ItemField::UnitPrice(unit_price) => {
            item.unit_price = unit_price;
            item.recompute_total();
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_appends_an_empty_row() {
        let mut items = Vec::new();
        let id = add_item(&mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].quantity, 1.0);
        assert_eq!(items[0].unit_price, 0.0);
        assert_eq!(items[0].total, 0.0);
        assert!(items[0].description.is_empty());
    }

    #[test]
    fn update_keeps_total_in_step() {
        let mut items = Vec::new();
        let id = add_item(&mut items);

        assert!(update_item(&mut items, id, ItemField::Quantity(3.0)));
        assert!(update_item(&mut items, id, ItemField::UnitPrice(120.0)));
        assert_eq!(items[0].total, 360.0);

        assert!(update_item(&mut items, id, ItemField::Quantity(2.0)));
        assert_eq!(items[0].total, 240.0);
    }

    #[test]
    fn description_update_leaves_total_alone() {
        let mut items = vec![LineItem::with_values("x", 2.0, 50.0)];
        let id = items[0].id;
        update_item(&mut items, id, ItemField::Description("Main d'œuvre".into()));
        assert_eq!(items[0].description, "Main d'œuvre");
        assert_eq!(items[0].total, 100.0);
    }

    #[test]
    fn non_numeric_input_is_stored_as_zero() {
        let mut items = Vec::new();
        let id = add_item(&mut items);
        update_item(&mut items, id, ItemField::UnitPrice(250.0));
        update_item(&mut items, id, ItemField::Quantity(f64::NAN));
        assert_eq!(items[0].quantity, 0.0);
        assert_eq!(items[0].unit_price, 250.0);
        assert_eq!(items[0].total, 0.0);
    }

    #[test]
    fn remove_targets_only_the_given_row() {
        let mut items = Vec::new();
        let first = add_item(&mut items);
        let second = add_item(&mut items);

        remove_item(&mut items, first);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second);

        // Unknown id: nothing happens.
        remove_item(&mut items, first);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn update_unknown_row_reports_false() {
        let mut items = vec![LineItem::new()];
        assert!(!update_item(
            &mut items,
            Uuid::new_v4(),
            ItemField::Quantity(5.0)
        ));
        assert_eq!(items[0].quantity, 1.0);
    }
}
