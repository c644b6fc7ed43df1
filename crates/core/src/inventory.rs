//! Inventory threshold rules.

/// Whether a product counts as low stock.
///
/// A reorder point of zero means "no threshold configured" and never
/// triggers, even at zero quantity. At exactly the reorder point the product
/// is already low.
pub fn is_low_stock(quantity: i32, reorder_point: i32) -> bool {
    reorder_point > 0 && quantity <= reorder_point
}
