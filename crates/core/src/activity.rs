//! Activity log classification and description rendering.
//!
//! Every feature that mutates shop data appends a row to the activity event
//! store. This module is the read-side counterpart: it maps the stored
//! `action` tag to a category for filtering and to a human-readable sentence
//! for the feed and the dashboard notification widget.
//!
//! It lives in `core` (zero internal deps) so the repository layer, the API,
//! and tests can all classify events without a running database.

use serde::Serialize;

use crate::types::{Cents, DbId};

// ---------------------------------------------------------------------------
// Action tag constants
// ---------------------------------------------------------------------------

/// Canonical action tags emitted by the activity logger call sites.
///
/// The store keeps the tag as free-form TEXT, so older or external writers
/// may use variant spellings; [`ActionKind::parse`] accepts those too.
pub mod action_types {
    pub const USER_LOGIN: &str = "user_login";
    pub const USER_LOGOUT: &str = "user_logout";

    pub const PRODUCT_CREATED: &str = "product_created";
    pub const PRODUCT_UPDATED: &str = "product_updated";
    pub const PRODUCT_DELETED: &str = "product_deleted";

    pub const CREATE_CATEGORY: &str = "create_category";
    pub const UPDATE_CATEGORY: &str = "update_category";
    pub const DELETE_CATEGORY: &str = "delete_category";

    pub const CREATE_SUPPLIER: &str = "create_supplier";
    pub const UPDATE_SUPPLIER: &str = "update_supplier";
    pub const DELETE_SUPPLIER: &str = "delete_supplier";

    pub const CREATE_CUSTOMER: &str = "create_customer";
    pub const UPDATE_CUSTOMER: &str = "update_customer";
    pub const DELETE_CUSTOMER: &str = "delete_customer";

    pub const CREATE_ORDER: &str = "create_order";
    pub const UPDATE_ORDER: &str = "update_order";
    pub const DELETE_ORDER: &str = "delete_order";
    pub const FULFILL_ORDER: &str = "fulfill_order";

    pub const CREATE_SALE: &str = "create_sale";
    pub const PROCESS_PAYMENT: &str = "process_payment";

    pub const STOCK_ADJUSTED: &str = "stock_adjusted";
    pub const LOW_STOCK_ALERT: &str = "low_stock_alert";
}

// ---------------------------------------------------------------------------
// Classification types
// ---------------------------------------------------------------------------

/// The record types that CRUD-style actions operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Category,
    Supplier,
    Customer,
    Order,
}

impl EntityKind {
    /// Lowercase singular label used in rendered descriptions.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Category => "category",
            EntityKind::Supplier => "supplier",
            EntityKind::Customer => "customer",
            EntityKind::Order => "order",
        }
    }
}

/// A stored `action` tag decoded into a closed set of known kinds.
///
/// The store accepts arbitrary tags, so decoding is total: anything the
/// parser does not recognize becomes [`ActionKind::Unrecognized`] and is
/// still rendered via the generic fallback in [`describe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Created(EntityKind),
    Updated(EntityKind),
    Deleted(EntityKind),
    SaleCompleted,
    PaymentProcessed,
    OrderFulfilled,
    StockAdjusted,
    LowStockAlert,
    UserLogin,
    UserLogout,
    Unrecognized,
}

/// Feed filter categories. One category groups several action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Auth,
    Products,
    Categories,
    Suppliers,
    Pos,
    Orders,
    Customers,
    Inventory,
    Other,
}

impl ActionKind {
    /// Decode an action tag. Never fails; unknown tags map to `Unrecognized`.
    ///
    /// Both verb-first (`create_product`) and entity-first (`product_created`)
    /// spellings are accepted since historical writers were inconsistent.
    pub fn parse(tag: &str) -> Self {
        use action_types as a;
        use ActionKind::*;
        use EntityKind::*;

        match tag {
            a::USER_LOGIN | "login" => UserLogin,
            a::USER_LOGOUT | "logout" => UserLogout,

            a::PRODUCT_CREATED | "create_product" => Created(Product),
            a::PRODUCT_UPDATED | "update_product" => Updated(Product),
            a::PRODUCT_DELETED | "delete_product" => Deleted(Product),

            a::CREATE_CATEGORY | "category_created" => Created(Category),
            a::UPDATE_CATEGORY | "category_updated" => Updated(Category),
            a::DELETE_CATEGORY | "category_deleted" => Deleted(Category),

            a::CREATE_SUPPLIER | "supplier_created" => Created(Supplier),
            a::UPDATE_SUPPLIER | "supplier_updated" => Updated(Supplier),
            a::DELETE_SUPPLIER | "supplier_deleted" => Deleted(Supplier),

            a::CREATE_CUSTOMER | "customer_created" => Created(Customer),
            a::UPDATE_CUSTOMER | "customer_updated" => Updated(Customer),
            a::DELETE_CUSTOMER | "customer_deleted" => Deleted(Customer),

            a::CREATE_ORDER | "order_created" => Created(Order),
            a::UPDATE_ORDER | "order_updated" => Updated(Order),
            a::DELETE_ORDER | "order_deleted" => Deleted(Order),
            a::FULFILL_ORDER | "order_fulfilled" => OrderFulfilled,

            a::CREATE_SALE | "sale_created" => SaleCompleted,
            a::PROCESS_PAYMENT | "payment_processed" => PaymentProcessed,

            a::STOCK_ADJUSTED | "adjust_stock" | "update_inventory" => StockAdjusted,
            a::LOW_STOCK_ALERT => LowStockAlert,

            _ => Unrecognized,
        }
    }

    /// Map a kind to its feed filter category.
    pub fn category(self) -> ActionCategory {
        use ActionKind::*;

        match self {
            UserLogin | UserLogout => ActionCategory::Auth,
            Created(e) | Updated(e) | Deleted(e) => match e {
                EntityKind::Product => ActionCategory::Products,
                EntityKind::Category => ActionCategory::Categories,
                EntityKind::Supplier => ActionCategory::Suppliers,
                EntityKind::Customer => ActionCategory::Customers,
                EntityKind::Order => ActionCategory::Orders,
            },
            SaleCompleted | PaymentProcessed => ActionCategory::Pos,
            OrderFulfilled => ActionCategory::Orders,
            StockAdjusted | LowStockAlert => ActionCategory::Inventory,
            Unrecognized => ActionCategory::Other,
        }
    }
}

impl ActionCategory {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionCategory::Auth => "auth",
            ActionCategory::Products => "products",
            ActionCategory::Categories => "categories",
            ActionCategory::Suppliers => "suppliers",
            ActionCategory::Pos => "pos",
            ActionCategory::Orders => "orders",
            ActionCategory::Customers => "customers",
            ActionCategory::Inventory => "inventory",
            ActionCategory::Other => "other",
        }
    }

    /// Parse a feed filter parameter. `Other` is not a valid filter (it is
    /// the open-ended complement of the named categories), so it is not
    /// accepted here.
    pub fn parse_filter(s: &str) -> Option<Self> {
        match s {
            "auth" => Some(ActionCategory::Auth),
            "products" => Some(ActionCategory::Products),
            "categories" => Some(ActionCategory::Categories),
            "suppliers" => Some(ActionCategory::Suppliers),
            "pos" => Some(ActionCategory::Pos),
            "orders" => Some(ActionCategory::Orders),
            "customers" => Some(ActionCategory::Customers),
            "inventory" => Some(ActionCategory::Inventory),
            _ => None,
        }
    }

    /// Every action tag (canonical and variant spelling) belonging to this
    /// category. Used to build `action = ANY(..)` predicates when the feed is
    /// filtered by category.
    pub fn action_tags(self) -> &'static [&'static str] {
        match self {
            ActionCategory::Auth => &["user_login", "login", "user_logout", "logout"],
            ActionCategory::Products => &[
                "product_created",
                "create_product",
                "product_updated",
                "update_product",
                "product_deleted",
                "delete_product",
            ],
            ActionCategory::Categories => &[
                "create_category",
                "category_created",
                "update_category",
                "category_updated",
                "delete_category",
                "category_deleted",
            ],
            ActionCategory::Suppliers => &[
                "create_supplier",
                "supplier_created",
                "update_supplier",
                "supplier_updated",
                "delete_supplier",
                "supplier_deleted",
            ],
            ActionCategory::Pos => &[
                "create_sale",
                "sale_created",
                "process_payment",
                "payment_processed",
            ],
            ActionCategory::Orders => &[
                "create_order",
                "order_created",
                "update_order",
                "order_updated",
                "delete_order",
                "order_deleted",
                "fulfill_order",
                "order_fulfilled",
            ],
            ActionCategory::Customers => &[
                "create_customer",
                "customer_created",
                "update_customer",
                "customer_updated",
                "delete_customer",
                "customer_deleted",
            ],
            ActionCategory::Inventory => &[
                "stock_adjusted",
                "adjust_stock",
                "update_inventory",
                "low_stock_alert",
            ],
            ActionCategory::Other => &[],
        }
    }
}

/// Relative time window for feed filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    Week,
    Month,
}

impl TimeWindow {
    /// Decode a query-string value. Unknown values are rejected.
    pub fn parse_filter(s: &str) -> Option<Self> {
        match s {
            "day" => Some(TimeWindow::Day),
            "week" => Some(TimeWindow::Week),
            "month" => Some(TimeWindow::Month),
            _ => None,
        }
    }

    /// Window length in days.
    pub fn days(self) -> i64 {
        match self {
            TimeWindow::Day => 1,
            TimeWindow::Week => 7,
            TimeWindow::Month => 30,
        }
    }
}

// ---------------------------------------------------------------------------
// Metadata access helpers
// ---------------------------------------------------------------------------

/// Read a string value from event metadata, skipping empty strings.
fn meta_str<'a>(metadata: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    metadata.get(key).and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}

/// Read an integer value from event metadata. Accepts JSON numbers and
/// numeric strings (some writers stringify their payloads).
fn meta_i64(metadata: &serde_json::Value, key: &str) -> Option<i64> {
    match metadata.get(key)? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Render integer cents as a dollar amount, e.g. `1250` -> `$12.50`.
fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

// ---------------------------------------------------------------------------
// Description rendering
// ---------------------------------------------------------------------------

/// Render a human-readable description for a stored event.
///
/// Total over all inputs: unknown actions and missing metadata degrade to a
/// generic sentence rather than an error. The feed, the notification widget,
/// and the CSV export all display this string.
pub fn describe(
    action: &str,
    entity_table: Option<&str>,
    entity_id: Option<DbId>,
    metadata: &serde_json::Value,
) -> String {
    use ActionKind::*;

    match ActionKind::parse(action) {
        Created(e) => crud_sentence(created_verb(e), e, entity_id, metadata),
        Updated(e) => crud_sentence("Updated", e, entity_id, metadata),
        Deleted(e) => crud_sentence("Deleted", e, entity_id, metadata),

        SaleCompleted => match (sale_reference(metadata), meta_i64(metadata, "total_cents")) {
            (Some(r), Some(total)) => format!("Completed sale {r} for {}", format_cents(total)),
            (Some(r), None) => format!("Completed sale {r}"),
            (None, _) => "Completed a sale".to_string(),
        },
        PaymentProcessed => match sale_reference(metadata) {
            Some(r) => format!("Processed payment for sale {r}"),
            None => "Processed a payment".to_string(),
        },
        OrderFulfilled => match sale_reference(metadata) {
            Some(r) => format!("Fulfilled order {r}"),
            None => "Fulfilled an order".to_string(),
        },

        StockAdjusted => {
            let subject = meta_str(metadata, "product_name")
                .map(|n| format!("\"{n}\""))
                .or_else(|| meta_i64(metadata, "product_id").map(|id| format!("product #{id}")));
            match (subject, meta_i64(metadata, "new_stock")) {
                (Some(s), Some(n)) => format!("Set stock for {s} to {n}"),
                (Some(s), None) => format!("Adjusted stock for {s}"),
                (None, Some(n)) => format!("Adjusted stock to {n}"),
                (None, None) => "Adjusted stock".to_string(),
            }
        }
        LowStockAlert => {
            let name = meta_str(metadata, "product_name").unwrap_or("a product");
            match (meta_i64(metadata, "current_stock"), meta_i64(metadata, "reorder_point")) {
                (Some(stock), Some(point)) => {
                    format!("Low stock: \"{name}\" has {stock} left (reorder at {point})")
                }
                (Some(stock), None) => format!("Low stock: \"{name}\" has {stock} left"),
                _ => format!("Low stock: \"{name}\""),
            }
        }

        UserLogin => "Signed in".to_string(),
        UserLogout => match meta_i64(metadata, "duration_minutes") {
            Some(mins) => format!("Signed out after {mins} min"),
            None => "Signed out".to_string(),
        },

        Unrecognized => fallback_sentence(action, entity_table, entity_id),
    }
}

fn created_verb(e: EntityKind) -> &'static str {
    match e {
        // "Created order" reads better than "Added order" for POS records.
        EntityKind::Order => "Created",
        _ => "Added",
    }
}

/// Pick the display reference for a CRUD subject from metadata, falling back
/// to the affected record id.
fn crud_sentence(
    verb: &str,
    entity: EntityKind,
    entity_id: Option<DbId>,
    metadata: &serde_json::Value,
) -> String {
    let label = entity.label();

    let name = match entity {
        EntityKind::Product => meta_str(metadata, "product_name").or_else(|| meta_str(metadata, "name")),
        EntityKind::Category => meta_str(metadata, "name"),
        EntityKind::Supplier => {
            meta_str(metadata, "name").or_else(|| meta_str(metadata, "company_name"))
        }
        EntityKind::Customer => meta_str(metadata, "name").or_else(|| meta_str(metadata, "email")),
        EntityKind::Order => {
            meta_str(metadata, "order_number").or_else(|| meta_str(metadata, "transaction_id"))
        }
    };

    if let Some(name) = name {
        let mut sentence = match entity {
            // Order references are codes, not names; skip the quotes.
            EntityKind::Order => format!("{verb} {label} {name}"),
            _ => format!("{verb} {label} \"{name}\""),
        };
        if entity == EntityKind::Product {
            if let Some(sku) = meta_str(metadata, "sku") {
                sentence.push_str(&format!(" (SKU {sku})"));
            }
        }
        return sentence;
    }

    let id = entity_id.or_else(|| meta_i64(metadata, id_key(entity)));
    match id {
        Some(id) => format!("{verb} {label} #{id}"),
        None => format!("{verb} a {label}"),
    }
}

fn id_key(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Product => "product_id",
        EntityKind::Category => "category_id",
        EntityKind::Supplier => "supplier_id",
        EntityKind::Customer => "customer_id",
        EntityKind::Order => "order_id",
    }
}

/// Sale and order events may carry either an order number or a transaction id.
fn sale_reference(metadata: &serde_json::Value) -> Option<String> {
    meta_str(metadata, "order_number")
        .or_else(|| meta_str(metadata, "transaction_id"))
        .map(str::to_string)
}

/// Generic rendering for tags the classifier does not recognize.
fn fallback_sentence(action: &str, entity_table: Option<&str>, entity_id: Option<DbId>) -> String {
    if action.is_empty() {
        return "Unknown activity".to_string();
    }
    match (entity_table, entity_id) {
        (Some(table), Some(id)) => format!("{action} on {table} #{id}"),
        (Some(table), None) => format!("{action} on {table}"),
        (None, Some(id)) => format!("{action} on record #{id}"),
        (None, None) => action.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Tag parsing
    // -----------------------------------------------------------------------

    #[test]
    fn canonical_tags_parse_to_known_kinds() {
        assert_eq!(
            ActionKind::parse(action_types::PRODUCT_CREATED),
            ActionKind::Created(EntityKind::Product),
        );
        assert_eq!(
            ActionKind::parse(action_types::DELETE_SUPPLIER),
            ActionKind::Deleted(EntityKind::Supplier),
        );
        assert_eq!(ActionKind::parse(action_types::CREATE_SALE), ActionKind::SaleCompleted);
        assert_eq!(ActionKind::parse(action_types::USER_LOGIN), ActionKind::UserLogin);
        assert_eq!(ActionKind::parse(action_types::LOW_STOCK_ALERT), ActionKind::LowStockAlert);
    }

    #[test]
    fn variant_spellings_parse_to_same_kind() {
        assert_eq!(ActionKind::parse("create_product"), ActionKind::parse("product_created"));
        assert_eq!(ActionKind::parse("category_updated"), ActionKind::parse("update_category"));
        assert_eq!(ActionKind::parse("adjust_stock"), ActionKind::StockAdjusted);
        assert_eq!(ActionKind::parse("update_inventory"), ActionKind::StockAdjusted);
        assert_eq!(ActionKind::parse("login"), ActionKind::UserLogin);
    }

    #[test]
    fn unknown_tag_parses_to_unrecognized() {
        assert_eq!(ActionKind::parse("made_coffee"), ActionKind::Unrecognized);
        assert_eq!(ActionKind::parse(""), ActionKind::Unrecognized);
    }

    // -----------------------------------------------------------------------
    // Category mapping
    // -----------------------------------------------------------------------

    #[test]
    fn login_and_logout_map_to_auth() {
        assert_eq!(ActionKind::UserLogin.category(), ActionCategory::Auth);
        assert_eq!(ActionKind::UserLogout.category(), ActionCategory::Auth);
    }

    #[test]
    fn product_crud_maps_to_products() {
        for tag in ["product_created", "product_updated", "product_deleted"] {
            assert_eq!(ActionKind::parse(tag).category(), ActionCategory::Products);
        }
    }

    #[test]
    fn sale_and_payment_map_to_pos() {
        assert_eq!(ActionKind::SaleCompleted.category(), ActionCategory::Pos);
        assert_eq!(ActionKind::PaymentProcessed.category(), ActionCategory::Pos);
    }

    #[test]
    fn stock_and_low_stock_map_to_inventory() {
        assert_eq!(ActionKind::StockAdjusted.category(), ActionCategory::Inventory);
        assert_eq!(ActionKind::LowStockAlert.category(), ActionCategory::Inventory);
    }

    #[test]
    fn unknown_maps_to_other() {
        assert_eq!(ActionKind::Unrecognized.category(), ActionCategory::Other);
    }

    #[test]
    fn category_tags_round_trip_through_parse() {
        for category in [
            ActionCategory::Auth,
            ActionCategory::Products,
            ActionCategory::Categories,
            ActionCategory::Suppliers,
            ActionCategory::Pos,
            ActionCategory::Orders,
            ActionCategory::Customers,
            ActionCategory::Inventory,
        ] {
            for tag in category.action_tags() {
                assert_eq!(
                    ActionKind::parse(tag).category(),
                    category,
                    "tag {tag} classified outside its own category",
                );
            }
        }
    }

    #[test]
    fn filter_parsing_accepts_named_categories_only() {
        assert_eq!(ActionCategory::parse_filter("products"), Some(ActionCategory::Products));
        assert_eq!(ActionCategory::parse_filter("inventory"), Some(ActionCategory::Inventory));
        assert_eq!(ActionCategory::parse_filter("other"), None);
        assert_eq!(ActionCategory::parse_filter("Products"), None);
        assert_eq!(ActionCategory::parse_filter(""), None);
    }

    #[test]
    fn time_windows_parse_and_span_the_right_days() {
        assert_eq!(TimeWindow::parse_filter("day"), Some(TimeWindow::Day));
        assert_eq!(TimeWindow::parse_filter("week"), Some(TimeWindow::Week));
        assert_eq!(TimeWindow::parse_filter("month"), Some(TimeWindow::Month));
        assert_eq!(TimeWindow::parse_filter("year"), None);

        assert_eq!(TimeWindow::Day.days(), 1);
        assert_eq!(TimeWindow::Week.days(), 7);
        assert_eq!(TimeWindow::Month.days(), 30);
    }

    // -----------------------------------------------------------------------
    // Description rendering
    // -----------------------------------------------------------------------

    #[test]
    fn product_created_uses_name_and_sku() {
        let meta = json!({"product_id": 7, "product_name": "Desk Lamp", "sku": "DL-100"});
        assert_eq!(
            describe("product_created", Some("products"), Some(7), &meta),
            "Added product \"Desk Lamp\" (SKU DL-100)",
        );
    }

    #[test]
    fn product_updated_without_sku_omits_suffix() {
        let meta = json!({"product_name": "Desk Lamp"});
        assert_eq!(
            describe("product_updated", Some("products"), Some(7), &meta),
            "Updated product \"Desk Lamp\"",
        );
    }

    #[test]
    fn product_deleted_falls_back_to_entity_id() {
        let meta = json!({});
        assert_eq!(describe("product_deleted", Some("products"), Some(42), &meta), "Deleted product #42");
    }

    #[test]
    fn crud_without_name_or_id_stays_generic() {
        assert_eq!(describe("create_category", None, None, &json!({})), "Added a category");
    }

    #[test]
    fn supplier_falls_back_to_company_name() {
        let meta = json!({"company_name": "Acme Wholesale"});
        assert_eq!(
            describe("create_supplier", None, None, &meta),
            "Added supplier \"Acme Wholesale\"",
        );
    }

    #[test]
    fn customer_falls_back_to_email() {
        let meta = json!({"email": "jo@example.com"});
        assert_eq!(
            describe("delete_customer", None, Some(3), &meta),
            "Deleted customer \"jo@example.com\"",
        );
    }

    #[test]
    fn sale_uses_order_number_and_total() {
        let meta = json!({"order_number": "S-1001", "total_cents": 1250});
        assert_eq!(describe("create_sale", None, None, &meta), "Completed sale S-1001 for $12.50");
    }

    #[test]
    fn payment_falls_back_to_transaction_id() {
        let meta = json!({"transaction_id": "tx_9f2"});
        assert_eq!(
            describe("process_payment", None, None, &meta),
            "Processed payment for sale tx_9f2",
        );
    }

    #[test]
    fn stock_adjusted_renders_new_level() {
        let meta = json!({"product_name": "Desk Lamp", "new_stock": 7});
        assert_eq!(
            describe("stock_adjusted", None, None, &meta),
            "Set stock for \"Desk Lamp\" to 7",
        );
    }

    #[test]
    fn stock_adjusted_accepts_stringified_numbers() {
        let meta = json!({"product_id": "12", "new_stock": "4"});
        assert_eq!(describe("adjust_stock", None, None, &meta), "Set stock for product #12 to 4");
    }

    #[test]
    fn low_stock_alert_renders_levels() {
        let meta = json!({"product_name": "AA Batteries", "current_stock": 3, "reorder_point": 5});
        assert_eq!(
            describe("low_stock_alert", Some("products"), Some(9), &meta),
            "Low stock: \"AA Batteries\" has 3 left (reorder at 5)",
        );
    }

    #[test]
    fn logout_includes_session_duration() {
        let meta = json!({"session_id": 4, "duration_minutes": 42});
        assert_eq!(describe("user_logout", None, None, &meta), "Signed out after 42 min");
        assert_eq!(describe("user_logout", None, None, &json!({})), "Signed out");
    }

    #[test]
    fn unknown_action_uses_generic_template() {
        assert_eq!(
            describe("recounted_drawer", Some("registers"), Some(2), &json!({})),
            "recounted_drawer on registers #2",
        );
        assert_eq!(
            describe("recounted_drawer", Some("registers"), None, &json!({})),
            "recounted_drawer on registers",
        );
        assert_eq!(describe("recounted_drawer", None, None, &json!({})), "recounted_drawer");
    }

    #[test]
    fn describe_is_total_and_never_empty() {
        let cases: &[(&str, Option<&str>, Option<i64>)] = &[
            ("", None, None),
            ("???", None, Some(1)),
            ("user_login", None, None),
            ("low_stock_alert", None, None),
            ("create_sale", None, None),
        ];
        for (action, table, id) in cases {
            let rendered = describe(action, *table, *id, &json!({}));
            assert!(!rendered.is_empty(), "empty description for action {action:?}");
        }
    }

    #[test]
    fn empty_metadata_strings_are_ignored() {
        let meta = json!({"product_name": "", "sku": ""});
        assert_eq!(describe("product_created", None, Some(5), &meta), "Added product #5");
    }

    #[test]
    fn negative_totals_render_with_sign() {
        let meta = json!({"order_number": "R-77", "total_cents": -500});
        assert_eq!(describe("create_sale", None, None, &meta), "Completed sale R-77 for -$5.00");
    }
}
