//! Orders resource

mod api;
mod commands;

pub use commands::run_list_orders_command;

/// Label attached to order records
pub const ORDER_LABEL: &str = "Order";

/// Fields shown for each order, in display order
pub const ORDER_FIELDS: &[&str] = &[
    "id",
    "primary_id",
    "numerical_id",
    "alias_id",
    "po_number",
    "customer_number",
    "source",
    "tax",
    "tax_source",
    "imported_tax",
    "calculated_tax",
    "shipping",
    "shipping_source",
    "imported_shipping",
    "calculated_shipping",
    "actual_shipcost",
    "status_shipped",
    "ship_type",
    "ship_via",
    "ship_time",
    "future_ship_time",
    "total",
    "total_source",
    "imported_total",
    "calculated_total",
    "base_price",
    "base_price_source",
    "imported_base_price",
    "calculated_base_price",
    "message",
    "terms",
    "resource_uri",
    "created_at",
    "updated_at",
    "print_time",
    "order_time",
    "import_time",
];
