use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain representation of one price-list entry for a product and brand.
///
/// Several entries may cover the same product/brand with overlapping
/// validity windows; `priority` ranks them when more than one applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    /// Unique identifier of the record.
    pub id: i32,
    /// Identifier of the priced product.
    pub product_id: i64,
    /// Identifier of the brand or chain the price belongs to.
    pub brand_id: i32,
    /// Identifier of the price list this entry comes from.
    pub price_list: i32,
    /// Rank used to pick a winner among overlapping entries; higher wins.
    pub priority: i32,
    /// First instant (inclusive) at which the price applies.
    pub start_date: NaiveDateTime,
    /// Last instant (inclusive) at which the price applies.
    pub end_date: NaiveDateTime,
    /// Amount to charge while the entry applies.
    pub price: Decimal,
    /// ISO 4217 currency code associated with the amount.
    pub currency: String,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new price-list entry.
#[derive(Debug, Clone)]
pub struct NewPrice {
    /// Identifier of the priced product.
    pub product_id: i64,
    /// Identifier of the brand or chain.
    pub brand_id: i32,
    /// Identifier of the price list.
    pub price_list: i32,
    /// Rank among overlapping entries; higher wins.
    pub priority: i32,
    /// First instant (inclusive) at which the price applies.
    pub start_date: NaiveDateTime,
    /// Last instant (inclusive) at which the price applies.
    pub end_date: NaiveDateTime,
    /// Amount to charge.
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl NewPrice {
    /// Build a new entry valid over `[start_date, end_date]` with priority 0.
    pub fn new(
        product_id: i64,
        brand_id: i32,
        price_list: i32,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        price: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            brand_id,
            price_list,
            priority: 0,
            start_date,
            end_date,
            price,
            currency: currency.into(),
        }
    }

    /// Set the priority used to break ties among overlapping entries.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Query identifying the price to resolve: a product, a brand and the
/// instant at which the price must apply.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuery {
    /// Identifier of the priced product.
    pub product_id: i64,
    /// Identifier of the brand or chain.
    pub brand_id: i32,
    /// Instant the returned price must be valid at (full timestamp, not a
    /// calendar date).
    pub applied_at: NaiveDateTime,
}

impl PriceQuery {
    /// Construct a query for `product_id`/`brand_id` at `applied_at`.
    pub fn new(product_id: i64, brand_id: i32, applied_at: NaiveDateTime) -> Self {
        Self {
            product_id,
            brand_id,
            applied_at,
        }
    }
}
