use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::price::{NewPrice as DomainNewPrice, Price as DomainPrice};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::prices)]
pub struct Price {
    pub id: i32,
    pub product_id: i64,
    pub brand_id: i32,
    pub price_list: i32,
    pub priority: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    // Stored as text to keep exact decimal semantics in SQLite.
    pub price: String,
    pub currency: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::prices)]
pub struct NewPrice<'a> {
    pub product_id: i64,
    pub brand_id: i32,
    pub price_list: i32,
    pub priority: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub price: String,
    pub currency: &'a str,
}

impl From<Price> for DomainPrice {
    fn from(value: Price) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            priority: value.priority,
            start_date: value.start_date,
            end_date: value.end_date,
            price: Decimal::from_str(&value.price).unwrap_or_default(),
            currency: value.currency,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewPrice> for NewPrice<'a> {
    fn from(value: &'a DomainNewPrice) -> Self {
        Self {
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            priority: value.priority,
            start_date: value.start_date,
            end_date: value.end_date,
            price: value.price.to_string(),
            currency: value.currency.as_str(),
        }
    }
}
