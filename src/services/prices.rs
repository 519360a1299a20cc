use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::price::{Price, PriceQuery};
use crate::repository::PriceReader;
use crate::services::{ServiceError, ServiceResult};

/// Resolves the single applicable price for a query.
///
/// Looks up every price whose validity window contains the query instant
/// and keeps the one with the highest priority. Fails with
/// [`ServiceError::NotFound`] when no window matches.
pub fn resolve_price<R>(repo: &R, query: &PriceQuery) -> ServiceResult<Price>
where
    R: PriceReader + ?Sized,
{
    let candidates = repo
        .list_applicable_prices(query)
        .map_err(ServiceError::from)?;

    select_highest_priority(candidates).ok_or(ServiceError::NotFound)
}

/// Picks the candidate with the highest priority.
///
/// Assumes the caller already filtered candidates by validity window; no
/// further date filtering happens here. Ties keep the candidate seen first,
/// so the result is stable for a fixed input ordering.
pub fn select_highest_priority(candidates: Vec<Price>) -> Option<Price> {
    candidates.into_iter().reduce(|best, candidate| {
        if candidate.priority > best.priority {
            candidate
        } else {
            best
        }
    })
}

/// View model returned by the prices endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceView {
    pub product_id: i64,
    pub brand_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub price: Decimal,
    pub currency: String,
}

impl From<Price> for PriceView {
    fn from(price: Price) -> Self {
        Self {
            product_id: price.product_id,
            brand_id: price.brand_id,
            price_list: price.price_list,
            start_date: price.start_date,
            end_date: price.end_date,
            price: price.price,
            currency: price.currency,
        }
    }
}
