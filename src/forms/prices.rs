use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price::PriceQuery;

/// Accepted textual formats for the `applicationDate` parameter. ISO 8601
/// with a `T` separator is canonical; a space separator and fractional
/// seconds are tolerated.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Result type returned by the price query form helpers.
pub type PriceQueryFormResult<T> = Result<T, PriceQueryFormError>;

/// Errors that can occur while processing the price query parameters.
#[derive(Debug, Error)]
pub enum PriceQueryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The application date could not be parsed.
    #[error("invalid application date `{value}`; expected an ISO 8601 date-time such as 2020-06-14T10:00:00")]
    InvalidDate { value: String },
}

/// Query parameters accepted by the price resolution endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceQueryForm {
    /// Identifier of the priced product.
    #[validate(range(min = 1))]
    pub product_id: i64,
    /// Identifier of the brand or chain.
    #[validate(range(min = 1))]
    pub brand_id: i32,
    /// Instant the price must apply at, as an ISO 8601 date-time.
    pub application_date: String,
}

impl PriceQueryForm {
    /// Validates the parameters and converts them into a domain query.
    pub fn into_query(self) -> PriceQueryFormResult<PriceQuery> {
        self.validate()?;

        let applied_at = parse_application_date(self.application_date.trim())?;

        Ok(PriceQuery::new(self.product_id, self.brand_id, applied_at))
    }
}

fn parse_application_date(value: &str) -> PriceQueryFormResult<NaiveDateTime> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| PriceQueryFormError::InvalidDate {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form(product_id: i64, brand_id: i32, application_date: &str) -> PriceQueryForm {
        PriceQueryForm {
            product_id,
            brand_id,
            application_date: application_date.to_string(),
        }
    }

    #[test]
    fn into_query_parses_iso_date_time() {
        let query = form(35455, 1, "2020-06-14T10:00:00")
            .into_query()
            .expect("expected valid query");

        assert_eq!(query.product_id, 35455);
        assert_eq!(query.brand_id, 1);
        assert_eq!(
            query.applied_at,
            NaiveDate::from_ymd_opt(2020, 6, 14)
                .and_then(|date| date.and_hms_opt(10, 0, 0))
                .unwrap_or_default()
        );
    }

    #[test]
    fn into_query_accepts_space_separator_and_fractional_seconds() {
        for value in ["2020-06-14 10:00:00", "2020-06-14T10:00:00.250"] {
            let query = form(35455, 1, value)
                .into_query()
                .unwrap_or_else(|err| panic!("expected `{value}` to parse: {err}"));
            assert_eq!(query.applied_at.date().to_string(), "2020-06-14");
        }
    }

    #[test]
    fn into_query_trims_surrounding_whitespace() {
        let query = form(35455, 1, " 2020-06-14T10:00:00 ")
            .into_query()
            .expect("expected valid query");

        assert_eq!(query.applied_at.time().to_string(), "10:00:00");
    }

    #[test]
    fn into_query_rejects_unparsable_dates() {
        for value in ["2020-06-14", "14/06/2020 10:00", "not-a-date", ""] {
            let result = form(35455, 1, value).into_query();
            assert!(
                matches!(result, Err(PriceQueryFormError::InvalidDate { .. })),
                "expected `{value}` to be rejected"
            );
        }
    }

    #[test]
    fn into_query_rejects_non_positive_identifiers() {
        let result = form(0, 1, "2020-06-14T10:00:00").into_query();
        assert!(matches!(result, Err(PriceQueryFormError::Validation(_))));

        let result = form(35455, -1, "2020-06-14T10:00:00").into_query();
        assert!(matches!(result, Err(PriceQueryFormError::Validation(_))));
    }
}
