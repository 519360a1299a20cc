use diesel::prelude::*;

use crate::{
    domain::price::{NewPrice as DomainNewPrice, Price as DomainPrice, PriceQuery},
    models::price::{NewPrice as DbNewPrice, Price as DbPrice},
    repository::errors::RepositoryResult,
    repository::{DieselRepository, PriceReader, PriceWriter},
};

impl PriceReader for DieselRepository {
    fn list_applicable_prices(&self, query: &PriceQuery) -> RepositoryResult<Vec<DomainPrice>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;

        let rows = prices::table
            .filter(prices::product_id.eq(query.product_id))
            .filter(prices::brand_id.eq(query.brand_id))
            .filter(prices::start_date.le(query.applied_at))
            .filter(prices::end_date.ge(query.applied_at))
            .load::<DbPrice>(&mut conn)?;

        Ok(rows.into_iter().map(DomainPrice::from).collect())
    }
}

impl PriceWriter for DieselRepository {
    fn create_prices(&self, new_prices: &[DomainNewPrice]) -> RepositoryResult<usize> {
        use crate::schema::prices;

        let mut conn = self.conn()?;

        let db_rows: Vec<DbNewPrice> = new_prices.iter().map(DbNewPrice::from).collect();
        let inserted = diesel::insert_into(prices::table)
            .values(&db_rows)
            .execute(&mut conn)?;

        Ok(inserted)
    }
}
