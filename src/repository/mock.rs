use mockall::mock;

use super::{PriceReader, PriceWriter};
use crate::domain::price::{NewPrice, Price, PriceQuery};
use crate::repository::errors::RepositoryResult;

mock! {
    pub PriceReader {}

    impl PriceReader for PriceReader {
        fn list_applicable_prices(&self, query: &PriceQuery) -> RepositoryResult<Vec<Price>>;
    }
}

mock! {
    pub PriceWriter {}

    impl PriceWriter for PriceWriter {
        fn create_prices(&self, new_prices: &[NewPrice]) -> RepositoryResult<usize>;
    }
}
