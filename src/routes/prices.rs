use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::prices::PriceQueryForm;
use crate::repository::DieselRepository;
use crate::routes::ErrorResponse;
use crate::services::prices::{PriceView, resolve_price};
use crate::services::ServiceError;

#[get("/api/prices")]
/// Return the single price applicable to a product/brand at a point in time.
///
/// Responds `404` when no price-list window contains the requested instant
/// and `400` when the parameters fail validation.
pub async fn get_price(
    params: web::Query<PriceQueryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = match params.into_inner().into_query() {
        Ok(query) => query,
        Err(err) => {
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(err.to_string()));
        }
    };

    match resolve_price(repo.get_ref(), &query) {
        Ok(price) => HttpResponse::Ok().json(PriceView::from(price)),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(ErrorResponse::not_found(
            format!(
                "no price found for productId={}, brandId={}, applicationDate={}",
                query.product_id, query.brand_id, query.applied_at
            ),
        )),
        Err(err) => {
            log::error!("Failed to resolve price: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
