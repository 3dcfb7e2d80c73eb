use actix_web::error::{QueryPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::{error, info, warn};
use serde::Deserialize;
use serde_json::json;

use crate::engine::QueryEngine;
use crate::error::ReviewError;
use crate::filter::{ReviewFilter, ReviewQuery};

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Largest accepted form body for a submitted review.
pub const MAX_FORM_BYTES: usize = 1024 * 1024;

/// Form body of a submitted review. Field names are capitalized on the
/// wire, unlike the lowercase GET parameters.
#[derive(Deserialize, Debug, Default)]
pub struct ReviewForm {
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "ReviewBody")]
    pub body: Option<String>,
}

impl ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            err if err.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = if self.is_client_error() {
            self.to_string()
        } else {
            INTERNAL_ERROR_MESSAGE.to_string()
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Registers the review endpoint and its extractor error handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(
            web::FormConfig::default()
                .limit(MAX_FORM_BYTES)
                .error_handler(form_error),
        )
        .service(
            web::resource("/")
                .route(web::get().to(get_reviews))
                .route(web::post().to(create_review))
                .default_service(web::route().to(method_not_allowed)),
        );
}

pub async fn get_reviews(
    engine: web::Data<QueryEngine>,
    pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ReviewError> {
    let query = ReviewQuery::from_pairs(pairs.into_inner());
    info!("[API] Received review query: {:?}", query);

    let filter = ReviewFilter::try_from(query).inspect_err(|e| {
        warn!("[API] Rejected query: {}", e);
    })?;

    match engine.query(&filter).await {
        Ok(reviews) => {
            info!("[API] Returning {} reviews", reviews.len());
            Ok(HttpResponse::Ok().json(reviews))
        }
        Err(err) => {
            error!("[API ERROR] Failed to query reviews: {:?}", err);
            Err(err)
        }
    }
}

pub async fn create_review(
    engine: web::Data<QueryEngine>,
    form: web::Form<ReviewForm>,
) -> Result<HttpResponse, ReviewError> {
    let form = form.into_inner();
    info!(
        "[API] Received review submission - Location: {:?}",
        form.location
    );

    match engine
        .create_review(form.location.as_deref(), form.body.as_deref())
        .await
    {
        Ok(review) => {
            info!("[API] Successfully saved review ID: {}", review.id);
            Ok(HttpResponse::Created().json(review))
        }
        Err(err) if err.is_client_error() => {
            warn!("[API] Rejected review submission: {}", err);
            Err(err)
        }
        Err(err) => {
            error!("[API ERROR] Failed to save review: {:?}", err);
            Err(err)
        }
    }
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    warn!("[API] Unsupported method {} on {}", req.method(), req.path());
    HttpResponse::MethodNotAllowed().json(json!({ "error": "Method Not Allowed" }))
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("[API] Malformed query string: {}", err);
    ReviewError::MalformedQuery.into()
}

/// Oversized bodies get a 413; any other unreadable form carries no usable
/// fields.
fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    match err {
        UrlencodedError::Overflow { .. } | UrlencodedError::UnknownLength => {
            warn!("[API] Oversized review form: {}", err);
            ReviewError::PayloadTooLarge {
                limit: MAX_FORM_BYTES,
            }
            .into()
        }
        err => {
            warn!("[API] Malformed review form: {}", err);
            ReviewError::MissingField.into()
        }
    }
}
