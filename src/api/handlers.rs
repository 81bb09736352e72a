use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::{debug, info, instrument, warn};

use crate::api::config::ApiConfig;
use crate::api::models::{
    ErrorResponse, HealthStatus, QueryUrlRequest, RedirectQuery, UrlResponse, ViewUrlRequest,
};
use crate::context::RequestContext;
use crate::error::UrlError;
use crate::url_helpers::{get_url_path, is_safe_url, modify_url_query};

/// Maps a helper error onto an HTTP error response
fn error_response(err: &UrlError) -> HttpResponse {
    let body = ErrorResponse::new(err.to_string());
    match err {
        UrlError::UnknownView(_) => HttpResponse::NotFound().json(body),
        UrlError::MissingConfig(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Redirects to `next` only when it points back at the host serving this request
#[instrument(skip(req))]
pub async fn redirect_handler(req: HttpRequest, query: web::Query<RedirectQuery>) -> impl Responder {
    let ctx = RequestContext::from_request(&req);

    if !is_safe_url(&ctx, &query.next) {
        warn!("Refusing redirect to {} from {}", query.next, ctx.host_url());
        return HttpResponse::BadRequest().json(ErrorResponse::new("Unsafe redirect target"));
    }

    debug!("Redirecting to {}", query.next);
    HttpResponse::Found()
        .insert_header((header::LOCATION, query.next.clone()))
        .finish()
}

/// Resolves a named view to an absolute URL
#[instrument(skip(config))]
pub async fn view_url_handler(
    request: web::Json<ViewUrlRequest>,
    config: web::Data<ApiConfig>,
) -> impl Responder {
    let route_params = request.route_params();
    let params: Vec<(&str, &str)> = route_params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    match get_url_path(
        &config.urls,
        &config.routes,
        &request.view,
        request.user_friendly,
        &params,
    ) {
        Ok(url) => {
            info!("Resolved view {} to {}", request.view, url);
            HttpResponse::Ok().json(UrlResponse { url })
        }
        Err(e) => {
            warn!("Failed to resolve view {}: {}", request.view, e);
            error_response(&e)
        }
    }
}

/// Replaces or adds query parameters on the given URL
#[instrument]
pub async fn query_url_handler(request: web::Json<QueryUrlRequest>) -> impl Responder {
    match modify_url_query(&request.url, request.query_values()) {
        Ok(url) => HttpResponse::Ok().json(UrlResponse { url }),
        Err(e) => {
            warn!("Failed to modify query of {}: {}", request.url, e);
            error_response(&e)
        }
    }
}

/// Health check endpoint for monitoring service status
#[instrument(skip(config))]
pub async fn health_check(config: web::Data<ApiConfig>) -> impl Responder {
    debug!("Processing health check request");
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        routes: config.routes.len(),
    })
}
