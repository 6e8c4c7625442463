//! CORS configuration for browser and mobile clients.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates the CORS middleware for the current environment.
///
/// Development allows any origin. Production restricts origins to the
/// comma-separated `ALLOWED_ORIGINS` list.
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        production_cors(max_age)
    } else {
        development_cors(max_age)
    }
}

fn development_cors(max_age: usize) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(max_age)
}

fn production_cors(max_age: usize) -> Cors {
    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(max_age);

    for origin in allowed_origins.split(',').filter(|o| !o.trim().is_empty()) {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
