//! JWT bearer authentication middleware.
//!
//! Every protected endpoint requires an `Authorization: Bearer <token>`
//! header carrying an HS256-signed JWT whose `sub` claim is the account
//! id. The middleware verifies the signature and expiry and injects an
//! [`AuthContext`] into the request extensions for handlers to extract.

use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use turno_shared::ErrorResponse;
use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: usize,
}

/// Authenticated caller identity injected into requests.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(|| unauthorized("Missing authentication context")),
        )
    }
}

/// JWT authentication middleware factory.
pub struct JwtAuth {
    jwt_secret: String,
}

impl JwtAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            jwt_secret: self.jwt_secret.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    jwt_secret: String,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let jwt_secret = self.jwt_secret.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Err(unauthorized("Missing or invalid Authorization header"));
                }
            };

            let context = match verify_token(&token, &jwt_secret) {
                Ok(context) => context,
                Err(message) => {
                    tracing::warn!(event = "auth_rejected", reason = message);
                    return Err(unauthorized(message));
                }
            };

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Pulls the token out of the `Authorization: Bearer <token>` header.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn verify_token(token: &str, secret: &str) -> Result<AuthContext, &'static str> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| "Invalid or expired token")?;

    let account_id =
        Uuid::parse_str(&data.claims.sub).map_err(|_| "Token subject is not a valid id")?;

    Ok(AuthContext { account_id })
}

fn unauthorized(message: &'static str) -> Error {
    let response = HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", message));
    InternalError::from_response(message, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
    }

    fn token_for(sub: &str, secret: &str, exp_offset: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset) as usize;
        encode(
            &Header::default(),
            &TestClaims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn accepts_valid_token() {
        let account_id = Uuid::new_v4();
        let token = token_for(&account_id.to_string(), "secret", 3600);
        let context = verify_token(&token, "secret").unwrap();
        assert_eq!(context.account_id, account_id);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = token_for(&Uuid::new_v4().to_string(), "secret", 3600);
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let token = token_for(&Uuid::new_v4().to_string(), "secret", -3600);
        assert!(verify_token(&token, "secret").is_err());
    }

    #[test]
    fn rejects_non_uuid_subject() {
        let token = token_for("not-a-uuid", "secret", 3600);
        assert!(verify_token(&token, "secret").is_err());
    }
}
