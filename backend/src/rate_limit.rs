use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{clock::DefaultClock, state::keyed::DashMapStateStore, Quota, RateLimiter};
use nonzero_ext::nonzero;
use serde_json::json;

use crate::AppState;

pub type AddressLimiter = RateLimiter<String, DashMapStateStore<String>, DefaultClock>;

const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(15 * 60);
const API_BURST: NonZeroU32 = nonzero!(100u32);
const CONTACT_BURST: NonZeroU32 = nonzero!(5u32);

// At most 100 requests per address per 15 minutes, across all routes.
pub fn api_limiter() -> AddressLimiter {
    RateLimiter::dashmap(
        Quota::with_period(RATE_LIMIT_WINDOW / API_BURST.get())
            .expect("window is nonzero")
            .allow_burst(API_BURST),
    )
}

// At most 5 contact submissions per address per 15 minutes, on top of the
// general ceiling.
pub fn contact_limiter() -> AddressLimiter {
    RateLimiter::dashmap(
        Quota::with_period(RATE_LIMIT_WINDOW / CONTACT_BURST.get())
            .expect("window is nonzero")
            .allow_burst(CONTACT_BURST),
    )
}

// Submitter address resolved once per request by the outer middleware and
// recorded with persisted submissions.
#[derive(Clone)]
pub struct ClientIp(pub String);

fn client_address(req: &Request) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn too_many_requests(message: &str) -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(json!({
            "success": false,
            "message": message,
        })),
    )
        .into_response()
}

pub async fn api_rate_limit(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let address = client_address(&req);
    if state.api_limiter.check_key(&address).is_err() {
        return too_many_requests("Too many requests from this IP, please try again later.");
    }
    req.extensions_mut().insert(ClientIp(address));
    next.run(req).await
}

pub async fn contact_rate_limit(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let address = req
        .extensions()
        .get::<ClientIp>()
        .map(|ip| ip.0.clone())
        .unwrap_or_else(|| client_address(&req));
    if state.contact_limiter.check_key(&address).is_err() {
        return too_many_requests("Too many contact form submissions, please try again later.");
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_limiter_denies_sixth_submission_in_window() {
        let limiter = contact_limiter();
        let address = "203.0.113.7".to_string();
        for attempt in 1..=5 {
            assert!(
                limiter.check_key(&address).is_ok(),
                "attempt {attempt} should pass"
            );
        }
        assert!(limiter.check_key(&address).is_err());
    }

    #[test]
    fn addresses_are_limited_independently() {
        let limiter = contact_limiter();
        let first = "203.0.113.7".to_string();
        let second = "203.0.113.8".to_string();
        for _ in 0..5 {
            let _ = limiter.check_key(&first);
        }
        assert!(limiter.check_key(&first).is_err());
        assert!(limiter.check_key(&second).is_ok());
    }
}
