use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use std::env;
use tower_http::set_header::SetResponseHeaderLayer;

const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

/// Security header values
const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const XSS_BLOCK: &str = "1; mode=block";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
const CSP_API_VALUE: &str = "default-src 'none'; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY_VALUE: &str = "geolocation=(), microphone=(), camera=()";

/// Baseline security response headers for a JSON API. HSTS is only sent in
/// production, where the service sits behind HTTPS.
#[derive(Clone)]
pub struct SecurityHeaders {
    include_hsts: bool,
}

impl SecurityHeaders {
    pub fn new(include_hsts: bool) -> Self {
        Self { include_hsts }
    }

    pub fn from_env() -> Self {
        let is_production = env::var("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        if is_production {
            tracing::info!("Security: HSTS header enabled (production mode)");
        } else {
            tracing::info!("Security: HSTS header disabled (development mode)");
        }

        Self::new(is_production)
    }

    pub fn apply(&self, router: Router) -> Router {
        let router = router
            .layer(override_header(header::X_CONTENT_TYPE_OPTIONS, NOSNIFF))
            .layer(override_header(header::X_FRAME_OPTIONS, DENY))
            .layer(override_header(header::X_XSS_PROTECTION, XSS_BLOCK))
            .layer(override_header(
                header::CONTENT_SECURITY_POLICY,
                CSP_API_VALUE,
            ))
            .layer(override_header(
                header::REFERRER_POLICY,
                REFERRER_POLICY_VALUE,
            ))
            .layer(override_header(
                PERMISSIONS_POLICY,
                PERMISSIONS_POLICY_VALUE,
            ));

        if self.include_hsts {
            router.layer(override_header(
                header::STRICT_TRANSPORT_SECURITY,
                HSTS_VALUE,
            ))
        } else {
            router
        }
    }
}

fn override_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
