//! HTTPS redirection layer
//!
//! Answers plain-HTTP requests with a permanent redirect to the `https://`
//! form of the requested URI. The scheme is taken from the
//! `x-forwarded-proto` header set by the fronting proxy; requests without
//! the header (or without a `Host`) pass through untouched.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

#[derive(Clone, Copy, Default)]
pub struct HttpsRedirectLayer;

impl<S> Layer<S> for HttpsRedirectLayer {
    type Service = HttpsRedirect<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpsRedirect { inner }
    }
}

#[derive(Clone)]
pub struct HttpsRedirect<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for HttpsRedirect<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        if let Some(location) = https_location(&req) {
            return Box::pin(async move {
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::PERMANENT_REDIRECT;
                response.headers_mut().insert(header::LOCATION, location);
                Ok(response)
            });
        }

        let mut inner = self.inner.clone();
        Box::pin(async move { inner.call(req).await })
    }
}

/// The https target for an insecure request, or None to pass through
fn https_location(req: &Request<Body>) -> Option<HeaderValue> {
    let proto = req.headers().get(X_FORWARDED_PROTO)?.to_str().ok()?;
    if proto.eq_ignore_ascii_case("https") {
        return None;
    }
    let host = req.headers().get(header::HOST)?.to_str().ok()?;
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    HeaderValue::try_from(format!("https://{host}{path}")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn router() -> Router {
        Router::new()
            .route("/resource", get(|| async { "ok" }))
            .layer(HttpsRedirectLayer)
    }

    #[tokio::test]
    async fn insecure_request_is_redirected() {
        let request = Request::builder()
            .uri("/resource?page=2")
            .header(header::HOST, "api.example.com")
            .header(X_FORWARDED_PROTO, "http")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://api.example.com/resource?page=2"
        );
    }

    #[tokio::test]
    async fn secure_request_passes_through() {
        let request = Request::builder()
            .uri("/resource")
            .header(header::HOST, "api.example.com")
            .header(X_FORWARDED_PROTO, "https")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn request_without_forwarded_proto_passes_through() {
        let request = Request::builder()
            .uri("/resource")
            .header(header::HOST, "api.example.com")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
