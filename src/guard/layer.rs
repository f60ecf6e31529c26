use crate::guard::Guard;
use axum::{
    body::Body,
    http::Request,
    response::{IntoResponse, Response},
};
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Tower layer running every registered guard before the inner service
///
/// Denials are converted into responses (401/403) so the middleware stays
/// infallible and composes with an axum `Router`.
#[derive(Clone)]
pub struct GuardLayer {
    guards: Arc<Vec<Arc<dyn Guard>>>,
}

impl GuardLayer {
    pub fn new(guards: Vec<Arc<dyn Guard>>) -> Self {
        Self {
            guards: Arc::new(guards),
        }
    }
}

impl<S> Layer<S> for GuardLayer {
    type Service = GuardMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        GuardMiddleware {
            inner,
            guards: self.guards.clone(),
        }
    }
}

#[derive(Clone)]
pub struct GuardMiddleware<S> {
    inner: S,
    guards: Arc<Vec<Arc<dyn Guard>>>,
}

impl<S> Service<Request<Body>> for GuardMiddleware<S>
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
        let guards = self.guards.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            for guard in guards.iter() {
                if let Err(denied) = guard.can_activate(&req).await {
                    // Denied: the inner service never runs.
                    return Ok(denied.into_response());
                }
            }
            inner.call(req).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{GuardError, GuardResult};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    struct Allow;

    #[async_trait]
    impl Guard for Allow {
        async fn can_activate(&self, _request: &Request<Body>) -> GuardResult {
            Ok(())
        }
    }

    struct DenyAnonymous;

    #[async_trait]
    impl Guard for DenyAnonymous {
        async fn can_activate(&self, request: &Request<Body>) -> GuardResult {
            if request.headers().contains_key("authorization") {
                Ok(())
            } else {
                Err(GuardError::Unauthorized("missing credentials".into()))
            }
        }
    }

    fn protected_router(guards: Vec<Arc<dyn Guard>>) -> Router {
        Router::new()
            .route("/secret", get(|| async { "ok" }))
            .layer(GuardLayer::new(guards))
    }

    #[tokio::test]
    async fn allowed_request_reaches_the_route() {
        let router = protected_router(vec![Arc::new(Allow)]);
        let request = Request::builder()
            .uri("/secret")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn denied_request_short_circuits() {
        let router = protected_router(vec![Arc::new(Allow), Arc::new(DenyAnonymous)]);
        let request = Request::builder()
            .uri("/secret")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn credentials_satisfy_the_guard() {
        let router = protected_router(vec![Arc::new(DenyAnonymous)]);
        let request = Request::builder()
            .uri("/secret")
            .header("authorization", "Bearer token")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
