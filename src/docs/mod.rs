//! API documentation
//!
//! Builds an OpenAPI document from the application descriptor and serves it
//! together with a minimal Swagger UI page. The shell registers the document
//! during the build pass (Swagger feature) and attaches the routes during
//! the mounted pass (Controllers feature, development mode only).

use crate::app::AppDescriptor;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
/// Path of the doc-UI page
pub const DOC_UI_PATH: &str = "/docs";

/// Assemble the OpenAPI document for an application
pub fn build_openapi(descriptor: &AppDescriptor) -> OpenApi {
    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(descriptor.name.clone())
                .version(descriptor.version.to_string())
                .description(Some(descriptor.description.clone()))
                .build(),
        )
        .build()
}

/// Router serving the doc UI, plus the document itself when one was generated
pub fn docs_router(openapi: Option<OpenApi>) -> Router {
    let mut router = Router::new().route(DOC_UI_PATH, get(doc_ui));
    if let Some(doc) = openapi {
        let doc = Arc::new(doc);
        router = router.route(
            OPENAPI_PATH,
            get(move || {
                let doc = Arc::clone(&doc);
                async move { Json((*doc).clone()) }
            }),
        );
    }
    router
}

async fn doc_ui() -> Html<&'static str> {
    Html(DOC_UI_PAGE)
}

const DOC_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>API documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({ url: "/api-docs/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Features;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use semver::Version;
    use tower::ServiceExt;

    fn descriptor() -> AppDescriptor {
        AppDescriptor::new(
            "docs-app".into(),
            Version::new(1, 2, 3),
            "An app under test".into(),
            None,
            Features::ALL,
        )
    }

    #[test]
    fn document_carries_descriptor_identity() {
        let doc = build_openapi(&descriptor());
        assert_eq!(doc.info.title, "docs-app");
        assert_eq!(doc.info.version, "1.2.3");
        assert_eq!(doc.info.description.as_deref(), Some("An app under test"));
    }

    #[tokio::test]
    async fn serves_ui_and_document() {
        let router = docs_router(Some(build_openapi(&descriptor())));

        let ui = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(DOC_UI_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(ui.status(), StatusCode::OK);

        let doc = router
            .oneshot(
                Request::builder()
                    .uri(OPENAPI_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(doc.status(), StatusCode::OK);

        let body = doc.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["info"]["title"], "docs-app");
    }

    #[tokio::test]
    async fn document_route_is_absent_without_a_document() {
        let router = docs_router(None);

        let response = router
            .oneshot(
                Request::builder()
                    .uri(OPENAPI_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
