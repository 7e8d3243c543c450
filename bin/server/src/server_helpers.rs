//! Helper functions for server functions with proper error handling and logging.
//!
//! Shared services are attached to the router as axum extensions in `main`
//! and extracted here, so individual server functions stay small.

use akademi_assistant::AssistantBackend;
use akademi_catalog::Catalog;
use axum::Extension;
use leptos::server_fn::error::ServerFnError;
use std::sync::Arc;

/// Gets the shared course catalog from the request.
///
/// # Errors
///
/// Returns an error if the catalog extension is missing from the request,
/// which means the router was built without it.
pub async fn catalog() -> Result<Arc<Catalog>, ServerFnError> {
    let Extension(catalog): Extension<Arc<Catalog>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Course catalog missing from request extensions");
            e
        })?;
    Ok(catalog)
}

/// Gets the shared assistant backend from the request.
///
/// # Errors
///
/// Returns an error if the assistant extension is missing from the request.
pub async fn assistant() -> Result<Arc<dyn AssistantBackend>, ServerFnError> {
    let Extension(assistant): Extension<Arc<dyn AssistantBackend>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Assistant backend missing from request extensions");
            e
        })?;
    Ok(assistant)
}
