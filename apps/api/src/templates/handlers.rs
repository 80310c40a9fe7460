//! Axum route handlers for the Template API.

use axum::{
    extract::{rejection::JsonRejection, Path},
    Json,
};

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::scoring::handlers::accept_resume;
use crate::templates::{catalog, find, resolve, TemplateDescriptor};

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [TemplateDescriptor]> {
    Json(catalog())
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    Path(id): Path<String>,
) -> Result<Json<&'static TemplateDescriptor>, AppError> {
    find(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))
}

/// POST /api/v1/resumes/template
///
/// Returns the layout the preview should use for this resume.
/// Unrecognized template ids render with `modern`.
pub async fn handle_resolve_template(
    payload: Result<Json<Resume>, JsonRejection>,
) -> Result<Json<&'static TemplateDescriptor>, AppError> {
    let resume = accept_resume(payload)?;
    Ok(Json(resolve(resume.template.as_str())))
}
