use askama::Template;
use axum::response::Html;

use crate::error::AppError;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub sub: String,
    pub role: String,
    pub expires_at: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

pub fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
