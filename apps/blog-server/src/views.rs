//! HTML views. Templates are compiled into the binary and parsed once.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::error::AppResult;

static TEMPLATES: Lazy<Result<Tera, String>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("post.html", include_str!("../templates/post.html")),
        ("make-post.html", include_str!("../templates/make-post.html")),
        ("about.html", include_str!("../templates/about.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])
    .map_err(|e| format!("{e:?}"))?;
    Ok(tera)
});

/// Parse the templates now rather than on the first request.
pub fn load() -> Result<(), tera::Error> {
    match &*TEMPLATES {
        Ok(_) => Ok(()),
        Err(e) => Err(tera::Error::msg(e)),
    }
}

pub fn render(name: &str, context: &Context) -> Result<String, tera::Error> {
    match &*TEMPLATES {
        Ok(tera) => tera.render(name, context),
        Err(e) => Err(tera::Error::msg(e)),
    }
}

/// Render a template as a `200 OK` HTML page.
pub fn page(name: &str, context: &Context) -> AppResult<HttpResponse> {
    let html = render(name, context)?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}
