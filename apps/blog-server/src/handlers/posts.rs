//! Post handlers: list, show, create, edit and delete.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use tera::Context;

use inkpost_core::domain::{NewPost, today_stamp};
use inkpost_core::error::RepoError;
use inkpost_core::validation::{FieldErrors, PostForm};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

/// Which submission the post form page is for.
#[derive(Debug, Clone, Copy)]
enum FormMode {
    Create,
    Edit(i32),
}

/// GET /
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    let mut context = Context::new();
    context.insert("posts", &posts);
    views::page("index.html", &context)
}

/// GET /post/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    let mut context = Context::new();
    context.insert("post", &post);
    views::page("post.html", &context)
}

/// GET /new-post
pub async fn new_post_form() -> AppResult<HttpResponse> {
    form_page(FormMode::Create, &PostForm::default(), &FieldErrors::default())
}

/// POST /new-post
pub async fn create_post(
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => return form_page(FormMode::Create, &form, &errors),
    };

    match state.posts.insert(NewPost::new(fields, today_stamp())).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created");
            Ok(redirect("/"))
        }
        Err(RepoError::UniqueViolation(_)) => {
            form_page(FormMode::Create, &form, &FieldErrors::duplicate_title())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /edit-post/{id}
pub async fn edit_post_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.get(id).await?;

    form_page(FormMode::Edit(id), &PostForm::from(&post), &FieldErrors::default())
}

/// POST /edit-post/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.get(id).await?;

    let form = form.into_inner();
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => return form_page(FormMode::Edit(id), &form, &errors),
    };

    match state.posts.update(id, fields).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post updated");
            Ok(redirect(&format!("/post/{}", post.id)))
        }
        Err(RepoError::UniqueViolation(_)) => {
            form_page(FormMode::Edit(id), &form, &FieldErrors::duplicate_title())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /delete/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.posts.delete(id).await?;

    tracing::info!(post_id = id, "Post deleted");
    Ok(redirect("/"))
}

/// The shared create/edit form, filled with `form` and annotated with `errors`.
fn form_page(mode: FormMode, form: &PostForm, errors: &FieldErrors) -> AppResult<HttpResponse> {
    let mut context = Context::new();
    match mode {
        FormMode::Create => {
            context.insert("is_edit", &false);
            context.insert("action", "/new-post");
        }
        FormMode::Edit(id) => {
            context.insert("is_edit", &true);
            context.insert("action", &format!("/edit-post/{id}"));
        }
    }
    context.insert("form", form);
    context.insert("errors", errors);
    views::page("make-post.html", &context)
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
