//! HTTP handlers and route configuration.

mod pages;
mod posts;

use actix_web::web;

use crate::error::AppError;

pub use pages::not_found;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // An id that is not a number cannot name a post.
        .app_data(web::PathConfig::default().error_handler(|_, _| {
            AppError::NotFound("Post not found".to_string()).into()
        }))
        .route("/", web::get().to(posts::list_posts))
        .route("/post/{id}", web::get().to(posts::show_post))
        .service(
            web::resource("/new-post")
                .route(web::get().to(posts::new_post_form))
                .route(web::post().to(posts::create_post)),
        )
        .service(
            web::resource("/edit-post/{id}")
                .route(web::get().to(posts::edit_post_form))
                .route(web::post().to(posts::update_post)),
        )
        .route("/delete/{id}", web::get().to(posts::delete_post))
        .route("/about", web::get().to(pages::about))
        .route("/contact", web::get().to(pages::contact));
}
