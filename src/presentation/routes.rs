use crate::presentation::handlers::{create_user, method_not_allowed};
use actix_web::web;

/// Largest accepted `POST /users` body. Bigger bodies get 413.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Registers `/users`. Paths outside it fall through to actix-web's 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .route(web::post().to(create_user))
            .default_service(web::to(method_not_allowed)),
    );
}
