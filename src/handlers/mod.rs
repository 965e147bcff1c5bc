pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_live};
pub use quiz_handler::{create_quiz, get_latest_top_scorer, get_quiz_top_scorer};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(create_quiz)
        .service(get_quiz_top_scorer)
        .service(get_latest_top_scorer);
}
