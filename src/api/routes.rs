// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password analysis
    cfg.service(
        web::scope("/analyzer")
            .route("/password", web::post().to(handlers::analyzer::analyze_password))
            .route("/password/{pwd}", web::get().to(handlers::analyzer::analyze_password_path)),
    );

    // Wordlist generation
    cfg.service(
        web::scope("/wordlist")
            .route("", web::post().to(handlers::wordlist::generate_wordlist))
            .route("/download", web::post().to(handlers::wordlist::download_wordlist)),
    );
}
