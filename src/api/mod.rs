// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::analyzer::PasswordAnalyzer;
use crate::wordlist::WordlistGenerator;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Analyzer endpoints
        crate::api::handlers::analyzer::analyze_password,
        crate::api::handlers::analyzer::analyze_password_path,

        // Wordlist endpoints
        crate::api::handlers::wordlist::generate_wordlist,
        crate::api::handlers::wordlist::download_wordlist,
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::AnalyzeRequest,
            crate::api::types::AnalyzeResponse,
            crate::api::types::WordlistRequest,
            crate::api::types::WordlistResponse,

            // Domain models
            crate::models::PasswordAnalysis,
            crate::models::StrengthRating,
            crate::models::StrengthTier,
            crate::models::PatternMatch,
            crate::models::PatternKind,
            crate::models::WordlistOptions,
        )
    ),
    tags(
        (name = "Analyzer", description = "Password strength analysis endpoints"),
        (name = "Wordlist", description = "Targeted wordlist generation endpoints")
    ),
    info(
        title = "PassAudit API",
        version = "0.1.0",
        description = "Password Strength Auditor & Targeted Wordlist Generator API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(port: u16) -> std::io::Result<()> {
    log::info!("Starting PassAudit API server on port {}", port);

    // Engines are stateless and shared; the generator's year table is
    // computed once here, at process startup.
    let analyzer = web::Data::new(PasswordAnalyzer::new());
    let generator = web::Data::new(WordlistGenerator::new());

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                "Content-Type",
                "Accept",
                "X-Requested-With",
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(analyzer.clone())
            .app_data(generator.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure your regular API routes
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
