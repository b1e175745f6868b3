// src/api/handlers/analyzer.rs

use actix_web::{web, HttpResponse, Responder};

use crate::analyzer::PasswordAnalyzer;
use crate::api::types::{AnalyzeRequest, AnalyzeResponse};

/// Analyze password strength
///
/// Computes entropy, a composite 0-100 score, a strength tier, detected
/// weak patterns and improvement suggestions for the supplied password.
#[utoipa::path(
    post,
    path = "/analyzer/password",
    tag = "Analyzer",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Password analysis result", body = AnalyzeResponse),
        (status = 400, description = "Missing password", body = AnalyzeResponse)
    )
)]
pub async fn analyze_password(
    analyzer: web::Data<PasswordAnalyzer>,
    analyze_req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    if analyze_req.password.is_empty() {
        return HttpResponse::BadRequest().json(AnalyzeResponse {
            success: false,
            analysis: None,
            error: Some("Password is required".to_string()),
        });
    }

    let analysis = analyzer.analyze(&analyze_req.password);
    log::debug!("Analyzed password, score {}", analysis.score);

    HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        analysis: Some(analysis),
        error: None,
    })
}

/// Analyze password strength (path variant)
///
/// Same analysis as the POST endpoint, with the password passed URL-encoded
/// in the path.
#[utoipa::path(
    get,
    path = "/analyzer/password/{pwd}",
    tag = "Analyzer",
    params(
        ("pwd" = String, Path, description = "URL-encoded password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = AnalyzeResponse)
    )
)]
pub async fn analyze_password_path(
    analyzer: web::Data<PasswordAnalyzer>,
    path: web::Path<String>,
) -> impl Responder {
    let password = path.into_inner();

    // URL decode the password if needed
    let decoded_password = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.to_string(),
        Err(_) => password.clone(),
    };

    let analysis = analyzer.analyze(&decoded_password);

    HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        analysis: Some(analysis),
        error: None,
    })
}
