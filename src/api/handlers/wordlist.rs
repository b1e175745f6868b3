// src/api/handlers/wordlist.rs

use actix_web::{web, HttpResponse, Responder, http::header};
use log::{error, info};
use tempfile::NamedTempFile;

use crate::api::types::{WordlistRequest, WordlistResponse};
use crate::wordlist::{self, WordlistGenerator};

/// Generate a targeted wordlist
///
/// Expands the supplied personal facts into a sorted, deduplicated list of
/// candidate passwords.
#[utoipa::path(
    post,
    path = "/wordlist",
    tag = "Wordlist",
    request_body = WordlistRequest,
    responses(
        (status = 200, description = "Generated wordlist", body = WordlistResponse),
        (status = 400, description = "No usable input", body = WordlistResponse)
    )
)]
pub async fn generate_wordlist(
    generator: web::Data<WordlistGenerator>,
    wordlist_req: web::Json<WordlistRequest>,
) -> impl Responder {
    let options = wordlist_req.into_inner().into_options();

    if options.is_empty() {
        return HttpResponse::BadRequest().json(WordlistResponse {
            success: false,
            words: Vec::new(),
            count: 0,
            error: Some("Please provide at least one input for wordlist generation".to_string()),
        });
    }

    let words = generator.generate(&options);
    info!("Generated wordlist with {} entries", words.len());

    let count = words.len();
    HttpResponse::Ok().json(WordlistResponse {
        success: true,
        words,
        count,
        error: None,
    })
}

/// Download a targeted wordlist
///
/// Same expansion as the JSON endpoint, delivered as a newline-delimited
/// text attachment.
#[utoipa::path(
    post,
    path = "/wordlist/download",
    tag = "Wordlist",
    request_body = WordlistRequest,
    responses(
        (status = 200, description = "Wordlist file", content_type = "text/plain"),
        (status = 400, description = "No usable input", body = WordlistResponse),
        (status = 500, description = "Internal server error", body = WordlistResponse)
    )
)]
pub async fn download_wordlist(
    generator: web::Data<WordlistGenerator>,
    wordlist_req: web::Json<WordlistRequest>,
) -> impl Responder {
    let options = wordlist_req.into_inner().into_options();

    if options.is_empty() {
        return HttpResponse::BadRequest().json(WordlistResponse {
            success: false,
            words: Vec::new(),
            count: 0,
            error: Some("Please provide at least one input for wordlist generation".to_string()),
        });
    }

    let words = generator.generate(&options);
    if words.is_empty() {
        return HttpResponse::BadRequest().json(WordlistResponse {
            success: false,
            words: Vec::new(),
            count: 0,
            error: Some("No words generated. Please check your inputs.".to_string()),
        });
    }

    // Stage the download through a temporary file
    let temp_file = match NamedTempFile::new() {
        Ok(file) => file,
        Err(e) => {
            error!("Failed to create temporary file: {}", e);
            return HttpResponse::InternalServerError().json(WordlistResponse {
                success: false,
                words: Vec::new(),
                count: 0,
                error: Some(format!("Failed to create temporary file: {}", e)),
            });
        }
    };

    if let Err(e) = wordlist::save_wordlist(temp_file.path(), &words) {
        error!("Failed to write wordlist: {}", e);
        return HttpResponse::InternalServerError().json(WordlistResponse {
            success: false,
            words: Vec::new(),
            count: 0,
            error: Some(format!("Failed to write wordlist: {}", e)),
        });
    }

    let content = match std::fs::read_to_string(temp_file.path()) {
        Ok(content) => content,
        Err(e) => {
            error!("Failed to read wordlist file: {}", e);
            return HttpResponse::InternalServerError().json(WordlistResponse {
                success: false,
                words: Vec::new(),
                count: 0,
                error: Some(format!("Failed to read wordlist file: {}", e)),
            });
        }
    };

    info!("Serving wordlist download with {} entries", words.len());

    HttpResponse::Ok()
        .content_type("text/plain")
        .append_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"custom_wordlist.txt\"",
        ))
        .body(content)
}
