use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub const STATUS_MESSAGE: &str = "Edu-Kit Gemini API running!";

pub async fn handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": STATUS_MESSAGE }))
}
