use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::TutorRequest, response::ContentResponse},
};

#[post("/api/tutor")]
pub async fn ask_tutor(
    state: web::Data<AppState>,
    request: web::Json<TutorRequest>,
) -> Result<HttpResponse, AppError> {
    let content = state.tutor_service.answer(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ContentResponse::from(content)))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
