use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::prompts::HELPER_PROMPTS,
    errors::AppError,
    models::dto::{
        request::{EvaluateRequest, RephraseRequest, StartRequest},
        response::{EvaluateResponse, RephraseResponse, StartResponse},
    },
};

#[post("/api/start")]
async fn start(
    state: web::Data<AppState>,
    request: web::Json<StartRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let question = state
        .tutor_service
        .start(&request.prompt, request.current_level)
        .await?;

    Ok(HttpResponse::Ok().json(StartResponse {
        question,
        helper_prompts: HELPER_PROMPTS.iter().map(|s| s.to_string()).collect(),
    }))
}

#[post("/api/evaluate")]
async fn evaluate(
    state: web::Data<AppState>,
    request: web::Json<EvaluateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let result = state
        .tutor_service
        .evaluate(
            &request.answer,
            &request.initial_prompt,
            request.current_level,
            &request.history,
        )
        .await?;

    Ok(HttpResponse::Ok().json(EvaluateResponse::from(result)))
}

#[post("/api/rephrase")]
async fn rephrase(
    state: web::Data<AppState>,
    request: web::Json<RephraseRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let rephrased_question = state
        .tutor_service
        .rephrase(&request.current_question)
        .await?;

    Ok(HttpResponse::Ok().json(RephraseResponse { rephrased_question }))
}

#[get("/")]
async fn root(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().body(format!("Server running in {} mode", state.config.run_mode))
}
