use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        program::{
            ProgramBodyDto, ProgramListDto, ProgramQuery, ProgramResponseDto, SessionBodyDto,
            SessionListDto, SessionResponseDto,
        },
    },
    server::{
        controller::util::deleted,
        data::{program::ProgramRepository, session::SessionRepository},
        error::{api::ApiError, Error},
        factory::Factory,
        model::app::AppState,
    },
};

pub static PROGRAM_TAG: &str = "program";

/// List programs, optionally filtered by category
#[utoipa::path(
    get,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    params(ProgramQuery),
    responses(
        (status = 200, description = "Matching programs", body = ProgramListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_programs(
    State(state): State<AppState>,
    Query(query): Query<ProgramQuery>,
) -> Result<impl IntoResponse, Error> {
    let programs = ProgramRepository::new(&state.db)
        .get_all(query.category.as_deref())
        .await?;

    Ok(Json(ProgramListDto {
        programs: programs.into_iter().map(Into::into).collect(),
    }))
}

/// Create a program, generating any field missing from the body
#[utoipa::path(
    post,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    request_body = ProgramBodyDto,
    responses(
        (status = 201, description = "Program created", body = ProgramResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_program(
    State(state): State<AppState>,
    payload: Result<Json<ProgramBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let program = Factory::new(&state.db)
        .create(entity::program::ActiveModel::from(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProgramResponseDto {
            program: program.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/programs/{id}",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 200, description = "The program", body = ProgramResponseDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let program = ProgramRepository::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or(ApiError::not_found("Program", id))?;

    Ok(Json(ProgramResponseDto {
        program: program.into(),
    }))
}

/// Update the fields present in the body, leaving the others unchanged
#[utoipa::path(
    put,
    path = "/api/programs/{id}",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    request_body = ProgramBodyDto,
    responses(
        (status = 200, description = "Program updated", body = ProgramResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_program(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<ProgramBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let program = ProgramRepository::new(&state.db)
        .update(id, body.into())
        .await?
        .ok_or(ApiError::not_found("Program", id))?;

    Ok(Json(ProgramResponseDto {
        program: program.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/programs/{id}",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Program deleted", body = MessageDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_program(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = ProgramRepository::new(&state.db).delete(id).await?;

    deleted("Program", id, result)
}

/// List the sessions of a program
///
/// Returns an empty list for a program without sessions, including one that does not exist.
#[utoipa::path(
    get,
    path = "/api/programs/{id}/sessions",
    tag = PROGRAM_TAG,
    params(("id" = i32, Path, description = "Program ID")),
    responses(
        (status = 200, description = "Sessions of the program", body = SessionListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_program_sessions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let sessions = SessionRepository::new(&state.db)
        .get_by_program_id(id)
        .await?;

    Ok(Json(SessionListDto {
        sessions: sessions.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = PROGRAM_TAG,
    request_body = SessionBodyDto,
    responses(
        (status = 201, description = "Session created", body = SessionResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let session = Factory::new(&state.db)
        .create(entity::session::ActiveModel::from(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponseDto {
            session: session.into(),
        }),
    ))
}
