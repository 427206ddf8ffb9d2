use axum::Json;
use sea_orm::DeleteResult;

use crate::{
    model::api::MessageDto,
    server::error::{api::ApiError, Error},
};

/// Turn a delete result into the deletion response, or 404 if no record was removed.
pub fn deleted(
    resource: &'static str,
    id: i32,
    result: DeleteResult,
) -> Result<Json<MessageDto>, Error> {
    if result.rows_affected == 0 {
        return Err(ApiError::not_found(resource, id).into());
    }

    Ok(Json(MessageDto {
        message: format!("{} {} deleted", resource, id),
    }))
}
