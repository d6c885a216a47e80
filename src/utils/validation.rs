use crate::errors::AppError;

/// Parse a path id. Only positive integers can name a stored row.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest(format!("invalid id: {}", raw)))
}
