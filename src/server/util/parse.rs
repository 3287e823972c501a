use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a resource id taken from a path segment.
///
/// An id that is not a UUID cannot name any row, so it is reported the same way as
/// an id that names a missing row.
///
/// # Arguments
/// - `value` - The path segment to parse
/// - `resource` - Name used in the not found message
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - The segment is not a UUID
pub fn parse_id(value: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim()).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}

/// Trims a required text field, rejecting blank input.
pub fn require_text(value: &str, field: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value.to_string())
}
