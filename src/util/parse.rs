use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake read back from storage.
///
/// Surrounding whitespace is ignored, so values written by hand or with a trailing
/// newline still parse.
///
/// # Arguments
/// - `column` - Where the value was stored, for the error message
/// - `value` - The stored text
///
/// # Returns
/// - `Ok(u64)` - The snowflake
/// - `Err(AppError::InternalErr(CorruptStoredId))` - Not a `u64`
pub fn parse_stored_id(column: &'static str, value: String) -> Result<u64, AppError> {
    match value.trim().parse::<u64>() {
        Ok(id) => Ok(id),
        Err(source) => Err(InternalError::CorruptStoredId {
            column,
            value,
            source,
        }
        .into()),
    }
}
