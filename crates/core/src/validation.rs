//! Input validation helpers built on the `validator` derive.

use validator::Validate;

use crate::error::CoreError;

/// Run the derived validation rules on `input`.
///
/// Collapses every field failure into a single [`CoreError::Validation`]
/// whose message lists the offending fields.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
