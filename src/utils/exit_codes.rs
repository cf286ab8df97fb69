//! Exit code mapping

use super::validators::ValidationError;
use crate::commands::validators::CommandValidationError;

/// Normal completion, including early aborts on local validation
pub const SUCCESS: i32 = 0;

/// Any API, transport or configuration file failure
pub const GENERAL_ERROR: i32 = 1;

/// Exit code for an error that ended the run
///
/// Local validation problems, including rejected `add` arguments, are
/// reported but are not failures. Everything else, including every
/// [`seedpr_github::ApiError`], exits with 1.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ValidationError>().is_some()
        || error.downcast_ref::<CommandValidationError>().is_some()
    {
        SUCCESS
    } else {
        GENERAL_ERROR
    }
}
