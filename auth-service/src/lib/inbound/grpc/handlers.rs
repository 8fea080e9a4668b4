use tonic::Status;

use crate::domain::session::errors::AuthError;

pub mod login;
pub mod logout;
pub mod refresh_access_token;
pub mod validate;

// Wire translation of classified errors. The carried message is already
// caller-safe; diagnostics stay in the server logs.
impl From<AuthError> for Status {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Validation(message) => Status::invalid_argument(message),
            AuthError::Authentication(message) => Status::unauthenticated(message),
            AuthError::Availability(message) => Status::unavailable(message),
            AuthError::Internal(message) => Status::internal(message),
        }
    }
}
