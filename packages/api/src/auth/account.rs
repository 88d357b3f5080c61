//! Local account creation behind the `register` server function.

use registration::{validate_request, RegistrationRequest, ValidationError};
use sqlx::PgPool;
use thiserror::Error;

use super::password::hash_password;
use crate::models::User;

/// Why an account could not be created. `Display` is shown to the user.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("An account with this email already exists")]
    EmailTaken,
    #[error("This username is taken")]
    UsernameTaken,
    #[error("{0}")]
    Hash(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Map a `UNIQUE` constraint name on `users` to the matching error.
fn taken_by_constraint(constraint: Option<&str>) -> Option<AuthError> {
    match constraint? {
        "users_email_key" => Some(AuthError::EmailTaken),
        "users_username_key" => Some(AuthError::UsernameTaken),
        _ => None,
    }
}

/// A concurrent sign-up can pass the duplicate checks and then lose the
/// insert on a unique violation (SQLSTATE 23505).
fn insert_error(err: sqlx::Error) -> AuthError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(taken) = taken_by_constraint(db_err.constraint()) {
                return taken;
            }
        }
    }
    AuthError::Database(err)
}

/// Trim the user-entered fields and lowercase the email.
pub fn normalize(mut request: RegistrationRequest) -> RegistrationRequest {
    request.email = request.email.trim().to_lowercase();
    request.username = request.username.trim().to_string();
    request.location = request.location.trim().to_string();
    request
}

/// Validate, check for duplicates, hash the password and insert the user.
pub async fn create_local_user(pool: &PgPool, request: RegistrationRequest) -> Result<User, AuthError> {
    let request = normalize(request);
    validate_request(&request)?;

    let email_taken: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&request.email)
        .fetch_optional(pool)
        .await?;
    if email_taken.is_some() {
        return Err(AuthError::EmailTaken);
    }

    let username_taken: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE username = $1")
        .bind(&request.username)
        .fetch_optional(pool)
        .await?;
    if username_taken.is_some() {
        return Err(AuthError::UsernameTaken);
    }

    let password_hash = hash_password(&request.password).map_err(AuthError::Hash)?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (email, username, location, password_hash, member_since) VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&request.email)
    .bind(&request.username)
    .bind(&request.location)
    .bind(&password_hash)
    .bind(request.member_since)
    .fetch_one(pool)
    .await
    .map_err(insert_error)?;

    tracing::info!(user_id = %user.id, username = %user.username, "registered new user");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use registration::Field;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            username: "  ada_l ".to_string(),
            email: " Ada@Example.COM ".to_string(),
            password: " engine ".to_string(),
            location: " London ".to_string(),
            member_since: Utc::now(),
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let normalized = normalize(request());
        assert_eq!(normalized.email, "ada@example.com");
        assert_eq!(normalized.username, "ada_l");
        assert_eq!(normalized.location, "London");
        // Passwords are compared untrimmed on the client, so keep them as sent.
        assert_eq!(normalized.password, " engine ");
    }

    #[test]
    fn test_validation_error_message_passes_through() {
        let err = AuthError::from(ValidationError(Field::Location));
        assert_eq!(err.to_string(), "Location is required.");
        assert_eq!(AuthError::EmailTaken.to_string(), "An account with this email already exists");
    }

    #[test]
    fn test_unique_constraints_map_to_taken_errors() {
        assert!(matches!(
            taken_by_constraint(Some("users_email_key")),
            Some(AuthError::EmailTaken)
        ));
        assert!(matches!(
            taken_by_constraint(Some("users_username_key")),
            Some(AuthError::UsernameTaken)
        ));
        assert!(taken_by_constraint(Some("users_pkey")).is_none());
        assert!(taken_by_constraint(None).is_none());
    }

    #[test]
    fn test_non_database_insert_errors_stay_database_errors() {
        let err = insert_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AuthError::Database(sqlx::Error::RowNotFound)));
    }
}
