//! User lookup and registration operations.

use sqlx::PgPool;

use crate::models::{NewUser, UserRow};
use crate::DbError;

const USER_SELECT: &str = "SELECT id, name, email, password FROM users";

/// Fetch a single user by email address (exact match).
///
/// Returns `Ok(None)` when no such user exists; store failures surface as
/// `Err` so callers can tell the two apart.
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(&format!("{USER_SELECT} WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Fetch a single user by primary key.
pub async fn get_user_by_id(pool: &PgPool, id: i32) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(&format!("{USER_SELECT} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Insert a new user and return the generated id.
pub async fn create_user(pool: &PgPool, user: &NewUser) -> Result<i32, DbError> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
