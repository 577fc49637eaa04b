//! User repository.

use picto_core::entities::{NewUser, User};

use crate::error::DatabaseError;
use crate::helpers::{collect_rows, first_row};
use crate::service::PictoService;

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        username: row.get::<String>(1)?,
        first_name: row.get::<String>(2)?,
        last_name: row.get::<String>(3)?,
        email: row.get::<String>(4)?,
    })
}

impl PictoService {
    /// Insert a user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Constraint` if the email is taken or a field
    /// exceeds its declared length.
    pub async fn create_user(&self, new: NewUser) -> Result<User, DatabaseError> {
        let id = self
            .db()
            .insert(
                "INSERT INTO user (username, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    new.username.as_str(),
                    new.first_name.as_str(),
                    new.last_name.as_str(),
                    new.email.as_str()
                ],
            )
            .await?;
        tracing::debug!(user_id = id, "created user");
        Ok(new.with_id(id))
    }

    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, username, first_name, last_name, email FROM user WHERE id = ?1",
                [id],
            )
            .await?;
        first_row(rows, row_to_user).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, username, first_name, last_name, email FROM user WHERE email = ?1",
                [email],
            )
            .await?;
        first_row(rows, row_to_user).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                "SELECT id, username, first_name, last_name, email FROM user ORDER BY id",
                (),
            )
            .await?;
        collect_rows(rows, row_to_user).await
    }
}
