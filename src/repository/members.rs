//! Members repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberFields},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List one page of members
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT * FROM members ORDER BY created_time LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(members)
    }

    /// Count all members
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Create a new member; the store assigns timestamps and the version token
    pub async fn create(&self, fields: &MemberFields) -> AppResult<Member> {
        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, given_name, surname) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&fields.given_name)
        .bind(&fields.surname)
        .fetch_one(&self.pool)
        .await?;
        Ok(member)
    }

    /// Update a member, returning the refreshed record
    pub async fn update(&self, id: Uuid, fields: &MemberFields) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET given_name = $1, surname = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&fields.given_name)
        .bind(&fields.surname)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Delete a member. Idempotent; existing loans keep a null borrower
    /// reference via the foreign key's SET NULL behavior.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
