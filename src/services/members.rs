//! Member management service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::member::{Member, MemberFields},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List one page of members plus the total count
    pub async fn list(&self, limit: i64, offset: i64) -> AppResult<(Vec<Member>, i64)> {
        let members = self.repository.members.list(limit, offset).await?;
        let total = self.repository.members.count().await?;
        Ok((members, total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    pub async fn create(&self, fields: &MemberFields) -> AppResult<Member> {
        self.repository.members.create(fields).await
    }

    pub async fn update(&self, id: Uuid, fields: &MemberFields) -> AppResult<Member> {
        self.repository.members.update(id, fields).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.members.delete(id).await
    }
}
