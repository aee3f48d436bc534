//! Business logic services

pub mod books;
pub mod loan_policy;
pub mod loans;
pub mod members;

use sqlx::{Pool, Postgres};

use crate::{config::LoansConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
    pub loan_policy: loan_policy::LoanPolicyService,
    pool: Pool<Postgres>,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, loans_config: LoansConfig) -> Self {
        let loan_policy =
            loan_policy::LoanPolicyService::new(repository.clone(), loans_config.max_outstanding);
        Self {
            books: books::BooksService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            pool: repository.pool.clone(),
            loans: loans::LoansService::new(repository, loan_policy.clone()),
            loan_policy,
        }
    }

    /// Verify the database is reachable
    pub async fn ping_database(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
