//! Checkout permission evaluation

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{error::AppResult, models::book_loan::BookLoan, repository::Repository};

/// Whether a member may check out another book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum CheckOutPermission {
    /// The member is allowed to check out more books
    Allowed,
    /// The member has at least one overdue outstanding loan
    HasOverdue,
    /// The member has reached the outstanding-loan limit
    MaximumReached,
}

#[derive(Clone)]
pub struct LoanPolicyService {
    repository: Repository,
    max_outstanding: usize,
}

impl LoanPolicyService {
    pub fn new(repository: Repository, max_outstanding: usize) -> Self {
        Self {
            repository,
            max_outstanding,
        }
    }

    /// Evaluate the checkout permission for a member against their
    /// outstanding loans. Pure read; mutates nothing. An unknown member has
    /// zero outstanding loans and is therefore allowed.
    pub async fn check_out_permission(&self, member_id: Uuid) -> AppResult<CheckOutPermission> {
        let outstanding = self
            .repository
            .book_loans
            .list_by_member(member_id, true)
            .await?;
        Ok(evaluate(
            &outstanding,
            self.max_outstanding,
            Utc::now().date_naive(),
        ))
    }
}

/// The limit check runs first so a member who is both at the limit and
/// overdue reports `MaximumReached`. Overdue comparison is calendar-date
/// granularity: a loan due today is not overdue.
fn evaluate(
    outstanding: &[BookLoan],
    max_outstanding: usize,
    today: NaiveDate,
) -> CheckOutPermission {
    if outstanding.len() >= max_outstanding {
        CheckOutPermission::MaximumReached
    } else if outstanding
        .iter()
        .any(|loan| loan.due_date.date_naive() < today)
    {
        CheckOutPermission::HasOverdue
    } else {
        CheckOutPermission::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveTime, TimeZone, Utc};

    const LIMIT: usize = 5;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap()))
    }

    fn loan_due(due_date: DateTime<Utc>) -> BookLoan {
        BookLoan {
            id: Uuid::new_v4(),
            member_id: Some(Uuid::new_v4()),
            book_id: Some(Uuid::new_v4()),
            loan_time: at(today(), 9),
            due_date,
            returned_time: None,
            last_modified_time: at(today(), 9),
            version: vec![0x01],
        }
    }

    fn loans_due_in(days: i64, count: usize) -> Vec<BookLoan> {
        let due = at(today() + chrono::Duration::days(days), 12);
        (0..count).map(|_| loan_due(due)).collect()
    }

    #[test]
    fn no_outstanding_loans_is_allowed() {
        assert_eq!(evaluate(&[], LIMIT, today()), CheckOutPermission::Allowed);
    }

    #[test]
    fn under_limit_with_no_overdue_is_allowed() {
        let loans = loans_due_in(7, 3);
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::Allowed
        );
    }

    #[test]
    fn at_limit_reports_maximum_reached() {
        let loans = loans_due_in(7, LIMIT);
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::MaximumReached
        );
    }

    #[test]
    fn over_limit_reports_maximum_reached() {
        let loans = loans_due_in(7, LIMIT + 2);
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::MaximumReached
        );
    }

    #[test]
    fn overdue_loan_under_limit_reports_has_overdue() {
        let mut loans = loans_due_in(7, 2);
        loans.extend(loans_due_in(-2, 1));
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::HasOverdue
        );
    }

    #[test]
    fn limit_check_takes_precedence_over_overdue() {
        let loans = loans_due_in(-2, LIMIT);
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::MaximumReached
        );
    }

    #[test]
    fn due_today_is_not_overdue() {
        // Same calendar date, earlier time of day: still due today.
        let loans = vec![loan_due(at(today(), 0))];
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::Allowed
        );
    }

    #[test]
    fn due_yesterday_is_overdue() {
        let loans = loans_due_in(-1, 1);
        assert_eq!(
            evaluate(&loans, LIMIT, today()),
            CheckOutPermission::HasOverdue
        );
    }
}
