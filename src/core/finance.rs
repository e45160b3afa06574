//! Finance business logic - the ledger and its monthly statement.
//!
//! Amounts are positive magnitudes; the kind carries the direction. The
//! monthly statement sums per kind over the calendar month and reports
//! `balance = income - expenses`.

use crate::{
    entities::{Finance, finance},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Serialize;
use tracing::instrument;

use super::calendar::month_bounds;

/// Fields for a new ledger entry.
#[derive(Debug, Clone)]
pub struct NewFinance {
    pub kind: finance::FinanceKind,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: Date,
}

/// Income/expense sums for one month.
#[derive(Debug, Clone, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
}

/// One month of transactions with totals and balance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStatement {
    pub transactions: Vec<finance::Model>,
    pub totals: Totals,
    pub balance: f64,
}

/// Returns all transactions of `user_id`, newest first.
pub async fn list_finances(db: &DatabaseConnection, user_id: i64) -> Result<Vec<finance::Model>> {
    Finance::find()
        .filter(finance::Column::UserId.eq(user_id))
        .order_by_desc(finance::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records a transaction for `user_id`.
///
/// # Errors
/// * [`Error::Validation`] - empty description/category, or amount not a
///   positive finite number
#[instrument(skip(db, new_finance), fields(amount = new_finance.amount))]
pub async fn create_finance(
    db: &DatabaseConnection,
    user_id: i64,
    new_finance: NewFinance,
) -> Result<finance::Model> {
    if new_finance.description.trim().is_empty() {
        return Err(Error::validation("Description cannot be empty"));
    }
    if new_finance.category.trim().is_empty() {
        return Err(Error::validation("Category cannot be empty"));
    }
    if !new_finance.amount.is_finite() || new_finance.amount <= 0.0 {
        return Err(Error::validation("Amount must be a positive number"));
    }

    let transaction = finance::ActiveModel {
        kind: Set(new_finance.kind),
        amount: Set(new_finance.amount),
        description: Set(new_finance.description.trim().to_string()),
        category: Set(new_finance.category.trim().to_string()),
        date: Set(new_finance.date),
        user_id: Set(user_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    transaction.insert(db).await.map_err(Into::into)
}

/// Permanently deletes a transaction of `user_id`.
///
/// # Errors
/// * [`Error::NotFound`] - no such transaction for this user
#[instrument(skip(db))]
pub async fn delete_finance(db: &DatabaseConnection, user_id: i64, id: i64) -> Result<()> {
    let transaction = Finance::find_by_id(id)
        .filter(finance::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::NotFound {
            entity: "Transaction",
        })?;
    transaction.delete(db).await?;
    Ok(())
}

/// Transactions and totals of `user_id` for one calendar month.
///
/// Transactions outside the month are excluded; an empty month yields
/// zero totals and zero balance.
pub async fn monthly_statement(
    db: &DatabaseConnection,
    user_id: i64,
    year: i32,
    month: u32,
) -> Result<MonthlyStatement> {
    let (start, end) = month_bounds(year, month)?;

    let transactions = Finance::find()
        .filter(finance::Column::UserId.eq(user_id))
        .filter(finance::Column::Date.gte(start))
        .filter(finance::Column::Date.lte(end))
        .order_by_desc(finance::Column::Date)
        .all(db)
        .await?;

    let mut totals = Totals {
        income: 0.0,
        expenses: 0.0,
    };
    for transaction in &transactions {
        match transaction.kind {
            finance::FinanceKind::Income => totals.income += transaction.amount,
            finance::FinanceKind::Expense => totals.expenses += transaction.amount,
        }
    }
    let balance = totals.income - totals.expenses;

    Ok(MonthlyStatement {
        transactions,
        totals,
        balance,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::finance::FinanceKind;
    use crate::test_utils::{create_test_finance, create_test_user, setup_with_user};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn statement_balance_is_income_minus_expenses() -> Result<()> {
        let (db, user) = setup_with_user().await?;
        let day = date(2024, 6, 15);

        create_test_finance(&db, user.id, FinanceKind::Income, 1000.0, day).await?;
        create_test_finance(&db, user.id, FinanceKind::Income, 250.5, day).await?;
        create_test_finance(&db, user.id, FinanceKind::Expense, 300.25, day).await?;

        let statement = monthly_statement(&db, user.id, 2024, 6).await?;
        assert_eq!(statement.transactions.len(), 3);
        assert_eq!(statement.totals.income, 1250.5);
        assert_eq!(statement.totals.expenses, 300.25);
        assert_eq!(
            statement.balance,
            statement.totals.income - statement.totals.expenses
        );
        Ok(())
    }

    #[tokio::test]
    async fn empty_month_has_zero_balance() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        let statement = monthly_statement(&db, user.id, 2024, 6).await?;
        assert!(statement.transactions.is_empty());
        assert_eq!(statement.totals.income, 0.0);
        assert_eq!(statement.totals.expenses, 0.0);
        assert_eq!(statement.balance, 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn statement_excludes_other_months() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        create_test_finance(&db, user.id, FinanceKind::Income, 100.0, date(2024, 6, 1)).await?;
        create_test_finance(&db, user.id, FinanceKind::Income, 100.0, date(2024, 6, 30)).await?;
        create_test_finance(&db, user.id, FinanceKind::Income, 999.0, date(2024, 5, 31)).await?;
        create_test_finance(&db, user.id, FinanceKind::Income, 999.0, date(2024, 7, 1)).await?;

        let statement = monthly_statement(&db, user.id, 2024, 6).await?;
        assert_eq!(statement.transactions.len(), 2);
        assert_eq!(statement.totals.income, 200.0);
        Ok(())
    }

    #[tokio::test]
    async fn list_is_newest_first() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        create_test_finance(&db, user.id, FinanceKind::Expense, 10.0, date(2024, 6, 1)).await?;
        create_test_finance(&db, user.id, FinanceKind::Expense, 20.0, date(2024, 6, 20)).await?;
        create_test_finance(&db, user.id, FinanceKind::Expense, 30.0, date(2024, 6, 10)).await?;

        let finances = list_finances(&db, user.id).await?;
        let amounts: Vec<f64> = finances.iter().map(|f| f.amount).collect();
        assert_eq!(amounts, vec![20.0, 30.0, 10.0]);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_bad_amounts() -> Result<()> {
        let (db, user) = setup_with_user().await?;

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = create_finance(
                &db,
                user.id,
                NewFinance {
                    kind: FinanceKind::Expense,
                    amount,
                    description: "bad".to_string(),
                    category: "misc".to_string(),
                    date: date(2024, 6, 1),
                },
            )
            .await;
            assert!(
                matches!(result.unwrap_err(), Error::Validation { .. }),
                "amount {amount} should be rejected"
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_scoped_by_user() -> Result<()> {
        let (db, alice) = setup_with_user().await?;
        let bob = create_test_user(&db, "bob@example.com").await?;
        let transaction =
            create_test_finance(&db, alice.id, FinanceKind::Expense, 10.0, date(2024, 6, 1))
                .await?;

        let foreign = delete_finance(&db, bob.id, transaction.id).await;
        assert!(matches!(foreign.unwrap_err(), Error::NotFound { .. }));

        delete_finance(&db, alice.id, transaction.id).await?;
        assert!(list_finances(&db, alice.id).await?.is_empty());
        Ok(())
    }
}
