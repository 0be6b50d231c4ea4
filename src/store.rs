use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::model::vacation_request::{Status, VacationRequest};

/// Fields required to persist a new request. Status and creation time are
/// assigned by the store, never by the caller.
pub struct NewVacation {
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize, sqlx::FromRow, ToSchema)]
pub struct StatusCounts {
    #[schema(example = 3)]
    pub total: i64,
    #[schema(example = 1)]
    pub pending: i64,
    #[schema(example = 1)]
    pub approved: i64,
    #[schema(example = 1)]
    pub rejected: i64,
}

/// All persistence operations for vacation requests. The store owns the pool
/// and is cloned into each worker via `web::Data`.
#[derive(Clone)]
pub struct VacationStore {
    pool: SqlitePool,
}

impl VacationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List requests, newest first. `status` matches exactly (an unknown
    /// value simply matches nothing); `employee` is a case-sensitive
    /// substring match, so `instr` rather than `LIKE`.
    pub async fn list(
        &self,
        status: Option<&str>,
        employee: Option<&str>,
    ) -> sqlx::Result<Vec<VacationRequest>> {
        let mut where_sql = String::from(" WHERE 1=1");
        let mut args: Vec<&str> = Vec::new();

        if let Some(status) = status {
            where_sql.push_str(" AND status = ?");
            args.push(status);
        }

        if let Some(employee) = employee {
            where_sql.push_str(" AND instr(employee_name, ?) > 0");
            args.push(employee);
        }

        let sql = format!(
            r#"
            SELECT id, employee_name, start_date, end_date, status, created_at
            FROM vacation_requests
            {}
            ORDER BY created_at DESC, id DESC
            "#,
            where_sql
        );

        let mut query = sqlx::query_as::<_, VacationRequest>(&sql);
        for arg in args {
            query = query.bind(arg);
        }

        query.fetch_all(&self.pool).await
    }

    pub async fn get(&self, id: i64) -> sqlx::Result<Option<VacationRequest>> {
        sqlx::query_as::<_, VacationRequest>(
            r#"
            SELECT id, employee_name, start_date, end_date, status, created_at
            FROM vacation_requests
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert with status `pending` and the current UTC timestamp, then read
    /// the row back so the caller sees exactly what was persisted.
    pub async fn insert(&self, new: NewVacation) -> sqlx::Result<VacationRequest> {
        let created_at: DateTime<Utc> = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO vacation_requests
                (employee_name, start_date, end_date, status, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.employee_name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(Status::Pending)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get(id).await?.ok_or(sqlx::Error::RowNotFound)
    }

    /// Overwrite the status column only. Returns `None` when no row has the
    /// given id.
    pub async fn set_status(&self, id: i64, status: Status) -> sqlx::Result<Option<VacationRequest>> {
        let result = sqlx::query("UPDATE vacation_requests SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(id).await
    }

    /// Overwrite the mutable columns in one statement. Status and creation
    /// time are never touched here.
    pub async fn update_fields(
        &self,
        id: i64,
        employee_name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> sqlx::Result<Option<VacationRequest>> {
        let result = sqlx::query(
            r#"
            UPDATE vacation_requests
            SET employee_name = ?, start_date = ?, end_date = ?
            WHERE id = ?
            "#,
        )
        .bind(employee_name)
        .bind(start_date)
        .bind(end_date)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM vacation_requests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn stats(&self) -> sqlx::Result<StatusCounts> {
        sqlx::query_as::<_, StatusCounts>(
            r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(SUM(status = 'pending'), 0) AS pending,
                COALESCE(SUM(status = 'approved'), 0) AS approved,
                COALESCE(SUM(status = 'rejected'), 0) AS rejected
            FROM vacation_requests
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }
}
