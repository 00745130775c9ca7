//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use commerce_types::{
    CreatePaymentRequest, CreateUserRequest, Payment, PaymentId, PaymentRepository, RepoError,
    UpdatePaymentRequest, UpdateUserRequest, User, UserId, UserRepository,
};

use crate::types::{DbPayment, DbUser};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        tracing::debug!("SQLite repository initialized");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
        let now = chrono::Utc::now();
        let status_str = req.status.to_string();
        let created_at_str = now.to_rfc3339();

        let result = sqlx::query(
            r#"INSERT INTO payments (order_id, is_paid, status, created_at) VALUES (?, ?, ?, ?)"#,
        )
        .bind(req.order_id.get())
        .bind(req.is_paid)
        .bind(&status_str)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(Payment::from_parts(
            PaymentId::new(result.last_insert_rowid()),
            req.order_id,
            req.is_paid,
            req.status,
            now,
        ))
    }

    async fn find_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT id, order_id, is_paid, status, created_at FROM payments WHERE id = ?"#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbPayment::into_domain).transpose()
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
        let rows: Vec<DbPayment> = sqlx::query_as(
            r#"SELECT id, order_id, is_paid, status, created_at FROM payments ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbPayment::into_domain).collect()
    }

    async fn update_payment(
        &self,
        id: PaymentId,
        req: UpdatePaymentRequest,
    ) -> Result<Payment, RepoError> {
        let status_str = req.status.to_string();

        let result = sqlx::query(r#"UPDATE payments SET is_paid = ?, status = ? WHERE id = ?"#)
            .bind(req.is_paid)
            .bind(&status_str)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        self.find_payment(id).await?.ok_or(RepoError::NotFound)
    }

    async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = ?"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn create_user(&self, req: CreateUserRequest) -> Result<User, RepoError> {
        let now = chrono::Utc::now();
        let created_at_str = now.to_rfc3339();

        let result = sqlx::query(
            r#"INSERT INTO users (first_name, last_name, email, created_at) VALUES (?, ?, ?, ?)"#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&created_at_str)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(User::from_parts(
            UserId::new(result.last_insert_rowid()),
            req.first_name,
            req.last_name,
            req.email,
            now,
        ))
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> = sqlx::query_as(
            r#"SELECT id, first_name, last_name, email, created_at FROM users WHERE id = ?"#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(DbUser::into_domain).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        let rows: Vec<DbUser> = sqlx::query_as(
            r#"SELECT id, first_name, last_name, email, created_at FROM users ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbUser::into_domain).collect()
    }

    async fn update_user(&self, id: UserId, req: UpdateUserRequest) -> Result<User, RepoError> {
        let result = sqlx::query(
            r#"UPDATE users SET first_name = ?, last_name = ?, email = ? WHERE id = ?"#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        self.find_user(id).await?.ok_or(RepoError::NotFound)
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = ?"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
