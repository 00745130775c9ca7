//! PostgreSQL repository adapter.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use commerce_types::{
    CreatePaymentRequest, CreateUserRequest, Payment, PaymentId, PaymentRepository, RepoError,
    UpdatePaymentRequest, UpdateUserRequest, User, UserId, UserRepository,
};

use crate::types::{DbPayment, DbUser};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_tables_pg.sql"),
        "0001",
    )
    .await?;

    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;

        tracing::debug!("PostgreSQL repository initialized");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Creates the database schema (for testing with existing pool).
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        run_migrations(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for PostgresRepo {
    async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, RepoError> {
        let status_str = req.status.to_string();
        let now = Utc::now();

        let row: DbPayment = sqlx::query_as(
            r#"INSERT INTO payments (order_id, is_paid, status, created_at)
               VALUES ($1, $2, $3, $4)
               RETURNING id, order_id, is_paid, status, created_at"#,
        )
        .bind(req.order_id.get())
        .bind(req.is_paid)
        .bind(&status_str)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.into_domain()
    }

    async fn find_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT id, order_id, is_paid, status, created_at FROM payments WHERE id = $1"#,
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

        let row: Option<DbPayment> = sqlx::query_as(
            r#"UPDATE payments SET is_paid = $1, status = $2 WHERE id = $3
               RETURNING id, order_id, is_paid, status, created_at"#,
        )
        .bind(req.is_paid)
        .bind(&status_str)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.ok_or(RepoError::NotFound)?.into_domain()
    }

    async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = $1"#)
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
impl UserRepository for PostgresRepo {
    async fn create_user(&self, req: CreateUserRequest) -> Result<User, RepoError> {
        let now = Utc::now();

        let row: DbUser = sqlx::query_as(
            r#"INSERT INTO users (first_name, last_name, email, created_at)
               VALUES ($1, $2, $3, $4)
               RETURNING id, first_name, last_name, email, created_at"#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.into_domain()
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> = sqlx::query_as(
            r#"SELECT id, first_name, last_name, email, created_at FROM users WHERE id = $1"#,
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
        let row: Option<DbUser> = sqlx::query_as(
            r#"UPDATE users SET first_name = $1, last_name = $2, email = $3 WHERE id = $4
               RETURNING id, first_name, last_name, email, created_at"#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        row.ok_or(RepoError::NotFound)?.into_domain()
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
