//! Idempotent table setup for the Postgres backend

use sqlx::PgPool;
use tracing::info;

use super::store::StoreError;

pub async fn run(pool: &PgPool) -> Result<(), StoreError> {
    info!("Running content migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS faqs (
            id TEXT PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'general',
            "order" INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(r#"CREATE INDEX IF NOT EXISTS faqs_category_order_idx ON faqs (category, "order")"#)
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tech_stacks (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            icon TEXT,
            category TEXT NOT NULL,
            proficiency INTEGER NOT NULL CHECK (proficiency BETWEEN 0 AND 100),
            color TEXT,
            description TEXT,
            years INTEGER CHECK (years >= 0),
            projects INTEGER CHECK (projects >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            name TEXT NOT NULL,
            position TEXT,
            avatar TEXT,
            company TEXT,
            rating INTEGER CHECK (rating BETWEEN 1 AND 5),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Content migrations complete");
    Ok(())
}
