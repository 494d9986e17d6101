use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the jobs table exists. The store owns id assignment, the status
/// value set, and the created_at/updated_at timestamps.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            company TEXT NOT NULL CHECK (company <> ''),
            position TEXT NOT NULL CHECK (position <> ''),
            status TEXT NOT NULL DEFAULT 'Applied'
                CHECK (status IN ('Applied', 'Interview', 'Offer', 'Rejected')),
            link TEXT NOT NULL CHECK (link <> ''),
            date_applied DATE NOT NULL DEFAULT CURRENT_DATE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema ensured (jobs)");
    Ok(())
}
