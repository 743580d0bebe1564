//! Demo data for local development, enabled with `SEED_DEMO_DATA=true`.
//! Safe to run on every start.

use sqlx::PgPool;

use crate::error::Result;
use crate::utils::crypto::hash_password_blocking;

struct SeedUser<'a> {
    email: &'a str,
    password: &'a str,
}

const ADMIN: SeedUser<'static> = SeedUser {
    email: "admin@example.com",
    password: "AdminPassw0rd!",
};

const HIRING_MANAGER: SeedUser<'static> = SeedUser {
    email: "irene.ryan@example.com",
    password: "ManagerPassw0rd!",
};

const CANDIDATE: SeedUser<'static> = SeedUser {
    email: "maurice.bailey@example.com",
    password: "CandidatePassw0rd!",
};

pub async fn seed_demo_data(pool: &PgPool) -> Result<()> {
    let admin_user = seed_user(pool, &ADMIN).await?;
    let manager_user = seed_user(pool, &HIRING_MANAGER).await?;
    let candidate_user = seed_user(pool, &CANDIDATE).await?;

    seed_staff(pool, admin_user, "Elizabeth Riley", "Head of Talent", true).await?;
    let manager_id =
        seed_staff(pool, manager_user, "Irene Ryan", "Engineering Manager", false).await?;

    sqlx::query(
        r#"
        INSERT INTO candidates (user_id, name, phone_number)
        VALUES ($1, 'Maurice Bailey', '0432043448')
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(candidate_user)
    .execute(pool)
    .await?;

    let has_jobs = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs)")
        .fetch_one(pool)
        .await?;
    if !has_jobs {
        sqlx::query(
            r#"
            INSERT INTO jobs (title, description, department, location, salary_budget, hiring_manager_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind("DevOps Engineer")
        .bind("Own our Kubernetes platform and CI pipelines.")
        .bind("Engineering")
        .bind("Australia (Remote)")
        .bind(140_000)
        .bind(manager_id)
        .execute(pool)
        .await?;
    }

    tracing::info!(
        admin = ADMIN.email,
        hiring_manager = HIRING_MANAGER.email,
        candidate = CANDIDATE.email,
        "Demo data seeded"
    );
    Ok(())
}

async fn seed_user(pool: &PgPool, user: &SeedUser<'_>) -> Result<i32> {
    let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM users WHERE email = $1")
        .bind(user.email)
        .fetch_optional(pool)
        .await?;
    if let Some(id) = existing {
        return Ok(id);
    }

    let hash = hash_password_blocking(user.password.to_string()).await?;
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(user.email)
    .bind(hash)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

async fn seed_staff(pool: &PgPool, user_id: i32, name: &str, title: &str, admin: bool) -> Result<i32> {
    sqlx::query(
        r#"
        INSERT INTO staff (user_id, name, title, admin)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(title)
    .bind(admin)
    .execute(pool)
    .await?;

    let id = sqlx::query_scalar::<_, i32>("SELECT id FROM staff WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(id)
}
