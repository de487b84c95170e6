//! One parameterized statement per operation. Nothing here retries or
//! wraps statements in explicit transactions; each write is a single
//! implicitly atomic statement.

use sqlx::SqlitePool;

use super::manager::DatabaseError;
use super::models::{District, NewDistrict, State, StateStats, User};

pub async fn find_user(pool: &SqlitePool, username: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT username, name, password, gender, location FROM user WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

pub async fn insert_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    name: Option<&str>,
    gender: Option<&str>,
    location: Option<&str>,
) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO user (username, name, password, gender, location) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(username)
    .bind(name)
    .bind(password_hash)
    .bind(gender)
    .bind(location)
    .execute(pool)
    .await?;
    Ok(())
}

/// All states in store order
pub async fn list_states(pool: &SqlitePool) -> Result<Vec<State>, DatabaseError> {
    let states = sqlx::query_as::<_, State>("SELECT state_id, state_name, population FROM state")
        .fetch_all(pool)
        .await?;
    Ok(states)
}

pub async fn get_state(pool: &SqlitePool, state_id: i64) -> Result<Option<State>, DatabaseError> {
    let state = sqlx::query_as::<_, State>(
        "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
    )
    .bind(state_id)
    .fetch_optional(pool)
    .await?;
    Ok(state)
}

/// Insert a state row. Not reachable over HTTP; used for seeding.
pub async fn insert_state(pool: &SqlitePool, state: &State) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO state (state_id, state_name, population) VALUES (?, ?, ?)")
        .bind(state.state_id)
        .bind(&state.state_name)
        .bind(state.population)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn state_stats(pool: &SqlitePool, state_id: i64) -> Result<StateStats, DatabaseError> {
    let stats = sqlx::query_as::<_, StateStats>(
        r#"
        SELECT
            SUM(cases) AS total_cases,
            SUM(cured) AS total_cured,
            SUM(active) AS total_active,
            SUM(deaths) AS total_deaths
        FROM district
        WHERE state_id = ?
        "#,
    )
    .bind(state_id)
    .fetch_one(pool)
    .await?;
    Ok(stats)
}

/// Insert a district and return its new id
pub async fn create_district(pool: &SqlitePool, district: &NewDistrict) -> Result<i64, DatabaseError> {
    let result = sqlx::query(
        r#"
        INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&district.district_name)
    .bind(district.state_id)
    .bind(district.cases)
    .bind(district.cured)
    .bind(district.active)
    .bind(district.deaths)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn get_district(pool: &SqlitePool, district_id: i64) -> Result<Option<District>, DatabaseError> {
    let district = sqlx::query_as::<_, District>(
        r#"
        SELECT district_id, district_name, state_id, cases, cured, active, deaths
        FROM district
        WHERE district_id = ?
        "#,
    )
    .bind(district_id)
    .fetch_optional(pool)
    .await?;
    Ok(district)
}

/// Overwrite every column of a district. Returns the number of rows touched (0 or 1).
pub async fn update_district(
    pool: &SqlitePool,
    district_id: i64,
    district: &NewDistrict,
) -> Result<u64, DatabaseError> {
    let result = sqlx::query(
        r#"
        UPDATE district
        SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
        WHERE district_id = ?
        "#,
    )
    .bind(&district.district_name)
    .bind(district.state_id)
    .bind(district.cases)
    .bind(district.cured)
    .bind(district.active)
    .bind(district.deaths)
    .bind(district_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Returns the number of rows removed; deleting a missing id is not an error
pub async fn delete_district(pool: &SqlitePool, district_id: i64) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
        .bind(district_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
