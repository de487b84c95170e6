use serde::Serialize;
use sqlx::FromRow;

/// Login account. Rows are created out-of-band (see the `portal user add` command).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub username: String,
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password: String,
    pub gender: Option<String>,
    pub location: Option<String>,
}
