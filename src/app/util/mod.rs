pub mod sqlx;
pub mod time;
