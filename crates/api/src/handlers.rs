pub mod health;
pub mod quotes;
