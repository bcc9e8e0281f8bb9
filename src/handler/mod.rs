pub mod bfhl;
pub mod fallback;
pub mod health;
