pub mod assays;
pub mod diagnose;
pub mod health;
pub mod rules;
pub mod taxonomy;
