pub mod health;
pub mod instruments;
pub mod wellness;
