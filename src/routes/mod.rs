pub mod chat;
pub mod health_checks;
mod home;

pub use health_checks::*;
pub use home::*;
