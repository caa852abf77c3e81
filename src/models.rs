pub mod auth;
pub mod visitor;
