pub mod auth;
pub mod visitor_service;
