pub mod account;
pub mod auth;
pub mod model;
pub mod post;
