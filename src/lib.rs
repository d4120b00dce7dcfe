//! A small product catalog: a password-gated admin panel for managing
//! products and a public storefront listing what is in stock.

pub mod auth;
pub mod config;
pub mod cookies;
pub mod database;
pub mod dtos;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod views;

pub use routes::create_router;
