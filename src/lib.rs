pub mod config;
pub mod error;
pub mod humanize;
pub mod models;
pub mod routes;
pub mod services;
pub mod skill;
pub mod state;
