pub mod components;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod store;

#[cfg(test)]
mod tests;
