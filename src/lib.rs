pub mod auth;
pub mod client;
pub mod config;
pub mod console;
pub mod db;
pub mod gallery;
pub mod handlers;
pub mod models;
pub mod server;
pub mod site;
pub mod storage;

pub use db::create_pool;
