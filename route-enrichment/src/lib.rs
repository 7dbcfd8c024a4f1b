pub mod app;
pub mod config;
pub mod model;
pub mod pipeline;
pub mod presentation;
pub mod service;
pub mod store;
