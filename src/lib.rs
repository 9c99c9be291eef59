pub mod app;
pub mod authoring;
pub mod config;
pub mod data;
pub mod grading;
pub mod identity;
pub mod model;
pub mod notices;
pub mod runner;
pub mod server;
pub mod store;
pub mod ui;
pub mod validation;
pub mod view_models;

pub use app::QuizApp;
