pub mod config;
pub mod gallery;
pub mod icon;
pub mod matching;
pub mod models;
pub mod quiz_builder;
pub mod scanner;
