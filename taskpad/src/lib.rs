//! `Taskpad` — terminal to-do list library.

pub mod app;
pub mod config;
pub mod ui;
