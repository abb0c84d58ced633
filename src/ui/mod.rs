//! Terminal front end.
//!
//! `App` composes the query controller and the cart; `runtime::run` drives
//! it from terminal input and fetch results on a single task.

pub mod app;
pub mod cart;
pub mod catalog;
pub mod events;
pub mod filters;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
