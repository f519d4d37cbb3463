//! Frontend module for the file portal application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
