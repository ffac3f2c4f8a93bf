// ABOUTME: Library crate for botdesk exposing the wizard, dashboard and TUI shell for testing

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod error;
pub mod integration;
pub mod models;
pub mod pricing;
