//! Build and run Windows `mklink` commands.
//!
//! Turns a target path, a link path and a link type into the exact
//! `mklink` command line, and runs it either directly (capturing and
//! decoding its output) or in a new elevated console.
//!
//! The public API is organised into layers:
//!
//! - **[`link`]** and **[`i18n`]**: link types, their flags and labels
//! - **[`command`]**: pure synthesis of the `mklink` command line
//! - **[`exec`]**: running a built command, directly or elevated
//! - **[`config`]**: TOML configuration and the saved language preference
//! - **[`commands`]**: top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod i18n;
pub mod link;
pub mod logging;
pub mod platform;
