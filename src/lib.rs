//! tsctl - Qt Linguist catalog toolkit
//!
//! tsctl is a CLI tool and library for Qt Linguist `.ts` translation catalogs.
//! It loads catalogs into an immutable string table (lookup by context and
//! source text, falling back to the source), and checks catalogs for broken
//! placeholders, duplicate entries, unfinished and untranslated messages.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and report output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, `.ts` parser, placeholders and the string table
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules for catalog issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
