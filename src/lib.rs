//! `solara-imaging`: binary entry points and process bootstrap.

pub mod bootstrap;
pub mod cli;
