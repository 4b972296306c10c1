//! Subcommands and the line driver behind the `htok` binary.
pub mod generate;
pub mod tokenize;
