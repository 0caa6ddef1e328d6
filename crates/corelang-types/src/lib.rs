//! Shared types for the Core language.
//!
//! This crate defines the expression tree handed to the evaluator by an
//! external parser or driver.

pub mod ast;

pub use ast::{BinOp, Expr, FunDef, Program, UnaryOp};
