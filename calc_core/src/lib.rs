//! # calc_core - Scientific Calculator Operation Library
//!
//! `calc_core` provides the pure computational half of the calculator:
//! square root, factorial, natural logarithm, and power, each validating its
//! own domain and signaling failure through structured errors.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **No I/O**: The library signals errors; the shell renders messages
//! - **JSON-First**: Public types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::operations::{factorial, square_root};
//!
//! assert_eq!(square_root(16.0).unwrap(), 4.0);
//! assert_eq!(factorial(20).unwrap(), 2432902008176640000);
//! assert!(factorial(21).is_err()); // 21! exceeds i64
//! ```
//!
//! ## Modules
//!
//! - [`operations`] - The four scientific operations and the request enum
//! - [`errors`] - Structured error types

pub mod errors;
pub mod operations;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use operations::{factorial, natural_log, power, square_root, Number, Operation};
