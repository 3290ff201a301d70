//! Core types for cyclebench.
//!
//! Defines the six benchmarked [`Operation`]s and the two [`Strategy`]
//! implementations that are timed against each other:
//!
//! - [`Imperative`]: explicit `for` loops pushing into an empty container
//! - [`Declarative`]: iterator chains finished with `collect()`
//!
//! Both strategies must produce value-equal containers for the same input.
//! The harness never checks this at runtime; the tests in this crate do.
//!
//! # Example
//!
//! ```
//! use cyclebench_core::{Declarative, Imperative, Strategy, Tag};
//!
//! let loops = Imperative.build_mapping(3);
//! let chained = Declarative.build_mapping(3);
//!
//! assert_eq!(loops, chained);
//! assert_eq!(loops[&1], Tag::Odd);
//! ```

pub mod fixtures;
pub mod operation;
pub mod parity;
pub mod strategy;

pub use operation::Operation;
pub use parity::{Parity, Tag};
pub use strategy::{Declarative, Imperative, Strategy};
