//! Core building blocks: filename checks, run parameters, and the external
//! interpreter command. These are primitives consumed by the high-level `api`
//! module.
pub mod filter;
pub mod interpreter;
pub mod params;
