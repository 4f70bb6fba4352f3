//! The two programmable stages of the pass.
//!
//! Each stage is a pure function of its per-invocation input plus shared
//! read-only state, which is what makes the pipeline's data-parallel
//! execution model safe without any coordination.

pub mod fragment;
pub mod vertex;
