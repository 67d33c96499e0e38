//! sumgrid_engine - Cell model, formula syntax checks and evaluation.

pub mod engine;
