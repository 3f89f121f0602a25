//! Collection of general utility functions.

pub mod id_generator;
