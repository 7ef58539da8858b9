//! Reading and writing graphs in the exchange format.
pub mod json;
