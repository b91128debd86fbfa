//! CPU compute kernels
//!
//! Every kernel in this module follows the same call contract: raw pointers
//! into caller-owned buffers, lengths/strides in elements, no allocation, no
//! validation, no side effects beyond writing the output buffer. The caller
//! (a dispatch layer) is responsible for shape/dtype/stride checking before
//! the call; a kernel given bad inputs computes bad numbers, it does not
//! detect them.

pub mod binary;
pub mod cast;
pub mod clamp;
pub mod conv;
pub mod reduce;
pub mod scalar;
pub mod scale;
pub mod unary;
