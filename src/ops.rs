//! Operator kinds shared between kernels and the dispatch layer above
//!
//! The enums here are the vocabulary of the call contract: the dispatch
//! layer picks an op, a dtype, and an ISA level, then invokes the matching
//! kernel. The kernels interpret the op; everything else about shape and
//! layout arrives as pointers and strides.

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b
    Div,
    /// Maximum: max(a, b)
    Max,
    /// Minimum: min(a, b)
    Min,
}

/// Unary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation: -a
    Neg,
    /// Absolute value: |a|
    Abs,
    /// Square root: sqrt(a)
    Sqrt,
    /// Square: a^2
    Square,
    /// Exponential: e^a
    Exp,
    /// Natural log: ln(a)
    Log,
    /// Rectified linear unit: max(a, 0)
    Relu,
}

/// Spatial interpolation policy for resize kernels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterpolationPolicy {
    /// Nearest-neighbor sampling
    Nearest,
    /// Bilinear blend of the four surrounding pixels, edges clamped
    Bilinear,
}

/// Reduction operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of elements
    Sum,
    /// Mean of elements
    Mean,
    /// Maximum element
    Max,
    /// Minimum element
    Min,
    /// Product of elements
    Prod,
}
