use std::fmt;

/// Tag identifying the primitive operation that produced a derived node.
///
/// Only primitives that record a node of their own appear here: negation,
/// subtraction and division are expressed through `Mul`/`Add`/`Pow` chains
/// and never tag a node directly. The tag is diagnostic only (Debug output,
/// graph rendering) and carries no weight in gradient computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add,
    Mul,
    Pow(f64),
    Exp,
    Tanh,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "**{}", exponent),
            Op::Exp => write!(f, "exp"),
            Op::Tanh => write!(f, "tanh"),
        }
    }
}
