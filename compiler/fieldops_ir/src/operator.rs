//! The arithmetic operators generated for every kind combination.

use std::fmt;

/// One of the four binary arithmetic operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    Mul,
    Div,
    Plus,
    Minus,
}

impl Operator {
    /// All operators in generation order.
    pub const ALL: [Operator; 4] = [Self::Mul, Self::Div, Self::Plus, Self::Minus];

    /// Source symbol of the operator.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// Name used in symbol names and diagnostics.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Plus => "plus",
            Self::Minus => "minus",
        }
    }

    /// Look up an operator by symbol (`*`) or name (`mul`).
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s || op.name() == s)
    }

    /// Human-readable noun used in generated comments.
    #[inline]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Plus => "addition",
            Self::Minus => "subtraction",
        }
    }

    /// `std::ops` trait implementing the binary form.
    #[inline]
    pub const fn trait_name(self) -> &'static str {
        match self {
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Plus => "Add",
            Self::Minus => "Sub",
        }
    }

    /// Method of [`Self::trait_name`].
    #[inline]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Plus => "add",
            Self::Minus => "sub",
        }
    }

    /// `std::ops` trait implementing the compound-assignment form.
    #[inline]
    pub const fn assign_trait_name(self) -> &'static str {
        match self {
            Self::Mul => "MulAssign",
            Self::Div => "DivAssign",
            Self::Plus => "AddAssign",
            Self::Minus => "SubAssign",
        }
    }

    /// Method of [`Self::assign_trait_name`].
    #[inline]
    pub const fn assign_method(self) -> &'static str {
        match self {
            Self::Mul => "mul_assign",
            Self::Div => "div_assign",
            Self::Plus => "add_assign",
            Self::Minus => "sub_assign",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}
