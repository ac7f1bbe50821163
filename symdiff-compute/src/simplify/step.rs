use std::fmt;

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A node whose operands are all exact was replaced by its value.
    ///
    /// `2+3 = 5`
    /// `sin(0) = 0`
    FoldConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FoldConstant => write!(f, "fold constant"),
            Self::AddZero => write!(f, "0+a = a"),
            Self::MultiplyZero => write!(f, "0*a = 0"),
            Self::MultiplyOne => write!(f, "1*a = a"),
        }
    }
}
