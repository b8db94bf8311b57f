//! Operator and declaration-kind enums.
//!
//! Serialized names are the operator tokens themselves, matching the Shift
//! JSON AST format (`{"operator": "+="}`).

use serde::{Deserialize, Serialize};

use crate::precedence::Precedence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = ",")]
    Sequence,
    #[serde(rename = "||")]
    LogicalOr,
    #[serde(rename = "&&")]
    LogicalAnd,
    #[serde(rename = "|")]
    BitwiseOr,
    #[serde(rename = "^")]
    BitwiseXor,
    #[serde(rename = "&")]
    BitwiseAnd,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "===")]
    StrictEqual,
    #[serde(rename = "!==")]
    StrictNotEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanEqual,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
    #[serde(rename = "<<")]
    Left,
    #[serde(rename = ">>")]
    Right,
    #[serde(rename = ">>>")]
    UnsignedRight,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "**")]
    Exp,
}

impl BinaryOperator {
    /// Source text of the operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => ",",
            Self::LogicalOr => "||",
            Self::LogicalAnd => "&&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::BitwiseAnd => "&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::StrictEqual => "===",
            Self::StrictNotEqual => "!==",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::In => "in",
            Self::Instanceof => "instanceof",
            Self::Left => "<<",
            Self::Right => ">>",
            Self::UnsignedRight => ">>>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Exp => "**",
        }
    }

    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Sequence => Precedence::Sequence,
            Self::LogicalOr => Precedence::LogicalOr,
            Self::LogicalAnd => Precedence::LogicalAnd,
            Self::BitwiseOr => Precedence::BitwiseOr,
            Self::BitwiseXor => Precedence::BitwiseXor,
            Self::BitwiseAnd => Precedence::BitwiseAnd,
            Self::Equal | Self::NotEqual | Self::StrictEqual | Self::StrictNotEqual => {
                Precedence::Equality
            }
            Self::LessThan
            | Self::LessThanEqual
            | Self::GreaterThan
            | Self::GreaterThanEqual
            | Self::In
            | Self::Instanceof => Precedence::Relational,
            Self::Left | Self::Right | Self::UnsignedRight => Precedence::Shift,
            Self::Plus | Self::Minus => Precedence::Additive,
            Self::Mul | Self::Div | Self::Rem => Precedence::Multiplicative,
            Self::Exp => Precedence::Exponential,
        }
    }

    /// `**` is the only right-associative binary operator.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Exp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "!")]
    LogicalNot,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

impl UnaryOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::LogicalNot => "!",
            Self::BitNot => "~",
            Self::Typeof => "typeof",
            Self::Void => "void",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl UpdateOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompoundAssignmentOperator {
    #[serde(rename = "+=")]
    Plus,
    #[serde(rename = "-=")]
    Minus,
    #[serde(rename = "*=")]
    Mul,
    #[serde(rename = "/=")]
    Div,
    #[serde(rename = "%=")]
    Rem,
    #[serde(rename = "**=")]
    Exp,
    #[serde(rename = "<<=")]
    Left,
    #[serde(rename = ">>=")]
    Right,
    #[serde(rename = ">>>=")]
    UnsignedRight,
    #[serde(rename = "|=")]
    BitwiseOr,
    #[serde(rename = "^=")]
    BitwiseXor,
    #[serde(rename = "&=")]
    BitwiseAnd,
}

impl CompoundAssignmentOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+=",
            Self::Minus => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Rem => "%=",
            Self::Exp => "**=",
            Self::Left => "<<=",
            Self::Right => ">>=",
            Self::UnsignedRight => ">>>=",
            Self::BitwiseOr => "|=",
            Self::BitwiseXor => "^=",
            Self::BitwiseAnd => "&=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableDeclarationKind {
    Var,
    Let,
    Const,
}

impl VariableDeclarationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}
