//! Operator vocabulary of the intermediate SQL tree.

/// Binary operators after normalisation.
///
/// Tokens missing from the mapping table survive as [`BinaryOperator::Custom`]
/// and are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    In,
    NotIn,
    Like,
    NotLike,
    Between,
    Is,
    IsNot,
    And,
    Or,
    /// `not` used between two operands
    Not,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Concat,
    Custom(String),
}

impl BinaryOperator {
    /// Map a query-notation token. Matching is case-sensitive; anything not
    /// in the table is passed through unchanged.
    pub fn from_token(token: &str) -> Self {
        match token {
            "=" | "==" => Self::Eq,
            "!=" | "<>" => Self::NotEq,
            "<" => Self::Lt,
            "<=" => Self::LtEq,
            ">" => Self::Gt,
            ">=" => Self::GtEq,
            "in" => Self::In,
            "not in" => Self::NotIn,
            "like" => Self::Like,
            "not like" => Self::NotLike,
            "between" => Self::Between,
            "is" => Self::Is,
            "is not" => Self::IsNot,
            "and" => Self::And,
            "or" => Self::Or,
            "not" => Self::Not,
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "||" => Self::Concat,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Canonical SQL spelling.
    pub fn as_sql(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Between => "BETWEEN",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Concat => "||",
            Self::Custom(token) => token,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
}

impl UnaryOperator {
    pub fn as_sql(&self) -> &'static str {
        match self {
            UnaryOperator::Not => "NOT",
        }
    }
}
