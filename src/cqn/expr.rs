use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::query::Select;
use super::values::{CqnValue, shape_mismatch};

/// Path segment that marks a reference as a bound-parameter placeholder.
pub const PARAM_TOKEN: &str = "?";

/// Tokens accepted as the leading negation in a two-element `xpr`.
pub const NEGATION_TOKENS: &[&str] = &["not", "NOT"];

/// `{ ref: [..], as?, cast?, param? }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ref {
    #[serde(rename = "ref")]
    pub path: Vec<String>,
    #[serde(rename = "as")]
    pub alias: Option<String>,
    pub cast: Option<String>,
    #[serde(default)]
    pub param: bool,
}

impl Ref {
    /// Explicit `param: true`, or the single-segment `["?"]` path.
    pub fn is_param(&self) -> bool {
        self.param || matches!(self.path.as_slice(), [only] if only == PARAM_TOKEN)
    }
}

/// `{ val: scalar }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Val {
    pub val: CqnValue,
}

/// `{ xpr: [operand, operator, operand, ...] }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Xpr {
    pub xpr: Vec<XprItem>,
}

/// One element of a compound expression.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum XprItem {
    Token(String),
    Expr(Expr),
}

impl XprItem {
    pub fn as_token(&self) -> Option<&str> {
        match self {
            XprItem::Token(t) => Some(t),
            XprItem::Expr(_) => None,
        }
    }

    pub fn is_negation(&self) -> bool {
        self.as_token().is_some_and(|t| NEGATION_TOKENS.contains(&t))
    }
}

/// `{ list: [..] }`, the right-hand side of membership tests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct List {
    pub list: Vec<Expr>,
}

/// `{ func: name, args: [..], as?, cast? }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Func {
    pub func: String,
    #[serde(default)]
    pub args: Vec<Expr>,
    #[serde(rename = "as")]
    pub alias: Option<String>,
    pub cast: Option<String>,
}

/// `{ SELECT: {..}, as? }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubSelect {
    #[serde(rename = "SELECT")]
    pub select: Box<Select>,
    #[serde(rename = "as")]
    pub alias: Option<String>,
}

/// A select written without the `SELECT` wrapper: any object carrying both
/// `from` and `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct BareSelect(pub Box<Select>);

impl<'de> Deserialize<'de> for BareSelect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        if value.get("from").is_none() || value.get("columns").is_none() {
            return Err(shape_mismatch("a bare subquery"));
        }
        Select::deserialize(value)
            .map(|select| BareSelect(Box::new(select)))
            .map_err(D::Error::custom)
    }
}

/// Any expression position in query notation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Expr {
    Ref(Ref),
    Val(Val),
    Xpr(Xpr),
    List(List),
    Func(Func),
    Select(SubSelect),
    BareSelect(BareSelect),
    /// Shape not recognised; reported by the transformer.
    Other(serde_json::Value),
}
