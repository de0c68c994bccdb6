//! Abstract Syntax Tree (AST) definitions
//!
//! Rinha programs arrive pre-parsed as JSON: a root object with a `name`, an
//! `expression`, and a `location`, where every expression node is tagged by a
//! `kind` field. The enums here mirror that wire format directly, so decoding
//! is a single serde pass and an unknown `kind` or missing field is rejected
//! before evaluation starts.
//!
//! The tree is immutable once decoded; the evaluator never mutates it and
//! closures borrow parameter lists and bodies from it.

use crate::span::Loc;
use serde::{Deserialize, Serialize};

/// Top-level program: one root expression plus file metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Source file name as recorded by the parser
    #[serde(default)]
    pub name: String,
    /// Root expression of the program
    pub expression: Term,
    #[serde(default)]
    pub location: Loc,
}

/// A named parameter or let-binding target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub text: String,
    #[serde(default)]
    pub location: Loc,
}

impl Parameter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: Loc::dummy(),
        }
    }
}

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
}

impl BinaryOp {
    /// Surface syntax for the operator, used in error messages
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Lte => "<=",
            BinaryOp::Gte => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }
}

/// Expression node, tagged by `kind` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Term {
    Int {
        value: i64,
        #[serde(default)]
        location: Loc,
    },
    Str {
        value: String,
        #[serde(default)]
        location: Loc,
    },
    Bool {
        value: bool,
        #[serde(default)]
        location: Loc,
    },
    Var {
        text: String,
        #[serde(default)]
        location: Loc,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Term>,
        rhs: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    If {
        condition: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    Let {
        name: Parameter,
        value: Box<Term>,
        next: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    /// Anonymous function; the body lives in `value` on the wire
    Function {
        parameters: Vec<Parameter>,
        value: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    Call {
        callee: Box<Term>,
        arguments: Vec<Term>,
        #[serde(default)]
        location: Loc,
    },
    Print {
        value: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    Tuple {
        first: Box<Term>,
        second: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    First {
        value: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
    Second {
        value: Box<Term>,
        #[serde(default)]
        location: Loc,
    },
}

/// Convenience constructors for building terms in host code and tests.
/// Decoded programs come in through serde; these cover the synthesized case.
impl Term {
    pub fn int(value: i64) -> Self {
        Term::Int {
            value,
            location: Loc::dummy(),
        }
    }

    pub fn str(value: impl Into<String>) -> Self {
        Term::Str {
            value: value.into(),
            location: Loc::dummy(),
        }
    }

    pub fn bool(value: bool) -> Self {
        Term::Bool {
            value,
            location: Loc::dummy(),
        }
    }

    pub fn var(text: impl Into<String>) -> Self {
        Term::Var {
            text: text.into(),
            location: Loc::dummy(),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Term, rhs: Term) -> Self {
        Term::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            location: Loc::dummy(),
        }
    }

    pub fn if_then(condition: Term, then: Term, otherwise: Term) -> Self {
        Term::If {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
            location: Loc::dummy(),
        }
    }

    pub fn let_in(name: impl Into<String>, value: Term, next: Term) -> Self {
        Term::Let {
            name: Parameter::new(name),
            value: Box::new(value),
            next: Box::new(next),
            location: Loc::dummy(),
        }
    }

    pub fn function<I, S>(parameters: I, body: Term) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Term::Function {
            parameters: parameters.into_iter().map(Parameter::new).collect(),
            value: Box::new(body),
            location: Loc::dummy(),
        }
    }

    pub fn call(callee: Term, arguments: Vec<Term>) -> Self {
        Term::Call {
            callee: Box::new(callee),
            arguments,
            location: Loc::dummy(),
        }
    }

    pub fn print(value: Term) -> Self {
        Term::Print {
            value: Box::new(value),
            location: Loc::dummy(),
        }
    }

    pub fn tuple(first: Term, second: Term) -> Self {
        Term::Tuple {
            first: Box::new(first),
            second: Box::new(second),
            location: Loc::dummy(),
        }
    }

    pub fn first(value: Term) -> Self {
        Term::First {
            value: Box::new(value),
            location: Loc::dummy(),
        }
    }

    pub fn second(value: Term) -> Self {
        Term::Second {
            value: Box::new(value),
            location: Loc::dummy(),
        }
    }

    /// Location of this node
    pub fn location(&self) -> &Loc {
        match self {
            Term::Int { location, .. }
            | Term::Str { location, .. }
            | Term::Bool { location, .. }
            | Term::Var { location, .. }
            | Term::Binary { location, .. }
            | Term::If { location, .. }
            | Term::Let { location, .. }
            | Term::Function { location, .. }
            | Term::Call { location, .. }
            | Term::Print { location, .. }
            | Term::Tuple { location, .. }
            | Term::First { location, .. }
            | Term::Second { location, .. } => location,
        }
    }
}

impl Program {
    /// Wrap a root expression with empty metadata
    pub fn from_expression(expression: Term) -> Self {
        Self {
            name: String::new(),
            expression,
            location: Loc::dummy(),
        }
    }
}
