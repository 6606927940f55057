use std::cmp::Ordering;
use std::fmt::Display;
use std::sync::Arc;

use super::{tuple::Tuple, value::Value};
use crate::{
    catalog::schema::Schema,
    error::{Error::Execution, Result},
    fmt_err,
};

pub type ExprRef = Arc<Expr>;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `tuple_idx` selects the input side: 0 for the left (or only) input,
    /// 1 for the right input of a join.
    ColumnExpr {
        tuple_idx: usize,
        column_index: usize,
        column_name: String,
    },
    Literal(Value),
    BinaryExpr {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Multiply,
    Divide,
    And,
    Or,
}

impl Expr {
    pub fn column(column_index: usize, column_name: &str) -> Self {
        Expr::ColumnExpr {
            tuple_idx: 0,
            column_index,
            column_name: column_name.to_owned(),
        }
    }

    pub fn binary(left: Expr, op: Operator, right: Expr) -> Self {
        Expr::BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn evaluate(&self, tuple: &Tuple, schema: &Schema) -> Result<Value> {
        match self {
            Expr::ColumnExpr {
                column_index,
                column_name,
                ..
            } => column_value(tuple, schema, *column_index, column_name),
            Expr::Literal(value) => Ok(value.clone()),
            Expr::BinaryExpr { left, op, right } => {
                let l = left.evaluate(tuple, schema)?;
                let r = right.evaluate(tuple, schema)?;
                apply_operator(&l, *op, &r)
            }
        }
    }

    /// evaluate against a pair of tuples, dispatching columns on `tuple_idx`
    pub fn evaluate_join(
        &self,
        left_tuple: &Tuple,
        left_schema: &Schema,
        right_tuple: &Tuple,
        right_schema: &Schema,
    ) -> Result<Value> {
        match self {
            Expr::ColumnExpr {
                tuple_idx,
                column_index,
                column_name,
            } => match tuple_idx {
                0 => column_value(left_tuple, left_schema, *column_index, column_name),
                1 => column_value(right_tuple, right_schema, *column_index, column_name),
                idx => Err(Execution(fmt_err!(
                    "{column_name} refers to input {idx}, a join only has two"
                ))),
            },
            Expr::Literal(value) => Ok(value.clone()),
            Expr::BinaryExpr { left, op, right } => {
                let l = left.evaluate_join(left_tuple, left_schema, right_tuple, right_schema)?;
                let r = right.evaluate_join(left_tuple, left_schema, right_tuple, right_schema)?;
                apply_operator(&l, *op, &r)
            }
        }
    }
}

fn column_value(
    tuple: &Tuple,
    schema: &Schema,
    column_index: usize,
    column_name: &str,
) -> Result<Value> {
    if column_index >= schema.len() {
        return Err(Execution(fmt_err!(
            "{column_name} at {column_index} is out of schema with {} columns",
            schema.len()
        )));
    }
    match tuple.value_at(column_index) {
        Some(value) => Ok(value.clone()),
        None => Err(Execution(fmt_err!(
            "tuple has {} values, {column_name} at {column_index} is missing",
            tuple.len()
        ))),
    }
}

/// `None` when the order is unknown, which is the case for NaN.
fn compare(l: &Value, r: &Value) -> Result<Option<Ordering>> {
    match (l, r) {
        (Value::Bool(l), Value::Bool(r)) => Ok(Some(l.cmp(r))),
        (Value::Int(l), Value::Int(r)) => Ok(Some(l.cmp(r))),
        (Value::Float(l), Value::Float(r)) => Ok(l.partial_cmp(r)),
        (Value::String(l), Value::String(r)) => Ok(Some(l.cmp(r))),
        (l, r) => Err(Execution(fmt_err!("can't compare {l} with {r}"))),
    }
}

fn comparison(l: &Value, r: &Value, holds: fn(Ordering) -> bool) -> Result<Value> {
    if l.is_null() || r.is_null() {
        return Ok(Value::Null);
    }
    Ok(compare(l, r)?.map_or(Value::Null, |ordering| Value::Bool(holds(ordering))))
}

fn arithmetic(
    l: &Value,
    op: Operator,
    r: &Value,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Value> {
    match (l, r) {
        (Value::Null, _) | (_, Value::Null) => Ok(Value::Null),
        (Value::Int(_), Value::Int(0)) if op == Operator::Divide => {
            Err(Execution(fmt_err!("division by zero")))
        }
        (Value::Float(_), Value::Float(r)) if op == Operator::Divide && *r == 0.0 => {
            Err(Execution(fmt_err!("division by zero")))
        }
        (Value::Int(l), Value::Int(r)) => match int_op(*l, *r) {
            Some(v) => Ok(Value::Int(v)),
            None => Err(Execution(fmt_err!("{l} {op} {r} overflows"))),
        },
        (Value::Float(l), Value::Float(r)) => Ok(Value::Float(float_op(*l, *r))),
        (l, r) => Err(Execution(fmt_err!("can't apply {op} to {l} and {r}"))),
    }
}

fn as_bool(v: &Value) -> Result<Option<bool>> {
    match v {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        v => Err(Execution(fmt_err!("{v} is not a boolean"))),
    }
}

// three-valued logic
fn and(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

fn or(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

fn apply_operator(l: &Value, op: Operator, r: &Value) -> Result<Value> {
    match op {
        Operator::Eq => comparison(l, r, Ordering::is_eq),
        Operator::NotEq => comparison(l, r, Ordering::is_ne),
        Operator::Lt => comparison(l, r, Ordering::is_lt),
        Operator::LtEq => comparison(l, r, Ordering::is_le),
        Operator::Gt => comparison(l, r, Ordering::is_gt),
        Operator::GtEq => comparison(l, r, Ordering::is_ge),
        Operator::Plus => arithmetic(l, op, r, i64::checked_add, |l, r| l + r),
        Operator::Minus => arithmetic(l, op, r, i64::checked_sub, |l, r| l - r),
        Operator::Multiply => arithmetic(l, op, r, i64::checked_mul, |l, r| l * r),
        Operator::Divide => arithmetic(l, op, r, i64::checked_div, |l, r| l / r),
        Operator::And => Ok(and(as_bool(l)?, as_bool(r)?).map_or(Value::Null, Value::Bool)),
        Operator::Or => Ok(or(as_bool(l)?, as_bool(r)?).map_or(Value::Null, Value::Bool)),
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::And => "AND",
            Operator::Or => "OR",
        };
        write!(f, "{s}")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::ColumnExpr {
                tuple_idx,
                column_index,
                ..
            } => write!(f, "#{tuple_idx}.{column_index}"),
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::BinaryExpr { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
