pub mod expr;
pub mod tuple;
pub mod value;

use serde_derive::{Deserialize, Serialize};

use self::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalType {
    Null,
    Bool,
    Int64,
    Float64,
    String,
}

impl LogicalType {
    /// whether `value` may be stored in a column of this type
    pub fn accepts(&self, value: &Value) -> bool {
        is_can_cast(&value.logical_type(), self)
    }
}

pub fn is_can_cast(from: &LogicalType, to: &LogicalType) -> bool {
    if from == to {
        return true;
    }

    match from {
        LogicalType::Null => true,
        LogicalType::Bool => false,
        LogicalType::Int64 => matches!(to, LogicalType::Float64),
        LogicalType::Float64 => false,
        LogicalType::String => false,
    }
}
