use log::debug;

use super::{execute, ExecutorContext};
use crate::{
    catalog::schema::Schema,
    error::{Error::Execution, Result},
    fmt_err,
    planner::insert::InsertPlanNode,
    types::{tuple::Tuple, value::Value, LogicalType},
};

/// Writes the node's rows into its table and returns a single tuple holding
/// the number of rows written.
pub(super) fn execute_insert(ctx: &ExecutorContext, node: &InsertPlanNode) -> Result<Vec<Tuple>> {
    let info = ctx.catalog.table(node.table_oid())?;

    let rows = if node.is_raw_insert() {
        node.raw_values().iter().cloned().map(Tuple).collect()
    } else {
        execute(ctx, node.get_child_plan())?
    };

    // check every row before writing any, so a bad row inserts nothing
    let rows = rows
        .into_iter()
        .map(|row| conform(row, &info.schema))
        .collect::<Result<Vec<_>>>()?;

    let count = rows.len();
    for row in rows {
        info.heap.insert_tuple(row);
    }
    debug!("insert {count} rows into {}", info.name);

    Ok(vec![Tuple(vec![Value::Int(count as i64)])])
}

/// checks `row` against the table layout, widening ints stored into float
/// columns
fn conform(row: Tuple, schema: &Schema) -> Result<Tuple> {
    if row.len() != schema.len() {
        return Err(Execution(fmt_err!(
            "row has {} values, table has {} columns",
            row.len(),
            schema.len()
        )));
    }

    row.0
        .into_iter()
        .zip(schema.columns.iter())
        .map(|(value, col)| {
            if !col.column_type.accepts(&value) {
                return Err(Execution(fmt_err!(
                    "{value} can't be stored in column {} of type {:?}",
                    col.name,
                    col.column_type
                )));
            }
            Ok(match (col.column_type, value) {
                (LogicalType::Float64, Value::Int(i)) => Value::Float(i as f64),
                (_, value) => value,
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Tuple)
}
