use std::{io::Write, sync::Arc};

use log::{error, info};
use plantree::{
    catalog::{column::Column, schema::Schema, Catalog},
    error::Result,
    executor::{execute, ExecutorContext},
    planner::{
        optimize::Optimizer, FilterPlanNode, HashJoinPlanNode, InsertPlanNode, PlanNode,
        SeqScanPlanNode,
    },
    types::{
        expr::{Expr, Operator},
        value::Value,
        LogicalType,
    },
};

fn main() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}:{} {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut catalog = Catalog::default();
    let user = catalog.create_table(
        "user",
        Schema::new(vec![
            Column::new(LogicalType::Int64, "id"),
            Column::new(LogicalType::String, "name"),
        ]),
    )?;
    let orders = catalog.create_table(
        "orders",
        Schema::new(vec![
            Column::new(LogicalType::Int64, "user_id"),
            Column::new(LogicalType::Float64, "amount"),
        ]),
    )?;
    let catalog = Arc::new(catalog);
    let ctx = ExecutorContext::new(&catalog);

    let text = |s: &str| Value::String(s.to_owned());
    let inserts = [
        InsertPlanNode::new_raw(
            vec![
                vec![Value::Int(1), text("ada")],
                vec![Value::Int(2), text("bob")],
                vec![Value::Null, text("nobody")],
            ],
            user.oid,
        ),
        InsertPlanNode::new_raw(
            vec![
                vec![Value::Int(1), Value::Float(9.5)],
                vec![Value::Int(1), Value::Int(20)],
                vec![Value::Int(3), Value::Float(1.0)],
                vec![Value::Null, Value::Float(4.0)],
            ],
            orders.oid,
        ),
    ];
    for insert in inserts {
        let plan = PlanNode::from(insert).into_ref();
        let count = execute(&ctx, &plan)?;
        info!("{plan} -> {count:?}");
    }

    let user_schema = Arc::new(SeqScanPlanNode::infer_scan_schema(&user));
    let orders_schema = Arc::new(SeqScanPlanNode::infer_scan_schema(&orders));
    let big_orders = PlanNode::from(FilterPlanNode::new(
        Arc::clone(&orders_schema),
        Arc::new(Expr::binary(
            Expr::column(1, "amount"),
            Operator::Gt,
            Expr::Literal(Value::Float(5.0)),
        )),
        PlanNode::from(SeqScanPlanNode::new(Arc::clone(&orders_schema), None, orders.oid))
            .into_ref(),
    ))
    .into_ref();
    let join = PlanNode::from(HashJoinPlanNode::new(
        Arc::new(Schema::merge(&user_schema, &orders_schema)),
        vec![
            PlanNode::from(SeqScanPlanNode::new(Arc::clone(&user_schema), None, user.oid))
                .into_ref(),
            big_orders,
        ],
        Arc::new(Expr::column(0, "id")),
        Arc::new(Expr::column(0, "user_id")),
    ))
    .into_ref();

    println!("plan:\n{}", join.explain());
    let optimized = Optimizer::new(&catalog).optimize(join);
    println!("optimized:\n{}", optimized.explain());

    for tuple in execute(&ctx, &optimized)? {
        let row: Vec<String> = tuple.iter().map(|v| v.to_string()).collect();
        println!("{}", row.join(" | "));
    }

    Ok(())
}
