use bson::{Bson, DateTime, doc};
use chrono::{TimeZone, Utc};
use docexpr_aggregation::{
    Accumulator, Expr, Precision, Stage, TimeUnit, Window, WindowOutput, date_trunc, match_expr,
};
use docexpr_core::{compose::unless, error::OperatorError};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_sales_report_pipeline() {
    let since = DateTime::from_chrono(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

    let pipeline = vec![
        Stage::match_(doc! { "date": { "$gte": since } }),
        Stage::unwind("items").into_document(),
        Stage::group(doc! {
            "_id": date_trunc(Precision::Day, "$date", "UTC"),
            "revenue": Accumulator::sum([Expr::multiply("$items.price", "$items.qty")]),
            "orders": Accumulator::count(),
        }),
        Stage::sort(doc! { "_id": 1 }),
        Stage::limit(30),
    ];

    assert_eq!(pipeline.len(), 5);
    assert_eq!(pipeline[1], doc! { "$unwind": "$items" });
    assert_eq!(
        pipeline[2].get_document("$group").unwrap().get("revenue"),
        Some(&Bson::Document(doc! {
            "$sum": { "$multiply": ["$items.price", "$items.qty"] }
        }))
    );

    let id = pipeline[2]
        .get_document("$group")
        .unwrap()
        .get_document("_id")
        .unwrap()
        .get_document("$dateFromParts")
        .unwrap();
    assert!(id.contains_key("day"));
    assert!(!id.contains_key("hour"));
}

#[test]
fn test_date_trunc_to_month() {
    assert_eq!(
        date_trunc(Precision::Month, "$ts", "+08:00"),
        doc! {
            "$dateFromParts": {
                "year": { "$year": { "date": "$ts", "timezone": "+08:00" } },
                "month": { "$month": { "date": "$ts", "timezone": "+08:00" } },
                "timezone": "+08:00",
            }
        }
    );
}

#[test]
fn test_match_expr_with_negation() {
    let over_budget = Expr::gt("$spent", "$budget");

    assert_eq!(
        match_expr(unless(over_budget.clone(), false)),
        doc! { "$match": { "$expr": { "$not": { "$gt": ["$spent", "$budget"] } } } }
    );
    assert_eq!(
        match_expr(unless(over_budget, true)),
        doc! { "$match": { "$expr": { "$gt": ["$spent", "$budget"] } } }
    );
}

#[test]
fn test_moving_average_window() {
    let stage = Stage::set_window_fields([
        WindowOutput::new("movingAvg", Accumulator::avg(["$price"])).set_documents(-2, 0),
        WindowOutput::new("speed", Window::derivative("$miles").set_unit(TimeUnit::Hour))
            .set_range("unbounded", "current")
            .set_unit(TimeUnit::Hour),
    ])
    .set_sort_by(doc! { "timestamp": 1 });

    assert_eq!(
        stage.into_document(),
        doc! {
            "$setWindowFields": {
                "output": {
                    "movingAvg": { "$avg": "$price", "window": { "documents": [-2, 0] } },
                    "speed": {
                        "$derivative": { "input": "$miles", "unit": "hour" },
                        "window": { "range": ["unbounded", "current"], "unit": "hour" },
                    },
                },
                "sortBy": { "timestamp": 1 },
            }
        }
    );
}

#[test]
fn test_index_of_array_in_projection() -> Result<(), OperatorError> {
    let project = Stage::project(doc! {
        "index": Expr::index_of_array("$items", "b").set_start(1).set_end(4)?,
        "last": Expr::slice("$items", -1).set_position(0),
    });

    assert_eq!(
        project,
        doc! {
            "$project": {
                "index": { "$indexOfArray": ["$items", "b", 1, 4] },
                "last": { "$slice": ["$items", 0, -1] },
            }
        }
    );
    Ok(())
}

#[test]
fn test_out_of_order_slot_is_reported() {
    let err = Expr::index_of_bytes("$s", "x").set_end(3).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid builder state: $indexOfBytes: cannot set `end` before `start`"
    );
}
