use docexpr::prelude::*;
use docexpr::document::to_json;
use serde_json::json;

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_find_and_update_with_prelude() {
    let filter = doc! {
        "status": Filter::in_(vec!["A", "D"]),
        "qty": Filter::lt(30),
    };
    let update = merge_operators([
        Update::set(doc! { "status": "done" }),
        Update::inc(doc! { "count": 1 }),
    ]);
    log::debug!("update {update} for {filter}");

    assert_eq!(
        filter,
        doc! { "status": { "$in": ["A", "D"] }, "qty": { "$lt": 30 } }
    );
    assert_eq!(
        update,
        doc! { "$set": { "status": "done" }, "$inc": { "count": 1 } }
    );
}

#[test]
fn test_pipeline_with_prelude() {
    let pipeline: Vec<Document> = vec![
        match_expr(Expr::gt("$spent", "$budget")),
        Stage::lookup("depts", "dept", "_id", "dept"),
        Stage::unwind("dept").into_document(),
        Stage::group(doc! {
            "_id": "$dept.name",
            "total": Accumulator::sum(["$spent"]),
            "count": Accumulator::count(),
        }),
    ];

    assert_eq!(
        pipeline[0],
        doc! { "$match": { "$expr": { "$gt": ["$spent", "$budget"] } } }
    );
    assert_eq!(
        pipeline[1],
        doc! {
            "$lookup": { "from": "depts", "localField": "dept", "foreignField": "_id", "as": "dept" }
        }
    );
    assert_eq!(pipeline[2], doc! { "$unwind": "$dept" });
    assert_eq!(
        pipeline[3],
        doc! {
            "$group": {
                "_id": "$dept.name",
                "total": { "$sum": "$spent" },
                "count": { "$count": {} },
            }
        }
    );
}

#[test]
fn test_documents_render_as_json() {
    let stage = Stage::project(doc! {
        "pos": Expr::index_of_array("$tags", "red"),
        "hidden": unless(Expr::eq("$visible", true), false),
    });

    assert_eq!(
        to_json(&stage).unwrap(),
        json!({
            "$project": {
                "pos": { "$indexOfArray": ["$tags", "red"] },
                "hidden": { "$not": { "$eq": ["$visible", true] } },
            }
        })
    );
}

#[test]
fn test_errors_surface_through_the_facade() {
    let result: OperatorResult<_> = Expr::index_of_array("$tags", "red").set_end(3);

    assert!(matches!(result, Err(OperatorError::InvalidBuilderState(_))));
}
