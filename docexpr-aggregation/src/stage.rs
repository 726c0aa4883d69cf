//! Aggregation pipeline stages.
//!
//! A pipeline is an array of stage documents assembled by the caller:
//!
//! ```ignore
//! use docexpr_aggregation::{Accumulator, Stage};
//! use bson::doc;
//!
//! let pipeline = vec![
//!     Stage::match_(doc! { "status": "A" }),
//!     Stage::group(doc! { "_id": "$cust_id", "total": Accumulator::sum(["$amount"]) }),
//!     Stage::sort(doc! { "total": -1 }),
//! ];
//! ```
//!
//! No check is made that a stage is legal at its position in the pipeline.

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    compose::{collapse, merge},
    document::field_path,
    impl_into_document, operator_builder,
    payload::Payload,
};

use crate::window::TimeUnit;

const PATH_FIELD: &str = "path";

/// Helper struct for constructing aggregation stages.
pub struct Stage;

impl Stage {
    /// Adds new fields to documents.
    pub fn add_fields(spec: impl Into<Bson>) -> Document {
        operator("$addFields", spec)
    }

    /// Groups documents into buckets delimited by `boundaries`.
    pub fn bucket(group_by: impl Into<Bson>, boundaries: impl Into<Bson>) -> BucketStage {
        BucketStage::from_spec(fields([
            ("groupBy", group_by.into()),
            ("boundaries", boundaries.into()),
        ]))
    }

    /// Groups documents into `buckets` evenly filled buckets.
    pub fn bucket_auto(group_by: impl Into<Bson>, buckets: i32) -> BucketAutoStage {
        BucketAutoStage::from_spec(fields([
            ("groupBy", group_by.into()),
            ("buckets", Bson::Int32(buckets)),
        ]))
    }

    /// Returns collection statistics; sections are picked with the setters.
    pub fn coll_stats() -> CollStatsStage {
        CollStatsStage::from_spec(Document::new())
    }

    /// Counts the documents into a field named `output_field`.
    pub fn count(output_field: impl Into<String>) -> Document {
        operator("$count", Bson::String(output_field.into()))
    }

    /// Reports the operations in progress. Must be the first stage.
    pub fn current_op(options: impl Into<Bson>) -> Document {
        operator("$currentOp", options)
    }

    /// Runs several sub-pipelines, one per output field.
    pub fn facet(outputs: impl Into<Bson>) -> Document {
        operator("$facet", outputs)
    }

    /// Sorts documents by distance from `near`, writing it into `distance_field`.
    pub fn geo_near(near: impl Into<Bson>, distance_field: impl Into<String>) -> GeoNearStage {
        GeoNearStage::from_spec(fields([
            ("near", near.into()),
            ("distanceField", Bson::String(distance_field.into())),
        ]))
    }

    /// Performs a recursive search over `from`.
    pub fn graph_lookup(
        from: impl Into<String>,
        start_with: impl Into<Bson>,
        connect_from_field: impl Into<String>,
        connect_to_field: impl Into<String>,
        as_: impl Into<String>,
    ) -> GraphLookupStage {
        GraphLookupStage::from_spec(fields([
            ("from", Bson::String(from.into())),
            ("startWith", start_with.into()),
            ("connectFromField", Bson::String(connect_from_field.into())),
            ("connectToField", Bson::String(connect_to_field.into())),
            ("as", Bson::String(as_.into())),
        ]))
    }

    /// Groups by the `_id` expression of `id_and_fields`.
    pub fn group(id_and_fields: impl Into<Bson>) -> Document {
        operator("$group", id_and_fields)
    }

    /// Returns usage statistics for each index.
    pub fn index_stats() -> Document {
        operator("$indexStats", Document::new())
    }

    /// Passes only the first `n` documents.
    pub fn limit(n: i64) -> Document {
        operator("$limit", n)
    }

    /// Lists the sessions cached on the connected server.
    pub fn list_local_sessions(args: impl Into<Bson>) -> Document {
        operator("$listLocalSessions", args)
    }

    /// Lists all sessions stored in the `system.sessions` collection.
    pub fn list_sessions(args: impl Into<Bson>) -> Document {
        operator("$listSessions", args)
    }

    /// Equality join between `local_field` and `foreign_field` of `from`.
    pub fn lookup(
        from: impl Into<String>,
        local_field: impl Into<String>,
        foreign_field: impl Into<String>,
        as_: impl Into<String>,
    ) -> Document {
        operator(
            "$lookup",
            fields([
                ("from", Bson::String(from.into())),
                ("localField", Bson::String(local_field.into())),
                ("foreignField", Bson::String(foreign_field.into())),
                ("as", Bson::String(as_.into())),
            ]),
        )
    }

    /// Join running `pipeline` on `from`. Variables are bound with
    /// [`LookupPipelineStage::set_let`].
    pub fn lookup_pipeline(
        from: impl Into<String>,
        pipeline: impl Into<Bson>,
        as_: impl Into<String>,
    ) -> LookupPipelineStage {
        LookupPipelineStage::from_spec(fields([
            ("from", Bson::String(from.into())),
            ("pipeline", pipeline.into()),
            ("as", Bson::String(as_.into())),
        ]))
    }

    /// Filters documents with a query predicate.
    pub fn match_(query: impl Into<Bson>) -> Document {
        operator("$match", query)
    }

    /// Writes the results into `into`, a collection name or `{ db, coll }`.
    pub fn merge(into: impl Into<Bson>) -> MergeStage {
        MergeStage::from_spec(fields([("into", into.into())]))
    }

    /// Writes the results into `collection`, replacing it.
    pub fn out(collection: impl Into<String>) -> Document {
        operator("$out", Bson::String(collection.into()))
    }

    /// Returns plan cache information.
    pub fn plan_cache_stats() -> Document {
        operator("$planCacheStats", Document::new())
    }

    /// Includes, excludes or computes fields.
    pub fn project(specification: impl Into<Bson>) -> Document {
        operator("$project", specification)
    }

    /// Restricts content by evaluating `$$DESCEND`, `$$PRUNE` or `$$KEEP`.
    pub fn redact(expr: impl Into<Bson>) -> Document {
        operator("$redact", expr)
    }

    /// Replaces each document with `new_root`, as `{ newRoot: ... }`.
    pub fn replace_root(new_root: impl Into<Bson>) -> Document {
        operator("$replaceRoot", fields([("newRoot", new_root.into())]))
    }

    /// Replaces each document with `replacement`.
    pub fn replace_with(replacement: impl Into<Bson>) -> Document {
        operator("$replaceWith", replacement)
    }

    /// Picks `size` random documents, as `{ size: n }`.
    pub fn sample(size: i64) -> Document {
        operator("$sample", fields([("size", Bson::Int64(size))]))
    }

    /// Runs an Atlas Search query.
    pub fn search(args: impl Into<Bson>) -> Document {
        operator("$search", args)
    }

    /// Alias of `$addFields`.
    pub fn set(spec: impl Into<Bson>) -> Document {
        operator("$set", spec)
    }

    /// Computes window outputs. Outputs for the same field are merged last
    /// write wins.
    pub fn set_window_fields(outputs: impl IntoIterator<Item = WindowOutput>) -> SetWindowFieldsStage {
        SetWindowFieldsStage::from_spec(fields([("output", Bson::Document(merge(outputs)))]))
    }

    /// Skips the first `n` documents.
    pub fn skip(n: i64) -> Document {
        operator("$skip", n)
    }

    /// Sorts documents, e.g. `{ age: -1 }`.
    pub fn sort(order: impl Into<Bson>) -> Document {
        operator("$sort", order)
    }

    /// Groups by `expr` and sorts by the count of each group.
    pub fn sort_by_count(expr: impl Into<Bson>) -> Document {
        operator("$sortByCount", expr)
    }

    /// Adds the documents of `collection` to the pipeline results.
    pub fn union_with(collection: impl Into<String>) -> UnionWithStage {
        UnionWithStage::from_spec(fields([("coll", Bson::String(collection.into()))]))
    }

    /// Removes fields. A single field is written bare, several as an array.
    pub fn unset<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Document {
        operator(
            "$unset",
            collapse(names.into_iter().map(|name| Bson::String(name.into()))),
        )
    }

    /// Deconstructs the array at `path`; a missing `$` prefix is added.
    pub fn unwind(path: impl AsRef<str>) -> UnwindStage {
        UnwindStage {
            payload: Payload::Shorthand(Bson::String(field_path(path.as_ref()))),
        }
    }
}

operator_builder! {
    /// Builder returned from [`Stage::bucket`].
    pub struct BucketStage => "$bucket";
}

impl BucketStage {
    /// Sets the bucket id for documents outside every boundary.
    pub fn set_default(self, literal: impl Into<Bson>) -> Self {
        self.with("default", literal)
    }

    /// Sets the fields computed for each bucket; defaults to a `count`.
    pub fn set_output(self, output: impl Into<Bson>) -> Self {
        self.with("output", output)
    }
}

operator_builder! {
    /// Builder returned from [`Stage::bucket_auto`].
    pub struct BucketAutoStage => "$bucketAuto";
}

impl BucketAutoStage {
    /// Sets the fields computed for each bucket; defaults to a `count`.
    pub fn set_output(self, output: impl Into<Bson>) -> Self {
        self.with("output", output)
    }

    /// Sets a preferred number series such as `"R5"` or `"POWERSOF2"`.
    pub fn set_granularity(self, granularity: impl Into<String>) -> Self {
        self.with("granularity", Bson::String(granularity.into()))
    }
}

operator_builder! {
    /// Builder returned from [`Stage::coll_stats`].
    pub struct CollStatsStage => "$collStats";
}

impl CollStatsStage {
    /// Adds latency statistics, with histograms when `histograms` is true.
    pub fn set_latency_stats(self, histograms: bool) -> Self {
        self.with("latencyStats", fields([("histograms", Bson::Boolean(histograms))]))
    }

    /// Adds storage statistics scaled by `scale`.
    pub fn set_storage_stats(self, scale: i64) -> Self {
        self.with("storageStats", fields([("scale", Bson::Int64(scale))]))
    }

    /// Adds the document count.
    pub fn set_count(self) -> Self {
        self.with("count", Document::new())
    }
}

operator_builder! {
    /// Builder returned from [`Stage::geo_near`].
    pub struct GeoNearStage => "$geoNear";
}

impl GeoNearStage {
    /// Uses spherical geometry.
    pub fn set_spherical(self, spherical: bool) -> Self {
        self.with("spherical", spherical)
    }

    /// Sets the greatest distance from the center.
    pub fn set_max_distance(self, distance: f64) -> Self {
        self.with("maxDistance", distance)
    }

    /// Sets the smallest distance from the center.
    pub fn set_min_distance(self, distance: f64) -> Self {
        self.with("minDistance", distance)
    }

    /// Restricts the candidates with a query filter.
    pub fn set_query(self, query: impl Into<Bson>) -> Self {
        self.with("query", query)
    }

    /// Sets the factor every distance is multiplied by.
    pub fn set_distance_multiplier(self, multiplier: f64) -> Self {
        self.with("distanceMultiplier", multiplier)
    }

    /// Names the field that receives the matched location.
    pub fn set_include_locs(self, field: impl Into<String>) -> Self {
        self.with("includeLocs", Bson::String(field.into()))
    }

    /// Returns each matching document once even if it matches several locations.
    pub fn set_unique_docs(self, unique_docs: bool) -> Self {
        self.with("uniqueDocs", unique_docs)
    }

    /// Selects the geospatial index to use.
    pub fn set_key(self, key: impl Into<String>) -> Self {
        self.with("key", Bson::String(key.into()))
    }
}

operator_builder! {
    /// Builder returned from [`Stage::graph_lookup`].
    pub struct GraphLookupStage => "$graphLookup";
}

impl GraphLookupStage {
    /// Caps the recursion depth.
    pub fn set_max_depth(self, max_depth: i64) -> Self {
        self.with("maxDepth", max_depth)
    }

    /// Names the field holding the recursion depth of each document.
    pub fn set_depth_field(self, field: impl Into<String>) -> Self {
        self.with("depthField", Bson::String(field.into()))
    }

    /// Limits the documents searched to those matching `query`.
    pub fn set_restrict_search_with_match(self, query: impl Into<Bson>) -> Self {
        self.with("restrictSearchWithMatch", query)
    }
}

operator_builder! {
    /// Builder returned from [`Stage::lookup_pipeline`].
    pub struct LookupPipelineStage => "$lookup";
}

impl LookupPipelineStage {
    /// Binds variables usable in the pipeline as `$$name`.
    pub fn set_let(self, vars: impl Into<Bson>) -> Self {
        self.with("let", vars)
    }
}

operator_builder! {
    /// Builder returned from [`Stage::merge`].
    pub struct MergeStage => "$merge";
}

impl MergeStage {
    /// Sets the field or fields identifying a matching document.
    pub fn set_on(self, on: impl Into<Bson>) -> Self {
        self.with("on", on)
    }

    /// Sets the action or pipeline used when a document matches.
    pub fn set_when_matched(self, when_matched: impl Into<Bson>) -> Self {
        self.with("whenMatched", when_matched)
    }

    /// Binds variables usable in the `whenMatched` pipeline.
    pub fn set_let(self, vars: impl Into<Bson>) -> Self {
        self.with("let", vars)
    }

    /// Sets the action for documents without a match, e.g. `"insert"` or `"discard"`.
    pub fn set_when_not_matched(self, when_not_matched: impl Into<Bson>) -> Self {
        self.with("whenNotMatched", when_not_matched)
    }
}

operator_builder! {
    /// Builder returned from [`Stage::set_window_fields`].
    pub struct SetWindowFieldsStage => "$setWindowFields";
}

impl SetWindowFieldsStage {
    /// Sets the expression that partitions the documents.
    pub fn set_partition_by(self, expr: impl Into<Bson>) -> Self {
        self.with("partitionBy", expr)
    }

    /// Sets the order of documents in each partition.
    pub fn set_sort_by(self, sort: impl Into<Bson>) -> Self {
        self.with("sortBy", sort)
    }
}

/// One output field of [`Stage::set_window_fields`].
///
/// Window bounds are written into a `window` document next to the operator:
/// `{ total: { $sum: "$qty", window: { documents: ["unbounded", "current"] } } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOutput {
    field: String,
    operator: Document,
}

impl WindowOutput {
    /// Computes `operator`, an accumulator or window operator, into `field`.
    pub fn new(field: impl Into<String>, operator: impl Into<Document>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
        }
    }

    fn set_window(mut self, key: &str, value: impl Into<Bson>) -> Self {
        let mut window = match self.operator.remove("window") {
            Some(Bson::Document(window)) => window,
            _ => Document::new(),
        };
        window.insert(key, value.into());
        self.operator.insert("window", window);
        self
    }

    /// Bounds the window by document positions relative to the current one.
    pub fn set_documents(self, lower: impl Into<Bson>, upper: impl Into<Bson>) -> Self {
        self.set_window("documents", Bson::Array(vec![lower.into(), upper.into()]))
    }

    /// Bounds the window by a range of `sortBy` values.
    pub fn set_range(self, lower: impl Into<Bson>, upper: impl Into<Bson>) -> Self {
        self.set_window("range", Bson::Array(vec![lower.into(), upper.into()]))
    }

    /// Sets the unit of a time based range.
    pub fn set_unit(self, unit: TimeUnit) -> Self {
        self.set_window("unit", unit)
    }

    /// Returns the name of the output field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the `{ field: operator }` document.
    pub fn into_document(self) -> Document {
        operator(&self.field, self.operator)
    }
}

impl_into_document!(WindowOutput);

operator_builder! {
    /// Builder returned from [`Stage::union_with`].
    pub struct UnionWithStage => "$unionWith";
}

impl UnionWithStage {
    /// Sets the pipeline applied to the unioned collection.
    pub fn set_pipeline(self, pipeline: impl Into<Bson>) -> Self {
        self.with("pipeline", pipeline)
    }
}

/// Builder returned from [`Stage::unwind`].
///
/// The stage is written as `{ $unwind: "$path" }` until an option is set, and
/// as `{ $unwind: { path: "$path", ... } }` afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UnwindStage {
    payload: Payload,
}

impl UnwindStage {
    /// Names a field that receives the array index of each element.
    pub fn set_include_array_index(mut self, field: impl Into<String>) -> Self {
        self.payload = self
            .payload
            .set(PATH_FIELD, "includeArrayIndex", Bson::String(field.into()));
        self
    }

    /// Keeps documents whose array is null, missing or empty.
    pub fn set_preserve_null_and_empty_arrays(mut self, preserve: bool) -> Self {
        self.payload = self
            .payload
            .set(PATH_FIELD, "preserveNullAndEmptyArrays", preserve);
        self
    }

    /// Returns `{ $unwind: "$path" }`, or the document form once an option is set.
    pub fn into_document(self) -> Document {
        operator("$unwind", self.payload.into_bson())
    }
}

impl_into_document!(UnwindStage);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accumulator::Accumulator, window::Window};
    use bson::doc;

    #[test]
    fn test_unwind_prefix() {
        assert_eq!(Stage::unwind("sizes").into_document(), doc! { "$unwind": "$sizes" });
        assert_eq!(Stage::unwind("$sizes").into_document(), doc! { "$unwind": "$sizes" });
    }

    #[test]
    fn test_unwind_options_promote_path() {
        let unwind = Stage::unwind("sizes")
            .set_include_array_index("idx")
            .set_preserve_null_and_empty_arrays(true);

        assert_eq!(
            unwind.into_document(),
            doc! {
                "$unwind": {
                    "path": "$sizes",
                    "includeArrayIndex": "idx",
                    "preserveNullAndEmptyArrays": true,
                }
            }
        );
    }

    #[test]
    fn test_unset_collapses() {
        assert_eq!(Stage::unset(["isbn"]), doc! { "$unset": "isbn" });
        assert_eq!(
            Stage::unset(["isbn", "copies"]),
            doc! { "$unset": ["isbn", "copies"] }
        );
    }

    #[test]
    fn test_list_sessions_name() {
        assert_eq!(
            Stage::list_sessions(doc! { "allUsers": true }),
            doc! { "$listSessions": { "allUsers": true } }
        );
        assert_eq!(
            Stage::list_local_sessions(Document::new()),
            doc! { "$listLocalSessions": {} }
        );
    }

    #[test]
    fn test_set_window_fields() {
        let stage = Stage::set_window_fields([
            WindowOutput::new("cumulativeQty", Accumulator::sum(["$qty"]))
                .set_documents("unbounded", "current"),
            WindowOutput::new("rank", Window::rank()),
            WindowOutput::new("avgQty", Accumulator::avg(["$qty"]))
                .set_range(-10, 0)
                .set_unit(TimeUnit::Day),
        ])
        .set_partition_by("$state")
        .set_sort_by(doc! { "orderDate": 1 });

        assert_eq!(
            stage.into_document(),
            doc! {
                "$setWindowFields": {
                    "output": {
                        "cumulativeQty": {
                            "$sum": "$qty",
                            "window": { "documents": ["unbounded", "current"] },
                        },
                        "rank": { "$rank": {} },
                        "avgQty": {
                            "$avg": "$qty",
                            "window": { "range": [-10, 0], "unit": "day" },
                        },
                    },
                    "partitionBy": "$state",
                    "sortBy": { "orderDate": 1 },
                }
            }
        );
    }

    #[test]
    fn test_set_window_fields_same_field_last_wins() {
        let stage = Stage::set_window_fields([
            WindowOutput::new("total", Accumulator::sum(["$a"])),
            WindowOutput::new("total", Accumulator::sum(["$b"])),
        ]);

        assert_eq!(
            stage.spec().get_document("output").unwrap(),
            &doc! { "total": { "$sum": "$b" } }
        );
    }

    #[test]
    fn test_lookups() {
        assert_eq!(
            Stage::lookup("inventory", "item", "sku", "inventory_docs"),
            doc! {
                "$lookup": {
                    "from": "inventory",
                    "localField": "item",
                    "foreignField": "sku",
                    "as": "inventory_docs",
                }
            }
        );

        let lookup = Stage::lookup_pipeline(
            "warehouses",
            vec![Stage::match_(doc! { "$expr": { "$eq": ["$stock_item", "$$order_item"] } })],
            "stockdata",
        )
        .set_let(doc! { "order_item": "$item" });

        assert_eq!(
            lookup.into_document(),
            doc! {
                "$lookup": {
                    "from": "warehouses",
                    "pipeline": [{ "$match": { "$expr": { "$eq": ["$stock_item", "$$order_item"] } } }],
                    "as": "stockdata",
                    "let": { "order_item": "$item" },
                }
            }
        );
    }

    #[test]
    fn test_graph_lookup() {
        let stage = Stage::graph_lookup("employees", "$reportsTo", "reportsTo", "name", "chain")
            .set_max_depth(2)
            .set_depth_field("level");

        assert_eq!(
            stage.into_document(),
            doc! {
                "$graphLookup": {
                    "from": "employees",
                    "startWith": "$reportsTo",
                    "connectFromField": "reportsTo",
                    "connectToField": "name",
                    "as": "chain",
                    "maxDepth": 2_i64,
                    "depthField": "level",
                }
            }
        );
    }

    #[test]
    fn test_merge_stage() {
        let stage = Stage::merge(doc! { "db": "reporting", "coll": "budgets" })
            .set_on("_id")
            .set_when_matched("replace")
            .set_when_not_matched("insert");

        assert_eq!(
            stage.into_document(),
            doc! {
                "$merge": {
                    "into": { "db": "reporting", "coll": "budgets" },
                    "on": "_id",
                    "whenMatched": "replace",
                    "whenNotMatched": "insert",
                }
            }
        );
    }

    #[test]
    fn test_union_with_pipeline() {
        assert_eq!(
            Stage::union_with("warehouses").into_document(),
            doc! { "$unionWith": { "coll": "warehouses" } }
        );
        assert_eq!(
            Stage::union_with("warehouses")
                .set_pipeline(vec![Stage::limit(1)])
                .into_document(),
            doc! { "$unionWith": { "coll": "warehouses", "pipeline": [{ "$limit": 1_i64 }] } }
        );
    }

    #[test]
    fn test_buckets() {
        let bucket = Stage::bucket("$year", vec![1890, 1910, 1920])
            .set_default("Other")
            .set_output(doc! { "count": Accumulator::sum([1]) });
        let auto = Stage::bucket_auto("$price", 4).set_granularity("R5");

        assert_eq!(
            bucket.into_document(),
            doc! {
                "$bucket": {
                    "groupBy": "$year",
                    "boundaries": [1890, 1910, 1920],
                    "default": "Other",
                    "output": { "count": { "$sum": 1 } },
                }
            }
        );
        assert_eq!(
            auto.into_document(),
            doc! { "$bucketAuto": { "groupBy": "$price", "buckets": 4, "granularity": "R5" } }
        );
    }

    #[test]
    fn test_coll_stats() {
        let stage = Stage::coll_stats()
            .set_latency_stats(true)
            .set_storage_stats(1024)
            .set_count();

        assert_eq!(
            stage.into_document(),
            doc! {
                "$collStats": {
                    "latencyStats": { "histograms": true },
                    "storageStats": { "scale": 1024_i64 },
                    "count": {},
                }
            }
        );
    }

    #[test]
    fn test_geo_near() {
        let stage = Stage::geo_near(doc! { "type": "Point", "coordinates": [-73.99, 40.73] }, "dist")
            .set_spherical(true)
            .set_max_distance(2.0)
            .set_query(doc! { "category": "Parks" })
            .set_include_locs("dist.location");

        assert_eq!(
            stage.into_document(),
            doc! {
                "$geoNear": {
                    "near": { "type": "Point", "coordinates": [-73.99, 40.73] },
                    "distanceField": "dist",
                    "spherical": true,
                    "maxDistance": 2.0,
                    "query": { "category": "Parks" },
                    "includeLocs": "dist.location",
                }
            }
        );
    }

    #[test]
    fn test_simple_stages() {
        assert_eq!(Stage::count("passing"), doc! { "$count": "passing" });
        assert_eq!(Stage::sample(3), doc! { "$sample": { "size": 3_i64 } });
        assert_eq!(Stage::skip(5), doc! { "$skip": 5_i64 });
        assert_eq!(Stage::out("authors"), doc! { "$out": "authors" });
        assert_eq!(Stage::index_stats(), doc! { "$indexStats": {} });
        assert_eq!(Stage::plan_cache_stats(), doc! { "$planCacheStats": {} });
        assert_eq!(
            Stage::replace_root("$name"),
            doc! { "$replaceRoot": { "newRoot": "$name" } }
        );
        assert_eq!(Stage::sort_by_count("$tags"), doc! { "$sortByCount": "$tags" });
    }
}
