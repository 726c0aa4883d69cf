//! Geospatial query operators and shape specifiers.
//!
//! GeoJSON based operators keep their distance options inside the operator
//! payload (`{ $near: { $geometry: ..., $maxDistance: 10 } }`), while the
//! legacy coordinate pair forms put them next to the operator key
//! (`{ $near: [x, y], $maxDistance: 0.1 }`). Both shapes are modelled here.

use bson::{Bson, Document};
use docexpr_core::{
    builder::{fields, operator},
    impl_into_document, operator_builder,
};

use crate::filter::Filter;

impl Filter {
    /// Matches geometries that intersect the given GeoJSON object.
    pub fn geo_intersects(geometry: impl Into<Bson>) -> Document {
        operator("$geoIntersects", geometry)
    }

    /// Matches geometries entirely within the given shape.
    pub fn geo_within(shape: impl Into<Bson>) -> Document {
        operator("$geoWithin", shape)
    }

    /// Returns documents ordered by proximity to a GeoJSON point.
    pub fn near(longitude: f64, latitude: f64) -> NearOperator {
        NearOperator::from_spec(Self::geometry("Point", vec![longitude, latitude]).into_document())
    }

    /// Returns documents ordered by proximity to a GeoJSON point on a sphere.
    pub fn near_sphere(longitude: f64, latitude: f64) -> NearSphereOperator {
        NearSphereOperator::from_spec(Self::geometry("Point", vec![longitude, latitude]).into_document())
    }

    /// Returns documents ordered by proximity to a legacy coordinate pair.
    pub fn near_legacy(x: f64, y: f64) -> LegacyNearOperator {
        LegacyNearOperator::new("$near", x, y)
    }

    /// Returns documents ordered by spherical proximity to a legacy coordinate pair.
    pub fn near_sphere_legacy(x: f64, y: f64) -> LegacyNearOperator {
        LegacyNearOperator::new("$nearSphere", x, y)
    }

    /// A rectangle given by its bottom left and upper right corners, for `$geoWithin`.
    pub fn box_(x1: f64, y1: f64, x2: f64, y2: f64) -> Document {
        operator("$box", vec![vec![x1, y1], vec![x2, y2]])
    }

    /// A circle on a flat plane, for `$geoWithin`.
    pub fn center(x: f64, y: f64, radius: f64) -> Document {
        operator("$center", Bson::Array(vec![vec![x, y].into(), radius.into()]))
    }

    /// A circle on a sphere with its radius in radians, for `$geoWithin`.
    pub fn center_sphere(x: f64, y: f64, radius: f64) -> Document {
        operator("$centerSphere", Bson::Array(vec![vec![x, y].into(), radius.into()]))
    }

    /// A polygon given by legacy coordinate pairs, for `$geoWithin`.
    pub fn polygon(points: impl IntoIterator<Item = (f64, f64)>) -> Document {
        operator(
            "$polygon",
            points
                .into_iter()
                .map(|(x, y)| vec![x, y])
                .collect::<Vec<_>>(),
        )
    }

    /// A GeoJSON geometry of the given type.
    pub fn geometry(kind: impl Into<String>, coordinates: impl Into<Bson>) -> GeometryOperator {
        GeometryOperator::from_spec(fields([
            ("type", Bson::String(kind.into())),
            ("coordinates", coordinates.into()),
        ]))
    }
}

operator_builder! {
    /// Builder returned from [`Filter::geometry`].
    pub struct GeometryOperator => "$geometry";
}

impl GeometryOperator {
    /// Sets a custom coordinate reference system.
    pub fn set_crs(self, crs: impl Into<Bson>) -> Self {
        self.with("crs", crs)
    }
}

operator_builder! {
    /// Builder returned from [`Filter::near`].
    pub struct NearOperator => "$near";
}

impl NearOperator {
    /// Sets the minimum distance in meters.
    pub fn set_min_distance(self, meters: f64) -> Self {
        self.with("$minDistance", meters)
    }

    /// Sets the maximum distance in meters.
    pub fn set_max_distance(self, meters: f64) -> Self {
        self.with("$maxDistance", meters)
    }
}

operator_builder! {
    /// Builder returned from [`Filter::near_sphere`].
    pub struct NearSphereOperator => "$nearSphere";
}

impl NearSphereOperator {
    /// Sets the minimum distance in meters.
    pub fn set_min_distance(self, meters: f64) -> Self {
        self.with("$minDistance", meters)
    }

    /// Sets the maximum distance in meters.
    pub fn set_max_distance(self, meters: f64) -> Self {
        self.with("$maxDistance", meters)
    }
}

/// Builder returned from [`Filter::near_legacy`] and [`Filter::near_sphere_legacy`].
///
/// Distance options are siblings of the operator key, so the finished document
/// may hold up to three keys.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyNearOperator {
    document: Document,
}

impl LegacyNearOperator {
    fn new(name: &str, x: f64, y: f64) -> Self {
        Self {
            document: operator(name, vec![x, y]),
        }
    }

    /// Sets the minimum distance, in radians for `$nearSphere`.
    pub fn set_min_distance(mut self, distance: f64) -> Self {
        self.document.insert("$minDistance", distance);
        self
    }

    /// Sets the maximum distance, in the units of the coordinate system.
    pub fn set_max_distance(mut self, distance: f64) -> Self {
        self.document.insert("$maxDistance", distance);
        self
    }

    /// Returns the finished document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

impl_into_document!(LegacyNearOperator);
