use crate::ast::Operator;
use crate::error::QdslResult;
use crate::templates::{Templates, TemplatesBuilder};
use std::sync::Arc;

/// PostGIS: PostgreSQL plus the `ST_` spatial functions.
pub fn postgis(escape: char) -> QdslResult<Arc<Templates>> {
    let pg = super::postgres(escape)?;
    TemplatesBuilder::extending(&pg, "postgis")
        .add(Operator::GeoDimension, "ST_Dimension({0})")
        .add(Operator::GeoGeometryType, "ST_GeometryType({0})")
        .add(Operator::GeoAsText, "ST_AsText({0})")
        .add(Operator::GeoAsBinary, "ST_AsBinary({0})")
        .add(Operator::GeoSrid, "ST_SRID({0})")
        .add(Operator::GeoSetSrid, "ST_SetSRID({0},{1})")
        .add(Operator::GeoFromText, "ST_GeomFromText({0},{1})")
        .add(Operator::GeoIsEmpty, "ST_IsEmpty({0})")
        .add(Operator::GeoIsSimple, "ST_IsSimple({0})")
        .add(Operator::GeoBoundary, "ST_Boundary({0})")
        .add(Operator::GeoEnvelope, "ST_Envelope({0})")
        .add(Operator::GeoEquals, "ST_Equals({0},{1})")
        .add(Operator::GeoDisjoint, "ST_Disjoint({0},{1})")
        .add(Operator::GeoIntersects, "ST_Intersects({0},{1})")
        .add(Operator::GeoTouches, "ST_Touches({0},{1})")
        .add(Operator::GeoCrosses, "ST_Crosses({0},{1})")
        .add(Operator::GeoWithin, "ST_Within({0},{1})")
        .add(Operator::GeoContains, "ST_Contains({0},{1})")
        .add(Operator::GeoOverlaps, "ST_Overlaps({0},{1})")
        .add(Operator::GeoRelate, "ST_Relate({0},{1},{2})")
        .add(Operator::GeoDistance, "ST_Distance({0},{1})")
        .add(Operator::GeoDwithin, "ST_DWithin({0},{1},{2})")
        .add(Operator::GeoBuffer, "ST_Buffer({0},{1})")
        .add(Operator::GeoConvexHull, "ST_ConvexHull({0})")
        .add(Operator::GeoIntersection, "ST_Intersection({0},{1})")
        .add(Operator::GeoUnion, "ST_Union({0},{1})")
        .add(Operator::GeoDifference, "ST_Difference({0},{1})")
        .add(Operator::GeoSymDifference, "ST_SymDifference({0},{1})")
        .add(Operator::GeoX, "ST_X({0})")
        .add(Operator::GeoY, "ST_Y({0})")
        .add(Operator::GeoZ, "ST_Z({0})")
        .add(Operator::GeoM, "ST_M({0})")
        .add(Operator::GeoStartPoint, "ST_StartPoint({0})")
        .add(Operator::GeoEndPoint, "ST_EndPoint({0})")
        .add(Operator::GeoIsClosed, "ST_IsClosed({0})")
        .add(Operator::GeoIsRing, "ST_IsRing({0})")
        .add(Operator::GeoNumPoints, "ST_NumPoints({0})")
        .add(Operator::GeoPointN, "ST_PointN({0},{1})")
        .add(Operator::GeoArea, "ST_Area({0})")
        .add(Operator::GeoLength, "ST_Length({0})")
        .add(Operator::GeoCentroid, "ST_Centroid({0})")
        .add(Operator::GeoPointOnSurface, "ST_PointOnSurface({0})")
        .add(Operator::GeoExteriorRing, "ST_ExteriorRing({0})")
        .add(Operator::GeoNumInteriorRings, "ST_NumInteriorRings({0})")
        .add(Operator::GeoInteriorRingN, "ST_InteriorRingN({0},{1})")
        .add(Operator::GeoNumGeometries, "ST_NumGeometries({0})")
        .add(Operator::GeoGeometryN, "ST_GeometryN({0},{1})")
        .build()
}
