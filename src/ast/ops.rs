use super::ValueKind;
use serde::{Deserialize, Serialize};

/// Functional family of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorFamily {
    Boolean,
    Comparison,
    Arithmetic,
    String,
    Collection,
    DateTime,
    Case,
    Path,
    Aggregate,
    Spatial,
    Various,
}

/// Operator symbols.
///
/// Dialect tables key off the variant itself, so existing variants must never
/// be renamed or removed. New operators are additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    // boolean
    And,
    Or,
    Not,
    Xor,
    Xnor,

    // comparison
    Eq,
    Ne,
    Lt,
    Loe,
    Gt,
    Goe,
    Between,
    IsNull,
    IsNotNull,
    EqIgnoreCase,
    In,
    NotIn,
    InstanceOf,

    // arithmetic
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Negate,
    Abs,
    Sqrt,
    Power,
    Round,
    Ceil,
    Floor,
    Exp,
    Ln,
    Log,
    Sign,

    // string
    Concat,
    Lower,
    Upper,
    Trim,
    Length,
    Substring,
    SubstringLen,
    Like,
    LikeEscape,
    Matches,
    MatchesIc,
    StartsWith,
    StartsWithIc,
    EndsWith,
    EndsWithIc,
    StringContains,
    StringContainsIc,
    StringIsEmpty,
    IndexOf,
    IndexOfFrom,
    CharAt,
    StringCast,

    // collection and quantifiers
    All,
    Any,
    Exists,
    ColSize,
    ColIsEmpty,
    MemberOf,
    List,

    // date and time
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Sysdate,
    Year,
    Month,
    Week,
    DayOfMonth,
    DayOfWeek,
    DayOfYear,
    Hour,
    Minute,
    Second,
    Millisecond,

    // case
    Case,
    CaseWhen,
    CaseElse,
    CaseEq,
    CaseEqWhen,
    CaseEqElse,
    Coalesce,
    Nullif,

    // path rendering
    Property,
    Variable,

    // aggregates and windows
    Count,
    CountDistinct,
    CountAll,
    Sum,
    Avg,
    Min,
    Max,
    RowNumber,
    Rank,
    DenseRank,
    Over,
    OverEmpty,
    WindowSpec,
    PartitionBy,
    OrderBy,
    Asc,
    Desc,
    Lead,
    Lag,
    FirstValue,
    LastValue,
    NthValue,
    Ntile,
    CumeDist,
    PercentRank,
    Stddev,
    StddevPop,
    StddevSamp,
    StddevDistinct,
    Variance,
    VarPop,
    VarSamp,
    Corr,
    CovarPop,
    CovarSamp,
    RegrSlope,
    RegrIntercept,
    RegrCount,
    RegrR2,
    RegrAvgx,
    RegrAvgy,
    RegrSxx,
    RegrSyy,
    RegrSxy,
    RatioToReport,

    // spatial
    GeoDimension,
    GeoGeometryType,
    GeoAsText,
    GeoAsBinary,
    GeoSrid,
    GeoSetSrid,
    GeoFromText,
    GeoIsEmpty,
    GeoIsSimple,
    GeoBoundary,
    GeoEnvelope,
    GeoEquals,
    GeoDisjoint,
    GeoIntersects,
    GeoTouches,
    GeoCrosses,
    GeoWithin,
    GeoContains,
    GeoOverlaps,
    GeoRelate,
    GeoDistance,
    GeoDwithin,
    GeoBuffer,
    GeoConvexHull,
    GeoIntersection,
    GeoUnion,
    GeoDifference,
    GeoSymDifference,
    GeoX,
    GeoY,
    GeoZ,
    GeoM,
    GeoStartPoint,
    GeoEndPoint,
    GeoIsClosed,
    GeoIsRing,
    GeoNumPoints,
    GeoPointN,
    GeoArea,
    GeoLength,
    GeoCentroid,
    GeoPointOnSurface,
    GeoExteriorRing,
    GeoNumInteriorRings,
    GeoInteriorRingN,
    GeoNumGeometries,
    GeoGeometryN,

    // various
    Alias,
    Cast,
    NextVal,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: &'static [Operator] = &[
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Xor,
        Operator::Xnor,
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Loe,
        Operator::Gt,
        Operator::Goe,
        Operator::Between,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::EqIgnoreCase,
        Operator::In,
        Operator::NotIn,
        Operator::InstanceOf,
        Operator::Add,
        Operator::Sub,
        Operator::Mult,
        Operator::Div,
        Operator::Mod,
        Operator::Negate,
        Operator::Abs,
        Operator::Sqrt,
        Operator::Power,
        Operator::Round,
        Operator::Ceil,
        Operator::Floor,
        Operator::Exp,
        Operator::Ln,
        Operator::Log,
        Operator::Sign,
        Operator::Concat,
        Operator::Lower,
        Operator::Upper,
        Operator::Trim,
        Operator::Length,
        Operator::Substring,
        Operator::SubstringLen,
        Operator::Like,
        Operator::LikeEscape,
        Operator::Matches,
        Operator::MatchesIc,
        Operator::StartsWith,
        Operator::StartsWithIc,
        Operator::EndsWith,
        Operator::EndsWithIc,
        Operator::StringContains,
        Operator::StringContainsIc,
        Operator::StringIsEmpty,
        Operator::IndexOf,
        Operator::IndexOfFrom,
        Operator::CharAt,
        Operator::StringCast,
        Operator::All,
        Operator::Any,
        Operator::Exists,
        Operator::ColSize,
        Operator::ColIsEmpty,
        Operator::MemberOf,
        Operator::List,
        Operator::CurrentDate,
        Operator::CurrentTime,
        Operator::CurrentTimestamp,
        Operator::Sysdate,
        Operator::Year,
        Operator::Month,
        Operator::Week,
        Operator::DayOfMonth,
        Operator::DayOfWeek,
        Operator::DayOfYear,
        Operator::Hour,
        Operator::Minute,
        Operator::Second,
        Operator::Millisecond,
        Operator::Case,
        Operator::CaseWhen,
        Operator::CaseElse,
        Operator::CaseEq,
        Operator::CaseEqWhen,
        Operator::CaseEqElse,
        Operator::Coalesce,
        Operator::Nullif,
        Operator::Property,
        Operator::Variable,
        Operator::Count,
        Operator::CountDistinct,
        Operator::CountAll,
        Operator::Sum,
        Operator::Avg,
        Operator::Min,
        Operator::Max,
        Operator::RowNumber,
        Operator::Rank,
        Operator::DenseRank,
        Operator::Over,
        Operator::OverEmpty,
        Operator::WindowSpec,
        Operator::PartitionBy,
        Operator::OrderBy,
        Operator::Asc,
        Operator::Desc,
        Operator::Lead,
        Operator::Lag,
        Operator::FirstValue,
        Operator::LastValue,
        Operator::NthValue,
        Operator::Ntile,
        Operator::CumeDist,
        Operator::PercentRank,
        Operator::Stddev,
        Operator::StddevPop,
        Operator::StddevSamp,
        Operator::StddevDistinct,
        Operator::Variance,
        Operator::VarPop,
        Operator::VarSamp,
        Operator::Corr,
        Operator::CovarPop,
        Operator::CovarSamp,
        Operator::RegrSlope,
        Operator::RegrIntercept,
        Operator::RegrCount,
        Operator::RegrR2,
        Operator::RegrAvgx,
        Operator::RegrAvgy,
        Operator::RegrSxx,
        Operator::RegrSyy,
        Operator::RegrSxy,
        Operator::RatioToReport,
        Operator::GeoDimension,
        Operator::GeoGeometryType,
        Operator::GeoAsText,
        Operator::GeoAsBinary,
        Operator::GeoSrid,
        Operator::GeoSetSrid,
        Operator::GeoFromText,
        Operator::GeoIsEmpty,
        Operator::GeoIsSimple,
        Operator::GeoBoundary,
        Operator::GeoEnvelope,
        Operator::GeoEquals,
        Operator::GeoDisjoint,
        Operator::GeoIntersects,
        Operator::GeoTouches,
        Operator::GeoCrosses,
        Operator::GeoWithin,
        Operator::GeoContains,
        Operator::GeoOverlaps,
        Operator::GeoRelate,
        Operator::GeoDistance,
        Operator::GeoDwithin,
        Operator::GeoBuffer,
        Operator::GeoConvexHull,
        Operator::GeoIntersection,
        Operator::GeoUnion,
        Operator::GeoDifference,
        Operator::GeoSymDifference,
        Operator::GeoX,
        Operator::GeoY,
        Operator::GeoZ,
        Operator::GeoM,
        Operator::GeoStartPoint,
        Operator::GeoEndPoint,
        Operator::GeoIsClosed,
        Operator::GeoIsRing,
        Operator::GeoNumPoints,
        Operator::GeoPointN,
        Operator::GeoArea,
        Operator::GeoLength,
        Operator::GeoCentroid,
        Operator::GeoPointOnSurface,
        Operator::GeoExteriorRing,
        Operator::GeoNumInteriorRings,
        Operator::GeoInteriorRingN,
        Operator::GeoNumGeometries,
        Operator::GeoGeometryN,
        Operator::Alias,
        Operator::Cast,
        Operator::NextVal,
    ];

    /// Stable human-readable name, identical to the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Xor => "XOR",
            Operator::Xnor => "XNOR",
            Operator::Eq => "EQ",
            Operator::Ne => "NE",
            Operator::Lt => "LT",
            Operator::Loe => "LOE",
            Operator::Gt => "GT",
            Operator::Goe => "GOE",
            Operator::Between => "BETWEEN",
            Operator::IsNull => "IS_NULL",
            Operator::IsNotNull => "IS_NOT_NULL",
            Operator::EqIgnoreCase => "EQ_IGNORE_CASE",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
            Operator::InstanceOf => "INSTANCE_OF",
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mult => "MULT",
            Operator::Div => "DIV",
            Operator::Mod => "MOD",
            Operator::Negate => "NEGATE",
            Operator::Abs => "ABS",
            Operator::Sqrt => "SQRT",
            Operator::Power => "POWER",
            Operator::Round => "ROUND",
            Operator::Ceil => "CEIL",
            Operator::Floor => "FLOOR",
            Operator::Exp => "EXP",
            Operator::Ln => "LN",
            Operator::Log => "LOG",
            Operator::Sign => "SIGN",
            Operator::Concat => "CONCAT",
            Operator::Lower => "LOWER",
            Operator::Upper => "UPPER",
            Operator::Trim => "TRIM",
            Operator::Length => "LENGTH",
            Operator::Substring => "SUBSTRING",
            Operator::SubstringLen => "SUBSTRING_LEN",
            Operator::Like => "LIKE",
            Operator::LikeEscape => "LIKE_ESCAPE",
            Operator::Matches => "MATCHES",
            Operator::MatchesIc => "MATCHES_IC",
            Operator::StartsWith => "STARTS_WITH",
            Operator::StartsWithIc => "STARTS_WITH_IC",
            Operator::EndsWith => "ENDS_WITH",
            Operator::EndsWithIc => "ENDS_WITH_IC",
            Operator::StringContains => "STRING_CONTAINS",
            Operator::StringContainsIc => "STRING_CONTAINS_IC",
            Operator::StringIsEmpty => "STRING_IS_EMPTY",
            Operator::IndexOf => "INDEX_OF",
            Operator::IndexOfFrom => "INDEX_OF_FROM",
            Operator::CharAt => "CHAR_AT",
            Operator::StringCast => "STRING_CAST",
            Operator::All => "ALL",
            Operator::Any => "ANY",
            Operator::Exists => "EXISTS",
            Operator::ColSize => "COL_SIZE",
            Operator::ColIsEmpty => "COL_IS_EMPTY",
            Operator::MemberOf => "MEMBER_OF",
            Operator::List => "LIST",
            Operator::CurrentDate => "CURRENT_DATE",
            Operator::CurrentTime => "CURRENT_TIME",
            Operator::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Operator::Sysdate => "SYSDATE",
            Operator::Year => "YEAR",
            Operator::Month => "MONTH",
            Operator::Week => "WEEK",
            Operator::DayOfMonth => "DAY_OF_MONTH",
            Operator::DayOfWeek => "DAY_OF_WEEK",
            Operator::DayOfYear => "DAY_OF_YEAR",
            Operator::Hour => "HOUR",
            Operator::Minute => "MINUTE",
            Operator::Second => "SECOND",
            Operator::Millisecond => "MILLISECOND",
            Operator::Case => "CASE",
            Operator::CaseWhen => "CASE_WHEN",
            Operator::CaseElse => "CASE_ELSE",
            Operator::CaseEq => "CASE_EQ",
            Operator::CaseEqWhen => "CASE_EQ_WHEN",
            Operator::CaseEqElse => "CASE_EQ_ELSE",
            Operator::Coalesce => "COALESCE",
            Operator::Nullif => "NULLIF",
            Operator::Property => "PROPERTY",
            Operator::Variable => "VARIABLE",
            Operator::Count => "COUNT",
            Operator::CountDistinct => "COUNT_DISTINCT",
            Operator::CountAll => "COUNT_ALL",
            Operator::Sum => "SUM",
            Operator::Avg => "AVG",
            Operator::Min => "MIN",
            Operator::Max => "MAX",
            Operator::RowNumber => "ROW_NUMBER",
            Operator::Rank => "RANK",
            Operator::DenseRank => "DENSE_RANK",
            Operator::Over => "OVER",
            Operator::OverEmpty => "OVER_EMPTY",
            Operator::WindowSpec => "WINDOW_SPEC",
            Operator::PartitionBy => "PARTITION_BY",
            Operator::OrderBy => "ORDER_BY",
            Operator::Asc => "ASC",
            Operator::Desc => "DESC",
            Operator::Lead => "LEAD",
            Operator::Lag => "LAG",
            Operator::FirstValue => "FIRST_VALUE",
            Operator::LastValue => "LAST_VALUE",
            Operator::NthValue => "NTH_VALUE",
            Operator::Ntile => "NTILE",
            Operator::CumeDist => "CUME_DIST",
            Operator::PercentRank => "PERCENT_RANK",
            Operator::Stddev => "STDDEV",
            Operator::StddevPop => "STDDEV_POP",
            Operator::StddevSamp => "STDDEV_SAMP",
            Operator::StddevDistinct => "STDDEV_DISTINCT",
            Operator::Variance => "VARIANCE",
            Operator::VarPop => "VAR_POP",
            Operator::VarSamp => "VAR_SAMP",
            Operator::Corr => "CORR",
            Operator::CovarPop => "COVAR_POP",
            Operator::CovarSamp => "COVAR_SAMP",
            Operator::RegrSlope => "REGR_SLOPE",
            Operator::RegrIntercept => "REGR_INTERCEPT",
            Operator::RegrCount => "REGR_COUNT",
            Operator::RegrR2 => "REGR_R2",
            Operator::RegrAvgx => "REGR_AVGX",
            Operator::RegrAvgy => "REGR_AVGY",
            Operator::RegrSxx => "REGR_SXX",
            Operator::RegrSyy => "REGR_SYY",
            Operator::RegrSxy => "REGR_SXY",
            Operator::RatioToReport => "RATIO_TO_REPORT",
            Operator::GeoDimension => "GEO_DIMENSION",
            Operator::GeoGeometryType => "GEO_GEOMETRY_TYPE",
            Operator::GeoAsText => "GEO_AS_TEXT",
            Operator::GeoAsBinary => "GEO_AS_BINARY",
            Operator::GeoSrid => "GEO_SRID",
            Operator::GeoSetSrid => "GEO_SET_SRID",
            Operator::GeoFromText => "GEO_FROM_TEXT",
            Operator::GeoIsEmpty => "GEO_IS_EMPTY",
            Operator::GeoIsSimple => "GEO_IS_SIMPLE",
            Operator::GeoBoundary => "GEO_BOUNDARY",
            Operator::GeoEnvelope => "GEO_ENVELOPE",
            Operator::GeoEquals => "GEO_EQUALS",
            Operator::GeoDisjoint => "GEO_DISJOINT",
            Operator::GeoIntersects => "GEO_INTERSECTS",
            Operator::GeoTouches => "GEO_TOUCHES",
            Operator::GeoCrosses => "GEO_CROSSES",
            Operator::GeoWithin => "GEO_WITHIN",
            Operator::GeoContains => "GEO_CONTAINS",
            Operator::GeoOverlaps => "GEO_OVERLAPS",
            Operator::GeoRelate => "GEO_RELATE",
            Operator::GeoDistance => "GEO_DISTANCE",
            Operator::GeoDwithin => "GEO_DWITHIN",
            Operator::GeoBuffer => "GEO_BUFFER",
            Operator::GeoConvexHull => "GEO_CONVEX_HULL",
            Operator::GeoIntersection => "GEO_INTERSECTION",
            Operator::GeoUnion => "GEO_UNION",
            Operator::GeoDifference => "GEO_DIFFERENCE",
            Operator::GeoSymDifference => "GEO_SYM_DIFFERENCE",
            Operator::GeoX => "GEO_X",
            Operator::GeoY => "GEO_Y",
            Operator::GeoZ => "GEO_Z",
            Operator::GeoM => "GEO_M",
            Operator::GeoStartPoint => "GEO_START_POINT",
            Operator::GeoEndPoint => "GEO_END_POINT",
            Operator::GeoIsClosed => "GEO_IS_CLOSED",
            Operator::GeoIsRing => "GEO_IS_RING",
            Operator::GeoNumPoints => "GEO_NUM_POINTS",
            Operator::GeoPointN => "GEO_POINT_N",
            Operator::GeoArea => "GEO_AREA",
            Operator::GeoLength => "GEO_LENGTH",
            Operator::GeoCentroid => "GEO_CENTROID",
            Operator::GeoPointOnSurface => "GEO_POINT_ON_SURFACE",
            Operator::GeoExteriorRing => "GEO_EXTERIOR_RING",
            Operator::GeoNumInteriorRings => "GEO_NUM_INTERIOR_RINGS",
            Operator::GeoInteriorRingN => "GEO_INTERIOR_RING_N",
            Operator::GeoNumGeometries => "GEO_NUM_GEOMETRIES",
            Operator::GeoGeometryN => "GEO_GEOMETRY_N",
            Operator::Alias => "ALIAS",
            Operator::Cast => "CAST",
            Operator::NextVal => "NEXT_VAL",
        }
    }

    /// Look an operator up by its stable name.
    pub fn from_name(name: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    pub fn family(&self) -> OperatorFamily {
        use Operator::*;
        match self {
            And | Or | Not | Xor | Xnor => OperatorFamily::Boolean,
            Eq | Ne | Lt | Loe | Gt | Goe | Between | IsNull | IsNotNull | EqIgnoreCase | In
            | NotIn | InstanceOf => OperatorFamily::Comparison,
            Add | Sub | Mult | Div | Mod | Negate | Abs | Sqrt | Power | Round | Ceil | Floor
            | Exp | Ln | Log | Sign => OperatorFamily::Arithmetic,
            Concat | Lower | Upper | Trim | Length | Substring | SubstringLen | Like
            | LikeEscape | Matches | MatchesIc | StartsWith | StartsWithIc | EndsWith
            | EndsWithIc | StringContains | StringContainsIc | StringIsEmpty | IndexOf
            | IndexOfFrom | CharAt | StringCast => OperatorFamily::String,
            All | Any | Exists | ColSize | ColIsEmpty | MemberOf | List => {
                OperatorFamily::Collection
            }
            CurrentDate | CurrentTime | CurrentTimestamp | Sysdate | Year | Month | Week
            | DayOfMonth | DayOfWeek | DayOfYear | Hour | Minute | Second | Millisecond => {
                OperatorFamily::DateTime
            }
            Case | CaseWhen | CaseElse | CaseEq | CaseEqWhen | CaseEqElse | Coalesce | Nullif => {
                OperatorFamily::Case
            }
            Property | Variable => OperatorFamily::Path,
            Count | CountDistinct | CountAll | Sum | Avg | Min | Max | RowNumber | Rank
            | DenseRank | Over | OverEmpty | WindowSpec | PartitionBy | OrderBy | Asc | Desc
            | Lead | Lag | FirstValue | LastValue | NthValue | Ntile | CumeDist | PercentRank
            | Stddev | StddevPop | StddevSamp | StddevDistinct | Variance | VarPop | VarSamp
            | Corr | CovarPop | CovarSamp | RegrSlope | RegrIntercept | RegrCount | RegrR2
            | RegrAvgx | RegrAvgy | RegrSxx | RegrSyy | RegrSxy | RatioToReport => {
                OperatorFamily::Aggregate
            }
            GeoDimension | GeoGeometryType | GeoAsText | GeoAsBinary | GeoSrid | GeoSetSrid
            | GeoFromText | GeoIsEmpty | GeoIsSimple | GeoBoundary | GeoEnvelope | GeoEquals
            | GeoDisjoint | GeoIntersects | GeoTouches | GeoCrosses | GeoWithin | GeoContains
            | GeoOverlaps | GeoRelate | GeoDistance | GeoDwithin | GeoBuffer | GeoConvexHull
            | GeoIntersection | GeoUnion | GeoDifference | GeoSymDifference | GeoX | GeoY
            | GeoZ | GeoM | GeoStartPoint | GeoEndPoint | GeoIsClosed | GeoIsRing
            | GeoNumPoints | GeoPointN | GeoArea | GeoLength | GeoCentroid | GeoPointOnSurface
            | GeoExteriorRing | GeoNumInteriorRings | GeoInteriorRingN | GeoNumGeometries
            | GeoGeometryN => OperatorFamily::Spatial,
            Alias | Cast | NextVal => OperatorFamily::Various,
        }
    }

    /// Number of operands an operation with this operator takes.
    pub fn arity(&self) -> usize {
        use Operator::*;
        match self {
            CurrentDate | CurrentTime | CurrentTimestamp | Sysdate | CountAll | RowNumber
            | Rank | DenseRank | CumeDist | PercentRank => 0,

            Not | IsNull | IsNotNull | Negate | Abs | Sqrt | Round | Ceil | Floor | Exp | Ln
            | Sign | Lower | Upper | Trim | Length | StringIsEmpty | StringCast | All | Any
            | Exists | ColSize | ColIsEmpty | Year | Month | Week | DayOfMonth | DayOfWeek
            | DayOfYear | Hour | Minute | Second | Millisecond | Case | CaseElse | Coalesce
            | Variable | Count | CountDistinct | Sum | Avg | Min | Max | OverEmpty
            | PartitionBy | OrderBy | Asc | Desc | NextVal | CaseEqElse | Lead | Lag
            | FirstValue | LastValue | Ntile | Stddev | StddevPop | StddevSamp
            | StddevDistinct | Variance | VarPop | VarSamp | RatioToReport | GeoDimension
            | GeoGeometryType | GeoAsText | GeoAsBinary | GeoSrid | GeoIsEmpty | GeoIsSimple
            | GeoBoundary | GeoEnvelope | GeoConvexHull | GeoX | GeoY | GeoZ | GeoM
            | GeoStartPoint | GeoEndPoint | GeoIsClosed | GeoIsRing | GeoNumPoints | GeoArea
            | GeoLength | GeoCentroid | GeoPointOnSurface | GeoExteriorRing
            | GeoNumInteriorRings | GeoNumGeometries => 1,

            Between | SubstringLen | LikeEscape | CaseWhen | IndexOfFrom | GeoRelate
            | GeoDwithin => 3,

            CaseEqWhen => 4,

            _ => 2,
        }
    }

    /// Whether `a op (b op c)` means the same as `(a op b) op c`.
    ///
    /// Only chains of the same associative operator render without
    /// parentheses on the right-hand side.
    pub fn is_associative(&self) -> bool {
        matches!(
            self,
            Operator::And
                | Operator::Or
                | Operator::Add
                | Operator::Mult
                | Operator::Concat
                | Operator::List
        )
    }

    /// The result kind an operation with this operator produces, given the
    /// kind of its first operand.
    pub fn result_kind(&self, first: Option<ValueKind>) -> ValueKind {
        use Operator::*;
        match self.family() {
            OperatorFamily::Boolean | OperatorFamily::Comparison => return ValueKind::Boolean,
            _ => {}
        }
        match self {
            Like | LikeEscape | Matches | MatchesIc | StartsWith | StartsWithIc | EndsWith
            | EndsWithIc | StringContains | StringContainsIc | StringIsEmpty | Exists
            | ColIsEmpty | MemberOf | GeoIsEmpty | GeoIsSimple | GeoEquals | GeoDisjoint
            | GeoIntersects | GeoTouches | GeoCrosses | GeoWithin | GeoContains | GeoOverlaps
            | GeoRelate | GeoDwithin | GeoIsClosed | GeoIsRing => ValueKind::Boolean,
            Length | IndexOf | IndexOfFrom | ColSize | Count | CountDistinct | CountAll | RowNumber | Rank
            | DenseRank | Year | Month | Week | DayOfMonth | DayOfWeek | DayOfYear | Hour
            | Minute | Second | Millisecond | NextVal | Sign | Ntile | CumeDist | PercentRank
            | Stddev | StddevPop | StddevSamp | StddevDistinct | Variance | VarPop | VarSamp
            | Corr | CovarPop | CovarSamp | RegrSlope | RegrIntercept | RegrCount | RegrR2
            | RegrAvgx | RegrAvgy | RegrSxx | RegrSyy | RegrSxy | RatioToReport | GeoDimension
            | GeoSrid | GeoDistance | GeoX | GeoY | GeoZ | GeoM | GeoNumPoints | GeoArea
            | GeoLength | GeoNumInteriorRings | GeoNumGeometries => ValueKind::Numeric,
            Concat | Lower | Upper | Trim | Substring | SubstringLen | CharAt | StringCast
            | GeoAsText | GeoGeometryType => ValueKind::String,
            CaseEq => ValueKind::Custom,
            CurrentDate => ValueKind::Date,
            CurrentTime => ValueKind::Time,
            CurrentTimestamp | Sysdate => ValueKind::DateTime,
            _ => first.unwrap_or(ValueKind::Custom),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_name(&s.to_ascii_uppercase()).ok_or_else(|| format!("unknown operator '{}'", s))
    }
}
