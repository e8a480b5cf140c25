//! SQL dialect tables.
//!
//! `sql` is the ANSI table every vendor table extends. Vendor tables only
//! add what differs.

mod h2;
mod mysql;
mod oracle;
mod postgis;
mod postgres;
mod sqlite;
mod sqlserver;

pub use h2::h2;
pub use mysql::{mariadb, mysql};
pub use oracle::oracle;
pub use postgis::postgis;
pub use postgres::{PostgresLiterals, postgres};
pub use sqlite::sqlite;
pub use sqlserver::sqlserver;

use super::precedence::*;
use super::{Templates, TemplatesBuilder, base};
use crate::ast::Operator;
use crate::error::QdslResult;
use std::sync::Arc;

/// ANSI SQL.
pub fn ansi(escape: char) -> QdslResult<Arc<Templates>> {
    let base = base::build(escape)?;
    TemplatesBuilder::extending(&base, "sql")
        .exists_projection(Some("1"))
        .select1_supported(true)
        .add_prec(Operator::Concat, "{0} || {1}", CONCAT)
        .add(Operator::Substring, "substring({0} from {1}+1)")
        .add(Operator::SubstringLen, "substring({0} from {1}+1 for {2})")
        .add_prec(Operator::IndexOf, "position({1} in {0}) - 1", ADD)
        .add(Operator::CharAt, "substring({0} from {1}+1 for 1)")
        .add(Operator::StringCast, "cast({0} as varchar)")
        .add(Operator::CaseEq, "case {0} {1} end")
        .add(Operator::CaseEqWhen, "when {1} then {2} {3}")
        // math
        .add(Operator::Ceil, "ceil({0})")
        .add(Operator::Floor, "floor({0})")
        .add(Operator::Round, "round({0})")
        .add(Operator::Exp, "exp({0})")
        .add(Operator::Ln, "ln({0})")
        .add(Operator::Log, "log({1},{0})")
        .add(Operator::Sign, "sign({0})")
        .add(Operator::Power, "power({0},{1})")
        // date parts
        .add(Operator::Year, "extract(year from {0})")
        .add(Operator::Month, "extract(month from {0})")
        .add(Operator::DayOfMonth, "extract(day from {0})")
        .add(Operator::Hour, "extract(hour from {0})")
        .add(Operator::Minute, "extract(minute from {0})")
        .add(Operator::Second, "extract(second from {0})")
        .add(Operator::Sysdate, "current_timestamp")
        // windows
        .add(Operator::RowNumber, "row_number()")
        .add(Operator::Rank, "rank()")
        .add(Operator::DenseRank, "dense_rank()")
        .add(Operator::CumeDist, "cume_dist()")
        .add(Operator::PercentRank, "percent_rank()")
        .add(Operator::Ntile, "ntile({0})")
        .add(Operator::Lead, "lead({0})")
        .add(Operator::Lag, "lag({0})")
        .add(Operator::FirstValue, "first_value({0})")
        .add(Operator::LastValue, "last_value({0})")
        .add(Operator::NthValue, "nth_value({0},{1})")
        .add(Operator::RatioToReport, "ratio_to_report({0})")
        // statistics
        .add(Operator::Stddev, "stddev({0})")
        .add(Operator::StddevPop, "stddev_pop({0})")
        .add(Operator::StddevSamp, "stddev_samp({0})")
        .add(Operator::StddevDistinct, "stddev(distinct {0})")
        .add(Operator::Variance, "variance({0})")
        .add(Operator::VarPop, "var_pop({0})")
        .add(Operator::VarSamp, "var_samp({0})")
        .add(Operator::Corr, "corr({0},{1})")
        .add(Operator::CovarPop, "covar_pop({0},{1})")
        .add(Operator::CovarSamp, "covar_samp({0},{1})")
        .add(Operator::RegrSlope, "regr_slope({0},{1})")
        .add(Operator::RegrIntercept, "regr_intercept({0},{1})")
        .add(Operator::RegrCount, "regr_count({0},{1})")
        .add(Operator::RegrR2, "regr_r2({0},{1})")
        .add(Operator::RegrAvgx, "regr_avgx({0},{1})")
        .add(Operator::RegrAvgy, "regr_avgy({0},{1})")
        .add(Operator::RegrSxx, "regr_sxx({0},{1})")
        .add(Operator::RegrSyy, "regr_syy({0},{1})")
        .add(Operator::RegrSxy, "regr_sxy({0},{1})")
        .add(Operator::Over, "{0} over ({1})")
        .add(Operator::OverEmpty, "{0} over ()")
        .add(Operator::WindowSpec, "{0} {1}")
        .add(Operator::PartitionBy, "partition by {0}")
        .add(Operator::OrderBy, "order by {0}")
        .add(Operator::NextVal, "next value for {0s}")
        .build()
}
