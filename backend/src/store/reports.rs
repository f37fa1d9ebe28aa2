use super::{category_from_row, ContributionStore, StoreError, ANONYMOUS};
use common::model::stats::{CategoryTotal, EntityCounts, HeritageSummary, MonthlyCount, TempleCoverage};
use rusqlite::Connection;

/// Number of months kept in the contribution trend.
pub const TREND_MONTHS: usize = 12;

impl ContributionStore {
    /// Counts and grouped totals across all four tables, read in one
    /// transaction so the numbers agree with each other.
    pub fn summary(&self) -> Result<HeritageSummary, StoreError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let summary = HeritageSummary {
            counts: entity_counts(&tx)?,
            categories: category_totals(&tx)?,
            monthly: monthly_counts(&tx)?,
            temples: temple_coverage(&tx)?,
        };
        tx.finish()?;
        Ok(summary)
    }
}

fn count(conn: &Connection, sql: &str) -> Result<u64, StoreError> {
    let n: i64 = conn.query_row(sql, [], |row| row.get(0))?;
    Ok(n.max(0) as u64)
}

fn entity_counts(conn: &Connection) -> Result<EntityCounts, StoreError> {
    let temples = count(conn, "SELECT COUNT(*) FROM temples")?;
    let media_assets = count(conn, "SELECT COUNT(*) FROM temple_media")?;
    let content_contributions = count(conn, "SELECT COUNT(*) FROM content_contributions")?;
    let historical_events = count(conn, "SELECT COUNT(*) FROM historical_events")?;
    Ok(EntityCounts {
        temples,
        media_assets,
        content_contributions,
        historical_events,
        total: temples + media_assets + content_contributions + historical_events,
    })
}

fn category_totals(conn: &Connection) -> Result<Vec<CategoryTotal>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT content_type, COUNT(*), COALESCE(SUM(file_size), 0)
         FROM content_contributions
         GROUP BY content_type
         ORDER BY COUNT(*) DESC, content_type",
    )?;
    let totals = stmt
        .query_map([], |row| {
            Ok(CategoryTotal {
                category: category_from_row(row, 0)?,
                count: row.get::<_, i64>(1)?.max(0) as u64,
                total_bytes: row.get::<_, i64>(2)?.max(0) as u64,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(totals)
}

fn monthly_counts(conn: &Connection) -> Result<Vec<MonthlyCount>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT strftime('%Y-%m', created_at) AS month, COUNT(*)
         FROM content_contributions
         GROUP BY month
         ORDER BY month DESC
         LIMIT ?1",
    )?;
    let months = stmt
        .query_map([TREND_MONTHS as i64], |row| {
            Ok(MonthlyCount {
                month: row.get(0)?,
                count: row.get::<_, i64>(1)?.max(0) as u64,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(months)
}

fn temple_coverage(conn: &Connection) -> Result<TempleCoverage, StoreError> {
    let (total, with_location, named): (i64, i64, i64) = conn.query_row(
        "SELECT COUNT(*),
                COUNT(CASE WHEN latitude IS NOT NULL AND longitude IS NOT NULL THEN 1 END),
                COUNT(CASE WHEN contributor_name != ?1 THEN 1 END)
         FROM temples",
        [ANONYMOUS],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;
    Ok(TempleCoverage {
        total: total.max(0) as u64,
        with_location: with_location.max(0) as u64,
        named_contributors: named.max(0) as u64,
    })
}
