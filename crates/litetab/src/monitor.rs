//! Per-statement SQL logging.
//!
//! With the `tracing` feature every executed statement emits one event on
//! target `litetab.sql` carrying the fetch mode, the number of rows
//! collected, the elapsed time and the (optionally truncated) SQL. Failed
//! statements are not logged; their errors are returned to the caller.

use std::time::Duration;

use crate::config::SqlLogConfig;
use crate::gateway::FetchMode;

/// Cut `sql` to at most `max_bytes`, respecting char boundaries.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn display_sql(config: &SqlLogConfig, sql: &str) -> String {
    match config.max_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn log_statement(
    config: &SqlLogConfig,
    sql: &str,
    mode: FetchMode,
    rows: usize,
    elapsed: Duration,
) {
    use crate::config::LogLevel;

    /// Dispatch a tracing event at a runtime-determined level.
    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                LogLevel::Error => tracing::error!($($field)*),
                LogLevel::Warn  => tracing::warn!($($field)*),
                LogLevel::Info  => tracing::info!($($field)*),
                LogLevel::Debug => tracing::debug!($($field)*),
                LogLevel::Trace => tracing::trace!($($field)*),
            }
        };
    }

    if !config.enabled {
        return;
    }
    let sql = display_sql(config, sql);
    emit_at_level!(
        config.level,
        target: "litetab.sql",
        mode = ?mode,
        rows,
        elapsed_us = elapsed.as_micros() as u64,
        sql = %sql
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn log_statement(
    _config: &SqlLogConfig,
    _sql: &str,
    _mode: FetchMode,
    _rows: usize,
    _elapsed: Duration,
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 100), "SELECT 1");
        assert_eq!(truncate_sql_bytes("SELECT 1", 6), "SELECT");
        // "é" is two bytes; cutting inside it backs off.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[test]
    fn display_sql_appends_ellipsis() {
        let config = SqlLogConfig {
            max_sql_length: Some(6),
            ..SqlLogConfig::default()
        };
        assert_eq!(display_sql(&config, "SELECT * FROM t"), "SELECT...");
        let config = SqlLogConfig {
            max_sql_length: None,
            ..SqlLogConfig::default()
        };
        assert_eq!(display_sql(&config, "SELECT * FROM t"), "SELECT * FROM t");
    }
}
