//! Tests for parsing statistics functionality

use super::super::stats::{ParseStats, RowFault};

fn fault(row: usize) -> RowFault {
    RowFault::WrongFieldCount {
        row,
        expected: 9,
        found: 3,
    }
}

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_rows: 100,
        rows_parsed: 95,
        rows_rejected: 5,
        untimed_rows: 2,
        faults: vec![fault(1), fault(2)],
        faults_not_recorded: 0,
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(stats.is_successful());

    let poor_stats = ParseStats {
        total_rows: 100,
        rows_parsed: 80,
        rows_rejected: 20,
        ..ParseStats::new()
    };

    assert_eq!(poor_stats.success_rate(), 80.0);
    assert!(!poor_stats.is_successful());
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_rows, 0);
    assert_eq!(empty_stats.rows_parsed, 0);
    assert_eq!(empty_stats.rows_rejected, 0);
    assert!(empty_stats.faults.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(!empty_stats.is_successful());
}

#[test]
fn test_record_fault_respects_cap() {
    let mut stats = ParseStats::new();
    for row in 1..=5 {
        stats.record_fault(fault(row), 3);
    }

    assert_eq!(stats.faults.len(), 3);
    assert_eq!(stats.faults_not_recorded, 2);
    assert_eq!(stats.fault_count(), 5);
    assert_eq!(stats.faults[0].row(), 1);
}

#[test]
fn test_fault_rejection_kinds() {
    let timestamp = RowFault::MalformedTimestamp {
        row: 4,
        value: "999999 10:41:09".to_string(),
    };
    assert!(!timestamp.rejects_row());
    assert!(fault(4).rejects_row());
    assert_eq!(
        timestamp.to_string(),
        "line 4: malformed timestamp '999999 10:41:09'"
    );
}

#[test]
fn test_summary_mentions_counts() {
    let stats = ParseStats {
        total_rows: 10,
        rows_parsed: 9,
        rows_rejected: 1,
        untimed_rows: 3,
        ..ParseStats::new()
    };

    let summary = stats.summary();
    assert!(summary.contains("10 rows -> 9 readings"));
    assert!(summary.contains("rejected: 1"));
    assert!(summary.contains("untimed: 3"));
}
