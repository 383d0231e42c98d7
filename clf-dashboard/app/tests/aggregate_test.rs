use clf_dashboard::aggregate::{CountColumn, DrillDown, aggregate};
use clf_dashboard::domain::LogRecord;
use clf_dashboard::source::SampleLogGenerator;
use clf_dashboard::table::{self, SortDirection, SortSpec, TableViewState};
use std::collections::BTreeMap;

fn line(ip: &str, path: &str, status: u16, time: &str) -> String {
    format!(r#"{ip} - - [10/Oct/2023:{time} -0700] "GET {path} HTTP/1.1" {status} 100"#)
}

#[test]
fn test_empty_input() {
    let records: Vec<LogRecord> = Vec::new();
    let result = aggregate(&records);

    assert!(result.is_empty());
    assert!(result.status_counts.is_empty());
    assert!(result.top_ips.is_empty());
    assert!(result.top_paths.is_empty());
    assert!(result.requests_by_hour.is_empty());
}

#[test]
fn test_status_counts() {
    let lines: Vec<_> = [200, 200, 404, 500]
        .into_iter()
        .map(|status| line("10.0.0.1", "/", status, "13:00:00"))
        .collect();
    let records = clf_dashboard::parse(&lines);
    let result = aggregate(&records);

    let expected: BTreeMap<String, usize> = [("200", 2), ("404", 1), ("500", 1)]
        .into_iter()
        .map(|(code, count)| (code.to_string(), count))
        .collect();
    assert_eq!(result.status_counts, expected);
    assert_eq!(result.status_counts.values().sum::<usize>(), records.len());
}

#[test]
fn test_ties_keep_first_occurrence() {
    let mut lines = Vec::new();
    for _ in 0..5 {
        lines.push(line("A", "/a", 200, "01:00:00"));
    }
    lines.push(line("C", "/c", 200, "01:00:00"));
    for _ in 0..5 {
        lines.push(line("B", "/b", 200, "01:00:00"));
    }
    let result = aggregate(&clf_dashboard::parse(&lines));

    assert_eq!(
        result.top_ips,
        vec![
            ("A".to_string(), 5),
            ("B".to_string(), 5),
            ("C".to_string(), 1)
        ]
    );
    assert_eq!(result.top_ips(2).len(), 2);
    assert_eq!(result.top_paths(10).len(), 3);
}

#[test]
fn test_requests_by_hour() {
    let lines = vec![
        line("a", "/", 200, "09:15:00"),
        line("a", "/", 200, "09:59:59"),
        line("a", "/", 200, "23:00:00"),
    ];
    let result = aggregate(&clf_dashboard::parse(&lines));

    assert_eq!(result.requests_by_hour.get("09"), Some(&2));
    assert_eq!(result.requests_by_hour.get("23"), Some(&1));
}

#[test]
fn test_drill_down_over_sample_data() {
    let lines = SampleLogGenerator::seeded(11).generate(1_000);
    let result = aggregate(&clf_dashboard::parse(&lines));

    let rows = DrillDown::Ips.rows(&result);
    let state = TableViewState::new(3).with_sort(Some(DrillDown::Ips.default_sort()));
    let page = table::compute(&rows, &state);

    assert_eq!(page.rows.len(), 3);
    assert!(page.rows[0].count >= page.rows[1].count);
    assert!(page.rows[1].count >= page.rows[2].count);

    let total: usize = DrillDown::Status.rows(&result).iter().map(|r| r.count).sum();
    assert_eq!(total, 1_000);

    let hours = DrillDown::Hours.rows(&result);
    let state = TableViewState::new(24)
        .with_sort(Some(SortSpec::new(CountColumn::Key, SortDirection::Ascending)));
    let page = table::compute(&hours, &state);
    // 1000 minutes from midnight covers hours 00 to 16
    assert_eq!(page.page.total_items, 17);
    assert_eq!(page.rows[0].key, "00");
    assert_eq!(page.rows[16].key, "16");
}
