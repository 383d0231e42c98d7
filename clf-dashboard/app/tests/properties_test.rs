use clf_dashboard::aggregate::aggregate;
use clf_dashboard::domain::LogRecord;
use clf_dashboard::parser::ClfParser;
use clf_dashboard::table::{self, LogColumn, SortDirection, SortSpec, TableViewState};
use proptest::prelude::*;

fn access_line() -> impl Strategy<Value = (String, String, String, String, u16, u32)> {
    (
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        "(0[0-9]|1[0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]",
        prop::sample::select(vec!["GET", "POST", "PUT", "DELETE", "HEAD"]),
        "/[a-z]{0,8}(\\.html)?",
        100u16..600,
        0u32..100_000,
    )
        .prop_map(|(ip, time, method, path, status, size)| {
            (ip, time, method.to_string(), path, status, size)
        })
}

fn render(ip: &str, time: &str, method: &str, path: &str, status: u16, size: u32) -> String {
    format!(r#"{ip} - - [01/Jan/2024:{time} +0000] "{method} {path} HTTP/1.1" {status} {size}"#)
}

fn record(ip: &str, status: &str) -> LogRecord {
    LogRecord {
        client_address: ip.to_string(),
        timestamp: "01/Jan/2024 00:00:00".to_string(),
        method: "GET".to_string(),
        path: "/".to_string(),
        protocol: "HTTP/1.1".to_string(),
        status_code: status.to_string(),
        size_bytes: "0".to_string(),
    }
}

proptest! {
    #[test]
    fn matching_lines_parse_to_their_fields(
        (ip, time, method, path, status, size) in access_line()
    ) {
        let line = render(&ip, &time, &method, &path, status, size);
        let records = ClfParser::new().parse([line.as_str()]);

        prop_assert_eq!(records.len(), 1);
        let parsed = &records[0];
        prop_assert_eq!(&parsed.client_address, &ip);
        prop_assert_eq!(&parsed.timestamp, &format!("01/Jan/2024 {time}"));
        prop_assert_eq!(&parsed.method, &method);
        prop_assert_eq!(&parsed.path, &path);
        prop_assert_eq!(parsed.status_code.clone(), status.to_string());
        prop_assert_eq!(parsed.size_bytes.clone(), size.to_string());
        prop_assert_eq!(parsed.hour(), &time[..2]);
    }

    #[test]
    fn lines_without_brackets_never_parse(line in "[^\\[]*") {
        prop_assert!(ClfParser::new().parse([line.as_str()]).is_empty());
    }

    #[test]
    fn parse_preserves_order(
        lines in proptest::collection::vec(access_line(), 0..30)
    ) {
        let rendered: Vec<String> = lines
            .iter()
            .map(|(ip, time, method, path, status, size)| {
                render(ip, time, method, path, *status, *size)
            })
            .collect();
        let records = ClfParser::new().parse(&rendered);

        prop_assert_eq!(records.len(), lines.len());
        for (record, (ip, ..)) in records.iter().zip(&lines) {
            prop_assert_eq!(&record.client_address, ip);
        }
    }

    #[test]
    fn status_counts_sum_to_record_count(
        statuses in proptest::collection::vec(prop::sample::select(vec!["200", "301", "404", "500"]), 0..100)
    ) {
        let records: Vec<_> = statuses.iter().map(|s| record("10.0.0.1", s)).collect();
        let result = aggregate(&records);

        prop_assert_eq!(result.status_counts.values().sum::<usize>(), records.len());
        prop_assert_eq!(result.total_records, records.len());
    }

    #[test]
    fn top_ips_are_descending(
        ips in proptest::collection::vec("[a-e]", 0..60)
    ) {
        let records: Vec<_> = ips.iter().map(|ip| record(ip, "200")).collect();
        let result = aggregate(&records);

        prop_assert!(result.top_ips.windows(2).all(|w| w[0].1 >= w[1].1));
        // Equal counts keep first-occurrence order
        for pair in result.top_ips.windows(2) {
            if pair[0].1 == pair[1].1 {
                let first = ips.iter().position(|ip| *ip == pair[0].0);
                let second = ips.iter().position(|ip| *ip == pair[1].0);
                prop_assert!(first < second);
            }
        }
    }

    #[test]
    fn sort_is_stable_in_both_directions(
        statuses in proptest::collection::vec(prop::sample::select(vec!["200", "404", "500"]), 0..40),
        descending in any::<bool>()
    ) {
        let records: Vec<_> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| record(&i.to_string(), s))
            .collect();
        let direction = if descending { SortDirection::Descending } else { SortDirection::Ascending };
        let sorted = table::sort(
            records.iter().collect::<Vec<_>>(),
            SortSpec::new(LogColumn::StatusCode, direction),
        );

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.status_code == b.status_code {
                let ia: usize = a.client_address.parse().unwrap();
                let ib: usize = b.client_address.parse().unwrap();
                prop_assert!(ia < ib);
            } else if descending {
                prop_assert!(a.status_code > b.status_code);
            } else {
                prop_assert!(a.status_code < b.status_code);
            }
        }
    }

    #[test]
    fn paginate_is_idempotent_and_empty_past_end(
        items in proptest::collection::vec(any::<u8>(), 0..50),
        page in 1usize..10,
        size in 1usize..10,
    ) {
        let first = table::paginate(&items, page, size);
        let second = table::paginate(&items, page, size);
        prop_assert_eq!(first, second);
        prop_assert!(first.len() <= size);

        let past_end = items.len() / size + 2;
        prop_assert!(table::paginate(&items, past_end, size).is_empty());
    }

    #[test]
    fn view_changes_reset_page(page in 2usize..20, term in "[a-z]{1,5}") {
        let state = TableViewState::<LogColumn>::new(10).with_page(page);
        prop_assert_eq!(state.with_search_term(term.clone()).current_page(), 1);
        prop_assert_eq!(state.with_filter(LogColumn::Path, term).current_page(), 1);
        prop_assert_eq!(state.toggle_sort(LogColumn::Method).current_page(), 1);
    }
}
