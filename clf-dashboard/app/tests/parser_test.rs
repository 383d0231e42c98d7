use clf_dashboard::domain::{LogRecord, ParseOutcome, SkipReason};
use clf_dashboard::parser::ClfParser;
use clf_dashboard::source::SampleLogGenerator;

fn expected(
    ip: &str,
    timestamp: &str,
    method: &str,
    path: &str,
    protocol: &str,
    status: &str,
    size: &str,
) -> LogRecord {
    LogRecord {
        client_address: ip.to_string(),
        timestamp: timestamp.to_string(),
        method: method.to_string(),
        path: path.to_string(),
        protocol: protocol.to_string(),
        status_code: status.to_string(),
        size_bytes: size.to_string(),
    }
}

#[test]
fn test_parses_reference_line() {
    let line =
        r#"192.168.1.1 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.0" 200 2326"#;
    let records = clf_dashboard::parse([line]);

    assert_eq!(
        records,
        vec![expected(
            "192.168.1.1",
            "10/Oct/2023 13:55:36",
            "GET",
            "/index.html",
            "HTTP/1.0",
            "200",
            "2326"
        )]
    );
}

#[test]
fn test_mixed_file_keeps_order_and_drops_garbage() {
    let content = "\
10.0.0.1 - - [10/Oct/2023:13:55:36 -0700] \"GET /a HTTP/1.1\" 200 10
this is not an access log line

10.0.0.2 - frank [10/Oct/2023:13:56:00 -0700] \"POST /b HTTP/1.1\" 201 20 \"http://ref/\" \"curl/8.0\"
10.0.0.3 - - [10/Oct/2023:13:57:00 -0700] \"GET /c HTTP/1.1\" 500
10.0.0.4 - - [10/Oct/2023:13:58:00 -0700] \"-\" 400 -";

    let (records, stats) = ClfParser::new().parse_with_stats(content.lines());

    let ips: Vec<_> = records.iter().map(|r| r.client_address.as_str()).collect();
    assert_eq!(ips, vec!["10.0.0.1", "10.0.0.2", "10.0.0.4"]);
    assert_eq!(stats.total_lines, 6);
    assert_eq!(stats.parsed, 3);
    assert_eq!(stats.skipped, 3);

    let bare = &records[2];
    assert_eq!(bare.method, "-");
    assert_eq!(bare.path, "-");
    assert_eq!(bare.protocol, "-");
    assert_eq!(bare.size_bytes, "-");
}

#[test]
fn test_skip_reasons() {
    let parser = ClfParser::new();
    assert_eq!(
        parser.parse_line("   "),
        ParseOutcome::Skipped(SkipReason::Blank)
    );
    assert_eq!(
        parser.parse_line("GET /index.html"),
        ParseOutcome::Skipped(SkipReason::NoMatch)
    );
}

#[test]
fn test_generated_sample_parses_without_skips() {
    let lines = SampleLogGenerator::seeded(2024).generate(10_000);
    let (records, stats) = ClfParser::new().parse_with_stats(&lines);

    assert_eq!(stats.skipped, 0);
    assert_eq!(records.len(), 10_000);
    assert_eq!(records[0].timestamp, "2024-01-01 00:00:00");
    assert_eq!(records[61].timestamp, "2024-01-01 01:01:00");
}
