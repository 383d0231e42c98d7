//! Synthetic access log lines, used when the real log cannot be read.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Client addresses with a skewed weighting so the "top visitors" chart has shape.
pub const SAMPLE_IPS: [(&str, u32); 10] = [
    ("192.168.1.100", 100),
    ("10.0.0.50", 50),
    ("172.16.0.1", 25),
    ("192.168.0.10", 10),
    ("10.10.10.10", 5),
    ("172.31.255.255", 2),
    ("192.168.1.1", 1),
    ("10.1.1.1", 1),
    ("172.20.20.20", 1),
    ("192.168.100.100", 1),
];

pub const SAMPLE_PATHS: [(&str, u32); 10] = [
    ("/index.html", 100),
    ("/products.html", 80),
    ("/about.html", 50),
    ("/login.html", 30),
    ("/contact.html", 20),
    ("/services.html", 15),
    ("/blog.html", 10),
    ("/faq.html", 5),
    ("/register.html", 3),
    ("/dashboard.html", 1),
];

pub const SAMPLE_METHODS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

pub const SAMPLE_STATUSES: [u16; 8] = [200, 301, 304, 400, 401, 403, 404, 500];

pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// Generates CLF lines one minute apart starting at 2024-01-01 00:00:00.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleLogGenerator {
    seed: Option<u64>,
}

impl SampleLogGenerator {
    /// A generator with fresh randomness on every call.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// A generator that yields the same lines on every call.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn generate(&self, count: usize) -> Vec<String> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let start = sample_start();

        (0..count)
            .map(|i| {
                let at = start + TimeDelta::minutes(i as i64);
                sample_line(&mut rng, at)
            })
            .collect()
    }
}

fn sample_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn sample_line<R: Rng>(rng: &mut R, at: NaiveDateTime) -> String {
    let ip = weighted_pick(rng, &SAMPLE_IPS);
    let path = weighted_pick(rng, &SAMPLE_PATHS);
    let method = SAMPLE_METHODS[rng.random_range(0..SAMPLE_METHODS.len())];
    let status = SAMPLE_STATUSES[rng.random_range(0..SAMPLE_STATUSES.len())];
    let size: u32 = rng.random_range(100..=10_000);

    format!(
        "{ip} - - [{}:{} -0700] \"{method} {path} HTTP/1.0\" {status} {size}",
        at.format("%Y-%m-%d"),
        at.format("%H:%M:%S"),
    )
}

/// Roulette-wheel selection over `(value, weight)` pairs.
fn weighted_pick<R: Rng>(rng: &mut R, table: &[(&'static str, u32)]) -> &'static str {
    let fallback = table.last().map_or("-", |(value, _)| *value);
    let total: u32 = table.iter().map(|(_, weight)| weight).sum();
    if total == 0 {
        return fallback;
    }

    let mut remaining = rng.random_range(1..=total);
    for (value, weight) in table {
        if remaining <= *weight {
            return value;
        }
        remaining -= weight;
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ClfParser;

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = SampleLogGenerator::seeded(7).generate(50);
        let b = SampleLogGenerator::seeded(7).generate(50);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn test_lines_follow_access_log_shape() {
        let lines = SampleLogGenerator::seeded(1).generate(3);
        assert!(lines[0].contains("[2024-01-01:00:00:00 -0700]"));
        assert!(lines[1].contains("[2024-01-01:00:01:00 -0700]"));
        assert!(lines[2].contains("HTTP/1.0\""));
    }

    #[test]
    fn test_every_generated_line_parses() {
        let lines = SampleLogGenerator::seeded(42).generate(2_000);
        let (records, stats) = ClfParser::new().parse_with_stats(&lines);

        assert_eq!(stats.skipped, 0);
        assert_eq!(records.len(), 2_000);
        for record in &records {
            assert!(SAMPLE_IPS.iter().any(|(ip, _)| *ip == record.client_address));
            assert!(SAMPLE_PATHS.iter().any(|(path, _)| *path == record.path));
            assert!(SAMPLE_METHODS.contains(&record.method.as_str()));
            assert_eq!(record.protocol, "HTTP/1.0");
            let size: u32 = record.size_bytes.parse().unwrap();
            assert!((100..=10_000).contains(&size));
        }
    }

    #[test]
    fn test_weighted_pick_prefers_heavy_entries() {
        let mut rng = StdRng::seed_from_u64(3);
        let picks: Vec<_> = (0..1_000)
            .map(|_| weighted_pick(&mut rng, &SAMPLE_IPS))
            .collect();
        let heaviest = picks.iter().filter(|ip| **ip == "192.168.1.100").count();
        let lightest = picks.iter().filter(|ip| **ip == "192.168.100.100").count();
        assert!(heaviest > lightest);
    }

    #[test]
    fn test_weighted_pick_zero_weights() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(weighted_pick(&mut rng, &[("a", 0), ("b", 0)]), "b");
        assert_eq!(weighted_pick(&mut rng, &[]), "-");
    }
}
