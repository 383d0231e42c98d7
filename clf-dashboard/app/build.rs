// Build-time validation of the access log patterns
use regex::Regex;
use std::fs::File;
use std::io::Write;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Every regex the parser uses at runtime
    let patterns = &[
        // host ident authuser [timestamp] "request" status size ["referer" "user-agent"]
        // Status and size are ASCII digits only
        (
            r#"^(\S+) \S+ \S+ \[([^\]]*)\] "([^"]*)" ([0-9]+) ([0-9]+|-)(?: "([^"]*)" "([^"]*)")?"#,
            "clf_access",
        ),
    ];

    let mut valid_patterns = Vec::new();
    let mut invalid_patterns = Vec::new();

    for &(pattern, name) in patterns {
        match Regex::new(pattern) {
            Ok(_) => valid_patterns.push((pattern, name)),
            Err(e) => {
                println!("cargo:warning=Invalid regex pattern '{name}': {e}");
                invalid_patterns.push((pattern, name, e));
            }
        }
    }

    if !invalid_patterns.is_empty() {
        let mut error_msg = String::from("Build failed due to invalid regex patterns:\n");
        for (pattern, name, error) in &invalid_patterns {
            error_msg.push_str(&format!("  - '{name}': {error} (pattern: {pattern})\n"));
        }
        panic!("{}", error_msg);
    }

    if let Err(e) = generate_validated_regexes(&valid_patterns) {
        panic!("Failed to generate regex patterns: {e}");
    }
}

fn generate_validated_regexes(patterns: &[(&str, &str)]) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let dest_path = std::path::Path::new(&out_dir).join("validated_regexes.rs");
    let mut file = File::create(dest_path)?;

    writeln!(file, "// Auto-generated regex patterns (validated by build.rs)")?;
    writeln!(file, "use crate::parser::regex_patterns::StaticRegexSet;")?;
    writeln!(file)?;
    writeln!(file, "/// All validated access log patterns")?;
    writeln!(
        file,
        "pub static VALIDATED_PATTERNS: StaticRegexSet = StaticRegexSet::new(&["
    )?;
    for (pattern, name) in patterns {
        writeln!(file, "    (r#\"{pattern}\"#, \"{name}\"),")?;
    }
    writeln!(file, "]);")?;
    writeln!(file)?;

    writeln!(file, "/// Pattern indices for type-safe access")?;
    writeln!(file, "pub mod pattern_index {{")?;
    for (i, (_, name)) in patterns.iter().enumerate() {
        writeln!(file, "    pub const {}: usize = {i};", name.to_uppercase())?;
    }
    writeln!(file, "}}")?;
    writeln!(file)?;

    writeln!(file, "/// Pattern name lookup")?;
    writeln!(file, "pub fn get_pattern_name(index: usize) -> Option<&'static str> {{")?;
    writeln!(file, "    match index {{")?;
    for (i, (_, name)) in patterns.iter().enumerate() {
        writeln!(file, "        {i} => Some(\"{name}\"),")?;
    }
    writeln!(file, "        _ => None,")?;
    writeln!(file, "    }}")?;
    writeln!(file, "}}")?;

    Ok(())
}
