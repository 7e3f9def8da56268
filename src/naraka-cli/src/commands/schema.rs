//! Schema listing command

use anyhow::Result;
use naraka::SCHEMA;

/// One line per schema field, optionally filtered by path substring
pub fn schema_lines(filter: Option<&str>) -> Vec<String> {
    SCHEMA
        .iter()
        .filter(|entry| filter.map_or(true, |f| entry.path.contains(f)))
        .map(|entry| format!("{:>3}  {}", entry.index, entry.path))
        .collect()
}

pub fn handle(filter: Option<&str>) -> Result<()> {
    let lines = schema_lines(filter);

    if lines.is_empty() {
        println!("No fields match");
    }

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_listed() {
        let lines = schema_lines(None);
        assert_eq!(lines.len(), SCHEMA.len());
        assert_eq!(lines[0], "  0  HeroID");
    }

    #[test]
    fn test_filter() {
        let lines = schema_lines(Some("Eyes/"));
        assert!(lines.contains(&" 17  ParamData/Eyes/Left".to_string()));
        assert!(lines.iter().all(|l| l.contains("Eyes/")));
        assert!(schema_lines(Some("no-such-field")).is_empty());
    }
}
