use anyhow::Result;

/// Resolve an optional leading `~/` to the current user's HOME path.
pub fn resolve_home(path: &str) -> Result<String> {
    if path.starts_with("~/") {
        let home = home_dir()?;
        Ok(path.replacen('~', &home, 1))
    } else {
        Ok(path.to_string())
    }
}

/// Return the path to the current user home directory.
///
/// Implement simple variable lookup for linux.
/// Other OS are not currently supported.
fn home_dir() -> Result<String> {
    match std::env::var("HOME") {
        Err(std::env::VarError::NotPresent) => anyhow::bail!("unable to lookup the $HOME path"),
        Err(std::env::VarError::NotUnicode(_)) => anyhow::bail!("unable to UTF-8 decode $HOME"),
        Ok(path) => Ok(path),
    }
}

/// Render a byte count with a binary unit suffix.
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["kb", "mb", "gb", "tb", "pb"];
    if bytes < 1024 {
        return format!("{}b", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = "b";
    for next in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }
    format!("{:.1}{}", value, unit)
}

/// Report a boolean as `Yes` or `No`.
pub fn yes_or_no(value: bool) -> &'static str {
    match value {
        true => "Yes",
        false => "No",
    }
}

#[cfg(test)]
mod tests {
    use super::human_bytes;
    use super::resolve_home;

    #[test]
    fn bytes_below_a_kilobyte() {
        assert_eq!(human_bytes(0), "0b");
        assert_eq!(human_bytes(1023), "1023b");
    }

    #[test]
    fn bytes_with_units() {
        assert_eq!(human_bytes(1024), "1.0kb");
        assert_eq!(human_bytes(1536), "1.5kb");
        assert_eq!(human_bytes(10 * 1024 * 1024 * 1024), "10.0gb");
    }

    #[test]
    fn paths_without_home() {
        assert_eq!(resolve_home("/etc/shardview.yaml").unwrap(), "/etc/shardview.yaml");
        assert_eq!(resolve_home("shards.json").unwrap(), "shards.json");
    }
}
