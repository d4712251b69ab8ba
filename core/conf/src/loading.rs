//! Load configuration from files.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;

use crate::Conf;

/// Errors handling shard view configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unable to decode configuration from file at the given path.
    #[error("unable to decode configuration from file at '{0}'")]
    // (path,)
    Decode(String),

    /// Unable to read configuration file at the given path.
    #[error("unable to read configuration file at '{0}'")]
    // (path,)
    Open(String),

    /// Configuration file not found at the given path.
    #[error("configuration file not found at '{0}'")]
    // (path,)
    PathNotFound(String),
}

/// Load process configuration from the specified path.
pub fn load(path: &str) -> Result<Conf> {
    if !Path::new(path).exists() {
        let error = Error::PathNotFound(path.to_string());
        let error = anyhow::anyhow!(error);
        return Err(error);
    }

    let file = File::open(path).with_context(|| Error::Open(path.into()))?;
    let conf = decode(file).with_context(|| Error::Decode(path.into()))?;
    Ok(conf)
}

/// Decode a YAML configuration document.
fn decode<R: Read>(reader: R) -> Result<Conf> {
    let conf = serde_yaml::from_reader(reader)?;
    Ok(conf)
}

#[cfg(test)]
mod tests {
    use super::decode;
    use super::Error;
    use crate::Conf;

    #[test]
    fn decode_full() {
        let yaml = concat!(
            "indices:\n",
            "  show_only_affected: true\n",
            "  sort_ascending: false\n",
            "watermarks:\n",
            "  low: 70.0\n",
            "  high: 80.0\n",
            "  flood_stage: 90.0\n",
        );
        let conf = decode(yaml.as_bytes()).unwrap();
        assert!(conf.indices.show_only_affected);
        assert!(!conf.indices.sort_ascending);
        assert_eq!(conf.watermarks.low, 70.0);
        assert_eq!(conf.watermarks.high, 80.0);
        assert_eq!(conf.watermarks.flood_stage, 90.0);
    }

    #[test]
    fn decode_partial() {
        let yaml = "watermarks:\n  high: 88\n";
        let conf = decode(yaml.as_bytes()).unwrap();
        assert!(conf.indices.sort_ascending);
        assert_eq!(conf.watermarks.low, 85.0);
        assert_eq!(conf.watermarks.high, 88.0);
    }

    #[test]
    fn decode_empty_mapping() {
        let conf = decode("{}".as_bytes()).unwrap();
        assert_eq!(conf, Conf::default());
    }

    #[test]
    fn decode_invalid() {
        let yaml = "watermarks: [1, 2]\n";
        assert!(decode(yaml.as_bytes()).is_err());
    }

    #[test]
    fn load_missing_file() {
        let error = super::load("/this/path/does/not/exist.yaml").unwrap_err();
        match error.downcast_ref::<Error>() {
            Some(Error::PathNotFound(path)) => assert_eq!(path, "/this/path/does/not/exist.yaml"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
