// config_utils.rs
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Reads a YAML configuration file named `file_name` from `config_folder`
/// and returns its contents as a nested `serde_yaml::Value`, verbatim.
///
/// The folder is passed explicitly; nothing is resolved relative to the
/// process launch location. The conventional folder name is `"Config"`.
/// There is no caching: every call re-reads and re-parses the file. Because
/// YAML 1.2 is a superset of JSON, a configuration file written in JSON
/// syntax parses as well.
///
/// Fails with an error carrying the attempted path when the file does not
/// exist. Parse failures and any other I/O failure propagate as-is.
///
/// ```
/// use tabio::config_utils::read_config;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// std::fs::write(dir.path().join("config.yaml"), "threshold: 0.5\n").unwrap();
///
/// let config = read_config("config.yaml", dir.path()).unwrap();
/// assert_eq!(config.get("threshold").and_then(|v| v.as_f64()), Some(0.5));
/// ```
pub fn read_config(
    file_name: &str,
    config_folder: impl AsRef<Path>,
) -> Result<Value, Box<dyn Error>> {
    let config_path = config_folder.as_ref().join(file_name);

    if !config_path.exists() {
        return Err(format!("Configuration file not found: {}", config_path.display()).into());
    }

    let contents = fs::read_to_string(&config_path)?;
    let value: Value = serde_yaml::from_str(&contents)?;
    Ok(value)
}

/// Reads a YAML configuration file like `read_config`, deserializing it
/// directly into `T` instead of returning an untyped value.
///
/// ```
/// use serde::Deserialize;
/// use tabio::config_utils::read_config_as;
/// use tempfile::tempdir;
///
/// #[derive(Deserialize)]
/// struct AnalysisConfig {
///     threshold: f64,
///     clusters: usize,
/// }
///
/// let dir = tempdir().unwrap();
/// std::fs::write(dir.path().join("config.yaml"), "threshold: 0.5\nclusters: 4\n").unwrap();
///
/// let config: AnalysisConfig = read_config_as("config.yaml", dir.path()).unwrap();
/// assert_eq!(config.clusters, 4);
/// ```
pub fn read_config_as<T: DeserializeOwned>(
    file_name: &str,
    config_folder: impl AsRef<Path>,
) -> Result<T, Box<dyn Error>> {
    let config_path = config_folder.as_ref().join(file_name);

    if !config_path.exists() {
        return Err(format!("Configuration file not found: {}", config_path.display()).into());
    }

    let contents = fs::read_to_string(&config_path)?;
    let config: T = serde_yaml::from_str(&contents)?;
    Ok(config)
}
