// object_utils.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn object_path(folder: &Path, file_name: &str) -> PathBuf {
    let file_name = if file_name.ends_with(".bin") {
        file_name.to_string()
    } else {
        format!("{}.bin", file_name)
    };
    folder.join(file_name)
}

/// Serializes `obj` with bincode and writes it to `<folder>/<file_name>.bin`,
/// creating the folder recursively if it does not exist. The `.bin` suffix
/// is added when `file_name` does not already carry it. Any existing file at
/// the destination is overwritten. Returns the path written.
///
/// The conventional folder for intermediate analysis artifacts is
/// `"artifacts"`; the caller passes it explicitly so nothing depends on the
/// process launch location.
///
/// ```
/// use tabio::object_utils::export_object;
/// use std::collections::BTreeMap;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let mut centroids: BTreeMap<String, Vec<f64>> = BTreeMap::new();
/// centroids.insert("gold".to_string(), vec![0.8, 0.1]);
///
/// let path = export_object(&centroids, "centroids", dir.path()).unwrap();
/// assert_eq!(path, dir.path().join("centroids.bin"));
/// ```
pub fn export_object<T: Serialize + ?Sized>(
    obj: &T,
    file_name: &str,
    folder: impl AsRef<Path>,
) -> Result<PathBuf, Box<dyn Error>> {
    let folder = folder.as_ref();
    fs::create_dir_all(folder)?;

    let file_path = object_path(folder, file_name);
    let bytes = bincode::serialize(obj)?;
    fs::write(&file_path, bytes)?;

    info!("object saved to {}", file_path.display());
    Ok(file_path)
}

/// Loads an object previously written by `export_object` from
/// `<folder>/<file_name>.bin`. Returns `Ok(None)` when no such file exists,
/// after emitting a warning; this is the one non-fatal failure. Any other
/// I/O or decode failure propagates.
///
/// ```
/// use tabio::object_utils::{export_object, load_object};
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// export_object(&vec![1u32, 2, 3], "bins", dir.path()).unwrap();
///
/// let restored: Option<Vec<u32>> = load_object("bins", dir.path()).unwrap();
/// assert_eq!(restored, Some(vec![1, 2, 3]));
///
/// let absent: Option<Vec<u32>> = load_object("never_saved", dir.path()).unwrap();
/// assert_eq!(absent, None);
/// ```
pub fn load_object<T: DeserializeOwned>(
    file_name: &str,
    folder: impl AsRef<Path>,
) -> Result<Option<T>, Box<dyn Error>> {
    let file_path = object_path(folder.as_ref(), file_name);

    if !file_path.exists() {
        warn!("no saved object at {}", file_path.display());
        return Ok(None);
    }

    let bytes = fs::read(&file_path)?;
    let obj: T = bincode::deserialize(&bytes)?;
    Ok(Some(obj))
}
