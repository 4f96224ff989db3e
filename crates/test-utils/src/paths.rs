//! Locating optional real data and writing throwaway fixture files.
//!
//! ERA5 extracts and Natural Earth boundaries are too large to commit, so
//! tests that want them search a short list of directories and skip when
//! nothing is there.

use std::path::{Path, PathBuf};

/// Environment variable naming an extra data directory, searched first.
pub const TEST_DATA_ENV: &str = "PMSL_TEST_DATA";

/// Directories searched by [`find_test_file`], in order.
pub fn test_data_dirs() -> Vec<PathBuf> {
    let root = workspace_root();
    let mut dirs = Vec::new();
    if let Some(dir) = std::env::var_os(TEST_DATA_ENV) {
        dirs.push(PathBuf::from(dir));
    }
    dirs.push(root.join("testdata"));
    dirs.push(root.join("crates/netcdf-parser/testdata"));
    dirs.push(root.join("crates/geojson-parser/testdata"));
    dirs
}

/// First existing `dir/name` over [`test_data_dirs`].
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    test_data_dirs()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Writes `contents` to `name` inside a fresh temporary directory.
///
/// The file disappears when the returned `TempDir` is dropped.
pub fn write_temp_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}

fn workspace_root() -> PathBuf {
    // crates/test-utils -> workspace root
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest.to_path_buf())
}
