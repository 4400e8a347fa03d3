use std::io::Write;

use sicmatch_domain::Config;
use sicmatch_lib::AppContext;
use tempfile::NamedTempFile;

/// Three-entry catalog slice for file-backed tests.
pub const SAMPLE_CSV: &str = "\
code,description
5411,Grocery Stores
56210,Event catering activities
64191,Banks
";

/// Create an application context backed by the embedded catalog.
pub fn embedded_context() -> AppContext {
    AppContext::new().expect("embedded-catalog context should build")
}

/// Create an application context reading its catalog from a temporary CSV
/// file. The catalog loads eagerly, so the file is free to drop afterwards.
pub fn csv_context(csv: &str) -> AppContext {
    let mut file = NamedTempFile::new().expect("failed to create temp catalog file");
    file.write_all(csv.as_bytes()).expect("failed to write temp catalog");
    file.flush().expect("failed to flush temp catalog");

    let mut config = Config::default();
    config.catalog.csv_path = Some(file.path().to_string_lossy().into_owned());

    AppContext::new_with_config(config).expect("file-backed context should build")
}
