//! Diagnostics file ingestion.
//!
//! manifix consumes diagnostics produced by external manifest validators. It
//! is tolerant when reading them: both the versioned envelope and a bare
//! diagnostic array are accepted, and unknown fields are ignored.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use manifix_types::diagnostic::{Diagnostic, DiagnosticsFile};
use manifix_types::schema::MANIFIX_DIAGNOSTICS_V1;
use tracing::debug;

pub fn load_diagnostics(path: &Utf8Path) -> anyhow::Result<Vec<Diagnostic>> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {path}"))?;

    if let Ok(file) = serde_json::from_str::<DiagnosticsFile>(&contents) {
        if file.schema != MANIFIX_DIAGNOSTICS_V1 {
            debug!(schema = %file.schema, "unexpected diagnostics schema, reading anyway");
        }
        debug!(count = file.diagnostics.len(), path = %path, "loaded diagnostics envelope");
        return Ok(file.diagnostics);
    }

    let diagnostics: Vec<Diagnostic> =
        serde_json::from_str(&contents).with_context(|| format!("parse diagnostics in {path}"))?;
    debug!(count = diagnostics.len(), path = %path, "loaded bare diagnostics array");
    Ok(diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_temp(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("diags.json")).expect("utf8");
        fs::write(&path, contents).expect("write");
        (dir, path)
    }

    #[test]
    fn loads_envelope() {
        let (_dir, path) = write_temp(
            r#"{
                "schema": "manifix.diagnostics.v1",
                "tool": "manifest-validator",
                "diagnostics": [
                    {
                        "code": "global",
                        "source": "name",
                        "range": {
                            "start": { "line": 0, "column": 0 },
                            "end": { "line": 0, "column": 0 }
                        }
                    }
                ]
            }"#,
        );
        let diags = load_diagnostics(&path).expect("load");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_global());
    }

    #[test]
    fn loads_bare_array() {
        let (_dir, path) = write_temp(
            r#"[
                {
                    "code": "icons",
                    "range": {
                        "start": { "line": 5, "column": 2 },
                        "end": { "line": 5, "column": 9 }
                    }
                }
            ]"#,
        );
        let diags = load_diagnostics(&path).expect("load");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, "icons");
    }

    #[test]
    fn rejects_garbage() {
        let (_dir, path) = write_temp("not json");
        assert!(load_diagnostics(&path).is_err());
    }
}
