// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn store() {
        let err = CoreError::store("mongo", "connection refused");
        assert_eq!(err.to_string(), "Store error (mongo): connection refused");
    }

    #[test]
    fn store_struct_form_matches_helper() {
        let err = CoreError::Store {
            backend: "memory".into(),
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), CoreError::store("memory", "boom").to_string());
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad float".into());
        assert_eq!(err.to_string(), "Serialization error: bad float");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("missing field".into());
        assert_eq!(err.to_string(), "Deserialization error: missing field");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("not found".into());
        assert_eq!(err.to_string(), "File I/O error: not found");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("stats_window_days must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: stats_window_days must be positive, got 0"
        );
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.json missing");
        let err: CoreError = io.into();
        match err {
            CoreError::FileIO(msg) => assert!(msg.contains("settings.json missing")),
            other => panic!("expected FileIO, got {other:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = parse.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates_io() {
        fn read() -> Result<String, CoreError> {
            Ok(std::fs::read_to_string("/definitely/not/a/real/path.json")?)
        }
        assert!(matches!(read(), Err(CoreError::FileIO(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

#[test]
fn error_is_send_sync_and_std_error() {
    fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
    assert_bounds::<CoreError>();
}
