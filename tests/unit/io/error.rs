//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use quiltgrid::QuiltError;
    use quiltgrid::io::error::{invalid_parameter, unknown_fabric};
    use std::error::Error;

    // Tests file system errors expose their I/O source
    // Verified by breaking the source chain
    #[test]
    fn test_file_system_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = QuiltError::FileSystem {
            path: "/tmp/quilt-data/imageList.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read"));
        assert!(message.contains("imageList.json"));
    }

    // Tests unknown fabric errors carry the requested name and no source
    // Verified by omitting the name from the message
    #[test]
    fn test_unknown_fabric_error() {
        let error = unknown_fabric(&"paisley");

        assert!(error.source().is_none());
        assert!(error.to_string().contains("paisley"));
    }

    // Tests invalid parameter errors contain all three fields
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("hue_width", &4, &"must be at least 5");

        let message = error.to_string();
        assert!(message.contains("hue_width"));
        assert!(message.contains('4'));
        assert!(message.contains("must be at least 5"));
    }

    // Tests exhaustion errors report the cell index and attempt count
    // Verified by omitting the index from the message
    #[test]
    fn test_selection_exhausted_error() {
        let error = QuiltError::SelectionExhausted {
            index: 17,
            attempts: 10_000,
        };

        let message = error.to_string();
        assert!(message.contains("17"));
        assert!(message.contains("10000"));
    }
}
