//! Transport-level errors.

use thiserror::Error;

/// Errors from standing up or running the HTTP server.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_names_the_address() {
        let err = TransportError::Bind {
            addr: "127.0.0.1:8080".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        let message = err.to_string();
        assert!(message.contains("127.0.0.1:8080"));
        assert!(message.contains("in use"));
    }

    #[test]
    fn serve_error_displays_detail() {
        let err = TransportError::Serve("connection reset".to_string());
        assert_eq!(err.to_string(), "server error: connection reset");
    }
}
