use std::fmt;

#[derive(Debug)]
pub enum NamerError {
    /// Node.js page server failed to spawn
    BridgeSpawn { script: String, source: std::io::Error },

    /// stdin/stdout plumbing to the page server broke
    BridgeIo(String),

    /// Page server answered, but with an error or a malformed payload
    BridgeProtocol { command: String, error: String },

    /// JSON parsing failed (bridge response or snapshot file)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (bridge request)
    JsonSerialize { context: String, source: serde_json::Error },

    /// Snapshot file could not be read
    SnapshotRead { path: String, source: std::io::Error },

    /// A dotted node path did not resolve to a node in the snapshot
    NodePath { path: String },
}

impl fmt::Display for NamerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamerError::BridgeSpawn { script, source } => {
                write!(f, "Failed to spawn {} (is Node.js installed?): {}", script, source)
            }
            NamerError::BridgeIo(msg) => {
                write!(f, "Page server I/O error: {}", msg)
            }
            NamerError::BridgeProtocol { command, error } => {
                write!(f, "Page server rejected '{}': {}", command, error)
            }
            NamerError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            NamerError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            NamerError::SnapshotRead { path, source } => {
                write!(f, "Could not read snapshot '{}': {}", path, source)
            }
            NamerError::NodePath { path } => {
                write!(f, "Node path '{}' does not resolve to an element", path)
            }
        }
    }
}

impl std::error::Error for NamerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NamerError::BridgeSpawn { source, .. } => Some(source),
            NamerError::JsonParse { source, .. } => Some(source),
            NamerError::JsonSerialize { source, .. } => Some(source),
            NamerError::SnapshotRead { source, .. } => Some(source),
            _ => None,
        }
    }
}
