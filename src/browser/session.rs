use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::dom::node::ElementNode;
use crate::error::NamerError;

pub const DEFAULT_SERVER_SCRIPT: &str = "node/page_server.js";

/// Request sent to the page server over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PageRequest {
    Navigate { cmd: &'static str, url: String },
    Snapshot { cmd: &'static str },
    Quit { cmd: &'static str },
}

impl PageRequest {
    pub fn navigate(url: &str) -> Self {
        PageRequest::Navigate {
            cmd: "navigate",
            url: url.to_string(),
        }
    }

    pub fn snapshot() -> Self {
        PageRequest::Snapshot { cmd: "snapshot" }
    }

    pub fn quit() -> Self {
        PageRequest::Quit { cmd: "quit" }
    }
}

/// Response received from the page server over stdout (one JSON line).
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
    /// Root of the extracted element tree, for `snapshot` responses. The
    /// extractor has already run the discovery query, the visibility check
    /// and the locator builders; their results ride along on each node.
    #[serde(default)]
    pub dom: Option<ElementNode>,
}

/// A persistent page session backed by a Node.js extraction server.
///
/// Launches a long-lived process that keeps a browser open. Commands are
/// sent as NDJSON over stdin, responses read from stdout.
pub struct PageSession {
    child: Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
}

impl PageSession {
    /// Launch a new session by spawning the extraction server script.
    pub fn launch(script: &str) -> Result<Self, NamerError> {
        let mut child = Command::new("node")
            .arg(script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| NamerError::BridgeSpawn {
                script: script.to_string(),
                source: e,
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| NamerError::BridgeIo("Failed to capture page server stdin".into()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| NamerError::BridgeIo("Failed to capture page server stdout".into()))?;

        let mut reader = BufReader::new(stdout);

        // Wait for the ready signal
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| NamerError::BridgeIo(format!("Failed to read ready signal: {}", e)))?;

        let response: PageResponse =
            serde_json::from_str(line.trim()).map_err(|e| NamerError::JsonParse {
                context: "page server ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(NamerError::BridgeProtocol {
                command: "launch".into(),
                error: "Did not receive ready signal from page server".into(),
            });
        }

        Ok(PageSession {
            child,
            stdin,
            reader,
        })
    }

    /// Send a request and read the response.
    fn send(&mut self, request: &PageRequest) -> Result<PageResponse, NamerError> {
        let json = serde_json::to_string(request).map_err(|e| NamerError::JsonSerialize {
            context: "PageRequest".into(),
            source: e,
        })?;

        writeln!(self.stdin, "{}", json)
            .map_err(|e| NamerError::BridgeIo(format!("Failed to write to page server: {}", e)))?;

        self.stdin
            .flush()
            .map_err(|e| NamerError::BridgeIo(format!("Failed to flush page server stdin: {}", e)))?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .map_err(|e| NamerError::BridgeIo(format!("Failed to read from page server: {}", e)))?;

        if line.trim().is_empty() {
            return Err(NamerError::BridgeIo(
                "Empty response from page server (process may have died)".into(),
            ));
        }

        let response: PageResponse =
            serde_json::from_str(line.trim()).map_err(|e| NamerError::JsonParse {
                context: "page server response".into(),
                source: e,
            })?;

        Ok(response)
    }

    /// Send a request and verify it succeeded.
    fn send_ok(
        &mut self,
        request: &PageRequest,
        command_name: &str,
    ) -> Result<PageResponse, NamerError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(NamerError::BridgeProtocol {
                command: command_name.into(),
                error: response.error.unwrap_or_else(|| "Unknown error".into()),
            });
        }
        Ok(response)
    }

    /// Navigate to a URL.
    pub fn navigate(&mut self, url: &str) -> Result<(), NamerError> {
        let request = PageRequest::navigate(url);
        self.send_ok(&request, "navigate")?;
        Ok(())
    }

    /// Extract the element tree from the current page.
    pub fn snapshot(&mut self) -> Result<ElementNode, NamerError> {
        let request = PageRequest::snapshot();
        let response = self.send_ok(&request, "snapshot")?;
        response.dom.ok_or_else(|| NamerError::BridgeProtocol {
            command: "snapshot".into(),
            error: "No element tree in snapshot response".into(),
        })
    }

    /// Quit the page session.
    pub fn quit(&mut self) -> Result<(), NamerError> {
        let request = PageRequest::quit();
        // Best-effort quit, the process may already be gone
        let _ = self.send(&request);
        let _ = self.child.wait();
        Ok(())
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        let _ = self.quit();
    }
}
