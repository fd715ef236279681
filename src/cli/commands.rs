use crate::browser::session::{DEFAULT_SERVER_SCRIPT, PageSession};
use crate::catalog::generator::{
    ElementCatalog, SnapshotLocators, SnapshotVisibility, generate_catalog, generate_element,
};
use crate::dom::document::Document;
use crate::dom::node::ElementNode;
use crate::error::NamerError;
use crate::naming::builder::NameBuilder;
use crate::trace::logger::TraceLogger;

// ============================================================================
// name subcommand
// ============================================================================

/// Name a single element of a snapshot, addressed by dotted child path.
///
/// Prints a one-entry catalog when the element has a locator, or just the
/// bare name when it does not.
pub fn cmd_name(
    snapshot_path: &str,
    node_path: &str,
    builder: &NameBuilder,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_snapshot(snapshot_path)?;
    let node = doc.find_by_path(node_path).ok_or_else(|| NamerError::NodePath {
        path: node_path.to_string(),
    })?;

    match generate_element(&doc, node, builder, &SnapshotLocators) {
        Some((name, descriptor)) => {
            let mut entry = ElementCatalog::new();
            entry.insert(name, descriptor);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        None => {
            if verbose > 0 {
                eprintln!(
                    "No locator for element at '{}', emitting name only",
                    node_path
                );
            }
            println!("{}", builder.build_name(&doc, node));
        }
    }

    Ok(())
}

// ============================================================================
// generate subcommand
// ============================================================================

/// Name every discovered element of a page and emit the locator catalog.
pub fn cmd_generate(
    snapshot: Option<&str>,
    url: Option<&str>,
    server_script: Option<&str>,
    format: &str,
    output: Option<&str>,
    trace: Option<&str>,
    builder: &NameBuilder,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = match (snapshot, url) {
        (Some(path), _) => load_root(path)?,
        (None, Some(url)) => {
            let script = server_script.unwrap_or(DEFAULT_SERVER_SCRIPT);
            if verbose > 0 {
                eprintln!("Extracting {} via {}...", url, script);
            }
            let mut session = PageSession::launch(script)?;
            session.navigate(url)?;
            let root = session.snapshot()?;
            session.quit()?;
            root
        }
        (None, None) => return Err("Either --snapshot or --url is required".into()),
    };

    let doc = Document::from_snapshot(&root);

    let tracer = match trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    if verbose > 0 {
        let candidates = doc
            .in_document_order()
            .filter(|&n| doc.get(n).candidate)
            .count();
        eprintln!("Naming {} candidate elements...", candidates);
    }

    let catalog = generate_catalog(&doc, builder, &SnapshotLocators, &SnapshotVisibility, &tracer);

    let content = match format {
        "yaml" => serde_yaml::to_string(&catalog)?,
        _ => serde_json::to_string_pretty(&catalog)?,
    };

    match output {
        Some(path) => std::fs::write(path, &content)?,
        None => println!("{}", content),
    }

    if verbose > 0 {
        eprintln!("Cataloged {} elements", catalog.len());
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Load a snapshot JSON file and flatten it into a Document.
pub fn load_snapshot(path: &str) -> Result<Document, Box<dyn std::error::Error>> {
    Ok(Document::from_snapshot(&load_root(path)?))
}

fn load_root(path: &str) -> Result<ElementNode, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path).map_err(|e| NamerError::SnapshotRead {
        path: path.to_string(),
        source: e,
    })?;
    let root: ElementNode = serde_json::from_str(&content).map_err(|e| NamerError::JsonParse {
        context: format!("snapshot '{}'", path),
        source: e,
    })?;
    Ok(root)
}
