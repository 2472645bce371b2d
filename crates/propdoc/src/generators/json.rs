use indexmap::IndexMap;

use crate::error::Result;
use crate::generator::GeneratedDoc;
use crate::output::Docgen;

/// JSON representation of a single document.
pub fn render_json(docgen: &Docgen, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(docgen)?
    } else {
        serde_json::to_string(docgen)?
    };
    Ok(json)
}

/// JSON object mapping each file path to its document, in input order.
pub fn render_json_map(docs: &[GeneratedDoc], pretty: bool) -> Result<String> {
    let payload: IndexMap<String, &Docgen> = docs
        .iter()
        .map(|doc| (doc.path.to_string_lossy().into_owned(), &doc.docgen))
        .collect();

    let json = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(json)
}
