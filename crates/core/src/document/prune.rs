//! Conditional section removal.
//!
//! Sections are delimited by standalone marker paragraphs `[TAG]` and
//! `[/TAG]`. Pruning removes the inclusive marker-to-marker run, tables
//! included; the retained family's own markers are unwrapped afterwards so
//! no marker paragraph reaches the serialized document.

use crate::errors::DomainError;
use crate::pricing::DocumentFamily;

use super::{Block, Document};

const STANDARD_TAG: &str = "VAS_STANDARD";
const CHEMICAL_TAG: &str = "VAS_CHEMICAL";
const OPENYARD_TAG: &str = "VAS_OPENYARD";

/// Removes the inclusive block run delimited by `[tag]` / `[/tag]` marker
/// paragraphs. A start marker with no end marker is a fatal authoring error;
/// the document is never silently cut to end-of-file.
pub fn prune(document: &Document, tag: &str) -> Result<Document, DomainError> {
    let start_marker = format!("[{tag}]");
    let end_marker = format!("[/{tag}]");

    let mut blocks = Vec::with_capacity(document.blocks.len());
    let mut inside = false;

    for block in &document.blocks {
        let marker = match block {
            Block::Paragraph { text } => text.trim(),
            Block::Table { .. } => "",
        };

        if !inside && marker == start_marker {
            inside = true;
            continue;
        }
        if inside {
            if marker == end_marker {
                inside = false;
            }
            continue;
        }

        blocks.push(block.clone());
    }

    if inside {
        return Err(DomainError::UnterminatedSection { tag: tag.to_owned() });
    }

    Ok(Document { blocks })
}

/// Keeps exactly one of the three tagged service families: the two foreign
/// families are deleted, then the retained family's own markers are unwrapped
/// so no marker paragraph survives in the output.
pub fn prune_for_family(
    document: &Document,
    family: DocumentFamily,
) -> Result<Document, DomainError> {
    let (keep, remove) = match family {
        DocumentFamily::Standard => (STANDARD_TAG, [CHEMICAL_TAG, OPENYARD_TAG]),
        DocumentFamily::Chemical => (CHEMICAL_TAG, [STANDARD_TAG, OPENYARD_TAG]),
        DocumentFamily::OpenYard => (OPENYARD_TAG, [STANDARD_TAG, CHEMICAL_TAG]),
    };

    let mut pruned = document.clone();
    for tag in remove {
        pruned = prune(&pruned, tag)?;
    }

    Ok(unwrap_markers(&pruned, keep))
}

/// Drops the retained family's marker paragraphs, keeping its content.
fn unwrap_markers(document: &Document, tag: &str) -> Document {
    let start_marker = format!("[{tag}]");
    let end_marker = format!("[/{tag}]");

    let blocks = document
        .blocks
        .iter()
        .filter(|block| match block {
            Block::Paragraph { text } => {
                let trimmed = text.trim();
                trimmed != start_marker && trimmed != end_marker
            }
            Block::Table { .. } => true,
        })
        .cloned()
        .collect();

    Document { blocks }
}

#[cfg(test)]
mod tests {
    use crate::document::{Block, Document, TableCell, TableRow};
    use crate::errors::DomainError;
    use crate::pricing::DocumentFamily;

    use super::{prune, prune_for_family};

    fn tagged_document() -> Document {
        Document {
            blocks: vec![
                Document::paragraph("Commercial Storage Quotation"),
                Document::paragraph("[VAS_STANDARD]"),
                Document::paragraph("Standard handling services"),
                Block::Table {
                    rows: vec![TableRow {
                        cells: vec![TableCell { paragraphs: vec!["In/Out Handling".into()] }],
                    }],
                },
                Document::paragraph("[/VAS_STANDARD]"),
                Document::paragraph("[VAS_CHEMICAL]"),
                Document::paragraph("Chemical handling services"),
                Document::paragraph("[/VAS_CHEMICAL]"),
                Document::paragraph("[VAS_OPENYARD]"),
                Document::paragraph("Yard equipment services"),
                Document::paragraph("[/VAS_OPENYARD]"),
                Document::paragraph("Terms and conditions apply."),
            ],
        }
    }

    #[test]
    fn prune_removes_the_inclusive_run_tables_included() {
        let pruned = prune(&tagged_document(), "VAS_STANDARD").expect("well-formed template");

        assert!(!pruned.contains_text("[VAS_STANDARD]"));
        assert!(!pruned.contains_text("Standard handling services"));
        assert!(!pruned.contains_text("In/Out Handling"));
        assert!(pruned.contains_text("Chemical handling services"));
        assert!(pruned.contains_text("Terms and conditions apply."));
    }

    #[test]
    fn standard_family_keeps_only_standard_content() {
        let pruned =
            prune_for_family(&tagged_document(), DocumentFamily::Standard).expect("well-formed");

        for marker in
            ["[VAS_CHEMICAL]", "[/VAS_CHEMICAL]", "[VAS_OPENYARD]", "[/VAS_OPENYARD]"]
        {
            assert!(!pruned.contains_text(marker), "{marker} should be removed");
        }
        assert!(!pruned.contains_text("Chemical handling services"));
        assert!(!pruned.contains_text("Yard equipment services"));
        assert!(pruned.contains_text("Standard handling services"));
        // Retained markers are unwrapped, not rendered.
        assert!(!pruned.contains_text("[VAS_STANDARD]"));
        assert!(!pruned.contains_text("[/VAS_STANDARD]"));
    }

    #[test]
    fn each_family_retains_exactly_its_own_section() {
        let cases = [
            (DocumentFamily::Chemical, "Chemical handling services"),
            (DocumentFamily::OpenYard, "Yard equipment services"),
        ];

        for (family, retained) in cases {
            let pruned = prune_for_family(&tagged_document(), family).expect("well-formed");
            assert!(pruned.contains_text(retained), "{family:?}");
            assert!(pruned.contains_text("Commercial Storage Quotation"), "{family:?}");
        }
    }

    #[test]
    fn unterminated_start_marker_is_fatal() {
        let document = Document {
            blocks: vec![
                Document::paragraph("[VAS_CHEMICAL]"),
                Document::paragraph("orphaned content"),
            ],
        };

        let error = prune(&document, "VAS_CHEMICAL").expect_err("must not truncate silently");
        assert_eq!(error, DomainError::UnterminatedSection { tag: "VAS_CHEMICAL".into() });
    }

    #[test]
    fn pruning_an_absent_tag_is_a_no_op() {
        let document = Document { blocks: vec![Document::paragraph("no sections here")] };
        let pruned = prune(&document, "VAS_OPENYARD").expect("absent tag is fine");
        assert_eq!(pruned, document);
    }

    #[test]
    fn markers_must_stand_alone_to_delimit() {
        let document = Document {
            blocks: vec![Document::paragraph("mentioning [VAS_STANDARD] inline is content")],
        };
        let pruned = prune(&document, "VAS_STANDARD").expect("inline mention is not a marker");
        assert_eq!(pruned.blocks.len(), 1);
    }
}
