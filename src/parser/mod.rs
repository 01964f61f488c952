//! BehaviorTree.CPP XML parsing.
//!
//! Every `<BehaviorTree>` element becomes one tree in the returned
//! [`Document`], keyed by its `ID` attribute (`MainTree` when absent). The
//! `BehaviorTree` element itself is the tree's root node, so node paths look
//! like `BehaviorTree/Sequence[0]/Action[@ID='Wait']`.
//!
//! Elements outside any tree (`<root>`, `<TreeNodesModel>`, ...) are skipped.
//! A `BehaviorTree` nested inside another tree is parsed as a separate tree
//! and is not a child of the enclosing one.


use crate::error::{BtDiffError, Result};
use crate::tree::{DEFAULT_TREE_NAME, Document, ID_ATTRIBUTE, Node, NodeBuilder};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Element that opens a tree definition.
pub const TREE_TAG: &str = "BehaviorTree";

/// An open element while streaming through the document.
enum Frame {
    /// Element outside of any tree definition.
    Outside,
    /// Element inside a tree definition, with the order it was opened in.
    Node { builder: NodeBuilder, opened: usize },
}

/// Read and parse a behavior-tree XML file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| BtDiffError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let document = parse_document(&content).map_err(|e| match e {
        BtDiffError::ParseError(msg) => {
            BtDiffError::ParseError(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        trees = document.len(),
        "parsed behavior tree file"
    );
    Ok(document)
}

/// Parse behavior-tree XML text.
pub fn parse_document(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut finished: Vec<(usize, String, Node)> = Vec::new();
    let mut open_trees = 0usize;
    let mut opened = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| {
            BtDiffError::ParseError(format!("at byte {}: {}", reader.buffer_position(), e))
        })?;

        match event {
            Event::Start(e) => {
                let frame = open_frame(&e, open_trees, &mut opened)?;
                if frame.is_tree() {
                    open_trees += 1;
                }
                stack.push(frame);
            }
            Event::Empty(e) => {
                let frame = open_frame(&e, open_trees, &mut opened)?;
                close_frame(frame, &mut stack, &mut finished);
            }
            Event::End(_) => {
                // quick-xml has already checked that the end tag matches.
                if let Some(frame) = stack.pop() {
                    if frame.is_tree() {
                        open_trees -= 1;
                    }
                    close_frame(frame, &mut stack, &mut finished);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(BtDiffError::ParseError(format!(
            "unexpected end of document: {} element(s) left open",
            stack.len()
        )));
    }

    finished.sort_by_key(|(opened, _, _)| *opened);
    let mut document = Document::new();
    for (_, name, root) in finished {
        if document.insert(name.clone(), root).is_some() {
            tracing::warn!(tree = %name, "duplicate tree definition, keeping the later one");
        }
    }
    Ok(document)
}

impl Frame {
    fn is_tree(&self) -> bool {
        matches!(self, Frame::Node { builder, .. } if builder.tag() == TREE_TAG)
    }
}

fn open_frame(e: &BytesStart<'_>, open_trees: usize, opened: &mut usize) -> Result<Frame> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    if open_trees == 0 && tag != TREE_TAG {
        return Ok(Frame::Outside);
    }

    let mut builder = NodeBuilder::new(tag);
    for attr in e.attributes() {
        let attr = attr?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| BtDiffError::ParseError(format!("attribute '{}': {}", name, err)))?;
        builder.set_attr(name, value.into_owned());
    }

    *opened += 1;
    Ok(Frame::Node {
        builder,
        opened: *opened,
    })
}

fn close_frame(frame: Frame, stack: &mut [Frame], finished: &mut Vec<(usize, String, Node)>) {
    let Frame::Node { builder, opened } = frame else {
        return;
    };

    if builder.tag() == TREE_TAG {
        let name = builder
            .attribute(ID_ATTRIBUTE)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_TREE_NAME)
            .to_string();
        finished.push((opened, name, builder.build()));
        return;
    }

    if let Some(Frame::Node { builder: parent, .. }) = stack.last_mut() {
        parent.push_child(builder);
    }
}
