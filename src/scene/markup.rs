use crate::error::ChartResult;

use super::{NodeId, NodeKind, RetainedScene};

pub(super) fn write_subtree(
    scene: &RetainedScene,
    id: NodeId,
    out: &mut String,
) -> ChartResult<()> {
    let node = scene.node(id)?;
    if node.kind() == NodeKind::Document {
        for child in node.children() {
            write_subtree(scene, *child, out)?;
        }
        return Ok(());
    }

    let tag = node.kind().tag_name();
    out.push('<');
    out.push_str(tag);
    for (name, value) in node.attributes() {
        push_attribute(out, name, value);
    }
    if !node.classes().is_empty() {
        push_attribute(out, "class", &node.classes().join(" "));
    }

    if node.kind().is_shape() && node.children().is_empty() && node.text().is_none() {
        out.push_str("/>");
        return Ok(());
    }

    out.push('>');
    if let Some(text) = node.text() {
        push_escaped(out, text);
    }
    for child in node.children() {
        write_subtree(scene, *child, out)?;
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    Ok(())
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

fn push_escaped(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
