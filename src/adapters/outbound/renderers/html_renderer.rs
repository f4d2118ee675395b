//! HTML viewer renderer.

use super::escape::{escape_html, escape_html_opt, escape_script_content, is_safe_url};
use crate::application::read_models::{
    EdgeView, GraphReadModel, LegendEntryView, LinkView, NodeDetailsView, NodeView,
};
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::collections::HashMap;
use std::fmt::Write;

/// Renders the graph read model as one self-contained HTML page
///
/// The page needs no network access. Both the extracted AI-BOM text and
/// the graph read model are embedded as `application/json` script blocks
/// so that tooling can recover them from a saved viewer.
pub struct HtmlViewerRenderer {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlViewerRenderer {
    pub fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Renderer emitting unstyled markup
    pub fn without_styles() -> Self {
        Self {
            include_styles: false,
        }
    }

    fn get_styles(&self) -> &'static str {
        r#"
        <style>
            :root {
                --bg-color: #0b1120;
                --text-color: #e2e8f0;
                --muted-color: #94a3b8;
                --accent-color: #60a5fa;
                --error-color: #f87171;
                --border-color: #1e293b;
                --card-bg: #111827;
            }

            body {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 0;
                padding: 20px;
                line-height: 1.5;
            }

            .container { max-width: 1200px; margin: 0 auto; }
            h1, h2, h3 { color: var(--accent-color); }
            a { color: var(--accent-color); }

            .header {
                border-bottom: 2px solid var(--border-color);
                padding-bottom: 16px;
                margin-bottom: 24px;
            }

            .meta { color: var(--muted-color); font-size: 0.9em; }

            .legend { display: flex; flex-wrap: wrap; gap: 10px; margin-bottom: 24px; }

            .legend-item, .badge {
                display: inline-flex;
                align-items: center;
                gap: 6px;
                padding: 4px 10px;
                border-radius: 999px;
                border: 1px solid;
                font-size: 0.85em;
            }

            .node-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 16px;
                margin-bottom: 24px;
            }

            .node-card {
                background-color: var(--card-bg);
                border: 1px solid var(--border-color);
                border-left-width: 4px;
                border-radius: 8px;
                padding: 14px 16px;
                cursor: pointer;
            }

            .node-card.selected { outline: 2px solid var(--accent-color); }
            .node-card.related { outline: 1px dashed var(--muted-color); }
            .node-card h3 { margin: 6px 0; font-size: 1.05em; word-break: break-all; }

            .field { margin-top: 8px; }
            .field-label {
                font-size: 0.7em;
                text-transform: uppercase;
                letter-spacing: 0.08em;
                color: var(--muted-color);
            }
            .field-value { word-break: break-all; }
            .mono { font-family: ui-monospace, SFMono-Regular, Menlo, monospace; font-size: 0.85em; }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 24px;
                background-color: var(--card-bg);
            }

            th, td {
                padding: 8px 12px;
                text-align: left;
                border-bottom: 1px solid var(--border-color);
                word-break: break-all;
            }

            th { background-color: var(--border-color); }
            .unresolved { color: var(--error-color); }
            .empty { color: var(--muted-color); font-style: italic; }
        </style>
        "#
    }

    fn get_script(&self) -> &'static str {
        r#"
        <script>
            document.querySelectorAll('.node-card').forEach(function (card) {
                card.addEventListener('click', function () {
                    var id = card.dataset.id;
                    var related = JSON.parse(card.dataset.related || '[]');
                    document.querySelectorAll('.node-card').forEach(function (other) {
                        other.classList.toggle('selected', other.dataset.id === id);
                        other.classList.toggle('related', related.indexOf(other.dataset.id) !== -1);
                    });
                });
            });
        </script>
        "#
    }

    fn write_header(&self, html: &mut String, model: &GraphReadModel) -> Result<()> {
        let document = &model.document;
        writeln!(html, "<div class=\"header\">")?;
        writeln!(html, "    <h1>{}</h1>", escape_html(&document.title))?;
        writeln!(
            html,
            "    <div class=\"meta\">{} document &middot; spec {} &middot; version {}</div>",
            escape_html_opt(document.bom_format.as_deref()),
            escape_html_opt(document.spec_version.as_deref()),
            escape_html_opt(document.version.as_deref()),
        )?;
        if let Some(scanner) = &document.scanner {
            writeln!(
                html,
                "    <div class=\"meta\">Scanned by {}</div>",
                escape_html(scanner)
            )?;
        }
        writeln!(
            html,
            "    <div class=\"meta\">{} nodes &middot; {} edges &middot; generated by {} {} at {}</div>",
            model.stats.node_count,
            model.stats.edge_count,
            escape_html(&document.tool_name),
            escape_html(&document.tool_version),
            escape_html(&document.generated_at),
        )?;
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_legend(&self, html: &mut String, legend: &[LegendEntryView]) -> Result<()> {
        writeln!(html, "<div class=\"legend\">")?;
        for entry in legend {
            writeln!(
                html,
                "    <span class=\"legend-item\" style=\"color: {}; background-color: {}; border-color: {};\">{} {} <strong>{}</strong></span>",
                entry.color, entry.background, entry.border, entry.icon, entry.label, entry.count
            )?;
        }
        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_nodes(&self, html: &mut String, model: &GraphReadModel) -> Result<()> {
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Nodes</h2>")?;

        if model.nodes.is_empty() {
            writeln!(
                html,
                "    <p class=\"empty\">The document has no components or services.</p>"
            )?;
            writeln!(html, "</div>")?;
            return Ok(());
        }

        let related = related_ids(model);

        for entry in &model.legend {
            writeln!(html, "    <h3>{} {}</h3>", entry.icon, entry.label)?;
            writeln!(html, "    <div class=\"node-grid\">")?;
            for (index, node) in model.nodes.iter().enumerate() {
                if node.node_type != entry.node_type {
                    continue;
                }
                let neighbours = related.get(node.id.as_str()).cloned().unwrap_or_default();
                self.write_node_card(html, index, node, entry, &neighbours)?;
            }
            writeln!(html, "    </div>")?;
        }

        writeln!(html, "</div>")?;
        Ok(())
    }

    fn write_node_card(
        &self,
        html: &mut String,
        index: usize,
        node: &NodeView,
        style: &LegendEntryView,
        related: &[&str],
    ) -> Result<()> {
        let related_json = serde_json::to_string(related)?;
        writeln!(
            html,
            "        <div class=\"node-card\" id=\"node-{}\" data-id=\"{}\" data-related=\"{}\" style=\"border-left-color: {};\">",
            index,
            escape_html(&node.id),
            escape_html(&related_json),
            style.border
        )?;
        writeln!(
            html,
            "            <span class=\"badge\" style=\"color: {}; background-color: {}; border-color: {};\">{} {}</span>",
            style.color, style.background, style.border, style.icon, style.label
        )?;
        writeln!(html, "            <h3>{}</h3>", escape_html(&node.label))?;
        write_field(html, "Name", &escape_html(&node.full_name))?;
        write_field(
            html,
            "bom-ref",
            &format!("<span class=\"mono\">{}</span>", escape_html(&node.id)),
        )?;
        self.write_details(html, &node.details)?;
        writeln!(html, "        </div>")?;
        Ok(())
    }

    fn write_details(&self, html: &mut String, details: &NodeDetailsView) -> Result<()> {
        if let Some(publisher) = &details.publisher {
            write_field(html, "Publisher", &escape_html(publisher))?;
        }
        if let Some(manufacturer) = &details.manufacturer {
            write_field(html, "Manufacturer", &render_link(manufacturer))?;
        }
        if let Some(provider) = &details.provider {
            write_field(html, "Provider", &render_link(provider))?;
        }
        if !details.authors.is_empty() {
            write_field(html, "Authors", &join_escaped(&details.authors))?;
        }
        if !details.endpoints.is_empty() {
            let endpoints: Vec<String> = details
                .endpoints
                .iter()
                .map(|endpoint| format!("<div class=\"mono\">{}</div>", escape_html(endpoint)))
                .collect();
            write_field(html, "Endpoints", &endpoints.concat())?;
        }
        if !details.properties.is_empty() {
            let properties: Vec<String> = details
                .properties
                .iter()
                .map(|(name, value)| {
                    format!(
                        "<div><span class=\"mono\">{}</span>: {}</div>",
                        escape_html(name),
                        escape_html(value)
                    )
                })
                .collect();
            write_field(html, "Properties", &properties.concat())?;
        }
        if let Some(model) = &details.model {
            let rows = [
                ("Task", model.task.as_deref()),
                ("Architecture", model.architecture.as_deref()),
                ("Family", model.family.as_deref()),
                ("Approach", model.approach.as_deref()),
            ];
            for (label, value) in rows {
                if let Some(value) = value {
                    write_field(html, label, &escape_html(value))?;
                }
            }
            if !model.inputs.is_empty() {
                write_field(html, "Inputs", &join_escaped(&model.inputs))?;
            }
            if !model.outputs.is_empty() {
                write_field(html, "Outputs", &join_escaped(&model.outputs))?;
            }
        }
        if !details.licenses.is_empty() {
            let licenses: Vec<String> = details.licenses.iter().map(render_link).collect();
            write_field(html, "Licenses", &licenses.join(", "))?;
        }
        if !details.occurrences.is_empty() {
            let occurrences: Vec<String> = details
                .occurrences
                .iter()
                .map(|occurrence| format!("<div class=\"mono\">{}</div>", escape_html(occurrence)))
                .collect();
            write_field(html, "Found in", &occurrences.concat())?;
        }
        if !details.external_references.is_empty() {
            let references: Vec<String> = details
                .external_references
                .iter()
                .map(|reference| format!("<div>{}</div>", render_link(reference)))
                .collect();
            write_field(html, "References", &references.concat())?;
        }
        Ok(())
    }

    fn write_edges(&self, html: &mut String, model: &GraphReadModel) -> Result<()> {
        let anchors = first_index_by_id(model);

        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Dependencies</h2>")?;
        let resolved: Vec<&EdgeView> = model.resolved_edges().collect();
        if resolved.is_empty() {
            writeln!(html, "    <p class=\"empty\">No dependencies between nodes.</p>")?;
        } else {
            self.write_edge_table(html, &resolved, &anchors)?;
        }
        writeln!(html, "</div>")?;

        let unresolved: Vec<&EdgeView> = model.unresolved_edges().collect();
        if !unresolved.is_empty() {
            writeln!(html, "<div class=\"section\">")?;
            writeln!(html, "    <h2 class=\"unresolved\">Unresolved references</h2>")?;
            writeln!(
                html,
                "    <p class=\"meta\">These dependencies name a bom-ref that matches no component or service.</p>"
            )?;
            self.write_edge_table(html, &unresolved, &anchors)?;
            writeln!(html, "</div>")?;
        }
        Ok(())
    }

    fn write_edge_table(
        &self,
        html: &mut String,
        edges: &[&EdgeView],
        anchors: &HashMap<&str, usize>,
    ) -> Result<()> {
        writeln!(html, "    <table>")?;
        writeln!(html, "        <thead>")?;
        writeln!(html, "            <tr>")?;
        writeln!(html, "                <th>From</th>")?;
        writeln!(html, "                <th>Depends on</th>")?;
        writeln!(html, "            </tr>")?;
        writeln!(html, "        </thead>")?;
        writeln!(html, "        <tbody>")?;
        for edge in edges {
            writeln!(html, "            <tr>")?;
            writeln!(html, "                <td>{}</td>", node_ref(&edge.from, anchors))?;
            writeln!(html, "                <td>{}</td>", node_ref(&edge.to, anchors))?;
            writeln!(html, "            </tr>")?;
        }
        writeln!(html, "        </tbody>")?;
        writeln!(html, "    </table>")?;
        Ok(())
    }
}

impl Default for HtmlViewerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for HtmlViewerRenderer {
    fn render(&self, model: &GraphReadModel, bom_json: &str) -> Result<String> {
        let mut html = String::new();

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            html,
            "    <meta name=\"generator\" content=\"{} {}\">",
            escape_html(&model.document.tool_name),
            escape_html(&model.document.tool_version)
        )?;
        writeln!(html, "    <title>{}</title>", escape_html(&model.document.title))?;
        if self.include_styles {
            writeln!(html, "{}", self.get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        self.write_header(&mut html, model)?;
        self.write_legend(&mut html, &model.legend)?;
        self.write_nodes(&mut html, model)?;
        self.write_edges(&mut html, model)?;

        writeln!(html, "</div>")?;
        writeln!(
            html,
            "<script type=\"application/json\" id=\"bom-data\">{}</script>",
            escape_script_content(bom_json)
        )?;
        writeln!(
            html,
            "<script type=\"application/json\" id=\"graph-data\">{}</script>",
            escape_script_content(&serde_json::to_string(model)?)
        )?;
        writeln!(html, "{}", self.get_script())?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }
}

fn write_field(html: &mut String, label: &str, value_html: &str) -> Result<()> {
    writeln!(
        html,
        "            <div class=\"field\"><div class=\"field-label\">{}</div><div class=\"field-value\">{}</div></div>",
        label, value_html
    )?;
    Ok(())
}

fn render_link(link: &LinkView) -> String {
    match link.url.as_deref() {
        Some(url) if is_safe_url(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(url),
            escape_html(&link.text)
        ),
        _ => escape_html(&link.text),
    }
}

fn join_escaped(values: &[String]) -> String {
    values
        .iter()
        .map(|value| escape_html(value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Card anchor for an id, or the bare id when no node carries it
fn node_ref(id: &str, anchors: &HashMap<&str, usize>) -> String {
    match anchors.get(id) {
        Some(index) => format!("<a href=\"#node-{}\">{}</a>", index, escape_html(id)),
        None => format!("<span class=\"unresolved\">{} (missing)</span>", escape_html(id)),
    }
}

/// Index of the first node for each id
fn first_index_by_id(model: &GraphReadModel) -> HashMap<&str, usize> {
    let mut anchors = HashMap::new();
    for (index, node) in model.nodes.iter().enumerate() {
        anchors.entry(node.id.as_str()).or_insert(index);
    }
    anchors
}

/// Ids joined to each node by a resolved edge, in either direction
fn related_ids(model: &GraphReadModel) -> HashMap<&str, Vec<&str>> {
    let mut related: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in model.resolved_edges() {
        related
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
        related
            .entry(edge.to.as_str())
            .or_default()
            .push(edge.from.as_str());
    }
    related
}
