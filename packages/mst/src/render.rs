//! Graphviz DOT output for result graphs.

use crate::{Graph, VertexId};

/// Labelling choices for [`Graph::to_dot`].
#[derive(Clone, Debug, Default)]
pub struct DotOptions {
    /// Vertex attribute appended to node labels.
    pub vertex_label: Option<String>,
    /// Edge attribute used as the edge label, usually `WEIGHT`.
    pub edge_label: Option<String>,
    /// Source vertex noted in node labels (only with `vertex_label`).
    pub source: Option<VertexId>,
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

impl Graph {
    pub fn to_dot(&self, options: &DotOptions) -> String {
        let (keyword, connector) = if self.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut out = String::new();
        out.push_str(keyword);
        out.push_str(" {\n");

        for vertex in self.vertices() {
            let label = match &options.vertex_label {
                None => vertex.id.to_string(),
                Some(key) => {
                    let mut label = format!("Node: {}", vertex.id);
                    if let Some(source) = options.source {
                        label.push_str(&format!("\nNode source: {}", source));
                    }
                    if let Some(value) = vertex.attributes.get(key) {
                        label.push_str(&format!("\n{} ({})", key, value));
                    }
                    label
                }
            };
            out.push_str(&format!(
                "\t{} [label=\"{}\"]\n",
                vertex.id,
                escape_dot(&label)
            ));
        }

        for edge in self.edges() {
            let label = options
                .edge_label
                .as_ref()
                .and_then(|key| edge.attributes.get(key));
            match label {
                Some(value) => out.push_str(&format!(
                    "\t{} {} {} [label=\"{}\"]\n",
                    edge.source,
                    connector,
                    edge.target,
                    escape_dot(&value.to_string())
                )),
                None => out.push_str(&format!(
                    "\t{} {} {}\n",
                    edge.source, connector, edge.target
                )),
            }
        }

        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, DIRECTED, Edge, Vertex, WEIGHT};

    fn path() -> Graph {
        let mut g = Graph::undirected();
        for i in 0..3 {
            g.add_vertex(Vertex::new(i));
        }
        g.add_edge(Edge::weighted(0, 1, 4));
        g.add_edge(Edge::weighted(1, 2, 7));
        g
    }

    #[test]
    fn undirected_with_weights() {
        let opts = DotOptions {
            edge_label: Some(WEIGHT.to_string()),
            ..Default::default()
        };
        assert_eq!(
            path().to_dot(&opts),
            "graph {\n\
             \t0 [label=\"0\"]\n\
             \t1 [label=\"1\"]\n\
             \t2 [label=\"2\"]\n\
             \t0 -- 1 [label=\"4\"]\n\
             \t1 -- 2 [label=\"7\"]\n\
             }\n"
        );
    }

    #[test]
    fn directed_without_labels() {
        let mut attrs = Attributes::new();
        attrs.set(DIRECTED, true);
        let mut g = Graph::with_attributes(attrs);
        g.add_vertex(Vertex::new(0));
        g.add_vertex(Vertex::new(1));
        g.add_edge_with(Edge::weighted(1, 0, 2), true, false);

        let dot = g.to_dot(&DotOptions::default());
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("\t1 -> 0\n"));
    }

    #[test]
    fn vertex_labels_show_source_and_attribute() {
        let mut g = Graph::undirected();
        let mut attrs = Attributes::new();
        attrs.set("name", "hub \"a\"");
        g.add_vertex(Vertex::with_attributes(3, attrs));
        g.add_vertex(Vertex::new(4));

        let opts = DotOptions {
            vertex_label: Some("name".to_string()),
            source: Some(VertexId(3)),
            ..Default::default()
        };
        let dot = g.to_dot(&opts);
        assert!(dot.contains("\t3 [label=\"Node: 3\\nNode source: 3\\nname (hub \\\"a\\\")\"]\n"));
        assert!(dot.contains("\t4 [label=\"Node: 4\\nNode source: 3\"]\n"));
    }
}
