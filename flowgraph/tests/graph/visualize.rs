//! Graph-level mermaid output over registered descriptors.

use flowgraph::{Graph, ImageFormat, RenderConfig};

use crate::common::{CheckCountdown, Countdown, CountdownState};

/// **Scenario**: one node line per registered type, one edge per declared
/// successor, one terminal edge for the type declaring End.
#[test]
fn to_mermaid_lists_nodes_and_declared_edges() {
    let graph: Graph<CountdownState, (), i64> =
        Graph::new([Countdown::DEF, CheckCountdown::DEF]);
    let text = graph.to_mermaid();

    assert!(text.starts_with("graph TD"));
    assert!(text.contains("Countdown[\"Countdown\"]"));
    assert!(text.contains("CheckCountdown[\"CheckCountdown\"]"));
    assert!(text.contains("End[\"End\"]"));
    assert!(text.contains("Countdown --> CheckCountdown"));
    assert!(text.contains("CheckCountdown --> Countdown"));
    assert!(text.contains("CheckCountdown --> End"));
    assert_eq!(text.matches("-->").count(), 3, "one edge per declared successor");
}

/// **Scenario**: a named graph wraps its diagram in a subgraph block.
#[test]
fn named_graph_renders_subgraph() {
    let graph: Graph<CountdownState, (), i64> =
        Graph::new([Countdown::DEF, CheckCountdown::DEF]).with_name("countdown");
    let text = graph.to_mermaid();

    assert!(text.contains("subgraph \"countdown\""));
    assert!(text.ends_with("    end"));
}

/// **Scenario**: the ink URL embeds the encoded diagram under the requested
/// endpoint.
#[test]
fn ink_url_uses_requested_endpoint() {
    let graph: Graph<CountdownState, (), i64> =
        Graph::new([Countdown::DEF, CheckCountdown::DEF]);

    let svg = graph.to_mermaid_ink_url(ImageFormat::Svg, &RenderConfig::default());
    assert!(svg.starts_with("https://mermaid.ink/svg/pako:"));

    let pdf = graph.to_mermaid_ink_url(ImageFormat::Pdf, &RenderConfig::default());
    assert!(pdf.starts_with("https://mermaid.ink/pdf/pako:"));
}
