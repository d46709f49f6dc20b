//! Print the approval graph's mermaid diagram and rendering URLs.
//!
//! Run with: `cargo run -p flowgraph-examples --example render_mermaid`

use flowgraph::{ImageFormat, MermaidTheme, RenderConfig};
use flowgraph_examples::approval::approval_graph;

fn main() {
    let graph = approval_graph();

    println!("{}", graph.to_mermaid());
    println!();
    println!(
        "svg: {}",
        graph.to_mermaid_ink_url(ImageFormat::Svg, &RenderConfig::default())
    );

    let dark = RenderConfig {
        theme: Some(MermaidTheme::Dark),
        width: Some(800),
        ..Default::default()
    };
    println!("png: {}", graph.to_mermaid_ink_url(ImageFormat::Png, &dark));
}
