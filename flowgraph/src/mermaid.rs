//! Mermaid visualization: diagram text, mermaid.ink URLs, image download.
//!
//! Everything here is static analysis over declared [`NodeDef`] transitions;
//! no node ever executes. Only [`save_as_image`] performs I/O, against the
//! mermaid.ink rendering service, and its failures are [`RenderError`] so
//! they cannot be mistaken for workflow errors.

use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::graph::{Edge, NodeDef};

/// Error from rendering a diagram through mermaid.ink.
///
/// Kept apart from [`GraphError`](crate::GraphError): these concern an
/// external service, not the graph definition.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The HTTP request to mermaid.ink failed.
    #[error("mermaid.ink request failed")]
    Http(#[from] reqwest::Error),

    /// mermaid.ink answered with a non-success status.
    #[error("mermaid.ink returned status {0}")]
    Status(reqwest::StatusCode),

    /// Writing the rendered bytes to disk failed.
    #[error("failed to write rendered image")]
    Io(#[from] std::io::Error),
}

/// Output format for rendered diagrams.
///
/// `Png`/`Jpeg`/`Webp` use the raster `img` endpoint (jpeg is its default,
/// the others pass `type=`); `Svg` and `Pdf` have endpoints of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Raster PNG.
    Png,
    /// Raster JPEG, the `img` endpoint default.
    Jpeg,
    /// Raster WebP.
    Webp,
    /// Vector SVG.
    #[default]
    Svg,
    /// PDF document.
    Pdf,
}

impl ImageFormat {
    fn endpoint(self) -> &'static str {
        match self {
            Self::Png | Self::Jpeg | Self::Webp => "img",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    fn type_param(self) -> Option<&'static str> {
        match self {
            Self::Png => Some("png"),
            Self::Webp => Some("webp"),
            Self::Jpeg | Self::Svg | Self::Pdf => None,
        }
    }
}

/// Visual theme understood by mermaid.ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MermaidTheme {
    /// The service's default theme.
    Default,
    /// Neutral grayscale.
    Neutral,
    /// Dark background.
    Dark,
    /// Green-tinted "forest".
    Forest,
}

impl MermaidTheme {
    /// The query-parameter value for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Neutral => "neutral",
            Self::Dark => "dark",
            Self::Forest => "forest",
        }
    }
}

/// Optional rendering knobs; only the raster endpoint honors them.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Visual theme.
    pub theme: Option<MermaidTheme>,
    /// Background color: hex code, or a named color prefixed with `!`.
    pub bg_color: Option<String>,
    /// Image width in pixels.
    pub width: Option<u32>,
    /// Image height in pixels.
    pub height: Option<u32>,
}

fn sanitize(name: &str) -> String {
    name.replace([' ', '-', '.'], "_")
}

/// Renders declared node transitions as mermaid `graph TD` text.
///
/// One node line per descriptor, one edge per declared successor whose
/// target is registered (edges to unknown names are dropped), a single
/// `End` node reached by every descriptor declaring a terminal transition,
/// and a `subgraph` wrapper when the graph is named.
pub fn diagram(name: Option<&str>, defs: &[NodeDef]) -> String {
    let mut lines = Vec::new();

    for def in defs {
        lines.push(format!("    {}[\"{}\"]", sanitize(def.name()), def.name()));
    }

    if defs.iter().any(|def| def.ends()) {
        lines.push("    End[\"End\"]".to_string());
    }

    for def in defs {
        let from = sanitize(def.name());
        for edge in def.edges() {
            match edge {
                Edge::End => lines.push(format!("    {} --> End", from)),
                Edge::Node(to) => {
                    if defs.iter().any(|d| d.name() == *to) {
                        lines.push(format!("    {} --> {}", from, sanitize(to)));
                    }
                }
            }
        }
    }

    let mut out = vec!["graph TD".to_string()];
    match name {
        Some(name) => {
            out.push(format!("    subgraph \"{}\"", name));
            for line in lines {
                out.push(format!("    {}", line));
            }
            out.push("    end".to_string());
        }
        None => out.extend(lines),
    }
    out.join("\n")
}

/// Encodes diagram text for a mermaid.ink URL: compact JSON
/// `{"code": ...}`, zlib at maximum compression, URL-safe base64 without
/// padding.
pub fn encode_for_ink(code: &str) -> String {
    let payload = serde_json::json!({ "code": code }).to_string();
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(payload.as_bytes())
        .expect("zlib write to Vec cannot fail");
    let compressed = encoder.finish().expect("zlib finish to Vec cannot fail");
    URL_SAFE_NO_PAD.encode(compressed)
}

/// Builds the mermaid.ink URL for diagram text.
///
/// Query parameters apply to the raster `img` endpoint only; the svg and pdf
/// endpoints ignore them, so none are emitted there.
pub fn ink_url(code: &str, format: ImageFormat, config: &RenderConfig) -> String {
    let mut url = format!(
        "https://mermaid.ink/{}/pako:{}",
        format.endpoint(),
        encode_for_ink(code)
    );

    if format.endpoint() == "img" {
        let mut params = Vec::new();
        if let Some(kind) = format.type_param() {
            params.push(format!("type={}", kind));
        }
        if let Some(theme) = config.theme {
            params.push(format!("theme={}", theme.as_str()));
        }
        if let Some(bg) = &config.bg_color {
            params.push(format!("bgColor={}", bg));
        }
        if let Some(width) = config.width {
            params.push(format!("width={}", width));
        }
        if let Some(height) = config.height {
            params.push(format!("height={}", height));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
    }

    url
}

/// Downloads the rendered diagram and writes it to `path`.
///
/// # Errors
///
/// `Http` / `Status` for service failures, `Io` for local write failures.
pub async fn save_as_image(
    code: &str,
    path: impl AsRef<Path>,
    format: ImageFormat,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let url = ink_url(code, format, config);
    tracing::debug!(url = %url, "fetching rendered diagram");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RenderError::Status(status));
    }
    let bytes = response.bytes().await?;
    tokio::fs::write(path.as_ref(), &bytes).await?;
    tracing::debug!(path = %path.as_ref().display(), "wrote rendered diagram");
    Ok(())
}
