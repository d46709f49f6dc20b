//! flowgraph binary: run the demo countdown workflow or render its graph.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use flowgraph::{ImageFormat, MermaidTheme, RenderConfig};
use flowgraph_cli::{run_countdown, workflows};

#[derive(Parser, Debug)]
#[command(name = "flowgraph")]
#[command(about = "Countdown workflow demo — run it or render its graph")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the countdown workflow and print each transition.
    Run {
        /// Starting counter value.
        #[arg(short, long, default_value_t = 5)]
        counter: i64,
    },
    /// Print the workflow's mermaid diagram text.
    Mermaid,
    /// Print a mermaid.ink URL for the diagram.
    Url {
        #[arg(short, long, value_enum, default_value = "svg")]
        format: FormatArg,
        #[arg(short, long, value_enum)]
        theme: Option<ThemeArg>,
    },
    /// Download the rendered diagram to a file.
    Save {
        /// Destination path.
        path: PathBuf,
        #[arg(short, long, value_enum, default_value = "svg")]
        format: FormatArg,
        #[arg(short, long, value_enum)]
        theme: Option<ThemeArg>,
        /// Image width in pixels (raster formats only).
        #[arg(long)]
        width: Option<u32>,
        /// Image height in pixels (raster formats only).
        #[arg(long)]
        height: Option<u32>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Jpeg,
    Webp,
    Svg,
    Pdf,
}

impl From<FormatArg> for ImageFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Png => Self::Png,
            FormatArg::Jpeg => Self::Jpeg,
            FormatArg::Webp => Self::Webp,
            FormatArg::Svg => Self::Svg,
            FormatArg::Pdf => Self::Pdf,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Default,
    Neutral,
    Dark,
    Forest,
}

impl From<ThemeArg> for MermaidTheme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Default => Self::Default,
            ThemeArg::Neutral => Self::Neutral,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Forest => Self::Forest,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match args.command {
        Command::Run { counter } => {
            let report = run_countdown(counter).await?;
            for name in &report.transitions {
                println!("-> {}", name);
            }
            println!("output: {}", report.result.output);
            println!("state: {}", serde_json::to_string(&report.result.state)?);
        }
        Command::Mermaid => {
            println!("{}", workflows::countdown_graph().to_mermaid());
        }
        Command::Url { format, theme } => {
            let config = RenderConfig {
                theme: theme.map(Into::into),
                ..Default::default()
            };
            let url = workflows::countdown_graph().to_mermaid_ink_url(format.into(), &config);
            println!("{}", url);
        }
        Command::Save {
            path,
            format,
            theme,
            width,
            height,
        } => {
            let config = RenderConfig {
                theme: theme.map(Into::into),
                bg_color: None,
                width,
                height,
            };
            workflows::countdown_graph()
                .save_as_image(&path, format.into(), &config)
                .await?;
            println!("saved {}", path.display());
        }
    }

    Ok(())
}
