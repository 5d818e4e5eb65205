use anyhow::Result;
use bannerkit::{
    color, request, Alignment, AnsiColor, ExportFormat, ExportOptions, ExportRequest,
    FontCatalog, RenderEngine,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bannerkit", about = "ASCII banner toolkit CLI")]
struct Cli {
    /// Directory with additional .flf fonts (file stem = font name)
    #[arg(long, global = true)]
    font_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render a banner to stdout
    Render {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        font: Option<String>,
        #[arg(long, default_value = "left")]
        align: String,
        #[arg(long)]
        color: Option<String>,
    },
    /// Export a banner to a file
    Export {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        font: Option<String>,
        #[arg(long, default_value = "left")]
        align: String,
        #[arg(long, default_value = "python")]
        format: String,
        #[arg(long, default_value = "BANNER")]
        var: String,
        #[arg(long)]
        embed_color: bool,
        #[arg(long)]
        color: Option<String>,
        /// Output path; defaults to the format's suggested filename
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available fonts
    Fonts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut catalog = FontCatalog::new();
    if let Some(dir) = &cli.font_dir {
        let loaded = catalog.load_dir(dir)?;
        eprintln!("Loaded {loaded} fonts from {}", dir.display());
    }

    match cli.command {
        Cmd::Render {
            text,
            font,
            align,
            color: color_name,
        } => {
            let banner = request::render_normalized(
                &catalog,
                &text,
                font.as_deref(),
                Alignment::from_name(&align),
            )?;
            let color = color_name.as_deref().and_then(AnsiColor::from_name);
            println!("{}", color::embed(&banner, color));
        }
        Cmd::Export {
            text,
            font,
            align,
            format,
            var,
            embed_color,
            color: color_name,
            output,
        } => {
            let request = ExportRequest {
                text,
                font,
                align: Alignment::from_name(&align),
                options: ExportOptions {
                    format: ExportFormat::from_name(&format),
                    var_name: var,
                    embed_color,
                    color: color_name.as_deref().and_then(AnsiColor::from_name),
                },
            };
            let payload = request::export(&catalog, &request)?;
            let path = output.unwrap_or_else(|| PathBuf::from(payload.filename));
            fs::write(&path, &payload.bytes)?;
            eprintln!(
                "Exported {} ({}) -> {}",
                payload.filename,
                payload.media_type,
                path.display()
            );
        }
        Cmd::Fonts => {
            for name in catalog.font_names() {
                if name == catalog.default_font() {
                    println!("{name} (default)");
                } else {
                    println!("{name}");
                }
            }
        }
    }
    Ok(())
}
