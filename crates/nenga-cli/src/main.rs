use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nenga_layout::LayoutOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nenga", about = "New Year postcard address printing", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one postcard page per recipient into a PDF
    Render {
        /// Recipients CSV file (header row with field names)
        #[arg(short, long)]
        recipients: PathBuf,

        /// Sender CSV file, only the first record is used
        #[arg(short, long)]
        sender: Option<PathBuf>,

        /// TrueType or OpenType font with Japanese glyphs
        #[arg(short, long)]
        font: PathBuf,

        /// Layout configuration JSON (defaults to the built-in layout)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output PDF file (defaults to nenga<year>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write every card as a PNG into this directory
        #[arg(long)]
        png_dir: Option<PathBuf>,
    },

    /// Write the built-in layout configuration as JSON
    InitConfig {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            recipients,
            sender,
            font,
            config,
            output,
            png_dir,
        } => {
            let options = match config {
                Some(path) => LayoutOptions::load(&path)
                    .await
                    .with_context(|| format!("loading layout from {}", path.display()))?,
                None => LayoutOptions::default(),
            };

            let families = nenga_layout::load_families(&recipients).await?;
            let sender = match sender {
                Some(path) => nenga_layout::load_sender(&path).await?,
                None => None,
            };
            if sender.is_none() {
                log::info!("No sender given, sender block will be left blank");
            }

            let font = nenga_render::GlyphFont::load_file(&font)
                .await
                .with_context(|| format!("loading font {}", font.display()))?;
            if let Some(family) = font.family() {
                log::info!("Using font {}", family);
            }

            let images =
                nenga_render::render_cards(&families, sender.as_ref(), &options, &font)?;

            if let Some(dir) = png_dir {
                tokio::fs::create_dir_all(&dir).await?;
                for (i, image) in images.iter().enumerate() {
                    let path = dir.join(format!("card-{:03}.png", i + 1));
                    nenga_render::save_png(image.clone(), &path).await?;
                }
                log::info!("Wrote {} card images to {}", images.len(), dir.display());
            }

            let doc = nenga_render::embed_cards(images).await?;
            let output =
                output.unwrap_or_else(|| PathBuf::from(nenga_render::current_output_file_name()));
            nenga_render::save_pdf(doc, &output).await?;
            println!(
                "Generated {} postcards → {}",
                families.len(),
                output.display()
            );
        }

        Commands::InitConfig { output } => {
            LayoutOptions::default().save(&output).await?;
            println!("Default layout → {}", output.display());
        }
    }

    Ok(())
}
