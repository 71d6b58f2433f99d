use anyhow::{ensure, Context, Result};
use bigcube::{
    invert_moves, parse_moves, reverse_moves, FaceGeometry, FaceStore, FileFaceStore, GridFace,
    StoreConfig, COLOR_COUNT,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubetool")]
#[command(about = "Face-state and move notation tool for large cube puzzles", long_about = None)]
struct Cli {
    /// Directory holding face<id>.bin files (overrides config and BIGCUBE_DATA)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// TOML store configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a face and save it
    Init {
        /// Face id (0-5)
        #[arg(long)]
        id: u8,

        /// Logical row size
        #[arg(long)]
        size: u32,

        /// Row stride, a power of two (defaults to the tightest fit)
        #[arg(long)]
        stride: Option<u32>,

        /// Paint every cell this color instead of the initial pattern
        #[arg(long)]
        paint: Option<u8>,
    },

    /// Load a face, paint it one color and save it
    Paint {
        #[arg(long)]
        id: u8,

        #[arg(long)]
        color: u8,
    },

    /// Print a saved face's header, counts and solved state
    Inspect {
        #[arg(long)]
        id: u8,
    },

    /// Parse a move sequence into tokens
    Parse {
        sequence: String,

        /// Row size the far-side indices refer to
        #[arg(long)]
        size: u32,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the undo sequence of a move sequence
    Invert { sequence: String },

    /// Print a move sequence in reverse order
    Reverse { sequence: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::info!(
        "Using data directory {} (verify on load: {})",
        config.data_dir.display(),
        config.verify_on_load
    );
    let store = FileFaceStore::new(config);

    match cli.command {
        Commands::Init {
            id,
            size,
            stride,
            paint,
        } => {
            let geometry = match stride {
                Some(stride) => FaceGeometry::new(size, stride)?,
                None => FaceGeometry::for_row_size(size)?,
            };
            let mut face = GridFace::from_geometry(id, geometry)?;
            if let Some(color) = paint {
                check_color(color)?;
                tracing::info!("Painting face {} with color {}", id, color);
                face.paint(color);
            }
            face.record_counts();
            store.save_face(&face)?;
            println!(
                "Saved face {} ({}x{}, stride {}) to {}",
                id,
                size,
                size,
                face.mem_row_size(),
                store.path_for(id).display()
            );
        }
        Commands::Paint { id, color } => {
            check_color(color)?;
            let mut face = store
                .load_face(id)
                .with_context(|| format!("Failed to load face {}", id))?;
            tracing::info!("Painting face {} with color {}", id, color);
            face.paint(color);
            face.record_counts();
            store.save_face(&face)?;
            println!("Painted face {} with color {}", id, color);
        }
        Commands::Inspect { id } => {
            let face = store
                .load_face(id)
                .with_context(|| format!("Failed to load face {}", id))?;
            print_face(&face);
        }
        Commands::Parse {
            sequence,
            size,
            json,
        } => {
            let moves = parse_moves(&sequence, size)?;
            tracing::info!("Parsed {} moves for row size {}", moves.len(), size);
            if json {
                println!("{}", serde_json::to_string_pretty(&moves)?);
            } else {
                for m in &moves {
                    let far = m
                        .far_index(size)
                        .with_context(|| format!("layer {} outside size {}", m.layer, size))?;
                    println!(
                        "{} layer {} (far {}) step {:+}",
                        m.axis,
                        m.layer,
                        far,
                        m.step()
                    );
                }
                println!("{} moves", moves.len());
            }
        }
        Commands::Invert { sequence } => println!("{}", invert_moves(&sequence)),
        Commands::Reverse { sequence } => println!("{}", reverse_moves(&sequence)),
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?
            .with_env_overrides(),
        None => StoreConfig::from_env(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn check_color(color: u8) -> Result<()> {
    ensure!(
        usize::from(color) < COLOR_COUNT,
        "color {} is out of range 0..{}",
        color,
        COLOR_COUNT
    );
    Ok(())
}

fn print_face(face: &GridFace) {
    let observed = face.get_counts();
    let expected = face.expected_counts();

    println!("Face {}", face.id());
    println!("  row size:     {}", face.row_size());
    println!("  stride:       {}", face.mem_row_size());
    println!("  shift:        {}", face.shift_amount());
    println!("  buffer bytes: {}", face.buffer_size_bytes());
    println!("  orientation:  {}", face.orientation());
    println!("  color  observed  expected");
    for color in 0..COLOR_COUNT {
        println!(
            "  {:>5}  {:>8}  {:>8}",
            color, observed[color], expected[color]
        );
    }
    println!("  verified:     {}", observed == expected);
    println!("  solved:       {}", face.is_solved());
}
