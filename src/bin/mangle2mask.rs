use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::Level;

use mangle2mask::{
    FitsOptions, FitsPixelType, MangleMask, MaskRequest, RasterOptions, create_mask, io,
};

/// Convert a mangle polygon mask into a TAN-projected binary FITS mask.
///
/// Pixels inside a polygon are written as 0, all other pixels as 1.
#[derive(Parser, Debug)]
#[command(name = "mangle2mask", version, allow_negative_numbers = true)]
struct Cli {
    /// Right ascension of the mask center [deg].
    ra: f64,

    /// Declination of the mask center [deg].
    dec: f64,

    /// Field of view along right ascension [deg].
    fov_x: f64,

    /// Field of view along declination [deg].
    fov_y: f64,

    /// Pixel size of the output mask [deg].
    pix_size: f64,

    /// Input mangle polygon file.
    mangle_fn: PathBuf,

    /// Output FITS file.
    output_fn: PathBuf,

    /// Replace the output file if it already exists.
    #[arg(long)]
    overwrite: bool,

    /// Integer type of the stored flags.
    #[arg(long, value_enum, default_value_t = PixelTypeChoice::I64)]
    pixel_type: PixelTypeChoice,

    /// Also write a PNG quick-look of the mask.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Also write the WCS header and grid shape as JSON.
    #[arg(long)]
    header_json: Option<PathBuf>,

    /// Rasterize rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for parallel rasterization (implies --parallel).
    #[arg(long)]
    threads: Option<usize>,

    /// Log debug details.
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PixelTypeChoice {
    U8,
    I16,
    I32,
    I64,
}

impl From<PixelTypeChoice> for FitsPixelType {
    fn from(choice: PixelTypeChoice) -> Self {
        match choice {
            PixelTypeChoice::U8 => FitsPixelType::U8,
            PixelTypeChoice::I16 => FitsPixelType::I16,
            PixelTypeChoice::I32 => FitsPixelType::I32,
            PixelTypeChoice::I64 => FitsPixelType::I64,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        // wrong argument count or type is a usage error: exit 1, not clap's default 2
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!(?cli, "executing");

    let request = MaskRequest {
        center_ra: cli.ra,
        center_dec: cli.dec,
        fov_x: cli.fov_x,
        fov_y: cli.fov_y,
        pixel_size: cli.pix_size,
    };
    // reject bad geometry before touching the polygon file
    request.projection()?;

    let mask = MangleMask::open(&cli.mangle_fn)?;
    let options = RasterOptions {
        parallel: cli.parallel || cli.threads.is_some(),
        threads: cli.threads,
    };
    let image = create_mask(&request, &mask, &options)?;

    create_parent_dir(&cli.output_fn)?;
    let fits = FitsOptions {
        pixel_type: cli.pixel_type.into(),
        overwrite: cli.overwrite,
    };
    io::fits::write_mask(&cli.output_fn, &image, &fits)?;
    eprintln!("wrote {}", cli.output_fn.display());

    if let Some(path) = &cli.preview {
        create_parent_dir(path)?;
        io::preview::write_png(path, &image.grid)?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(path) = &cli.header_json {
        create_parent_dir(path)?;
        io::write_header_json(path, &image)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
