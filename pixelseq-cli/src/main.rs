use std::collections::HashSet;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pixelseq", version)]
struct Cli {
    /// Log generation spans and events to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the overlay map for a project and write it as JSON.
    Overlay(OverlayArgs),
    /// Render one frame (painted layers plus overlay) as a PNG.
    Frame(FrameArgs),
    /// Check a project file without generating anything.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct OverlayArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Generate animations on a rayon pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Write single-line JSON instead of pretty-printed output.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Id of the frame to render.
    #[arg(long = "frame-id")]
    frame_id: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Output pixels per canvas cell.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Draw the frame's painted layers under the overlay.
    #[arg(long, default_value_t = false)]
    include_layers: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Overlay(args) => cmd_overlay(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pixelseq=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_project(path: &Path) -> anyhow::Result<pixelseq::Project> {
    let project = pixelseq::Project::from_path(path)
        .with_context(|| format!("load project '{}'", path.display()))?;
    project
        .validate()
        .with_context(|| format!("validate project '{}'", path.display()))?;
    Ok(project)
}

fn cmd_overlay(args: OverlayArgs) -> anyhow::Result<()> {
    let project = load_project(&args.in_path)?;

    let strategy = if args.parallel {
        pixelseq::ExecutionStrategy::Parallel {
            threads: args.threads,
        }
    } else {
        pixelseq::ExecutionStrategy::Sequential
    };
    let mut engine = pixelseq::Engine::new(pixelseq::EngineOpts {
        strategy,
        ..pixelseq::EngineOpts::default()
    })?;
    let overlay = engine.generate_project(&project)?;

    let json = if args.compact {
        serde_json::to_vec(&overlay)?
    } else {
        serde_json::to_vec_pretty(&overlay)?
    };

    match &args.out {
        Some(out) => {
            create_parent_dir(out)?;
            std::fs::write(out, &json)
                .with_context(|| format!("write overlay '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&json)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.scale >= 1, "--scale must be >= 1");
    let project = load_project(&args.in_path)?;

    let frame = project
        .frames
        .iter()
        .find(|f| f.id == args.frame_id)
        .with_context(|| format!("no frame with id '{}'", args.frame_id))?;

    let blocked = project.blocked_set();
    let mut engine = pixelseq::Engine::new(pixelseq::EngineOpts::default())?;
    let overlay = engine.generate(
        std::slice::from_ref(frame),
        &project.animations,
        &project.canvas,
        &blocked,
    )?;

    let mut canvas = Raster::new(
        project.canvas.original_width,
        project.canvas.original_height,
        args.scale,
    );
    if args.include_layers {
        for pixels in frame.layer_data.values() {
            canvas.paint(pixels, &blocked);
        }
    }
    if let Some(pixels) = overlay.get(&frame.id) {
        canvas.paint(pixels, &blocked);
    }

    create_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &canvas.data,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let project = load_project(&args.in_path)?;
    let c = &project.canvas;
    println!(
        "ok: {} frames, {} animations, canvas {}x{} (viewport {}x{} at {},{})",
        project.frames.len(),
        project.animations.len(),
        c.original_width,
        c.original_height,
        c.width,
        c.height,
        c.viewport_x,
        c.viewport_y,
    );
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

/// Opaque-black RGBA8 buffer with nearest-neighbour upscaling.
struct Raster {
    cells_w: u32,
    cells_h: u32,
    scale: u32,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    fn new(cells_w: u32, cells_h: u32, scale: u32) -> Self {
        let width = cells_w * scale;
        let height = cells_h * scale;
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            cells_w,
            cells_h,
            scale,
            width,
            height,
            data,
        }
    }

    /// Later pixels overwrite earlier ones. Blocked, off-canvas and unparseable cells are skipped.
    fn paint(&mut self, pixels: &[pixelseq::PixelData], blocked: &HashSet<(i32, i32)>) {
        for p in pixels {
            if p.x < 0 || p.y < 0 || p.x as u32 >= self.cells_w || p.y as u32 >= self.cells_h {
                continue;
            }
            if blocked.contains(&(p.x, p.y)) {
                continue;
            }
            let Some(rgb) = pixelseq::hex_to_rgb(&p.color) else {
                tracing::debug!(color = %p.color, x = p.x, y = p.y, "skipping unparseable color");
                continue;
            };
            self.fill_cell(p.x as u32, p.y as u32, [rgb.r, rgb.g, rgb.b, 255]);
        }
    }

    fn fill_cell(&mut self, cx: u32, cy: u32, rgba: [u8; 4]) {
        for dy in 0..self.scale {
            let row = (cy * self.scale + dy) as usize * self.width as usize;
            for dx in 0..self.scale {
                let i = (row + (cx * self.scale + dx) as usize) * 4;
                self.data[i..i + 4].copy_from_slice(&rgba);
            }
        }
    }
}
