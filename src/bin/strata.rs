use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "strata", version)]
struct Cli {
    /// Log per-batch and per-frame diagnostics.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available scenes.
    List,
    /// Print the default render configuration as JSON.
    Config,
    /// Render a scene as a numbered PNG sequence.
    Render(RenderArgs),
    /// Render a scene and keep a single frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene name (see `strata list`).
    #[arg(long)]
    scene: String,

    /// Render configuration JSON; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override the output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Override the frame rate (whole frames per second).
    #[arg(long)]
    fps: Option<u32>,

    /// Override the number of glass layers.
    #[arg(long)]
    layers: Option<usize>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based).
    #[arg(long)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::List => cmd_list(),
        Command::Config => cmd_config(),
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    for s in strata::MultilayerScene::all() {
        println!("{:<22} {}", s.name(), s.description());
    }
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&strata::RenderConfig::default())
        .context("serialize default config")?;
    println!("{json}");
    Ok(())
}

fn load(args: &SceneArgs) -> anyhow::Result<(strata::MultilayerScene, strata::RenderConfig)> {
    let scene = strata::MultilayerScene::from_name(&args.scene)?;
    let mut cfg = match &args.config {
        Some(path) => strata::RenderConfig::from_path(path)?,
        None => strata::RenderConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.scene.camera.width_px = w;
    }
    if let Some(h) = args.height {
        cfg.scene.camera.height_px = h;
    }
    if let Some(fps) = args.fps {
        cfg.scene.fps = strata::Fps::new(fps, 1)?;
    }
    if let Some(n) = args.layers {
        cfg.layers.n_layers = n;
    }
    cfg.validate()?;
    Ok((scene, cfg))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (scene, cfg) = load(&args.scene)?;
    let mut sink = strata::PngSequenceSink::new(&args.out);
    let frames = scene.render(&cfg, &mut sink)?;
    eprintln!("wrote {frames} frames to {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (scene, cfg) = load(&args.scene)?;
    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let mut sink =
        strata::SingleFrameSink::new(strata::FrameIndex(args.index), Some(args.out.clone()));
    scene.render(&cfg, &mut sink)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
