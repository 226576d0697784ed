use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use backdrop::{
    BackdropConfig, BackdropController, FixedSurface, Layer, MeasureSpec, Rect, Size,
    SlotRegistry,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "backdrop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a headless backdrop and print one JSON line per animation frame.
    Simulate(SimulateArgs),
    /// Validate a backdrop config JSON file and print the resolved config.
    CheckConfig(CheckConfigArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Backdrop config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width.
    #[arg(long, default_value_t = 360.0)]
    width: f64,

    /// Container height.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Preferred height of the back surface.
    #[arg(long, default_value_t = 300.0)]
    back_height: f64,

    /// Preferred height of the front surface (defaults to the container height).
    #[arg(long)]
    front_height: Option<f64>,

    /// Height of the back surface's always-visible strip, if it has one.
    #[arg(long)]
    strip_height: Option<f64>,

    /// Layers to activate, in order, after the first layout pass.
    #[arg(long = "activate", value_enum)]
    activate: Vec<LayerChoice>,

    /// Frame interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Write frames here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CheckConfigArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayerChoice {
    Back,
    Front,
}

impl From<LayerChoice> for Layer {
    fn from(c: LayerChoice) -> Self {
        match c {
            LayerChoice::Back => Layer::Back,
            LayerChoice::Front => Layer::Front,
        }
    }
}

#[derive(serde::Serialize)]
struct FrameRecord {
    frame: u64,
    active_layer: Layer,
    front_height: f64,
    front: Rect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::CheckConfig(args) => cmd_check_config(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<BackdropConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = BackdropConfig::from_json_str(&s)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn cmd_check_config(args: CheckConfigArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => read_config(path)?,
        None => BackdropConfig::default(),
    };
    if args.frame_ms == 0 {
        anyhow::bail!("--frame-ms must be > 0");
    }

    let mut back = FixedSurface::new(Size::new(args.width, args.back_height));
    if let Some(h) = args.strip_height {
        back = back.with_strip_height(h);
    }
    let front = FixedSurface::new(Size::new(
        args.width,
        args.front_height.unwrap_or(args.height),
    ));
    let slots = SlotRegistry::from_children([(Layer::Back, back), (Layer::Front, front)])?;
    let mut controller = BackdropController::with_slots(cfg, slots)?;

    let bounds = Size::new(args.width, args.height);
    controller.measure(
        MeasureSpec::Exactly(bounds.width),
        MeasureSpec::Exactly(bounds.height),
    )?;
    controller.on_layout_pass(bounds)?;

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let dt = Duration::from_millis(args.frame_ms);
    let mut frame = 0u64;
    run_to_rest(&mut controller, bounds, dt, &mut frame, &mut out)?;
    for layer in &args.activate {
        controller.activate_layer((*layer).into())?;
        run_to_rest(&mut controller, bounds, dt, &mut frame, &mut out)?;
    }
    out.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {frame} frames to {}", path.display());
    }
    Ok(())
}

fn run_to_rest(
    controller: &mut BackdropController<FixedSurface>,
    bounds: Size,
    dt: Duration,
    frame: &mut u64,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    while controller.is_animating() {
        controller.tick(dt)?;
        let placements = controller.on_layout_pass(bounds)?;
        let record = FrameRecord {
            frame: *frame,
            active_layer: controller.active_layer(),
            front_height: controller.current_front_height(),
            front: placements.front,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
        *frame += 1;
    }
    Ok(())
}
