use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use geodraw::{
    init_logging, Config, DrawingState, Point, SettingsError, ShapeKind, BUILD_DATE, VERSION,
};

#[derive(Parser)]
#[command(name = "geodraw")]
#[command(about = "Constraint-driven shape construction and drawing summaries")]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Decimal places for areas, perimeters and lengths
    #[arg(long, global = true)]
    decimals: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the summary of every shape in one or more drawing files
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Feed points to a new shape, print the outcome and optionally save it
    Build {
        /// Kind name ("square", "isosceles-triangle") or menu number
        #[arg(long)]
        kind: ShapeKind,
        /// Cursor positions as x,y
        #[arg(required = true, value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<Point>,
        /// Append the finished shape to this drawing file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Move one shape, or every shape, of a drawing file in place
    Translate {
        file: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        dx: i32,
        #[arg(long, allow_hyphen_values = true)]
        dy: i32,
        /// Index of the shape to move; all shapes when omitted
        #[arg(long)]
        shape: Option<usize>,
    },
    /// Remove one shape from a drawing file
    Remove {
        file: PathBuf,
        #[arg(long)]
        shape: usize,
    },
    /// List the shape menu
    Kinds,
    /// Print the effective configuration as TOML
    Config {
        /// Write the effective configuration to the config path
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!("GeoDraw {} (built {})", VERSION, BUILD_DATE);

    let config_path = resolve_config_path(cli.config, Config::default_path);
    let config_path = config_path.as_deref();
    let mut config = load_config(config_path)?;
    if let Some(decimals) = cli.decimals {
        config.display.decimal_places = decimals;
    }

    match cli.action {
        Action::Show { files } => show(&mut config, config_path, &files),
        Action::Build { kind, points, save } => {
            build(&mut config, config_path, kind, &points, save)
        }
        Action::Translate {
            file,
            dx,
            dy,
            shape,
        } => translate(&config, &file, dx, dy, shape),
        Action::Remove { file, shape } => remove(&config, &file, shape),
        Action::Kinds => {
            for kind in ShapeKind::ALL {
                println!(
                    "{}: {} ({} free of {} vertices)",
                    kind.menu_index(),
                    kind,
                    kind.free_points(),
                    kind.max_vertices()
                );
            }
            Ok(())
        }
        Action::Config { write } => {
            print!("{}", toml::to_string_pretty(&config)?);
            if write {
                let Some(path) = config_path else {
                    bail!("No configuration directory, pass --config to choose a file");
                };
                config.save_to_file(path)?;
            }
            Ok(())
        }
    }
}

/// The explicit `--config` path, else the platform default. A host without
/// a configuration directory gets `None` and runs on default settings.
fn resolve_config_path(
    explicit: Option<PathBuf>,
    default_path: impl FnOnce() -> Result<PathBuf, SettingsError>,
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    match default_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("{}, using default settings", e);
            None
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_or_default(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok(Point::new(x, y))
}

fn new_state(config: &Config) -> DrawingState {
    let mut state = DrawingState::with_rules(config.placement);
    state.decimal_places = config.display.decimal_places;
    state
}

fn open(config: &Config, file: &Path) -> Result<DrawingState> {
    let mut state = new_state(config);
    state
        .load_from_file(file)
        .with_context(|| format!("Failed to open drawing {}", file.display()))?;
    Ok(state)
}

/// Records `file` in the recent list, but only persists it when a config
/// file is already in place.
fn remember(config: &mut Config, config_path: Option<&Path>, file: &Path) {
    config.add_recent_file(file.to_path_buf());
    if let Some(path) = config_path.filter(|p| p.exists()) {
        if let Err(e) = config.save_to_file(path) {
            warn!("Could not update recent files: {}", e);
        }
    }
}

fn print_drawing(state: &DrawingState) {
    println!("== {} ({} shapes)", state.display_name(), state.len());
    for summary in state.summaries() {
        println!("{}", summary);
        println!();
    }
}

fn show(config: &mut Config, config_path: Option<&Path>, files: &[PathBuf]) -> Result<()> {
    for file in files {
        let state = open(config, file)?;
        print_drawing(&state);
        remember(config, config_path, file);
    }
    Ok(())
}

fn build(
    config: &mut Config,
    config_path: Option<&Path>,
    kind: ShapeKind,
    points: &[Point],
    save: Option<PathBuf>,
) -> Result<()> {
    let mut state = match &save {
        Some(file) if file.exists() => open(config, file)?,
        _ => new_state(config),
    };

    state.begin_shape(kind)?;
    let mut finished = false;
    for (i, &point) in points.iter().enumerate() {
        if finished {
            warn!("Shape already finished, ignoring {} remaining points", points.len() - i);
            break;
        }
        match state.append_point(point) {
            Ok(done) => finished = done,
            Err(e) => println!("rejected {}: {}", point, e),
        }
    }

    if !finished {
        let placed = state.current_shape().map_or(0, |s| s.vertices().len());
        state.cancel_shape();
        bail!(
            "{} incomplete: {} of {} vertices placed",
            kind,
            placed,
            kind.max_vertices()
        );
    }

    let index = state.len() - 1;
    let summary = state.shape(index)?.summary(state.decimal_places);
    println!("{}", summary);

    if let Some(file) = save {
        state.mark_modified();
        state
            .save_to_file(&file)
            .with_context(|| format!("Failed to save drawing {}", file.display()))?;
        println!("saved as shape {} of {}", index, file.display());
        remember(config, config_path, &file);
    }
    Ok(())
}

fn translate(config: &Config, file: &Path, dx: i32, dy: i32, shape: Option<usize>) -> Result<()> {
    let mut state = open(config, file)?;
    match shape {
        Some(index) => state.translate_shape(index, dx, dy)?,
        None => {
            state.translate_all(dx, dy)?;
        }
    }
    state.mark_modified();
    state.save_to_file(file)?;
    print_drawing(&state);
    Ok(())
}

fn remove(config: &Config, file: &Path, index: usize) -> Result<()> {
    let mut state = open(config, file)?;
    let removed = state.remove_shape(index)?;
    state.mark_modified();
    state.save_to_file(file)?;
    println!("removed {}: {}", index, removed.kind());
    Ok(())
}
