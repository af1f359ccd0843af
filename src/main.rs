use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use kidsdraw::export::{CommandShare, ShareTarget};
use kidsdraw::script::{Script, ScriptCommand};
use kidsdraw::{App, Config};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "kidsdraw")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("KIDSDRAW_GIT_HASH"), ")"),
    about = "Finger-painting canvas for kids"
)]
struct Cli {
    /// Gesture script to replay (pointer events and drawing commands)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG photo to draw on
    #[arg(long, short = 'b', value_name = "IMG", requires = "script")]
    background: Option<PathBuf>,

    /// Canvas size, e.g. 1080x1920
    #[arg(long, value_name = "WxH", value_parser = parse_size, requires = "script")]
    size: Option<(i32, i32)>,

    /// Pixels per brush unit
    #[arg(long, value_name = "F", requires = "script")]
    density: Option<f64>,

    /// Directory for exported drawings
    #[arg(long, value_name = "DIR", requires = "script")]
    export_dir: Option<PathBuf>,

    /// Open the exported drawing with the share command
    #[arg(long, action = ArgAction::SetTrue, requires = "script")]
    share: bool,

    /// Show desktop notifications
    #[arg(long, action = ArgAction::SetTrue, requires = "script")]
    notify: bool,

    /// Write a documented config file to ~/.config/kidsdraw/config.toml
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn parse_size(value: &str) -> Result<(i32, i32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", value))?;
    let w: i32 = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h: i32 = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    if w <= 0 || h <= 0 {
        return Err(format!("size must be positive, got {}x{}", w, h));
    }
    Ok((w, h))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        // No flags: show usage
        println!("kidsdraw: Finger-painting canvas for kids");
        println!();
        println!("Usage:");
        println!("  kidsdraw --script FILE     Replay a gesture script and export the drawing");
        println!("  kidsdraw --init-config     Write a documented config file");
        println!("  kidsdraw --help            Show help");
        println!();
        println!("Script commands (one per line, # starts a comment line):");
        println!("  down X Y | move X Y | up | cancel | undo");
        println!("  color SPEC | palette INDEX | brush SIZE|small|medium|large");
        println!("  resize W H | background PATH | save");
        return Ok(());
    };

    let script = Script::load(script_path)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let mut config = Config::load()?;
    if let Some((width, height)) = cli.size {
        config.canvas.width = width;
        config.canvas.height = height;
    }
    if let Some(density) = cli.density {
        if !(density.is_finite() && density > 0.0) {
            bail!("--density must be a positive number, got {}", density);
        }
        config.drawing.display_density = density;
    }
    if let Some(dir) = &cli.export_dir {
        config.export.directory = Some(dir.to_string_lossy().into_owned());
    }
    if cli.notify {
        config.export.notify = true;
    }
    let share_argv = config
        .export
        .share_command
        .clone()
        .unwrap_or_else(|| vec!["xdg-open".to_string()]);

    // Sharing only happens when asked for on the command line.
    let share = if cli.share {
        CommandShare::new(share_argv).map(|share| Arc::new(share) as Arc<dyn ShareTarget>)
    } else {
        None
    };
    let mut app = App::new(config)?.with_share_target(share);

    if let Some(background) = &cli.background {
        app.set_background(background);
    }

    app.run_script(&script)?;

    let has_save = script
        .commands
        .iter()
        .any(|command| matches!(command, ScriptCommand::Save));
    if !has_save {
        log::info!("Script has no save command; exporting the final drawing");
        app.save();
    }

    for notice in app.notices() {
        println!("{}", notice.message);
    }

    if app.saved_paths().is_empty() {
        bail!("No drawing was saved");
    }

    Ok(())
}
