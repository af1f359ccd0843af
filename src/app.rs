//! Host application: owns the drawing surface and wires it to the palette,
//! brush buttons, background photo, export and share.

use crate::config::{BackgroundFit, Config};
use crate::draw::{BackgroundImage, Color};
use crate::export::{
    Backdrop, CommandShare, ExportConfig, ExportManager, ExportOutcome, ShareRequest, ShareTarget,
    flatten,
};
use crate::input::{BrushSettings, DrawingSurface, PointerEvent};
use crate::notification::{DesktopNotifier, LogNotifier, Notice, Notifier};
use crate::script::{BrushSize, Script, ScriptCommand};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The drawing screen without a toolkit.
pub struct App {
    config: Config,
    surface: DrawingSurface,
    background: Option<BackgroundImage>,
    export_config: ExportConfig,
    share: Option<Arc<dyn ShareTarget>>,
    notifier: Arc<dyn Notifier>,
    notices: Vec<Notice>,
    saved: Vec<PathBuf>,
    exporter: ExportManager,
    /// Tokio runtime for export and notifications
    tokio_runtime: tokio::runtime::Runtime,
}

impl App {
    /// Builds the screen from a validated config and sizes the canvas.
    pub fn new(config: Config) -> Result<Self> {
        let tokio_runtime = tokio::runtime::Runtime::new()
            .context("Failed to create Tokio runtime for export operations")?;
        let exporter = ExportManager::new(tokio_runtime.handle());

        let density = config.drawing.display_density;
        let settings = BrushSettings {
            color: config.drawing.initial_color().to_color(),
            thickness: config.drawing.default_brush_size * density,
        };
        let mut surface = DrawingSurface::new(settings);
        surface
            .on_resize(config.canvas.width, config.canvas.height)
            .context("Failed to create drawing surface")?;

        let share = config
            .export
            .share_command
            .clone()
            .and_then(CommandShare::new)
            .map(|share| Arc::new(share) as Arc<dyn ShareTarget>);
        let notifier: Arc<dyn Notifier> = if config.export.notify {
            Arc::new(DesktopNotifier)
        } else {
            Arc::new(LogNotifier)
        };
        let export_config = ExportConfig::from_settings(&config.export);

        info!(
            "Canvas {}x{}, exporting to {}",
            config.canvas.width,
            config.canvas.height,
            export_config.save_directory.display()
        );

        Ok(Self {
            config,
            surface,
            background: None,
            export_config,
            share,
            notifier,
            notices: Vec::new(),
            saved: Vec::new(),
            exporter,
            tokio_runtime,
        })
    }

    /// Replaces the share action.
    pub fn with_share_target(mut self, share: Option<Arc<dyn ShareTarget>>) -> Self {
        self.share = share;
        self
    }

    /// Replaces how notices reach the user.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Every notice shown so far, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Paths of successful exports, oldest first.
    pub fn saved_paths(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Replays a whole script.
    pub fn run_script(&mut self, script: &Script) -> Result<()> {
        for (index, command) in script.commands.iter().enumerate() {
            self.apply(command)
                .with_context(|| format!("command {} ({:?}) failed", index + 1, command))?;
        }
        Ok(())
    }

    /// Applies one command.
    ///
    /// User mistakes (bad color, unknown palette entry, unreadable photo,
    /// failed export) become notices; only a broken surface is an error.
    pub fn apply(&mut self, command: &ScriptCommand) -> Result<()> {
        match command {
            ScriptCommand::Pointer(event) => self.handle_pointer(*event),
            ScriptCommand::Undo => self.surface.undo(),
            ScriptCommand::Color(spec) => self.set_color(spec),
            ScriptCommand::Palette(index) => {
                self.select_palette(*index);
            }
            ScriptCommand::Brush(size) => self.select_brush(*size),
            ScriptCommand::Resize(width, height) => self.surface.on_resize(*width, *height)?,
            ScriptCommand::Background(path) => {
                self.set_background(path);
            }
            ScriptCommand::Save => {
                self.save();
            }
        }
        Ok(())
    }

    /// Forwards a pointer event to the surface.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if !self.surface.handle_pointer_event(event) {
            debug!("Ignored pointer event {:?}", event);
        }
    }

    pub fn set_color(&mut self, spec: &str) {
        if let Err(err) = self.surface.set_color(spec) {
            self.notify(Notice::error(format!("Unknown color '{}': {}", spec, err)));
        }
    }

    /// Picks a crayon from the palette. Returns false for an unknown entry.
    pub fn select_palette(&mut self, index: usize) -> bool {
        let Some(spec) = self.config.drawing.palette.get(index) else {
            warn!("Palette has no entry {}", index);
            return false;
        };
        match spec.try_to_color() {
            Ok(color) => {
                self.surface.set_color_value(color);
                true
            }
            Err(err) => {
                self.notify(Notice::error(format!("Palette entry {}: {}", index, err)));
                false
            }
        }
    }

    /// Sets the brush from a preset button or explicit units.
    pub fn select_brush(&mut self, size: BrushSize) {
        let units = match size {
            BrushSize::Preset(preset) => self.config.drawing.preset_size(preset),
            BrushSize::Units(units) => units,
        };
        if let Err(err) = self
            .surface
            .set_brush_size(units, self.config.drawing.display_density)
        {
            self.notify(Notice::error(err.to_string()));
        }
    }

    /// Loads a photo to draw on. On failure the previous background stays.
    pub fn set_background(&mut self, path: &Path) -> bool {
        match BackgroundImage::load(path) {
            Ok(image) => {
                debug!("Using background {:?}", image);
                self.background = Some(image);
                self.surface.needs_redraw = true;
                true
            }
            Err(err) => {
                warn!("{}", err);
                self.notify(Notice::bad_image());
                false
            }
        }
    }

    fn backdrop(&self) -> Backdrop<'_> {
        Backdrop {
            fill: self.canvas_fill(),
            image: self.background.as_ref(),
            fit: self.background_fit(),
        }
    }

    fn canvas_fill(&self) -> Color {
        self.config.canvas.background_color.to_color()
    }

    fn background_fit(&self) -> BackgroundFit {
        self.config.canvas.background_fit
    }

    /// Exports the visible canvas and waits for the result.
    ///
    /// On success the file is handed to the share action, if one is set.
    pub fn save(&mut self) -> Option<PathBuf> {
        let Some((width, height)) = self.surface.size() else {
            self.notify(Notice::save_failed());
            return None;
        };

        let buffer = match flatten(&self.surface, width, height, self.backdrop()) {
            Ok(buffer) => buffer,
            Err(err) => {
                log::error!("Failed to flatten drawing: {}", err);
                self.notify(Notice::save_failed());
                return None;
            }
        };

        if let Err(err) = self
            .exporter
            .request_export(buffer, self.export_config.clone())
        {
            log::error!("Failed to queue export: {}", err);
            self.notify(Notice::save_failed());
            return None;
        }

        let exporter = self.exporter.clone();
        match self
            .tokio_runtime
            .block_on(async move { exporter.wait_for_outcome().await })
        {
            ExportOutcome::Success(path) => {
                self.notify(Notice::saved(&path));
                if let Some(share) = &self.share {
                    if let Err(err) = share.share(&ShareRequest::png(path.clone())) {
                        warn!("{}", err);
                    }
                }
                self.saved.push(path.clone());
                Some(path)
            }
            ExportOutcome::Failed(_) => {
                self.notify(Notice::save_failed());
                None
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        let notifier = self.notifier.clone();
        let delivered = notice.clone();
        self.tokio_runtime
            .block_on(async move { notifier.notify(&delivered).await });
        self.notices.push(notice);
    }
}
