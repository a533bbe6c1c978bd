//! Per-app viewer session: one trigger button per configured plot and
//! a single plot surface.
//!
//! The session owns the plot config for exactly one app and at most
//! one displayed [`PlotSeries`]. Activating a plot replaces the
//! current series; a failed activation logs the problem and leaves
//! the previous chart untouched.

use egui::Ui;
use egui_plot::{Line, Plot};

use crate::config::{AppConfig, PlotConfig};
use crate::error::ViewerError;
use crate::series::{load_series, PlotSeries};
use crate::startup::AppDescriptor;

pub struct ViewerSession {
    app: AppDescriptor,
    plots: PlotConfig,
    /// The one displayed chart. Replaced, never appended.
    current: Option<PlotSeries>,
}

impl ViewerSession {
    /// Open a session for `app`, loading its `config.json`. A missing
    /// or malformed config yields an empty session ("no plots
    /// available"), not a failure.
    pub fn open(app: AppDescriptor) -> Self {
        let config = AppConfig::load_or_empty(&app.config_path);
        Self::with_config(app, config.plots)
    }

    /// Build a session from an already-loaded plot config.
    pub fn with_config(app: AppDescriptor, plots: PlotConfig) -> Self {
        Self {
            app,
            plots,
            current: None,
        }
    }

    pub fn app(&self) -> &AppDescriptor {
        &self.app
    }

    /// Trigger labels in presentation order (sorted by plot name).
    pub fn plot_names(&self) -> impl Iterator<Item = &str> {
        self.plots.keys().map(|s| s.as_str())
    }

    pub fn plot_count(&self) -> usize {
        self.plots.len()
    }

    /// The currently displayed series, if any.
    pub fn current(&self) -> Option<&PlotSeries> {
        self.current.as_ref()
    }

    /// Load and display the named plot.
    ///
    /// On success the previous series (if any) is dropped and the new
    /// one attached. On any error `current` is left exactly as it was.
    pub fn activate(&mut self, name: &str) -> Result<(), ViewerError> {
        let Some(descriptor) = self.plots.get(name) else {
            // Unreachable via the UI: triggers only exist for config
            // entries. Guard anyway for programmatic callers.
            log::warn!("activate: unknown plot {name:?} for app {:?}", self.app.identifier);
            return Ok(());
        };
        let series = load_series(self.app.dir(), name, descriptor)?;
        self.current = Some(series);
        Ok(())
    }

    /// Draw the session: trigger row, then the plot surface. Returns
    /// `true` when the user clicked the back control.
    pub fn ui(&mut self, ui: &mut Ui) -> bool {
        let mut leave = false;
        // Collect first: the buttons borrow the names while a click
        // needs &mut self. Each button owns its name outright, so a
        // click always activates the plot it was built for.
        let names: Vec<String> = self.plots.keys().cloned().collect();

        ui.horizontal_wrapped(|ui| {
            let back = format!("{} Apps", egui_phosphor::regular::ARROW_LEFT);
            if ui.button(back).clicked() {
                leave = true;
            }
            ui.separator();
            for name in names {
                if ui.button(name.as_str()).clicked() {
                    if let Err(e) = self.activate(&name) {
                        log::error!("plot {name:?}: {e}");
                    }
                }
            }
        });
        ui.separator();

        match &self.current {
            Some(series) => {
                ui.heading(&series.title);
                let line = Line::new(series.name.as_str(), series.points.clone());
                Plot::new("telemetry_plot")
                    .x_axis_label(series.x_label.clone())
                    .y_axis_label(series.y_label.clone())
                    .show(ui, |plot_ui| {
                        plot_ui.line(line);
                    });
            }
            None if self.plots.is_empty() => {
                ui.label("No plots available for this app.");
            }
            None => {
                ui.label("Pick a plot above.");
            }
        }

        leave
    }
}
