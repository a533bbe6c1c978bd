//! App selection screen: a combo box over the startup app list plus an
//! Open button.

use egui::Ui;

use crate::startup::AppDescriptor;

/// Single-choice selector over the known app directories.
///
/// The choice defaults to the first app; confirming without touching
/// the combo box therefore opens the first entry. A fresh screen is
/// built every time control returns here, so there is no stale state
/// to clear.
pub struct SelectorScreen {
    apps: Vec<AppDescriptor>,
    chosen: usize,
}

impl SelectorScreen {
    /// `apps` must be non-empty; the startup loader enforces that.
    pub fn new(apps: Vec<AppDescriptor>) -> Self {
        Self { apps, chosen: 0 }
    }

    /// The app the Open button would confirm right now.
    pub fn chosen(&self) -> &AppDescriptor {
        &self.apps[self.chosen]
    }

    /// Draw the screen. Returns the confirmed app on the frame the
    /// Open button is clicked, `None` on every other frame.
    pub fn ui(&mut self, ui: &mut Ui) -> Option<AppDescriptor> {
        let mut confirmed = None;
        ui.heading("Select telemetry app");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("app_selector")
                .selected_text(self.apps[self.chosen].identifier.clone())
                .show_ui(ui, |ui| {
                    for (idx, app) in self.apps.iter().enumerate() {
                        ui.selectable_value(&mut self.chosen, idx, app.identifier.clone());
                    }
                });
            let label = format!("{} Open", egui_phosphor::regular::FOLDER_OPEN);
            if ui.button(label).clicked() {
                confirmed = Some(self.apps[self.chosen].clone());
            }
        });

        confirmed
    }
}
