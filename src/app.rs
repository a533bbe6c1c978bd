//! Native window and screen state machine.
//!
//! One process, one event loop, one window. The original selector and
//! viewer windows become two screens inside it: confirming an app in
//! the selector swaps in a viewer session, leaving the viewer swaps a
//! fresh selector back in, and closing the window ends the process
//! (status 0) from either screen.

use eframe::egui;

use crate::selector::SelectorScreen;
use crate::startup::AppDescriptor;
use crate::viewer::ViewerSession;

enum Screen {
    Select(SelectorScreen),
    View(ViewerSession),
}

/// Egui app that hosts the selector/viewer screens.
pub struct MainApp {
    apps: Vec<AppDescriptor>,
    screen: Screen,
}

impl MainApp {
    /// `apps` comes from the startup loader and is non-empty.
    pub fn new(apps: Vec<AppDescriptor>) -> Self {
        let screen = Screen::Select(SelectorScreen::new(apps.clone()));
        Self { apps, screen }
    }
}

impl eframe::App for MainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut next: Option<Screen> = None;
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.screen {
            Screen::Select(selector) => {
                if let Some(app) = selector.ui(ui) {
                    log::info!("opening app {:?}", app.identifier);
                    next = Some(Screen::View(ViewerSession::open(app)));
                }
            }
            Screen::View(session) => {
                if session.ui(ui) {
                    next = Some(Screen::Select(SelectorScreen::new(self.apps.clone())));
                }
            }
        });
        if let Some(screen) = next {
            self.screen = screen;
        }
    }
}

/// Open the native window and run until the user closes it.
///
/// The call blocks for the whole UI lifetime; the selector/viewer loop
/// happens inside via [`MainApp`].
pub fn run(apps: Vec<AppDescriptor>) -> eframe::Result<()> {
    let app = MainApp::new(apps);

    let mut opts = eframe::NativeOptions::default();
    if let Some(icon) = load_app_icon_svg() {
        opts.viewport = egui::ViewportBuilder::default().with_icon(icon);
    }
    opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(900.0, 600.0));

    eframe::run_native(
        "Telemview",
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
