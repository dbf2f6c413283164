#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the dental implant CDSS desktop form.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use implant_cdss::config::{self, MIN_WINDOW_SIZE};
use implant_cdss::egui_app::controller::CdssController;
use implant_cdss::egui_app::ui::{CdssApp, StartupErrorApp};
use implant_cdss::{launch, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = match launch::parse_args(std::env::args().skip(1).collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = options.apply(config::load_or_fallback());
    let app: Box<dyn eframe::App> = match CdssController::from_settings(&settings) {
        Ok(controller) => Box::new(CdssApp::new(controller)),
        Err(err) => {
            tracing::error!(error = %err, "Model artifact unavailable; form disabled");
            Box::new(StartupErrorApp::new(err.to_string()))
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        "Dental Implant CDSS",
        native_options,
        Box::new(move |_cc| Ok(app)),
    )?;
    Ok(())
}

