#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! AutoWide Playback Enhancer
//!
//! Auto-widescreen, scroll control, and header visibility for playback pages,
//! with a floating settings panel and burn-in protection. Runs against a
//! simulated playback page so every behavior is visible without a browser.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autowide::app::EnhancerApp;

fn main() -> Result<()> {
    // Initialize file logging
    let file_appender = tracing_appender::rolling::never(".", "autowide.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting AutoWide Playback Enhancer");

    // Install panic hook to log panics
    let next = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Application panic: {}", info);
        next(info);
    }));

    // Create tokio runtime for the timer tasks
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // Try wgpu first, fall back to glow on systems without modern graphics
    tracing::info!("Attempting to start with wgpu renderer");
    let wgpu_result = run_with_renderer(runtime.handle().clone(), eframe::Renderer::Wgpu);

    if let Err(wgpu_err) = wgpu_result {
        tracing::warn!(
            "wgpu renderer failed: {}. Trying glow (OpenGL) fallback...",
            wgpu_err
        );
        if let Err(glow_err) =
            run_with_renderer(runtime.handle().clone(), eframe::Renderer::Glow)
        {
            tracing::error!("Both wgpu and glow renderers failed!");
            tracing::error!("wgpu error: {}", wgpu_err);
            tracing::error!("glow error: {}", glow_err);
            return Err(anyhow::anyhow!(
                "no graphics renderer could be initialized (wgpu: {}; glow: {})",
                wgpu_err,
                glow_err
            ));
        }
    }

    Ok(())
}

/// Run the application with the specified renderer
fn run_with_renderer(
    runtime_handle: tokio::runtime::Handle,
    renderer: eframe::Renderer,
) -> Result<(), anyhow::Error> {
    let renderer_name = match renderer {
        eframe::Renderer::Wgpu => "wgpu",
        eframe::Renderer::Glow => "glow",
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("AutoWide Playback Enhancer"),
        renderer,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "AutoWide Playback Enhancer",
        native_options,
        Box::new(move |cc| {
            setup_egui_style(cc);
            tracing::info!("Successfully initialized {} renderer", renderer_name);
            Ok(Box::new(EnhancerApp::new(cc, runtime_handle.clone())))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}

/// Setup egui visual style
fn setup_egui_style(cc: &eframe::CreationContext<'_>) {
    let mut style = (*cc.egui_ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);

    use egui::CornerRadius;
    style.visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);
    style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = CornerRadius::same(6);
    style.visuals.window_corner_radius = CornerRadius::same(10);

    cc.egui_ctx.set_style(style);
    cc.egui_ctx.set_visuals(egui::Visuals::dark());
}
