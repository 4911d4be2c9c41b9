use std::sync::mpsc;
use std::time::Duration;

use eframe::egui;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::settings::Settings;
use crate::config::store::SettingsStore;
use crate::controller::burn_in::Oscillator;
use crate::controller::{Activation, PageController};
use crate::page::PageSurface;
use crate::ui::float_panel::{FloatPanel, PanelAction};
use crate::ui::page_view::{PageEvent, PageView};
use crate::utils::i18n::{self, Language, T};

/// Address the simulated page opens on.
const START_ADDRESS: &str = "/video/BV1xx411c7mD/";

/// The panel attaches to the player container this long after startup.
const PANEL_MOUNT_DELAY: Duration = Duration::from_secs(3);

/// Delay between saving settings and restarting the controller.
const RESTART_DELAY: Duration = Duration::from_millis(300);

/// How often the address poller looks for in-page navigations.
const ADDRESS_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Timer and lifecycle messages posted to the UI loop.
#[derive(Debug)]
pub enum BackendMessage {
    /// The panel mount delay elapsed.
    PanelMounted,

    /// Advance the burn-in oscillator one step.
    BurnInTick,

    /// Compare the current address against the last observed one.
    AddressPollTick,

    /// Reload settings and run a fresh controller against the page.
    RestartController,
}

pub struct EnhancerApp {
    runtime: Handle,

    backend_tx: mpsc::Sender<BackendMessage>,

    backend_rx: mpsc::Receiver<BackendMessage>,

    store: SettingsStore,

    settings: Settings,

    page: PageView,

    controller: PageController,

    panel: FloatPanel,

    oscillator: Oscillator,

    panel_mounted: bool,

    burn_in_task: Option<JoinHandle<()>>,

    address_task: Option<JoinHandle<()>>,

    last_address: String,

    current_lang: Language,

    show_about: bool,

    status_message: String,
}

impl EnhancerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, runtime: Handle) -> Self {
        Self::with_store(runtime, SettingsStore::default_location())
    }

    pub fn with_store(runtime: Handle, store: SettingsStore) -> Self {
        let (backend_tx, backend_rx) = mpsc::channel::<BackendMessage>();

        let settings = store.load();
        let mut page = PageView::new(START_ADDRESS);
        let mut controller = PageController::new(settings.clone(), START_ADDRESS);
        controller.start(&mut page);

        let panel = FloatPanel::new(&settings);
        let oscillator = Oscillator::new(&settings.burn_in);
        let lang = Language::default();
        let status_message = activation_status(controller.activation(), lang);

        let mut app = Self {
            runtime,
            backend_tx,
            backend_rx,
            store,
            settings,
            last_address: page.address().to_string(),
            page,
            controller,
            panel,
            oscillator,
            panel_mounted: false,
            burn_in_task: None,
            address_task: None,
            current_lang: lang,
            show_about: false,
            status_message,
        };

        app.spawn_delayed(PANEL_MOUNT_DELAY, BackendMessage::PanelMounted);
        app.spawn_tickers();
        app
    }

    /// Drain timer messages. Everything that mutates shared state happens here,
    /// on the UI turn.
    fn process_backend_messages(&mut self) {
        while let Ok(msg) = self.backend_rx.try_recv() {
            match msg {
                BackendMessage::PanelMounted => {
                    self.panel_mounted = true;
                }
                BackendMessage::BurnInTick => {
                    self.oscillator.tick();
                }
                BackendMessage::AddressPollTick => {
                    if self.page.address() != self.last_address {
                        self.last_address = self.page.address().to_string();
                        self.controller.on_address_change(&mut self.page);
                    }
                }
                BackendMessage::RestartController => {
                    self.restart();
                }
            }
        }
    }

    /// Fresh controller run: the page reloads, settings are re-read from the
    /// store, and every behavior is re-applied from scratch.
    fn restart(&mut self) {
        tracing::info!("restarting page controller");
        self.settings = self.store.load();
        self.page.reload();
        self.last_address = self.page.address().to_string();
        self.controller = PageController::new(self.settings.clone(), &self.last_address);
        self.controller.start(&mut self.page);
        self.panel = FloatPanel::new(&self.settings);
        self.oscillator = Oscillator::new(&self.settings.burn_in);
        self.status_message = activation_status(self.controller.activation(), self.current_lang);
        self.spawn_tickers();
    }

    fn spawn_tickers(&mut self) {
        self.spawn_burn_in_ticker();
        self.spawn_address_poller();
    }

    /// (Re)start the burn-in interval. The old timer is cleared first, so a
    /// restart always begins a fresh cycle.
    fn spawn_burn_in_ticker(&mut self) {
        if let Some(task) = self.burn_in_task.take() {
            task.abort();
        }
        if !self.settings.burn_in.enabled {
            return;
        }
        let tx = self.backend_tx.clone();
        let period = Duration::from_millis(self.settings.burn_in.interval_ms.max(1));
        self.burn_in_task = Some(self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(BackendMessage::BurnInTick).is_err() {
                    break;
                }
            }
        }));
    }

    fn spawn_address_poller(&mut self) {
        if let Some(task) = self.address_task.take() {
            task.abort();
        }
        if !self.settings.watch_address {
            return;
        }
        let tx = self.backend_tx.clone();
        self.address_task = Some(self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(ADDRESS_POLL_INTERVAL);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(BackendMessage::AddressPollTick).is_err() {
                    break;
                }
            }
        }));
    }

    fn spawn_delayed(&self, delay: Duration, msg: BackendMessage) {
        let tx = self.backend_tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(msg);
        });
    }

    fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Save(settings) => {
                if let Err(e) = self.store.save(&settings) {
                    tracing::error!("saving settings failed: {}", e);
                }
                self.status_message = i18n::t(T::SettingsSaved, self.current_lang).to_string();
            }
            PanelAction::Reset => {
                if let Err(e) = self.store.save(&Settings::default()) {
                    tracing::error!("resetting settings failed: {}", e);
                }
                self.status_message = i18n::t(T::SettingsReset, self.current_lang).to_string();
            }
        }
        self.spawn_delayed(RESTART_DELAY, BackendMessage::RestartController);
    }

    /// History navigation fired: the idle animation restarts from zero on a
    /// fresh timer cycle.
    fn handle_navigation(&mut self) {
        self.oscillator.reset();
        self.spawn_burn_in_ticker();
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(i18n::t(T::File, self.current_lang), |ui| {
                    if ui.button(i18n::t(T::Exit, self.current_lang)).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button(i18n::t(T::View, self.current_lang), |ui| {
                    ui.label("Language / 语言");
                    if ui
                        .selectable_label(self.current_lang == Language::English, "English")
                        .clicked()
                    {
                        self.current_lang = Language::English;
                    }
                    if ui
                        .selectable_label(self.current_lang == Language::Chinese, "中文")
                        .clicked()
                    {
                        self.current_lang = Language::Chinese;
                    }
                });
                ui.menu_button(i18n::t(T::Help, self.current_lang), |ui| {
                    if ui.button(i18n::t(T::About, self.current_lang)).clicked() {
                        self.show_about = true;
                    }
                });
            });
        });
    }

    fn show_about_window(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }
        egui::Window::new(i18n::t(T::AboutTitle, self.current_lang))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("AutoWide");
                    ui.label(env!("CARGO_PKG_VERSION"));
                    ui.add_space(10.0);
                    ui.label(env!("CARGO_PKG_DESCRIPTION"));
                    ui.add_space(10.0);
                    if ui.button(i18n::t(T::Close, self.current_lang)).clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let (icon, color) = match self.controller.activation() {
                        Activation::Enabled(_) => ("🟢", egui::Color32::from_rgb(0, 255, 0)),
                        Activation::Disabled => ("⚫", egui::Color32::from_rgb(100, 100, 100)),
                    };
                    ui.label(egui::RichText::new(icon).color(color));
                    ui.separator();
                    ui.label(&self.status_message);

                    if self.controller.watching() {
                        ui.separator();
                        ui.spinner();
                        ui.label(i18n::t(T::WatchingForToggle, self.current_lang));
                    } else if self.controller.widescreen_applied() {
                        ui.separator();
                        ui.label(i18n::t(T::WidescreenApplied, self.current_lang));
                    }
                });
            });
    }
}

fn activation_status(activation: Activation, lang: Language) -> String {
    match activation {
        Activation::Enabled(kind) => {
            i18n::t(T::EnhancerEnabledOn, lang).replace("{}", kind.label(lang))
        }
        Activation::Disabled => i18n::t(T::EnhancerDisabled, lang).to_string(),
    }
}

impl eframe::App for EnhancerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_backend_messages();

        // each frame is one mutation turn for the toggle watcher
        if self.controller.watching() {
            self.controller.on_mutation(&mut self.page);
            if self.controller.widescreen_applied() {
                self.status_message =
                    i18n::t(T::WidescreenApplied, self.current_lang).to_string();
            }
        }

        ctx.request_repaint_after(Duration::from_millis(100));

        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);
        self.show_about_window(ctx);

        if let Some(PageEvent::Navigated) = self.page.show(ctx, self.current_lang) {
            self.handle_navigation();
        }

        if self.panel_mounted && self.page.player_present() {
            let shift = self.oscillator.offset();
            if let Some(action) = self.panel.show(ctx, shift, self.current_lang) {
                self.handle_panel_action(action);
            }
        }
    }
}
