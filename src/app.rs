//! Main application state and egui integration.

use eframe::egui;

use lexikid::analytics::TracingAnalyticsSink;
use lexikid::audio::{AudioEngine, FeedbackDispatcher, NullAudioEngine, RodioAudioEngine, SfxEvent};
use lexikid::interaction::InteractionLayer;
use lexikid::motion::{detect_reduced_motion, ReducedMotionSignal};
use lexikid::storage::config::{get_data_dir, load_config, save_config, AppConfig};
use lexikid::storage::{PreferenceStore, TomlPreferenceStore};
use lexikid::ui::screens::{AppTab, ExerciseScreen, ReadingScreen, SettingsChange, SettingsScreen};
use lexikid::ui::theme::{AlertVariant, BadgeVariant, Theme};
use lexikid::ui::widgets::{Alert, Badge, Tabs};
use std::sync::Arc;

/// Main application state.
pub struct LexikidApp {
    config: AppConfig,
    theme: Theme,
    /// Active tab value, owned here and passed down to the tabs
    tab: AppTab,
    motion: ReducedMotionSignal,
    layer: InteractionLayer,
    exercise: ExerciseScreen,
    reading: ReadingScreen,
    settings: SettingsScreen,
}

impl LexikidApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig {
                data_dir: get_data_dir(),
                ..AppConfig::default()
            }
        });

        let theme = Theme::default();
        cc.egui_ctx.set_visuals(theme.visuals());

        let preferences: Arc<dyn PreferenceStore> =
            Arc::new(TomlPreferenceStore::new(&config.data_dir));

        let assets_dir = config.audio.resolve_assets_dir(&config.data_dir);
        let engine: Arc<dyn AudioEngine> = match RodioAudioEngine::spawn(assets_dir) {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                tracing::warn!("Audio unavailable, sound effects disabled: {}", e);
                Arc::new(NullAudioEngine)
            }
        };

        let dispatcher = FeedbackDispatcher::new(engine, preferences.clone())
            .with_master_volume(config.audio.master_volume());

        let mut motion =
            ReducedMotionSignal::new(detect_reduced_motion(config.accessibility.reduce_motion));
        motion.attach_repaint(cc.egui_ctx.clone());

        let mut layer = InteractionLayer::new(motion.resolver(), dispatcher, preferences);
        if config.analytics.enabled {
            layer = layer.with_analytics(Arc::new(TracingAnalyticsSink));
        }

        tracing::info!(
            "Lexikid ready (motion: {}, sound: {})",
            layer.motion_policy(),
            if layer.sound_enabled() { "on" } else { "off" }
        );

        Self {
            config,
            theme,
            tab: AppTab::default(),
            motion,
            layer,
            exercise: ExerciseScreen::default(),
            reading: ReadingScreen::default(),
            settings: SettingsScreen::default(),
        }
    }

    fn apply_settings_change(&mut self, ctx: &egui::Context, change: SettingsChange) {
        match change {
            SettingsChange::Theme(theme) => {
                self.theme = theme;
                ctx.set_visuals(theme.visuals());
            }
            SettingsChange::ReduceMotion(reduced) => {
                self.config.accessibility.reduce_motion = Some(reduced);
                match save_config(&self.config) {
                    Ok(()) => self.settings.set_save_error(None),
                    Err(e) => {
                        tracing::warn!("Failed to save config: {}", e);
                        self.settings.set_save_error(Some(e.to_string()));
                    }
                }
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Lexikid");
            ui.add_space(8.0);
            let motion = format!("motion: {}", self.layer.motion_policy());
            ui.add(Badge::new(&motion).variant(BadgeVariant::Outline));
        });
    }
}

impl eframe::App for LexikidApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(policy) = self.layer.take_motion_change() {
            tracing::debug!("Re-rendering with motion policy {}", policy);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_header(ui);
            ui.add_space(6.0);
        });

        let mut settings_change = None;
        let mut requested_tab = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let policy = self.layer.motion_policy();
            let active = self.tab.value();

            let result = Tabs::new("main-tabs", active, |value| {
                requested_tab = Some(value.to_string())
            })
            .motion_policy(policy)
            .show(ui, |tabs, ui| {
                tabs.list(ui, |tabs, ui| {
                    for tab in AppTab::ALL {
                        tabs.trigger(ui, tab.value(), tab.title());
                    }
                });
                ui.add_space(16.0);

                tabs.content(ui, AppTab::Exercise.value(), |ui| {
                    self.exercise.show(ui, &mut self.layer);
                });
                tabs.content(ui, AppTab::Reading.value(), |ui| {
                    self.reading.show(ui, &mut self.layer);
                });
                tabs.content(ui, AppTab::Settings.value(), |ui| {
                    settings_change =
                        self.settings
                            .show(ui, &mut self.layer, &self.motion, self.theme);
                });
            });

            if let Err(e) = result {
                let message = e.to_string();
                ui.add(
                    Alert::new("Something went wrong")
                        .description(&message)
                        .variant(AlertVariant::Destructive),
                );
            }
        });

        if let Some(value) = requested_tab {
            match AppTab::from_value(&value) {
                Some(tab) => {
                    self.tab = tab;
                    self.layer.acknowledge("tabs", SfxEvent::Tap);
                }
                None => tracing::error!("Tab trigger requested unknown value {:?}", value),
            }
        }

        if let Some(change) = settings_change {
            self.apply_settings_change(ctx, change);
        }
    }
}
