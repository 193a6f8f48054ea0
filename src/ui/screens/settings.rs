//! Sound, motion and theme settings.

use egui::Ui;

use crate::audio::SfxEvent;
use crate::interaction::InteractionLayer;
use crate::motion::ReducedMotionSignal;
use crate::ui::theme::{AlertVariant, Theme};
use crate::ui::widgets::{Alert, Card, FieldLabel, Select, Separator, Switch};

const THEMES: [(Theme, &str); 2] = [(Theme::Light, "Light"), (Theme::Dark, "Dark")];

/// A setting the app has to apply or persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    Theme(Theme),
    ReduceMotion(bool),
}

#[derive(Default)]
pub struct SettingsScreen {
    save_error: Option<String>,
}

impl SettingsScreen {
    /// Show a failure to persist a setting until the next successful change.
    pub fn set_save_error(&mut self, error: Option<String>) {
        self.save_error = error;
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        layer: &mut InteractionLayer,
        motion: &ReducedMotionSignal,
        theme: Theme,
    ) -> Option<SettingsChange> {
        let policy = layer.motion_policy();
        let sound_on = layer.sound_enabled();
        let reduced = motion.is_reduced();

        let mut sound_request = None;
        let mut motion_request = None;
        let mut theme_request = None;

        Card::new()
            .title("Settings")
            .description("Changes apply right away.")
            .show(ui, |ui| {
                ui.add(
                    Switch::new("Sound effects", sound_on, |on| sound_request = Some(on))
                        .motion_policy(policy),
                );
                ui.add(
                    Switch::new("Reduce motion", reduced, |on| motion_request = Some(on))
                        .motion_policy(policy),
                );

                ui.add_space(8.0);
                ui.add(Separator::horizontal());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let label = ui.add(FieldLabel::new("Theme"));
                    let select =
                        Select::new("theme", &theme, &THEMES, |t| theme_request = Some(t)).show(ui);
                    FieldLabel::bind(&label, select);
                });

                if let Some(error) = &self.save_error {
                    ui.add_space(12.0);
                    ui.add(
                        Alert::new("Could not save settings")
                            .description(error)
                            .variant(AlertVariant::Destructive),
                    );
                }
            });

        if let Some(on) = sound_request {
            match layer.set_sound_enabled(on) {
                Ok(()) => self.save_error = None,
                Err(e) => self.save_error = Some(e.to_string()),
            }
            layer.acknowledge("settings.sound", SfxEvent::Tap);
        }

        let mut change = None;
        if let Some(on) = motion_request {
            motion.set(on);
            layer.acknowledge("settings.motion", SfxEvent::Tap);
            change = Some(SettingsChange::ReduceMotion(on));
        }
        if let Some(t) = theme_request {
            layer.acknowledge("settings.theme", SfxEvent::Tap);
            change = Some(SettingsChange::Theme(t));
        }
        change
    }
}
