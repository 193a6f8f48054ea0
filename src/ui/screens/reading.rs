//! Short reading passage with a notes box.

use egui::{RichText, Ui};

use crate::audio::SfxEvent;
use crate::interaction::InteractionLayer;
use crate::ui::theme::BadgeVariant;
use crate::ui::widgets::{Badge, Card, FieldLabel, Select, Separator, Textarea};

/// Reading level of the passage shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingLevel {
    #[default]
    Starter,
    Explorer,
}

const LEVELS: [(ReadingLevel, &str); 2] = [
    (ReadingLevel::Starter, "Starter"),
    (ReadingLevel::Explorer, "Explorer"),
];

impl ReadingLevel {
    pub fn passage(&self) -> &'static str {
        match self {
            ReadingLevel::Starter => {
                "The cat sat in the sun. It was warm. The cat had a nap on the mat."
            }
            ReadingLevel::Explorer => {
                "Every morning the little fox trotted down to the river. It watched the \
                 fish flash silver under the water and wondered where the river went."
            }
        }
    }
}

const NOTES_LIMIT: usize = 280;

#[derive(Default)]
pub struct ReadingScreen {
    level: ReadingLevel,
    notes: String,
}

impl ReadingScreen {
    pub fn level(&self) -> ReadingLevel {
        self.level
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_level(&mut self, level: ReadingLevel) {
        self.level = level;
    }

    pub fn word_count(&self) -> usize {
        self.level.passage().split_whitespace().count()
    }

    pub fn show(&mut self, ui: &mut Ui, layer: &mut InteractionLayer) {
        let mut chosen = None;

        Card::new()
            .title("Read along")
            .description("Read the story, then write down a word you liked.")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let label = ui.add(FieldLabel::new("Level"));
                    let select = Select::new("reading-level", &self.level, &LEVELS, |level| {
                        chosen = Some(level)
                    })
                    .show(ui);
                    FieldLabel::bind(&label, select);

                    ui.add_space(8.0);
                    let words = format!("{} words", self.word_count());
                    ui.add(Badge::new(&words).variant(BadgeVariant::Secondary));
                });

                ui.add_space(12.0);
                ui.label(RichText::new(self.level.passage()).size(20.0));
                ui.add_space(12.0);
                ui.add(Separator::horizontal());
                ui.add_space(8.0);

                let label = ui.add(FieldLabel::new("My notes"));
                let notes = ui.add(
                    Textarea::new(&mut self.notes)
                        .placeholder("Type a word from the story…")
                        .rows(3)
                        .char_limit(NOTES_LIMIT),
                );
                FieldLabel::bind(&label, notes);
            });

        if let Some(level) = chosen {
            self.set_level(level);
            layer.acknowledge("reading.level", SfxEvent::Tap);
        }
    }
}
