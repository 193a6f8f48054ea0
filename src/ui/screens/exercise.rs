//! Vocabulary quiz screen.
//!
//! Owns the quiz state and drives the controls with plain values. Every
//! activation updates the state first and then asks the interaction layer for
//! feedback.

use egui::{RichText, Ui};

use crate::audio::SfxEvent;
use crate::interaction::InteractionLayer;
use crate::ui::theme::{AlertVariant, ButtonSize, ButtonVariant};
use crate::ui::widgets::{Alert, Card, MotionPressable, Progress, RadioGroup, RadioVariant};

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub answer: usize,
}

impl Question {
    pub fn new(prompt: &str, options: &[&str], answer: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
        }
    }
}

/// Where the learner is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    /// Intro card, nothing played yet
    #[default]
    Intro,
    Answering,
    /// Answer checked; `correct` is the verdict
    Checked { correct: bool },
    Finished,
}

pub struct ExerciseScreen {
    questions: Vec<Question>,
    index: usize,
    selected: Option<usize>,
    phase: QuizPhase,
    score: usize,
}

impl Default for ExerciseScreen {
    fn default() -> Self {
        Self::new(vec![
            Question::new("Which word means a baby cat?", &["puppy", "kitten", "calf"], 1),
            Question::new("Pick the opposite of \"tall\".", &["short", "wide", "high"], 0),
            Question::new("Which one is a fruit?", &["carrot", "potato", "apple"], 2),
        ])
    }
}

impl ExerciseScreen {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
            selected: None,
            phase: QuizPhase::Intro,
            score: 0,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Completed share of the quiz as a percentage.
    pub fn progress_percent(&self) -> f32 {
        if self.questions.is_empty() {
            return 100.0;
        }
        let done = match self.phase {
            QuizPhase::Checked { .. } => self.index + 1,
            QuizPhase::Finished => self.questions.len(),
            _ => self.index,
        };
        done as f32 / self.questions.len() as f32 * 100.0
    }

    pub fn start(&mut self) {
        self.phase = if self.questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::Answering
        };
    }

    /// Record a choice. Ignored once the answer has been checked.
    pub fn choose(&mut self, option: usize) {
        if self.phase == QuizPhase::Answering {
            self.selected = Some(option);
        }
    }

    /// Check the chosen answer. Returns the verdict, or `None` if nothing can be checked.
    pub fn submit(&mut self) -> Option<bool> {
        if self.phase != QuizPhase::Answering {
            return None;
        }
        let selected = self.selected?;
        let correct = self.current().is_some_and(|q| q.answer == selected);
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Checked { correct };
        Some(correct)
    }

    /// Move past a checked question. Returns the cue that fits the step.
    pub fn advance(&mut self) -> Option<SfxEvent> {
        if !matches!(self.phase, QuizPhase::Checked { .. }) {
            return None;
        }
        self.selected = None;
        if self.index + 1 >= self.questions.len() {
            self.phase = QuizPhase::Finished;
            Some(SfxEvent::End)
        } else {
            self.index += 1;
            self.phase = QuizPhase::Answering;
            Some(SfxEvent::Progress)
        }
    }

    pub fn restart(&mut self) {
        self.index = 0;
        self.selected = None;
        self.score = 0;
        self.phase = QuizPhase::Answering;
    }

    pub fn show(&mut self, ui: &mut Ui, layer: &mut InteractionLayer) {
        let policy = layer.motion_policy();

        ui.add(Progress::new(self.progress_percent()).motion_policy(policy));
        ui.add_space(16.0);

        match self.phase {
            QuizPhase::Intro => {
                Card::new()
                    .title("Word quiz")
                    .description("Choose the right word for each question.")
                    .show(ui, |ui| {
                        let start = ui.add(
                            MotionPressable::new("Start")
                                .size(ButtonSize::Lg)
                                .motion_policy(policy),
                        );
                        if start.clicked() {
                            self.start();
                            layer.acknowledge("exercise.start", SfxEvent::Welcome);
                        }
                    });
            }
            QuizPhase::Finished => {
                let summary = format!("You got {} of {} right.", self.score, self.questions.len());
                Card::new().title("All done!").description(&summary).show(ui, |ui| {
                    let again = ui.add(
                        MotionPressable::new("Play again")
                            .variant(ButtonVariant::Secondary)
                            .motion_policy(policy),
                    );
                    if again.clicked() {
                        self.restart();
                        layer.acknowledge("exercise.restart", SfxEvent::Tap);
                    }
                });
            }
            QuizPhase::Answering | QuizPhase::Checked { .. } => self.show_question(ui, layer),
        }
    }

    fn show_question(&mut self, ui: &mut Ui, layer: &mut InteractionLayer) {
        let policy = layer.motion_policy();
        let Some(question) = self.current().cloned() else {
            return;
        };
        let answering = self.phase == QuizPhase::Answering;
        let title = format!("Question {} of {}", self.index + 1, self.questions.len());

        Card::new().title(&title).show(ui, |ui| {
            ui.label(RichText::new(&question.prompt).size(20.0));
            ui.add_space(12.0);

            let mut picked = None;
            RadioGroup::new(&question.prompt, self.selected.as_ref(), |option| {
                picked = Some(option)
            })
            .variant(RadioVariant::Tile)
            .horizontal(true)
            .enabled(answering)
            .motion_policy(policy)
            .show(ui, |group, ui| {
                for (i, option) in question.options.iter().enumerate() {
                    group.option(ui, i, option);
                }
            });
            if let Some(option) = picked {
                self.choose(option);
                layer.acknowledge("exercise.option", SfxEvent::Tap);
            }

            ui.add_space(16.0);

            if let QuizPhase::Checked { correct } = self.phase {
                let alert = if correct {
                    Alert::new("Correct!").icon("✔")
                } else {
                    Alert::new("Not quite")
                        .icon("✖")
                        .description(
                            question
                                .options
                                .get(question.answer)
                                .map(String::as_str)
                                .unwrap_or_default(),
                        )
                        .variant(AlertVariant::Destructive)
                };
                ui.add(alert);
                ui.add_space(12.0);
            }

            Card::footer(ui, |ui| {
                if answering {
                    let check = ui.add(
                        MotionPressable::new("Check")
                            .enabled(self.selected.is_some())
                            .motion_policy(policy),
                    );
                    if check.clicked() {
                        match self.submit() {
                            Some(true) => {
                                layer.acknowledge("exercise.submit", SfxEvent::Submit);
                            }
                            Some(false) => {
                                layer.acknowledge("exercise.submit", SfxEvent::Error);
                            }
                            None => {}
                        }
                    }
                } else {
                    let next = ui.add(MotionPressable::new("Next").motion_policy(policy));
                    if next.clicked() {
                        if let Some(cue) = self.advance() {
                            layer.acknowledge("exercise.next", cue);
                        }
                    }
                }
            });
        });
    }
}
