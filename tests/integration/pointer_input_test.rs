//! Integration tests that drive the controls with real pointer and keyboard
//! events, frame by frame, instead of calling `activate` directly.

use egui::{
    CentralPanel, Context, Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, Response,
    Ui,
};
use lexikid::motion::MotionPolicy;
use lexikid::ui::widgets::{MotionPressable, RadioOption, Switch, Tabs};

/// Headless egui context fed one batch of events per frame.
struct Frames {
    ctx: Context,
}

impl Frames {
    fn new() -> Self {
        Self {
            ctx: Context::default(),
        }
    }

    fn run(&self, events: Vec<Event>, mut show: impl FnMut(&mut Ui)) {
        let input = RawInput {
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| show(ui));
        });
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn key(key: Key) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

/// Lay out once, then move onto the widget's centre, press and release.
fn click(mut show: impl FnMut(&mut Ui) -> Response) {
    let frames = Frames::new();
    let mut rect = Rect::NOTHING;
    frames.run(Vec::new(), |ui| rect = show(ui).rect);

    let at = rect.center();
    for events in [
        vec![Event::PointerMoved(at)],
        vec![button(at, true)],
        vec![button(at, false)],
        Vec::new(),
    ] {
        frames.run(events, |ui| {
            show(ui);
        });
    }
}

/// Focus the widget, then press `pressed` once.
fn press_key(pressed: Key, mut show: impl FnMut(&mut Ui) -> Response) {
    let frames = Frames::new();
    frames.run(Vec::new(), |ui| show(ui).request_focus());
    frames.run(vec![key(pressed)], |ui| {
        show(ui);
    });
    frames.run(Vec::new(), |ui| {
        show(ui);
    });
}

#[test]
fn test_switch_click_calls_back_once() {
    for policy in [MotionPolicy::Full, MotionPolicy::Reduced] {
        let mut calls = Vec::new();
        click(|ui| ui.add(Switch::new("Sound", false, |v| calls.push(v)).motion_policy(policy)));
        assert_eq!(calls, vec![true], "policy {policy}");
    }
}

#[test]
fn test_disabled_switch_ignores_click() {
    let mut calls = 0;
    click(|ui| ui.add(Switch::new("Sound", false, |_| calls += 1).enabled(false)));
    assert_eq!(calls, 0);
}

#[test]
fn test_radio_option_click_selects_once() {
    let mut chosen = 0;
    click(|ui| ui.add(RadioOption::new("kitten", false, || chosen += 1)));
    assert_eq!(chosen, 1);
}

#[test]
fn test_disabled_radio_option_ignores_click() {
    let mut chosen = 0;
    click(|ui| ui.add(RadioOption::new("kitten", false, || chosen += 1).enabled(false)));
    assert_eq!(chosen, 0);
}

#[test]
fn test_tab_trigger_click_requests_value() {
    let mut requested = Vec::new();
    click(|ui| {
        Tabs::new("tabs", "words", |v| requested.push(v.to_string()))
            .show(ui, |tabs, ui| {
                tabs.trigger(ui, "words", "Words");
                tabs.trigger(ui, "reading", "Reading")
            })
            .unwrap()
    });
    assert_eq!(requested, vec!["reading".to_string()]);
}

#[test]
fn test_disabled_tab_trigger_ignores_click() {
    let mut requested = Vec::new();
    click(|ui| {
        Tabs::new("tabs", "words", |v| requested.push(v.to_string()))
            .show(ui, |tabs, ui| {
                tabs.trigger(ui, "words", "Words");
                tabs.trigger_enabled(ui, "reading", "Reading", false)
            })
            .unwrap()
    });
    assert!(requested.is_empty());
}

#[test]
fn test_pressable_click_follows_enabled_only() {
    for (enabled, expected) in [(true, 1), (false, 0)] {
        let mut clicks = 0;
        click(|ui| {
            let response = ui.add(
                MotionPressable::new("Check")
                    .enabled(enabled)
                    .motion_policy(MotionPolicy::Reduced),
            );
            if response.clicked() {
                clicks += 1;
            }
            response
        });
        assert_eq!(clicks, expected, "enabled {enabled}");
    }
}

#[test]
fn test_space_toggles_focused_switch() {
    let mut calls = Vec::new();
    press_key(Key::Space, |ui| ui.add(Switch::new("Sound", true, |v| calls.push(v))));
    assert_eq!(calls, vec![false]);
}

#[test]
fn test_enter_selects_focused_radio_option() {
    let mut chosen = 0;
    press_key(Key::Enter, |ui| ui.add(RadioOption::new("puppy", false, || chosen += 1)));
    assert_eq!(chosen, 1);
}

#[test]
fn test_disabled_radio_option_ignores_keys() {
    let mut chosen = 0;
    press_key(Key::Space, |ui| {
        ui.add(RadioOption::new("puppy", false, || chosen += 1).enabled(false))
    });
    assert_eq!(chosen, 0);
}
