//! Integration tests for the controlled switch, radio group and pressable,
//! rendered headlessly.

use egui::{CentralPanel, Context, RawInput};
use lexikid::motion::MotionPolicy;
use lexikid::ui::widgets::{MotionPressable, RadioGroup, RadioVariant, Switch};

fn run(mut f: impl FnMut(&mut egui::Ui)) {
    let ctx = Context::default();
    let _ = ctx.run(RawInput::default(), |ctx| {
        CentralPanel::default().show(ctx, |ui| f(ui));
    });
}

#[test]
fn test_switch_host_drives_state() {
    let mut checked = false;

    // Simulate three activations, each answered by the host
    for _ in 0..3 {
        let mut next = None;
        {
            let mut switch = Switch::new("Sound", checked, |v| next = Some(v));
            switch.activate();
        }
        checked = next.unwrap();
    }

    assert!(checked);
}

#[test]
fn test_switch_renders_in_both_policies() {
    for policy in [MotionPolicy::Full, MotionPolicy::Reduced] {
        let mut calls = 0;
        run(|ui| {
            let response = ui.add(Switch::new("Sound", true, |_| calls += 1).motion_policy(policy));
            assert!(!response.clicked());
        });
        assert_eq!(calls, 0);
    }
}

#[test]
fn test_radio_group_exactly_one_checked() {
    let answers = ["kitten", "puppy", "calf"];
    for selected in 0..answers.len() {
        run(|ui| {
            let output = RadioGroup::new("Answer", Some(&selected), |_| {})
                .variant(RadioVariant::Tile)
                .show(ui, |group, ui| {
                    for (i, answer) in answers.iter().enumerate() {
                        group.option(ui, i, answer);
                    }
                });
            assert_eq!(output.checked_count(), 1);
            assert_eq!(output.options[selected].aria_checked(), Some("true"));
        });
    }
}

#[test]
fn test_disabled_group_exposes_disabled_options() {
    run(|ui| {
        let output = RadioGroup::new("Answer", None::<&u8>, |_| {})
            .enabled(false)
            .show(ui, |group, ui| {
                group.option(ui, 1, "one");
            });
        assert!(output.options.iter().all(|node| node.disabled));
    });
}

#[test]
fn test_pressable_keeps_touch_target() {
    run(|ui| {
        let response = ui.add(MotionPressable::new("A").motion_policy(MotionPolicy::Reduced));
        assert!(response.rect.width() >= lexikid::ui::theme::MIN_TOUCH_TARGET);
        assert!(response.rect.height() >= lexikid::ui::theme::MIN_TOUCH_TARGET);
    });
}
