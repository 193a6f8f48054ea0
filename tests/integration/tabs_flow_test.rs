//! Integration tests for controlled tabs driven across frames.

use egui::{CentralPanel, Context, RawInput};
use lexikid::ui::widgets::{Tabs, TabsError};

const TABS: [&str; 3] = ["words", "reading", "settings"];

/// Render one frame with the host's `value`. Returns the mounted pane and any
/// requested value.
fn frame(ctx: &Context, value: &str, activate: Option<&str>) -> (Vec<String>, Vec<String>) {
    let mut mounted = Vec::new();
    let mut requested = Vec::new();

    let _ = ctx.run(RawInput::default(), |ctx| {
        CentralPanel::default().show(ctx, |ui| {
            let result = Tabs::new("tabs", value, |v| requested.push(v.to_string())).show(
                ui,
                |tabs, ui| {
                    tabs.list(ui, |tabs, ui| {
                        for tab in TABS {
                            tabs.trigger(ui, tab, tab);
                        }
                    });
                    if let Some(target) = activate {
                        tabs.activate(target);
                    }
                    for tab in TABS {
                        tabs.content(ui, tab, |_| mounted.push(tab.to_string()));
                    }
                },
            );
            assert!(result.is_ok());
        });
    });

    (mounted, requested)
}

#[test]
fn test_pane_switches_only_after_host_updates() {
    let ctx = Context::default();
    let mut value = String::from("words");

    let (mounted, requested) = frame(&ctx, &value, Some("reading"));
    assert_eq!(mounted, vec!["words"]);
    assert_eq!(requested, vec!["reading"]);

    value = requested[0].clone();
    let (mounted, requested) = frame(&ctx, &value, None);
    assert_eq!(mounted, vec!["reading"]);
    assert!(requested.is_empty());
}

#[test]
fn test_reactivating_current_tab_still_emits() {
    let ctx = Context::default();
    let (_, requested) = frame(&ctx, "settings", Some("settings"));
    assert_eq!(requested, vec!["settings"]);
}

#[test]
fn test_unknown_value_mounts_nothing() {
    let ctx = Context::default();
    let mut mounted = 0;

    let _ = ctx.run(RawInput::default(), |ctx| {
        CentralPanel::default().show(ctx, |ui| {
            let result = Tabs::new("tabs", "missing", |_| {}).show(ui, |tabs, ui| {
                for tab in TABS {
                    tabs.trigger(ui, tab, tab);
                }
                for tab in TABS {
                    if tabs.content(ui, tab, |_| ()).is_some() {
                        mounted += 1;
                    }
                }
            });
            assert_eq!(result, Err(TabsError::UnknownValue("missing".into())));
        });
    });

    assert_eq!(mounted, 0);
}
