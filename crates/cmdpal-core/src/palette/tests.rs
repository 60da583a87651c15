use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use cmdpal_config::parse_config;
use tempfile::TempDir;

use super::*;
use crate::executor::{ACKNOWLEDGEMENT, ExecutorError};
use crate::executor::test_support::{RecordingAutomation, ScriptedShell};
use crate::focus::WindowOrigin;
use crate::scheduler::{ManualClock, SUPPRESSION_DELAY};

const HISTORY: SectionId = SectionId { column: 0, index: 0 };

struct Harness {
    palette: Palette<ManualClock>,
    shell: Arc<ScriptedShell>,
    automation: Arc<RecordingAutomation>,
    _dir: TempDir,
}

fn harness(config: &str) -> Harness {
    let dir = TempDir::new().unwrap();
    let content = config.replace("{dir}", &dir.path().display().to_string());
    let config = parse_config(&content, &dir.path().join("config")).unwrap();

    let shell = Arc::new(ScriptedShell::default());
    let automation = Arc::new(RecordingAutomation::default());
    let backend: Arc<dyn AutomationBackend> = automation.clone();
    let palette = Palette::new(
        vec![config],
        shell.clone(),
        Some(backend),
        ManualClock::new(),
    );

    Harness {
        palette,
        shell,
        automation,
        _dir: dir,
    }
}

const HISTORY_CONFIG: &str = r#"
[History]
type = parse_command
value = history
interval = 4
clean = true
split = true
action = insert
"#;

fn raws(palette: &Palette<ManualClock>, id: SectionId) -> Vec<String> {
    palette
        .section(id)
        .and_then(SectionState::items)
        .map(|items| items.items().iter().map(|i| i.raw().to_string()).collect())
        .unwrap_or_default()
}

fn burst(palette: &mut Palette<ManualClock>) {
    for _ in 0..5 {
        palette.on_interaction();
        palette.interactions().clock().advance(Duration::from_millis(100));
    }
}

#[test]
fn test_startup_populates_every_section_kind() {
    let mut h = harness(
        r#"
[History]
type = parse_command
value = history
interval = 4
split = true

[Uptime]
type = display
value = uptime
interval = 10

[notes.txt]
type = log
value = {dir}/notes.txt
interval = 10
"#,
    );
    h.shell.set("history", "ls\ncargo build");
    h.shell.set("uptime", "up 2 days\n");

    let results = h.palette.refresh_all();

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|(_, r)| r.is_ok()));
    assert_eq!(raws(&h.palette, HISTORY), vec!["cargo build", "ls"]);
    assert_eq!(
        h.palette.section(SectionId::new(0, 1)).unwrap().content(),
        &SectionContent::Text("up 2 days\n".to_string())
    );
    assert_eq!(
        h.palette.section(SectionId::new(0, 2)).unwrap().content(),
        &SectionContent::Log(String::new())
    );
}

#[test]
fn test_tick_refreshes_when_idle() {
    let mut h = harness(HISTORY_CONFIG);
    h.shell.set("history", "a\nb");

    let outcome = h.palette.on_tick(HISTORY);

    assert!(matches!(outcome, TickOutcome::Refreshed(RefreshReport::Items(_))));
    assert_eq!(raws(&h.palette, HISTORY), vec!["b", "a"]);
}

#[test]
fn test_burst_suppresses_ticks_for_ten_seconds() {
    let mut h = harness(HISTORY_CONFIG);
    h.shell.set("history", "a");

    burst(&mut h.palette);
    let calls_before = h.shell.call_count("history");

    assert!(matches!(h.palette.on_tick(HISTORY), TickOutcome::Suppressed));
    assert_eq!(h.shell.call_count("history"), calls_before);

    h.palette.interactions().clock().advance(SUPPRESSION_DELAY);
    assert!(matches!(h.palette.on_tick(HISTORY), TickOutcome::Refreshed(_)));
    assert_eq!(h.shell.call_count("history"), calls_before + 1);
}

#[test]
fn test_four_interactions_do_not_suppress() {
    let mut h = harness(HISTORY_CONFIG);
    for _ in 0..4 {
        assert!(!h.palette.on_interaction());
    }
    assert!(matches!(h.palette.on_tick(HISTORY), TickOutcome::Refreshed(_)));
}

#[test]
fn test_clean_section_drops_stale_items() {
    let mut h = harness(HISTORY_CONFIG);
    h.shell.set("history", "c\nb\na");
    h.palette.on_tick(HISTORY);

    h.shell.set("history", "d\nc\na");
    let TickOutcome::Refreshed(RefreshReport::Items(diff)) = h.palette.on_tick(HISTORY) else {
        panic!("expected an items refresh");
    };

    assert_eq!(diff.removed, vec!["b"]);
    assert_eq!(diff.added, vec!["d"]);
    assert_eq!(raws(&h.palette, HISTORY), vec!["a", "c", "d"]);
}

#[test]
fn test_unclean_section_moves_recopied_entry_to_end() {
    let mut h = harness(
        r#"
[Clipboard]
type = parse_command
value = pbpaste
interval = 4
clean = false
"#,
    );
    h.shell.set("pbpaste", "first copy");
    h.palette.on_tick(HISTORY);
    h.shell.set("pbpaste", "second copy");
    h.palette.on_tick(HISTORY);
    h.shell.set("pbpaste", "first copy");
    h.palette.on_tick(HISTORY);

    assert_eq!(raws(&h.palette, HISTORY), vec!["second copy", "first copy"]);
}

#[test]
fn test_section_with_empty_command_is_inactive() {
    let mut h = harness(
        r#"
[Placeholder]
type = parse_command
value =
interval = 4

[Uptime]
type = display
value = uptime
interval = 10
"#,
    );

    assert_eq!(h.palette.active_sections(), vec![SectionId::new(0, 1)]);
    assert!(matches!(
        h.palette.refresh_section(SectionId::new(0, 0)),
        Err(PaletteError::InactiveSection { .. })
    ));
}

#[test]
fn test_unknown_section_tick_fails() {
    let mut h = harness(HISTORY_CONFIG);
    let outcome = h.palette.on_tick(SectionId::new(3, 0));
    assert!(matches!(
        outcome,
        TickOutcome::Failed(PaletteError::UnknownSection { .. })
    ));
}

#[test]
fn test_submit_note_appends_and_reloads_while_suppressed() {
    let mut h = harness(
        r#"
[notes.txt]
type = log
value = {dir}/notes.txt
interval = 10
"#,
    );
    burst(&mut h.palette);
    let at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(16, 45, 0)
        .unwrap();

    let report = h.palette.submit_note_at(HISTORY, "ship it", at).unwrap();

    assert_eq!(report, RefreshReport::Log);
    assert_eq!(
        h.palette.section(HISTORY).unwrap().content(),
        &SectionContent::Log("-- 10/19/26 04:45PM --\n\nship it\n".to_string())
    );
    assert!(matches!(h.palette.on_tick(HISTORY), TickOutcome::Suppressed));
}

#[test]
fn test_submit_note_to_command_section_is_rejected() {
    let mut h = harness(HISTORY_CONFIG);
    let result = h.palette.submit_note(HISTORY, "nope");

    assert!(matches!(result, Err(PaletteError::NotALog { .. })));
    assert!(h.palette.status().text().starts_with("Error:"));
}

#[test]
fn test_hover_shows_full_text_and_counts_as_interaction() {
    let mut h = harness(HISTORY_CONFIG);
    h.shell.set("history", "ls -la ;: list everything");
    h.palette.on_tick(HISTORY);

    h.palette.hover_item(HISTORY, 0).unwrap();

    assert_eq!(h.palette.status().text(), "ls -la ;: list everything");
    assert_eq!(h.palette.interactions().interactions().len(), 1);
}

#[test]
fn test_activate_inserts_raw_text_not_label() {
    let mut h = harness(HISTORY_CONFIG);
    h.shell.set("history", "git log --oneline ;: recent commits");
    h.palette.on_tick(HISTORY);

    let item = &h.palette.section(HISTORY).unwrap().items().unwrap().items()[0];
    assert_eq!(item.display(), "recent commits");

    let activation = h.palette.activate_item(HISTORY, 0).unwrap();

    assert_eq!(activation, Activation::Completed(ACKNOWLEDGEMENT.to_string()));
    assert_eq!(
        *h.automation.inserted.lock().unwrap(),
        vec!["git log --oneline ;: recent commits"]
    );
}

#[test]
fn test_activate_run_reports_to_status_area() {
    let mut h = harness(
        r#"
[Scripts]
type = parse_command
value = list-scripts
interval = 30
split = true
action = run
"#,
    );
    h.shell.set("list-scripts", "whoami");
    h.shell.set("whoami", "  alice\n");
    h.palette.refresh_all();

    let activation = h.palette.activate_item(HISTORY, 0).unwrap();
    assert!(matches!(activation, Activation::Dispatched(_)));

    let deadline = Instant::now() + Duration::from_secs(5);
    while h.palette.drain_run_results() == 0 {
        assert!(Instant::now() < deadline, "run result never arrived");
        thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(h.palette.status().text(), "alice");
    assert_eq!(h.palette.active_runs(), 0);
}

#[test]
fn test_activate_missing_item_reports_error() {
    let mut h = harness(HISTORY_CONFIG);
    let result = h.palette.activate_item(HISTORY, 7);

    assert!(matches!(result, Err(PaletteError::UnknownItem { index: 7, .. })));
    assert_eq!(h.palette.status().text(), "Error: Section 'History' has no item 7");
}

#[test]
fn test_activate_without_automation_reports_error() {
    let dir = TempDir::new().unwrap();
    let config = parse_config(HISTORY_CONFIG, &dir.path().join("config")).unwrap();
    let shell = Arc::new(ScriptedShell::default());
    shell.set("history", "ls");
    let mut palette = Palette::new(vec![config], shell, None, ManualClock::new());
    palette.refresh_all();

    let result = palette.activate_item(HISTORY, 0);

    assert!(matches!(
        result,
        Err(PaletteError::Executor(ExecutorError::AutomationUnavailable { .. }))
    ));
    assert!(palette.status().text().contains("No automation backend"));
}

#[test]
fn test_focus_events_collapse_and_restore() {
    let mut h = harness(HISTORY_CONFIG);
    let geometry = WindowGeometry {
        origin: WindowOrigin { x: 0.0, y: 100.0 },
        width: 300.0,
    };

    let collapse = h.palette.on_focus_changed(false, geometry);
    assert!(matches!(collapse, Some(DockChange::Collapse { .. })));
    assert!(h.palette.focus().is_collapsed());

    let restore = h.palette.on_focus_changed(true, geometry);
    assert_eq!(restore, Some(DockChange::Restore { to: geometry }));
}

#[test]
fn test_each_config_gets_its_own_column() {
    let dir = TempDir::new().unwrap();
    let first = parse_config(HISTORY_CONFIG, &dir.path().join("config")).unwrap();
    let second = parse_config(
        "[Uptime]\ntype = display\nvalue = uptime\ninterval = 10\n",
        Path::new("/etc/cmdpal/team.ini"),
    )
    .unwrap();

    let palette = Palette::new(
        vec![first, second],
        Arc::new(ScriptedShell::default()),
        None,
        ManualClock::new(),
    );

    assert_eq!(palette.columns().len(), 2);
    assert_eq!(palette.columns()[1].path(), Path::new("/etc/cmdpal/team.ini"));
    assert_eq!(
        palette.active_sections(),
        vec![SectionId::new(0, 0), SectionId::new(1, 0)]
    );
}

#[test]
fn test_display_section_split_shows_last_line() {
    let mut h = harness(
        r#"
[Load]
type = display
value = load
interval = 5
split = true
"#,
    );
    h.shell.set("load", "0.1\n0.2\n0.3");

    assert!(matches!(h.palette.on_tick(HISTORY), TickOutcome::Refreshed(RefreshReport::Text)));
    assert_eq!(
        h.palette.section(HISTORY).unwrap().content(),
        &SectionContent::Text("0.3".to_string())
    );
}
