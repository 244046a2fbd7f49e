use std::io::Cursor;
use std::path::PathBuf;

use jotpad_core::repository::DEFAULT_STORAGE_KEY;
use jotpad_core::view::NotesPanel;
use jotpad_core::{AppController, MemoryStore, NoteId, NoteRepository, StoreNoteRepository};
use pretty_assertions::assert_eq;

use crate::commands::add::run_add;
use crate::commands::common::{format_list_lines, StoreLocation};
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::shell::{is_yes, Shell, ShellCommand};

type MemoryController = AppController<StoreNoteRepository<MemoryStore>, NotesPanel>;

fn memory_controller() -> MemoryController {
    AppController::new(StoreNoteRepository::new(MemoryStore::new()), NotesPanel::new()).unwrap()
}

fn run_script(controller: &mut MemoryController, script: &str, assume_yes: bool) -> String {
    let mut shell = Shell::new(Cursor::new(script.to_string()), Vec::new(), assume_yes);
    shell.run(controller).unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

fn stored_titles(controller: &MemoryController) -> Vec<String> {
    controller
        .repository()
        .list_all()
        .unwrap()
        .into_iter()
        .map(|note| note.title)
        .collect()
}

#[test]
fn parse_shell_commands() {
    assert_eq!(ShellCommand::parse("new\n"), Ok(ShellCommand::New));
    assert_eq!(ShellCommand::parse("  "), Ok(ShellCommand::Empty));
    assert_eq!(
        ShellCommand::parse("select 12"),
        Ok(ShellCommand::Select("12".to_string()))
    );
    assert_eq!(
        ShellCommand::parse("title   Two  spaces "),
        Ok(ShellCommand::Title("  Two  spaces ".to_string()))
    );
    assert_eq!(
        ShellCommand::parse("body first\\nsecond"),
        Ok(ShellCommand::Body("first\nsecond".to_string()))
    );
    assert_eq!(ShellCommand::parse("EXIT"), Ok(ShellCommand::Quit));
    assert!(ShellCommand::parse("delete").is_err());
    assert!(ShellCommand::parse("frobnicate").is_err());
}

#[test]
fn is_yes_accepts_common_answers() {
    assert!(is_yes("y\n"));
    assert!(is_yes(" YES "));
    assert!(!is_yes("n"));
    assert!(!is_yes(""));
    assert!(!is_yes("yep"));
}

#[test]
fn shell_starts_with_empty_pad() {
    let mut controller = memory_controller();
    let output = run_script(&mut controller, "quit\n", false);

    assert!(output.contains("No notes yet"));
    assert!(!output.contains("== Editor =="));
}

#[test]
fn shell_new_then_edit_fields() {
    let mut controller = memory_controller();
    let output = run_script(
        &mut controller,
        "new\ntitle  Groceries \nbody milk\\neggs\nquit\n",
        false,
    );

    let active = controller.active_note().unwrap();
    assert_eq!(active.title, "Groceries");
    assert_eq!(active.body, "milk\neggs");
    assert!(output.contains("> [1] Groceries"));
    assert!(output.contains("== Editor =="));
}

#[test]
fn shell_title_without_open_note_is_refused() {
    let mut controller = memory_controller();
    let output = run_script(&mut controller, "title Nothing here\n", false);

    assert!(output.contains("No note open"));
    assert!(controller.notes().is_empty());
    assert_eq!(
        controller.repository().store().document(DEFAULT_STORAGE_KEY),
        None
    );
}

#[test]
fn shell_select_switches_editor() {
    let mut controller = memory_controller();
    run_script(
        &mut controller,
        "new\ntitle First\nnew\ntitle Second\nselect 1\n",
        false,
    );

    assert_eq!(controller.active_note().unwrap().id, NoteId::new(1));
    assert_eq!(controller.view().editor().title(), "First");
}

#[test]
fn shell_select_unknown_reports() {
    let mut controller = memory_controller();
    let output = run_script(&mut controller, "new\nselect 42\n", false);
    assert!(output.contains("No note with id 42"));
    assert_eq!(controller.active_note().unwrap().id, NoteId::new(1));
}

#[test]
fn shell_delete_asks_and_honours_decline() {
    let mut controller = memory_controller();
    let output = run_script(
        &mut controller,
        "new\ntitle Keep me\ndelete 1\nn\n",
        false,
    );

    assert!(output.contains("Are you sure you want to delete this note? \"Keep me\" [y/N]"));
    assert!(output.contains("Delete cancelled"));
    assert_eq!(stored_titles(&controller), vec!["Keep me".to_string()]);
}

#[test]
fn shell_delete_confirmed_activates_next_note() {
    let mut controller = memory_controller();
    run_script(
        &mut controller,
        "new\ntitle Old\nnew\ntitle New\ndelete 2\nyes\n",
        false,
    );

    assert_eq!(stored_titles(&controller), vec!["Old".to_string()]);
    assert_eq!(controller.active_note().unwrap().title, "Old");
}

#[test]
fn shell_delete_last_note_hides_editor() {
    let mut controller = memory_controller();
    let output = run_script(&mut controller, "new\ndelete 1\n", true);

    assert!(controller.notes().is_empty());
    assert!(!controller.view().editor().is_visible());
    assert!(output.trim_end().ends_with(">"));
}

#[test]
fn shell_reports_unknown_commands_and_continues() {
    let mut controller = memory_controller();
    let output = run_script(&mut controller, "launch\nnew\n", false);
    assert!(output.contains("Unknown command `launch`"));
    assert_eq!(controller.notes().len(), 1);
}

#[test]
fn one_shot_commands_share_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let location = StoreLocation {
        data_dir: dir.path(),
        key: DEFAULT_STORAGE_KEY,
    };

    let mut out = Vec::new();
    run_add(Some("  Plan "), Some("write tests"), &location, &mut out).unwrap();
    run_add(None, None, &location, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");

    let mut out = Vec::new();
    run_edit("1", None, Some("ship it"), &location, &mut out).unwrap();

    let mut out = Vec::new();
    run_list(true, &location, &mut out).unwrap();
    let listed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[0]["title"], "Plan");
    assert_eq!(listed[0]["body"], "ship it");
    assert_eq!(listed[1]["id"], 2);

    let mut input = Cursor::new("y\n");
    let mut out = Vec::new();
    run_delete("2", false, &location, &mut input, &mut out).unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("(untitled)") || printed.contains("\"\""));
    assert!(printed.ends_with("2\n"));

    let mut out = Vec::new();
    run_list(false, &location, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("1 "));
}

#[test]
fn edit_unknown_note_fails() {
    let dir = tempfile::tempdir().unwrap();
    let location = StoreLocation {
        data_dir: dir.path(),
        key: DEFAULT_STORAGE_KEY,
    };

    let err = run_edit("9", Some("x"), None, &location, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::NoteNotFound(id) if id == "9"));

    let err = run_edit("9", None, None, &location, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::NothingToEdit));
}

#[test]
fn delete_unknown_note_fails() {
    let dir = tempfile::tempdir().unwrap();
    let location = StoreLocation {
        data_dir: dir.path(),
        key: "work",
    };
    let err = run_delete("3", true, &location, &mut Cursor::new(""), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::NoteNotFound(_)));
}

#[test]
fn format_list_lines_marks_untitled() {
    let mut controller = memory_controller();
    controller.add_note().unwrap();
    let lines = format_list_lines(controller.view().list().items());
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1 "));
    assert!(lines[0].contains("(untitled)"));
}

#[test]
fn config_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = CliConfig::load_from_path(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, CliConfig::default());
    assert!(config.confirm_delete);
    assert_eq!(config.resolve_storage_key(None), DEFAULT_STORAGE_KEY);
}

#[test]
fn config_values_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"data_dir":"/tmp/notes","storage_key":"work","confirm_delete":false}"#,
    )
    .unwrap();

    let config = CliConfig::load_from_path(&path).unwrap();
    assert!(!config.confirm_delete);
    assert_eq!(config.resolve_storage_key(None), "work");
    assert_eq!(config.resolve_storage_key(Some(" personal ".into())), "personal");
    assert_eq!(config.resolve_storage_key(Some("  ".into())), "work");
    assert_eq!(
        config.resolve_data_dir(Some(PathBuf::from("/explicit"))),
        PathBuf::from("/explicit")
    );
}

#[test]
fn config_rejects_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"colour":"blue"}"#).unwrap();
    assert!(CliConfig::load_from_path(&path).is_err());
}
