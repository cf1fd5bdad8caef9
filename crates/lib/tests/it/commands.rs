//! Tests for the command queue and the file open/save flows built on it.

use std::path::PathBuf;

use corkboard::commands::{Command, CommandQueue, Target};
use corkboard::file;

use crate::helpers::*;

/// Writes `n`-post boards named after `names` and returns their paths
fn setup_board_files(dir: &tempfile::TempDir, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            file::save_board(dir.path().join(name), &setup_board(i + 1))
                .expect("Failed to save test board")
        })
        .collect()
}

// ===== QUEUE =====

#[test]
fn test_queue_starts_empty() {
    let queue = CommandQueue::new();
    for target in [Target::Application, Target::WidgetManager, Target::CurrentTab] {
        assert!(queue.is_empty(target));
        assert_eq!(queue.len(target), 0);
        assert!(queue.front(target).is_none());
    }
}

#[test]
fn test_pop_in_fifo_order() {
    let mut queue = CommandQueue::new();
    queue.push(Target::Application, Command::OpenFile, "first.lua");
    queue.push(Target::Application, Command::CloseAllTabs, String::new());

    assert_eq!(
        queue.pop(Target::Application),
        Some((Command::OpenFile, "first.lua".to_string()))
    );
    assert_eq!(
        queue.pop(Target::Application),
        Some((Command::CloseAllTabs, String::new()))
    );
    assert_eq!(queue.pop(Target::Application), None);
}

#[test]
fn test_report_error_targets_widget_manager() {
    let mut queue = CommandQueue::new();
    queue.report_error("Could not open file");

    assert!(queue.is_empty(Target::Application));
    let (command, message) = queue.pop(Target::WidgetManager).unwrap();
    assert_eq!(command, Command::CreateErrorWindow);
    assert_eq!(message, "Could not open file");
}

// ===== OPEN FLOW =====

#[test]
fn test_request_open_queues_each_path() {
    let mut dialog = ScriptedDialog::opening([PathBuf::from("a.lua"), PathBuf::from("b.lua")]);
    let mut queue = CommandQueue::new();

    assert_eq!(file::request_open(&mut dialog, &mut queue), 2);

    let queued: Vec<_> = queue.drain(Target::Application).collect();
    assert_eq!(
        queued,
        vec![
            (Command::OpenFile, "a.lua".to_string()),
            (Command::OpenFile, "b.lua".to_string()),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_request_open_rejects_non_utf8_paths() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let garbled = PathBuf::from(OsStr::from_bytes(b"bad\xff.lua"));
    let mut dialog = ScriptedDialog::opening([garbled, PathBuf::from("ok.lua")]);
    let mut queue = CommandQueue::new();

    assert_eq!(file::request_open(&mut dialog, &mut queue), 1);

    assert_eq!(
        queue.pop(Target::Application),
        Some((Command::OpenFile, "ok.lua".to_string()))
    );
    let (command, message) = queue.pop(Target::WidgetManager).unwrap();
    assert_eq!(command, Command::CreateErrorWindow);
    assert!(message.ends_with("the path is not valid UTF-8."));
}

#[test]
fn test_request_open_cancelled() {
    let mut dialog = ScriptedDialog::default();
    let mut queue = CommandQueue::new();

    assert_eq!(file::request_open(&mut dialog, &mut queue), 0);
    assert!(queue.is_empty(Target::Application));
    assert!(queue.is_empty(Target::WidgetManager));
}

#[test]
fn test_request_open_dialog_failure() {
    let mut dialog = ScriptedDialog::failing();
    let mut queue = CommandQueue::new();

    assert_eq!(file::request_open(&mut dialog, &mut queue), 0);
    let (command, message) = queue.pop(Target::WidgetManager).unwrap();
    assert_eq!(command, Command::CreateErrorWindow);
    assert_eq!(message, "File dialog failed: dialog unavailable");
}

#[test]
fn test_open_requested_boards() {
    let dir = tempfile::tempdir().unwrap();
    let paths = setup_board_files(&dir, &["one", "two"]);
    let mut dialog = ScriptedDialog::opening(paths.clone());
    let mut queue = CommandQueue::new();
    file::request_open(&mut dialog, &mut queue);

    let opened = file::open_requested_boards(&mut queue);

    assert_eq!(opened.len(), 2);
    assert_eq!(opened[0].0, paths[0]);
    assert_eq!(opened[0].1.len(), 1);
    assert_eq!(opened[1].1.len(), 2);
    assert!(queue.is_empty(Target::Application));
    assert!(queue.is_empty(Target::WidgetManager));
}

#[test]
fn test_open_failures_become_error_windows() {
    let dir = tempfile::tempdir().unwrap();
    let good = setup_board_files(&dir, &["good"]);
    let missing = dir.path().join("missing.lua");
    let mut queue = CommandQueue::new();
    queue.push(Target::Application, Command::OpenFile, missing.to_string_lossy());
    queue.push(Target::Application, Command::OpenFile, good[0].to_string_lossy());

    let opened = file::open_requested_boards(&mut queue);

    assert_eq!(opened.len(), 1);
    assert_eq!(queue.len(Target::WidgetManager), 1);
    let (_, message) = queue.pop(Target::WidgetManager).unwrap();
    assert!(message.contains("missing.lua"));
}

#[test]
fn test_other_application_commands_stay_queued() {
    let mut queue = CommandQueue::new();
    queue.push(Target::Application, Command::CloseAllTabs, "");
    queue.push(Target::Application, Command::OpenBoardOptions, "");

    assert!(file::open_requested_boards(&mut queue).is_empty());

    let left: Vec<_> = queue.drain(Target::Application).map(|(c, _)| c).collect();
    assert_eq!(left, vec![Command::CloseAllTabs, Command::OpenBoardOptions]);
}

// ===== SAVE FLOW =====

#[test]
fn test_request_save() {
    let dir = tempfile::tempdir().unwrap();
    let board = setup_connected_board(2, &[(2, 1)]);
    let mut dialog = ScriptedDialog::saving(dir.path().join("saved"));

    let written = file::request_save(&mut dialog, &board).unwrap();

    let written = written.expect("Save should not be cancelled");
    assert_eq!(written, dir.path().join("saved.lua"));
    assert_eq!(file::load_board(&written).unwrap(), board);
}

#[test]
fn test_request_save_cancelled_and_failing() {
    let board = setup_board(1);

    assert_eq!(file::request_save(&mut ScriptedDialog::default(), &board).unwrap(), None);

    let err = file::request_save(&mut ScriptedDialog::failing(), &board).unwrap_err();
    assert!(err.is_file_error());
}
