use super::*;
use dotzhu_engine::ExternalCommand;

#[test]
fn test_reset_pending_keeps_backend_buffer() {
    let mut session = session();
    session.backend_mut().buffer = "\u{4e2d}".to_string(); // 中
    session.backend_mut().cursor = 1;
    tap_chord(&mut session, &[1]); // ㄓ pending

    let result = tap_chord(&mut session, &[0, 2, 4, 5]);
    assert!(result.consumed);
    assert!(!session.is_composing());
    // Backend text survives, only the braille part is gone
    assert_eq!(composition_of(&result), Some(("\u{4e2d}", 1)));
}

#[test]
fn test_toggle_language_commits_first() {
    let mut session = session();
    session.backend_mut().buffer = "\u{4e2d}".to_string(); // 中

    let result = tap_chord(&mut session, &[0, 4, 5, 6]);
    assert!(result.consumed);
    assert_eq!(session.language_mode(), LanguageMode::English);
    assert!(
        result
            .actions
            .contains(&HostAction::Commit("\u{4e2d}".to_string()))
    );
    assert!(result.actions.iter().any(|a| matches!(
        a,
        HostAction::ShowMessage { text, .. } if text == "\u{82f1}\u{6578}"
    )));

    // And back
    let result = tap_chord(&mut session, &[0, 4, 5, 6]);
    assert_eq!(session.language_mode(), LanguageMode::Chinese);
    assert!(result.actions.iter().any(|a| matches!(
        a,
        HostAction::ShowMessage { text, .. } if text == "\u{4e2d}\u{6587}"
    )));
}

#[test]
fn test_hint_message() {
    let mut session = session();
    tap_chord(&mut session, &[1]); // ㄓ pending

    let result = tap_chord(&mut session, &[0, 1]);
    assert!(result.consumed);
    let message = result.actions.iter().find_map(|a| match a {
        HostAction::ShowMessage {
            text,
            duration_secs,
        } => Some((text.clone(), *duration_secs)),
        _ => None,
    });
    let (text, duration) = message.expect("hint should show a message");
    assert!(text.contains("\u{3113}")); // pending ㄓ is described
    assert_eq!(duration, 8);
}

#[test]
fn test_cycle_display_style() {
    let mut session = session();
    tap_chord(&mut session, &[1]); // ㄓ pending

    // Phonetic -> Braille: the same pending cell renders as its glyph
    let result = tap_chord(&mut session, &[0, 1, 4, 5]);
    assert_eq!(session.display_style(), crate::config::DisplayStyle::Braille);
    assert_eq!(composition_of(&result), Some(("\u{2801}", 1)));

    // Braille -> Hidden: nothing is shown
    let result = tap_chord(&mut session, &[0, 1, 4, 5]);
    assert_eq!(session.display_style(), crate::config::DisplayStyle::Hidden);
    assert_eq!(composition_of(&result), Some(("", 0)));
}

#[test]
fn test_external_commands() {
    let mut session = session();

    let result = tap_chord(&mut session, &[0, 2, 4, 5, 6, 7]);
    assert_eq!(
        result.actions,
        vec![HostAction::RunCommand(ExternalCommand::OpenWebsite)]
    );

    let result = tap_chord(&mut session, &[0, 1, 5, 7]);
    assert_eq!(
        result.actions,
        vec![HostAction::RunCommand(ExternalCommand::UserPhraseEditor)]
    );
}

#[test]
fn test_unknown_hotkey_chord_beeps() {
    let mut session = session();

    let result = tap_chord(&mut session, &[0, 7]);
    assert!(result.consumed);
    assert!(has_beep(&result));
}

#[test]
fn test_hotkey_works_in_english_mode() {
    let mut session = english_session();

    let result = tap_chord(&mut session, &[0, 1, 2, 7]);
    assert_eq!(
        result.actions,
        vec![HostAction::RunCommand(ExternalCommand::BugReport)]
    );
}
