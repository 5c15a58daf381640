use super::*;

#[test]
fn test_letter_cells() {
    let mut session = english_session();

    tap_chord(&mut session, &[1]); // a
    tap_chord(&mut session, &[1, 2]); // b
    let result = tap_chord(&mut session, &[0]); // space
    assert!(result.consumed);
    assert_eq!(session.backend().keys, "ab ");
}

#[test]
fn test_caps_lock_uppercases() {
    let mut session = english_session();

    let caps = KeyModifiers::new().with_caps_lock(true);
    tap_chord_mods(&mut session, &[1], caps);
    assert_eq!(session.backend().keys, "A");
}

#[test]
fn test_digit_cells() {
    let mut session = english_session();

    tap_chord(&mut session, &[2]); // 1
    tap_chord(&mut session, &[3, 5, 6]); // 0
    assert_eq!(session.backend().keys, "10");
}

#[test]
fn test_digit_keys_pass_to_backend() {
    let mut session = english_session();

    let result = session.key_down(&KeyEvent::press(Keysym('7' as u32)));
    assert!(result.consumed);
    assert_eq!(session.backend().keys, "7");
}

#[test]
fn test_unassigned_cell_beeps() {
    let mut session = english_session();

    let result = tap_chord(&mut session, &[7, 8]);
    assert!(has_beep(&result));
    assert!(session.backend().keys.is_empty());
}

#[test]
fn test_braille_unicode_output_commits_patterns() {
    let mut session = english_session();

    // Toggle unicode output on
    let result = tap_chord(&mut session, &[0, 1, 3, 6]);
    assert!(result.consumed);

    let result = tap_chord(&mut session, &[1, 2]);
    assert_eq!(
        result.actions,
        vec![HostAction::Commit("\u{2803}".to_string())] // ⠃ dots 1-2
    );
    // Nothing goes through the key path
    assert!(session.backend().keys.is_empty());
}

#[test]
fn test_unicode_toggle_commits_stranded_buffer() {
    let mut session = english_session();
    session.backend_mut().buffer = "ab".to_string();

    let result = tap_chord(&mut session, &[0, 1, 3, 6]);
    assert!(
        result
            .actions
            .contains(&HostAction::Commit("ab".to_string()))
    );
}
