use super::*;

#[test]
fn test_pending_spliced_at_cursor() {
    let mut session = session();
    session.backend_mut().buffer = "\u{4e2d}\u{6587}".to_string(); // 中文
    session.backend_mut().cursor = 1;

    let result = tap_chord(&mut session, &[1]); // ㄓ
    assert_eq!(
        composition_of(&result),
        Some(("\u{4e2d}\u{3113}\u{6587}", 2)) // 中ㄓ文
    );
}

#[test]
fn test_cursor_clamped_to_buffer() {
    let mut session = session();
    session.backend_mut().buffer = "\u{4e2d}".to_string();
    session.backend_mut().cursor = 9;

    let result = tap_chord(&mut session, &[1]);
    assert_eq!(composition_of(&result), Some(("\u{4e2d}\u{3113}", 2)));
}

#[test]
fn test_committed_text_drained_before_display() {
    let mut session = session();
    session.backend_mut().committed = Some("\u{7af9}".to_string()); // 竹

    let result = tap_chord(&mut session, &[1]);
    let commit_index = result
        .actions
        .iter()
        .position(|a| matches!(a, HostAction::Commit(text) if text == "\u{7af9}"));
    let comp_index = result
        .actions
        .iter()
        .position(|a| matches!(a, HostAction::SetComposition { .. }));
    assert!(commit_index.unwrap() < comp_index.unwrap());
}

#[test]
fn test_multi_cell_unit_braille_display() {
    let mut session = session();
    tap_chord(&mut session, &[0, 1, 4, 5]); // style -> braille

    tap_chord(&mut session, &[1, 3]); // ㄍ so far
    let result = tap_chord(&mut session, &[1, 4, 5, 6]); // upgrades to ㄐㄧㄣ
    // Both typed cells remain visible as glyphs
    assert_eq!(
        composition_of(&result),
        Some(("\u{2805}\u{2839}", 2))
    );
}
