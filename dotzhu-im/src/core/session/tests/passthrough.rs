use super::*;

#[test]
fn test_modifier_combo_passes_through_and_clears_state() {
    let mut session = session();
    tap_chord(&mut session, &[1]); // ㄓ pending

    let ctrl_c = KeyEvent::new(
        Keysym('c' as u32),
        KeyModifiers::new().with_control(true),
        true,
    );
    let result = session.key_down(&ctrl_c);
    assert!(!result.consumed);
    assert!(!session.is_composing());
}

#[test]
fn test_modifier_key_itself_passes_through() {
    let mut session = session();

    let result = session.key_down(&KeyEvent::press(Keysym::SHIFT_L));
    assert!(!result.consumed);
}

#[test]
fn test_unready_backend_passes_everything_through() {
    let mut session = session();
    session.backend_mut().unavailable = true;

    let result = session.key_down(&KeyEvent::press(dot_keysym(1)));
    assert!(!result.consumed);
}

#[test]
fn test_navigation_keys_pass_through_when_idle() {
    let mut session = session();

    let result = session.key_down(&KeyEvent::press(Keysym::LEFT));
    assert!(!result.consumed);
}

#[test]
fn test_navigation_keys_consumed_while_composing() {
    let mut session = session();
    tap_chord(&mut session, &[1]);

    let down = session.key_down(&KeyEvent::press(Keysym::LEFT));
    assert!(down.consumed);
    let up = session.key_up(&KeyEvent::release(Keysym::LEFT));
    assert!(up.consumed);
    // The pending composition is untouched
    assert!(session.is_composing());
}

#[test]
fn test_unclaimed_release_passes_through() {
    let mut session = session();

    let result = session.key_up(&KeyEvent::release(Keysym('x' as u32)));
    assert!(!result.consumed);
}
