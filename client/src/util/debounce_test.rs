use super::*;

#[test]
fn default_delay_is_300ms() {
    assert_eq!(Debouncer::default().delay(), Duration::from_millis(300));
}

#[test]
fn single_input_fires() {
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.schedule();
    assert!(debouncer.should_fire(ticket));
}

#[test]
fn three_keystrokes_within_window_fire_once() {
    let mut debouncer = Debouncer::default();
    // Timers for all three keystrokes are armed before any of them elapses.
    let tickets = [debouncer.schedule(), debouncer.schedule(), debouncer.schedule()];

    let fired = tickets.iter().filter(|t| debouncer.should_fire(**t)).count();
    assert_eq!(fired, 1);
    assert!(debouncer.should_fire(tickets[2]));
}

#[test]
fn inputs_after_window_each_fire() {
    let mut debouncer = Debouncer::default();
    let first = debouncer.schedule();
    let first_fired = debouncer.should_fire(first);
    let second = debouncer.schedule();
    assert!(first_fired);
    assert!(debouncer.should_fire(second));
}

#[test]
fn cancel_drops_pending_ticket() {
    let mut debouncer = Debouncer::default();
    let ticket = debouncer.schedule();
    debouncer.cancel();
    assert!(!debouncer.should_fire(ticket));
}

// =============================================================
// DebouncedInput
// =============================================================

#[test]
fn three_keystrokes_settle_once_on_the_last_value() {
    let mut field = DebouncedInput::new("");
    let timers = [field.input("h".to_owned()), field.input("ha".to_owned()), field.input("hal".to_owned())];
    assert_eq!(field.raw(), "hal");
    assert_eq!(field.settled(), "");

    let moves = timers.into_iter().filter(|ticket| field.elapse(*ticket)).count();
    assert_eq!(moves, 1);
    assert_eq!(field.settled(), "hal");
}

#[test]
fn retyping_the_settled_value_does_not_move_it() {
    let mut field = DebouncedInput::new("doom");
    let erase = field.input("doo".to_owned());
    let retype = field.input("doom".to_owned());
    assert!(!field.elapse(erase));
    assert!(!field.elapse(retype));
    assert_eq!(field.settled(), "doom");
}

#[test]
fn set_now_discards_pending_keystroke() {
    let mut field = DebouncedInput::new("");
    let pending = field.input("zel".to_owned());
    field.set_now(String::new());
    assert!(!field.elapse(pending));
    assert_eq!(field.raw(), "");
    assert_eq!(field.settled(), "");
}
