// tests/pty_session.rs

//! Drives the binary through a pseudo-terminal, the way a user sees it.

use rexpect::spawn;

#[test]
fn test_interactive_run_reaches_summary() {
    let mut session =
        spawn(env!("CARGO_BIN_EXE_color-map"), Some(5_000)).expect("Failed to spawn color-map");

    session.exp_string("0 | White | Blue").expect("first pair line");
    session.exp_string("12 | Black | Green").expect("middle pair line");
    session.exp_string("24 | Violet | Slate").expect("last pair line");
    session.exp_string("Total pairs: 25").expect("total line");
    session.exp_string("Color map printed with total pairs: 25").expect("summary line");
    session.exp_eof().expect("process exits after summary");
}
