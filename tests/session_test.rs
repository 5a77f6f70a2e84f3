use std::io::Cursor;

use contactbot::interface::cli::{ReplOptions, SessionState, run_session};

fn quiet() -> ReplOptions {
    ReplOptions {
        prompt: String::new(),
        welcome: false,
        color: false,
    }
}

#[test]
fn test_end_to_end_contact_session() {
    let lines = [
        "add alice 111",
        "add bob 222",
        "change alice 999",
        "phone alice",
        "all",
        "exit",
    ];
    let mut input = Cursor::new(lines.join("\n"));
    let mut output = Vec::new();

    let session = run_session(&mut input, &mut output, &quiet()).unwrap();

    assert_eq!(session.state(), SessionState::Terminated);
    let output = String::from_utf8(output).unwrap();
    let expected = [
        "Contact added.",
        "Contact added.",
        "Contact updated.",
        "999",
        "alice: 999\nbob: 222",
        "Good bye!",
    ];
    assert_eq!(output, format!("{}\n", expected.join("\n")));
}

#[test]
fn test_mixed_case_and_errors() {
    let lines = [
        "",
        "HeLLo",
        "ADD Carol 555",
        "phone carol",
        "phone Carol",
        "change Carol",
        "frobnicate",
        "CLOSE",
    ];
    let mut input = Cursor::new(lines.join("\n"));
    let mut output = Vec::new();

    run_session(&mut input, &mut output, &quiet()).unwrap();

    let output = String::from_utf8(output).unwrap();
    let mut blocks = output.lines();
    assert_eq!(blocks.next(), Some("Enter a command or type 'help'."));
    assert_eq!(blocks.next(), Some("How can I help you?"));
    assert_eq!(blocks.next(), Some("Contact added."));
    assert_eq!(blocks.next(), Some("Contact 'carol' not found."));
    assert_eq!(blocks.next(), Some("555"));
    assert_eq!(blocks.next(), Some("Usage: change <name> <new_phone>"));
    assert_eq!(blocks.next(), Some("Unknown command: 'frobnicate'"));
    assert_eq!(blocks.next(), Some("Available commands:"));
    assert_eq!(blocks.last(), Some("Good bye!"));
}
