use super::{setup_interpreter, setup_interpreter_with, RecordingEffects};
use crate::terminal::{CommandKind, Evaluation};

#[test]
fn test_new_interpreter_shows_welcome() {
    let (interpreter, _) = setup_interpreter();
    let history = interpreter.history();
    assert_eq!(history.lines(), history.welcome());
    assert_eq!(history.lines(), interpreter.content().terminal.welcome.as_slice());
}

#[test]
fn test_unknown_command_appends_exactly_two_lines() {
    let (mut interpreter, _) = setup_interpreter();
    for input in ["sudo rm -rf /", "foo", "  Vim  file.txt", "hel"] {
        let before = interpreter.history().len();
        let eval = interpreter.submit(input);
        let lines = interpreter.history().lines();
        assert_eq!(lines.len(), before + 2, "input {:?}", input);

        let token = input.split_whitespace().next().unwrap().to_lowercase();
        assert_eq!(eval, Evaluation::NotFound { token: token.clone() });
        assert_eq!(lines[before], format!("$ {}", input));
        assert!(lines[before + 1].contains(&token));
    }
}

#[test]
fn test_blank_input_never_changes_history() {
    let (mut interpreter, _) = setup_interpreter();
    interpreter.submit("about");
    let before = interpreter.history().lines().to_vec();
    for input in ["", " ", "\t", "   \t  "] {
        assert_eq!(interpreter.submit(input), Evaluation::Ignored);
        assert_eq!(interpreter.history().lines(), before.as_slice());
    }
}

#[test]
fn test_help_appends_echo_and_menu() {
    let (mut interpreter, _) = setup_interpreter();
    let help = interpreter.content().terminal.help.clone();
    let before = interpreter.history().len();

    let eval = interpreter.submit("help");
    assert_eq!(
        eval,
        Evaluation::Ran {
            command: CommandKind::Help,
            appended: help.len() + 1
        }
    );
    let lines = interpreter.history().lines();
    assert_eq!(lines[before], "$ help");
    assert_eq!(&lines[before + 1..], help.as_slice());

    // second call produces the same block again
    interpreter.submit("help");
    let lines = interpreter.history().lines();
    assert_eq!(&lines[lines.len() - help.len()..], help.as_slice());
}

#[test]
fn test_command_token_is_case_insensitive() {
    let (mut interpreter, _) = setup_interpreter();
    let eval = interpreter.submit("HeLp");
    assert!(matches!(eval, Evaluation::Ran { command: CommandKind::Help, .. }));
    let welcome_len = interpreter.history().welcome().len();
    assert_eq!(interpreter.history().lines()[welcome_len], "$ HeLp");
}

#[test]
fn test_clear_resets_to_welcome() {
    let (mut interpreter, _) = setup_interpreter();
    interpreter.submit("about");
    interpreter.submit("nope");
    interpreter.submit("echo still here");
    assert!(interpreter.history().len() > interpreter.history().welcome().len());

    assert_eq!(interpreter.submit("clear"), Evaluation::Cleared);
    let history = interpreter.history();
    assert_eq!(history.lines(), history.welcome());
    assert!(!history.is_empty());
}

#[test]
fn test_echo_output() {
    let (mut interpreter, _) = setup_interpreter();
    interpreter.submit("echo hello world");
    let lines = interpreter.history().lines();
    assert_eq!(lines[lines.len() - 2], "$ echo hello world");
    assert_eq!(lines[lines.len() - 1], "hello world");

    interpreter.submit("echo");
    let lines = interpreter.history().lines();
    assert_eq!(lines[lines.len() - 2], "$ echo");
    assert_eq!(lines[lines.len() - 1], "");
}

#[test]
fn test_github_opens_link_and_acknowledges() {
    let (mut interpreter, effects) = setup_interpreter();
    let eval = interpreter.submit("github");
    assert_eq!(
        eval,
        Evaluation::Ran {
            command: CommandKind::Github,
            appended: 2
        }
    );
    let opened = effects.opened.lock().unwrap();
    assert_eq!(opened.as_slice(), [interpreter.content().social.github.url.clone()]);
}

#[test]
fn test_resume_triggers_download() {
    let (mut interpreter, effects) = setup_interpreter();
    interpreter.submit("resume");
    let downloads = effects.downloads.lock().unwrap();
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].1, "resume.pdf");
}

#[test]
fn test_effect_failures_are_swallowed() {
    let (mut interpreter, effects) = setup_interpreter_with(RecordingEffects::failing());
    let before = interpreter.history().len();

    assert!(matches!(interpreter.submit("github"), Evaluation::Ran { .. }));
    assert!(matches!(interpreter.submit("resume"), Evaluation::Ran { .. }));

    // acknowledgement lines still land in the history
    assert_eq!(interpreter.history().len(), before + 4);
    assert_eq!(effects.opened.lock().unwrap().len(), 1);
    assert_eq!(effects.downloads.lock().unwrap().len(), 1);
}

#[test]
fn test_date_uses_effects_clock() {
    let (mut interpreter, _) = setup_interpreter();
    interpreter.submit("date");
    let lines = interpreter.history().lines();
    assert_eq!(lines.last().unwrap(), "3/4/2025, 5:06:07 AM");
}

#[test]
fn test_echo_line_keeps_raw_input() {
    let (mut interpreter, _) = setup_interpreter();
    interpreter.submit("  echo   hi there  ");
    let lines = interpreter.history().lines();
    assert_eq!(lines[lines.len() - 2], "$   echo   hi there  ");
    assert_eq!(lines[lines.len() - 1], "hi there");

    interpreter.submit(" NOPE ");
    let lines = interpreter.history().lines();
    assert_eq!(lines[lines.len() - 2], "$  NOPE ");
}
