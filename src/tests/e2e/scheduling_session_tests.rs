// End to end sessions: scripted lines in, captured console out.

use crate::modules::scheduling::adapters::inbound::repl::documentation::DOCUMENTATION;
use crate::shared::infrastructure::console::in_memory::{CapturedConsole, Output, ScriptedLineReader};
use crate::shared::infrastructure::console::stdio::BufferedLineReader;
use crate::shared::infrastructure::record_store::RecordStore;
use crate::shell::session::Session;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::empty_state;
use rstest::{fixture, rstest};
use std::io::Cursor;
use std::sync::Arc;

const SETUP: [&str; 3] = [
    "CREATE EVENT an_event",
    "CREATE SPEAKER John",
    "CREATE SPEAKER Bob",
];

#[fixture]
fn before_each() -> (AppState, Arc<CapturedConsole>) {
    (empty_state(), Arc::new(CapturedConsole::new()))
}

async fn run(state: &AppState, console: &Arc<CapturedConsole>, lines: &[&str]) {
    let script: Vec<&str> = SETUP.iter().chain(lines).copied().collect();
    let mut session = Session::new(state.clone(), ScriptedLineReader::new(script), console.clone());
    session.run().await.expect("session failed");
}

#[rstest]
#[tokio::test]
async fn it_should_schedule_and_print_talks_in_start_time_order(
    before_each: (AppState, Arc<CapturedConsole>),
) {
    let (state, console) = before_each;
    run(
        &state,
        &console,
        &[
            "CREATE TALK an_event 'Closing Talk' 10:30am 12:00pm Bob",
            "CREATE TALK an_event 'Opening Talk' 9:00am 10:00am John",
            "PRINT TALKS an_event",
            "EXIT",
        ],
    )
    .await;

    assert_eq!(
        console.outputs(),
        vec![
            Output::Info(DOCUMENTATION.to_string()),
            Output::Info(r#"Event "an_event" has been created"#.to_string()),
            Output::Info(r#"Speaker "John" has been created"#.to_string()),
            Output::Info(r#"Speaker "Bob" has been created"#.to_string()),
            Output::Info(r#"Talk "Closing Talk" has been created"#.to_string()),
            Output::Info(r#"Talk "Opening Talk" has been created"#.to_string()),
            Output::Info(
                "9:00am – 10:00am\n  Opening Talk presented by John\n10:30am – 12:00pm\n  Closing Talk presented by Bob"
                    .to_string()
            ),
        ]
    );
    assert_eq!(state.talks.all().await.len(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_overlapping_talk_without_storing_it(
    before_each: (AppState, Arc<CapturedConsole>),
) {
    let (state, console) = before_each;
    run(
        &state,
        &console,
        &[
            "CREATE TALK an_event 'Talk A' 9:00am 10:00am John",
            "CREATE TALK an_event 'Talk B' 9:30am 10:30am Bob",
            "EXIT",
        ],
    )
    .await;

    assert_eq!(
        console.errors(),
        vec!["Error: Talk is not valid.\n       Talk overlaps with Talk A (9:00am – 10:00am).".to_string()]
    );
    let talks = state.talks.all().await;
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0].name, "Talk A");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_a_talk_for_an_unknown_event(before_each: (AppState, Arc<CapturedConsole>)) {
    let (state, console) = before_each;
    run(
        &state,
        &console,
        &["CREATE TALK nowhere 'My Talk' 9:00am 10:00am John", "EXIT"],
    )
    .await;

    assert_eq!(
        console.errors(),
        vec!["Error: Talk is not valid.\n       Event \"nowhere\" does not exist.".to_string()]
    );
    assert!(state.talks.all().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_aggregate_every_violation_of_a_talk(before_each: (AppState, Arc<CapturedConsole>)) {
    let (state, console) = before_each;
    run(
        &state,
        &console,
        &["CREATE TALK nowhere \"My Talk\" 1900 10:00am Nobody", "EXIT"],
    )
    .await;

    assert_eq!(
        console.errors(),
        vec![
            "Error: Talk is not valid.\n       Event \"nowhere\" does not exist.\n       Could not understand start time \"1900\".\n       Speaker \"Nobody\" does not exist."
                .to_string()
        ]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_report_an_event_without_talks_and_print_nothing(
    before_each: (AppState, Arc<CapturedConsole>),
) {
    let (state, console) = before_each;
    run(&state, &console, &["PRINT TALKS an_event", "EXIT"]).await;

    assert_eq!(
        console.errors(),
        vec![r#"There are no talks registered for "an_event""#.to_string()]
    );
    assert_eq!(console.infos().len(), 1 + SETUP.len());
}

#[rstest]
#[tokio::test]
async fn it_should_show_help_for_unknown_commands_and_keep_going(
    before_each: (AppState, Arc<CapturedConsole>),
) {
    let (state, console) = before_each;
    run(
        &state,
        &console,
        &["", "DANCE", "CREATE TALK an_event 'My Talk' 9:00am 10:00am John", "EXIT"],
    )
    .await;

    let documentation_shown = console
        .infos()
        .iter()
        .filter(|message| message.as_str() == DOCUMENTATION)
        .count();
    assert_eq!(documentation_shown, 3);
    assert!(console.fatals().is_empty());
    assert_eq!(state.talks.all().await.len(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_start_from_scratch_after_a_reset(before_each: (AppState, Arc<CapturedConsole>)) {
    let (state, console) = before_each;
    run(
        &state,
        &console,
        &["CREATE TALK an_event 'My Talk' 9:00am 10:00am John", "EXIT"],
    )
    .await;
    state.reset().await;

    let console = Arc::new(CapturedConsole::new());
    let mut session = Session::new(
        state.clone(),
        ScriptedLineReader::new(["CREATE TALK an_event 'My Talk' 9:00am 10:00am John", "EXIT"]),
        console.clone(),
    );
    session.run().await.expect("session failed");

    assert_eq!(
        console.errors(),
        vec![
            "Error: Talk is not valid.\n       Event \"an_event\" does not exist.\n       Speaker \"John\" does not exist."
                .to_string()
        ]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_keep_going_after_a_line_that_is_not_utf8(
    before_each: (AppState, Arc<CapturedConsole>),
) {
    let (state, console) = before_each;
    let input = b"CREATE EVENT a\xff\nCREATE EVENT ev\nEXIT\n".to_vec();
    let mut session = Session::new(
        state.clone(),
        BufferedLineReader::new(Cursor::new(input)),
        console.clone(),
    );
    session.run().await.expect("session failed");

    assert_eq!(
        console.infos()[1..],
        [
            "Event \"a\u{FFFD}\" has been created".to_string(),
            r#"Event "ev" has been created"#.to_string(),
        ]
    );
    assert_eq!(state.events.all().await.len(), 2);
}
