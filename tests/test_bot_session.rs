//! Whole REPL sessions driven through in-memory I/O.

use contact_book::{bot, AddressBook, Bot, Config, ContactRepository, Record};

async fn session(bot: &mut Bot, input: &str) -> Vec<String> {
    session_bytes(bot, input.as_bytes()).await
}

async fn session_bytes(bot: &mut Bot, input: &[u8]) -> Vec<String> {
    let mut output = Vec::new();
    bot::run(bot, input, &mut output).await.unwrap();

    let text = String::from_utf8(output).unwrap();
    text.lines()
        .map(|line| line.trim_start_matches(bot::PROMPT).to_string())
        .collect()
}

fn new_bot() -> Bot {
    Bot::new(&Config::default())
}

#[tokio::test]
async fn test_full_session() {
    let mut bot = new_bot();
    let lines = session(
        &mut bot,
        "hello\n\
         add Alice 1111111111\n\
         add Alice 2222222222\n\
         phone Alice\n\
         change Alice 3333333333\n\
         phone Alice\n\
         add-birthday Alice 05.06.1990\n\
         show-birthday Alice\n\
         all\n\
         close\n",
    )
    .await;

    assert_eq!(
        lines,
        vec![
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "The phone number for Alice is 1111111111.",
            "Contact updated.",
            "The phone number for Alice is 3333333333.",
            "Birthday added for Alice.",
            "The birthday of Alice is 05.06.1990.",
            "Contact name: Alice, phones: 3333333333, birthday: 05.06.1990",
            "Good bye!",
        ]
    );
}

#[tokio::test]
async fn test_errors_do_not_stop_the_loop() {
    let mut bot = new_bot();
    let lines = session(
        &mut bot,
        "add\n\
         add Bob 12\n\
         birthdays soon\n\
         phone\n\
         fly\n\
         all\n\
         exit\n",
    )
    .await;

    assert_eq!(
        lines,
        vec![
            "Welcome to the assistant bot!",
            "Enter the argument for the command",
            "Not a valid value",
            "Not a valid value",
            "Enter the argument for the command",
            "Invalid command.",
            "No contacts found.",
            "Good bye!",
        ]
    );
}

#[tokio::test]
async fn test_phone_without_numbers_reports_index_error() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Ghost").unwrap());
    let mut bot = Bot::with_book(book, &Config::default());

    let lines = session(&mut bot, "phone Ghost\nexit\n").await;
    assert_eq!(lines[1], "Invalid index in sequence");
}

#[tokio::test]
async fn test_commands_are_case_insensitive_names_are_not() {
    let mut bot = new_bot();
    let lines = session(&mut bot, "ADD Alice 1111111111\nPhone alice\nEXIT\n").await;

    assert_eq!(lines[1], "Contact added.");
    assert_eq!(lines[2], "Contact not found.");
    assert_eq!(lines[3], "Good bye!");
}

#[tokio::test]
async fn test_nothing_after_exit_is_processed() {
    let mut bot = new_bot();
    let lines = session(&mut bot, "exit\nadd Alice 1111111111\n").await;

    assert_eq!(lines, vec!["Welcome to the assistant bot!", "Good bye!"]);
    assert!(bot.book().is_empty());
}

#[tokio::test]
async fn test_blank_lines_are_ignored() {
    let mut bot = new_bot();
    let lines = session(&mut bot, "\n   \nhello\nexit\n").await;

    assert_eq!(
        lines,
        vec!["Welcome to the assistant bot!", "How can I help you?", "Good bye!"]
    );
}

#[tokio::test]
async fn test_birthdays_uses_configured_window() {
    let config = Config {
        birthday_window_days: 0,
        ..Config::default()
    };
    let mut bot = Bot::new(&config);

    let lines = session(&mut bot, "birthdays\nexit\n").await;
    assert_eq!(lines[1], "No upcoming birthdays in the next 0 days.");
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_session() {
    let mut bot = new_bot();
    let lines = session_bytes(
        &mut bot,
        b"hello\n\xff\xfe\nadd Alice 1111111111\nexit\n",
    )
    .await;

    assert_eq!(
        lines,
        vec![
            "Welcome to the assistant bot!",
            "How can I help you?",
            "Invalid command.",
            "Contact added.",
            "Good bye!",
        ]
    );
    assert!(bot.book().find("Alice").is_some());
}

#[tokio::test]
async fn test_invalid_utf8_in_name_is_stored_lossily() {
    let mut bot = new_bot();
    let lines = session_bytes(&mut bot, b"add Al\xffce 1111111111\nall\nexit\n").await;

    // The name decodes lossily and is stored as typed
    assert_eq!(lines[1], "Contact added.");
    assert_eq!(
        lines[2],
        "Contact name: Al\u{FFFD}ce, phones: 1111111111, birthday: not set"
    );
}

#[tokio::test]
async fn test_crlf_line_endings() {
    let mut bot = new_bot();
    let lines = session(&mut bot, "add Alice 1111111111\r\nphone Alice\r\nexit\r\n").await;

    assert_eq!(lines[1], "Contact added.");
    assert_eq!(lines[2], "The phone number for Alice is 1111111111.");
    assert_eq!(lines[3], "Good bye!");
}
