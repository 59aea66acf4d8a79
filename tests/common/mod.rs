// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use bank_session::application::{SessionConfig, SessionReport, run_session};

/// Helper to run a full session over scripted input lines.
/// Returns the report and everything written to the console.
pub fn run_script(lines: &[&str]) -> Result<(SessionReport, String)> {
    run_script_with(SessionConfig::default(), lines)
}

/// Same as [`run_script`] with preset startup values.
pub fn run_script_with(config: SessionConfig, lines: &[&str]) -> Result<(SessionReport, String)> {
    let input = script(lines);
    let mut output = Vec::new();
    let report = run_session(input.as_bytes(), &mut output, config)?;
    Ok((report, String::from_utf8(output)?))
}

/// Join lines into console input, one line per prompt.
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Account number and name lines that open every standard session.
pub const OPENING: [&str; 2] = ["1001", "Jane Doe"];

/// Prefix `steps` with the standard opening lines.
pub fn with_opening<'a>(steps: &[&'a str]) -> Vec<&'a str> {
    OPENING.iter().copied().chain(steps.iter().copied()).collect()
}

/// Lines printed in response to user input, with prompts and the menu removed.
pub fn responses(transcript: &str) -> Vec<String> {
    let prompts = [
        bank_session::application::ACCOUNT_NUMBER_PROMPT,
        bank_session::application::NAME_PROMPT,
        bank_session::application::DEPOSIT_PROMPT,
        bank_session::application::WITHDRAW_PROMPT,
        "Enter choice: ",
    ];
    let menu_lines = [
        "--- BANK MENU ---",
        "1. Deposit",
        "2. Withdraw",
        "3. Check Balance",
        "4. Exit",
    ];

    transcript
        .lines()
        .map(|line| {
            let mut line = line;
            while let Some(prompt) = prompts.iter().find(|p| line.starts_with(*p)) {
                line = &line[prompt.len()..];
            }
            line.to_string()
        })
        .filter(|line| !line.is_empty() && !menu_lines.contains(&line.as_str()))
        .collect()
}
