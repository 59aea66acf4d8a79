use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::domain::{Account, AccountError, AccountNumber, Cents, format_cents, parse_cents};

use super::AppError;

pub const ACCOUNT_NUMBER_PROMPT: &str = "Enter Account Number: ";
pub const NAME_PROMPT: &str = "Enter Name: ";
pub const MENU: &str = "\n--- BANK MENU ---\n\
                        1. Deposit\n\
                        2. Withdraw\n\
                        3. Check Balance\n\
                        4. Exit\n\
                        Enter choice: ";
pub const DEPOSIT_PROMPT: &str = "Enter amount to deposit: ";
pub const WITHDRAW_PROMPT: &str = "Enter amount to withdraw: ";

pub const DEPOSIT_OK: &str = "Amount Deposited Successfully!";
pub const WITHDRAW_OK: &str = "Amount Withdrawn Successfully!";
pub const INSUFFICIENT_BALANCE: &str = "Insufficient Balance!";
pub const BALANCE_LABEL: &str = "Current Balance: ";
pub const FAREWELL: &str = "Thank You!";
pub const INVALID_CHOICE: &str = "Invalid Choice!";
pub const INVALID_INPUT: &str = "Invalid Input!";
pub const INVALID_AMOUNT: &str = "Invalid Amount!";

/// A menu entry the user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

impl MenuChoice {
    /// Parse a line typed at the menu prompt. Anything other than 1-4 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::Deposit),
            2 => Some(MenuChoice::Withdraw),
            3 => Some(MenuChoice::CheckBalance),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user selected Exit.
    Exited,
    /// Input reached end-of-file before Exit was selected.
    InputClosed,
}

/// Values that skip their startup prompt when present.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub account_number: Option<AccountNumber>,
    pub name: Option<String>,
}

/// Result of a complete session run.
#[derive(Debug)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// `None` when input closed before the account was created.
    pub account: Option<Account>,
}

enum Flow {
    Continue,
    Exit,
}

#[derive(Clone, Copy)]
enum Movement {
    Deposit,
    Withdraw,
}

/// Interactive session over one account.
///
/// Owns the console it talks to: any `BufRead` for input and any `Write` for
/// output, so tests can drive it with in-memory buffers. Both are released
/// when the session is dropped.
pub struct AccountSession<R, W> {
    account: Account,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> AccountSession<R, W> {
    /// Collect the account number and name, then create the account with a zero balance.
    ///
    /// Returns `AppError::InputClosed` if input ends before both are known.
    pub fn open(mut input: R, mut output: W, config: SessionConfig) -> Result<Self, AppError> {
        let number = match config.account_number {
            Some(number) => number,
            None => read_account_number(&mut input, &mut output)?,
        };
        let name = match config.name.as_deref().and_then(normalize_name) {
            Some(name) => name,
            None => read_name(&mut input, &mut output)?,
        };

        let account = Account::new(number, name);
        info!(
            account = account.number(),
            name = account.name(),
            opened_at = %account.opened_at(),
            "session opened"
        );

        Ok(Self {
            account,
            input,
            output,
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    /// Run the menu loop until the user exits or input closes.
    pub fn run(&mut self) -> Result<SessionOutcome, AppError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!(balance = self.account.balance(), "session exited");
                    return Ok(SessionOutcome::Exited);
                }
                Err(AppError::InputClosed) => {
                    warn!(
                        balance = self.account.balance(),
                        "input closed, ending session"
                    );
                    return Ok(SessionOutcome::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu once and act on the selected entry.
    fn step(&mut self) -> Result<Flow, AppError> {
        let line = prompt(&mut self.input, &mut self.output, MENU)?;
        let Some(choice) = MenuChoice::parse(&line) else {
            debug!(input = line.trim(), "invalid menu choice");
            writeln!(self.output, "{INVALID_CHOICE}")?;
            return Ok(Flow::Continue);
        };

        self.execute(choice)
    }

    fn execute(&mut self, choice: MenuChoice) -> Result<Flow, AppError> {
        match choice {
            MenuChoice::Deposit => self.move_funds(Movement::Deposit)?,
            MenuChoice::Withdraw => self.move_funds(Movement::Withdraw)?,
            MenuChoice::CheckBalance => {
                writeln!(
                    self.output,
                    "{BALANCE_LABEL}{}",
                    format_cents(self.account.balance())
                )?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "{FAREWELL}")?;
                self.output.flush()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn move_funds(&mut self, movement: Movement) -> Result<(), AppError> {
        let label = match movement {
            Movement::Deposit => DEPOSIT_PROMPT,
            Movement::Withdraw => WITHDRAW_PROMPT,
        };
        let line = prompt(&mut self.input, &mut self.output, label)?;

        match self.apply(movement, &line) {
            Ok(balance) => {
                debug!(balance, "{}", success_message(movement));
                writeln!(self.output, "{}", success_message(movement))?;
            }
            Err(AppError::Account(AccountError::InsufficientFunds { balance, required })) => {
                debug!(balance, required, "withdrawal rejected");
                writeln!(self.output, "{INSUFFICIENT_BALANCE}")?;
            }
            Err(AppError::Account(e)) => {
                debug!(error = %e, "amount rejected");
                writeln!(self.output, "{INVALID_AMOUNT}")?;
            }
            Err(AppError::InvalidAmount(e)) => {
                debug!(error = %e, input = line.trim(), "amount rejected");
                writeln!(self.output, "{INVALID_AMOUNT}")?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn apply(&mut self, movement: Movement, line: &str) -> Result<Cents, AppError> {
        let amount = parse_cents(line)?;
        let balance = match movement {
            Movement::Deposit => self.account.deposit(amount)?,
            Movement::Withdraw => self.account.withdraw(amount)?,
        };
        Ok(balance)
    }
}

/// Open a session and run it to completion.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: SessionConfig,
) -> Result<SessionReport, AppError> {
    let mut session = match AccountSession::open(input, output, config) {
        Ok(session) => session,
        Err(AppError::InputClosed) => {
            warn!("input closed before the account was opened");
            return Ok(SessionReport {
                outcome: SessionOutcome::InputClosed,
                account: None,
            });
        }
        Err(e) => return Err(e),
    };

    let outcome = session.run()?;
    Ok(SessionReport {
        outcome,
        account: Some(session.into_account()),
    })
}

fn success_message(movement: Movement) -> &'static str {
    match movement {
        Movement::Deposit => DEPOSIT_OK,
        Movement::Withdraw => WITHDRAW_OK,
    }
}

/// Write `label`, flush, and read one line. EOF is `AppError::InputClosed`.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so they are rejected by the
/// caller's parsing like any other malformed input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<String, AppError> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn read_account_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<AccountNumber, AppError> {
    loop {
        let line = prompt(input, output, ACCOUNT_NUMBER_PROMPT)?;
        match line.trim().parse() {
            Ok(number) => return Ok(number),
            Err(_) => {
                debug!(input = line.trim(), "invalid account number");
                writeln!(output, "{INVALID_INPUT}")?;
            }
        }
    }
}

fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, AppError> {
    loop {
        let line = prompt(input, output, NAME_PROMPT)?;
        if let Some(name) = normalize_name(&line) {
            return Ok(name);
        }
        writeln!(output, "{INVALID_INPUT}")?;
    }
}

/// Strip leading whitespace and the line terminator. `None` if nothing is left.
fn normalize_name(raw: &str) -> Option<String> {
    let name = raw.trim_end_matches(['\n', '\r']).trim_start();
    (!name.is_empty()).then(|| name.to_string())
}
