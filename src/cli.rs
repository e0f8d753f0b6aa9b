//! Interactive menus driving the bank over a text stream.
//!
//! This is the caller layer: it resets the daily counters at the start of every
//! action cycle and checks the daily transaction limit before asking for an amount.

use crate::engine::{Account, Amount, Bank, NewClient, TransactionType};
use crate::export;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;

const USER_MENU: &str = "
[n] New user
[l] Log in user
[s] Quit
=> ";

const ACCOUNT_MENU: &str = "
[c] New account
[lc] Log into account
[l] List accounts
[v] Back
=> ";

const ACTION_MENU: &str = "
[d] Deposit
[s] Withdraw
[e] Statement
[x] Export statement as CSV
[a] Account summary as CSV
[v] Back
=> ";

/// Whether the session should keep going after a menu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a, R, W> {
    bank: &'a mut Bank,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(bank: &'a mut Bank, input: R, output: W) -> Self {
        Session {
            bank,
            input,
            output,
        }
    }

    /// Runs the menus until the user quits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        log::debug!("Session started");
        loop {
            let Some(choice) = self.prompt(USER_MENU)? else {
                break;
            };

            match choice.to_lowercase().as_str() {
                "n" => self.create_user()?,
                "l" => {
                    if self.log_in_user()? == Flow::Quit {
                        break;
                    }
                }
                "s" => {
                    writeln!(self.output, "\nThank you for using our banking system!")?;
                    break;
                }
                _ => writeln!(self.output, "\nInvalid option.")?,
            }
        }
        log::debug!("Session finished");
        Ok(())
    }

    /// Reads one trimmed line, `None` once the input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn create_user(&mut self) -> Result<()> {
        let Some(cpf) = self.prompt("Enter the CPF (numbers only): ")? else {
            return Ok(());
        };
        if self.bank.find_client(&cpf).is_some() {
            writeln!(self.output, "\nA user with this CPF already exists!")?;
            return Ok(());
        }

        let Some(name) = self.prompt("Enter the full name: ")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Enter the birth date (dd/mm/yyyy): ")? else {
            return Ok(());
        };
        let Some(address) =
            self.prompt("Enter the address (street, number - district - city/state): ")?
        else {
            return Ok(());
        };

        match self.bank.create_client(NewClient {
            cpf,
            name,
            birth_date,
            address,
        }) {
            Ok(_) => writeln!(self.output, "\nUser created successfully!")?,
            Err(e) => writeln!(self.output, "\n{e}")?,
        }
        Ok(())
    }

    fn log_in_user(&mut self) -> Result<Flow> {
        let Some(cpf) = self.prompt("Enter the user's CPF: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(client) = self.bank.find_client(&cpf) else {
            log::warn!("Login attempt for unknown client {cpf}");
            writeln!(self.output, "\nUser not found.")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "\nUser {} logged in successfully!", client.name)?;
        self.account_menu(&cpf)
    }

    fn account_menu(&mut self, cpf: &str) -> Result<Flow> {
        loop {
            let Some(choice) = self.prompt(ACCOUNT_MENU)? else {
                return Ok(Flow::Quit);
            };

            match choice.to_lowercase().as_str() {
                "c" => {
                    let number = self.bank.open_account(cpf)?;
                    writeln!(
                        self.output,
                        "\nAccount created successfully! Agency: {} Account: {}",
                        self.bank.config().agency,
                        number
                    )?;
                }
                "lc" => {
                    if let Some(number) = self.select_account(cpf)? {
                        if self.action_menu(cpf, number)? == Flow::Quit {
                            return Ok(Flow::Quit);
                        }
                    }
                }
                "l" => self.list_accounts(cpf)?,
                "v" => return Ok(Flow::Continue),
                _ => writeln!(self.output, "\nInvalid option.")?,
            }
        }
    }

    fn list_accounts(&mut self, cpf: &str) -> Result<()> {
        let accounts = self.bank.accounts(cpf).unwrap_or_default();
        if accounts.is_empty() {
            writeln!(self.output, "\nUser has no accounts.")?;
            return Ok(());
        }

        for acc in accounts {
            writeln!(
                self.output,
                "Agency: {} | Account: {} | Holder: {}",
                acc.agency(),
                acc.number(),
                acc.owner().name
            )?;
        }
        Ok(())
    }

    fn select_account(&mut self, cpf: &str) -> Result<Option<u32>> {
        let numbers: Vec<(String, u32)> = self
            .bank
            .accounts(cpf)
            .unwrap_or_default()
            .iter()
            .map(|acc| (acc.agency().to_owned(), acc.number()))
            .collect();

        if numbers.is_empty() {
            writeln!(
                self.output,
                "\nUser has no accounts. Create an account first!"
            )?;
            return Ok(None);
        }

        writeln!(self.output, "\nAvailable accounts:")?;
        for (agency, number) in &numbers {
            writeln!(self.output, "Agency: {agency} | Account: {number}")?;
        }

        let Some(raw) = self.prompt("Enter the account number to log in: ")? else {
            return Ok(None);
        };
        let Ok(wanted) = raw.parse::<u32>() else {
            writeln!(self.output, "Invalid number.")?;
            return Ok(None);
        };

        if numbers.iter().any(|(_, number)| *number == wanted) {
            writeln!(self.output, "\nAccount {wanted} logged in successfully!")?;
            Ok(Some(wanted))
        } else {
            writeln!(self.output, "Account not found.")?;
            Ok(None)
        }
    }

    fn account(&mut self, cpf: &str, number: u32) -> Result<&mut Account> {
        Ok(self.bank.try_account_mut(cpf, number)?)
    }

    fn action_menu(&mut self, cpf: &str, number: u32) -> Result<Flow> {
        loop {
            self.account(cpf, number)?.reset_daily_counters_if_new_day();

            let Some(choice) = self.prompt(ACTION_MENU)? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.to_lowercase().as_str() {
                "d" => self.transact(cpf, number, TransactionType::Deposit)?,
                "s" => self.transact(cpf, number, TransactionType::Withdrawal)?,
                "e" => {
                    let statement = self.account(cpf, number)?.statement();
                    writeln!(self.output, "\n{statement}")?;
                    Flow::Continue
                }
                "x" => {
                    let Session { bank, output, .. } = self;
                    let account = bank.try_account_mut(cpf, number)?;
                    export::write_statement_csv(account, &mut *output)?;
                    Flow::Continue
                }
                "a" => {
                    let Session { bank, output, .. } = self;
                    let account = bank.try_account_mut(cpf, number)?;
                    export::write_snapshot_csv(account, &mut *output)?;
                    Flow::Continue
                }
                "v" => return Ok(Flow::Continue),
                _ => {
                    writeln!(self.output, "\nInvalid option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn transact(&mut self, cpf: &str, number: u32, typ: TransactionType) -> Result<Flow> {
        if let Err(rejection) = self.account(cpf, number)?.check_daily_transaction_limit() {
            log::warn!("{typ} refused on account {number}: {rejection}");
            writeln!(self.output, "\nDaily transaction limit reached!")?;
            return Ok(Flow::Continue);
        }

        let label = match typ {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        };
        let Some(raw) = self.prompt(&format!("Enter the {label} amount: "))? else {
            return Ok(Flow::Quit);
        };

        let amount = match Amount::from_str(&raw) {
            Ok(amount) => amount,
            Err(e) => {
                log::warn!("Invalid input for {label}: {e}");
                writeln!(self.output, "\nOperation failed! Invalid amount. Please try again.")?;
                return Ok(Flow::Continue);
            }
        };

        let account = self.account(cpf, number)?;
        let result = match typ {
            TransactionType::Deposit => account.try_deposit(amount),
            TransactionType::Withdrawal => account.try_withdraw(amount),
        };

        match result {
            Ok(()) => writeln!(self.output, "\n{typ} completed successfully!")?,
            Err(rejection) => writeln!(self.output, "\nOperation failed! {rejection}.")?,
        }
        Ok(Flow::Continue)
    }
}
