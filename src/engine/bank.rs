use crate::config::BankConfig;
use crate::engine::{Account, AccountOwner, Clock};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::rc::Rc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("a client with CPF {0} already exists")]
    DuplicateClient(String),

    #[error("no client with CPF {0}")]
    ClientNotFound(String),

    #[error("account {0} not found")]
    AccountNotFound(u32),
}

/// Data needed to register a client.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub cpf: String,
    pub name: String,
    pub birth_date: String,
    pub address: String,
}

pub struct Client {
    pub cpf: String, // Unique
    pub name: String,
    pub birth_date: String,
    pub address: String,
    accounts: Vec<Account>,
}

impl Client {
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.number() == number)
    }
}

/// Directory of every client and the accounts they own.
pub struct Bank {
    config: BankConfig,
    clock: Rc<dyn Clock>,
    clients: HashMap<String, Client>,
    accounts_opened: u32,
}

impl Bank {
    pub fn new(config: BankConfig, clock: Rc<dyn Clock>) -> Self {
        Bank {
            config,
            clock,
            clients: HashMap::new(),
            accounts_opened: 0,
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn create_client(&mut self, new: NewClient) -> Result<&Client, DirectoryError> {
        match self.clients.entry(new.cpf.clone()) {
            Entry::Occupied(_) => Err(DirectoryError::DuplicateClient(new.cpf)),
            Entry::Vacant(slot) => {
                log::info!("Registered client {}", new.cpf);
                Ok(slot.insert(Client {
                    cpf: new.cpf,
                    name: new.name,
                    birth_date: new.birth_date,
                    address: new.address,
                    accounts: Vec::new(),
                }))
            }
        }
    }

    pub fn find_client(&self, cpf: &str) -> Option<&Client> {
        self.clients.get(cpf)
    }

    /// Opens a new account for the client and returns its number.
    /// Numbers are assigned sequentially across the whole bank, starting at 1.
    pub fn open_account(&mut self, cpf: &str) -> Result<u32, DirectoryError> {
        let client = self
            .clients
            .get_mut(cpf)
            .ok_or_else(|| DirectoryError::ClientNotFound(cpf.into()))?;

        let number = self.accounts_opened + 1;
        let owner = AccountOwner {
            id: client.cpf.clone(),
            name: client.name.clone(),
        };
        client.accounts.push(Account::new(
            self.config.agency.clone(),
            number,
            owner,
            self.config.limits,
            Rc::clone(&self.clock),
        ));
        self.accounts_opened = number;

        log::info!(
            "Opened account {}/{} for client {}",
            self.config.agency,
            number,
            cpf
        );
        Ok(number)
    }

    pub fn accounts(&self, cpf: &str) -> Option<&[Account]> {
        self.clients.get(cpf).map(Client::accounts)
    }

    pub fn account_mut(&mut self, cpf: &str, number: u32) -> Option<&mut Account> {
        self.clients.get_mut(cpf)?.account_mut(number)
    }

    /// Like `account_mut`, but tells which lookup missed.
    pub fn try_account_mut(&mut self, cpf: &str, number: u32) -> Result<&mut Account, DirectoryError> {
        self.clients
            .get_mut(cpf)
            .ok_or_else(|| DirectoryError::ClientNotFound(cpf.into()))?
            .account_mut(number)
            .ok_or(DirectoryError::AccountNotFound(number))
    }
}
