use bank_ledger::cli::Session;
use bank_ledger::config::BankConfig;
use bank_ledger::engine::{Amount, Bank, FixedClock, NewClient, Rejection, TransactionType};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::io::Cursor;
use std::rc::Rc;
use std::str::FromStr;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 22)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn bank_with_account() -> (Bank, Rc<FixedClock>) {
    let clock = Rc::new(FixedClock::new(morning()));
    let mut bank = Bank::new(BankConfig::default(), clock.clone());
    bank.create_client(NewClient {
        cpf: "12345678900".into(),
        name: "Joana Lima".into(),
        birth_date: "02/02/1985".into(),
        address: "Av. Central, 100 - Centro - Natal/RN".into(),
    })
    .unwrap();
    assert_eq!(bank.open_account("12345678900"), Ok(1));
    (bank, clock)
}

fn amount(s: &str) -> Amount {
    Amount::from_str(s).unwrap()
}

#[test]
fn test_deposit_and_withdrawal_scenario() {
    let (mut bank, _) = bank_with_account();
    let acc = bank.account_mut("12345678900", 1).unwrap();
    acc.reset_daily_counters_if_new_day();

    assert_eq!(acc.balance(), Amount::ZERO);

    assert!(acc.deposit(amount("1000.00")));
    assert_eq!(acc.balance(), amount("1000.00"));
    assert_eq!(acc.history().len(), 1);

    assert!(acc.withdraw(amount("500.00")));
    assert_eq!(acc.balance(), amount("500.00"));
    assert_eq!(acc.withdrawals_today(), 1);

    assert!(!acc.withdraw(amount("500.01")));
    assert_eq!(acc.balance(), amount("500.00"));

    assert!(acc.withdraw(amount("500.00")));
    assert_eq!(acc.balance(), amount("0.00"));
    assert_eq!(acc.withdrawals_today(), 2);

    assert_eq!(
        acc.try_withdraw(amount("500.00")),
        Err(Rejection::InsufficientFunds)
    );
    assert_eq!(acc.withdrawals_today(), 2);

    // Third accepted withdrawal, then the cap is the only reason to refuse
    assert!(acc.deposit(amount("1000.00")));
    assert!(acc.withdraw(amount("100.00")));
    assert_eq!(acc.withdrawals_today(), 3);
    assert_eq!(
        acc.try_withdraw(amount("100.00")),
        Err(Rejection::DailyWithdrawalLimitReached)
    );
    assert!(!acc.withdraw(amount("100.00")));
    assert_eq!(acc.balance(), amount("900.00"));

    let kinds: Vec<TransactionType> = acc.history().entries().iter().map(|t| t.typ()).collect();
    assert_eq!(
        kinds,
        vec![
            TransactionType::Deposit,
            TransactionType::Withdrawal,
            TransactionType::Withdrawal,
            TransactionType::Deposit,
            TransactionType::Withdrawal,
        ]
    );
}

#[test]
fn test_balance_never_negative() {
    let (mut bank, clock) = bank_with_account();
    let acc = bank.account_mut("12345678900", 1).unwrap();

    // Deterministic mix of deposits and withdrawals, some invalid, across several days
    let mut seed: u64 = 0x5eed;
    let mut accepted = 0;
    for step in 0..500 {
        if step % 40 == 0 {
            clock.advance(TimeDelta::days(1));
        }
        acc.reset_daily_counters_if_new_day();

        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let cents = (seed >> 33) as i64 % 80_000 - 5_000;
        let before = acc.balance();

        let ok = if (seed >> 20) % 3 == 0 {
            acc.deposit(Amount::from_cents(cents))
        } else {
            acc.withdraw(Amount::from_cents(cents))
        };
        if ok {
            accepted += 1;
        } else {
            assert_eq!(acc.balance(), before);
        }

        assert!(!acc.balance().is_negative());
        assert!(acc.withdrawals_today() <= acc.limits().daily_withdrawals);
    }

    assert_eq!(acc.history().len(), accepted);
}

#[test]
fn test_limits_reset_on_next_day() {
    let (mut bank, clock) = bank_with_account();
    let acc = bank.account_mut("12345678900", 1).unwrap();
    acc.reset_daily_counters_if_new_day();
    acc.deposit(amount("2000"));

    for _ in 0..3 {
        assert!(acc.withdraw(amount("10")));
    }
    assert!(!acc.withdraw(amount("10")));

    clock.advance(TimeDelta::days(1));
    acc.reset_daily_counters_if_new_day();
    assert_eq!(acc.withdrawals_today(), 0);
    assert_eq!(acc.transactions_today(), 0);
    assert!(acc.withdraw(amount("10")));
}

fn run_session(bank: &mut Bank, script: &str) -> String {
    let mut output = Vec::new();
    Session::new(bank, Cursor::new(script.to_owned()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_cli_full_session() {
    let clock = Rc::new(FixedClock::new(morning()));
    let mut bank = Bank::new(BankConfig::default(), clock);

    let script = "\
n
111
Pedro Alves
10/10/1990
Rua B, 2 - Boa Vista - Recife/PE
l
111
l
c
lc
1
d
1000,00
s
1500
s
abc
s
200
e
v
v
s
";
    let out = run_session(&mut bank, script);

    assert!(out.contains("User created successfully!"));
    assert!(out.contains("User Pedro Alves logged in successfully!"));
    assert!(out.contains("User has no accounts."));
    assert!(out.contains("Account created successfully! Agency: 0001 Account: 1"));
    assert!(out.contains("Account 1 logged in successfully!"));
    assert!(out.contains("Deposit completed successfully!"));
    assert!(out.contains("Operation failed! insufficient funds."));
    assert!(out.contains("Operation failed! Invalid amount. Please try again."));
    assert!(out.contains("Withdrawal completed successfully!"));
    assert!(out.contains("Client: Pedro Alves | Account: 1"));
    assert!(out.contains("22/04/2024 10:00:00 - Deposit: R$ 1000.00"));
    assert!(out.contains("22/04/2024 10:00:00 - Withdrawal: R$ 200.00"));
    assert!(out.contains("Balance: R$ 800.00"));
    assert!(out.ends_with("Thank you for using our banking system!\n"));

    let acc = &bank.accounts("111").unwrap()[0];
    assert_eq!(acc.balance(), amount("800"));
    assert_eq!(acc.transactions_today(), 2);
    assert_eq!(acc.withdrawals_today(), 1);
}

#[test]
fn test_cli_daily_transaction_limit() {
    let (mut bank, _) = bank_with_account();

    let mut script = String::from("l\n12345678900\nlc\n1\n");
    for _ in 0..11 {
        script.push_str("d\n1\n");
    }
    let out = run_session(&mut bank, &script);

    assert_eq!(out.matches("Deposit completed successfully!").count(), 10);
    assert!(out.contains("Daily transaction limit reached!"));

    let acc = &bank.accounts("12345678900").unwrap()[0];
    assert_eq!(acc.balance(), amount("10"));
    assert_eq!(acc.transactions_today(), 10);
}

#[test]
fn test_cli_new_day_lifts_transaction_limit() {
    let (mut bank, clock) = bank_with_account();

    let mut script = String::from("l\n12345678900\nlc\n1\n");
    for _ in 0..10 {
        script.push_str("d\n1\n");
    }
    run_session(&mut bank, &script);

    clock.advance(TimeDelta::days(1));
    let out = run_session(&mut bank, "l\n12345678900\nlc\n1\nd\n5\n");

    assert!(out.contains("Deposit completed successfully!"));
    assert!(!out.contains("Daily transaction limit reached!"));
    let acc = &bank.accounts("12345678900").unwrap()[0];
    assert_eq!(acc.transactions_today(), 1);
}

#[test]
fn test_cli_lookup_misses() {
    let (mut bank, _) = bank_with_account();

    let script = "\
l
000
n
12345678900
x
l
12345678900
lc
9
lc
abc
v
s
";
    let out = run_session(&mut bank, script);

    assert!(out.contains("User not found."));
    assert!(out.contains("A user with this CPF already exists!"));
    assert!(out.contains("Invalid option."));
    assert!(out.contains("Account not found."));
    assert!(out.contains("Invalid number."));
}

#[test]
fn test_cli_export_statement() {
    let (mut bank, _) = bank_with_account();

    let out = run_session(&mut bank, "l\n12345678900\nlc\n1\nd\n75.5\nx\n");

    assert!(out.contains("timestamp,type,amount\n22/04/2024 10:00:00,deposit,75.50\n"));
}

#[test]
fn test_cli_empty_statement() {
    let (mut bank, _) = bank_with_account();

    let out = run_session(&mut bank, "l\n12345678900\nlc\n1\ne\n");

    assert!(out.contains("No movements recorded."));
    assert!(out.contains("Balance: R$ 0.00"));
}

#[test]
fn test_cli_export_empty_statement_prints_header() {
    let (mut bank, _) = bank_with_account();

    let out = run_session(&mut bank, "l\n12345678900\nlc\n1\nx\n");

    assert!(out.contains("=> timestamp,type,amount\n\n[d] Deposit"));
}

#[test]
fn test_cli_account_summary() {
    let (mut bank, _) = bank_with_account();

    let out = run_session(&mut bank, "l\n12345678900\nlc\n1\nd\n300\ns\n120,25\na\n");

    assert!(out.contains(
        "agency,account,owner,balance,withdrawals_today,transactions_today\n\
         0001,1,Joana Lima,179.75,1,2\n"
    ));
}

#[test]
fn test_cli_refuses_amounts_finer_than_cents() {
    let (mut bank, _) = bank_with_account();

    let out = run_session(
        &mut bank,
        "l\n12345678900\nlc\n1\nd\n1000\ns\n500.009\nd\n0.009\n",
    );

    assert_eq!(
        out.matches("Operation failed! Invalid amount. Please try again.").count(),
        2
    );
    let acc = &bank.accounts("12345678900").unwrap()[0];
    assert_eq!(acc.balance(), amount("1000"));
    assert_eq!(acc.withdrawals_today(), 0);
    assert_eq!(acc.transactions_today(), 1);
    assert_eq!(acc.history().len(), 1);
}
