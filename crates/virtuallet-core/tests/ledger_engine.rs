use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use virtuallet_core::storage::NewLedgerEntry;
use virtuallet_core::{
    IncomeSettings, LedgerEngine, LedgerStore, Payday, SqliteStorage, TransactionKind,
    WalletError,
};

struct TempDatabase {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDatabase {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("db_virtuallet.db");
        Self { _dir: dir, path }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn payday(month: u32, year: i32) -> Payday {
    Payday::new(month, year).expect("valid payday")
}

fn initialized_engine(db: &TempDatabase, today: NaiveDate) -> LedgerEngine<SqliteStorage> {
    let storage = SqliteStorage::create(&db.path).expect("create should succeed");
    let mut engine = LedgerEngine::new(storage);
    engine
        .initialize(&IncomeSettings::default(), today)
        .expect("initialize should succeed");
    engine
}

#[test]
fn test_backfill_fills_gap_in_ascending_order() {
    let db = TempDatabase::new();
    let engine = initialized_engine(&db, date(2023, 3, 1));
    engine.into_storage().close().expect("close should succeed");

    let storage = SqliteStorage::open(&db.path).expect("open should succeed");
    let mut engine = LedgerEngine::new(storage);
    let booked = engine
        .reconcile_auto_income_on(date(2023, 6, 20))
        .expect("reconcile should succeed");
    assert_eq!(booked, vec![payday(4, 2023), payday(5, 2023), payday(6, 2023)]);

    let recent = engine.recent_transactions(30).expect("recent should succeed");
    let paydays: Vec<Option<Payday>> = recent.iter().rev().map(|entry| entry.payday()).collect();
    assert_eq!(
        paydays,
        vec![
            Some(payday(3, 2023)),
            Some(payday(4, 2023)),
            Some(payday(5, 2023)),
            Some(payday(6, 2023)),
        ]
    );
    assert_eq!(engine.balance().expect("balance"), dec!(400));
}

#[test]
fn test_reconcile_twice_in_same_month_books_once() {
    let db = TempDatabase::new();
    let mut engine = initialized_engine(&db, date(2023, 5, 1));

    let first = engine
        .reconcile_auto_income_on(date(2023, 6, 1))
        .expect("first reconcile");
    let second = engine
        .reconcile_auto_income_on(date(2023, 6, 30))
        .expect("second reconcile");

    assert_eq!(first, vec![payday(6, 2023)]);
    assert!(second.is_empty());
    let june_entries = engine
        .recent_transactions(30)
        .expect("recent")
        .into_iter()
        .filter(|entry| entry.payday() == Some(payday(6, 2023)))
        .count();
    assert_eq!(june_entries, 1);
}

#[test]
fn test_backfill_without_history_hits_bound() {
    let mut storage = SqliteStorage::open_in_memory().expect("in-memory storage");
    IncomeSettings::default()
        .save(&mut storage)
        .expect("settings saved");
    storage
        .append(&NewLedgerEntry::manual(Some("cash"), dec!(20)))
        .expect("append");
    let mut engine = LedgerEngine::new(storage).with_backfill_bound(12);

    let result = engine.reconcile_auto_income_on(date(2023, 6, 1));

    assert!(matches!(
        result,
        Err(WalletError::BackfillBoundExceeded { bound: 12 })
    ));
    assert_eq!(engine.recent_transactions(30).expect("recent").len(), 1);
}

#[test]
fn test_overdraft_boundary() {
    let db = TempDatabase::new();
    let mut engine = initialized_engine(&db, date(2023, 6, 1));
    assert_eq!(engine.balance().expect("balance"), dec!(100));

    assert!(engine.is_expense_acceptable(dec!(300)).expect("check"));
    assert!(!engine.is_expense_acceptable(dec!(300.01)).expect("check"));

    let err = engine
        .record_transaction(Some("tv"), dec!(300.01), TransactionKind::Expense)
        .expect_err("expense over the limit should fail");
    assert!(err.is_recoverable());

    let balance = engine
        .record_transaction(Some("tv"), dec!(300), TransactionKind::Expense)
        .expect("expense at the limit should succeed");
    assert_eq!(balance, dec!(-200));
}

#[test]
fn test_expense_amount_round_trip_through_file() {
    let db = TempDatabase::new();
    let mut engine = initialized_engine(&db, date(2023, 6, 1));
    let amount = virtuallet_core::money::parse_amount("12.345").expect("numeric amount");
    engine
        .record_transaction(None, amount, TransactionKind::Expense)
        .expect("expense should succeed");
    engine.into_storage().close().expect("close should succeed");

    let storage = SqliteStorage::open(&db.path).expect("open should succeed");
    let latest = storage.recent_transactions(1).expect("recent");
    assert_eq!(latest[0].amount, dec!(-12.35));
    assert_eq!(latest[0].description, None);
    assert_eq!(storage.balance().expect("balance"), dec!(87.65));
}

#[test]
fn test_balance_matches_sum_of_recorded_amounts() {
    let db = TempDatabase::new();
    let mut engine = initialized_engine(&db, date(2023, 6, 1));
    let operations = [
        (dec!(0.1), TransactionKind::Income),
        (dec!(0.2), TransactionKind::Income),
        (dec!(33.333), TransactionKind::Expense),
        (dec!(19.995), TransactionKind::Income),
        (dec!(250), TransactionKind::Expense),
    ];

    let mut expected = dec!(100);
    for (amount, kind) in operations {
        let balance = engine
            .record_transaction(None, amount, kind)
            .expect("transaction should succeed");
        let rounded = virtuallet_core::money::round(amount);
        expected += match kind {
            TransactionKind::Income => rounded,
            TransactionKind::Expense => -rounded,
        };
        assert_eq!(balance, expected);
    }
    assert_eq!(expected, dec!(-163.03));
}

#[test]
fn test_interrupted_setup_leaves_wallet_unconfigured() {
    let db = TempDatabase::new();
    SqliteStorage::create(&db.path)
        .expect("create should succeed")
        .close()
        .expect("close should succeed");

    let storage = SqliteStorage::open(&db.path).expect("open should succeed");
    let mut engine = LedgerEngine::new(storage);
    assert!(!engine.is_configured().expect("config lookup"));

    engine
        .initialize(&IncomeSettings::default(), date(2023, 6, 1))
        .expect("setup can be completed later");
    assert!(engine.is_configured().expect("config lookup"));
    assert!(engine
        .reconcile_auto_income_on(date(2023, 6, 1))
        .expect("reconcile")
        .is_empty());
    assert_eq!(engine.balance().expect("balance"), dec!(100));
}

#[test]
fn test_oversized_incomes_never_reach_the_file() {
    let db = TempDatabase::new();
    let mut engine = initialized_engine(&db, date(2023, 6, 1));

    for _ in 0..2 {
        let err = engine
            .record_transaction(
                None,
                dec!(50000000000000000000000000000),
                TransactionKind::Income,
            )
            .expect_err("oversized income should be rejected");
        assert!(matches!(err, WalletError::InvalidAmount));
    }
    engine.into_storage().close().expect("close should succeed");

    let storage = SqliteStorage::open(&db.path).expect("open should succeed");
    assert_eq!(storage.balance().expect("balance"), dec!(100));
    assert_eq!(storage.recent_transactions(30).expect("recent").len(), 1);
}

#[test]
fn test_unstorable_overdraft_is_rejected_at_setup() {
    let err = IncomeSettings::parse("pocket money", "100", "79228162514264337593543950335")
        .expect_err("overdraft beyond the ledger range");
    assert!(matches!(err, WalletError::InvalidConfig { .. }));
}
