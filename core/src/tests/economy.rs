use super::*;

#[test]
fn test_earn_and_spend_move_the_balance() {
    let mut wallet = GoldWallet::new(20);
    wallet.earn(15, "loot");
    assert_eq!(wallet.balance(), 35);
    wallet.spend(30, "relic").expect("affordable");
    assert_eq!(wallet.balance(), 5);
}

#[test]
fn test_overspend_fails_with_context_and_keeps_balance() {
    let mut wallet = GoldWallet::new(7);
    let err = wallet.spend(12, "stake").expect_err("cannot afford");
    assert_eq!(err, GameError::NotEnoughGold { have: 7, need: 12 });
    assert_eq!(wallet.balance(), 7, "Failed spend must not move gold");
    assert_eq!(wallet.ledger().count(), 0, "Failed spend leaves no event");
}

#[test]
fn test_can_afford_is_inclusive() {
    let wallet = GoldWallet::new(10);
    assert!(wallet.can_afford(10));
    assert!(!wallet.can_afford(11));
}

#[test]
fn test_ledger_records_mutations_in_order() {
    let mut wallet = GoldWallet::new(0);
    wallet.earn(10, "payout");
    wallet.spend(4, "stake").expect("affordable");
    let events: Vec<&GoldEvent> = wallet.ledger().collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].delta, 10);
    assert_eq!(events[0].balance_after, 10);
    assert_eq!(events[0].reason, "payout");
    assert_eq!(events[1].delta, -4);
    assert_eq!(events[1].balance_after, 6);
}

#[test]
fn test_ledger_drops_oldest_past_the_cap() {
    let mut wallet = GoldWallet::new(0);
    for i in 0..(LEDGER_CAP + 10) {
        wallet.earn(1, &format!("drip {i}"));
    }
    assert_eq!(wallet.ledger().count(), LEDGER_CAP);
    let first = wallet.ledger().next().expect("ledger non-empty");
    assert_eq!(first.reason, "drip 10", "Oldest entries fall off first");
}

#[test]
fn test_earn_saturates_instead_of_wrapping() {
    let mut wallet = GoldWallet::new(Gold::MAX - 1);
    wallet.earn(10, "jackpot");
    assert_eq!(wallet.balance(), Gold::MAX);
}
