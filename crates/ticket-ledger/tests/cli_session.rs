//! Scripted sessions through the interactive menu.

use ticket_ledger::Menu;
use ticket_ledger_testkit::{test_ledger, SequentialTicketIds, TestLedger};

fn run_script(ledger: &mut TestLedger, script: &str, json: bool) -> String {
    run_bytes(ledger, script.as_bytes(), json)
}

fn run_bytes(ledger: &mut TestLedger, script: &[u8], json: bool) -> String {
    let mut menu = Menu::new(script, Vec::new()).json_listing(json);
    menu.run(ledger).unwrap();
    String::from_utf8(menu.into_output()).unwrap()
}

#[test]
fn issue_verify_list_validate() {
    let mut ledger = test_ledger();
    let first = SequentialTicketIds::nth(1);
    let script = format!("1\nAlice\nConcert\n2\n{first}\n3\n4\n5\n");

    let out = run_script(&mut ledger, &script, false);

    assert!(out.contains(&format!("✅ Ticket issued successfully! Ticket ID: {first}")));
    assert!(out.contains("✅ Ticket is VALID!"));
    assert!(out.contains("Buyer: Alice, Event: Concert, Issued: Tue Jan 14 16:00:01 2025 UTC"));
    assert!(out.contains("Index: 1\n"));
    assert!(out.contains(&format!("Ticket ID: {first}\n")));
    assert!(out.contains("✅ Blockchain is valid. No tampering detected."));
    assert!(out.ends_with("👋 Exiting...\n"));
    assert_eq!(ledger.ticket_count(), 1);
}

#[test]
fn unknown_ticket_and_bad_choice() {
    let mut ledger = test_ledger();
    let out = run_script(&mut ledger, "2\nnope\n9\n5\n", false);

    assert!(out.contains("❌ Ticket is INVALID or not found."));
    assert!(out.contains("❗ Invalid option. Try again."));
}

#[test]
fn names_keep_inner_and_outer_spaces() {
    let mut ledger = test_ledger();
    run_script(&mut ledger, "1\n  Jean Luc \nOpera Night\n5\n", false);

    let block = ledger.head();
    assert_eq!(block.buyer_name, "  Jean Luc ");
    assert_eq!(block.event_name, "Opera Night");
}

#[test]
fn end_of_input_exits_cleanly() {
    let mut ledger = test_ledger();
    // input ends while asking for the event name
    let out = run_script(&mut ledger, "1\nAlice\n", false);

    assert!(out.ends_with("Enter event name: "));
    assert_eq!(ledger.ticket_count(), 0);
}

#[test]
fn json_listing() {
    let mut ledger = test_ledger();
    ledger.issue("Alice", "Concert");
    ledger.issue("Bob", "Opera");

    let out = run_script(&mut ledger, "3\n5\n", true);
    let start = out.find('[').unwrap();
    let end = out.rfind(']').unwrap();
    let listed: Vec<ticket_ledger::Block> = serde_json::from_str(&out[start..=end]).unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].buyer_name, "Alice");
    assert_eq!(listed[1].event_name, "Opera");
    assert!(listed.iter().all(|b| b.is_intact()));
}

#[test]
fn tampered_ledger_reports_violations() {
    let mut ledger = test_ledger();
    ledger.issue("Alice", "Concert");
    ledger.issue("Bob", "Concert");

    let mut blocks = ledger.into_blocks();
    blocks[1].buyer_name = "Mallory".into();
    let mut tampered = ticket_ledger::Ledger::from_blocks_with(
        blocks,
        ticket_ledger_testkit::StepClock::default(),
        SequentialTicketIds::default(),
    )
    .unwrap();

    let out = run_script(&mut tampered, "4\n5\n", false);
    assert!(out.contains("❌ Blockchain integrity failed. Tampering detected!"));
    assert!(out.contains("  - block 1: stored hash"));
}

#[test]
fn invalid_utf8_name_keeps_session_alive() {
    let mut ledger = test_ledger();
    ledger.issue("Alice", "Concert");

    let out = run_bytes(&mut ledger, b"1\nBob\xff\nConcert\n3\n5\n", false);

    assert_eq!(ledger.ticket_count(), 2);
    assert_eq!(ledger.head().buyer_name, "Bob\u{fffd}");
    assert!(out.contains("Buyer: Alice\n"));
    assert!(out.contains("Buyer: Bob\u{fffd}\n"));
    assert!(out.ends_with("👋 Exiting...\n"));
    assert!(ledger.validate());
}
