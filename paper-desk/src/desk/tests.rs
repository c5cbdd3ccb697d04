use super::*;
use crate::config::QuantityPolicy;
use crate::io::mock::ScriptedConsole;
use rust_decimal::Decimal;

const MENU: &str = "1. View market data\n\
                    2. Buy stock\n\
                    3. Sell stock\n\
                    4. View portfolio\n\
                    5. View portfolio value\n\
                    6. Exit\n\
                    Choose an option: ";

fn create_test_desk(script: &[&str]) -> Desk<ScriptedConsole> {
    create_test_desk_with_policy(script, QuantityPolicy::Strict)
}

fn create_test_desk_with_policy(
    script: &[&str],
    policy: QuantityPolicy,
) -> Desk<ScriptedConsole> {
    Desk::new(
        Session::seeded(policy),
        ScriptedConsole::new(script.iter().copied()),
    )
}

fn run_to_exit(script: &[&str]) -> Desk<ScriptedConsole> {
    let mut desk = create_test_desk(script);
    desk.run().expect("session should end on exit");
    desk
}

#[test]
fn test_exit_immediately() {
    let desk = run_to_exit(&["6"]);
    assert_eq!(desk.console().output(), format!("{}Exiting...\n", MENU));
}

#[test]
fn test_non_integer_choice_reprompts_then_lists_market() {
    let desk = run_to_exit(&["abc", "1", "6"]);
    let output = desk.console().output();

    let expected_start = format!("{}Invalid input. Please enter an integer.\nMarket Data:\n", MENU);
    assert!(output.starts_with(&expected_start), "got:\n{}", output);

    let listed = output
        .lines()
        .filter(|line| line.contains(": $"))
        .count();
    assert_eq!(listed, 10);
    assert!(output.contains("AAPL: $150.00\n"));
    assert!(output.contains("BA: $200.00\n"));
    assert!(desk.session().holdings().is_empty());
}

#[test]
fn test_invalid_option() {
    let desk = run_to_exit(&["9", "6"]);
    assert_eq!(
        desk.console().output(),
        format!("{m}Invalid option. Try again.\n{m}Exiting...\n", m = MENU)
    );
}

#[test]
fn test_buy_then_value() {
    let desk = run_to_exit(&["2", "aapl", "10", "5", "6"]);
    let output = desk.console().output();

    assert!(output.contains("Enter stock symbol: Enter quantity to buy: Bought 10 shares of AAPL\n"));
    assert!(output.contains("Current portfolio value: $1500.00\n"));
    assert_eq!(desk.session().holdings().quantity("AAPL"), 10);
}

#[test]
fn test_quantity_prompt_retries_until_integer() {
    let desk = run_to_exit(&["2", "TSLA", "ten", "1.5", "2", "6"]);
    let output = desk.console().output();

    assert_eq!(output.matches(INVALID_INTEGER).count(), 2);
    assert!(output.contains("Bought 2 shares of TSLA\n"));
    assert_eq!(desk.session().portfolio_value(), Decimal::from(1400));
}

#[test]
fn test_quantity_beyond_32_bits_reprompts() {
    let desk = run_to_exit(&[
        "2",
        "AAPL",
        "9223372036854775807",
        "2147483648",
        "2",
        "2",
        "AAPL",
        "1",
        "4",
        "6",
    ]);
    let output = desk.console().output();

    assert_eq!(output.matches(INVALID_INTEGER).count(), 2);
    assert!(output.contains("Bought 2 shares of AAPL\n"));
    assert!(output.contains("Current Portfolio:\nAAPL: 3 shares\n"));
}

#[test]
fn test_choice_beyond_32_bits_reprompts() {
    let desk = run_to_exit(&["4294967297", "6"]);
    assert_eq!(
        desk.console().output(),
        format!("{}{}\nExiting...\n", MENU, INVALID_INTEGER)
    );
}

#[test]
fn test_permissive_sell_of_most_negative_quantity() {
    let mut desk = create_test_desk_with_policy(
        &["2", "AAPL", "1", "3", "AAPL", "-9223372036854775808", "-2147483648", "4", "6"],
        QuantityPolicy::Permissive,
    );
    desk.run().unwrap();

    let output = desk.console().output();
    assert_eq!(output.matches(INVALID_INTEGER).count(), 1);
    assert!(output.contains("Sold -2147483648 shares of AAPL\n"));
    assert_eq!(desk.session().holdings().quantity("AAPL"), 2_147_483_649);
}

#[test]
fn test_buy_unknown_symbol() {
    let desk = run_to_exit(&["2", "XYZ", "5", "4", "6"]);
    let output = desk.console().output();

    assert!(output.contains("Stock symbol not found.\n"));
    assert!(output.contains("No stocks in portfolio.\n"));
    assert!(desk.session().holdings().is_empty());
}

#[test]
fn test_buy_rejects_non_positive_quantity() {
    let desk = run_to_exit(&["2", "AAPL", "-5", "6"]);
    assert!(desk
        .console()
        .output()
        .contains("Quantity must be a positive integer, got -5.\n"));
    assert!(desk.session().holdings().is_empty());
}

#[test]
fn test_permissive_buy_accepts_negative() {
    let mut desk = create_test_desk_with_policy(
        &["2", "AAPL", "10", "2", "AAPL", "-3", "4", "6"],
        QuantityPolicy::Permissive,
    );
    desk.run().unwrap();

    let output = desk.console().output();
    assert!(output.contains("Bought -3 shares of AAPL\n"));
    assert!(output.contains("Current Portfolio:\nAAPL: 7 shares\n"));
}

#[test]
fn test_sell_everything_empties_portfolio() {
    let desk = run_to_exit(&["2", "AAPL", "10", "3", "AAPL", "10", "4", "5", "6"]);
    let output = desk.console().output();

    assert!(output.contains("Enter quantity to sell: Sold 10 shares of AAPL\n"));
    assert!(output.contains("No stocks in portfolio.\n"));
    assert!(output.contains("Current portfolio value: $0.00\n"));
}

#[test]
fn test_sell_unheld_reports_failure_only() {
    let desk = run_to_exit(&["3", "tsla", "5", "6"]);
    let output = desk.console().output();

    assert!(output.contains("Stock not found in portfolio.\n"));
    assert!(!output.contains("Sold"));
    assert!(desk.session().holdings().is_empty());
}

#[test]
fn test_sell_more_than_held() {
    let desk = run_to_exit(&["2", "MSFT", "3", "3", "MSFT", "4", "6"]);
    let output = desk.console().output();

    assert!(output.contains("Insufficient quantity to sell.\n"));
    assert!(!output.contains("Sold"));
    assert_eq!(desk.session().holdings().quantity("MSFT"), 3);
}

#[test]
fn test_handle_single_action() {
    let mut desk = create_test_desk(&["nvda", "2"]);
    desk.handle(MenuChoice::Buy).unwrap();
    desk.handle(MenuChoice::ViewPortfolio).unwrap();

    assert!(desk
        .console()
        .output()
        .ends_with("Current Portfolio:\nNVDA: 2 shares\n"));
    assert_eq!(desk.console().remaining(), 0);
}

#[test]
fn test_input_closed_before_exit() {
    let mut desk = create_test_desk(&["1"]);
    let err = desk.run().unwrap_err();
    assert!(matches!(err, DeskError::InputClosed));
}

#[test]
fn test_input_closed_mid_order() {
    let mut desk = create_test_desk(&["2", "AAPL"]);
    assert!(matches!(desk.run(), Err(DeskError::InputClosed)));
    assert!(desk.session().holdings().is_empty());
}
