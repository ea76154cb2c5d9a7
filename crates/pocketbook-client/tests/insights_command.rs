mod support;

use pocketbook_client::commands::{categories, insights, monthly};
use pocketbook_client::model::TransactionKind;
use support::ledger_testkit::{add_row, options, request, temp_home_in_tmp};

fn seed(home: &std::path::Path) {
    for row in [
        request("Salary", 300000, TransactionKind::Income, "salary", "2024-01-01"),
        request("Rent", 120000, TransactionKind::Expense, "bills", "2024-01-02"),
        request("Groceries", 6000, TransactionKind::Expense, "food", "2024-01-09"),
        request("Freelance", 50000, TransactionKind::Income, "freelance", "2023-12-20"),
        request("Cinema", 2500, TransactionKind::Expense, "entertainment", "2023-12-22"),
    ] {
        assert!(add_row(home, row).is_some());
    }
}

#[test]
fn insights_default_to_the_current_month() {
    let temp = temp_home_in_tmp("pocketbook-insights");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        seed(&home);
        let result = insights::run_with_options(None, &options(&home));
        assert!(result.is_ok());
        if let Ok(envelope) = result {
            assert_eq!(envelope.data["month"], "2024-01");
            assert_eq!(envelope.data["transaction_count"], 3);
            assert_eq!(envelope.data["expense"], 1260.0);
            assert_eq!(envelope.data["expense_ratio"], 0.42);
            assert_eq!(envelope.data["savings_rate"], 0.58);
            assert_eq!(envelope.data["expense_breakdown"][0]["category"], "bills");
            assert_eq!(envelope.data["income_breakdown"][0]["share"], 1.0);
            assert_eq!(envelope.data["overall"]["transaction_count"], 5);
        }
    }
}

#[test]
fn insights_accept_explicit_month_and_reject_bad_input() {
    let temp = temp_home_in_tmp("pocketbook-insights-month");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        seed(&home);
        let december = insights::run_with_options(Some("2023-12"), &options(&home));
        assert!(december.is_ok());
        if let Ok(envelope) = december {
            assert_eq!(envelope.data["balance"], 475.0);
        }

        let invalid = insights::run_with_options(Some("December"), &options(&home));
        assert!(invalid.is_err());
        if let Err(error) = invalid {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}

#[test]
fn monthly_totals_and_categories_follow_collection() {
    let temp = temp_home_in_tmp("pocketbook-monthly");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        seed(&home);
        let months = monthly::run_with_options(&options(&home));
        assert!(months.is_ok());
        if let Ok(envelope) = months {
            assert_eq!(envelope.data["months"][0]["month"], "2023-12");
            assert_eq!(envelope.data["months"][1]["month"], "2024-01");
            assert_eq!(envelope.data["months"][1]["balance"], 1740.0);
        }

        let used = categories::run_with_options(&options(&home));
        assert!(used.is_ok());
        if let Ok(envelope) = used {
            assert_eq!(
                envelope.data["in_use"],
                serde_json::json!(["salary", "bills", "food", "freelance", "entertainment"])
            );
            assert_eq!(envelope.data["expense_defaults"][0], "food");
        }
    }
}
