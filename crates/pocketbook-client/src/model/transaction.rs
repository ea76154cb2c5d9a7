use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

pub const DEFAULT_CATEGORY: &str = "other";

/// Largest accepted amount. Amounts are persisted as JSON numbers, so every
/// accepted value must survive an f64 round trip unchanged.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);
const MAX_SIGNIFICANT_DIGITS: usize = 15;

const INCOME_CATEGORIES: [&str; 5] = ["salary", "freelance", "investment", "gift", "other"];
const EXPENSE_CATEGORIES: [&str; 7] = [
    "food",
    "transport",
    "entertainment",
    "shopping",
    "bills",
    "healthcare",
    "other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    /// Suggested categories offered for this kind.
    pub const fn default_categories(self) -> &'static [&'static str] {
        match self {
            Self::Income => &INCOME_CATEGORIES,
            Self::Expense => &EXPENSE_CATEGORIES,
        }
    }
}

/// A recorded income or expense event, in the shape it is persisted.
///
/// `amount` is never negative; the direction comes from `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: String,
}

impl Transaction {
    pub fn from_draft(draft: TransactionDraft, id: String, created_at: String) -> ClientResult<Self> {
        Ok(Self {
            id,
            description: validate_description(&draft.description)?,
            amount: validate_amount(draft.amount)?,
            kind: draft.kind,
            category: normalize_category(draft.category.as_deref())?,
            date: draft.date,
            created_at,
        })
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub date: NaiveDate,
}

/// Partial edit. `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionUpdate {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    pub fn apply_to(&self, current: &Transaction) -> ClientResult<Transaction> {
        let mut updated = current.clone();
        if let Some(description) = &self.description {
            updated.description = validate_description(description)?;
        }
        if let Some(amount) = self.amount {
            updated.amount = validate_amount(amount)?;
        }
        if let Some(kind) = self.kind {
            updated.kind = kind;
        }
        if let Some(category) = &self.category {
            updated.category = normalize_category(Some(category))?;
        }
        if let Some(date) = self.date {
            updated.date = date;
        }
        Ok(updated)
    }
}

fn validate_description(value: &str) -> ClientResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_argument(
            "Description must not be empty.",
        ));
    }
    reject_control_characters("Description", trimmed)?;
    Ok(trimmed.to_string())
}

fn reject_control_characters(field: &str, value: &str) -> ClientResult<()> {
    if value.chars().any(char::is_control) {
        return Err(ClientError::invalid_argument(&format!(
            "{field} must be a single line without control characters."
        )));
    }
    Ok(())
}

fn validate_amount(amount: Decimal) -> ClientResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(ClientError::invalid_argument_with_recovery(
            &format!("Amount must be greater than zero, got {amount}."),
            vec![
                "Enter the amount without a sign; use `--type income` or `--type expense` for direction."
                    .to_string(),
            ],
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(ClientError::invalid_argument_with_recovery(
            &format!("Amount must be at most {MAX_AMOUNT}, got {amount}."),
            vec!["Split very large amounts across several transactions.".to_string()],
        ));
    }
    let digits = amount.normalize().mantissa().unsigned_abs().to_string().len();
    if digits > MAX_SIGNIFICANT_DIGITS {
        return Err(ClientError::invalid_argument(&format!(
            "Amount {amount} has more than {MAX_SIGNIFICANT_DIGITS} significant digits."
        )));
    }
    Ok(amount)
}

fn normalize_category(value: Option<&str>) -> ClientResult<String> {
    match value.map(str::trim) {
        Some(category) if !category.is_empty() => {
            reject_control_characters("Category", category)?;
            Ok(category.to_string())
        }
        _ => Ok(DEFAULT_CATEGORY.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::{MAX_AMOUNT, Transaction, TransactionDraft, TransactionKind, TransactionUpdate};

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
    }

    fn coffee() -> Transaction {
        Transaction {
            id: "txn_1".to_string(),
            description: "Coffee".to_string(),
            amount: Decimal::new(450, 2),
            kind: TransactionKind::Expense,
            category: "food".to_string(),
            date: date("2024-01-05"),
            created_at: "2024-01-05T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn serializes_with_original_storage_field_names() {
        let value = serde_json::to_value(coffee());
        assert!(value.is_ok());
        if let Ok(json_value) = value {
            assert_eq!(
                json_value,
                json!({
                    "id": "txn_1",
                    "description": "Coffee",
                    "amount": 4.5,
                    "type": "expense",
                    "category": "food",
                    "date": "2024-01-05",
                    "createdAt": "2024-01-05T09:30:00.000Z",
                })
            );
        }
    }

    #[test]
    fn deserializes_numeric_ids_written_as_strings() {
        let raw = r#"{"id":"1704447000000","description":"Salary","amount":2500,"type":"income","category":"salary","date":"2024-01-01","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let parsed: Result<Transaction, _> = serde_json::from_str(raw);
        assert!(parsed.is_ok());
        if let Ok(transaction) = parsed {
            assert_eq!(transaction.amount, Decimal::from(2500));
            assert!(transaction.is_income());
        }
    }

    #[test]
    fn draft_is_trimmed_and_category_defaults_to_other() {
        let draft = TransactionDraft {
            description: "  Bus ticket ".to_string(),
            amount: Decimal::new(275, 2),
            kind: TransactionKind::Expense,
            category: Some("   ".to_string()),
            date: date("2024-02-01"),
        };
        let built = Transaction::from_draft(draft, "txn_2".to_string(), String::new());
        assert!(built.is_ok());
        if let Ok(transaction) = built {
            assert_eq!(transaction.description, "Bus ticket");
            assert_eq!(transaction.category, "other");
            assert_eq!(transaction.signed_amount(), Decimal::new(-275, 2));
        }
    }

    #[test]
    fn draft_rejects_blank_description_and_non_positive_amount() {
        let blank = TransactionDraft {
            description: "   ".to_string(),
            amount: Decimal::ONE,
            kind: TransactionKind::Income,
            category: None,
            date: date("2024-02-01"),
        };
        assert!(Transaction::from_draft(blank, "a".to_string(), String::new()).is_err());

        let zero = TransactionDraft {
            description: "Gift".to_string(),
            amount: Decimal::ZERO,
            kind: TransactionKind::Income,
            category: None,
            date: date("2024-02-01"),
        };
        assert!(Transaction::from_draft(zero, "b".to_string(), String::new()).is_err());
    }

    #[test]
    fn update_keeps_unspecified_fields() {
        let original = coffee();
        let update = TransactionUpdate {
            amount: Decimal::from_str("5.25").ok(),
            ..TransactionUpdate::default()
        };
        let updated = update.apply_to(&original);
        assert!(updated.is_ok());
        if let Ok(transaction) = updated {
            assert_eq!(transaction.amount, Decimal::new(525, 2));
            assert_eq!(transaction.id, original.id);
            assert_eq!(transaction.description, original.description);
            assert_eq!(transaction.kind, original.kind);
            assert_eq!(transaction.category, original.category);
            assert_eq!(transaction.date, original.date);
            assert_eq!(transaction.created_at, original.created_at);
        }
    }

    #[test]
    fn kind_parsing_is_case_insensitive() {
        assert_eq!(TransactionKind::parse("Income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::parse(" EXPENSE "), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::parse("transfer"), None);
        assert!(TransactionKind::Expense.default_categories().contains(&"food"));
    }

    fn draft_with(description: &str, amount: &str, category: Option<&str>) -> TransactionDraft {
        TransactionDraft {
            description: description.to_string(),
            amount: Decimal::from_str(amount).unwrap_or_default(),
            kind: TransactionKind::Expense,
            category: category.map(str::to_string),
            date: date("2024-03-01"),
        }
    }

    #[test]
    fn largest_amount_survives_json_round_trip() {
        assert_eq!(MAX_AMOUNT.to_string(), "999999999999.99");
        let built = Transaction::from_draft(
            draft_with("Condo", "999999999999.99", None),
            "txn_3".to_string(),
            String::new(),
        );
        assert!(built.is_ok());
        if let Ok(transaction) = built {
            let encoded = serde_json::to_string(&transaction).unwrap_or_default();
            let decoded: Result<Transaction, _> = serde_json::from_str(&encoded);
            assert!(decoded.is_ok());
            if let Ok(reloaded) = decoded {
                assert_eq!(reloaded.amount, MAX_AMOUNT);
            }
        }
    }

    #[test]
    fn amounts_past_the_bound_or_precision_are_rejected() {
        for amount in [
            "79228162514264337593543950335",
            "50000000000000000000000000000",
            "1000000000000",
            "12345678901234567.89",
            "0.1234567890123456",
        ] {
            let built = Transaction::from_draft(draft_with("Huge", amount, None), "x".to_string(), String::new());
            assert!(built.is_err(), "{amount} should be rejected");
            if let Err(error) = built {
                assert_eq!(error.code, "invalid_argument");
            }
        }

        let update = TransactionUpdate {
            amount: Decimal::from_str("79228162514264337593543950335").ok(),
            ..TransactionUpdate::default()
        };
        assert!(update.apply_to(&coffee()).is_err());
    }

    #[test]
    fn line_breaks_in_text_fields_are_rejected() {
        let description = Transaction::from_draft(draft_with("Milk\neggs", "3", None), "a".to_string(), String::new());
        assert!(description.is_err());

        let category = Transaction::from_draft(
            draft_with("Milk", "3", Some("food\r")),
            "b".to_string(),
            String::new(),
        );
        assert!(category.is_ok(), "trailing whitespace is trimmed");

        let inner = Transaction::from_draft(
            draft_with("Milk", "3", Some("gro\tceries")),
            "c".to_string(),
            String::new(),
        );
        assert!(inner.is_err());

        let update = TransactionUpdate {
            description: Some("Lunch\rwith team".to_string()),
            ..TransactionUpdate::default()
        };
        assert!(update.apply_to(&coffee()).is_err());
    }
}
