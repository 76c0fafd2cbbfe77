//! Key/value backup codec
//!
//! Encodes the whole application state as a two-column `key,value` CSV and
//! decodes it back. Scalar settings become plain string rows; each entity
//! collection is JSON-encoded into a single value field. Encoding never
//! fails; decoding fails atomically on structural or type errors so a bad
//! file can never half-apply.

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PlanError, PlanResult};
use crate::models::{AppState, Money};

const STATE_HEADER: &str = "key,value";

/// Quote a value so embedded commas, quotes, and newlines survive
///
/// Values containing a comma, double quote, or newline are wrapped in double
/// quotes with internal quotes doubled. Anything else passes through as is.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Invert [`escape_csv`]: strip one layer of surrounding quotes and un-double
/// internal quotes. Unquoted values pass through as is.
pub fn unescape_csv(s: &str) -> String {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s[1..s.len() - 1].replace("\"\"", "\"")
    } else {
        s.to_string()
    }
}

/// Encode the full application state as key/value CSV text
pub fn encode_state(state: &AppState) -> String {
    let mut out = String::from(STATE_HEADER);
    out.push('\n');

    push_row(&mut out, "theme", &state.theme.to_string());
    push_row(&mut out, "accentColor", &state.accent_color.to_string());
    push_row(&mut out, "currency", &state.currency.to_string());
    push_row(&mut out, "fontSize", &state.font_size.to_string());
    push_row(&mut out, "monthlyIncome", &number_field(state.monthly_income));
    push_row(&mut out, "budget", &json_field(&state.budget));
    push_row(&mut out, "transactions", &json_field(&state.transactions));
    push_row(&mut out, "savingsGoals", &json_field(&state.savings_goals));
    push_row(&mut out, "budgetGoals", &json_field(&state.budget_goals));
    push_row(&mut out, "incomeCategories", &json_field(&state.income_categories));

    out
}

fn push_row(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(',');
    out.push_str(&escape_csv(value));
    out.push('\n');
}

/// Render a money value the way the wire format stores numbers: whole
/// currency units without a decimal point, fractional amounts with one
pub fn number_field(amount: Money) -> String {
    serde_json::to_string(&amount).unwrap_or_else(|_| "0".to_string())
}

fn json_field<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}

/// Decode key/value CSV text back into an [`AppState`]
///
/// The first non-blank line must be the `key,value` header (case-insensitive).
/// Each following line splits on the first comma only, so quoted values keep
/// their embedded commas. Unknown keys are ignored and missing keys fall back
/// to defaults; unrecognized preference values degrade to their default with
/// a warning, while a non-numeric income or malformed collection aborts the
/// whole decode.
pub fn decode_state(content: &str) -> PlanResult<AppState> {
    let mut lines = content.lines();

    let header = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line,
            None => return Err(PlanError::Format("Backup file is empty".to_string())),
        }
    };

    if !header.trim().eq_ignore_ascii_case(STATE_HEADER) {
        return Err(PlanError::Format(format!(
            "Expected header '{}', found '{}'",
            STATE_HEADER,
            header.trim()
        )));
    }

    let mut state = AppState::default();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, raw_value)) = line.split_once(',') else {
            continue;
        };
        let value = unescape_csv(raw_value);

        match key.trim() {
            "theme" => state.theme = parse_pref(&value, "theme"),
            "accentColor" => state.accent_color = parse_pref(&value, "accent color"),
            "currency" => state.currency = parse_pref(&value, "currency"),
            "fontSize" => state.font_size = parse_pref(&value, "font size"),
            "monthlyIncome" => {
                state.monthly_income = Money::parse(&value).map_err(|_| {
                    PlanError::Validation(format!("Monthly income is not a number: '{}'", value))
                })?;
            }
            "budget" => state.budget = parse_collection(&value, "budget")?,
            "transactions" => state.transactions = parse_collection(&value, "transactions")?,
            "savingsGoals" => state.savings_goals = parse_collection(&value, "savingsGoals")?,
            "budgetGoals" => state.budget_goals = parse_collection(&value, "budgetGoals")?,
            "incomeCategories" => {
                state.income_categories = parse_collection(&value, "incomeCategories")?;
            }
            _ => {}
        }
    }

    state.ensure_other_category();
    Ok(state)
}

fn parse_pref<T: FromStr + Default>(value: &str, field: &str) -> T {
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!("Unrecognized {} value '{}', using default", field, value);
            T::default()
        }
    }
}

fn parse_collection<T: DeserializeOwned>(value: &str, key: &str) -> PlanResult<Vec<T>> {
    serde_json::from_str(value).map_err(|e| {
        PlanError::Validation(format!("Backup field '{}' is not a valid list: {}", key, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetCategory, Currency, SavingsGoal, SpendingGoal, Theme, Transaction, TransactionKind,
    };

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        state.theme = Theme::Dark;
        state.currency = Currency::Eur;
        state.monthly_income = Money::from_cents(250050);
        state.budget.insert(
            0,
            BudgetCategory::new("Food, drink & \"fun\"", Money::from_cents(30000), "#f97316"),
        );
        state.transactions = vec![
            Transaction::new(
                TransactionKind::Expense,
                "Lunch, \"quick\"\nwith a receipt note",
                Money::from_cents(1250),
                "Food, drink & \"fun\"",
                "2024-01-05",
            ),
            Transaction::new(
                TransactionKind::Income,
                "Paycheck",
                Money::from_cents(250000),
                "Salary",
                "2024-01-01",
            ),
        ];
        state.savings_goals = vec![SavingsGoal::new(
            "Emergency",
            "Emergency",
            Money::from_cents(10000),
            Money::from_cents(100000),
            "2024-12-31",
            "#ef4444",
        )];
        state.budget_goals = vec![SpendingGoal::new(
            state.budget[0].id.clone(),
            "Cap food",
            Money::from_cents(25000),
            "2024-06-30",
        )];
        state
    }

    #[test]
    fn test_escape_only_when_needed() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_unescape_inverts_escape() {
        for raw in ["plain", "a,b", "say \"hi\"", "two\nlines", "", "\""] {
            assert_eq!(unescape_csv(&escape_csv(raw)), raw);
        }
    }

    #[test]
    fn test_round_trip_with_awkward_characters() {
        let state = sample_state();
        let encoded = encode_state(&state);
        let decoded = decode_state(&encoded).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_encode_key_order() {
        let encoded = encode_state(&AppState::default());
        let keys: Vec<&str> = encoded
            .lines()
            .skip(1)
            .filter_map(|l| l.split_once(',').map(|(k, _)| k))
            .collect();
        assert_eq!(
            keys,
            vec![
                "theme",
                "accentColor",
                "currency",
                "fontSize",
                "monthlyIncome",
                "budget",
                "transactions",
                "savingsGoals",
                "budgetGoals",
                "incomeCategories"
            ]
        );
    }

    #[test]
    fn test_encode_scalars_are_plain_rows() {
        let encoded = encode_state(&AppState::default());
        assert!(encoded.starts_with("key,value\n"));
        assert!(encoded.contains("theme,light\n"));
        assert!(encoded.contains("currency,USD\n"));
        assert!(encoded.contains("monthlyIncome,0\n"));
    }

    #[test]
    fn test_income_encodes_as_plain_number() {
        let mut state = AppState::default();
        state.monthly_income = Money::from_cents(120050);
        assert!(encode_state(&state).contains("monthlyIncome,1200.5\n"));

        state.monthly_income = Money::from_cents(120000);
        assert!(encode_state(&state).contains("monthlyIncome,1200\n"));
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let err = decode_state("foo,bar\ntheme,dark\n").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_decode_rejects_empty_file() {
        assert!(decode_state("").unwrap_err().is_format());
        assert!(decode_state("\n\n  \n").unwrap_err().is_format());
    }

    #[test]
    fn test_decode_header_is_case_insensitive() {
        let state = decode_state("Key,Value\ntheme,dark\n").unwrap();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_decode_handles_crlf() {
        let state = decode_state("key,value\r\ntheme,dark\r\ncurrency,EUR\r\n").unwrap();
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.currency, Currency::Eur);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let state = decode_state("key,value\nnotAKey,whatever\ntheme,dark\n").unwrap();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_decode_missing_keys_fall_back_to_defaults() {
        let state = decode_state("key,value\n").unwrap();
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_decode_unknown_preference_value_uses_default() {
        let state = decode_state("key,value\ntheme,neon\ncurrency,JPY\n").unwrap();
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.currency, Currency::Usd);
    }

    #[test]
    fn test_decode_rejects_non_numeric_income() {
        let err = decode_state("key,value\nmonthlyIncome,lots\n").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_decode_rejects_malformed_transactions() {
        let err = decode_state("key,value\ntransactions,{\"not\":\"a list\"}\n").unwrap_err();
        assert!(err.is_validation());

        let err = decode_state("key,value\ntransactions,not json at all\n").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_decode_restores_missing_sentinel_category() {
        let state = decode_state("key,value\nbudget,[]\n").unwrap();
        assert_eq!(state.budget.len(), 1);
        assert!(state.budget[0].is_other());
    }

    #[test]
    fn test_decode_value_with_commas_survives_first_comma_split() {
        let encoded = "key,value\nincomeCategories,\"[\"\"Salary\"\",\"\"Side, hustle\"\"]\"\n";
        let state = decode_state(encoded).unwrap();
        assert_eq!(state.income_categories, vec!["Salary", "Side, hustle"]);
    }
}
