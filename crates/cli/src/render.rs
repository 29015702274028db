//! Text and JSON rendering of the form state.

use clap::ValueEnum;
use hedge_calc_domain::{CalculationResult, Price};
use hedge_calc_form::{FormField, FormInputs, FormPhase, HedgeForm};
use prettytable::{Table, format, row};
use rust_decimal::Decimal;
use serde_json::json;

/// Output format for results and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Rounds for display and drops trailing zeros.
fn display(value: Decimal, dp: u32) -> String {
    value.round_dp(dp).normalize().to_string()
}

/// An inverted range edge, or `missing` when it has no positive reciprocal.
fn display_edge(edge: Option<Price>, dp: u32, missing: &str) -> String {
    edge.map_or_else(|| missing.to_string(), |price| display(price.value, dp))
}

fn boxed_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

/// The results panel: position, USD values, hedges and price range.
pub fn result_panel(result: &CalculationResult, output: OutputFormat) -> String {
    match output {
        OutputFormat::Json => json!({ "result": result }).to_string(),
        OutputFormat::Table => {
            let t1 = result.token1_symbol.as_str();
            let t2 = result.token2_symbol.as_str();

            let mut position = boxed_table();
            position.set_titles(row!["Token", "Amount", "Value (USD)", "Hedge"]);
            position.add_row(row![
                t1,
                r->display(result.token1_amount, 6),
                r->format!("{:.2}", result.token1_value_usd),
                r->display(result.token1_hedge, 6)
            ]);
            position.add_row(row![
                t2,
                r->display(result.token2_amount, 6),
                r->format!("{:.2}", result.token2_value_usd),
                r->display(result.token2_hedge, 6)
            ]);
            let total = result
                .total_position_value_usd()
                .map_or_else(|| "n/a".to_string(), |total| format!("{total:.2}"));
            position.add_row(row!["Total", "", r->total, ""]);

            let mut range = boxed_table();
            range.set_titles(row!["Edge", format!("{t1}/{t2}"), format!("{t2}/{t1}")]);
            let inverted = result.price_range.invert();
            range.add_row(row![
                "Lower",
                r->display(result.price_range.lower_price.value, 10),
                r->display_edge(inverted.lower_price, 6, "n/a")
            ]);
            range.add_row(row![
                "Current",
                r->display(result.price_range.current_price.value, 10),
                r->display_edge(inverted.current_price, 6, "n/a")
            ]);
            range.add_row(row![
                "Upper",
                r->display(result.price_range.upper_price.value, 10),
                r->display_edge(inverted.upper_price, 6, "unbounded")
            ]);

            format!(
                "Position for {:.2} USD in {} (range -{} / +{})\n{}\nPair price: {} {}\n{}",
                result.total_value_usd,
                result.pair_label(),
                result.lower_bound,
                result.upper_bound,
                position,
                display(result.pair_price.value, 10),
                result.pair_label(),
                range
            )
        }
    }
}

/// The error panel: a single message replacing any result.
pub fn error_panel(message: &str, output: OutputFormat) -> String {
    match output {
        OutputFormat::Json => json!({ "error": message }).to_string(),
        OutputFormat::Table => format!("Error: {message}"),
    }
}

/// Current inputs, with the phase and whatever panel the form shows.
pub fn form_summary(form: &HedgeForm, output: OutputFormat) -> String {
    match output {
        OutputFormat::Json => json!({
            "inputs": form.inputs(),
            "phase": form.phase(),
            "result": form.result(),
            "error": form.error(),
        })
        .to_string(),
        OutputFormat::Table => {
            let mut out = inputs_table(form.inputs()).to_string();
            let phase = match form.phase() {
                FormPhase::Idle => "idle",
                FormPhase::Displaying => "displaying result",
                FormPhase::ErrorDisplayed => "displaying error",
            };
            out.push_str(&format!("State: {phase}\n"));
            if let Some(result) = form.result() {
                out.push_str(&result_panel(result, output));
            } else if let Some(error) = form.error() {
                out.push_str(&error_panel(error, output));
            }
            out
        }
    }
}

fn inputs_table(inputs: &FormInputs) -> Table {
    let mut table = boxed_table();
    table.set_titles(row!["Field", "Label", "Value"]);
    for (field, value) in inputs.iter() {
        table.add_row(row![field.name(), field.label(), value]);
    }
    table
}

/// Field reference: name, default and help text.
pub fn fields_table() -> String {
    let mut table = boxed_table();
    table.set_titles(row!["Field", "Default", "Help"]);
    for field in FormField::ALL {
        table.add_row(row![field.name(), field.default_value(), field.help()]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calculated() -> HedgeForm {
        let mut form = HedgeForm::default();
        form.calculate().unwrap();
        form
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(display(dec!(7032.3488045007), 4), "7032.3488");
        assert_eq!(display(dec!(2.000000), 6), "2");
        assert_eq!(display(dec!(0.0002844), 10), "0.0002844");
    }

    #[test]
    fn test_result_table() {
        let form = calculated();
        let text = result_panel(form.result().unwrap(), OutputFormat::Table);

        assert!(text.contains("S/WETH"));
        assert!(text.contains("7032.348805"));
        assert!(text.contains("5000.00"));
        assert!(text.contains("10000.00"));
        assert!(text.contains("0.0002844"));
    }

    fn calculated_with_lower_bound(lower_bound: &str) -> HedgeForm {
        let mut form = HedgeForm::default();
        form.set(FormField::LowerBound, lower_bound);
        form.calculate().unwrap();
        form
    }

    #[test]
    fn test_inverted_range_unbounded_at_full_lower_bound() {
        let form = calculated_with_lower_bound("100");
        let text = result_panel(form.result().unwrap(), OutputFormat::Table);

        assert!(text.contains("unbounded"));
        assert!(text.contains("3516.174402"));
    }

    #[test]
    fn test_inverted_range_unbounded_past_full_lower_bound() {
        let form = calculated_with_lower_bound("150");
        let text = result_panel(form.result().unwrap(), OutputFormat::Table);

        assert!(text.contains("unbounded"));
        assert!(text.contains("-0.0001422"));
        assert!(!text.contains("-7032"));
    }

    #[test]
    fn test_inverted_range_bounded_by_default() {
        let form = calculated();
        let text = result_panel(form.result().unwrap(), OutputFormat::Table);

        assert!(!text.contains("unbounded"));
        assert!(!text.contains("n/a"));
    }

    #[test]
    fn test_total_row_at_decimal_limit() {
        let mut form = HedgeForm::default();
        form.set(FormField::Token1Price, "1");
        form.set(FormField::Token2Price, "1");
        form.set(FormField::TotalLiquidity, "79228162514264337593543950335");
        form.calculate().unwrap();

        let text = result_panel(form.result().unwrap(), OutputFormat::Table);
        assert!(text.contains("Total"));
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_display_edge() {
        assert_eq!(display_edge(Some(Price::new(dec!(0.25))), 6, "n/a"), "0.25");
        assert_eq!(display_edge(None, 6, "unbounded"), "unbounded");
    }

    #[test]
    fn test_result_json() {
        let form = calculated();
        let text = result_panel(form.result().unwrap(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["result"]["token1_symbol"], "S");
        let token2_amount: Decimal = value["result"]["token2_amount"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(token2_amount, dec!(2));
    }

    #[test]
    fn test_error_panels() {
        assert_eq!(
            error_panel("Token 1 Symbol is required", OutputFormat::Table),
            "Error: Token 1 Symbol is required"
        );
        let value: serde_json::Value =
            serde_json::from_str(&error_panel("bad", OutputFormat::Json)).unwrap();
        assert_eq!(value["error"], "bad");
    }

    #[test]
    fn test_summary_shows_error_after_failure() {
        let mut form = HedgeForm::default();
        form.set(FormField::TotalLiquidity, "abc");
        let _ = form.calculate();

        let text = form_summary(&form, OutputFormat::Table);
        assert!(text.contains("displaying error"));
        assert!(text.contains("Total Liquidity (USD) must be a number"));
    }

    #[test]
    fn test_fields_table_lists_defaults() {
        let text = fields_table();
        assert!(text.contains("token1Price"));
        assert!(text.contains("0.7110"));
        assert!(text.contains("WETH"));
    }
}
