//! Console rendering and operator input validation
//!
//! Validation is split into pure parse functions and thin reprompt loops
//! around them, so the rules are unit-testable without a terminal.
use std::io::{self, Write};

use crate::datatypes::{Asset, CountryCode, DataError};

/// Column widths: country, article name, model, quantity, unit price,
/// total price, article number.
const COLUMNS: [usize; 7] = [10, 20, 10, 8, 15, 15, 15];

fn table_width() -> usize {
    COLUMNS.iter().sum()
}

pub fn parse_non_empty(input: &str) -> Result<String, DataError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(DataError::InvalidAsset(
            "input must not be empty".to_string(),
        ))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn parse_country(input: &str) -> Result<CountryCode, DataError> {
    Ok(CountryCode::new(input)?)
}

pub fn parse_quantity(input: &str) -> Result<u32, DataError> {
    input.trim().parse::<u32>().map_err(|_| {
        DataError::InvalidAsset("quantity must be a whole number of at least 0".to_string())
    })
}

pub fn parse_price(input: &str) -> Result<f64, DataError> {
    let price = input.trim().parse::<f64>().map_err(|_| {
        DataError::InvalidAsset("unit price must be a non-negative amount".to_string())
    })?;
    if !price.is_finite() || price < 0.0 {
        return Err(DataError::InvalidAsset(
            "unit price must be a non-negative amount".to_string(),
        ));
    }
    Ok(price)
}

/// Parse a 1-based selection into a list of the given length, returning
/// the 0-based index.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, DataError> {
    let choice = input.trim().parse::<usize>().map_err(|_| {
        DataError::InvalidSelection(format!("expected a number between 1 and {}", len))
    })?;
    if choice < 1 || choice > len {
        return Err(DataError::InvalidSelection(format!(
            "expected a number between 1 and {}",
            len
        )));
    }
    Ok(choice - 1)
}

/// Case-insensitive `y` confirms; any other answer cancels.
pub fn parse_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// One line of operator input; a read failure degrades to an empty line,
/// which every caller treats as invalid input.
pub fn read_line() -> String {
    let line: Result<String, _> = try_read!("{}\n");
    line.unwrap_or_default()
}

fn show_prompt(prompt: &str) {
    print!("{}: ", prompt);
    let _ = io::stdout().flush();
}

/// Show a prompt and read one raw line, no validation.
pub fn prompt(prompt: &str) -> String {
    show_prompt(prompt);
    read_line()
}

pub fn prompt_non_empty(prompt: &str) -> String {
    loop {
        show_prompt(prompt);
        match parse_non_empty(&read_line()) {
            Ok(value) => return value,
            Err(err) => warn(&err.to_string()),
        }
    }
}

pub fn prompt_country(prompt: &str) -> CountryCode {
    loop {
        show_prompt(prompt);
        match parse_country(&read_line()) {
            Ok(value) => return value,
            Err(err) => warn(&err.to_string()),
        }
    }
}

pub fn prompt_quantity(prompt: &str) -> u32 {
    loop {
        show_prompt(prompt);
        match parse_quantity(&read_line()) {
            Ok(value) => return value,
            Err(err) => warn(&err.to_string()),
        }
    }
}

pub fn prompt_price(prompt: &str) -> f64 {
    loop {
        show_prompt(prompt);
        match parse_price(&read_line()) {
            Ok(value) => return value,
            Err(err) => warn(&err.to_string()),
        }
    }
}

pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Fixed-width listing with rule lines above and below.
pub fn render_table(assets: &[Asset]) -> String {
    let rule = "-".repeat(table_width());
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&render_row(
        "Country",
        "Article Name",
        "Model",
        "Quantity",
        "Unit Price",
        "Total Price",
        "Article Number",
    ));
    out.push_str(&rule);
    out.push('\n');
    for asset in assets {
        out.push_str(&render_row(
            &asset.country.to_string(),
            &asset.article_name,
            &asset.model,
            &asset.quantity.to_string(),
            &format_currency(asset.unit_price),
            &format_currency(asset.total_price()),
            &asset.article_number.to_string(),
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn render_row(
    country: &str,
    name: &str,
    model: &str,
    quantity: &str,
    unit_price: &str,
    total_price: &str,
    article_number: &str,
) -> String {
    format!(
        "{:<cw$}{:<nw$}{:<mw$}{:>qw$}{:>uw$}{:>tw$}{:>aw$}\n",
        country,
        name,
        model,
        quantity,
        unit_price,
        total_price,
        article_number,
        cw = COLUMNS[0],
        nw = COLUMNS[1],
        mw = COLUMNS[2],
        qw = COLUMNS[3],
        uw = COLUMNS[4],
        tw = COLUMNS[5],
        aw = COLUMNS[6],
    )
}

pub fn render_dashboard(asset_count: usize) -> String {
    let rule = "=".repeat(40);
    format!(
        "{rule}\n\
         {:^40}\n\
         {rule}\n\
         Assets on default file: {}\n\n\
         1. Add asset\n\
         2. View assets\n\
         3. Update asset\n\
         4. Delete asset\n\
         5. Exit\n",
        "ASSETBOOK INVENTORY",
        asset_count,
        rule = rule,
    )
}

/// Warning treatment: yellow, then control returns to the caller.
pub fn warn(message: &str) {
    println!("\x1b[33m{}\x1b[0m", message);
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

/// Acknowledgement keypress before returning to the menu.
pub fn pause() {
    show_prompt("Press enter to continue");
    let _ = read_line();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatypes::{ArticleNumber, Asset};

    #[test]
    fn parse_non_empty_trims() {
        assert_eq!(parse_non_empty("  Laptop ").unwrap(), "Laptop");
        assert!(parse_non_empty("   ").is_err());
        assert!(parse_non_empty("").is_err());
    }

    #[test]
    fn parse_country_normalizes() {
        assert_eq!(parse_country("usa").unwrap().to_string(), "USA");
        assert!(parse_country("US").is_err());
        assert!(parse_country("USAA").is_err());
        assert!(parse_country("12A").is_err());
    }

    #[test]
    fn parse_quantity_rejects_negative_and_garbage() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("three").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn parse_price_rejects_negative_and_garbage() {
        assert_eq!(parse_price("999.99").unwrap(), 999.99);
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert!(parse_price("-0.01").is_err());
        assert!(parse_price("cheap").is_err());
        assert!(parse_price("nan").is_err());
    }

    #[test]
    fn parse_selection_bounds() {
        assert_eq!(parse_selection("1", 3).unwrap(), 0);
        assert_eq!(parse_selection("3", 3).unwrap(), 2);
        assert!(matches!(
            parse_selection("0", 3),
            Err(DataError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("4", 3),
            Err(DataError::InvalidSelection(_))
        ));
        assert!(matches!(
            parse_selection("x", 3),
            Err(DataError::InvalidSelection(_))
        ));
    }

    #[test]
    fn confirmation_accepts_only_y() {
        assert!(parse_confirmation("y"));
        assert!(parse_confirmation("Y"));
        assert!(parse_confirmation(" y "));
        assert!(!parse_confirmation("n"));
        assert!(!parse_confirmation("yes"));
        assert!(!parse_confirmation(""));
    }

    #[test]
    fn table_rows_have_fixed_width() {
        let asset = Asset::new(
            ArticleNumber::new(1),
            "Laptop",
            "X1",
            3,
            999.99,
            CountryCode::new("SWE").unwrap(),
        )
        .unwrap();
        let table = render_table(&[asset]);
        let width = table_width();
        for line in table.lines() {
            assert_eq!(line.chars().count(), width);
        }
        assert!(table.contains("ATS0001"));
        assert!(table.contains("$999.99"));
        assert!(table.contains("$2999.97"));
    }
}
