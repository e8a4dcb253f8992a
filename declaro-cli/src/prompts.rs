//! Blocking console prompts. Malformed input re-prompts; these never fail.

use std::io::{self, Write};

fn read_line(label: &str) -> String {
    print!("{label}: ");
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s).ok();
    s.trim().to_string()
}

pub fn prompt_year() -> i32 {
    loop {
        match year_from_input(&read_line("Fill in expense year")) {
            Ok(year) => return year,
            Err(msg) => println!("{msg}"),
        }
    }
}

pub fn prompt_month() -> u32 {
    loop {
        match month_from_input(&read_line("Fill in expense month")) {
            Ok(month) => return month,
            Err(msg) => println!("{msg}"),
        }
    }
}

pub fn prompt_amount() -> f64 {
    loop {
        match amount_from_input(&read_line("Fill in expense amount")) {
            Ok(amount) => return amount,
            Err(msg) => println!("{msg}"),
        }
    }
}

/// Yes/no question; loops until the answer is y or n.
pub fn confirm(question: &str) -> bool {
    loop {
        let answer = read_line(&format!("{question} [y to continue / n to quit]?"));
        match answer.to_lowercase().as_str() {
            "y" => return true,
            "n" => return false,
            _ => println!("Please input y or n"),
        }
    }
}

fn year_from_input(input: &str) -> Result<i32, String> {
    let year: i32 = input
        .parse()
        .map_err(|_| "Please fill in an integer".to_string())?;
    if !(2000..=2099).contains(&year) {
        return Err(format!("Please fill in a year between 2000 and 2099, got {year}"));
    }
    Ok(year)
}

fn month_from_input(input: &str) -> Result<u32, String> {
    let month: u32 = input
        .parse()
        .map_err(|_| "Please fill in an integer".to_string())?;
    if !(1..=12).contains(&month) {
        return Err(format!("Please fill in a month between 1 and 12, got {month}"));
    }
    Ok(month)
}

fn amount_from_input(input: &str) -> Result<f64, String> {
    if let Ok(amount) = input.parse::<f64>() {
        return Ok(amount);
    }
    // Operators tend to type Dutch comma decimals.
    input
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| "Please fill in a number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_validation() {
        assert_eq!(year_from_input("2026"), Ok(2026));
        assert!(year_from_input("abc").is_err());
        assert!(year_from_input("1999").is_err());
        assert!(year_from_input("2100").is_err());
    }

    #[test]
    fn test_month_validation() {
        assert_eq!(month_from_input("2"), Ok(2));
        assert_eq!(month_from_input("12"), Ok(12));
        assert!(month_from_input("0").is_err());
        assert!(month_from_input("13").is_err());
        assert!(month_from_input("twee").is_err());
    }

    #[test]
    fn test_amount_accepts_comma_decimal() {
        assert_eq!(amount_from_input("42.50"), Ok(42.50));
        assert_eq!(amount_from_input("42,50"), Ok(42.50));
        assert!(amount_from_input("veel").is_err());
    }
}
