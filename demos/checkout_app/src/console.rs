// demos/checkout_app/src/console.rs

use chrono::{NaiveDate, NaiveTime};
use kundali::{ChartStyle, FormData, Gender, Language};
use std::io::{self, Write};

/// Reads one trimmed line from stdin, with a prompt.
pub fn ask(label: &str) -> String {
  print!("{label}: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  if io::stdin().read_line(&mut line).is_err() {
    return String::new();
  }
  line.trim().to_string()
}

pub fn ask_yes_no(label: &str) -> bool {
  loop {
    match ask(&format!("{label} [y/n]")).to_lowercase().as_str() {
      "y" | "yes" => return true,
      "n" | "no" => return false,
      _ => println!("Please answer y or n."),
    }
  }
}

/// Loops until the input parses, or returns `None` on an empty line so the
/// field-level validation can flag it.
pub fn ask_date(label: &str) -> Option<NaiveDate> {
  loop {
    let raw = ask(&format!("{label} (YYYY-MM-DD)"));
    if raw.is_empty() {
      return None;
    }
    match raw.parse() {
      Ok(date) => return Some(date),
      Err(_) => println!("That is not a valid date."),
    }
  }
}

pub fn ask_time(label: &str) -> Option<NaiveTime> {
  loop {
    let raw = ask(&format!("{label} (HH:MM)"));
    if raw.is_empty() {
      return None;
    }
    match NaiveTime::parse_from_str(&raw, "%H:%M") {
      Ok(time) => return Some(time),
      Err(_) => println!("That is not a valid time."),
    }
  }
}

pub fn ask_gender() -> Option<Gender> {
  loop {
    match ask("Gender (male/female, empty to skip)").to_lowercase().as_str() {
      "" => return None,
      "male" | "m" => return Some(Gender::Male),
      "female" | "f" => return Some(Gender::Female),
      _ => println!("Please answer male or female."),
    }
  }
}

pub fn ask_language() -> Language {
  match ask("Language (english/hindi, default english)").to_lowercase().as_str() {
    "hindi" | "hi" => Language::Hindi,
    _ => Language::English,
  }
}

pub fn ask_chart_style() -> ChartStyle {
  match ask("Chart style (north/south, default north)").to_lowercase().as_str() {
    "south" | "s" => ChartStyle::SouthIndian,
    _ => ChartStyle::NorthIndian,
  }
}

/// The order summary shown on the review stage.
pub fn print_summary(form: &FormData, amount: u32, currency: &str) {
  println!();
  println!("--- Order Summary -------------------------------");
  println!("  Service:     Personalized Cosmic Reading");
  println!("  Amount:      {amount} {currency}");
  println!("  Name:        {}", form.name);
  println!("  Email:       {}", form.email);
  println!("  Gender:      {:?}", form.gender);
  println!("  Birth date:  {}", form.birth_date);
  println!("  Birth time:  {}", form.birth_time.format("%H:%M"));
  println!("  Birth place: {}", form.birth_place);
  println!("  Language:    {:?}", form.language);
  println!("  Chart style: {:?}", form.chart_style);
  println!("-------------------------------------------------");
}
