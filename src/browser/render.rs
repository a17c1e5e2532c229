//! Plain-text formatting for the terminal browser.

use rust_decimal::Decimal;

use crate::browser::state::{BrowserState, DetailTab, DetailView, QueryState};
use crate::models::vehicle::VehicleSummary;

const NOT_AVAILABLE: &str = "N/A";

/// Inserts thousands separators into the integer part of a number string.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// `$23,499.5`, or `N/A` without a price.
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(price) => {
            let text = price.normalize().to_string();
            let (whole, fraction) = match text.split_once('.') {
                Some((whole, fraction)) => (whole, Some(fraction)),
                None => (text.as_str(), None),
            };
            match fraction {
                Some(fraction) => format!("${}.{}", group_thousands(whole), fraction),
                None => format!("${}", group_thousands(whole)),
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_odometer(odometer: Option<i32>) -> String {
    odometer
        .map(|miles| group_thousands(&miles.to_string()))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn new_used_label(is_new: bool) -> &'static str {
    if is_new {
        "New"
    } else {
        "Used"
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// `Vehicle Inventory (12 Records)`, with `...` while a search is running.
pub fn record_count_heading(state: &BrowserState) -> String {
    let count = match state.vehicles() {
        QueryState::Loading => "...".to_string(),
        QueryState::Loaded(vehicles) => vehicles.len().to_string(),
        QueryState::Idle | QueryState::Failed(_) => "0".to_string(),
    };
    format!("Vehicle Inventory ({} Records)", count)
}

pub fn results_table(vehicles: &[VehicleSummary]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<4} {:<12} {:<12} {:<16} {:<6} {:<7} {:<9} {:>12}",
        "#", "Stock#", "Make", "Model", "Year", "Status", "New/Used", "Price"
    )];
    for (row, vehicle) in vehicles.iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<12} {:<12} {:<16} {:<6} {:<7} {:<9} {:>12}",
            row + 1,
            vehicle.stock_number,
            vehicle.make,
            vehicle.model,
            vehicle.year,
            vehicle
                .status_prefix
                .map(|p| p.to_string())
                .unwrap_or_default(),
            new_used_label(vehicle.is_new),
            format_price(vehicle.list_price),
        ));
    }
    lines
}

/// Whether the header gets the "active inventory" highlight.
pub fn is_highlighted(view: &DetailView, default_status_prefix: Option<i32>) -> bool {
    default_status_prefix.is_some() && view.vehicle.status_prefix == default_status_prefix
}

pub fn detail_header(view: &DetailView) -> String {
    format!("Stock #: {}    {}", view.vehicle.stock_number, view.vehicle.status)
}

pub fn detail_summary(view: &DetailView) -> Vec<String> {
    let v = &view.vehicle;
    vec![
        format!("Stock #: {}", v.stock_number),
        format!("VIN: {}", v.vin),
        format!("Year: {}   Make: {}   Model: {}", v.year, v.make, v.model),
    ]
}

pub fn detail_tab(view: &DetailView) -> Vec<String> {
    let v = &view.vehicle;
    match view.tab {
        DetailTab::VehicleInfo => vec![
            format!("Price: {}", format_price(v.list_price)),
            format!("Odometer: {}", format_odometer(v.odometer)),
            format!("Condition: {}", text(&v.condition)),
            format!("Drivetrain: {}", text(&v.drivetrain)),
        ],
        DetailTab::ColorInfo => vec![
            format!("Color: {}", text(&v.color)),
            format!("Interior: {}", text(&v.interior)),
        ],
        DetailTab::FtpVAuto => vec!["FTP VAuto content goes here.".to_string()],
        DetailTab::FtpAutosoft => vec!["FTP Autosoft content goes here.".to_string()],
    }
}
