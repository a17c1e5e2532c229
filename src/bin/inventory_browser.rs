use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use std::io::{self, BufRead, Write};

use vehicle_inventory::browser::render;
use vehicle_inventory::browser::{
    BrowserConfig, BrowserSession, DetailTab, InventoryClient, QueryState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = BrowserConfig::from_env()?;

    println!("{}", "🚗 Inventory".bright_blue().bold());
    println!("{}", "============".bright_blue());
    println!("API: {}", config.api_url);

    let mut session = BrowserSession::new(
        InventoryClient::new(config.api_url.clone()),
        config.default_status_prefix,
    );
    session.mount().await;

    loop {
        show_results(&session);
        if show_error(&mut session)? {
            continue;
        }

        let form = &session.state().form;
        println!();
        println!("{}", "📋 MENU".bright_green().bold());
        println!("{}", "=======".bright_green());
        println!("1. Stock #      [{}]", form.stock_number);
        println!("2. VIN          [{}]", form.vin);
        println!("3. Status       [{}]", status_label(&form.status_prefix));
        println!("4. 🔍 Search");
        println!("5. 🚙 Vehicle details");
        println!("6. 🚪 Exit");
        let Some(choice) = prompt("Choose an option (1-6): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(stock_number) = prompt("Stock #: ")? else {
                    break;
                };
                session.state_mut().form.stock_number = stock_number;
            }
            "2" => {
                let Some(vin) = prompt("VIN: ")? else {
                    break;
                };
                session.state_mut().form.vin = vin;
            }
            "3" => choose_status(&mut session).await?,
            "4" => {
                session.search().await;
            }
            "5" => {
                let Some(id) = choose_vehicle(&session)? else {
                    continue;
                };
                session.open_vehicle(id).await;
                if session.state().detail().is_some() {
                    detail_loop(&mut session)?;
                }
            }
            "6" => {
                println!("{}", "👋 Bye!".bright_green());
                break;
            }
            _ => println!("{}", "❌ Invalid option, try again.".bright_red()),
        }
    }

    Ok(())
}

/// `None` once stdin is closed.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let answer = read_answer(&mut io::stdin().lock())?;
    if answer.is_none() {
        println!();
    }
    Ok(answer)
}

fn read_answer(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn status_label(value: &str) -> &str {
    if value.is_empty() {
        "All Statuses"
    } else {
        value
    }
}

fn show_results(session: &BrowserSession<InventoryClient>) {
    let state = session.state();
    println!();
    println!("{}", render::record_count_heading(state).bright_cyan().bold());
    if let QueryState::Loaded(vehicles) = state.vehicles() {
        for line in render::results_table(vehicles) {
            println!("{}", line);
        }
    }
}

/// Shows the pending error, if any, and waits for it to be dismissed.
fn show_error(session: &mut BrowserSession<InventoryClient>) -> io::Result<bool> {
    let Some(message) = session.state().error().map(str::to_string) else {
        return Ok(false);
    };
    println!();
    println!("{} {}", "❌ Error:".bright_red().bold(), message.bright_red());
    prompt("Press Enter to dismiss...")?;
    session.state_mut().dismiss_error();
    Ok(true)
}

// A closed stdin cancels the current step; the menu prompt then exits.
async fn choose_status(session: &mut BrowserSession<InventoryClient>) -> io::Result<()> {
    if !matches!(session.state().statuses(), QueryState::Loaded(_)) {
        session.refresh_statuses().await;
    }
    let statuses = match session.state().statuses() {
        QueryState::Loaded(statuses) => statuses.clone(),
        _ => Vec::new(),
    };

    println!("0. All Statuses");
    for (i, status) in statuses.iter().enumerate() {
        println!("{}. {}", i + 1, status);
    }
    let Some(choice) = prompt("Status: ")? else {
        return Ok(());
    };
    match choice.parse::<usize>() {
        Ok(0) => session.state_mut().set_status_filter(None),
        Ok(n) if n <= statuses.len() => {
            session.state_mut().set_status_filter(Some(statuses[n - 1]))
        }
        _ => println!("{}", "❌ Invalid status.".bright_red()),
    }
    Ok(())
}

/// Row number from the current result list.
fn choose_vehicle(session: &BrowserSession<InventoryClient>) -> io::Result<Option<i32>> {
    let QueryState::Loaded(vehicles) = session.state().vehicles() else {
        println!("{}", "No results to choose from.".bright_red());
        return Ok(None);
    };
    let Some(choice) = prompt("Row #: ")? else {
        return Ok(None);
    };
    match choice.parse::<usize>() {
        Ok(n) if n >= 1 && n <= vehicles.len() => Ok(Some(vehicles[n - 1].id)),
        _ => {
            println!("{}", "❌ Invalid row.".bright_red());
            Ok(None)
        }
    }
}

fn detail_loop(session: &mut BrowserSession<InventoryClient>) -> io::Result<()> {
    let default_prefix = session.state().default_status_prefix();

    while let Some(view) = session.state().detail() {
        println!();
        let header = render::detail_header(view);
        if render::is_highlighted(view, default_prefix) {
            println!("{}", header.black().on_bright_green().bold());
        } else {
            println!("{}", header.bold());
        }
        for line in render::detail_summary(view) {
            println!("{}", line);
        }
        println!();
        for (i, tab) in DetailTab::ALL.iter().enumerate() {
            let title = format!("{}. {}", i + 1, tab.title());
            if *tab == view.tab {
                print!("[{}]  ", title.bright_cyan().bold());
            } else {
                print!(" {}   ", title);
            }
        }
        println!();
        for line in render::detail_tab(view) {
            println!("  {}", line);
        }

        let Some(choice) = prompt("Tab (1-4) or 0 to close: ")? else {
            session.state_mut().close_detail();
            break;
        };
        match choice.parse::<usize>() {
            Ok(0) => session.state_mut().close_detail(),
            Ok(n) if n <= DetailTab::ALL.len() => {
                session.state_mut().select_tab(DetailTab::ALL[n - 1])
            }
            _ => println!("{}", "❌ Invalid option.".bright_red()),
        }
    }
    Ok(())
}
