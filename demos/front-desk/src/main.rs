mod menu;

use std::io::Write;

use innkeep::prelude::*;
use innkeep::telemetry;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use menu::{first_token, MenuChoice, MENU};

type Input = Lines<BufReader<Stdin>>;

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

fn prompt(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

/// Prints `text` and reads one line. `None` once stdin is closed.
async fn ask(input: &mut Input, text: &str) -> std::io::Result<Option<String>> {
    prompt(text);
    input.next_line().await
}

fn print_lines<T: std::fmt::Display>(items: &[T], empty: &str) {
    if items.is_empty() {
        println!("{empty}");
    }
    for item in items {
        println!("{item}");
    }
}

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

/// Runs one menu action. Returns `false` when the desk should close.
async fn handle_choice(
    choice: MenuChoice,
    hotel: &HotelHandle,
    config: &HotelConfig,
    input: &mut Input,
) -> Result<bool, Box<dyn std::error::Error>> {
    match choice {
        MenuChoice::Initialize => match hotel.initialize(&config.inventory_path).await {
            Ok(report) => {
                println!(
                    "System initialized from {} ({} rooms)",
                    config.inventory_path.display(),
                    report.loaded
                );
                if let Some(reason) = report.stopped {
                    println!("Stopped reading early: {reason}");
                }
            }
            Err(err) => println!("{err}"),
        },
        MenuChoice::Display => print_lines(&hotel.rooms().await?, "No rooms loaded"),
        MenuChoice::CheckIn => {
            let Some(name) = ask(input, "Enter customer name: ").await? else {
                return Ok(false);
            };
            let Some(check_in) = ask(input, "Enter check-in date (YYYY-MM-DD): ").await? else {
                return Ok(false);
            };
            let Some(check_out) = ask(input, "Enter check-out date (YYYY-MM-DD): ").await? else {
                return Ok(false);
            };
            match hotel
                .check_in(name.trim(), first_token(&check_in), first_token(&check_out))
                .await
            {
                Ok(receipt) => println!("{receipt}"),
                Err(err) => println!("{err}"),
            }
        }
        MenuChoice::CheckOut => {
            let Some(name) = ask(input, "Enter customer name: ").await? else {
                return Ok(false);
            };
            match hotel.check_out(name.trim()).await {
                Ok(receipt) => println!("{receipt}"),
                Err(err) => println!("{err}"),
            }
        }
        MenuChoice::Available => {
            print_lines(&hotel.available_rooms().await?, "No available rooms")
        }
        MenuChoice::Booked => print_lines(&hotel.booked_rooms().await?, "No booked rooms"),
        MenuChoice::Billing => print_lines(&hotel.billing().await?, "No bills yet"),
        MenuChoice::Save => match hotel.save(&config.state_path).await {
            Ok(_) => println!("Current state saved to {}", config.state_path.display()),
            Err(err) => println!("{err}"),
        },
        MenuChoice::SaveSnapshot => match hotel.save_snapshot(&config.snapshot_path).await {
            Ok(()) => println!("Snapshot saved to {}", config.snapshot_path.display()),
            Err(err) => println!("{err}"),
        },
        MenuChoice::LoadSnapshot => match hotel.load_snapshot(&config.snapshot_path).await {
            Ok(()) => println!("Snapshot loaded from {}", config.snapshot_path.display()),
            Err(err) => println!("{err}"),
        },
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_logging("warn");

    let config = match std::env::args().nth(1) {
        Some(path) => HotelConfig::from_json_file(path)?,
        None => HotelConfig::default(),
    };

    let hotel = HotelHandle::with_config(Hotel::new(), &config);
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("\n{MENU}");
        let Some(line) = ask(&mut input, "Enter your choice: ").await? else {
            break;
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            println!("Invalid choice. Please try again.");
            continue;
        };
        if !handle_choice(choice, &hotel, &config, &mut input).await? {
            break;
        }
    }

    hotel.shutdown().await?;
    Ok(())
}
