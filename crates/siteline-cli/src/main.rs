use anyhow::Result;
use siteline_config::Config;
use siteline_scheduling::{day_slots, parse_day};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(date_arg) = args.get(1) else {
        eprintln!("usage: siteline-cli <YYYY-MM-DD> [config.toml]");
        process::exit(2);
    };

    if let Err(e) = run(date_arg, args.get(2).map(String::as_str)) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(date_arg: &str, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    let date = parse_day(date_arg)?;
    let slots = day_slots(date, &config.schedule, config.slot_minutes, &[]);

    if slots.is_empty() {
        println!("no bookable hours on {date}");
        return Ok(());
    }

    for slot in slots {
        let state = if slot.available { "open" } else { "booked" };
        println!(
            "{} - {}  {state}",
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M")
        );
    }
    Ok(())
}
