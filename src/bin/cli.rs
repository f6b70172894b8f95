use std::env;
use std::io::{self, Write};

use chrono::{NaiveTime, Weekday};
use env_logger::Env;
use timetable_tool::item::{parse_day, parse_time};
use timetable_tool::{Locale, Schedule, ScheduleItem};

const DEFAULT_PATH: &str = "schedule.txt";

fn print_help() {
    println!(
        "Commands:\n  help                                     Show this help\n  show                                     Show the full schedule\n  add <day> <HH:MM[:SS]> <subject> <classroom...>\n                                           Append an item\n  remove <day> <HH:MM[:SS]> <subject> <classroom...>\n                                           Remove the first equal item\n  day <day>                                Show one day, sorted by time\n  save [path]                              Save to a file (default: {DEFAULT_PATH})\n  load [path]                              Replace contents from a file\n  quit|exit                                Exit"
    );
}

fn parse_item(args: &[&str]) -> Option<ScheduleItem> {
    if args.len() < 4 {
        return None;
    }
    let day = parse_day(args[0])?;
    let time = parse_time(args[1])?;
    Some(ScheduleItem::new(day, time, args[2], args[3..].join(" ")))
}

fn run_demo(save_path: &str, load_path: &str) {
    let locale = Locale::EN;
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).expect("valid demo time");

    let mut schedule = Schedule::new();
    schedule.add(ScheduleItem::new(Weekday::Mon, t(8, 0), "Mathematics", "Room 101"));
    schedule.add(ScheduleItem::new(Weekday::Wed, t(10, 0), "History", "Room 201"));
    schedule.add(ScheduleItem::new(Weekday::Fri, t(14, 0), "Physics", "Room 301"));
    schedule.add(ScheduleItem::new(Weekday::Mon, t(7, 0), "Art", "Room 102"));

    println!("Full schedule:");
    println!("{}", Schedule::render(schedule.items(), &locale));

    if let Err(err) = schedule.save_to_file(save_path) {
        println!("Error: {err}");
    }

    // Reload into a fresh schedule to show that persistence round-trips.
    let mut schedule = Schedule::new();
    if let Err(err) = schedule.load_from_file(load_path) {
        println!("Error: {err}");
    }

    println!("\nSchedule after loading from file:");
    println!("{}", Schedule::render(schedule.items(), &locale));

    let day = Weekday::Mon;
    println!("\nSchedule for {}:", locale.day_name(day));
    println!("{}", Schedule::render(&schedule.for_day(day), &locale));
}

fn run_repl() {
    let locale = Locale::EN;
    let mut schedule = Schedule::new();

    println!("Timetable Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts[0] {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => println!("{}", Schedule::render(schedule.items(), &locale)),
            "add" => match parse_item(&parts[1..]) {
                Some(item) => {
                    schedule.add(item);
                    println!("Item added.");
                }
                None => println!("Usage: add <day> <HH:MM[:SS]> <subject> <classroom...>"),
            },
            "remove" => match parse_item(&parts[1..]) {
                Some(item) => {
                    schedule.remove(&item);
                    println!("Item removed if it was present.");
                }
                None => println!("Usage: remove <day> <HH:MM[:SS]> <subject> <classroom...>"),
            },
            "day" => match parts.get(1).and_then(|raw| parse_day(raw)) {
                Some(day) => {
                    println!("Schedule for {}:", locale.day_name(day));
                    println!("{}", Schedule::render(&schedule.for_day(day), &locale));
                }
                None => println!("Usage: day <day>"),
            },
            "save" => {
                let path = parts.get(1).copied().unwrap_or(DEFAULT_PATH);
                match schedule.save_to_file(path) {
                    Ok(_) => println!("Saved to {path}."),
                    Err(err) => println!("Error: {err}"),
                }
            }
            "load" => {
                let path = parts.get(1).copied().unwrap_or(DEFAULT_PATH);
                match schedule.load_from_file(path) {
                    Ok(_) => println!("Loaded from {path}."),
                    Err(err) => println!("Error: {err}"),
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("demo") => {
            let save_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_PATH);
            let load_path = args.get(2).map(String::as_str).unwrap_or(save_path);
            run_demo(save_path, load_path);
        }
        Some(other) => {
            println!("Unknown argument '{other}'. Usage: cli [demo [save_path] [load_path]]");
        }
        None => run_repl(),
    }
}
