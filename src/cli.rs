use serde::Serialize;

use crate::atlas::Atlas;
use crate::config::LoadConfig;
use crate::country::CountryCodeFormat;
use crate::data::validate::validate_subdivision_csv;

const USAGE: &str = "usage: iso3166 <country|subdivision|subdivisions|convert|detect|validate> [args]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Country,
    Subdivision,
    Subdivisions,
    Convert,
    Detect,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("country") => Some(Command::Country),
        Some("subdivision") => Some(Command::Subdivision),
        Some("subdivisions") => Some(Command::Subdivisions),
        Some("convert") => Some(Command::Convert),
        Some("detect") => Some(Command::Detect),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

/// Dispatch `args` (including the program name) and return the exit code:
/// 0 success, 1 not found or failed, 2 usage error.
pub fn run_with_args(args: &[String]) -> i32 {
    let Some(command) = parse_command(args) else {
        eprintln!("{USAGE}");
        return 2;
    };

    let atlas = match Atlas::from_config(&LoadConfig::from_env()) {
        Ok(atlas) => atlas,
        Err(err) => {
            eprintln!("failed to load subdivision data: {err}");
            return 1;
        }
    };

    match command {
        Command::Country => handle_country(&atlas, args),
        Command::Subdivision => handle_subdivision(&atlas, args),
        Command::Subdivisions => handle_subdivisions(&atlas, args),
        Command::Convert => handle_convert(&atlas, args),
        Command::Detect => handle_detect(&atlas, args),
        Command::Validate => handle_validate(&atlas, args),
    }
}

fn handle_country(atlas: &Atlas, args: &[String]) -> i32 {
    let Some(code) = args.get(2) else {
        eprintln!("usage: iso3166 country <code-or-name>");
        return 2;
    };

    let countries = atlas.countries();
    let found = countries
        .resolve_alpha2(code)
        .and_then(|alpha2| countries.where_alpha2(alpha2))
        .or_else(|| countries.where_name(code));

    match found {
        Some(country) => print_json(&country),
        None => not_found(code),
    }
}

fn handle_subdivision(atlas: &Atlas, args: &[String]) -> i32 {
    let Some(code) = args.get(2) else {
        eprintln!("usage: iso3166 subdivision <full-code>");
        return 2;
    };

    match atlas.subdivisions().where_code(code) {
        Some(subdivision) => print_json(&subdivision),
        None => not_found(code),
    }
}

fn handle_subdivisions(atlas: &Atlas, args: &[String]) -> i32 {
    let Some(country) = args.get(2) else {
        eprintln!("usage: iso3166 subdivisions <country>");
        return 2;
    };

    print_json(&atlas.subdivisions().for_country(country))
}

fn handle_convert(atlas: &Atlas, args: &[String]) -> i32 {
    let (Some(code), Some(from), Some(to)) = (args.get(2), args.get(3), args.get(4)) else {
        eprintln!("usage: iso3166 convert <code> <alpha2|alpha3|numeric> <alpha2|alpha3|numeric>");
        return 2;
    };

    let (from, to) = match (from.parse::<CountryCodeFormat>(), to.parse::<CountryCodeFormat>()) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("{err}");
            return 2;
        }
    };

    match atlas.countries().convert(code, from, to) {
        Some(converted) => {
            println!("{converted}");
            0
        }
        None => not_found(code),
    }
}

fn handle_detect(atlas: &Atlas, args: &[String]) -> i32 {
    let Some(code) = args.get(2) else {
        eprintln!("usage: iso3166 detect <code>");
        return 2;
    };

    match atlas.countries().detect_format(code) {
        Some(format) => {
            println!("{format}");
            0
        }
        None => not_found(code),
    }
}

fn handle_validate(atlas: &Atlas, args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: iso3166 validate <subdivisions.csv>");
        return 2;
    };

    match validate_subdivision_csv(path, atlas.countries()) {
        Ok(report) if report.is_usable() => {
            println!(
                "validation passed: {path} ({} warning(s))",
                report.warnings()
            );
            for issue in &report.issues {
                eprintln!("- {issue}");
            }
            0
        }
        Ok(report) => {
            eprintln!("validation failed: {} error(s)", report.errors());
            for issue in &report.issues {
                eprintln!("- {issue}");
            }
            1
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            1
        }
    }
}

fn not_found(code: &str) -> i32 {
    eprintln!("not found: {code}");
    1
}
