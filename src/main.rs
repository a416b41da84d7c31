//! Command-line interface for the operating-room scheduler.
//!
//! Reads ward lists as JSON, runs the scheduling engine and prints the
//! suggested room and start time for every pending case.

mod cli;

use clap::Parser;
use cli::{Cli, ClassifyArgs, Command, LogFormatArg, OutputFormatArg, ScheduleArgs};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use surgiplan::logging::{init_logging, LogConfig, LogFormat};
use surgiplan::{
    assign_surgeon, classify_case, PendingCase, Result, ScheduleEngine, ScheduleReport,
    ScheduleRequest, ScheduledCase, SurgiplanError,
};

fn main() {
    let cli = Cli::parse();
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_format(format)
        .with_ansi(io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let outcome = match cli.command {
        Command::Schedule(args) => run_schedule(&args),
        Command::Classify(args) => {
            run_classify(&args);
            Ok(())
        }
        Command::Demo => {
            run_demo();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn read_request(path: &Path) -> Result<ScheduleRequest> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| SurgiplanError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|source| SurgiplanError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn run_schedule(args: &ScheduleArgs) -> Result<()> {
    let request = read_request(&args.input)?;
    let report = ScheduleEngine::new().run(&request.pending, &request.already_scheduled);

    match args.format {
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&report.suggestions)?);
        }
        OutputFormatArg::Table => print_report(&report),
    }
    Ok(())
}

fn run_classify(args: &ClassifyArgs) {
    let case = classify_case(&PendingCase::new("-", args.diagnosis.clone(), args.age), 0);
    let fallback = case
        .fallback_rooms
        .as_ref()
        .map(|rooms| rooms.join(", "))
        .unwrap_or_else(|| "-".to_string());
    let surgeon = assign_surgeon(&case.procedure_label);

    println!("Procedure:      {}", case.procedure_label);
    println!("Duration:       {} min", case.duration_minutes);
    println!("Priority:       {}", case.priority);
    println!("Primary rooms:  {}", case.primary_rooms.join(", "));
    println!("Fallback rooms: {}", fallback);
    println!(
        "Surgeon:        {}",
        if surgeon.is_empty() { "-" } else { surgeon }
    );
}

fn print_report(report: &ScheduleReport) {
    println!("\n{}", "=".repeat(72));
    println!("       OPERATING LIST SUGGESTIONS");
    println!("{}", "=".repeat(72));

    for suggestion in &report.suggestions {
        let room = if suggestion.is_placed() {
            format!("OR {:>2}", suggestion.operating_room)
        } else {
            "  --".to_string()
        };
        let time = if suggestion.is_placed() {
            suggestion.surgery_time.as_str()
        } else {
            "unplaced"
        };
        println!(
            "  {:<8} {:<8} {:<10} {:<34} {}",
            suggestion.id, room, time, suggestion.procedure_label, suggestion.surgeon_name
        );
    }

    println!("\n--- Scheduling Results ---");
    println!("  Total cases: {}", report.total_cases());
    println!("  Placed: {}", report.placed);
    println!("  Unplaced: {}", report.unplaced);
    println!("  Success rate: {:.1}%", report.success_rate());
}

fn run_demo() {
    println!("\n--- Running Demo ---");

    let already_scheduled = vec![
        ScheduledCase::new("BN-001", "7", "08:00").with_label("PT Thay khớp háng"),
        ScheduledCase::new("BN-002", "1", "08:00").with_diagnosis("Viêm xương đùi trái"),
        ScheduledCase::new("BN-003", "8", "không rõ"),
    ];

    let pending = vec![
        PendingCase::new("BN-101", "Gãy cổ xương đùi bên trái", 68),
        PendingCase::new("BN-102", "Viêm xương cẳng chân phải", 40),
        PendingCase::new("BN-103", "Đứt DCCT gối phải", 24),
        PendingCase::new("BN-104", "Gãy kín 1/3 giữa xương cẳng tay trái", 76),
        PendingCase::new("BN-105", "U mỡ vùng vai phải", 45),
        PendingCase::new("BN-106", "Còn nẹp vít xương đùi phải", 33),
        PendingCase::new("BN-107", "Ngón tay cò súng", 58),
        PendingCase::new("BN-108", "Áp xe bàn chân trái", 61),
    ];

    println!("Already scheduled: {} cases", already_scheduled.len());
    println!("Pending: {} cases", pending.len());

    let report = ScheduleEngine::new().run(&pending, &already_scheduled);
    print_report(&report);

    println!("\nNote: BN-003 has no valid start time and does not block room 8.");
}
