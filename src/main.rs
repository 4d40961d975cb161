use clap::Parser;
use numero_grid::config::{Command, OutputFormat};
use numero_grid::utils::error::{ErrorSeverity, NumerologyError};
use numero_grid::utils::logger;
use numero_grid::{build_grid, name_report, BirthDate, CliConfig, LoShuGrid, NameReport};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match &config.command {
        Command::Name { name } => {
            let report = name_report(name);
            match config.format {
                OutputFormat::Text => print!("{}", render_name_report(&report)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Grid { date } => match date.parse::<BirthDate>() {
            Ok(birth_date) => {
                let grid = build_grid(&birth_date);
                match config.format {
                    OutputFormat::Text => print!("{}", render_grid(&grid)),
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&grid)?),
                }
            }
            Err(e) => exit_with(&e),
        },
    }

    Ok(())
}

fn exit_with(e: &NumerologyError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn render_name_report(report: &NameReport) -> String {
    let mut out = format!("Name: {}\n", report.name);
    for (label, score) in [
        ("Pythagorean", report.pythagorean),
        ("Chaldean", report.chaldean),
    ] {
        let master = if score.is_master_number() {
            " (master number)"
        } else {
            ""
        };
        out.push_str(&format!(
            "  {:<12} total {:>4} -> {}{}\n",
            label, score.total, score.reduced, master
        ));
    }
    out
}

fn render_grid(grid: &LoShuGrid) -> String {
    let width = grid.cells.iter().map(String::len).max().unwrap_or(0).max(3) + 2;
    let border = format!("+{}", format!("{}+", "-".repeat(width)).repeat(3));

    let mut out = format!(
        "Lo Shu grid for {} (digits {})\n",
        grid.birth_date, grid.digit_string
    );
    out.push_str(&border);
    out.push('\n');
    for row in grid.rows() {
        for cell in row {
            out.push_str(&format!("|{:^width$}", cell, width = width));
        }
        out.push_str("|\n");
        out.push_str(&border);
        out.push('\n');
    }

    let join = |digits: &[u8]| {
        digits
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    out.push_str(&format!("Present: {}\n", join(&grid.present_numbers)));
    out.push_str(&format!("Missing: {}\n", join(&grid.missing_numbers)));
    out.push_str(&format!("Digits counted: {}\n", grid.total_digit_count));
    out
}
