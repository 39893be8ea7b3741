use colored::Colorize;
use tiredit::commands::{CmdMessage, MessageLevel};
use tiredit::session::RingSeries;
use unicode_width::UnicodeWidthStr;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_candidates(candidates: &[String]) {
    if candidates.is_empty() {
        println!("No editable parameters found.");
        return;
    }
    for (i, name) in candidates.iter().enumerate() {
        println!("{:>3}. {}", i + 1, name.bold());
    }
}

pub(crate) fn print_series(series: &RingSeries) {
    let radii: Vec<String> = series.radii.iter().map(|r| r.to_string()).collect();
    let samples: Vec<String> = series.samples.iter().map(|v| v.to_string()).collect();

    // Pad plain text before styling; escape codes would break the widths.
    let radi_width = column_width("RADI", &radii);
    let param_width = column_width(&series.param, &samples);

    let header = format!(
        "{:>4}  {:>radi$}  {:>param$}",
        "ring",
        "RADI",
        series.param,
        radi = radi_width,
        param = param_width,
    );
    println!("{}", header.bold());

    for (ring, (radius, sample)) in radii.iter().zip(samples.iter()).enumerate() {
        let row = format!(
            "{:>4}  {:>radi$}  {:>param$}",
            ring,
            radius,
            sample,
            radi = radi_width,
            param = param_width,
        );
        if series.substituted.contains(&ring) {
            println!("{} {}", row, "*".yellow());
        } else {
            println!("{}", row);
        }
    }
    if !series.substituted.is_empty() {
        println!("{}", "  * substituted from the previous ring".yellow());
    }
}

fn column_width(header: &str, cells: &[String]) -> usize {
    cells
        .iter()
        .map(|c| c.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}
