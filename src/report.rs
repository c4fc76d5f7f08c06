//! Text rendering for schedule outcomes.
//!
//! Renders the three report blocks per run: a title banner, a
//! Gantt-style timeline (process ids centered above the tick marks,
//! boundary times below), and a column-aligned table of per-process
//! timings with an averages footer. All functions write to any
//! [`std::io::Write`] and never panic on formatting.

use std::io::{self, Write};

use crate::models::{ProcessResult, RunSummary, ScheduleOutcome, TimelineSegment};

const GANTT_CELL: usize = 8;
const TABLE_HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Writes the dashed title banner.
pub fn write_title(w: &mut impl Write, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt timeline: ids centered in fixed-width cells,
/// segment boundary times below.
pub fn write_gantt(w: &mut impl Write, timeline: &[TimelineSegment]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for segment in timeline {
        let pid = segment.process_id.to_string();
        let pad = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{pad}{pid}{pad}|")?;
    }
    writeln!(w)?;

    for (i, segment) in timeline.iter().enumerate() {
        write!(w, "{}\t", segment.start)?;
        if i == timeline.len() - 1 {
            write!(w, "{}", segment.stop)?;
        }
    }
    writeln!(w, "\n")
}

/// Writes the per-process table with the averages footer.
pub fn write_table(
    w: &mut impl Write,
    results: &[ProcessResult],
    summary: &RunSummary,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let rows: Vec<[String; 7]> = results
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst_duration.to_string(),
                r.arrival_time.to_string(),
                r.waiting_time.to_string(),
                r.turnaround_time.to_string(),
                r.completion_time.to_string(),
            ]
        })
        .collect();

    let footer: [String; 7] = [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("avg {:.2}", summary.average_waiting_time),
        format!("avg {:.2}", summary.average_turnaround_time),
        format!("{:.2}/t", summary.throughput),
    ];

    // Column widths fit the widest of header, rows, and footer.
    let mut widths: [usize; 7] = TABLE_HEADER.map(str::len);
    for row in rows.iter().chain(std::iter::once(&footer)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    write_row(w, &TABLE_HEADER.map(String::from), &widths)?;
    write_rule(w, &widths)?;
    for row in &rows {
        write_row(w, row, &widths)?;
    }
    write_rule(w, &widths)?;
    write_row(w, &footer, &widths)?;
    writeln!(w)
}

fn write_row(w: &mut impl Write, cells: &[String; 7], widths: &[usize; 7]) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(w, " {cell:>width$} |")?;
    }
    writeln!(w)
}

fn write_rule(w: &mut impl Write, widths: &[usize; 7]) -> io::Result<()> {
    write!(w, "|")?;
    for width in widths {
        write!(w, "{}|", "-".repeat(width + 2))?;
    }
    writeln!(w)
}

/// Writes the full report for one run: banner, Gantt, table.
pub fn write_report(w: &mut impl Write, title: &str, outcome: &ScheduleOutcome) -> io::Result<()> {
    write_title(w, title)?;
    write_gantt(w, &outcome.timeline)?;
    write_table(w, &outcome.results, &outcome.summary)
}
