//! Rendering [`CpuRecord`]s for the terminal.

use std::{io::Write, str::FromStr};

use unicode_width::UnicodeWidthStr;

use crate::{
    collection::cpuinfo::{CpuRecord, UNKNOWN_PACKAGE_ID},
    multi_eq_ignore_ascii_case,
    utils::conversion::khz_string,
};

/// How records are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// An aligned table, one row per logical CPU.
    #[default]
    Table,

    /// A block per CPU with its raw frequencies.
    Plain,

    /// A JSON array of records.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if multi_eq_ignore_ascii_case!(s, "table") {
            Ok(OutputFormat::Table)
        } else if multi_eq_ignore_ascii_case!(s, "plain" | "text") {
            Ok(OutputFormat::Plain)
        } else if multi_eq_ignore_ascii_case!(s, "json") {
            Ok(OutputFormat::Json)
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,

    /// Show implementer, variant, and part IDs in decimal instead of hex.
    pub decimal_ids: bool,

    pub show_header: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            decimal_ids: false,
            show_header: true,
        }
    }
}

/// Writes `records` to `out` in the requested format.
pub fn write_records<W: Write>(
    out: &mut W, records: &[CpuRecord], options: &OutputOptions,
) -> anyhow::Result<()> {
    match options.format {
        OutputFormat::Table => write_table(out, records, options)?,
        OutputFormat::Plain => write_plain(out, records)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

const TABLE_HEADERS: [&str; 10] = [
    "CPU",
    "PKG",
    "IMPLEMENTER",
    "ARCH",
    "VARIANT",
    "PART",
    "REV",
    "MIN",
    "MAX",
    "CUR",
];

#[inline]
fn id_string(value: u32, decimal: bool) -> String {
    if decimal {
        value.to_string()
    } else {
        format!("{value:#x}")
    }
}

#[inline]
fn freq_cell(khz: u64) -> String {
    if khz == 0 {
        "-".to_string()
    } else {
        khz_string(khz)
    }
}

fn table_row(record: &CpuRecord, decimal_ids: bool) -> [String; 10] {
    let implementer = {
        let id = id_string(record.implementer, decimal_ids);
        match record.implementer_name() {
            Some(name) => format!("{id} ({name})"),
            None => id,
        }
    };

    let package = if record.package_id == UNKNOWN_PACKAGE_ID {
        "-".to_string()
    } else {
        record.package_id.to_string()
    };

    [
        record.index().to_string(),
        package,
        implementer,
        record.architecture.to_string(),
        id_string(record.variant, decimal_ids),
        id_string(record.part, decimal_ids),
        record.revision.to_string(),
        freq_cell(record.min_frequency),
        freq_cell(record.max_frequency),
        freq_cell(record.current_frequency),
    ]
}

fn write_table<W: Write>(
    out: &mut W, records: &[CpuRecord], options: &OutputOptions,
) -> std::io::Result<()> {
    let rows = records
        .iter()
        .map(|record| table_row(record, options.decimal_ids))
        .collect::<Vec<_>>();

    let mut widths = [0; TABLE_HEADERS.len()];
    if options.show_header {
        for (width, header) in widths.iter_mut().zip(TABLE_HEADERS) {
            *width = header.width();
        }
    }
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    if options.show_header {
        write_row(out, TABLE_HEADERS.iter().copied(), &widths)?;
    }
    for row in &rows {
        write_row(out, row.iter().map(String::as_str), &widths)?;
    }

    Ok(())
}

fn write_row<'a, W: Write>(
    out: &mut W, cells: impl Iterator<Item = &'a str>, widths: &[usize],
) -> std::io::Result<()> {
    let mut line = String::new();

    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }

    writeln!(out, "{}", line.trim_end())
}

/// The per-CPU block layout, one block per record:
///
/// ```text
/// CPU: 0 Freq
/// Min : 300000, Max : 1800000, Current : 1200000
/// ------------------------------
/// ```
fn write_plain<W: Write>(out: &mut W, records: &[CpuRecord]) -> std::io::Result<()> {
    for record in records {
        writeln!(out, "CPU: {} Freq", record.index())?;
        writeln!(
            out,
            "Min : {}, Max : {}, Current : {}",
            record.min_frequency, record.max_frequency, record.current_frequency
        )?;
        writeln!(out, "------------------------------")?;
    }

    Ok(())
}
