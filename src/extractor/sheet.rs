use crate::extractor::{SourceKind, TextSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Spreadsheet routine: every sheet in workbook order, each introduced by a
/// header line naming the sheet, followed by its contents as a text table
/// with no row index labels
pub struct SheetSource {
    path: PathBuf,
    legacy_xls: bool,
}

impl SheetSource {
    pub fn new(path: PathBuf, legacy_xls: bool) -> Self {
        Self { path, legacy_xls }
    }
}

#[async_trait]
impl TextSource for SheetSource {
    async fn extract_impl(&self) -> Result<String> {
        let path = self.path.clone();
        let legacy_xls = self.legacy_xls;

        tokio::task::spawn_blocking(move || -> Result<String> {
            if legacy_xls {
                let mut workbook: Xls<_> = open_workbook(&path)
                    .with_context(|| format!("failed to open workbook {}", path.display()))?;
                render_workbook(&mut workbook)
            } else {
                let mut workbook: Xlsx<_> = open_workbook(&path)
                    .with_context(|| format!("failed to open workbook {}", path.display()))?;
                render_workbook(&mut workbook)
            }
        })
        .await?
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Sheet
    }
}

/// Header line that introduces each sheet in the output
fn sheet_header(name: &str) -> String {
    format!("\n--- Sheet: {name} ---\n")
}

fn render_workbook<R>(workbook: &mut R) -> Result<String>
where
    R: Reader<BufReader<std::fs::File>>,
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let sheet_names = workbook.sheet_names().to_owned();

    let mut text = String::new();
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("failed to read sheet {name}"))?;

        text.push_str(&sheet_header(name));
        text.push_str(&render_range(&range));
    }

    Ok(text)
}

/// Render a sheet as a column-aligned text table, one row per line
fn render_range(range: &Range<Data>) -> String {
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    if rows.is_empty() {
        return String::new();
    }

    let column_count = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; column_count];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            for _ in cell.chars().count()..widths[i] {
                line.push(' ');
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERROR {e:?}"),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
