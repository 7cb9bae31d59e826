//! Table boundary detection and row sanitization.

use tracing::trace;

use crate::segment::Segment;

/// Header plus at least one data row, or the region is not a table.
const MIN_TABLE_ROWS: usize = 2;

/// A contiguous span of source lines identified as one table, with its
/// sanitized row data. Lives only for the duration of a parse.
struct TableRegion {
    start_line: usize,
    end_line: usize,
    rows: Vec<Vec<String>>,
}

/// Split a chat message into text and table segments.
///
/// Returns `None` when the input is empty or contains no valid table,
/// so callers can skip segment rendering and treat the message as
/// plain text. `None` is deliberate: it is distinct from "a document
/// that segmented into nothing", which cannot happen.
///
/// Otherwise the returned segments cover the whole input in source
/// order: each table region becomes [`Segment::Table`] and the text
/// around it becomes [`Segment::Text`], trimmed of surrounding blank
/// lines (whitespace-only gaps between tables produce no segment).
pub fn segment(text: &str) -> Option<Vec<Segment>> {
    if text.is_empty() {
        return None;
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let regions = find_table_regions(&lines);
    if regions.is_empty() {
        return None;
    }

    let mut segments = Vec::new();
    // First line index not yet consumed by a region.
    let mut next_line = 0;

    for region in regions {
        let before = lines[next_line..region.start_line].join("\n");
        let before = before.trim();
        if !before.is_empty() {
            segments.push(Segment::Text(before.to_string()));
        }
        segments.push(Segment::Table(region.rows));
        next_line = region.end_line + 1;
    }

    let after = lines[next_line..].join("\n");
    let after = after.trim();
    if !after.is_empty() {
        segments.push(Segment::Text(after.to_string()));
    }

    Some(segments)
}

/// Single pass over the lines, tracking an open candidate region.
///
/// A candidate line opens a region or extends the open one. A line
/// that is blank or has no pipe closes the open region; a non-blank
/// line with a pipe but too few fragments (`a|b`) does neither, so
/// separator-adjacent junk inside a table does not split it. End of
/// input closes whatever is still open.
fn find_table_regions(lines: &[&str]) -> Vec<TableRegion> {
    let mut regions = Vec::new();
    let mut in_table = false;
    let mut start = 0;
    let mut end = 0;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if is_table_line(line) {
            if !in_table {
                in_table = true;
                start = i;
            }
            end = i;
        } else if in_table && (line.is_empty() || !line.contains('|')) {
            close_region(lines, start, end, &mut regions);
            in_table = false;
        }
    }

    if in_table {
        close_region(lines, start, end, &mut regions);
    }

    regions
}

/// A candidate table line has at least one interior pipe: splitting on
/// `|` must yield more than two fragments.
fn is_table_line(trimmed: &str) -> bool {
    trimmed.contains('|') && trimmed.split('|').count() > 2
}

fn close_region(lines: &[&str], start: usize, end: usize, regions: &mut Vec<TableRegion>) {
    let rows = sanitize_rows(&lines[start..=end]);
    if rows.len() >= MIN_TABLE_ROWS {
        trace!("table region at lines {start}..={end} with {} rows", rows.len());
        regions.push(TableRegion {
            start_line: start,
            end_line: end,
            rows,
        });
    } else {
        trace!("discarding region at lines {start}..={end}: fewer than {MIN_TABLE_ROWS} rows");
    }
}

/// Sanitize a region's lines into row data: drop separator rows and
/// underfilled lines, then split the survivors into trimmed cells.
fn sanitize_rows(lines: &[&str]) -> Vec<Vec<String>> {
    lines
        .iter()
        .filter(|line| keeps_row(line.trim()))
        .map(|line| split_cells(line))
        .collect()
}

/// Row filter, applied to the trimmed line.
fn keeps_row(trimmed: &str) -> bool {
    !trimmed.is_empty()
        && !is_separator_row(trimmed)
        && trimmed.contains('|')
        && trimmed.split('|').filter(|cell| !cell.trim().is_empty()).count() >= 2
}

/// Separator rows (`| --- | --- |`, `|:--:|:--:|`, bare dash runs)
/// mark the header/body boundary and carry no data.
fn is_separator_row(trimmed: &str) -> bool {
    trimmed
        .chars()
        .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a row into trimmed cells, dropping the first and last
/// fragment positionally. For well-formed rows those are the empty
/// ends of `| a | b |`. The drop is unconditional, so a row without
/// edge pipes loses real content at both ends; this matches the
/// long-standing behavior downstream consumers rely on.
fn split_cells(line: &str) -> Vec<String> {
    let fragments: Vec<&str> = line.split('|').collect();
    fragments[1..fragments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}
