//! Run-length encoded `.rle` codec.
//!
//! A header line `x = W, y = H[, rule = ...]`, optional `#`-prefixed
//! metadata lines, then a token body of `b`/`o` runs with `$` row
//! separators, terminated by `!`.
//!
//! <https://www.conwaylife.com/wiki/Run_Length_Encoded>

use log::debug;

use crate::grid::{CellState, Grid};

use super::{Metadata, Pattern, PatternReader, PatternWriter, ReaderError};

/// Column budget for one physical line of writer output.
const MAX_LINE_WIDTH: usize = 70;

/// Reader for the run-length format.
#[derive(Debug)]
pub struct RleReader;

impl RleReader {
    /// Parse `x = W, y = H[, rule = ...]`: comma-separated `key = value`
    /// pairs, split on the first ` = ` within each piece. `x` and `y`
    /// are mandatory; other keys are tolerated and ignored.
    fn parse_header(line: &str) -> Result<(usize, usize), ReaderError> {
        let mut width = None;
        let mut height = None;

        for piece in line.split(',') {
            let piece = piece.trim();
            let Some((key, value)) = piece.split_once(" = ") else {
                return Err(ReaderError::Malformed(format!(
                    "header entry {piece:?} is not a `key = value` pair"
                )));
            };
            match key.trim() {
                "x" => width = Some(Self::parse_dimension("x", value)?),
                "y" => height = Some(Self::parse_dimension("y", value)?),
                _ => {}
            }
        }

        let width = width.ok_or(ReaderError::MissingHeaderField("x"))?;
        let height = height.ok_or(ReaderError::MissingHeaderField("y"))?;
        Ok((width, height))
    }

    fn parse_dimension(key: &str, value: &str) -> Result<usize, ReaderError> {
        let value = value.trim();
        let parsed: usize = value.parse().map_err(|_| {
            ReaderError::Malformed(format!("header field {key:?} has invalid value {value:?}"))
        })?;
        if parsed == 0 {
            return Err(ReaderError::Malformed(format!(
                "header field {key:?} must be positive"
            )));
        }
        Ok(parsed)
    }

    /// `#N` names the pattern, `#O` records the author, `#C`/`#c` append
    /// to the description. Unrecognized tags are ignored.
    fn apply_comment(line: &str, metadata: &mut Metadata) {
        let mut chars = line[1..].chars();
        let Some(tag) = chars.next() else {
            return;
        };
        let content = chars.as_str().trim();
        match tag {
            'N' => metadata.name = Some(content.to_string()),
            'O' => metadata.author = Some(content.to_string()),
            'C' | 'c' => match &mut metadata.description {
                Some(description) => {
                    description.push('\n');
                    description.push_str(content);
                }
                None => metadata.description = Some(content.to_string()),
            },
            _ => {}
        }
    }

    /// Decode the concatenated token body into row-major cells.
    fn decode_body(
        body: &str,
        height: usize,
        width: usize,
    ) -> Result<Vec<CellState>, ReaderError> {
        // The pattern terminates at '!'; anything after it is ignored.
        let body = match body.find('!') {
            Some(end) => &body[..end],
            None => body,
        };

        let mut cells = vec![CellState::Dead; height * width];
        let mut row = 0usize;

        for group in body.split('$') {
            let mut col = 0usize;
            let mut count: Option<usize> = None;

            for c in group.chars() {
                match c {
                    '0'..='9' => {
                        let digit = c as usize - '0' as usize;
                        count = Some(count.unwrap_or(0) * 10 + digit);
                    }
                    'o' | 'b' => {
                        let run = count.take().unwrap_or(1);
                        if run == 0 {
                            return Err(ReaderError::Malformed(
                                "run count must be positive".to_string(),
                            ));
                        }
                        if row >= height {
                            return Err(ReaderError::Malformed(format!(
                                "pattern body has more than {height} rows"
                            )));
                        }
                        if col + run > width {
                            return Err(ReaderError::Malformed(format!(
                                "row {row} is wider than {width} cells"
                            )));
                        }
                        if c == 'o' {
                            let start = row * width + col;
                            for cell in &mut cells[start..start + run] {
                                *cell = CellState::Alive;
                            }
                        }
                        col += run;
                    }
                    c if c.is_whitespace() => {}
                    _ => {
                        return Err(ReaderError::Malformed(format!(
                            "unexpected character {c:?} in pattern body"
                        )));
                    }
                }
            }

            // A trailing bare count means the current row is followed by
            // count - 1 blank rows.
            row += 1;
            if let Some(repeat) = count {
                if repeat == 0 {
                    return Err(ReaderError::Malformed(
                        "row repeat count must be positive".to_string(),
                    ));
                }
                row += repeat - 1;
            }
        }

        // Rows never painted stay dead; overshooting the header is not
        // tolerated.
        if row > height {
            return Err(ReaderError::Malformed(format!(
                "pattern body has more than {height} rows"
            )));
        }
        Ok(cells)
    }
}

impl PatternReader for RleReader {
    fn extension(&self) -> &'static str {
        ".rle"
    }

    fn parse(&self, text: &str) -> Result<Pattern, ReaderError> {
        let mut metadata = Metadata::default();
        let mut header = None;
        let mut body = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                Self::apply_comment(line, &mut metadata);
            } else if header.is_none() {
                header = Some(Self::parse_header(line)?);
            } else {
                body.push_str(line);
            }
        }

        let Some((width, height)) = header else {
            return Err(ReaderError::NoData);
        };
        debug!("decoding {width}x{height} run-length body ({} bytes)", body.len());

        let cells = Self::decode_body(&body, height, width)?;
        let grid = Grid::from_cells(height, width, cells)
            .map_err(|e| ReaderError::Malformed(e.to_string()))?;
        Ok(Pattern { grid, metadata })
    }
}

/// Writer for the run-length format.
#[derive(Debug)]
pub struct RleWriter;

impl RleWriter {
    /// Append a token, wrapping to a new line first when it would push
    /// the current line past the budget. Tokens are never split.
    fn push_token(out: &mut String, line_len: &mut usize, token: &str) {
        if *line_len + token.len() > MAX_LINE_WIDTH && *line_len > 0 {
            out.push('\n');
            *line_len = 0;
        }
        out.push_str(token);
        *line_len += token.len();
    }

    fn run_token(state: CellState, len: usize) -> String {
        let tag = if state.is_alive() { 'o' } else { 'b' };
        if len == 1 {
            tag.to_string()
        } else {
            format!("{len}{tag}")
        }
    }

    /// Maximal same-state runs of one row. Dead cells at the end of a
    /// row do not need to be encoded.
    fn row_runs(row: &[CellState]) -> Vec<(CellState, usize)> {
        let mut runs: Vec<(CellState, usize)> = Vec::new();
        for &cell in row {
            match runs.last_mut() {
                Some((state, len)) if *state == cell => *len += 1,
                _ => runs.push((cell, 1)),
            }
        }
        if runs.last().is_some_and(|(state, _)| !state.is_alive()) {
            runs.pop();
        }
        runs
    }
}

impl PatternWriter for RleWriter {
    fn extension(&self) -> &'static str {
        ".rle"
    }

    fn serialize(&self, grid: &Grid) -> String {
        let mut out = format!(
            "x = {}, y = {}, rule = B3/S23\n",
            grid.width(),
            grid.height()
        );
        let mut line_len = 0usize;
        let height = grid.height();

        for (row_index, row) in grid.rows().enumerate() {
            for (state, len) in Self::row_runs(row) {
                Self::push_token(&mut out, &mut line_len, &Self::run_token(state, len));
            }
            if row_index + 1 < height {
                Self::push_token(&mut out, &mut line_len, "$");
            }
        }

        Self::push_token(&mut out, &mut line_len, "!");
        out
    }
}
