//! Run-length encoded pattern files
//!
//! `b` is a dead cell, `o` an alive cell, `$` ends a row and `!` ends the
//! pattern. Any of them may be prefixed with a repeat count.

use crate::{Error, Grid, Pos2, error::Result};
use regex::Regex;
use std::sync::OnceLock;

/// A run count followed by a single cell symbol
fn run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d*)(\S)").expect("valid run regex"))
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: usize, c: char) {
        let append = match run {
            0 => return,
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.push_run(1, '!');
        self.sequence
    }
}

#[derive(Debug, Clone)]
pub struct RunLengthEncoded {
    name: Option<String>,
    max_line_len: usize,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    fn encode_header(&self, grid: &Grid) -> String {
        let mut header = String::new();
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        let (w, h) = grid.dimensions();
        // M1: the count includes the cell itself
        header.push_str(&format!(
            "x = {}, y = {}, rule = R{},C0,M1,S2..3,B3..3,NM",
            w,
            h,
            grid.radius()
        ));
        header
    }

    fn encode_cells(&self, grid: &Grid) -> String {
        let mut seq = RunEncoder::new(self.max_line_len);
        // row ends not yet written, so trailing empty rows are never emitted
        let mut pending_rows = 0;
        for row in grid.rows() {
            if let Some(last_alive) = row.iter().rposition(|&alive| alive) {
                seq.push_run(pending_rows, '$');
                pending_rows = 0;

                // trailing dead cells are implied by the row end
                let row = &row[..=last_alive];
                let mut state = row[0];
                let mut run = 0;
                for &cell in row {
                    if cell != state {
                        seq.push_run(run, cell_char(state));
                        state = cell;
                        run = 0;
                    }
                    run += 1;
                }
                seq.push_run(run, cell_char(state));
            }
            pending_rows += 1;
        }
        seq.end()
    }

    /// Encodes the current generation of `grid`, header included
    pub fn encode(&self, grid: &Grid) -> String {
        format!("{}\n{}\n", self.encode_header(grid), self.encode_cells(grid))
    }

    /// Decodes a pattern into its alive cells, sorted row-major
    ///
    /// Comment lines (`#`) and the `x = ...` header are skipped. Decoding
    /// stops at the first `!`.
    pub fn decode(&self, value: &str) -> Result<Vec<Pos2>> {
        let re = run_regex();
        let mut alive = Vec::new();
        let mut cursor = Pos2::zero();
        'lines_loop: for (i, mut line) in value.lines().enumerate() {
            if let Some(i) = line.find('#') {
                line = &line[..i];
            }
            if line.trim_start().starts_with('x') {
                continue;
            }

            let line_no = i + 1;
            for (_, [run_str, state]) in re.captures_iter(line).map(|c| c.extract()) {
                let run = match run_str {
                    "" => 1,
                    digits => digits
                        .parse::<i32>()
                        .map_err(|_| Error::PatternRun { line: line_no })?,
                };
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        let end = advance(cursor.x, run, line_no)?;
                        while cursor.x < end {
                            alive.push(cursor);
                            cursor.x += 1;
                        }
                    }
                    "b" => cursor.x = advance(cursor.x, run, line_no)?,
                    "$" => {
                        cursor.x = 0;
                        cursor.y = advance(cursor.y, run, line_no)?;
                    }
                    other => {
                        return Err(Error::Pattern {
                            line: line_no,
                            found: other.chars().next().unwrap_or_default(),
                        });
                    }
                }
            }
        }

        alive.sort();
        Ok(alive)
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            max_line_len: 70,
        }
    }
}

/// Moves a cursor coordinate `run` cells on, failing if it leaves the `i32` range
fn advance(from: i32, run: i32, line: usize) -> Result<i32> {
    from.checked_add(run).ok_or(Error::PatternRun { line })
}

fn cell_char(alive: bool) -> char {
    if alive { 'o' } else { 'b' }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2 { x, y }
    }

    #[test]
    fn decodes_glider() {
        let glider = "#N Glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
        let alive = RunLengthEncoded::default().decode(glider).unwrap();

        assert_eq!(
            alive,
            vec![pos(1, 0), pos(2, 1), pos(0, 2), pos(1, 2), pos(2, 2)]
        );
    }

    #[test]
    fn decode_stops_at_bang() {
        let alive = RunLengthEncoded::default().decode("2o!\n3o").unwrap();

        assert_eq!(alive, vec![pos(0, 0), pos(1, 0)]);
    }

    #[test]
    fn decode_skips_blank_rows() {
        let alive = RunLengthEncoded::default().decode("o3$bo!").unwrap();

        assert_eq!(alive, vec![pos(0, 0), pos(1, 3)]);
    }

    #[test]
    fn decode_rejects_unknown_cells() {
        let err = RunLengthEncoded::default()
            .decode("x = 2, y = 2\nob$\n2A!")
            .unwrap_err();

        assert!(matches!(err, Error::Pattern { line: 3, found: 'A' }));
    }

    #[test]
    fn decode_rejects_oversized_runs() {
        let err = RunLengthEncoded::default()
            .decode("3000000000bo!")
            .unwrap_err();

        assert!(matches!(err, Error::PatternRun { line: 1 }));
    }

    #[test]
    fn decode_rejects_runs_past_the_coordinate_range() {
        let rle = RunLengthEncoded::default();

        assert!(matches!(
            rle.decode("2000000000b2000000000bo!").unwrap_err(),
            Error::PatternRun { line: 1 }
        ));
        assert!(matches!(
            rle.decode("o\n2000000000$2000000000$o!").unwrap_err(),
            Error::PatternRun { line: 2 }
        ));
    }

    #[test]
    fn encodes_grid_with_header() {
        let mut grid = Grid::new(5, 4, 1);
        grid.set_cell(1, 0, true);
        grid.set_cell(2, 0, true);
        grid.set_cell(4, 2, true);

        let encoded = RunLengthEncoded::default().set_name("test").encode(&grid);

        assert_eq!(
            encoded,
            "#N test\nx = 5, y = 4, rule = R1,C0,M1,S2..3,B3..3,NM\nb2o2$4bo!\n"
        );
    }

    #[test]
    fn encodes_leading_empty_rows() {
        let mut grid = Grid::new(3, 3, 2);
        grid.set_cell(0, 2, true);

        let encoded = RunLengthEncoded::default().encode(&grid);

        assert_eq!(encoded, "x = 3, y = 3, rule = R2,C0,M1,S2..3,B3..3,NM\n2$o!\n");
    }

    #[test]
    fn empty_grid_encodes_to_bang() {
        let grid = Grid::new(3, 3, 1);

        let encoded = RunLengthEncoded::default().encode(&grid);

        assert!(encoded.ends_with("\n!\n"));
    }

    #[test]
    fn long_rows_are_wrapped() {
        let mut grid = Grid::new(200, 1, 1);
        for x in (0..200).step_by(2) {
            grid.set_cell(x, 0, true);
        }

        let encoded = RunLengthEncoded::default().encode(&grid);

        assert!(encoded.lines().all(|line| line.len() <= 70));
        let decoded = RunLengthEncoded::default().decode(&encoded).unwrap();
        assert_eq!(decoded.len(), 100);
    }
}
