use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::Instant,
};

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, alive: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    alive: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    fn report(&mut self) -> Self::Str {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }
}

/// Keeps every generation's timing and population for a CSV export
///
/// Row 0 is the seeded population, with a zero time delta
pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: vec![(0, alive)],
            last: Instant::now(),
        }
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i, delta, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, alive));
        self.inner.record(alive);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> Self::Str {
        self.inner.report()
    }
}

/// Only keeps per-generation rows when a CSV export was asked for
pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(alive: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(alive))
        } else {
            Self::Simple(SimpleRecord::new(alive))
        }
    }
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            Self::Simple(_) => Err(io::Error::other(
                "per-generation statistics were not recorded",
            )),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.record(alive),
            Self::Simple(r) => r.record(alive),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_generations() {
        let mut stats = SimpleRecord::new(10);
        stats.record(8);
        stats.record(5);

        let report = stats.report();
        assert!(report.ends_with("gens:2, alive:5"), "{report}");
    }

    #[test]
    fn csv_has_a_row_per_generation() {
        let mut stats = CsvRecord::new(12);
        stats.record(9);
        stats.record(0);

        let mut out = Vec::new();
        stats.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "gen,delta_t,alive");
        assert_eq!(lines[1], "0,0,12");
        assert!(lines[2].starts_with("1,") && lines[2].ends_with(",9"));
        assert!(lines[3].starts_with("2,") && lines[3].ends_with(",0"));
    }

    #[test]
    fn switch_keeps_rows_only_for_csv() {
        let mut simple = SwitchRecorder::new(3, false);
        simple.record(2);
        assert!(matches!(simple, SwitchRecorder::Simple(_)));
        assert!(simple.save(std::env::temp_dir().join("lifegif-unused.csv")).is_err());

        let mut csv = SwitchRecorder::new(3, true);
        csv.record(2);
        let SwitchRecorder::Csv(record) = &csv else {
            panic!("expected a csv recorder");
        };
        assert_eq!(record.data.len(), 2);
        assert!(csv.report().ends_with("gens:1, alive:2"));
    }
}
