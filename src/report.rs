//! Reporting sink: CSV table and chart rendering.
//!
//! Thin I/O over the comparison results. The table writer serializes
//! labeled metrics into the fixed-column CSV consumed by the chart
//! step; [`ChartRenderer`] is the narrow interface behind which the
//! charting backend lives, replaceable without touching simulation
//! logic. Nothing here is part of the core's correctness surface.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::compare::PolicyRun;

/// CSV header shared by the table writer and the chart columns.
pub const TABLE_HEADER: &str = "Alg,AvgW,AvgT,Throughput,CPUUtil,AvgR,CSwitch,Fairness";

/// Chart column layout: title, y-axis label, 1-based CSV column, file name.
const CHARTS: [(&str, &str, usize, &str); 7] = [
    ("Average Waiting Time", "ticks", 2, "avg_waiting.png"),
    ("Average Turnaround Time", "ticks", 3, "avg_turnaround.png"),
    ("Throughput (proc/tick)", "throughput", 4, "throughput.png"),
    ("CPU Utilization", "fraction", 5, "cpu_util.png"),
    ("Average Response Time", "ticks", 6, "avg_response.png"),
    ("Context Switch Count", "# switches", 7, "ctx_switches.png"),
    ("Fairness Index", "Jain Index", 8, "fairness.png"),
];

/// Renders the comparison results as CSV text, header included.
pub fn format_table(runs: &[PolicyRun]) -> String {
    let mut out = String::from(TABLE_HEADER);
    out.push('\n');
    for run in runs {
        let m = &run.metrics;
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            run.label,
            m.avg_waiting,
            m.avg_turnaround,
            m.throughput,
            m.cpu_utilization,
            m.avg_response,
            m.context_switches,
            m.fairness
        ));
    }
    out
}

/// Writes the comparison results to a CSV file.
pub fn write_table(path: &Path, runs: &[PolicyRun]) -> io::Result<()> {
    fs::write(path, format_table(runs))
}

/// A chart rendering backend.
///
/// Consumes the written table and produces one image artifact per
/// metric column.
pub trait ChartRenderer {
    /// Renders charts from the CSV at `table_path`, returning the
    /// paths of the produced images.
    fn render(&self, table_path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Chart rendering via a piped `gnuplot` child process.
///
/// Emits one 800x600 PNG histogram per metric column into the output
/// directory. Requires `gnuplot` on `PATH`.
#[derive(Debug, Clone)]
pub struct GnuplotRenderer {
    output_dir: PathBuf,
}

impl GnuplotRenderer {
    /// Creates a renderer writing images into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Builds the gnuplot script for all seven charts.
    fn script(&self, table_path: &Path) -> String {
        let mut s = String::from(
            "set datafile separator ','\n\
             set style data histograms\n\
             set style fill solid border -1\n\
             set xtics rotate by -45\n\
             set terminal png size 800,600\n",
        );
        for (title, ylabel, column, file) in CHARTS {
            let output = self.output_dir.join(file);
            s.push_str(&format!(
                "set title '{title}'\n\
                 set ylabel '{ylabel}'\n\
                 set output '{}'\n\
                 plot '{}' using {column}:xtic(1) every ::1 notitle\n",
                output.display(),
                table_path.display(),
            ));
        }
        s
    }
}

impl ChartRenderer for GnuplotRenderer {
    fn render(&self, table_path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut child = Command::new("gnuplot")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                io::Error::new(io::ErrorKind::BrokenPipe, "gnuplot stdin unavailable")
            })?;
            stdin.write_all(self.script(table_path).as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(io::Error::other(format!("gnuplot exited with {status}")));
        }

        Ok(CHARTS
            .iter()
            .map(|(_, _, _, file)| self.output_dir.join(file))
            .collect())
    }
}
