use rustfft::num_complex::Complex64;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use crate::constants::{DEFAULT_SAMPLE_RATE, SC16_FULL_SCALE};
use crate::error::IqError;
use crate::util::SeriesStats;

const BUFFER_SIZE: usize = 128 * 1024;
const NUM_COLUMNS: usize = 2;
const HEADER_LINES: u64 = 1;

/// Which file column holds which component.
///
/// The capture tool writes a `Q,I` header with Q in column 0, hence the
/// default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOrder {
    #[default]
    QI,
    IQ,
}

impl FromStr for ColumnOrder {
    type Err = Box<dyn Error>;
    fn from_str(input: &str) -> Result<ColumnOrder, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "qi" => Ok(ColumnOrder::QI),
            "iq" => Ok(ColumnOrder::IQ),
            _ => Err(format!("Failed to parse {}", input).into()),
        }
    }
}

impl fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColumnOrder::QI => write!(f, "qi"),
            ColumnOrder::IQ => write!(f, "iq"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub sample_rate: f64,
    pub order: ColumnOrder,
    /// divide every value by the sc16 full scale
    pub normalize: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            order: ColumnOrder::default(),
            normalize: false,
        }
    }
}

/// I/Q samples loaded from a CSV capture, with the synthesized time axis.
///
/// `i`, `q` and `time` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct IqSeries {
    pub file_path: PathBuf,
    pub sample_rate: f64,
    pub i: Vec<f64>,
    pub q: Vec<f64>,
    pub time: Vec<f64>,
}

impl IqSeries {
    pub fn load<P: AsRef<Path>>(path: P, sample_rate: f64) -> Result<Self, IqError> {
        Self::load_with(
            path,
            &LoadOptions {
                sample_rate,
                ..LoadOptions::default()
            },
        )
    }

    /// Reads the whole file. Any malformed row aborts the load: no partial
    /// series is ever returned.
    pub fn load_with<P: AsRef<Path>>(path: P, opts: &LoadOptions) -> Result<Self, IqError> {
        let path = path.as_ref();
        if !opts.sample_rate.is_finite() || opts.sample_rate <= 0.0 {
            return Err(IqError::InvalidSampleRate(opts.sample_rate));
        }

        let ts = Instant::now();
        let file = File::open(path).map_err(|source| IqError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let mut buf_reader = BufReader::with_capacity(BUFFER_SIZE, file);

        // the header is exactly one physical line, whatever it contains
        let mut header = vec![];
        buf_reader
            .read_until(b'\n', &mut header)
            .map_err(|source| IqError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("{}: header {:?}", path.display(), String::from_utf8_lossy(&header).trim_end());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(buf_reader);

        let scale = if opts.normalize { SC16_FULL_SCALE } else { 1.0 };
        let mut col0 = vec![];
        let mut col1 = vec![];

        for result in reader.records() {
            let record = result.map_err(|e| csv_error(path, e))?;
            let line = record.position().map_or(0, |p| p.line()) + HEADER_LINES;

            if record.len() != NUM_COLUMNS {
                return Err(IqError::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: format!(
                        "expected {} fields, found {}",
                        NUM_COLUMNS,
                        record.len()
                    ),
                });
            }
            let parse = |field: &str| {
                field.parse::<f64>().map_err(|e| IqError::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: format!("invalid number {:?}: {}", field, e),
                })
            };
            col0.push(parse(&record[0])? / scale);
            col1.push(parse(&record[1])? / scale);
        }

        let (i, q) = match opts.order {
            ColumnOrder::QI => (col1, col0),
            ColumnOrder::IQ => (col0, col1),
        };
        let time = time_axis(i.len(), opts.sample_rate);

        log::debug!(
            "{}: {} rows order={} normalize={} -- {} msec",
            path.display(),
            i.len(),
            opts.order,
            opts.normalize,
            ts.elapsed().as_millis()
        );

        Ok(Self {
            file_path: path.to_path_buf(),
            sample_rate: opts.sample_rate,
            i,
            q,
            time,
        })
    }

    pub fn len(&self) -> usize {
        self.i.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i.is_empty()
    }

    pub fn duration_sec(&self) -> f64 {
        self.len() as f64 / self.sample_rate
    }

    /// Samples as complex baseband values, `re` = I and `im` = Q.
    pub fn iq_vec(&self) -> Vec<Complex64> {
        self.i
            .iter()
            .zip(self.q.iter())
            .map(|(&re, &im)| Complex64 { re, im })
            .collect()
    }

    pub fn stats(&self) -> SeriesStats {
        SeriesStats::new(&self.i, &self.q)
    }
}

/// element k is k / sample_rate
pub fn time_axis(num_samples: usize, sample_rate: f64) -> Vec<f64> {
    (0..num_samples).map(|k| k as f64 / sample_rate).collect()
}

fn csv_error(path: &Path, e: csv::Error) -> IqError {
    let line = e.position().map_or(0, |p| p.line()) + HEADER_LINES;
    match e.into_kind() {
        csv::ErrorKind::Io(source) => IqError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        kind => IqError::Parse {
            path: path.to_path_buf(),
            line,
            reason: format!("{:?}", kind),
        },
    }
}
