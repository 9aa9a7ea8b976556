use rustfft::num_complex::Complex64;

pub fn norm_square(v: &[Complex64]) -> f64 {
    v.iter().map(|&x| x.norm_sqr()).sum::<f64>()
}

/// Min and max over the finite values only; `None` when there are none.
pub fn get_min_max<'a, I: IntoIterator<Item = &'a f64>>(v: I) -> Option<(f64, f64)> {
    v.into_iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((min, max)) => Some((min.min(x), max.max(x))),
        })
}

pub fn mean(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / v.len() as f64
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ComponentStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ComponentStats {
    fn new(v: &[f64]) -> Self {
        let (min, max) = get_min_max(v).unwrap_or((0.0, 0.0));
        Self {
            min,
            max,
            mean: mean(v),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub i: ComponentStats,
    pub q: ComponentStats,
    /// RMS magnitude of the complex samples
    pub rms: f64,
}

impl SeriesStats {
    /// Samples past the shorter of the two components are ignored.
    pub fn new(i: &[f64], q: &[f64]) -> Self {
        let n = usize::min(i.len(), q.len());
        let (i, q) = (&i[..n], &q[..n]);
        let iq: Vec<Complex64> = i
            .iter()
            .zip(q.iter())
            .map(|(&re, &im)| Complex64 { re, im })
            .collect();
        let rms = if iq.is_empty() {
            0.0
        } else {
            (norm_square(&iq) / iq.len() as f64).sqrt()
        };
        Self {
            i: ComponentStats::new(i),
            q: ComponentStats::new(q),
            rms,
        }
    }
}
