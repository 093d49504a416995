use crate::model::metrics::Metric;
use crate::model::record::CompanyRecord;

/// Square, symmetric Pearson matrix over a list of metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub metrics: Vec<Metric>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: Metric, col: Metric) -> Option<f64> {
        let r = self.metrics.iter().position(|m| *m == row)?;
        let c = self.metrics.iter().position(|m| *m == col)?;
        Some(self.values[r][c])
    }
}

/// Pearson correlation over the pairs where both values are finite.
/// NaN when fewer than two pairs remain or either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let pairs = xs
        .iter()
        .zip(ys)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect::<Vec<_>>();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

pub fn correlation_matrix(records: &[&CompanyRecord], metrics: &[Metric]) -> CorrelationMatrix {
    let columns = metrics
        .iter()
        .map(|m| records.iter().map(|r| m.value(r)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let k = metrics.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        // Exact 1.0 on the diagonal unless the series is degenerate.
        values[i][i] = if pearson(&columns[i], &columns[i]).is_nan() {
            f64::NAN
        } else {
            1.0
        };
        for j in (i + 1)..k {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        metrics: metrics.to_vec(),
        values,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_correlate.rs"]
mod tests;
