use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("cannot summarize an empty score list")]
    EmptyScores,
    #[error("harmonic mean requires strictly positive scores")]
    NonPositiveScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStat {
    Mean,
    HarmonicMean,
    Median,
    MedianLow,
    MedianHigh,
    MedianGrouped,
}

impl SummaryStat {
    // Candidate order is fixed; selection seeds from the first entry.
    pub const CANDIDATES: [SummaryStat; 6] = [
        SummaryStat::Mean,
        SummaryStat::HarmonicMean,
        SummaryStat::Median,
        SummaryStat::MedianLow,
        SummaryStat::MedianHigh,
        SummaryStat::MedianGrouped,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SummaryStat::Mean => "mean",
            SummaryStat::HarmonicMean => "harmonic_mean",
            SummaryStat::Median => "median",
            SummaryStat::MedianLow => "median_low",
            SummaryStat::MedianHigh => "median_high",
            SummaryStat::MedianGrouped => "median_grouped",
        }
    }

    pub fn apply(self, values: &[f64]) -> Result<f64, StatError> {
        match self {
            SummaryStat::Mean => mean(values),
            SummaryStat::HarmonicMean => harmonic_mean(values),
            SummaryStat::Median => median(values),
            SummaryStat::MedianLow => median_low(values),
            SummaryStat::MedianHigh => median_high(values),
            SummaryStat::MedianGrouped => median_grouped(values),
        }
    }
}

const GROUP_INTERVAL: f64 = 1.0;

pub fn mean(values: &[f64]) -> Result<f64, StatError> {
    if values.is_empty() {
        return Err(StatError::EmptyScores);
    }
    let mut sum = 0.0;
    for &v in values {
        sum += v;
    }
    Ok(sum / values.len() as f64)
}

pub fn harmonic_mean(values: &[f64]) -> Result<f64, StatError> {
    if values.is_empty() {
        return Err(StatError::EmptyScores);
    }
    let mut recip_sum = 0.0;
    for &v in values {
        if v <= 0.0 {
            return Err(StatError::NonPositiveScore);
        }
        recip_sum += 1.0 / v;
    }
    Ok(values.len() as f64 / recip_sum)
}

pub fn median(values: &[f64]) -> Result<f64, StatError> {
    if values.is_empty() {
        return Err(StatError::EmptyScores);
    }
    let data = sorted(values);
    let n = data.len();
    if n % 2 == 1 {
        Ok(data[n / 2])
    } else {
        Ok((data[n / 2 - 1] + data[n / 2]) / 2.0)
    }
}

pub fn median_low(values: &[f64]) -> Result<f64, StatError> {
    if values.is_empty() {
        return Err(StatError::EmptyScores);
    }
    let data = sorted(values);
    let n = data.len();
    if n % 2 == 1 {
        Ok(data[n / 2])
    } else {
        Ok(data[n / 2 - 1])
    }
}

pub fn median_high(values: &[f64]) -> Result<f64, StatError> {
    if values.is_empty() {
        return Err(StatError::EmptyScores);
    }
    let data = sorted(values);
    Ok(data[data.len() / 2])
}

// Interpolated median: treats the middle value as the midpoint of a
// unit-width group and interpolates by the cumulative count below it.
pub fn median_grouped(values: &[f64]) -> Result<f64, StatError> {
    if values.is_empty() {
        return Err(StatError::EmptyScores);
    }
    let data = sorted(values);
    let n = data.len();
    if n == 1 {
        return Ok(data[0]);
    }
    let x = data[n / 2];
    let lower = x - GROUP_INTERVAL / 2.0;
    let below = data.iter().position(|&v| v == x).unwrap_or(0);
    let ties = data.iter().filter(|&&v| v == x).count();
    Ok(lower + GROUP_INTERVAL * (n as f64 / 2.0 - below as f64) / ties as f64)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/tests.rs"]
mod tests;
