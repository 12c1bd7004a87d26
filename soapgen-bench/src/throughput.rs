//! Document generation throughput.
//!
//! Criterion reports time per iteration; this module measures sustained
//! document output for a fixed model so runs can be compared in types and
//! bytes per second.

use soapgen_codegen::Generator;
use soapgen_model::MetaType;
use std::fmt;
use std::time::{Duration, Instant};

/// Totals from repeatedly generating one model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationThroughput {
    /// Documents generated.
    pub documents: u64,
    /// Top-level types per document.
    pub types_per_document: usize,
    /// Total bytes of output.
    pub bytes: u64,
    /// Wall-clock time spent generating.
    pub elapsed: Duration,
}

impl GenerationThroughput {
    fn rate(&self, amount: f64) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { amount / secs } else { 0.0 }
    }

    /// Returns documents per second, or zero for an unmeasurable run.
    #[must_use]
    pub fn documents_per_second(&self) -> f64 {
        self.rate(self.documents as f64)
    }

    /// Returns top-level types rendered per second.
    #[must_use]
    pub fn types_per_second(&self) -> f64 {
        self.rate(self.documents as f64 * self.types_per_document as f64)
    }

    /// Returns output megabytes per second.
    #[must_use]
    pub fn mb_per_second(&self) -> f64 {
        self.rate(self.bytes as f64) / (1024.0 * 1024.0)
    }
}

impl fmt::Display for GenerationThroughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents x {} types: {:.0} docs/s, {:.0} types/s, {:.2} MB/s",
            self.documents,
            self.types_per_document,
            self.documents_per_second(),
            self.types_per_second(),
            self.mb_per_second()
        )
    }
}

/// Generates `model` `documents` times with `generator` and sums the output.
#[must_use]
pub fn measure_generation(
    generator: &Generator,
    model: &[MetaType],
    documents: u64,
) -> GenerationThroughput {
    let start = Instant::now();
    let mut bytes = 0u64;

    for _ in 0..documents {
        bytes += generator.generate(std::hint::black_box(model)).len() as u64;
    }

    GenerationThroughput {
        documents,
        types_per_document: model.len(),
        bytes,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service_model;

    #[test]
    fn test_measure_generation_counts_output() {
        let generator = Generator::default();
        let model = service_model(5);
        let single = generator.generate(&model).len() as u64;

        let result = measure_generation(&generator, &model, 20);
        assert_eq!(result.documents, 20);
        assert_eq!(result.types_per_document, model.len());
        assert_eq!(result.bytes, single * 20);
    }

    #[test]
    fn test_rates() {
        let result = GenerationThroughput {
            documents: 100,
            types_per_document: 10,
            bytes: 2 * 1024 * 1024,
            elapsed: Duration::from_secs(2),
        };
        assert!((result.documents_per_second() - 50.0).abs() < 0.001);
        assert!((result.types_per_second() - 500.0).abs() < 0.001);
        assert!((result.mb_per_second() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_elapsed_reports_zero() {
        let result = GenerationThroughput {
            documents: 0,
            types_per_document: 3,
            bytes: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(result.documents_per_second(), 0.0);
        assert_eq!(result.mb_per_second(), 0.0);
        assert_eq!(
            result.to_string(),
            "0 documents x 3 types: 0 docs/s, 0 types/s, 0.00 MB/s"
        );
    }
}
