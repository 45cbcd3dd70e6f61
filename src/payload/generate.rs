use std::ops::RangeInclusive;

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use rand_regex::Regex as RandRegex;

use crate::error::{AppError, AppResult, ValidationError};

use super::{Info, Payload, Sample};

/// Random tags and sample labels: ten ASCII letters, both cases.
const STRING_PATTERN: &str = "[A-Za-z]{10}";
const STRING_MAX_REPEAT: u32 = 10;

const INFO_VALUES: RangeInclusive<u32> = 1..=100;
const SAMPLES_PER_PAYLOAD: RangeInclusive<usize> = 1..=400;

enum TagSource {
    Fixed(String),
    Random(RandRegex),
}

/// Compiled payload shape. Built once per run; `generate` draws one payload
/// per call from the supplied random source.
pub struct PayloadSpec {
    tag: TagSource,
    label: RandRegex,
}

impl PayloadSpec {
    /// Compiles the string distributions, honoring a fixed tag override.
    ///
    /// # Errors
    ///
    /// Returns an error when the string pattern fails to compile.
    pub fn new(fixed_tag: Option<String>) -> AppResult<Self> {
        let label = compile_pattern(STRING_PATTERN)?;
        let tag = match fixed_tag {
            Some(tag) => TagSource::Fixed(tag),
            None => TagSource::Random(compile_pattern(STRING_PATTERN)?),
        };
        Ok(Self { tag, label })
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Payload {
        let tag = match &self.tag {
            TagSource::Fixed(tag) => tag.clone(),
            TagSource::Random(pattern) => pattern.sample(rng),
        };
        let info = Info(tag, rng.gen_range(INFO_VALUES), rng.gen_range(INFO_VALUES));

        let count = rng.gen_range(SAMPLES_PER_PAYLOAD);
        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            data.push(Sample(
                self.label.sample(rng),
                Standard.sample(rng),
                Standard.sample(rng),
            ));
        }

        Payload { info, data }
    }
}

fn compile_pattern(pattern: &str) -> AppResult<RandRegex> {
    RandRegex::compile(pattern, STRING_MAX_REPEAT).map_err(|err| {
        AppError::validation(ValidationError::InvalidStringPattern {
            pattern: pattern.to_owned(),
            source: err,
        })
    })
}
