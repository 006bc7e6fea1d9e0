//! Job title generators.

use crate::MiniFaker;
use crate::error::GenerationError;
use crate::fields::LocaleOptions;
use crate::keys;

impl MiniFaker {
    /// Picks a job type, e.g. "Engineer".
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `jobTypes` cannot be resolved or is
    /// empty.
    pub fn job_type(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::JOB_TYPES)
    }

    /// Picks a job area, e.g. "Marketing", from `jobLevels`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `jobLevels` cannot be resolved or is
    /// empty.
    pub fn job_area(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::JOB_LEVELS)
    }

    /// Picks a job descriptor, e.g. "Senior".
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `jobDescriptors` cannot be resolved or
    /// is empty.
    pub fn job_descriptor(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::JOB_DESCRIPTORS)
    }

    /// Builds `"{descriptor} {area} {type}"`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if any part cannot be generated.
    pub fn job_title(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        let descriptor = self.job_descriptor(options)?;
        let area = self.job_area(options)?;
        let job_type = self.job_type(options)?;
        Ok(format!("{descriptor} {area} {job_type}"))
    }
}
