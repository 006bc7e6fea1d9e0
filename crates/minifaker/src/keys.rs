//! Well-known field keys read by the built-in generators.
//!
//! Locale bundles may carry any key; these are the ones the generators in
//! [`crate::MiniFaker`] resolve.

/// Gender-neutral first names.
pub const FIRST_NAMES: &str = "firstNames";
/// Male first names.
pub const MALE_FIRST_NAMES: &str = "maleFirstNames";
/// Female first names.
pub const FEMALE_FIRST_NAMES: &str = "femaleFirstNames";
/// Family names.
pub const LAST_NAMES: &str = "lastNames";
/// Phone number templates using `#` as a digit placeholder.
pub const PHONE_FORMATS: &str = "phoneFormats";
/// City names.
pub const CITY_NAMES: &str = "cityNames";
/// City name prefixes such as "North".
pub const CITY_PREFIXES: &str = "cityPrefixes";
/// City name suffixes such as "ville".
pub const CITY_SUFFIXES: &str = "citySuffixes";
/// Job types such as "Engineer".
pub const JOB_TYPES: &str = "jobTypes";
/// Job areas such as "Marketing".
pub const JOB_LEVELS: &str = "jobLevels";
/// Job descriptors such as "Senior".
pub const JOB_DESCRIPTORS: &str = "jobDescriptors";
/// Free email providers.
pub const FREE_EMAILS: &str = "freeEmails";
/// Top-level domain suffixes.
pub const DOMAIN_SUFFIXES: &str = "domainSuffixes";
