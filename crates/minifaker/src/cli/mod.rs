//! CLI support for generating fake values from the command line.
//!
//! The `minifaker` binary delegates parsing and generation to this module so
//! both can be exercised in tests without spawning a process.

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{GenerationError, LocaleError};
use crate::faker::MiniFaker;
use crate::fields::{
    ColorOptions, EmailOptions, LocaleOptions, MacAddressOptions, NameOptions, PhoneOptions,
    UsernameOptions, WordOptions,
};
use crate::locales;
use crate::random::NumberOptions;
use crate::registry::LocaleRegistry;

mod error;

pub use error::CliError;

const DEFAULT_COUNT: usize = 1;

/// A value the CLI knows how to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `first-name`
    FirstName,
    /// `last-name`
    LastName,
    /// `name`
    Name,
    /// `phone-number`
    PhoneNumber,
    /// `city`
    City,
    /// `city-name`
    CityName,
    /// `city-prefix`
    CityPrefix,
    /// `city-suffix`
    CitySuffix,
    /// `job-title`
    JobTitle,
    /// `job-type`
    JobType,
    /// `job-area`
    JobArea,
    /// `job-descriptor`
    JobDescriptor,
    /// `ip`
    Ip,
    /// `ipv6`
    Ipv6,
    /// `port`
    Port,
    /// `mac-address`
    MacAddress,
    /// `color`
    Color,
    /// `word`
    Word,
    /// `username`
    Username,
    /// `email`
    Email,
    /// `domain-name`
    DomainName,
    /// `domain-suffix`
    DomainSuffix,
    /// `domain-url`
    DomainUrl,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
}

impl Field {
    /// Every field, in the order they are listed in the usage text.
    pub const ALL: [Self; 25] = [
        Self::FirstName,
        Self::LastName,
        Self::Name,
        Self::PhoneNumber,
        Self::City,
        Self::CityName,
        Self::CityPrefix,
        Self::CitySuffix,
        Self::JobTitle,
        Self::JobType,
        Self::JobArea,
        Self::JobDescriptor,
        Self::Ip,
        Self::Ipv6,
        Self::Port,
        Self::MacAddress,
        Self::Color,
        Self::Word,
        Self::Username,
        Self::Email,
        Self::DomainName,
        Self::DomainSuffix,
        Self::DomainUrl,
        Self::Number,
        Self::Boolean,
    ];

    /// Returns the command-line name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::Name => "name",
            Self::PhoneNumber => "phone-number",
            Self::City => "city",
            Self::CityName => "city-name",
            Self::CityPrefix => "city-prefix",
            Self::CitySuffix => "city-suffix",
            Self::JobTitle => "job-title",
            Self::JobType => "job-type",
            Self::JobArea => "job-area",
            Self::JobDescriptor => "job-descriptor",
            Self::Ip => "ip",
            Self::Ipv6 => "ipv6",
            Self::Port => "port",
            Self::MacAddress => "mac-address",
            Self::Color => "color",
            Self::Word => "word",
            Self::Username => "username",
            Self::Email => "email",
            Self::DomainName => "domain-name",
            Self::DomainSuffix => "domain-suffix",
            Self::DomainUrl => "domain-url",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }

    /// Looks a field up by its command-line name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownField`] if no field has that name.
    pub fn parse(value: &str) -> Result<Self, CliError> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| CliError::UnknownField {
                value: value.to_owned(),
            })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed options for the minifaker CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    field: Field,
    locale: Option<String>,
    default_locale: Option<String>,
    locale_files: Vec<Utf8PathBuf>,
    seed: Option<u64>,
    count: usize,
}

impl Options {
    /// Returns the field to generate.
    ///
    /// # Example
    ///
    /// ```
    /// use minifaker::cli::{Field, ParseOutcome, parse_args};
    ///
    /// let args = vec!["email".to_owned()];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.field(), Field::Email);
    /// ```
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Returns the explicit locale, if any.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Returns the locale to make the default after loading, if any.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Returns the extra locale files to load, in the order given.
    #[must_use]
    pub fn locale_files(&self) -> &[Utf8PathBuf] {
        &self.locale_files
    }

    /// Returns the supplied seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns how many values to generate.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Values produced by one CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Seed the faker was created with.
    pub seed: u64,
    /// Generated values, one per requested count.
    pub values: Vec<String>,
}

/// Parses CLI arguments into generation options.
///
/// # Errors
///
/// Returns [`CliError`] when the field is missing or unknown, a flag is
/// unrecognised, or a flag value cannot be parsed.
///
/// # Example
///
/// ```
/// use minifaker::cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "city".to_owned(),
///     "--count".to_owned(),
///     "3".to_owned(),
/// ];
///
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
/// assert_eq!(options.count(), 3);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut field: Option<Field> = None;
    let mut locale: Option<String> = None;
    let mut default_locale: Option<String> = None;
    let mut locale_files: Vec<Utf8PathBuf> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut count: Option<usize> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--locale" => locale = Some(next_value(&mut args, "--locale")?),
            "--default-locale" => {
                default_locale = Some(next_value(&mut args, "--default-locale")?);
            }
            "--locale-file" => {
                let value = next_value(&mut args, "--locale-file")?;
                locale_files.push(Utf8PathBuf::from(value));
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                seed = Some(parse_number(&value, "--seed")?);
            }
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                count = Some(parse_number(&value, "--count")?);
            }
            value if field.is_none() && !value.starts_with('-') => {
                field = Some(Field::parse(value)?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_field = field.ok_or(CliError::MissingField)?;
    Ok(ParseOutcome::Options(Options {
        field: resolved_field,
        locale,
        default_locale,
        locale_files,
        seed,
        count: count.unwrap_or(DEFAULT_COUNT),
    }))
}

/// Builds a faker over the built-in locales plus any locale files.
///
/// # Errors
///
/// Returns [`CliError`] if a locale file cannot be loaded or the requested
/// default locale is not registered.
pub fn build_faker(options: &Options) -> Result<MiniFaker, CliError> {
    let mut registry = LocaleRegistry::new();
    locales::install_all(&mut registry)?;

    for path in &options.locale_files {
        let name = load_locale_file(&mut registry, path)?;
        info!(locale = %name, path = %path, "loaded locale file");
    }

    if let Some(default_locale) = options.default_locale.as_deref() {
        registry.set_default_locale(default_locale)?;
    }

    let seed = options.seed.unwrap_or_else(random_seed);
    debug!(seed, "seeding faker");
    Ok(MiniFaker::with_seed(registry, seed))
}

/// Generates `count` values of the requested field.
///
/// # Errors
///
/// Returns [`CliError`] if the faker cannot be built or a value cannot be
/// generated.
///
/// # Example
///
/// ```
/// use minifaker::cli::{ParseOutcome, generate, parse_args};
///
/// let args = ["ip", "--seed", "7", "--count", "2"].map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let generated = generate(&options).expect("generate");
/// assert_eq!(generated.seed, 7);
/// assert_eq!(generated.values.len(), 2);
/// ```
pub fn generate(options: &Options) -> Result<Generated, CliError> {
    let mut faker = build_faker(options)?;
    let values = (0..options.count)
        .map(|_| generate_value(&mut faker, options.field, options.locale.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Generated {
        seed: faker.seed(),
        values,
    })
}

/// Generates one value of `field`, optionally from an explicit locale.
///
/// # Errors
///
/// Returns [`GenerationError`] if the field's locale data cannot be resolved.
pub fn generate_value(
    faker: &mut MiniFaker,
    field: Field,
    locale: Option<&str>,
) -> Result<String, GenerationError> {
    let locale_options = LocaleOptions {
        locale: locale.map(str::to_owned),
    };
    let name_options = NameOptions {
        locale: locale_options.locale.clone(),
        gender: None,
    };

    match field {
        Field::FirstName => faker.first_name(&name_options),
        Field::LastName => faker.last_name(&locale_options),
        Field::Name => faker.name(&name_options),
        Field::PhoneNumber => faker.phone_number(&PhoneOptions {
            locale: locale_options.locale,
            formats: None,
        }),
        Field::City => faker.city(&locale_options),
        Field::CityName => faker.city_name(&locale_options),
        Field::CityPrefix => faker.city_prefix(&locale_options),
        Field::CitySuffix => faker.city_suffix(&locale_options),
        Field::JobTitle => faker.job_title(&locale_options),
        Field::JobType => faker.job_type(&locale_options),
        Field::JobArea => faker.job_area(&locale_options),
        Field::JobDescriptor => faker.job_descriptor(&locale_options),
        Field::Ip => Ok(faker.ip()),
        Field::Ipv6 => Ok(faker.ipv6()),
        Field::Port => Ok(faker.port().to_string()),
        Field::MacAddress => Ok(faker.mac_address(&MacAddressOptions::default())),
        Field::Color => Ok(faker.color(&ColorOptions::default())),
        Field::Word => faker.word(&WordOptions {
            locale,
            ..WordOptions::default()
        }),
        Field::Username => faker.username(&UsernameOptions {
            locale: locale_options.locale,
            ..UsernameOptions::default()
        }),
        Field::Email => faker.email(&EmailOptions {
            locale: locale_options.locale,
            ..EmailOptions::default()
        }),
        Field::DomainName => faker.domain_name(&locale_options),
        Field::DomainSuffix => faker.domain_suffix(&locale_options),
        Field::DomainUrl => faker.domain_url(&locale_options),
        Field::Number => Ok(faker.number(NumberOptions::default()).to_string()),
        Field::Boolean => Ok(faker.boolean().to_string()),
    }
}

/// Returns the help text, listing every field.
#[must_use]
pub fn usage() -> String {
    let fields = Field::ALL
        .iter()
        .map(|field| format!("  {field}\n"))
        .collect::<String>();
    format!(
        concat!(
            "Usage: minifaker <field> [options]\n",
            "\n",
            "Options:\n",
            "  --locale <name>          Locale to read data from (defaults to the default locale)\n",
            "  --default-locale <name>  Locale to make the default after loading\n",
            "  --locale-file <path>     Extra locale file to load (repeatable)\n",
            "  --seed <seed>            RNG seed value (defaults to random)\n",
            "  --count <n>              Number of values (defaults to 1)\n",
            "  -h, --help               Print this help output\n",
            "\n",
            "Fields:\n",
            "{}"
        ),
        fields
    )
}

fn load_locale_file(registry: &mut LocaleRegistry, path: &Utf8Path) -> Result<String, CliError> {
    let file_name = path.file_name().ok_or_else(|| CliError::InvalidLocalePath {
        path: path.to_string(),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        LocaleError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    Ok(registry.load_locale_file(&dir, Utf8Path::new(file_name))?)
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn random_seed() -> u64 {
    rand::rng().random()
}
