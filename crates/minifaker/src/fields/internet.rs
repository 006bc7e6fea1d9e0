//! Network and account generators: IP addresses, ports, MAC addresses,
//! usernames, emails and domains.

use rand::Rng;

use crate::MiniFaker;
use crate::error::GenerationError;
use crate::fields::{LocaleOptions, NameOptions, WordOptions, WordType};
use crate::keys;
use crate::random;

/// Separators a username may join first and last names with.
const USERNAME_SEPARATORS: [&str; 2] = [".", "_"];

/// Largest numeric suffix appended to usernames.
const USERNAME_SUFFIX_MAX: u8 = 99;

/// Bit 0 of the first MAC octet: set for multicast, clear for unicast.
const MAC_MULTICAST_BIT: u8 = 0b01;

/// Bit 1 of the first MAC octet: set when locally administered.
const MAC_LOCAL_BIT: u8 = 0b10;

/// Separator placed between MAC address octets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MacSeparator {
    /// No separator: `aabbccddeeff`.
    None,
    /// Pairs of octets: `aabb.ccdd.eeff`.
    Dot,
    /// `aa:bb:cc:dd:ee:ff`.
    #[default]
    Colon,
    /// `aa-bb-cc-dd-ee-ff`.
    Dash,
    /// `aa bb cc dd ee ff`.
    Space,
}

impl MacSeparator {
    /// Returns the separator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Dash => "-",
            Self::Space => " ",
        }
    }
}

/// Transmission type encoded in bit 0 of the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacTransmission {
    /// Bit 0 cleared.
    Unicast,
    /// Bit 0 set.
    Multicast,
}

/// Administration type encoded in bit 1 of the first octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacAdministration {
    /// Locally administered: bit 1 set.
    Laa,
    /// Universally administered: bit 1 cleared.
    Uaa,
}

/// Options for [`MiniFaker::mac_address`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacAddressOptions {
    /// Octet separator.
    pub separator: MacSeparator,
    /// Forces bit 0 of the first octet; random when `None`.
    pub transmission: Option<MacTransmission>,
    /// Forces bit 1 of the first octet; random when `None`.
    pub administration: Option<MacAdministration>,
}

/// How a username combines its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsernameStyle {
    /// First name followed by a number from 0 to 99.
    Numbered,
    /// First name, `.` or `_`, last name.
    Joined,
    /// [`UsernameStyle::Joined`] followed by a number from 0 to 99.
    JoinedNumbered,
}

impl UsernameStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 3] = [Self::Numbered, Self::Joined, Self::JoinedNumbered];
}

/// Options for [`MiniFaker::username`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernameOptions {
    /// Explicit locale, or `None` for the registry default.
    pub locale: Option<String>,
    /// Style to build; `None` picks one at random.
    pub style: Option<UsernameStyle>,
    /// First name to use instead of a generated one.
    pub first_name: Option<String>,
    /// Last name to use instead of a generated one.
    pub last_name: Option<String>,
}

/// Options for [`MiniFaker::email`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailOptions {
    /// Explicit locale, or `None` for the registry default.
    pub locale: Option<String>,
    /// First name to use instead of a generated one.
    pub first_name: Option<String>,
    /// Last name to use instead of a generated one.
    pub last_name: Option<String>,
    /// Mail provider to use instead of one from `freeEmails`.
    pub provider: Option<String>,
}

impl MiniFaker {
    /// Builds a dotted IPv4 address.
    pub fn ip(&mut self) -> String {
        let octets: [u8; 4] = std::array::from_fn(|_| self.rng().random());
        octets
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Builds an IPv6 address of eight unpadded lower-case hex groups.
    pub fn ipv6(&mut self) -> String {
        let groups: [u16; 8] = std::array::from_fn(|_| self.rng().random());
        groups
            .iter()
            .map(|group| format!("{group:x}"))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Draws a port number from 0 to 65535.
    pub fn port(&mut self) -> u16 {
        self.rng().random()
    }

    /// Builds a MAC address, optionally forcing the transmission and
    /// administration bits of the first octet.
    ///
    /// # Example
    ///
    /// ```
    /// use minifaker::{LocaleRegistry, MacAddressOptions, MacSeparator, MiniFaker};
    ///
    /// let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), 5);
    /// let mac = faker.mac_address(&MacAddressOptions {
    ///     separator: MacSeparator::Dot,
    ///     ..MacAddressOptions::default()
    /// });
    ///
    /// assert_eq!(mac.len(), 14);
    /// assert_eq!(mac.matches('.').count(), 2);
    /// ```
    pub fn mac_address(&mut self, options: &MacAddressOptions) -> String {
        let mut octets: [u8; 6] = std::array::from_fn(|_| self.rng().random());
        if let Some(first) = octets.first_mut() {
            *first = apply_mac_flags(*first, options);
        }

        let hex: Vec<String> = octets.iter().map(|octet| format!("{octet:02x}")).collect();
        match options.separator {
            MacSeparator::Dot => hex
                .chunks(2)
                .map(<[String]>::concat)
                .collect::<Vec<_>>()
                .join(MacSeparator::Dot.as_str()),
            separator => hex.join(separator.as_str()),
        }
    }

    /// Builds a username from a first and last name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if a name that was not supplied cannot be
    /// generated.
    pub fn username(&mut self, options: &UsernameOptions) -> Result<String, GenerationError> {
        let first = match &options.first_name {
            Some(first) => first.clone(),
            None => self.first_name(&NameOptions {
                locale: options.locale.clone(),
                gender: None,
            })?,
        };
        let style = match options.style {
            Some(style) => style,
            None => *random::array_element(self.rng(), &UsernameStyle::ALL)?,
        };

        if style == UsernameStyle::Numbered {
            return Ok(format!("{first}{}", self.username_suffix()));
        }

        let last = match &options.last_name {
            Some(last) => last.clone(),
            None => self.last_name(&LocaleOptions {
                locale: options.locale.clone(),
            })?,
        };
        let separator = *random::array_element(self.rng(), &USERNAME_SEPARATORS)?;
        let joined = format!("{first}{separator}{last}");

        Ok(match style {
            UsernameStyle::JoinedNumbered => format!("{joined}{}", self.username_suffix()),
            UsernameStyle::Numbered | UsernameStyle::Joined => joined,
        })
    }

    /// Builds `"{username}@{provider}"`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the username cannot be generated or no
    /// provider is supplied and `freeEmails` cannot be resolved.
    pub fn email(&mut self, options: &EmailOptions) -> Result<String, GenerationError> {
        let provider = match &options.provider {
            Some(provider) => provider.clone(),
            None => self.pick_field(options.locale.as_deref(), keys::FREE_EMAILS)?,
        };
        let username = self.username(&UsernameOptions {
            locale: options.locale.clone(),
            style: None,
            first_name: options.first_name.clone(),
            last_name: options.last_name.clone(),
        })?;
        Ok(format!("{username}@{provider}"))
    }

    /// Picks a domain suffix such as `com`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `domainSuffixes` cannot be resolved or
    /// is empty.
    pub fn domain_suffix(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::DOMAIN_SUFFIXES)
    }

    /// Builds a lower-case domain from a noun or a first name plus a suffix.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the chosen word list or the suffix list
    /// cannot be resolved.
    pub fn domain_name(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        let locale = options.locale.as_deref();
        let label = if self.boolean() {
            self.word(&WordOptions {
                locale,
                kind: Some(WordType::Noun),
                filter: None,
            })?
        } else {
            self.first_name(&NameOptions {
                locale: options.locale.clone(),
                gender: None,
            })?
        };
        let suffix = self.domain_suffix(options)?;
        Ok(format!("{}.{suffix}", label.to_lowercase()))
    }

    /// Builds `https://{domain_name}`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the domain cannot be generated.
    pub fn domain_url(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        Ok(format!("https://{}", self.domain_name(options)?))
    }

    fn username_suffix(&mut self) -> u8 {
        self.rng().random_range(0..=USERNAME_SUFFIX_MAX)
    }
}

const fn apply_mac_flags(octet: u8, options: &MacAddressOptions) -> u8 {
    let transmitted = match options.transmission {
        Some(MacTransmission::Multicast) => octet | MAC_MULTICAST_BIT,
        Some(MacTransmission::Unicast) => octet & !MAC_MULTICAST_BIT,
        None => octet,
    };
    match options.administration {
        Some(MacAdministration::Laa) => transmitted | MAC_LOCAL_BIT,
        Some(MacAdministration::Uaa) => transmitted & !MAC_LOCAL_BIT,
        None => transmitted,
    }
}
