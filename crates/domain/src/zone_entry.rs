//! tinydns data file lines
//!
//! Each non-blank, non-comment line starts with a one-character tag naming
//! the record type, followed by colon-separated fields:
//!
//! | Tag | Fields                          | Checked as      |
//! |-----|---------------------------------|-----------------|
//! | `&` | (ignored)                       | nothing         |
//! | `+` | name:ip                         | A               |
//! | `=` | name:ip                         | A + PTR         |
//! | `C` | alias:target                    | CNAME           |
//! | `@` | name:ip:hostname:preference     | MX              |
//! | `Z` | domain:nameserver:email:...     | SOA             |
//!
//! Fields beyond the ones listed are ignored. Field text is kept verbatim.

use std::fmt;

/// Tags recognised at the start of a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneTag {
    NameServer,
    Address,
    AddressWithPointer,
    Alias,
    MailExchanger,
    StartOfAuthority,
}

impl ZoneTag {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '&' => Some(ZoneTag::NameServer),
            '+' => Some(ZoneTag::Address),
            '=' => Some(ZoneTag::AddressWithPointer),
            'C' => Some(ZoneTag::Alias),
            '@' => Some(ZoneTag::MailExchanger),
            'Z' => Some(ZoneTag::StartOfAuthority),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            ZoneTag::NameServer => '&',
            ZoneTag::Address => '+',
            ZoneTag::AddressWithPointer => '=',
            ZoneTag::Alias => 'C',
            ZoneTag::MailExchanger => '@',
            ZoneTag::StartOfAuthority => 'Z',
        }
    }

    /// Number of leading fields the checker for this tag reads.
    pub fn required_fields(&self) -> usize {
        match self {
            ZoneTag::NameServer => 0,
            ZoneTag::Address | ZoneTag::AddressWithPointer | ZoneTag::Alias => 2,
            ZoneTag::StartOfAuthority => 3,
            ZoneTag::MailExchanger => 4,
        }
    }
}

impl fmt::Display for ZoneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One declaration read from a data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneEntry {
    /// `&` lines are accepted and never checked.
    NameServer,
    Address {
        name: String,
        ip: String,
    },
    AddressWithPointer {
        name: String,
        ip: String,
    },
    Alias {
        alias: String,
        target: String,
    },
    /// The declared `ip` field of an `@` line is not used by the check.
    MailExchanger {
        domain: String,
        hostname: String,
        preference: String,
    },
    StartOfAuthority {
        domain: String,
        nameserver: String,
        email: String,
    },
    /// Leading character is not a known tag.
    Unknown { line: String },
    /// Known tag, but fewer fields than its check needs.
    Malformed { tag: ZoneTag, line: String },
}

impl ZoneEntry {
    /// Parses one raw line of a data file.
    ///
    /// Returns `None` for blank lines and `#` comments.
    pub fn parse(raw: &str) -> Option<Self> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut chars = line.chars();
        let first = chars.next()?;
        let Some(tag) = ZoneTag::from_char(first) else {
            return Some(ZoneEntry::Unknown {
                line: line.to_string(),
            });
        };

        if tag == ZoneTag::NameServer {
            return Some(ZoneEntry::NameServer);
        }

        let fields: Vec<&str> = chars.as_str().split(':').collect();
        if fields.len() < tag.required_fields() {
            return Some(ZoneEntry::Malformed {
                tag,
                line: line.to_string(),
            });
        }

        let field = |i: usize| fields[i].to_string();
        let entry = match tag {
            ZoneTag::NameServer => ZoneEntry::NameServer,
            ZoneTag::Address => ZoneEntry::Address {
                name: field(0),
                ip: field(1),
            },
            ZoneTag::AddressWithPointer => ZoneEntry::AddressWithPointer {
                name: field(0),
                ip: field(1),
            },
            ZoneTag::Alias => ZoneEntry::Alias {
                alias: field(0),
                target: field(1),
            },
            ZoneTag::MailExchanger => ZoneEntry::MailExchanger {
                domain: field(0),
                hostname: field(2),
                preference: field(3),
            },
            ZoneTag::StartOfAuthority => ZoneEntry::StartOfAuthority {
                domain: field(0),
                nameserver: field(1),
                email: field(2),
            },
        };

        Some(entry)
    }

    pub fn tag(&self) -> Option<ZoneTag> {
        match self {
            ZoneEntry::NameServer => Some(ZoneTag::NameServer),
            ZoneEntry::Address { .. } => Some(ZoneTag::Address),
            ZoneEntry::AddressWithPointer { .. } => Some(ZoneTag::AddressWithPointer),
            ZoneEntry::Alias { .. } => Some(ZoneTag::Alias),
            ZoneEntry::MailExchanger { .. } => Some(ZoneTag::MailExchanger),
            ZoneEntry::StartOfAuthority { .. } => Some(ZoneTag::StartOfAuthority),
            ZoneEntry::Malformed { tag, .. } => Some(*tag),
            ZoneEntry::Unknown { .. } => None,
        }
    }
}
