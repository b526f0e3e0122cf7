use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeZone, Utc};
use compact_str::{format_compact, CompactString, ToCompactString};

use crate::{result::CountdownError, time::Timestamp};

/// Language used for the end-date caption.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    German,
    #[default]
    English,
}

/// Environment variables consulted by [`Locale::from_env`], most specific first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl Locale {
    /// Maps a language tag such as `de`, `de-AT` or `de_DE.UTF-8` to a
    /// locale. Anything that isn't German falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();

        if language.eq_ignore_ascii_case("de") {
            Locale::German
        } else {
            Locale::English
        }
    }

    /// Resolves the locale from the process environment. Called once at
    /// startup; the widget itself only ever sees the resolved value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .map(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }

    pub fn labels(&self) -> CaptionLabels {
        match self {
            Locale::German => CaptionLabels { ends_on: "Endet am", at: "um" },
            Locale::English => CaptionLabels { ends_on: "Ends on", at: "at" },
        }
    }

    fn date_format(&self) -> &'static str {
        match self {
            Locale::German => "%d.%m.%Y",
            Locale::English => "%-m/%-d/%Y",
        }
    }

    fn time_format(&self) -> &'static str {
        match self {
            Locale::German => "%H:%M",
            Locale::English => "%-I:%M %p",
        }
    }

    /// Builds the caption for `target`, rendered in `tz`. Returns `None`
    /// when the timestamp is outside the representable range.
    pub fn caption<Tz>(&self, target: Timestamp, tz: &Tz) -> Option<Caption>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let at = DateTime::<Utc>::from_timestamp_millis(target)?.with_timezone(tz);

        Some(Caption {
            labels: self.labels(),
            date: at.format(self.date_format()).to_compact_string(),
            time: at.format(self.time_format()).to_compact_string(),
        })
    }
}

impl FromStr for Locale {
    type Err = CountdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(CountdownError::ConfigError("locale tag must not be empty".into()));
        }

        Ok(Self::from_tag(tag))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionLabels {
    pub ends_on: &'static str,
    pub at: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub labels: CaptionLabels,
    pub date: CompactString,
    pub time: CompactString,
}

impl Caption {
    pub fn text(&self) -> CompactString {
        format_compact!("{} {} {} {}", self.labels.ends_on, self.date, self.labels.at, self.time)
    }
}

impl fmt::Display for Caption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
