//! Syslog protocol taxonomy
//!
//! Reference: syslog.h

///Log importance
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    ///system is unusable
    LOG_EMERG = 0,
    ///action must be taken immediately
    LOG_ALERT = 1,
    ///critical conditions
    LOG_CRIT = 2,
    ///error conditions
    LOG_ERR = 3,
    ///warning conditions
    LOG_WARNING = 4,
    ///normal but significant condition
    LOG_NOTICE = 5,
    ///informational
    LOG_INFO = 6,
    ///debug-level messages
    LOG_DEBUG = 7,
}

impl Severity {
    ///Decodes severity from priority value, taking its low 3 bits
    pub const fn from_priority(priority: u32) -> Self {
        match priority & 7 {
            0 => Self::LOG_EMERG,
            1 => Self::LOG_ALERT,
            2 => Self::LOG_CRIT,
            3 => Self::LOG_ERR,
            4 => Self::LOG_WARNING,
            5 => Self::LOG_NOTICE,
            6 => Self::LOG_INFO,
            7 => Self::LOG_DEBUG,
            _ => unreach!(),
        }
    }

    ///Maps severity onto the display level used for rendering
    pub const fn display_level(self) -> DisplayLevel {
        match self {
            Self::LOG_EMERG | Self::LOG_ALERT | Self::LOG_CRIT => DisplayLevel::Critical,
            Self::LOG_ERR => DisplayLevel::Error,
            Self::LOG_WARNING => DisplayLevel::Warn,
            Self::LOG_NOTICE | Self::LOG_INFO => DisplayLevel::Info,
            Self::LOG_DEBUG => DisplayLevel::Debug,
        }
    }
}

///Combined facility/severity code carried in a leading `<N>` token
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Priority(u32);

impl Priority {
    ///Value assumed when a line carries no priority token (facility 14, severity 6)
    pub const DEFAULT: Self = Self(118);

    #[inline(always)]
    ///Creates priority from raw integer value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline(always)]
    ///Returns raw integer value
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline(always)]
    ///Decodes severity from low 3 bits
    pub const fn severity(self) -> Severity {
        Severity::from_priority(self.0)
    }

    #[inline(always)]
    ///Decodes facility from upper bits.
    ///
    ///Decoded as byproduct of the priority split, nothing downstream consults it.
    pub const fn facility(self) -> u32 {
        self.0 >> 3
    }
}

impl Default for Priority {
    #[inline(always)]
    fn default() -> Self {
        Self::DEFAULT
    }
}

///Coarse severity classification used to pick color and format
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisplayLevel {
    ///Unusable or critical conditions (severities 0-2)
    Critical,
    ///Error conditions
    Error,
    ///Warning conditions
    Warn,
    ///Notices and informational messages
    Info,
    ///Debug-level messages
    Debug,
}
