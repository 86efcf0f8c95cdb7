use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;
use thiserror::Error as ThisError;

/// 6-byte hardware address, as found on Ethernet-like interfaces.
#[repr(transparent)]
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MacAddr6(pub [u8; 6]);

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("hardware address is invalid")]
    InvalidHardwareAddr,
}

impl MacAddr6 {
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn set_local(&mut self, v: bool) -> MacAddr6 {
        if v {
            self.0[0] |= 0b0000_0010;
        } else {
            self.0[0] &= !0b0000_0010;
        }
        *self
    }

    pub const fn is_local(&self) -> bool {
        (self.0[0] & 0b0000_0010) != 0
    }

    pub fn set_multicast(&mut self, v: bool) -> MacAddr6 {
        if v {
            self.0[0] |= 0b0000_0001;
        } else {
            self.0[0] &= !0b0000_0001;
        }
        *self
    }

    pub const fn is_multicast(&self) -> bool {
        (self.0[0] & 0b0000_0001) != 0
    }

    fn write_delimited(&self, sep: &str) -> String {
        format!(
            "{:02x}{sep}{:02x}{sep}{:02x}{sep}{:02x}{sep}{:02x}{sep}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl Display for MacAddr6 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.write_delimited(":"))
    }
}

impl Debug for MacAddr6 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.write_delimited(":"))
    }
}

impl From<[u8; 6]> for MacAddr6 {
    fn from(arr: [u8; 6]) -> Self {
        Self(arr)
    }
}

impl TryFrom<&[u8]> for MacAddr6 {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(
            value.try_into().map_err(|_| Error::InvalidHardwareAddr)?,
        ))
    }
}

impl FromStr for MacAddr6 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref MAC_SEMI_RE: Regex = Regex::new(r#"^([[:xdigit:]]{2}):([[:xdigit:]]{2}):([[:xdigit:]]{2}):([[:xdigit:]]{2}):([[:xdigit:]]{2}):([[:xdigit:]]{2})$"#).unwrap();
            static ref MAC_DASH_RE: Regex = Regex::new(r#"^([[:xdigit:]]{2})-([[:xdigit:]]{2})-([[:xdigit:]]{2})-([[:xdigit:]]{2})-([[:xdigit:]]{2})-([[:xdigit:]]{2})$"#).unwrap();
        }

        let mut mac_hex = s.to_string();
        mac_hex = MAC_SEMI_RE.replace(&mac_hex, "$1$2$3$4$5$6").into();
        mac_hex = MAC_DASH_RE.replace(&mac_hex, "$1$2$3$4$5$6").into();

        if mac_hex.len() != 12 {
            return Err(Error::InvalidHardwareAddr);
        }

        Ok(Self(
            hex::decode(mac_hex)
                .map_err(|_| Error::InvalidHardwareAddr)?
                .try_into()
                .map_err(|_| Error::InvalidHardwareAddr)?,
        ))
    }
}

impl Serialize for MacAddr6 {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(s)
    }
}

impl<'de> Deserialize<'de> for MacAddr6 {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        MacAddr6::from_str(&String::deserialize(d)?).map_err(serde::de::Error::custom)
    }
}
