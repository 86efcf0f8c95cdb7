//! Enumeration of IP interfaces through the `ipifc` directory.
//!
//! Each interface occupies a decimally-named subdirectory of
//! `<netdir>/ipifc`. Its `status` file carries a whitespace-delimited status
//! line (device path in field 1, MTU in field 3) followed by one
//! tab-delimited line per bound address. The device directory named by the
//! status line holds an `addr` file whose first line is the hardware address
//! as 12 undelimited hex digits.

use crate::{Error, Interface, InterfaceAddr, InterfaceFlags, NetDir};
use hwaddr::MacAddr6;
use log::debug;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

impl NetDir {
    fn ipifc_dir(&self) -> PathBuf {
        self.root().join("ipifc")
    }

    fn status_path(&self, name: &str) -> PathBuf {
        self.ipifc_dir().join(name).join("status")
    }

    /// Returns the number of interfaces present.
    ///
    /// Interface slots are allocated densely from 0, so this counts the
    /// contiguous run of decimal directory names starting at "0". Entries
    /// past a gap are not interfaces currently in use and are not counted.
    pub fn interface_count(&self) -> Result<usize, Error> {
        let mut names = HashSet::new();
        for entry in fs::read_dir(self.ipifc_dir())? {
            let entry = entry?;
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }

        let mut count = 0;
        while names.contains(&count.to_string()) {
            count += 1;
        }
        Ok(count)
    }

    /// Reads the interface in slot `position` (zero-based).
    pub fn interface(&self, position: usize) -> Result<Interface, Error> {
        let name = position.to_string();
        let index = position as u32 + 1;

        let status_path = self.status_path(&name);
        let status = first_line(&status_path)?;
        debug!("interface {name}: status line {status:?}");

        let fields: Vec<&str> = status.split(' ').collect();
        if fields.len() < 4 {
            return Err(Error::InvalidStatusFile(status_path));
        }
        let device = Path::new(fields[1]);
        let mtu: u32 = fields[3]
            .parse()
            .map_err(|_| Error::InvalidStatusFile(status_path.clone()))?;

        let raw = first_line(&device.join("addr"))?;
        let hwaddress: MacAddr6 = delimit_hardware_addr(&raw)?.parse()?;

        Ok(Interface {
            index,
            name,
            mtu,
            hwaddress,
            // Not recorded anywhere in the filesystem; every ipifc
            // interface behaves as up, broadcast-capable and loopback.
            flags: InterfaceFlags::UP | InterfaceFlags::BROADCAST | InterfaceFlags::LOOPBACK,
        })
    }

    /// Returns interfaces as a table.
    ///
    /// With `None`, all interfaces in ascending slot order; with
    /// `Some(position)`, a single-element table for that slot. Any failed
    /// read fails the whole table, partial results are never returned.
    pub fn interface_table(&self, selector: Option<usize>) -> Result<Vec<Interface>, Error> {
        match selector {
            None => {
                let count = self.interface_count()?;
                let mut interfaces = Vec::with_capacity(count);
                for position in 0..count {
                    interfaces.push(self.interface(position)?);
                }
                Ok(interfaces)
            }
            Some(position) => Ok(vec![self.interface(position)?]),
        }
    }

    /// Returns the address bound to each interface, one per interface.
    ///
    /// With `None`, addresses for every interface; with `Some(ifi)`, the
    /// address of that interface alone, without re-reading its record. The
    /// status file format carries a single address line, so multi-homed
    /// interfaces do not exist in this environment.
    pub fn interface_addrs(&self, ifi: Option<&Interface>) -> Result<Vec<InterfaceAddr>, Error> {
        let interfaces = match ifi {
            None => self.interface_table(None)?,
            Some(ifi) => vec![ifi.clone()],
        };

        let mut addrs = Vec::with_capacity(interfaces.len());
        for iface in &interfaces {
            let line = second_line(&self.status_path(&iface.name))?;
            if !line.starts_with('\t') {
                return Err(Error::CannotParseAddr);
            }
            let token = line
                .split('\t')
                .nth(1)
                .unwrap_or_default()
                .split(' ')
                .next()
                .unwrap_or_default();
            let ip: IpAddr = token.parse().map_err(|_| Error::UnparseableAddr)?;
            debug!("interface {}: address {ip}", iface.name);
            addrs.push(InterfaceAddr {
                ip,
                zone: String::new(),
            });
        }
        Ok(addrs)
    }

    /// Multicast group membership is not exposed by this filesystem; the
    /// result is always empty, and the selector is ignored.
    pub fn multicast_addrs(&self, _ifi: Option<&Interface>) -> Result<Vec<InterfaceAddr>, Error> {
        Ok(Vec::new())
    }
}

fn first_line(path: &Path) -> Result<String, Error> {
    let file = File::open(path)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn second_line(path: &Path) -> Result<String, Error> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();
    lines.next().transpose()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}

/// Rewrites a raw 12-hex-digit hardware address into colon-delimited pairs,
/// e.g. `"0011223344aa"` into `"00:11:22:33:44:aa"`. Only the length is
/// checked here; digit validity is left to the address parser.
pub(crate) fn delimit_hardware_addr(raw: &str) -> Result<String, Error> {
    if raw.len() != 12 {
        return Err(Error::InvalidHardwareAddr);
    }

    let mut out = Vec::with_capacity(17);
    for (i, pair) in raw.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            out.push(b':');
        }
        out.extend_from_slice(pair);
    }
    String::from_utf8(out).map_err(|_| Error::InvalidHardwareAddr)
}
