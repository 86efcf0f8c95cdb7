mod error;
mod ipifc;
pub use error::Error;
pub use hwaddr;
use bitflags::bitflags;
use hwaddr::MacAddr6;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

bitflags! {
    /// Capability flags of an interface.
    ///
    /// Interfaces exposed through the /net filesystem always report
    /// `UP | BROADCAST | LOOPBACK`; the remaining flags exist for API
    /// completeness and are never set by this crate.
    #[derive(Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
    pub struct InterfaceFlags: u32 {
        const UP = 1 << 0;
        const BROADCAST = 1 << 1;
        const LOOPBACK = 1 << 2;
        const POINTTOPOINT = 1 << 3;
        const MULTICAST = 1 << 4;
    }
}

/// A single network interface, read from `<netdir>/ipifc/<N>/status`.
///
/// The kernel names interfaces by their zero-based slot number, so `name` is
/// the decimal form of the slot and `index` is the same slot offset by one.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Interface {
    pub(crate) index: u32,
    pub(crate) name: String,
    pub(crate) mtu: u32,
    pub(crate) hwaddress: MacAddr6,
    pub(crate) flags: InterfaceFlags,
}

impl Interface {
    /// One-based interface index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Interface name, the decimal slot number under `ipifc`.
    pub fn name(&self) -> String {
        self.name.clone()
    }

    pub fn mtu(&self) -> u32 {
        self.mtu
    }

    pub fn hwaddress(&self) -> MacAddr6 {
        self.hwaddress
    }

    pub fn flags(&self) -> InterfaceFlags {
        self.flags
    }
}

/// An IP address bound to an interface.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InterfaceAddr {
    pub(crate) ip: IpAddr,
    pub(crate) zone: String,
}

impl InterfaceAddr {
    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    /// IPv6 zone identifier. Always empty in this environment.
    pub fn zone(&self) -> &str {
        &self.zone
    }
}

/// Handle to a network pseudo-filesystem root.
///
/// Defaults to `/net`. The root is an explicit value rather than a process
/// global, so callers (and tests) can point queries at any mounted instance
/// of the filesystem.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NetDir {
    root: PathBuf,
}

impl Default for NetDir {
    fn default() -> Self {
        Self::new("/net")
    }
}

impl NetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Lists all interfaces under the default `/net` root.
pub fn list_interfaces() -> Result<Vec<Interface>, Error> {
    NetDir::default().interface_table(None)
}

/// Lists the addresses of all interfaces under the default `/net` root.
pub fn list_addresses() -> Result<Vec<InterfaceAddr>, Error> {
    NetDir::default().interface_addrs(None)
}
