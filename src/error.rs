use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid status file of interface: {}", .0.display())]
    InvalidStatusFile(PathBuf),
    #[error("interface has invalid hardware address")]
    InvalidHardwareAddr,
    #[error("cannot parse IP address for interface")]
    CannotParseAddr,
    #[error("unable to parse IP address for interface")]
    UnparseableAddr,
    #[error(transparent)]
    HardwareAddr(#[from] hwaddr::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
