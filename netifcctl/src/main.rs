use clap::{Parser, Subcommand};
use netifc::NetDir;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    /// Root of the network pseudo-filesystem.
    #[clap(long, default_value = "/net")]
    netdir: PathBuf,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    ListInterfaces,
    ListAddresses,
}

fn main() {
    env_logger::init();

    let args = Cli::parse();
    let netdir = NetDir::new(args.netdir);

    match args.command {
        Commands::ListAddresses => {
            println!("Addresses: {:?}", netdir.interface_addrs(None).unwrap())
        }
        Commands::ListInterfaces => {
            for iface in netdir.interface_table(None).unwrap() {
                println!("Name: {}", iface.name());
                println!("Index: {}", iface.index());
                println!("MTU: {}", iface.mtu());
                println!("Hardware address: {}", iface.hwaddress());
                println!("Flags: {:?}", iface.flags());

                for address in netdir.interface_addrs(Some(&iface)).unwrap() {
                    println!("Address: {:?}", address.ip());
                }
                println!();
            }
        }
    }
}
