use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Path to the YAML configuration file. Defaults are used if omitted.
    #[clap(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Address to listen on. Overrides the configuration file.
    #[clap(long, env = "SOCKET_ADDRESS")]
    pub socket_address: Option<SocketAddr>,
}
