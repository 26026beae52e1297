//! CLI command definitions and handlers.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rokko::{AddressType, KeyPair, Network, PrivateKey};

/// Rokko - Bitcoin key and address CLI tool.
#[derive(Parser)]
#[command(name = "rokko")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new random key pair and address.
    #[command(name = "generate", alias = "gen")]
    Generate {
        /// Use testnet instead of mainnet.
        #[arg(short, long)]
        testnet: bool,

        /// Address type to derive.
        #[arg(short, long, value_enum, default_value = "native-segwit")]
        address_type: CliAddressType,

        /// Encode the public key uncompressed (legacy addresses only).
        #[arg(short, long)]
        uncompressed: bool,
    },

    /// Validate an address and report its type and network.
    Validate {
        /// The address to check.
        address: String,
    },

    /// Import a private key from WIF and show its addresses.
    ImportKey {
        /// Private key in WIF format.
        #[arg(short, long)]
        wif: String,
    },

    /// Export a raw hex private key as WIF.
    ExportKey {
        /// Private key as 64 hex characters.
        #[arg(short, long)]
        key: String,

        /// Use testnet instead of mainnet.
        #[arg(short, long)]
        testnet: bool,

        /// Mark the key as uncompressed in the WIF.
        #[arg(short, long)]
        uncompressed: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CliAddressType {
    /// Legacy P2PKH (starts with 1)
    Legacy,
    /// `SegWit` P2SH-P2WPKH (starts with 3)
    Segwit,
    /// Native `SegWit` P2WPKH (starts with bc1q)
    NativeSegwit,
}

impl From<CliAddressType> for AddressType {
    fn from(val: CliAddressType) -> Self {
        match val {
            CliAddressType::Legacy => Self::Legacy,
            CliAddressType::Segwit => Self::SegwitWrapped,
            CliAddressType::NativeSegwit => Self::NativeSegwit,
        }
    }
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate {
            testnet,
            address_type,
            uncompressed,
        } => {
            let network = pick_network(testnet);
            let addr_type = AddressType::from(address_type);
            let mut private = PrivateKey::random(&mut rand::thread_rng());
            private.set_compressed(!uncompressed);
            let keypair = KeyPair::from_private_key(private);
            print_keypair(&keypair, addr_type, network)?;
        }
        Commands::Validate { address } => {
            let decoded = rokko::validate(&address)?;
            print_address(&decoded);
        }
        Commands::ImportKey { wif } => {
            let (key, network) = PrivateKey::from_wif(&wif)?;
            let keypair = KeyPair::from_private_key(key);
            let addr_type = if keypair.is_compressed() {
                AddressType::NativeSegwit
            } else {
                AddressType::Legacy
            };
            print_keypair(&keypair, addr_type, network)?;
        }
        Commands::ExportKey {
            key,
            testnet,
            uncompressed,
        } => {
            let network = pick_network(testnet);
            let bytes = hex::decode(&key)?;
            let mut private = PrivateKey::from_bytes(&bytes)?;
            private.set_compressed(!uncompressed);
            println!();
            println!("      {}      {}", "Network".cyan().bold(), network);
            println!("      {}          {}", "WIF".cyan().bold(), private.to_wif(network));
            println!();
        }
    }
    Ok(())
}

fn pick_network(testnet: bool) -> Network {
    if testnet {
        Network::Testnet
    } else {
        Network::Mainnet
    }
}

#[rustfmt::skip]
fn print_keypair(
    keypair: &KeyPair,
    address_type: AddressType,
    network: Network,
) -> Result<(), Box<dyn std::error::Error>> {
    let address = keypair.address(address_type, network)?;

    println!();
    println!("      {}      {}", "Network".cyan().bold(), network);
    println!("      {} {}", "Address Type".cyan().bold(), address_type.name());
    println!("      {}      {}", "Address".cyan().bold(), address.to_string().green());
    println!("      {}  {}", "Private Key".cyan().bold(), keypair.private_key().to_wif(network));
    println!("      {}   {}", "Public Key".cyan().bold(), keypair.public_key().to_hex().dimmed());
    println!();

    Ok(())
}

#[rustfmt::skip]
fn print_address(address: &rokko::Address) {
    println!();
    println!("      {}      {}", "Network".cyan().bold(), address.network());
    println!("      {} {}", "Address Type".cyan().bold(), address.address_type().name());
    println!("      {}      {}", "Canonical".cyan().bold(), address.to_string().green());
    println!("      {}       {}", "Status".cyan().bold(), "valid".green().bold());
    println!();
}
