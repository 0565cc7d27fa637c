use std::{fmt::Display, path::PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Encode and decode Modbus register response PDUs", long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode register values into a response PDU
    Encode(EncodeArgs),

    /// Decode a response PDU given as hex
    Decode(DecodeArgs),

    /// Start an interactive shell (default)
    Shell,
}

#[derive(Parser, Debug)]
#[command()]
pub struct Interactive {
    #[command(subcommand)]
    pub command: InteractiveCommands,
}

#[derive(Subcommand, Debug)]
pub enum InteractiveCommands {
    /// Encode register values into a response PDU
    Encode(EncodeArgs),

    /// Decode a response PDU given as hex
    Decode(DecodeArgs),

    /// Export the previously printed table
    Export(ExportArgs),

    /// Set configuration
    Set(SetArgs),

    /// Exit the program
    Exit,
}

impl Display for InteractiveCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractiveCommands::Encode(_) => write!(f, "Encode"),
            InteractiveCommands::Decode(_) => write!(f, "Decode"),
            InteractiveCommands::Export(_) => write!(f, "Export"),
            InteractiveCommands::Set(_) => write!(f, "Set"),
            InteractiveCommands::Exit => write!(f, "Exit"),
        }
    }
}

#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct EncodeArgs {
    /// Register values: decimal, negative (i16), 0x hex or 0b binary
    #[arg(required_unless_present = "raw", conflicts_with = "raw")]
    pub values: Vec<String>,

    /// Raw payload bytes as hex, used instead of register values
    #[arg(long)]
    pub raw: Option<String>,

    /// Encode a read input registers response instead of holding registers
    #[arg(long)]
    pub input: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// PDU bytes as hex, may be split over several arguments
    #[arg(required = true)]
    pub hex: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// The file to write to
    pub filename: PathBuf,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[command(subcommand)]
    pub command: SetCommands,
}

#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// Set the address of the first register in printed tables
    Offset { offset: u16 },

    /// Set how decoded registers are printed
    Format {
        #[arg(value_enum)]
        format: OutputFormat,
    },
}

#[derive(Debug, PartialEq, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table with every interpretation of the registers
    #[default]
    Table,

    /// Register values only, one line
    Raw,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Raw => write!(f, "raw"),
        }
    }
}
