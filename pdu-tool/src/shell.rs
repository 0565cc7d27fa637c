use std::{error::Error, time::Instant};

use clap::Parser;
use comfy_table::Table;
use modbus_pdu::{hex, Decoder, Encodable, ReadHoldingRegistersResponse, ReadInputRegistersResponse, Response};
use rustyline::{completion::Completer, history::MemHistory, Editor, Helper, Highlighter, Hinter, Validator};

use crate::{
    args::*,
    registers::{register_line, register_table},
    values::payload,
};

/// State shared by one-shot commands and the interactive shell.
#[derive(Default)]
pub struct Session {
    offset: u16,
    format: OutputFormat,
    last_table: Option<Table>,
}

impl Session {
    pub fn command_loop(&mut self) -> Result<(), Box<dyn Error>> {
        println!("offset = {}", self.offset);
        println!("format = {}", self.format);
        println!();

        let config = rustyline::Config::builder().build();
        let helper = InteractiveHelper {};

        let mut rl = Editor::<InteractiveHelper, MemHistory>::with_history(config, MemHistory::new())?;
        rl.set_helper(Some(helper));

        while let Ok(line) = rl.readline("pdu-tool> ") {
            _ = rl.add_history_entry(line.as_str());

            println!();

            match self.handle_command(&line) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(err) => println!("{err}"),
            }

            println!();
        }

        Ok(())
    }

    fn handle_command(&mut self, line: &str) -> Result<bool, Box<dyn Error>> {
        let words = shellwords::split(&format!("pdu-tool> {line}"))?;

        let cmd = Interactive::try_parse_from(words)?;

        let start = Instant::now();

        let result = match &cmd.command {
            InteractiveCommands::Encode(args) => self.encode(args),
            InteractiveCommands::Decode(args) => self.decode(args),
            InteractiveCommands::Export(args) => self.export_csv(args),
            InteractiveCommands::Set(args) => {
                match args.command {
                    SetCommands::Offset { offset } => {
                        self.offset = offset;
                        println!("offset = {offset}");
                    }
                    SetCommands::Format { format } => {
                        self.format = format;
                        println!("format = {format}");
                    }
                }
                return Ok(false);
            }
            InteractiveCommands::Exit => return Ok(true),
        };

        log::debug!("{}: {}us", cmd.command, start.elapsed().as_micros());

        result.map(|_| false)
    }

    pub fn encode(&self, args: &EncodeArgs) -> Result<(), Box<dyn Error>> {
        let registers = payload(args)?;

        let response: Response = if args.input {
            ReadInputRegistersResponse::new(registers)?.into()
        } else {
            ReadHoldingRegistersResponse::new(registers)?.into()
        };

        let bytes = response.encode_to_bytes()?;
        log::info!("Encoded {} into {} bytes", response.function_code(), bytes.len());

        println!("{response}");
        println!("{}", hex::format(&bytes));

        Ok(())
    }

    pub fn decode(&mut self, args: &DecodeArgs) -> Result<(), Box<dyn Error>> {
        let bytes = hex::parse(&args.hex.join(""))?;

        let mut decoder = Decoder::new(&bytes);
        let response: Response = decoder.read_type()?;
        let consumed = decoder.position();

        println!("{response}");
        println!("Function: {}", response.function_code());
        println!("Consumed: {consumed} of {} bytes", bytes.len());
        if decoder.remaining() > 0 {
            log::warn!("{} trailing byte(s) after the PDU", decoder.remaining());
            println!("Trailing: {}", hex::format(&bytes[consumed..]));
        }
        if response.registers().len() % 2 != 0 {
            log::warn!("Odd byte count {}, last byte is not a whole register", response.registers().len());
        }

        let values: Vec<u16> = match &response {
            Response::ReadHoldingRegisters(res) => res.values().collect(),
            Response::ReadInputRegisters(res) => res.values().collect(),
        };

        println!();
        match self.format {
            OutputFormat::Table => {
                let table = register_table(response.function_code(), self.offset, &values);
                println!("{table}");
                self.last_table = Some(table);
            }
            OutputFormat::Raw => {
                println!("{}", register_line(&values));
                self.last_table = None;
            }
        }

        Ok(())
    }

    fn export_csv(&self, args: &ExportArgs) -> Result<(), Box<dyn Error>> {
        let table = match &self.last_table {
            Some(table) => table,
            None => {
                println!("Nothing to export");
                return Ok(());
            }
        };

        let mut writer = csv::Writer::from_path(&args.filename)?;
        write_table(&mut writer, table)?;

        println!("Exported");

        Ok(())
    }
}

fn write_table<W: std::io::Write>(writer: &mut csv::Writer<W>, table: &Table) -> Result<(), Box<dyn Error>> {
    if let Some(header) = table.header() {
        writer.write_record(header.cell_iter().map(|c| c.content()))?;
    }

    for row in table.row_iter() {
        writer.write_record(row.cell_iter().map(|c| c.content()))?;
    }
    writer.flush()?;

    Ok(())
}

#[derive(Helper, Hinter, Validator, Highlighter)]
struct InteractiveHelper {}
const COMPLETIONS: [&str; 8] = [
    "encode ",
    "encode --input ",
    "encode --raw ",
    "decode ",
    "export ",
    "set offset ",
    "set format ",
    "exit",
];

impl Completer for InteractiveHelper {
    type Candidate = String;

    fn complete(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let matches = COMPLETIONS
            .iter()
            .filter(|cmd| cmd.starts_with(line) && pos <= cmd.len())
            .map(|cmd| String::from(&cmd[pos..]))
            .collect();

        Ok((pos, matches))
    }
}
