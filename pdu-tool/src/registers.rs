use comfy_table::{presets, CellAlignment, Table};
use modbus_pdu::FunctionCode;

const EMPTY: &str = "-------";

pub trait PrettyDisplay {
    fn pretty(&self) -> String;
}

impl PrettyDisplay for f32 {
    fn pretty(&self) -> String {
        let magnitude = self.abs();
        if *self != 0.0 && self.is_finite() && !(1e-4..1e7).contains(&magnitude) {
            format!("{self:e}")
        } else {
            format!("{self}")
        }
    }
}

/// Address prefix of the register table a function code reads from.
fn address_prefix(function_code: FunctionCode) -> &'static str {
    match function_code {
        FunctionCode::ReadInputRegisters => "3",
        _ => "4",
    }
}

/// Table of register values with 16 and 32 bit interpretations.
///
/// The 32 bit columns combine each register with the next one, in both word
/// orders, and are only shown for more than one register.
pub fn register_table(function_code: FunctionCode, offset: u16, values: &[u16]) -> Table {
    let show32bit = values.len() > 1;

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);

    let mut header = vec!["Address", "U16", "I16"];
    if show32bit {
        header.extend(["U32[HL]", "U32[LH]", "I32[HL]", "I32[LH]", "F32[HL]", "F32[LH]"]);
    }
    header.extend(["Hex", "Bin"]);

    let column_count = header.len();
    table.set_header(header);

    table.column_iter_mut().skip(1).for_each(|c| c.set_cell_alignment(CellAlignment::Right));
    table
        .column_iter_mut()
        .skip(column_count - 2)
        .for_each(|c| c.set_cell_alignment(CellAlignment::Left));

    let prefix = address_prefix(function_code);

    for (index, value) in values.iter().enumerate() {
        let address = offset as u32 + index as u32;
        let mut row: Vec<String> = Vec::with_capacity(column_count);

        row.push(format!("{prefix}{address:05}"));
        row.push(value.to_string());
        row.push(i16::from_be_bytes(value.to_be_bytes()).to_string());

        if show32bit {
            match values.get(index + 1) {
                Some(next) => {
                    let [b0, b1] = value.to_be_bytes();
                    let [b2, b3] = next.to_be_bytes();

                    row.push(u32::from_be_bytes([b0, b1, b2, b3]).to_string());
                    row.push(u32::from_be_bytes([b2, b3, b0, b1]).to_string());
                    row.push(i32::from_be_bytes([b0, b1, b2, b3]).to_string());
                    row.push(i32::from_be_bytes([b2, b3, b0, b1]).to_string());
                    row.push(f32::from_be_bytes([b0, b1, b2, b3]).pretty());
                    row.push(f32::from_be_bytes([b2, b3, b0, b1]).pretty());
                }
                None => row.extend(std::iter::repeat_n(EMPTY.to_string(), 6)),
            }
        }

        row.push(format!("{value:04x}"));
        row.push(format!(
            "{:04b} {:04b} {:04b} {:04b}",
            value >> 12 & 0xF,
            value >> 8 & 0xF,
            value >> 4 & 0xF,
            value & 0xF
        ));

        table.add_row(row);
    }

    table
}

/// Register values on one line, for `raw` output.
pub fn register_line(values: &[u16]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<String>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(table: &Table) -> Vec<Vec<String>> {
        table.row_iter().map(|row| row.cell_iter().map(|c| c.content()).collect()).collect()
    }

    #[test]
    fn single_register_has_no_32bit_columns() {
        let table = register_table(FunctionCode::ReadHoldingRegisters, 0, &[0xFFFF]);

        assert_eq!(table.header().map(|h| h.cell_count()), Some(5));
        assert_eq!(contents(&table), vec![vec!["400000", "65535", "-1", "ffff", "1111 1111 1111 1111"]]);
    }

    #[test]
    fn register_pairs_are_combined() {
        let table = register_table(FunctionCode::ReadInputRegisters, 99, &[0x0001, 0x0002]);
        let rows = contents(&table);

        assert_eq!(table.header().map(|h| h.cell_count()), Some(11));
        assert_eq!(rows[0][0], "300099");
        assert_eq!(rows[0][3], "65538");
        assert_eq!(rows[0][4], "131073");
        assert_eq!(rows[1][0], "300100");
        assert_eq!(rows[1][3], EMPTY);
    }

    #[test]
    fn hex_column_matches_payload_hex() {
        let table = register_table(FunctionCode::ReadHoldingRegisters, 0, &[0xABCD]);

        assert_eq!(contents(&table)[0][3], modbus_pdu::hex::format(&[0xAB, 0xCD]));
    }

    #[test]
    fn pretty_floats() {
        assert_eq!(1.5f32.pretty(), "1.5");
        assert_eq!(0f32.pretty(), "0");
        assert_eq!(1e10f32.pretty(), "1e10");
        assert_eq!(f32::NAN.pretty(), "NaN");
    }

    #[test]
    fn raw_line() {
        assert_eq!(register_line(&[10, 20]), "10 20");
        assert_eq!(register_line(&[]), "");
    }
}
