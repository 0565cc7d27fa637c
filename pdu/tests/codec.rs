use modbus_pdu::{
    Decodable, DecodeError, Decoder, Encodable, EncodeError, Encoder, FunctionCode, Pdu, ReadHoldingRegistersResponse, ReadInputRegistersResponse,
    Response,
};

#[test]
fn decode_back_to_back_pdus() {
    let first = ReadHoldingRegistersResponse::from_values(&[10, 20]).unwrap();
    let second = ReadInputRegistersResponse::new(vec![0x7F]).unwrap();
    let third = ReadHoldingRegistersResponse::new(Vec::new()).unwrap();

    let mut encoder = Encoder::new();
    encoder.write_type(&first).unwrap();
    encoder.write_type(&second).unwrap();
    encoder.write_type(&third).unwrap();
    let bytes = encoder.finish();

    assert_eq!(bytes, vec![0x03, 0x04, 0x00, 0x0A, 0x00, 0x14, 0x04, 0x01, 0x7F, 0x03, 0x00]);

    let mut decoder = Decoder::new(&bytes);

    assert_eq!(decoder.read_type::<Response>(), Ok(Response::from(first)));
    assert_eq!(decoder.position(), 6);
    assert_eq!(decoder.read_type::<Response>(), Ok(Response::from(second)));
    assert_eq!(decoder.position(), 9);
    assert_eq!(decoder.read_type::<Response>(), Ok(Response::from(third)));
    assert_eq!(decoder.remaining(), 0);
    assert_eq!(decoder.read_type::<Response>(), Err(DecodeError::MissingData));
}

#[test]
fn truncated_pdu_completes_once_more_data_arrives() {
    let full = [0x03, 0x05, 0x01, 0x02, 0x03, 0x04, 0x05];

    for cut in 0..full.len() {
        let result = Response::decode_from_bytes(&full[..cut]);
        assert_eq!(result, Err(DecodeError::MissingData), "cut at {cut}");
        assert!(result.unwrap_err().is_incomplete());
    }

    let res = Response::decode_from_bytes(&full).unwrap();
    assert_eq!(res.registers(), &[1, 2, 3, 4, 5]);
}

#[test]
fn encoded_layout_matches_wire_format() {
    let res = ReadHoldingRegistersResponse::from_values(&[0x0102, 0x0304, 0x0506]).unwrap();
    let bytes = res.encode_to_bytes().unwrap();

    assert_eq!(bytes[0], u8::from(ReadHoldingRegistersResponse::FUNCTION_CODE));
    assert_eq!(bytes[0], FunctionCode::ReadHoldingRegisters.code());
    assert_eq!(bytes[1] as usize, res.registers().len());
    assert_eq!(&bytes[2..], res.registers());
}

#[test]
fn sink_without_room_reports_overflow() {
    let res = Response::from(ReadHoldingRegistersResponse::new(vec![0; 10]).unwrap());

    let mut encoder = Encoder::with_limit(11);
    assert_eq!(encoder.write_type(&res), Err(EncodeError::Overflow));

    let mut encoder = Encoder::with_limit(12);
    assert_eq!(encoder.write_type(&res), Ok(()));
}

#[test]
fn responses_are_shareable_across_threads() {
    let res = Response::from(ReadHoldingRegistersResponse::from_values(&[1, 2, 3]).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let res = res.clone();
            std::thread::spawn(move || {
                let bytes = res.encode_to_bytes().unwrap();
                Response::decode_from_bytes(&bytes).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), res);
    }
}
