use triform::{
    convert_enum, convert_fields, from_bytes, from_json_string, header, text::concat, to_bytes,
    to_csv, to_json_string, to_ssv, Binary, Delimited, Delimiter, Error,
};

#[derive(Default, Debug, PartialEq)]
struct Attitude {
    roll: f32,
    pitch: f32,
    yaw: f32,
}

convert_fields!(Attitude { roll, pitch, yaw });

#[derive(Default, Debug, PartialEq)]
struct Telemetry {
    flags: u8,
    counter: i16,
    elapsed: i32,
    attitude: Attitude,
    gyro: Vec<i16>,
}

convert_fields!(Telemetry {
    flags,
    counter,
    elapsed,
    attitude,
    gyro,
});

#[derive(Clone, Copy, Debug, PartialEq, Default)]
enum Mode {
    #[default]
    Idle = 0,
    Run = 1,
    Safe = 2,
}

convert_enum!(Mode as u8 { Idle = 0, Run = 1, Safe = 2 });

fn sample() -> Telemetry {
    Telemetry {
        flags: 1,
        counter: 2,
        elapsed: 3,
        attitude: Attitude {
            roll: 0.5,
            pitch: -0.25,
            yaw: 0.0,
        },
        gyro: vec![10, -20, 30],
    }
}

#[test]
fn test_two_field_aggregate_all_forms() {
    #[derive(Default, Debug, PartialEq)]
    struct Pair {
        a: i8,
        b: i16,
    }
    convert_fields!(Pair { a, b });

    let pair = Pair { a: 1, b: 2 };
    assert_eq!(to_ssv(&pair).unwrap(), "1 2");
    assert_eq!(header(&pair, Delimiter::Space).unwrap(), "a b");
    assert_eq!(pair.size(), 3);
    assert_eq!(to_bytes(&pair).unwrap(), [0x01, 0x00, 0x02]);

    let json = to_json_string(&pair).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["a"], 1);
    assert_eq!(doc["b"], 2);
}

#[test]
fn test_scalar_wire_bytes_are_big_endian() {
    assert_eq!(to_bytes(&3i32).unwrap(), [0x00, 0x00, 0x00, 0x03]);
    assert_eq!(from_bytes::<i32>(&[0x00, 0x00, 0x00, 0x05]).unwrap(), 5);
}

#[test]
fn test_short_source_is_an_error() {
    let err = from_bytes::<i32>(&[0x00, 0x00, 0x05]).unwrap_err();
    assert!(matches!(
        err,
        Error::BufferTooSmall {
            needed: 4,
            available: 3
        }
    ));
}

#[test]
fn test_header_and_values_zip_positionally() {
    let t = sample();
    for delimiter in [Delimiter::Space, Delimiter::Comma, Delimiter::Tab] {
        let values = t.to_delimited(delimiter, false).unwrap();
        let labels = t.make_header("", delimiter, false).unwrap();
        assert_eq!(
            values.split(delimiter.as_str()).count(),
            labels.split(delimiter.as_str()).count(),
            "token streams must zip for {:?}",
            delimiter
        );
    }
}

#[test]
fn test_nested_and_indexed_header_labels() {
    let t = sample();
    assert_eq!(
        t.ssv_header(false).unwrap(),
        "flags counter elapsed attitude.roll attitude.pitch attitude.yaw \
         gyro[0] gyro[1] gyro[2]"
    );
}

#[test]
fn test_binary_layout_is_declaration_order() {
    let t = sample();
    // u8 + i16 + i32 + 3 * f32 + 3 * i16
    assert_eq!(t.size(), 1 + 2 + 4 + 12 + 6);

    let bytes = to_bytes(&t).unwrap();
    assert_eq!(bytes.len(), t.size());
    assert_eq!(bytes[0], 0x01);
    assert_eq!(&bytes[1..3], &[0x00, 0x02]);
    assert_eq!(&bytes[3..7], &[0x00, 0x00, 0x00, 0x03]);
    assert_eq!(&bytes[7..11], &0.5f32.to_be_bytes());
}

#[test]
fn test_binary_round_trip_with_presized_sequence() {
    let t = sample();
    let bytes = to_bytes(&t).unwrap();

    let mut back = Telemetry {
        gyro: vec![0; 3],
        ..Telemetry::default()
    };
    let read = back.read_at(&bytes, 0).unwrap();
    assert_eq!(read, bytes.len());
    assert_eq!(back, t);
}

#[test]
fn test_json_round_trip() {
    let t = sample();
    let text = to_json_string(&t).unwrap();
    let back: Telemetry = from_json_string(&text).unwrap();
    assert_eq!(back, t);
}

#[test]
fn test_json_is_pretty_printed_with_four_spaces() {
    let t = sample();
    let text = to_json_string(&t).unwrap();
    assert!(text.starts_with("{\n    \"flags\": 1,"));
}

#[test]
fn test_json_missing_keys_fall_back_to_defaults() {
    let back: Telemetry = from_json_string(r#"{ "counter": 42 }"#).unwrap();
    assert_eq!(back.counter, 42);
    assert_eq!(back.flags, Telemetry::default().flags);
    assert_eq!(back.attitude, Attitude::default());
    assert!(back.gyro.is_empty());
}

#[test]
fn test_json_malformed_text_propagates() {
    let err = from_json_string::<Telemetry>("{ nope").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_enum_in_every_form() {
    assert_eq!(to_ssv(&Mode::Run).unwrap(), "1");
    assert_eq!(to_bytes(&Mode::Safe).unwrap(), [0x02]);
    assert_eq!(from_bytes::<Mode>(&[0x01]).unwrap(), Mode::Run);
    // Unlisted wire value decodes to the first listed variant.
    assert_eq!(from_bytes::<Mode>(&[0x7F]).unwrap(), Mode::Idle);
}

#[test]
fn test_string_fields() {
    #[derive(Default, Debug, PartialEq)]
    struct Tagged {
        tag: String,
        value: u8,
    }
    convert_fields!(Tagged { tag, value });

    let tagged = Tagged {
        tag: "abc".to_string(),
        value: 7,
    };
    assert_eq!(to_csv(&tagged).unwrap(), "abc,7");
    assert_eq!(tagged.size(), 4);
    assert_eq!(to_bytes(&tagged).unwrap(), b"abc\x07");

    let mut back = Tagged {
        tag: String::from("xxx"),
        value: 0,
    };
    back.read_at(b"abc\x07", 0).unwrap();
    assert_eq!(back, tagged);
}

#[test]
fn test_trailing_delimiter_lets_records_concatenate() {
    let left = sample().to_csv(true).unwrap();
    let right = sample().to_csv(false).unwrap();
    let joined = format!("{}{}", left, right);
    let expect = concat(
        &sample().to_csv(false).unwrap(),
        &right,
        Delimiter::Comma,
    );
    assert_eq!(joined, expect);
}

#[test]
fn test_hand_written_impl_surfaces_unsupported() {
    struct Opaque {
        visible: u8,
    }

    impl Delimited for Opaque {
        fn to_delimited(
            &self,
            delimiter: Delimiter,
            trailing: bool,
        ) -> triform::Result<String> {
            self.visible.to_delimited(delimiter, trailing)
        }

        fn make_header(
            &self,
            _name: &str,
            _delimiter: Delimiter,
            _trailing: bool,
        ) -> triform::Result<String> {
            Err(Error::unsupported("Opaque header"))
        }
    }

    let opaque = Opaque { visible: 1 };
    assert_eq!(opaque.to_ssv(false).unwrap(), "1");
    let err = opaque.ssv_header(false).unwrap_err();
    assert!(matches!(err, Error::Unsupported { role: "Opaque header" }));
}

#[test]
fn test_growing_buffer_overload() {
    let t = sample();
    let mut buf: Vec<u8> = Vec::new();
    let written = t.write_grow(&mut buf, 3).unwrap();
    assert_eq!(written, t.size());
    assert_eq!(buf.len(), t.size() + 3);
    assert_eq!(&buf[..3], &[0, 0, 0]);
}
