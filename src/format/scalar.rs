//! Byte-level scalar reads.

use crate::error::{Result, ZoomrError};

use super::layout::FieldSpec;

/// Borrow `width` bytes at `offset`, failing if the file is too short.
pub fn slice(data: &[u8], offset: usize, width: usize) -> Result<&[u8]> {
    data.get(offset..offset + width).ok_or_else(|| {
        ZoomrError::format(format!(
            "Field at offset {:#x} (width {}) lies beyond end of data ({} bytes)",
            offset,
            width,
            data.len()
        ))
    })
}

/// Decode a signed little-endian integer of width 1 or 4.
pub fn decode_int(bytes: &[u8]) -> Result<i32> {
    match *bytes {
        [b] => Ok(b as i8 as i32),
        [b0, b1, b2, b3] => Ok(i32::from_le_bytes([b0, b1, b2, b3])),
        _ => Err(ZoomrError::format(format!(
            "Unsupported integer width: {} bytes",
            bytes.len()
        ))),
    }
}

/// Characters up to (not including) the first NUL byte.
///
/// Bytes are mapped one-to-one onto chars, so non-ASCII bytes survive as
/// Latin-1 rather than failing the whole decode.
pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// State of one bit of a mask word.
pub fn bit(mask: i32, position: u32) -> bool {
    position < 32 && (mask >> position) & 1 == 1
}

/// Read the integer item at `index` of a field.
pub fn read_int(data: &[u8], field: &FieldSpec, index: usize) -> Result<i32> {
    decode_int(slice(data, field.address(index), field.item_size)?)
}

/// Read `width` bytes of the text item at `index` of a field.
pub fn read_ascii(data: &[u8], field: &FieldSpec, index: usize, width: usize) -> Result<String> {
    Ok(decode_ascii(slice(data, field.address(index), width)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::layout::Encoding;

    #[test]
    fn test_decode_int_widths() {
        assert_eq!(decode_int(&[0x2a]).unwrap(), 42);
        assert_eq!(decode_int(&[0xff]).unwrap(), -1);
        assert_eq!(decode_int(&[0x01, 0x02, 0x00, 0x00]).unwrap(), 0x0201);
        assert_eq!(decode_int(&[0xfe, 0xff, 0xff, 0xff]).unwrap(), -2);
    }

    #[test]
    fn test_decode_int_rejects_other_widths() {
        for width in [0usize, 2, 3, 5, 8] {
            let err = decode_int(&vec![0u8; width]).unwrap_err();
            assert_eq!(err.error_code(), "FORMAT_ERROR");
        }
    }

    #[test]
    fn test_decode_ascii_stops_at_nul() {
        assert_eq!(decode_ascii(b"MASTR001WAV\0junk"), "MASTR001WAV");
        assert_eq!(decode_ascii(b"\0ABC"), "");
        assert_eq!(decode_ascii(&[0u8; 12]), "");
        assert_eq!(decode_ascii(b"NOTERM"), "NOTERM");
    }

    #[test]
    fn test_bit_positions() {
        let mask = 0b1000_0000_0000_0101;
        assert!(bit(mask, 0));
        assert!(!bit(mask, 1));
        assert!(bit(mask, 2));
        assert!(bit(mask, 15));
        assert!(!bit(mask, 40));
    }

    #[test]
    fn test_read_past_end_is_format_error() {
        let field = FieldSpec::single(8, 4, Encoding::SignedInt);
        let err = read_int(&[0u8; 10], &field, 0).unwrap_err();
        assert!(err.to_string().contains("beyond end of data"));
    }
}
