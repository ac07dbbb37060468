use log::debug;

use crate::modbus::RequestParams;
use crate::utils::error::RtuError;

/// Parses one line of six hex byte tokens into request parameters.
///
/// Tokens may carry an optional `0x`/`0X` prefix and are case insensitive.
/// They map onto the wire layout: address, function code, then the high and
/// low bytes of the starting register and of the register count.
pub fn parse_request_line(line: &str) -> Result<RequestParams, RtuError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(RtuError::InvalidInput(format!(
            "expected 6 hex tokens, got {}",
            tokens.len()
        )));
    }

    let mut bytes = [0u32; 6];
    for (i, token) in tokens.iter().enumerate() {
        bytes[i] = parse_hex_byte(token)?;
    }

    let params = RequestParams::new(
        bytes[0],
        bytes[1],
        bytes[2] << 8 | bytes[3],
        bytes[4] << 8 | bytes[5],
    )?;
    debug!("Parsed request parameters: {:?}", params);
    Ok(params)
}

fn parse_hex_byte(token: &str) -> Result<u32, RtuError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| RtuError::InvalidInput(format!("not a hex number: {}", token)))?;

    if value > 0xFF {
        return Err(RtuError::ParameterOutOfRange {
            field: "hex byte token",
            value,
            range: 0..=255,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_tokens() {
        let params = parse_request_line("0x01 0x03 0x00 0x00 0x00 0x02").unwrap();
        assert_eq!(params.slave_address, 1);
        assert_eq!(params.function_code, 3);
        assert_eq!(params.starting_register, 0);
        assert_eq!(params.register_count, 2);
    }

    #[test]
    fn test_parse_mixed_and_bare_tokens() {
        let params = parse_request_line("11 0X03 00 f4 0x00 16").unwrap();
        assert_eq!(params.slave_address, 0x11);
        assert_eq!(params.starting_register, 0x00F4);
        assert_eq!(params.register_count, 0x0016);
    }

    #[test]
    fn test_high_low_byte_combination() {
        let params = parse_request_line("01 03 12 34 00 7D").unwrap();
        assert_eq!(params.starting_register, 0x1234);
        assert_eq!(params.register_count, 0x007D);
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        assert!(matches!(
            parse_request_line("01 03 00 00 00"),
            Err(RtuError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_request_line("01 03 00 00 00 02 FF"),
            Err(RtuError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_request_line(""),
            Err(RtuError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_hex_token() {
        assert!(matches!(
            parse_request_line("01 03 zz 00 00 02"),
            Err(RtuError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_byte_token() {
        assert!(matches!(
            parse_request_line("0x100 03 00 00 00 02"),
            Err(RtuError::ParameterOutOfRange { value: 256, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_register_count() {
        assert!(matches!(
            parse_request_line("01 03 00 00 00 00"),
            Err(RtuError::ParameterOutOfRange {
                field: "register count",
                ..
            })
        ));
    }
}
