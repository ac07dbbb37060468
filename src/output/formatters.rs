/// Renders frames as uppercase hex pairs, space separated.
pub struct HexFormatter;

impl HexFormatter {
    pub fn format(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_pairs_uppercase() {
        assert_eq!(HexFormatter.format(&[0x01, 0xAB]), "01 AB");
        assert_eq!(
            HexFormatter.format(&[0x01, 0x03, 0x00, 0x00, 0x00, 0x02, 0xC4, 0x0B]),
            "01 03 00 00 00 02 C4 0B"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(HexFormatter.format(&[]), "");
    }
}
