// Base64 codec for data URIs.
//
// Hand-rolled so loading does not pull in a codec dependency. The decoder
// is deliberately permissive: bytes outside the alphabet (whitespace, `=`
// padding, quotes) are skipped rather than rejected, and trailing partial
// bits are dropped.

const INVALID: u8 = 0xFF;

const ENCODE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ENCODE_TABLE.len() {
        table[ENCODE_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const DECODE_TABLE: [u8; 256] = build_decode_table();

/// Decodes base64 text, skipping any byte outside the alphabet.
pub fn decode(input: &str) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * 3 / 4);
    let mut value: u32 = 0;
    let mut bits: i32 = -8;
    for &byte in input.as_bytes() {
        let code = DECODE_TABLE[byte as usize];
        if code == INVALID {
            continue;
        }
        value = (value << 6) | u32::from(code);
        bits += 6;
        if bits >= 0 {
            output.push((value >> bits) as u8);
            bits -= 8;
        }
    }
    output
}

/// Encodes bytes as standard padded base64.
pub fn encode(data: &[u8]) -> String {
    let mut output = String::with_capacity((data.len() + 2) / 3 * 4);
    for chunk in data.chunks(3) {
        let b0 = u32::from(chunk[0]);
        let b1 = u32::from(chunk.get(1).copied().unwrap_or(0));
        let b2 = u32::from(chunk.get(2).copied().unwrap_or(0));
        let group = (b0 << 16) | (b1 << 8) | b2;
        output.push(ENCODE_TABLE[(group >> 18) as usize & 63] as char);
        output.push(ENCODE_TABLE[(group >> 12) as usize & 63] as char);
        output.push(if chunk.len() > 1 {
            ENCODE_TABLE[(group >> 6) as usize & 63] as char
        } else {
            '='
        });
        output.push(if chunk.len() > 2 {
            ENCODE_TABLE[group as usize & 63] as char
        } else {
            '='
        });
    }
    output
}
