//! Helpers for encoding LEB128 integers. Every encoder emits the shortest representation.
//!
//! <https://en.wikipedia.org/wiki/LEB128>

pub fn encode_u32(mut value: u32, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

pub fn encode_i32(value: i32, out: &mut Vec<u8>) {
    encode_i64(value.into(), out);
}

pub fn encode_i64(mut value: i64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        // arithmetic shift, so negative values converge to -1
        value >>= 7;

        let sign_bit_clear = byte & 0x40 == 0;
        if (value == 0 && sign_bit_clear) || (value == -1 && !sign_bit_clear) {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}
