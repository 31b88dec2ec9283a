use crate::error::HashError;

pub mod io;

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| format!("{byte:02x}")).collect::<Vec<_>>().join("")
}

pub fn from_hex(text: &str) -> Result<Vec<u8>, HashError> {
    if let Some((index, character)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(HashError::InvalidHexCharacter { character, index })
    }
    if text.len() % 2 != 0 {
        return Err(HashError::InvalidHexLength(text.len()))
    }
    let bytes = text.as_bytes()
        .chunks_exact(2)
        .map(|pair| (nibble(pair[0]) << 4) | nibble(pair[1]))
        .collect();
    Ok(bytes)
}

// callers have already checked `digit` is an ascii hex digit
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

pub(crate) fn to_words(block: &[u8; 64]) -> [u32; 80] {
    let mut w: [u32; 80] = [0; 80];
    for (i, chunk) in block.chunks_exact(4).enumerate() {
        w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    w
}

pub(crate) fn from_words(words: &[u32; 5]) -> [u8; 20] {
    let mut arr: [u8; 20] = [0; 20];
    for (i, word) in words.iter().enumerate() {
        arr[i*4..(i+1)*4].copy_from_slice(&word.to_be_bytes());
    }
    arr
}
