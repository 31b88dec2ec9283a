use crate::sha::Variant;
use crate::util::to_words;

pub const H0: u32 = 0x67452301;
pub const H1: u32 = 0xEFCDAB89;
pub const H2: u32 = 0x98BADCFE;
pub const H3: u32 = 0x10325476;
pub const H4: u32 = 0xC3D2E1F0;

pub const INITIAL_REGISTERS: [u32; 5] = [H0, H1, H2, H3, H4];

/// Folds one 64-byte block into `registers`.
pub fn compress<V: Variant>(registers: &mut [u32; 5], block: &[u8; 64]) {
    let mut w: [u32; 80] = to_words(block);

    for i in 16..80 {
        w[i] = (w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16]).rotate_left(V::SCHEDULE_ROTATION);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *registers;

    for (i, &word) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => ((b & c) | ((!b) & d), 0x5A827999),
            20..=39 => (b ^ c ^ d, 0x6ED9EBA1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8F1BBCDC),
            _ => (b ^ c ^ d, 0xCA62C1D6),
        };
        let temp = a.rotate_left(5)
                         .wrapping_add(f)
                         .wrapping_add(e)
                         .wrapping_add(k)
                         .wrapping_add(word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (register, value) in registers.iter_mut().zip([a, b, c, d, e]) {
        *register = register.wrapping_add(value);
    }
}
