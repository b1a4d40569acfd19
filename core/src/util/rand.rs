use uuid::Uuid;

const LETTERS: &[u8; 64] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789jy";
const LETTER_IDX_BITS: u32 = 6;
const LETTER_IDX_MASK: u64 = (1 << LETTER_IDX_BITS) - 1;
/// The low 62 bits of a v4 UUID are random; the variant bits sit above them.
const LETTERS_PER_DRAW: usize = 10;

fn draw() -> u64 {
    Uuid::new_v4().as_u128() as u64
}

/// Random alphanumeric string of `n` characters.
pub fn rand_string(n: usize) -> String {
    let mut out = String::with_capacity(n);
    let mut cache = draw();
    let mut remain = LETTERS_PER_DRAW;
    for _ in 0..n {
        if remain == 0 {
            cache = draw();
            remain = LETTERS_PER_DRAW;
        }
        out.push(LETTERS[(cache & LETTER_IDX_MASK) as usize] as char);
        cache >>= LETTER_IDX_BITS;
        remain -= 1;
    }
    out
}
