pub fn index_of_string<S: AsRef<str>>(arr: &[S], s: &str) -> Option<usize> {
    arr.iter().position(|x| x.as_ref() == s)
}

pub fn contains_string<S: AsRef<str>>(arr: &[S], s: &str) -> bool {
    index_of_string(arr, s).is_some()
}

pub fn char_in(ch: char, chs: &[char]) -> bool {
    chs.contains(&ch)
}

/// Byte offset of the first char of `s` found in `chs`.
pub fn index_of_char(s: &str, chs: &[char]) -> Option<usize> {
    s.find(chs)
}

/// Text before the first delimiter, or all of `s` when there is none.
pub fn cut_left<'a>(s: &'a str, chs: &[char]) -> &'a str {
    s.split_once(chs).map_or(s, |(left, _)| left)
}

/// Text after the first delimiter, or all of `s` when there is none.
pub fn cut_right<'a>(s: &'a str, chs: &[char]) -> &'a str {
    s.split_once(chs).map_or(s, |(_, right)| right)
}

pub fn cut_half<'a>(s: &'a str, chs: &[char]) -> (&'a str, &'a str) {
    s.split_once(chs).unwrap_or((s, ""))
}
