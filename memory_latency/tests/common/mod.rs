/// `<digits><whitespace><digits>[.<digits>]`
pub fn parse_line(line: &str) -> Option<(usize, f64)> {
    let mut fields = line.split_whitespace();
    let size = fields.next()?;
    let latency = fields.next()?;
    if fields.next().is_some() || !size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (int, frac) = latency.split_once('.').unwrap_or((latency, "0"));
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(int) || !digits(frac) {
        return None;
    }
    Some((size.parse().ok()?, latency.parse().ok()?))
}
