use std::cmp::Ordering;
use std::fmt;

/// Maven-style version string with a total ordering.
///
/// The release part (before the first `-`) compares segment by segment with
/// missing trailing segments read as zero, so `5.13` and `5.13.0` are equal.
/// A qualified version (`2.0-beta9`) sorts below its bare release.
#[derive(Debug, Clone)]
pub struct Version {
    raw: String,
    release: Vec<Segment>,
    qualifier: Option<Vec<Segment>>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Number(u64),
    Text(String),
}

impl Version {
    pub fn parse(raw: &str) -> Self {
        let (release, qualifier) = match raw.split_once('-') {
            Some((release, qualifier)) => (release, Some(qualifier)),
            None => (raw, None),
        };

        Version {
            raw: raw.to_string(),
            release: segments(release),
            qualifier: qualifier.map(segments),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut buf = String::new();
    let mut numeric = false;

    for c in text.chars() {
        if matches!(c, '.' | '_' | '+' | '-') {
            flush_segment(&mut buf, numeric, &mut out);
            continue;
        }
        let is_digit = c.is_ascii_digit();
        if !buf.is_empty() && is_digit != numeric {
            flush_segment(&mut buf, numeric, &mut out);
        }
        numeric = is_digit;
        buf.push(c);
    }
    flush_segment(&mut buf, numeric, &mut out);

    out
}

fn flush_segment(buf: &mut String, numeric: bool, out: &mut Vec<Segment>) {
    if buf.is_empty() {
        return;
    }
    let segment = if numeric {
        // Digits only, so the parse can only fail on overflow.
        buf.parse()
            .map(Segment::Number)
            .unwrap_or_else(|_| Segment::Text(buf.clone()))
    } else {
        Segment::Text(buf.to_lowercase())
    };
    out.push(segment);
    buf.clear();
}

fn compare_padded(a: &[Segment], b: &[Segment]) -> Ordering {
    let zero = Segment::Number(0);
    for i in 0..a.len().max(b.len()) {
        let left = a.get(i).unwrap_or(&zero);
        let right = b.get(i).unwrap_or(&zero);
        match left.cmp(right) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match compare_padded(&self.release, &other.release) {
            Ordering::Equal => {}
            ord => return ord,
        }

        match (&self.qualifier, &other.qualifier) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

pub fn compare_versions(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}
