//! The key–value-list-with-message grammar shared by commits and tags.

/// An ordered, duplicate-preserving list of header pairs followed by a message body.
///
/// Headers are stored as a flat `Vec` rather than a map so that repeated keys (e.g. a
/// commit's several `parent` headers) keep their insertion order without the
/// single-value/list-of-values promotion dance the original parser needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kvlm {
    headers: Vec<(Vec<u8>, Vec<u8>)>,
    pub message: Vec<u8>,
}

impl Kvlm {
    pub fn new(message: Vec<u8>) -> Self {
        Kvlm {
            headers: Vec::new(),
            message,
        }
    }

    /// Appends a header, preserving any prior values for the same key.
    pub fn push(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.headers.push((key.into(), value.into()));
    }

    /// All values recorded for `key`, in insertion order.
    pub fn get<'a>(&'a self, key: &'a [u8]) -> impl Iterator<Item = &'a [u8]> {
        self.headers
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// The first value recorded for `key`, if any.
    pub fn get_one(&self, key: &[u8]) -> Option<&[u8]> {
        self.get(key).next()
    }

    /// Parses a KVLM document.
    pub fn parse(data: &[u8]) -> Kvlm {
        let mut headers = Vec::new();
        let mut pos = 0usize;

        loop {
            let spc = find(data, pos, b' ');
            let nl = find(data, pos, b'\n');

            let reached_message = match (spc, nl) {
                (Some(s), Some(n)) => n < s,
                (None, _) => true,
                (Some(_), None) => true,
            };

            if reached_message {
                let message = match nl {
                    Some(n) if n + 1 <= data.len() => data[n + 1..].to_vec(),
                    _ => Vec::new(),
                };
                return Kvlm { headers, message };
            }

            let s = spc.expect("spc is Some on the non-message branch");
            let key = data[pos..s].to_vec();

            let mut end = nl.expect("nl is Some on the non-message branch");
            while end + 1 < data.len() && data[end + 1] == b' ' {
                match find(data, end + 1, b'\n') {
                    Some(next) => end = next,
                    None => {
                        end = data.len();
                        break;
                    }
                }
            }

            let value = unescape_continuations(&data[s + 1..end.min(data.len())]);
            headers.push((key, value));

            pos = end + 1;
            if pos > data.len() {
                return Kvlm {
                    headers,
                    message: Vec::new(),
                };
            }
        }
    }

    /// Serializes back to the on-disk KVLM form.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (key, value) in &self.headers {
            out.extend_from_slice(key);
            out.push(b' ');
            out.extend_from_slice(&escape_continuations(value));
            out.push(b'\n');
        }
        out.push(b'\n');
        out.extend_from_slice(&self.message);
        out
    }
}

fn find(data: &[u8], start: usize, needle: u8) -> Option<usize> {
    data[start..].iter().position(|&b| b == needle).map(|i| i + start)
}

/// Replaces every `"\n "` with `"\n"` (reverses [`escape_continuations`]).
fn unescape_continuations(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'\n' && i + 1 < raw.len() && raw[i + 1] == b' ' {
            out.push(b'\n');
            i += 2;
        } else {
            out.push(raw[i]);
            i += 1;
        }
    }
    out
}

/// Replaces every `"\n"` with `"\n "` so embedded newlines don't look like header breaks.
fn escape_continuations(value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len());
    for &b in value {
        out.push(b);
        if b == b'\n' {
            out.push(b' ');
        }
    }
    out
}
