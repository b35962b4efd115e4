/// Destination of the encoder traversal.
///
/// Every piece of output is a `&str`, so string sinks stay valid UTF-8 and the
/// measuring sink counts encoded bytes rather than characters.
pub(crate) trait Sink {
    fn put(&mut self, s: &str);
}

/// Counts bytes without storing them
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Measure(pub(crate) usize);

impl Sink for Measure {
    #[inline]
    fn put(&mut self, s: &str) {
        self.0 += s.len();
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn put(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }
}

impl Sink for String {
    #[inline]
    fn put(&mut self, s: &str) {
        self.push_str(s);
    }
}
