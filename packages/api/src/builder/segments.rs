//! Segment-appending methods

use refpath_core::Segment;

use super::core::PathBuilder;

impl PathBuilder<'_> {
    /// Descend into the member `name`
    ///
    /// A name equal to the configured wildcard marker acts as the wildcard.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment::Key(name.into()));
        self
    }

    /// Descend into position `index`
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(Segment::Index(index));
        self
    }

    /// Fan out over every current member
    #[must_use]
    pub fn each(mut self) -> Self {
        self.segments.push(Segment::Wildcard);
        self
    }

    #[must_use]
    pub fn segment(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    #[must_use]
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }
}
