use strata_io::{Sink, Source, Transformation};

/// Returns every endpoint unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl Transformation for Identity {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        sink
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        source
    }
}
