use serde::{Deserialize, Serialize};

use crate::impls::contour::Contour;

/// A set of contours: a polyline with one or more paths.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> crate::multi_contour::MultiContour for MultiContour<P> {
    type Contour = Contour<P>;

    fn contours(&self) -> impl Iterator<Item = &Self::Contour> {
        self.0.iter()
    }
}

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(value: Vec<Contour<P>>) -> Self {
        Self(value)
    }
}

impl<P> From<Vec<Vec<P>>> for MultiContour<P> {
    fn from(value: Vec<Vec<P>>) -> Self {
        Self(value.into_iter().map(Contour::new).collect())
    }
}

impl<P> From<Contour<P>> for MultiContour<P> {
    fn from(value: Contour<P>) -> Self {
        Self(vec![value])
    }
}
