use std::ops::Index;

/// Values captured by `:param` and named `*wildcard` segments of a matched route.
///
/// Entries are kept in path order, outermost segment first. Each name appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Captured name->value pairs.
    segments: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Params {
        Params {
            segments: Vec::new(),
        }
    }

    /// Records a captured value, replacing any earlier value under the same name.
    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        match self.segments.iter_mut().find(|(seg_name, _)| seg_name == name) {
            Some((_, val)) => value.clone_into(val),
            None => self.segments.push((name.to_owned(), value.to_owned())),
        }
    }

    /// Captures are recorded while unwinding the search, innermost first.
    pub(crate) fn finish(mut self) -> Params {
        self.segments.reverse();
        self
    }

    /// Check if there are any captured parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns number of captured parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Get captured parameter by name without type conversion.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.segments
            .iter()
            .find(|(seg_name, _)| seg_name == name)
            .map(|(_, val)| val.as_str())
    }

    /// Returns captured parameter by name.
    ///
    /// If keyed parameter is not available empty string is used as default value.
    pub fn query(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Return iterator to items in parameter container.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.segments.iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParamsIter<'a> {
    inner: std::slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for ParamsIter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        self.inner
            .next()
            .map(|(name, val)| (name.as_str(), val.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_> {}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = ParamsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Index<&'a str> for Params {
    type Output = str;

    fn index(&self, name: &'a str) -> &str {
        self.get(name)
            .expect("Value for parameter is not available")
    }
}

impl Index<usize> for Params {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.segments[idx].1
    }
}
