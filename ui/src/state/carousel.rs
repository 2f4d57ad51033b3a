/// Wrap-around index state for the testimonial carousel.
///
/// Session-ephemeral: always starts at the first slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }
}
