/// Anything the engines can align: an indexable run of symbols with a known
/// length. Kept as a custom trait until std grows container traits.
pub trait Alignable {
    type Symbol;

    fn len(&self) -> usize;
    fn at(&self, pos: usize) -> &Self::Symbol;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T: Copy> Alignable for &'a [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        (self as &[T]).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        (self as &[T]).len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &T {
        &self[pos]
    }
}

impl<'a> Alignable for &'a str {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &u8 {
        &self.as_bytes()[pos]
    }
}
