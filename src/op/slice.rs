use crate::input::Iterable;
use crate::seq::Seq;

/// 最多产出父序列的前`limit`个元素，之后不再从父序列拉取。
#[derive(Debug, Clone)]
pub struct Take<S> {
    parent: Seq<S>,
    limit: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(parent: Seq<S>, limit: usize) -> Take<S> {
        Take { parent, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<S: Iterable> Iterable for Take<S> {
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Take<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.parent.iter().take(self.limit)
    }
}

/// 首次拉取时先丢弃父序列的前`offset`个元素（父序列不足时不报错），之后原样产出剩余元素。
#[derive(Debug, Clone)]
pub struct Skip<S> {
    parent: Seq<S>,
    offset: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(parent: Seq<S>, offset: usize) -> Skip<S> {
        Skip { parent, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<S: Iterable> Iterable for Skip<S> {
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Skip<S::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.parent.iter().skip(self.offset)
    }
}
