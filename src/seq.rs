use crate::input::Iterable;
use crate::op::{Boxed, Filter, Inspect, Map, Skip, Take};
use itertools::Itertools;
use std::fmt::Display;

/// 惰性序列。
///
/// 包装一个可重复迭代的数据源，链式操作（`map`、`filter`、`take`、`skip`）只构造新的序列而不拉取任何元素，
/// 终结操作（`first`、`count`、`reduce`等）才会从头开始一次新的迭代。
///
/// ```
/// use lazyseq::wrap;
///
/// let seq = wrap(vec![1, 2, 3, 4, 5, 6]).filter(|i| i % 2 == 0).map(|i| i * 10);
/// assert_eq!(seq.to_vec(), vec![20, 40, 60]);
/// assert_eq!(seq.reduce(|acc, i, _| acc + i), Some(120));
/// ```
///
/// 链式操作会移动当前序列；若之后还要继续使用它，先调用[`Seq::by_ref`]（或`clone`）：
///
/// ```
/// use lazyseq::wrap;
///
/// let base = wrap(vec![1, 2, 3, 4]);
/// let head = base.by_ref().take(2);
/// assert_eq!(head.to_vec(), vec![1, 2]);
/// assert_eq!(base.to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Seq<S> {
    source: S,
}

impl<S> Seq<S> {
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: Iterable> Seq<S> {
    /// 只接受可迭代的数据源。
    ///
    /// ```compile_fail
    /// use lazyseq::Seq;
    ///
    /// let seq = Seq::new(42u8);
    /// ```
    pub fn new(source: S) -> Seq<S> {
        Seq { source }
    }

    /// 创建一个新的游标，每次调用都从数据源的起点重新开始，游标之间互不影响。
    pub fn iter(&self) -> S::Cursor<'_> {
        self.source.cursor()
    }

    /// 仅拉取一个元素。
    pub fn first(&self) -> Option<S::Item> {
        self.iter().next()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// 统计满足谓词的元素数量。
    pub fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&S::Item) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// 不带初始值的左折叠。
    ///
    /// 第一个元素直接作为初始累加值，不经过`reducer`；从第二个元素开始调用`reducer(acc, item, index)`，
    /// 首次调用的`index`为1，即第二个元素的位置。序列为空时返回`None`且不调用`reducer`。
    ///
    /// ```
    /// use lazyseq::wrap;
    ///
    /// assert_eq!(wrap([5, 10, 7, 2, 3]).reduce(|a, b, _| a + b), Some(27));
    /// assert_eq!(wrap(Vec::<i32>::new()).reduce(|a, b, _| a + b), None);
    /// ```
    pub fn reduce<F>(&self, mut reducer: F) -> Option<S::Item>
    where
        F: FnMut(S::Item, S::Item, usize) -> S::Item,
    {
        let mut cursor = self.iter();
        let first = cursor.next()?;
        Some(cursor.zip(1..).fold(first, |acc, (item, index)| reducer(acc, item, index)))
    }

    /// 带初始值的左折叠，对每个元素调用`reducer(acc, item, index)`，`index`从0开始。
    pub fn fold<B, F>(&self, init: B, mut reducer: F) -> B
    where
        F: FnMut(B, S::Item, usize) -> B,
    {
        self.iter().enumerate().fold(init, |acc, (index, item)| reducer(acc, item, index))
    }

    /// 可失败的[`Seq::reduce`]，遇到第一个错误时立即返回该错误，剩余元素不再拉取。
    pub fn try_reduce<E, F>(&self, mut reducer: F) -> Result<Option<S::Item>, E>
    where
        F: FnMut(S::Item, S::Item, usize) -> Result<S::Item, E>,
    {
        let mut cursor = self.iter();
        let Some(first) = cursor.next() else {
            return Ok(None);
        };
        cursor.zip(1..).try_fold(first, |acc, (item, index)| reducer(acc, item, index)).map(Some)
    }

    /// 可失败的[`Seq::fold`]，遇到第一个错误时立即返回该错误，剩余元素不再拉取。
    pub fn try_fold<B, E, F>(&self, init: B, mut reducer: F) -> Result<B, E>
    where
        F: FnMut(B, S::Item, usize) -> Result<B, E>,
    {
        self.iter().enumerate().try_fold(init, |acc, (index, item)| reducer(acc, item, index))
    }

    pub fn to_vec(&self) -> Vec<S::Item> {
        self.iter().collect()
    }

    pub fn collect<C: FromIterator<S::Item>>(&self) -> C {
        self.iter().collect()
    }

    /// 以分隔符拼接所有元素。
    pub fn join(&self, sep: &str) -> String
    where
        S::Item: Display,
    {
        self.iter().join(sep)
    }

    pub fn take(self, limit: usize) -> Seq<Take<S>> {
        Seq::new(Take::new(self, limit))
    }

    pub fn skip(self, offset: usize) -> Seq<Skip<S>> {
        Seq::new(Skip::new(self, offset))
    }

    pub fn filter<P>(self, predicate: P) -> Seq<Filter<S, P>>
    where
        P: Fn(&S::Item) -> bool,
    {
        Seq::new(Filter::new(self, predicate))
    }

    pub fn map<B, F>(self, transform: F) -> Seq<Map<S, F>>
    where
        F: Fn(S::Item) -> B,
    {
        Seq::new(Map::new(self, transform))
    }

    pub fn inspect<F>(self, observer: F) -> Seq<Inspect<S, F>>
    where
        F: Fn(&S::Item),
    {
        Seq::new(Inspect::new(self, observer))
    }

    /// 借用当前序列构造新序列，后续的链式操作不会移动当前序列。
    pub fn by_ref(&self) -> Seq<&S> {
        Seq::new(&self.source)
    }

    pub fn boxed<'a>(self) -> Seq<Boxed<'a, S::Item>>
    where
        S: 'a,
    {
        Seq::new(Boxed::new(self))
    }
}

impl<S: Iterable> Iterable for Seq<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }
}

impl<'a, S: Iterable> IntoIterator for &'a Seq<S> {
    type Item = S::Item;
    type IntoIter = S::Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
