pub(crate) mod json;

use std::collections::VecDeque;
use std::fmt;
use std::iter::Cloned;
use std::marker::PhantomData;
use std::ops::{Range, RangeFrom, RangeInclusive};
use std::str::Chars;

/// 可重复迭代的数据源。
///
/// 每次调用[`Iterable::cursor`]都会得到一个全新的、相互独立的游标，游标之间不共享任何迭代位置。
/// 基础数据源（集合、字符串、区间、闭包）和所有组合操作都实现此特征。
pub trait Iterable {
    /// 游标产出的元素类型。
    type Item;

    /// 游标类型，借用数据源。
    type Cursor<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// 创建一个从头开始的新游标。
    fn cursor(&self) -> Self::Cursor<'_>;
}

impl<S: Iterable + ?Sized> Iterable for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<T: Clone> Iterable for [T] {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone, const N: usize> Iterable for [T; N] {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Iterable for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Iterable for VecDeque<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::collections::vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

/// 字符串按字符迭代。
impl Iterable for str {
    type Item = char;
    type Cursor<'a> = Chars<'a>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.chars()
    }
}

impl Iterable for String {
    type Item = char;
    type Cursor<'a> = Chars<'a>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.chars()
    }
}

impl<A> Iterable for Range<A>
where
    A: Clone,
    Range<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor<'a>
        = Range<A>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.clone()
    }
}

impl<A> Iterable for RangeInclusive<A>
where
    A: Clone,
    RangeInclusive<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor<'a>
        = RangeInclusive<A>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.clone()
    }
}

/// 无限区间，需配合`take`等操作使用。
impl<A> Iterable for RangeFrom<A>
where
    A: Clone,
    RangeFrom<A>: Iterator<Item = A>,
{
    type Item = A;
    type Cursor<'a>
        = RangeFrom<A>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.clone()
    }
}

/// 由闭包构造的自定义数据源，每次迭代调用一次闭包获取新的迭代器。
pub struct FromFn<F, I> {
    f: F,
    _iter: PhantomData<fn() -> I>,
}

impl<F: Clone, I> Clone for FromFn<F, I> {
    fn clone(&self) -> Self {
        FromFn { f: self.f.clone(), _iter: PhantomData }
    }
}

impl<F, I> Iterable for FromFn<F, I>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = I::IntoIter
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.f)().into_iter()
    }
}

impl<F, I> fmt::Debug for FromFn<F, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

/// 以闭包作为数据源。
///
/// ```
/// use lazyseq::{from_fn, wrap};
///
/// let seq = wrap(from_fn(|| (1..=3).map(|i| i * 10)));
/// assert_eq!(seq.to_vec(), vec![10, 20, 30]);
/// assert_eq!(seq.to_vec(), vec![10, 20, 30]);
/// ```
pub fn from_fn<F, I>(f: F) -> FromFn<F, I>
where
    F: Fn() -> I,
    I: IntoIterator,
{
    FromFn { f, _iter: PhantomData }
}
