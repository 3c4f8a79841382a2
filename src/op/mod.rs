mod slice;

pub use slice::{Skip, Take};

use crate::input::Iterable;
use crate::seq::Seq;
use std::fmt;

/// 对父序列的每个元素应用转换函数，元素数量和顺序不变。
#[derive(Clone)]
pub struct Map<S, F> {
    parent: Seq<S>,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(parent: Seq<S>, transform: F) -> Map<S, F> {
        Map { parent, transform }
    }
}

impl<S, F, B> Iterable for Map<S, F>
where
    S: Iterable,
    F: Fn(S::Item) -> B,
{
    type Item = B;
    type Cursor<'a>
        = std::iter::Map<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.parent.iter().map(&self.transform)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("parent", &self.parent).finish_non_exhaustive()
    }
}

/// 仅保留满足谓词的元素，不满足的元素会被拉取后丢弃。
#[derive(Clone)]
pub struct Filter<S, P> {
    parent: Seq<S>,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(parent: Seq<S>, predicate: P) -> Filter<S, P> {
        Filter { parent, predicate }
    }
}

impl<S, P> Iterable for Filter<S, P>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Filter<S::Cursor<'a>, &'a P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.parent.iter().filter(&self.predicate)
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("parent", &self.parent).finish_non_exhaustive()
    }
}

/// 每个元素被拉取时调用一次观察函数，元素原样传递。
#[derive(Clone)]
pub struct Inspect<S, F> {
    parent: Seq<S>,
    observer: F,
}

impl<S, F> Inspect<S, F> {
    pub(crate) fn new(parent: Seq<S>, observer: F) -> Inspect<S, F> {
        Inspect { parent, observer }
    }
}

impl<S, F> Iterable for Inspect<S, F>
where
    S: Iterable,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    type Cursor<'a>
        = std::iter::Inspect<S::Cursor<'a>, &'a F>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.parent.iter().inspect(&self.observer)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Inspect<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect").field("parent", &self.parent).finish_non_exhaustive()
    }
}

/// 擦除具体类型的序列，游标为`Box<dyn Iterator>`，用于在运行时逐步拼接操作。
pub struct Boxed<'a, T> {
    source: Box<dyn DynIterable<T> + 'a>,
}

impl<'a, T> Boxed<'a, T> {
    pub(crate) fn new<S>(parent: Seq<S>) -> Boxed<'a, T>
    where
        S: Iterable<Item = T> + 'a,
    {
        Boxed { source: Box::new(parent) }
    }
}

impl<T> Iterable for Boxed<'_, T> {
    type Item = T;
    type Cursor<'c>
        = Box<dyn Iterator<Item = T> + 'c>
    where
        Self: 'c;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.source.dyn_cursor()
    }
}

impl<T> fmt::Debug for Boxed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Boxed").finish_non_exhaustive()
    }
}

trait DynIterable<T> {
    fn dyn_cursor(&self) -> Box<dyn Iterator<Item = T> + '_>;
}

impl<S: Iterable> DynIterable<S::Item> for S {
    fn dyn_cursor(&self) -> Box<dyn Iterator<Item = S::Item> + '_> {
        Box::new(self.cursor())
    }
}
