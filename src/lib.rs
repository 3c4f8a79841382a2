//! 可组合的惰性序列。
//!
//! 用[`wrap`]包装任意可重复迭代的数据源，链式调用`map`、`filter`、`take`、`skip`构造新的惰性序列，
//! 直到调用`first`、`count`、`reduce`等终结操作时才真正拉取元素。
//!
//! ```
//! use lazyseq::wrap;
//!
//! let seq = wrap(1..).filter(|i| i % 3 == 0).map(|i| i * i).take(3);
//! assert_eq!(seq.to_vec(), vec![9, 36, 81]);
//! assert_eq!(seq.count(), 3);
//! ```

mod err;
mod input;
mod op;
mod seq;

pub use err::SeqErr;
pub use input::json::{JsonCursor, JsonSource};
pub use input::{FromFn, Iterable, from_fn};
pub use op::{Boxed, Filter, Inspect, Map, Skip, Take};
pub use seq::Seq;

pub type SeqRes<T> = Result<T, SeqErr>;

/// 包装数据源为惰性序列，等价于[`Seq::new`]。
pub fn wrap<S: Iterable>(source: S) -> Seq<S> {
    Seq::new(source)
}

/// 包装动态JSON值为惰性序列，仅数组和字符串可迭代，其他类型返回[`SeqErr::NotIterable`]。
///
/// ```
/// use lazyseq::{SeqErr, wrap_json};
/// use serde_json::json;
///
/// assert_eq!(wrap_json(json!("hello, world")).unwrap().count(), 12);
/// assert_eq!(wrap_json(json!({})).unwrap_err(), SeqErr::NotIterable { kind: "object" });
/// ```
pub fn wrap_json(value: serde_json::Value) -> SeqRes<Seq<JsonSource>> {
    Seq::try_from(value)
}
