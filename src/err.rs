use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Construction] Value of type `{kind}` does not produce an iteration cursor")]
    NotIterable { kind: &'static str },
}

impl SeqErr {
    pub(crate) fn not_iterable(kind: &'static str) -> SeqErr {
        SeqErr::NotIterable { kind }
    }

    /// 构造失败的源数据类型。
    pub fn kind(&self) -> &'static str {
        match self {
            SeqErr::NotIterable { kind } => *kind,
        }
    }
}
