#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::Var::from(stringify!($v))
    };
}

#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::Func::from(stringify!($f))
    };
}

#[macro_export]
macro_rules! c {
    ($c:literal) => {
        $crate::syntax::Const::from($c)
    };
}
