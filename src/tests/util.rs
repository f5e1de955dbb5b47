macro_rules! num {
    ($n:expr) => { crate::Expression::real($n as f64) };
}

macro_rules! var {
    ($v:ident) => { crate::Expression::variable(stringify!($v)) };
}

macro_rules! add {
    ($l:expr, $r:expr $(,)?) => { crate::Expression::add($l, $r) };
}

macro_rules! sub {
    ($l:expr, $r:expr $(,)?) => { crate::Expression::sub($l, $r) };
}

macro_rules! mul {
    ($l:expr, $r:expr $(,)?) => { crate::Expression::mul($l, $r) };
}

macro_rules! div {
    ($l:expr, $r:expr $(,)?) => { crate::Expression::div($l, $r) };
}

macro_rules! pow {
    ($b:expr, $e:expr $(,)?) => { crate::Expression::power($b, $e) };
}

macro_rules! root {
    ($r:expr) => { crate::Expression::sqrt($r) };
    ($r:expr, $d:expr $(,)?) => { crate::Expression::nth_root($r, $d) };
}

macro_rules! eq {
    ($l:expr, $r:expr $(,)?) => { crate::Expression::equal($l, $r) };
}

macro_rules! and {
    ($l:expr, $r:expr $(,)?) => { crate::Expression::and($l, $r).unwrap() };
}

/// Parses and evaluates, unwrapping a real result.
macro_rules! eval {
    ($s:expr) => { crate::parse_and_eval_real($s).unwrap() };
}

/// Asserts that two floats are within `1e-10` of each other.
macro_rules! assert_close {
    ($a:expr, $b:expr $(,)?) => { {
        let (a, b): (f64, f64) = ($a, $b);
        assert!(num_traits::Float::abs(a - b) < 1e-10, "{} is not close to {}", a, b);
    } };
}

macro_rules! kinds {
    ($s:expr) => {
        crate::latex::lexer::tokenize($s).into_iter().map(|t| t.kind).collect::<alloc::vec::Vec<_>>()
    };
}

/// Parses with default settings and returns the first parse error.
macro_rules! parse_error {
    ($s:expr) => {
        match crate::latex::parse_syntax($s, &crate::ParserSettings::default()) {
            Err(errors) => errors.first().cloned().unwrap(),
            Ok(tree) => panic!("{:?} parsed successfully to {:?}", $s, tree),
        }
    };
}
